mod commands;

use crate::commands::SettingsCommands;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use webshell::config::{LogFormat, ShellConfig};
use webshell::prefs::FileStore;
use webshell::store::ConfigStore;

/// webshell - server connection settings for the embedded web app shell
#[derive(Parser, Debug)]
#[command(name = "webshell")]
#[command(version)]
#[command(about = "Server connection settings for the embedded web app shell", long_about = None)]
struct Cli {
    /// Directory holding preference files (overrides WEBSHELL_PREFS_DIR env var)
    #[arg(long, global = true)]
    prefs_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show or change the saved server
    Settings {
        #[command(subcommand)]
        settings_command: SettingsCommands,
    },

    /// Print the URL the shell would load
    Url,

    /// Decide whether a link stays in the shell or opens externally
    Classify {
        /// Link requested by the web app
        link: String,
    },

    /// Print the embedded browser settings as JSON
    Webview,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = ShellConfig::from_env().context("failed to load configuration")?;
    if let Some(dir) = cli.prefs_dir {
        config.storage.prefs_dir = dir;
    }

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));
    match config.log.format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }

    let prefs = FileStore::open(&config.storage.prefs_dir, &config.storage.prefs_group);
    let mut store = ConfigStore::new(prefs);

    let code = match cli.command {
        Commands::Settings { settings_command } => {
            commands::run_settings(&mut store, settings_command)
        }
        Commands::Url => commands::print_url(&store),
        Commands::Classify { link } => commands::classify(&store, &link),
        Commands::Webview => commands::print_webview(&config)?,
    };

    Ok(code)
}
