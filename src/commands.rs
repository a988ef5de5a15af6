//! Command-line front end.
//!
//! Each command drives the same screen controllers a graphical shell would,
//! printing effects instead of rendering them.

use clap::Subcommand;
use std::process::ExitCode;
use webshell::config::ShellConfig;
use webshell::error::AppResult;
use webshell::prefs::PreferenceStore;
use webshell::resolver::Navigation;
use webshell::settings::{SettingsEffect, SettingsScreen};
use webshell::shell::{Content, Effect, MainScreen};
use webshell::store::ConfigStore;
use webshell::webview::WebViewSettings;

/// Settings commands available via CLI.
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show the saved host and port
    Show,

    /// Validate and save a host and port
    Save {
        /// Server IP address or hostname
        #[arg(long)]
        host: String,

        /// Server port (defaults to 5173 when empty)
        #[arg(long, default_value = "")]
        port: String,
    },
}

pub fn run_settings<S: PreferenceStore>(
    store: &mut ConfigStore<S>,
    command: SettingsCommands,
) -> ExitCode {
    match command {
        SettingsCommands::Show => {
            let screen = SettingsScreen::open(store);
            println!("host: {}", screen.host_input);
            println!("port: {}", screen.port_input);
            ExitCode::SUCCESS
        }
        SettingsCommands::Save { host, port } => {
            let mut screen = SettingsScreen::open(store);
            screen.host_input = host;
            screen.port_input = port;

            let mut closed = false;
            for effect in screen.save(store) {
                match effect {
                    SettingsEffect::Notice(message) => eprintln!("{}", message),
                    SettingsEffect::Close => closed = true,
                }
            }

            if closed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

pub fn print_url<S: PreferenceStore>(store: &ConfigStore<S>) -> ExitCode {
    let mut screen = MainScreen::new();
    let effects = screen.create(store);

    if let Some(url) = effects.iter().find_map(|e| match e {
        Effect::LoadUrl(url) => Some(url),
        _ => None,
    }) {
        println!("{}", url);
        return ExitCode::SUCCESS;
    }

    if let Content::Error(message) = &screen.view().content {
        eprintln!("{}", message);
    }
    ExitCode::FAILURE
}

pub fn classify<S: PreferenceStore>(store: &ConfigStore<S>, link: &str) -> ExitCode {
    let mut screen = MainScreen::new();
    screen.create(store);

    match screen.active().classify(link) {
        Navigation::Internal => println!("internal"),
        Navigation::External(url) => println!("external {}", url),
        Navigation::Rejected => {
            println!("rejected");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

pub fn print_webview(config: &ShellConfig) -> AppResult<ExitCode> {
    let settings = WebViewSettings::from_config(&config.webview);
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(ExitCode::SUCCESS)
}
