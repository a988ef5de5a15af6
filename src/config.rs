mod storage;
mod webview;

pub use storage::StorageConfig;
pub use webview::WebViewConfig;

use crate::error::{AppError, AppResult};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub storage: StorageConfig,
    pub webview: WebViewConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub format: LogFormat,
}

impl ShellConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_vars<F>(var: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefs_dir = var("WEBSHELL_PREFS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let prefs_group = var("WEBSHELL_PREFS_GROUP").unwrap_or_else(|| "ShellPrefs".to_string());

        let user_agent_suffix =
            var("WEBSHELL_USER_AGENT_SUFFIX").unwrap_or_else(|| "WebShell-App".to_string());
        let allow_mixed_content = var("WEBSHELL_ALLOW_MIXED_CONTENT")
            .unwrap_or_else(|| "true".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid WEBSHELL_ALLOW_MIXED_CONTENT".to_string()))?;

        let format = match var("LOG_FORMAT")
            .unwrap_or_else(|| "pretty".to_string())
            .to_lowercase()
            .as_str()
        {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            other => {
                return Err(AppError::Configuration(format!(
                    "Invalid LOG_FORMAT: {}",
                    other
                )))
            }
        };

        let config = ShellConfig {
            storage: StorageConfig {
                prefs_dir,
                prefs_group,
            },
            webview: WebViewConfig {
                user_agent_suffix,
                allow_mixed_content,
            },
            log: LogConfig { format },
        };

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> AppResult<()> {
        self.storage.validate().map_err(AppError::Configuration)?;
        self.webview.validate().map_err(AppError::Configuration)?;
        Ok(())
    }
}
