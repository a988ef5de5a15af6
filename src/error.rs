use thiserror::Error;

/// Reasons a host/port pair entered on the settings screen is rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Server host is empty")]
    EmptyHost,

    #[error("Server host is not a valid IP address or hostname")]
    InvalidHost,

    #[error("Server port is not a number")]
    InvalidPort,

    #[error("Server port is outside 1-65535")]
    PortOutOfRange,
}

impl ValidationError {
    /// Short message shown to the user for this failure
    pub fn advisory(&self) -> &'static str {
        match self {
            ValidationError::EmptyHost => "Please enter the server IP address",
            ValidationError::InvalidHost => "Please enter a valid IP address or hostname",
            ValidationError::InvalidPort => "Invalid port number",
            ValidationError::PortOutOfRange => "Port must be between 1 and 65535",
        }
    }
}

/// Preference storage failures
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Preference file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preference serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Server not configured")]
    NotConfigured,

    #[error("Cannot load {url}")]
    LoadFailed { url: String },

    #[error("File chooser could not be launched")]
    FileChooserUnavailable,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Convert the error into the advisory text rendered by the UI layer.
    ///
    /// Every kind is recoverable; internal failures are logged and collapsed
    /// into a generic message.
    pub fn advisory(&self) -> String {
        match self {
            AppError::Validation(e) => e.advisory().to_string(),
            AppError::NotConfigured => {
                "Server not configured.\nPlease set the server IP address.".to_string()
            }
            AppError::LoadFailed { url } => format!(
                "Cannot connect to server.\n\nMake sure:\n\u{2022} Server is running\n\u{2022} IP address is correct\n\u{2022} You're on the same network\n\nServer: {}",
                url
            ),
            AppError::FileChooserUnavailable => "Cannot open file chooser".to_string(),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                "Could not save settings".to_string()
            }
            _ => {
                tracing::error!("Internal error: {}", self);
                "An internal error occurred".to_string()
            }
        }
    }
}

/// Result type alias for AppResult
pub type AppResult<T> = Result<T, AppError>;
