//! Persisted server configuration.
//!
//! `ConfigStore` owns the two preferences that identify the remote server and
//! is the only place where user input is validated before it is written.

use crate::error::{AppResult, ValidationError};
use crate::models::Configuration;
use crate::prefs::PreferenceStore;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::info;
use validator::Validate;

pub const KEY_SERVER_IP: &str = "server_ip";
pub const KEY_SERVER_PORT: &str = "server_port";
pub const DEFAULT_PORT: &str = "5173";

const IPV4_PATTERN: &str =
    r"((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";
const HOSTNAME_PATTERN: &str = r"[a-zA-Z0-9]([a-zA-Z0-9\-\.]*[a-zA-Z0-9])?";

/// Dotted-quad IPv4 address or a plain hostname, anchored on both ends.
static HOST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?:{})$|^(?:{})$",
        IPV4_PATTERN, HOSTNAME_PATTERN
    ))
    .expect("host pattern is a valid regex")
});

/// Trimmed settings-screen input, ready for validation
#[derive(Debug, Validate)]
struct ServerAddress {
    #[validate(regex(path = *HOST_PATTERN))]
    host: String,

    /// `None` when the port text is not a 32-bit integer
    #[validate(range(min = 1, max = 65535))]
    port: Option<i32>,
}

impl ServerAddress {
    fn new(host: &str, port: &str) -> Self {
        Self {
            host: host.to_string(),
            port: port.parse().ok(),
        }
    }

    /// Map validator output onto the first failing rule, host before port.
    fn check(&self) -> Result<(), ValidationError> {
        if let Err(errors) = self.validate() {
            let fields = errors.field_errors();
            if fields.contains_key("host") {
                return Err(ValidationError::InvalidHost);
            }
            if fields.contains_key("port") {
                return Err(ValidationError::PortOutOfRange);
            }
        }

        if self.port.is_none() {
            return Err(ValidationError::InvalidPort);
        }

        Ok(())
    }
}

/// Strip ASCII control characters and spaces from both ends. Other Unicode
/// whitespace is kept and rejected by the host pattern.
fn trim_input(input: &str) -> &str {
    input.trim_matches(|c: char| c <= ' ')
}

/// Validate raw host/port input and produce the configuration that would be
/// persisted. Both values are trimmed; an empty port becomes [`DEFAULT_PORT`].
pub fn validate_input(host: &str, port: &str) -> Result<Configuration, ValidationError> {
    let host = trim_input(host);
    let port = trim_input(port);

    if host.is_empty() {
        return Err(ValidationError::EmptyHost);
    }

    let port = if port.is_empty() { DEFAULT_PORT } else { port };

    ServerAddress::new(host, port).check()?;

    Ok(Configuration::new(host, port))
}

/// Server configuration backed by a preference group
#[derive(Debug, Clone)]
pub struct ConfigStore<S> {
    prefs: S,
}

impl<S: PreferenceStore> ConfigStore<S> {
    pub fn new(prefs: S) -> Self {
        Self { prefs }
    }

    /// Read the persisted configuration, falling back to an empty host and
    /// the default port.
    pub fn load(&self) -> Configuration {
        Configuration {
            host: self.prefs.get(KEY_SERVER_IP).unwrap_or_default(),
            port: self
                .prefs
                .get(KEY_SERVER_PORT)
                .unwrap_or_else(|| DEFAULT_PORT.to_string()),
        }
    }

    /// Validate and persist a host/port pair.
    ///
    /// Both keys are committed in a single batch before this returns.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for rejected input and
    /// `AppError::Storage` when the preference group cannot be written.
    pub fn save(&mut self, host: &str, port: &str) -> AppResult<Configuration> {
        let config = validate_input(host, port)?;

        let mut changes = BTreeMap::new();
        changes.insert(KEY_SERVER_IP.to_string(), config.host.clone());
        changes.insert(KEY_SERVER_PORT.to_string(), config.port.clone());
        self.prefs.write(&changes)?;

        info!("Saved server configuration {}:{}", config.host, config.port);
        Ok(config)
    }
}
