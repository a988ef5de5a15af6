use serde::{Deserialize, Serialize};
use std::fmt;

/// Persisted host/port pair identifying the remote server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub host: String,
    pub port: String,
}

impl Configuration {
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }

    /// A configuration without a host has never been saved.
    pub fn is_configured(&self) -> bool {
        !self.host.is_empty()
    }
}

/// URL the embedded browser is pointed at, always derived from a [`Configuration`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResolvedEndpoint(String);

impl ResolvedEndpoint {
    pub(crate) fn new(url: String) -> Self {
        Self(url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResolvedEndpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
