//! Server URL derivation and reload decisions.

use crate::models::{Configuration, ResolvedEndpoint};
use tracing::{debug, info};
use url::Url;

/// Derive the URL for a configuration. No validation happens here; input was
/// validated when it was saved.
pub fn resolve(config: &Configuration) -> ResolvedEndpoint {
    ResolvedEndpoint::new(format!("http://{}:{}", config.host, config.port))
}

/// Whether the browser has to be pointed at a new URL for `current`.
pub fn has_changed(previous: Option<&ResolvedEndpoint>, current: &Configuration) -> bool {
    match previous {
        None => true,
        Some(previous) => resolve(current) != *previous,
    }
}

/// How an outbound navigation from the embedded browser is handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Stays inside the embedded browser
    Internal,
    /// Handed to the platform's default handler
    External(Url),
    /// Not a URL the platform could open
    Rejected,
}

/// Endpoint the main screen currently displays.
///
/// Once configured there is no transition back to `Unconfigured`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActiveEndpoint {
    #[default]
    Unconfigured,
    Configured(ResolvedEndpoint),
}

impl ActiveEndpoint {
    pub fn url(&self) -> Option<&ResolvedEndpoint> {
        match self {
            ActiveEndpoint::Unconfigured => None,
            ActiveEndpoint::Configured(url) => Some(url),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, ActiveEndpoint::Configured(_))
    }

    /// Apply a freshly read configuration.
    ///
    /// Returns `true` when the endpoint moved and the browser must be
    /// redirected. A configuration without a host is ignored.
    pub fn refresh(&mut self, config: &Configuration) -> bool {
        if !config.is_configured() {
            return false;
        }
        if !has_changed(self.url(), config) {
            return false;
        }

        let next = resolve(config);
        info!(
            "Active endpoint {} -> {}",
            self.url().map(|u| u.as_str()).unwrap_or("<unconfigured>"),
            next
        );
        *self = ActiveEndpoint::Configured(next);
        true
    }

    /// Decide whether `link` stays in the embedded browser.
    ///
    /// Links that start with the active URL are internal. Everything else is
    /// external, including every link while unconfigured.
    pub fn classify(&self, link: &str) -> Navigation {
        if let Some(url) = self.url() {
            if link.starts_with(url.as_str()) {
                debug!("Keeping navigation to {} in browser", link);
                return Navigation::Internal;
            }
        }

        match Url::parse(link) {
            Ok(parsed) => {
                debug!("Handing navigation to {} to the platform", parsed);
                Navigation::External(parsed)
            }
            Err(e) => {
                debug!("Rejecting navigation to {}: {}", link, e);
                Navigation::Rejected
            }
        }
    }
}
