//! Flags handed to the embedded browser component when the main screen is built.

use crate::config::WebViewConfig;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MixedContent {
    AlwaysAllow,
    NeverAllow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebViewSettings {
    pub javascript: bool,
    pub javascript_can_open_windows: bool,
    pub dom_storage: bool,
    pub database: bool,
    /// Honour HTTP caching headers
    pub http_cache: bool,
    pub zoom: bool,
    pub builtin_zoom_controls: bool,
    pub display_zoom_controls: bool,
    pub wide_viewport: bool,
    pub overview_mode: bool,
    pub file_access: bool,
    pub content_access: bool,
    pub mixed_content: MixedContent,
    pub accept_cookies: bool,
    pub accept_third_party_cookies: bool,
    pub user_agent_suffix: String,
}

impl WebViewSettings {
    pub fn from_config(config: &WebViewConfig) -> Self {
        Self {
            javascript: true,
            javascript_can_open_windows: true,
            dom_storage: true,
            database: true,
            http_cache: true,
            zoom: true,
            builtin_zoom_controls: true,
            display_zoom_controls: false,
            wide_viewport: true,
            overview_mode: true,
            file_access: true,
            content_access: true,
            mixed_content: if config.allow_mixed_content {
                MixedContent::AlwaysAllow
            } else {
                MixedContent::NeverAllow
            },
            accept_cookies: true,
            accept_third_party_cookies: true,
            user_agent_suffix: config.user_agent_suffix.trim().to_string(),
        }
    }

    /// Platform user agent with the shell's suffix appended
    pub fn user_agent(&self, base: &str) -> String {
        let base = base.trim_end();
        if base.is_empty() {
            self.user_agent_suffix.clone()
        } else {
            format!("{} {}", base, self.user_agent_suffix)
        }
    }
}
