/// Embedded browser configuration
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Appended to the platform user agent so the server can recognise the shell
    pub user_agent_suffix: String,

    /// Whether content from other origins may be mixed into the page
    pub allow_mixed_content: bool,
}

impl WebViewConfig {
    /// Validate browser configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.user_agent_suffix.trim().is_empty() {
            return Err("WEBSHELL_USER_AGENT_SUFFIX must not be empty".to_string());
        }

        Ok(())
    }
}
