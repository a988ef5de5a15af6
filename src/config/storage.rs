use std::path::PathBuf;

/// Preference storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding preference group files
    pub prefs_dir: PathBuf,

    /// Name of the preference group holding the server configuration
    pub prefs_group: String,
}

impl StorageConfig {
    /// Validate storage configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.prefs_group.is_empty() {
            return Err("WEBSHELL_PREFS_GROUP must not be empty".to_string());
        }

        let plain = self
            .prefs_group
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !plain {
            return Err(
                "WEBSHELL_PREFS_GROUP may only contain letters, digits, '_' and '-'".to_string(),
            );
        }

        Ok(())
    }
}
