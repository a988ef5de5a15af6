//! Settings screen controller: two inputs, Save and Cancel.

use crate::prefs::PreferenceStore;
use crate::store::ConfigStore;
use tracing::warn;

pub const SAVED_NOTICE: &str = "Configuration saved!";

/// Instruction for the platform layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEffect {
    /// Short transient message
    Notice(String),
    /// Dismiss the settings screen
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsScreen {
    pub host_input: String,
    pub port_input: String,
}

impl SettingsScreen {
    /// Open the screen with the inputs pre-filled from the saved configuration.
    pub fn open<S: PreferenceStore>(store: &ConfigStore<S>) -> Self {
        let config = store.load();
        Self {
            host_input: config.host,
            port_input: config.port,
        }
    }

    pub fn save<S: PreferenceStore>(&mut self, store: &mut ConfigStore<S>) -> Vec<SettingsEffect> {
        match store.save(&self.host_input, &self.port_input) {
            Ok(_) => vec![
                SettingsEffect::Notice(SAVED_NOTICE.to_string()),
                SettingsEffect::Close,
            ],
            Err(e) => {
                warn!("Rejected settings: {}", e);
                vec![SettingsEffect::Notice(e.advisory())]
            }
        }
    }

    pub fn cancel(&self) -> Vec<SettingsEffect> {
        vec![SettingsEffect::Close]
    }
}
