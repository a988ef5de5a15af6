//! Main screen controller.
//!
//! The platform layer forwards user actions and browser lifecycle callbacks
//! here and executes the returned [`Effect`]s. The controller never talks to
//! the browser component directly.

use crate::error::AppError;
use crate::models::ResolvedEndpoint;
use crate::prefs::PreferenceStore;
use crate::resolver::{ActiveEndpoint, Navigation};
use crate::store::ConfigStore;
use tracing::{info, warn};
use url::Url;

/// Instruction for the platform layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Point the embedded browser at the endpoint
    LoadUrl(ResolvedEndpoint),
    /// Reload the current page
    Reload,
    /// Step back in the browser history
    GoBack,
    /// Leave the main screen
    Exit,
    /// Open a link with the platform's default handler
    OpenExternal(Url),
    /// Show the settings screen
    OpenSettings,
    /// Ask the platform to pick a file for an upload form
    OpenFileChooser,
}

/// What occupies the main area of the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Browser,
    /// Advisory panel with Retry and Settings actions
    Error(String),
}

/// Rendered state of the main screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainView {
    pub progress_visible: bool,
    pub progress: u8,
    pub content: Content,
}

impl Default for MainView {
    fn default() -> Self {
        Self {
            progress_visible: false,
            progress: 0,
            content: Content::Browser,
        }
    }
}

#[derive(Debug, Default)]
pub struct MainScreen {
    active: ActiveEndpoint,
    view: MainView,
    /// The browser is waiting for a file chooser result
    file_chooser_pending: bool,
}

impl MainScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &MainView {
        &self.view
    }

    pub fn active(&self) -> &ActiveEndpoint {
        &self.active
    }

    /// First activation: read the configuration and start loading, or ask for
    /// settings when nothing has been saved yet.
    pub fn create<S: PreferenceStore>(&mut self, store: &ConfigStore<S>) -> Vec<Effect> {
        let config = store.load();
        let mut effects = Vec::new();

        if config.is_configured() {
            self.active.refresh(&config);
        } else {
            info!("No server configured, opening settings");
            effects.push(Effect::OpenSettings);
        }

        effects.extend(self.load_web_app());
        effects
    }

    /// Re-activation (e.g. returning from settings). Reloads only when the
    /// saved endpoint differs from the one being shown.
    pub fn resume<S: PreferenceStore>(&mut self, store: &ConfigStore<S>) -> Vec<Effect> {
        let config = store.load();
        if self.active.refresh(&config) {
            self.load_web_app()
        } else {
            Vec::new()
        }
    }

    pub fn retry(&mut self) -> Vec<Effect> {
        self.load_web_app()
    }

    pub fn open_settings(&self) -> Vec<Effect> {
        vec![Effect::OpenSettings]
    }

    /// Pull-to-refresh
    pub fn refresh(&self) -> Vec<Effect> {
        vec![Effect::Reload]
    }

    pub fn back_pressed(&self, can_go_back: bool) -> Effect {
        if can_go_back {
            Effect::GoBack
        } else {
            Effect::Exit
        }
    }

    pub fn page_started(&mut self) {
        self.view.progress_visible = true;
        self.view.content = Content::Browser;
    }

    pub fn progress_changed(&mut self, progress: u8) {
        self.view.progress = progress.min(100);
    }

    pub fn page_finished(&mut self) {
        self.view.progress_visible = false;
    }

    /// Browser could not load a resource. Only main-frame failures replace
    /// the page with the connection advisory.
    pub fn load_failed(&mut self, main_frame: bool, description: &str) {
        if !main_frame {
            warn!("Sub-resource failed to load: {}", description);
            return;
        }

        let error = match self.active.url() {
            Some(url) => AppError::LoadFailed {
                url: url.to_string(),
            },
            None => AppError::NotConfigured,
        };
        warn!("Main frame failed to load: {} ({})", error, description);

        self.view.progress_visible = false;
        self.view.content = Content::Error(error.advisory());
    }

    pub fn file_chooser_pending(&self) -> bool {
        self.file_chooser_pending
    }

    /// The page asked for a file. A newer request replaces a pending one.
    pub fn file_chooser_requested(&mut self) -> Vec<Effect> {
        self.file_chooser_pending = true;
        vec![Effect::OpenFileChooser]
    }

    /// The platform chooser returned.
    ///
    /// Returns `None` when no request is pending; the result is dropped.
    /// Otherwise returns what the browser receives: the picked file when the
    /// chooser succeeded with data, nothing when it was cancelled.
    pub fn file_chooser_result(&mut self, ok: bool, data: Option<&str>) -> Option<Vec<Url>> {
        if !self.file_chooser_pending {
            warn!("Dropping file chooser result without a pending request");
            return None;
        }
        self.file_chooser_pending = false;

        let picked = match data {
            Some(data) if ok => match Url::parse(data) {
                Ok(url) => vec![url],
                Err(e) => {
                    warn!("Chooser returned unusable data {}: {}", data, e);
                    Vec::new()
                }
            },
            _ => Vec::new(),
        };
        Some(picked)
    }

    /// The platform chooser could not be launched. Clears the pending request
    /// and returns the notice to show.
    pub fn file_chooser_failed(&mut self) -> String {
        self.file_chooser_pending = false;
        let error = AppError::FileChooserUnavailable;
        warn!("{}", error);
        error.advisory()
    }

    pub fn navigation_requested(&self, link: &str) -> Vec<Effect> {
        match self.active.classify(link) {
            Navigation::Internal => Vec::new(),
            Navigation::External(url) => vec![Effect::OpenExternal(url)],
            Navigation::Rejected => {
                warn!("Ignoring navigation to unparsable link {}", link);
                Vec::new()
            }
        }
    }

    fn load_web_app(&mut self) -> Vec<Effect> {
        match self.active.url() {
            None => {
                self.view.content = Content::Error(AppError::NotConfigured.advisory());
                Vec::new()
            }
            Some(url) => {
                self.view.content = Content::Browser;
                vec![Effect::LoadUrl(url.clone())]
            }
        }
    }
}
