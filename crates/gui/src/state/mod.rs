pub mod controls;
pub mod guard;
pub mod history;
pub mod presentation;
pub mod profile;
pub mod selection;
pub mod session;
pub mod settings;

use shared::KnobProject;

use controls::ControlModel;
use profile::ProfileStore;
pub use session::SessionState;
pub use settings::AppSettings;

use crate::viewport::preview::PreviewViewport;

/// Panel visibility flags
pub struct PanelVisibility {
    pub scene_tree: bool,
    pub inspector: bool,
    pub profiles: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            scene_tree: true,
            inspector: true,
            profiles: true,
        }
    }
}

/// Combined application state
pub struct AppState {
    pub session: SessionState,
    pub controls: ControlModel,
    pub panels: PanelVisibility,
    pub settings: AppSettings,
    /// Show settings window
    pub show_settings_window: bool,
    /// Name typed into the profile panel
    pub profile_name_input: String,
    /// Profile highlighted in the profile panel
    pub selected_profile: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(AppSettings::load())
    }
}

impl AppState {
    /// State backed by the profile store named in `settings`
    pub fn with_settings(settings: AppSettings) -> Self {
        let store = ProfileStore::default_location(&settings.profiles.store_file_name);
        Self::with_store(settings, store)
    }

    pub fn with_store(settings: AppSettings, store: ProfileStore) -> Self {
        let session = SessionState::new(
            KnobProject::default(),
            PreviewViewport::new(),
            store,
            settings.history.max_undo_snapshots,
        );
        let mut state = Self {
            session,
            controls: ControlModel::from_params(),
            panels: PanelVisibility::default(),
            settings,
            show_settings_window: false,
            profile_name_input: String::new(),
            selected_profile: None,
        };
        state.session.refresh_ui(&mut state.controls);
        state
    }

    pub fn undo(&mut self) -> bool {
        self.session.undo_in(&mut self.controls)
    }

    pub fn redo(&mut self) -> bool {
        self.session.redo_in(&mut self.controls)
    }

    /// Once per frame, after the panels have pushed their edits
    pub fn tick(&mut self) {
        self.session.poll_tick(&mut self.controls);
    }

    /// Persist settings and push the history bound into the session
    pub fn apply_settings(&mut self) {
        self.session
            .set_history_capacity(self.settings.history.max_undo_snapshots);
        self.settings.save();
    }
}
