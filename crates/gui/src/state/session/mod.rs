//! Editing session: the project, its viewport and the undo history
//!
//! Operations are split by concern the same way the scene state is:
//! domain edits, history, named profiles and the UI bridge each live in
//! their own file as `impl SessionState` blocks.

mod edit_ops;
mod history_ops;
mod profile_ops;
mod ui_bridge;

pub use edit_ops::SessionFile;

use shared::KnobProject;

use super::guard::SuppressionCounter;
use super::history::{ProjectSnapshot, SnapshotHistory, MAX_UNDO_SNAPSHOTS};
use super::presentation::{FocusMemory, PresentationMemory};
use super::profile::{ProfileLibrary, ProfileStore};
use super::selection::SelectionState;
use crate::viewport::preview::PreviewViewport;

pub struct SessionState {
    pub project: KnobProject,
    pub viewport: PreviewViewport,
    pub selection: SelectionState,
    pub(crate) history: SnapshotHistory<ProjectSnapshot>,
    pub(crate) presentation: PresentationMemory,
    pub(crate) focus: FocusMemory,
    pub(crate) profiles: ProfileLibrary,
    pub(crate) profile_store: ProfileStore,
    /// Held while domain values are written into controls
    pub(crate) ui_refresh: SuppressionCounter,
    /// Last user-facing message (profile results, rejected edits)
    pub status: Option<String>,
    /// Monotonically increasing version for UI refresh
    pub(crate) version: u64,
    /// Version the controls were last refreshed at
    pub(crate) ui_version: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(
            KnobProject::default(),
            PreviewViewport::new(),
            ProfileStore::memory_only(),
            MAX_UNDO_SNAPSHOTS,
        )
    }
}

impl SessionState {
    /// Session over `project`. Profiles are loaded from `store`; a store
    /// that cannot be read starts empty and reports it in the status.
    pub fn new(
        project: KnobProject,
        viewport: PreviewViewport,
        store: ProfileStore,
        max_undo_snapshots: usize,
    ) -> Self {
        let (profiles, status) = match store.load_all() {
            Ok(profiles) => (ProfileLibrary::from_profiles(profiles), None),
            Err(err) => {
                tracing::warn!("Failed to load reference profiles: {err}");
                (
                    ProfileLibrary::new(),
                    Some(format!("Could not load profiles: {err}")),
                )
            }
        };
        let mut session = Self {
            project,
            viewport,
            selection: SelectionState::default(),
            history: SnapshotHistory::with_capacity(max_undo_snapshots),
            presentation: PresentationMemory::new(),
            focus: FocusMemory::new(),
            profiles,
            profile_store: store,
            ui_refresh: SuppressionCounter::new(),
            status,
            version: 0,
            ui_version: u64::MAX,
        };
        session.project.ensure_light();
        session.project.clamp_selected_light();
        session.capture_if_changed();
        session
    }

    /// Current session version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn history(&self) -> &SnapshotHistory<ProjectSnapshot> {
        &self.history
    }

    pub fn profiles(&self) -> &ProfileLibrary {
        &self.profiles
    }

    pub fn profile_store(&self) -> &ProfileStore {
        &self.profile_store
    }

    pub fn presentation(&self) -> &PresentationMemory {
        &self.presentation
    }

    /// True while controls are being written from the domain
    pub fn is_refreshing_ui(&self) -> bool {
        self.ui_refresh.is_active()
    }

    pub fn set_history_capacity(&mut self, capacity: usize) {
        self.history.set_capacity(capacity);
    }
}
