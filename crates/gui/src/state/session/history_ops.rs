//! Change detection and undo/redo

use super::SessionState;
use crate::state::history::{apply_snapshot, ProjectSnapshot};

impl SessionState {
    /// Snapshot of the live state
    pub fn capture_snapshot(&self) -> ProjectSnapshot {
        ProjectSnapshot::capture(&self.project, &self.viewport, &self.selection)
    }

    /// Entry point for every domain mutation. Returns true if a new undo
    /// entry was recorded.
    pub fn notify_project_state_changed(&mut self) -> bool {
        self.version += 1;
        self.capture_if_changed()
    }

    /// Record the live state unless a snapshot is being applied or nothing
    /// changed since the last record.
    pub fn capture_if_changed(&mut self) -> bool {
        if self.history.is_applying() {
            return false;
        }
        let snapshot = self.capture_snapshot();
        self.history.record(snapshot)
    }

    /// Undo last change. No-op on an empty stack.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        let live = self.capture_snapshot();
        let Some(target) = self.history.take_undo(live) else {
            return false;
        };
        self.apply(&target);
        true
    }

    /// Redo last undone change. No-op on an empty stack.
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        let live = self.capture_snapshot();
        let Some(target) = self.history.take_redo(live) else {
            return false;
        };
        self.apply(&target);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn apply(&mut self, snapshot: &ProjectSnapshot) {
        {
            let _applying = self.history.begin_apply();
            apply_snapshot(
                snapshot,
                &mut self.project,
                &mut self.viewport,
                &mut self.selection,
            );
            // Writes above would normally trigger the change detector
            self.capture_if_changed();
        }
        // Re-capture so clamps made while applying become the current state
        let settled = self.capture_snapshot();
        self.history.set_current(settled);
        self.version += 1;
    }
}
