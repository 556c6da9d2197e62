//! Headless test harness for driving an editing session.
//!
//! Edits go through the same control model the inspector uses, so the
//! refresh guard, presentation memory and focus restore are exercised the
//! way they are in the desktop shell. The clock is simulated for the
//! destructive-action confirmation window.

use std::time::{Duration, Instant};

use shared::KnobProject;

use crate::params::ParamValue;
use crate::state::controls::ControlModel;
use crate::state::history::SceneSelectionSnapshot;
use crate::state::presentation::ControlSurface;
use crate::state::profile::{ProfileAction, ProfileError, ProfileStore};
use crate::state::session::{SessionFile, SessionState};
use crate::viewport::preview::PreviewViewport;

/// Headless test harness: session, control model and a manual clock
pub struct TestHarness {
    pub session: SessionState,
    pub controls: ControlModel,
    clock: Instant,
}

impl TestHarness {
    /// Harness over the default project with an in-memory profile store
    pub fn new() -> Self {
        Self::with_project(KnobProject::default())
    }

    pub fn with_project(project: KnobProject) -> Self {
        Self::with_store(project, ProfileStore::memory_only())
    }

    pub fn with_store(project: KnobProject, store: ProfileStore) -> Self {
        let session = SessionState::new(
            project,
            PreviewViewport::new(),
            store,
            crate::state::history::MAX_UNDO_SNAPSHOTS,
        );
        let mut harness = Self {
            session,
            controls: ControlModel::from_params(),
            clock: Instant::now(),
        };
        harness.session.refresh_ui(&mut harness.controls);
        harness
    }

    // ── Parameters ────────────────────────────────────────────

    /// Type a value into a control and let one UI tick pass
    pub fn edit(&mut self, key: &str, value: impl Into<ParamValue>) {
        self.controls.edit(key, value.into());
        self.tick();
    }

    /// Set a parameter directly on the session (reports validation errors)
    pub fn set(&mut self, key: &str, value: impl Into<ParamValue>) -> Result<bool, String> {
        let changed = self.session.set_param(key, &value.into())?;
        self.tick();
        Ok(changed)
    }

    pub fn get(&self, key: &str) -> Option<ParamValue> {
        crate::params::get_param(&self.session.project, key)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            ParamValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Value currently shown by the control
    pub fn control_value(&self, key: &str) -> Option<&ParamValue> {
        self.controls.value(key)
    }

    // ── History ───────────────────────────────────────────────

    pub fn undo(&mut self) -> bool {
        let changed = self.session.undo_in(&mut self.controls);
        self.tick();
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.session.redo_in(&mut self.controls);
        self.tick();
        changed
    }

    pub fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.session.can_redo()
    }

    pub fn undo_len(&self) -> usize {
        self.session.history().undo_len()
    }

    pub fn redo_len(&self) -> usize {
        self.session.history().redo_len()
    }

    // ── Scene ─────────────────────────────────────────────────

    pub fn add_light(&mut self) -> usize {
        let index = self.session.add_light();
        self.tick();
        index
    }

    pub fn remove_light(&mut self, index: usize) -> Result<(), String> {
        let result = self.session.remove_light(index);
        self.tick();
        result
    }

    pub fn select_light(&mut self, index: usize) -> Result<(), String> {
        let result = self.session.select_light(index);
        self.tick();
        result
    }

    pub fn light_count(&self) -> usize {
        self.session.project.lights.len()
    }

    pub fn add_collar(&mut self) -> bool {
        let added = self.session.add_collar();
        self.tick();
        added
    }

    pub fn remove_collar(&mut self) -> bool {
        let removed = self.session.remove_collar();
        self.tick();
        removed
    }

    pub fn has_collar(&self) -> bool {
        self.session.project.scene.collar().is_some()
    }

    pub fn select(&mut self, target: SceneSelectionSnapshot) -> bool {
        let found = self.session.select(target);
        self.tick();
        found
    }

    /// Selection as a lookup key
    pub fn selection(&self) -> SceneSelectionSnapshot {
        SceneSelectionSnapshot::capture(&self.session.selection, &self.session.project)
    }

    pub fn paint(&mut self, position: [f32; 2], radius: f32) -> u64 {
        let revision = self.session.paint_stroke(position, radius);
        self.tick();
        revision
    }

    // ── Profiles ──────────────────────────────────────────────

    pub fn save_profile(&mut self, name: &str) -> Result<ProfileAction, ProfileError> {
        self.session.save_profile(name)
    }

    pub fn apply_profile(&mut self, name: &str) -> Result<(), ProfileError> {
        let result = self.session.apply_profile_in(&mut self.controls, name);
        self.tick();
        result
    }

    pub fn overwrite_profile(&mut self, name: &str) -> Result<ProfileAction, ProfileError> {
        self.session.overwrite_profile(name, self.clock)
    }

    pub fn rename_profile(&mut self, from: &str, to: &str) -> Result<ProfileAction, ProfileError> {
        self.session.rename_profile(from, to)
    }

    pub fn duplicate_profile(
        &mut self,
        from: &str,
        to: &str,
    ) -> Result<ProfileAction, ProfileError> {
        self.session.duplicate_profile(from, to)
    }

    pub fn delete_profile(&mut self, name: &str) -> Result<ProfileAction, ProfileError> {
        self.session.delete_profile(name, self.clock)
    }

    pub fn profile_names(&self) -> Vec<String> {
        self.session.profiles().names()
    }

    /// Move the simulated clock forward
    pub fn advance_clock(&mut self, by: Duration) {
        self.clock += by;
    }

    pub fn now(&self) -> Instant {
        self.clock
    }

    // ── UI ────────────────────────────────────────────────────

    /// One UI tick: pending focus, queued edits, control refresh
    pub fn tick(&mut self) {
        self.session.poll_tick(&mut self.controls);
    }

    pub fn focused_control(&self) -> Option<String> {
        self.controls.focused_control().map(|f| f.name)
    }

    pub fn status(&self) -> Option<&str> {
        self.session.status.as_deref()
    }

    // ── Persistence ───────────────────────────────────────────

    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(&self.session.export_state()).unwrap_or_default()
    }

    /// Load a session (replaces the current one and clears history)
    pub fn load_json(&mut self, json: &str) -> Result<(), String> {
        let file: SessionFile =
            serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;
        self.session.import_state(file)?;
        self.tick();
        Ok(())
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_harness_has_default_knob() {
        let h = TestHarness::new();
        assert_eq!(h.number("model.radius"), Some(220.0));
        assert_eq!(h.light_count(), 1);
        assert!(!h.can_undo());
    }

    #[test]
    fn test_edit_and_undo_redo_cycle() {
        let mut h = TestHarness::new();
        h.edit("model.radius", 300.0);
        assert_eq!(h.number("model.radius"), Some(300.0));
        assert!(h.undo());
        assert_eq!(h.number("model.radius"), Some(220.0));
        assert_eq!(h.control_value("model.radius"), Some(&ParamValue::Number(220.0)));
        assert!(h.redo());
        assert_eq!(h.number("model.radius"), Some(300.0));
    }

    #[test]
    fn test_load_export_json() {
        let mut h = TestHarness::new();
        h.edit("model.height", 150.0);
        h.add_collar();
        let json = h.export_json();

        let mut h2 = TestHarness::new();
        h2.load_json(&json).unwrap();
        assert_eq!(h2.number("model.height"), Some(150.0));
        assert!(h2.has_collar());
        assert!(!h2.can_undo());
    }

    #[test]
    fn test_clock_drives_confirmation() {
        let mut h = TestHarness::new();
        h.save_profile("Chrome").unwrap();
        assert!(!h.delete_profile("Chrome").unwrap().is_mutation());
        h.advance_clock(Duration::from_secs(9));
        assert!(!h.delete_profile("Chrome").unwrap().is_mutation());
        h.advance_clock(Duration::from_secs(1));
        assert!(h.delete_profile("Chrome").unwrap().is_mutation());
        assert!(h.profile_names().is_empty());
    }
}
