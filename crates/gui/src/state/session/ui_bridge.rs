//! Keeping the controls in step with the project

use shared::CollarPreset;

use super::SessionState;
use crate::params::{all_params, InspectorTab};
use crate::state::presentation::ControlSurface;
use crate::state::profile::ProfileError;

impl SessionState {
    /// Write every parameter into its control. Edits the controls echo
    /// back are drained while the refresh guard is still held, so they
    /// never reach the domain.
    pub fn refresh_ui(&mut self, surface: &mut dyn ControlSurface) {
        let _refreshing = self.ui_refresh.enter();
        let imported_mesh = self
            .project
            .scene
            .collar()
            .is_some_and(|c| c.params.preset == CollarPreset::ImportedMesh);

        for spec in all_params() {
            let value = (spec.get)(&self.project);
            surface.set_value(spec.key, value.as_ref());
            if spec.tab == InspectorTab::Collar && spec.section == "Imported Mesh" {
                surface.set_visible(spec.key, imported_mesh);
            }
        }

        let echoes = surface.take_pending_edits();
        if !echoes.is_empty() {
            tracing::trace!("Dropped {} echo edits from UI refresh", echoes.len());
        }
        self.ui_version = self.version;
    }

    /// Run a state-replacing action with scroll, sections and focus kept
    /// in place. Focus comes back on the next `poll_tick`.
    pub fn run_preserving_presentation(
        &mut self,
        surface: &mut dyn ControlSurface,
        action: impl FnOnce(&mut Self) -> bool,
    ) -> bool {
        self.presentation.capture(surface);
        self.focus.capture(surface);
        let changed = action(self);
        if changed {
            self.refresh_ui(surface);
            self.presentation.restore(surface);
            self.focus.schedule_restore();
        }
        changed
    }

    pub fn undo_in(&mut self, surface: &mut dyn ControlSurface) -> bool {
        self.run_preserving_presentation(surface, Self::undo)
    }

    pub fn redo_in(&mut self, surface: &mut dyn ControlSurface) -> bool {
        self.run_preserving_presentation(surface, Self::redo)
    }

    pub fn apply_profile_in(
        &mut self,
        surface: &mut dyn ControlSurface,
        name: &str,
    ) -> Result<(), ProfileError> {
        let mut outcome = Ok(());
        self.run_preserving_presentation(surface, |session| {
            outcome = session.apply_profile(name);
            outcome.is_ok()
        });
        outcome
    }

    /// One UI tick: restore focus queued by the previous refresh, apply user
    /// edits, then refresh controls if the project moved. Returns the number
    /// of edits that changed the project.
    pub fn poll_tick(&mut self, surface: &mut dyn ControlSurface) -> usize {
        self.focus.restore_pending(surface);

        let mut applied = 0;
        for (key, value) in surface.take_pending_edits() {
            match self.set_param(&key, &value) {
                Ok(true) => applied += 1,
                Ok(false) => {}
                Err(err) => {
                    tracing::warn!("Rejected edit of {key}: {err}");
                    self.status = Some(err);
                }
            }
        }

        if self.ui_version != self.version {
            self.refresh_ui(surface);
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;
    use crate::state::controls::ControlModel;

    #[test]
    fn test_refresh_fills_controls_and_drops_echoes() {
        let mut s = SessionState::default();
        let mut controls = ControlModel::from_params();
        s.refresh_ui(&mut controls);
        assert_eq!(
            controls.value("model.radius"),
            Some(&ParamValue::Number(220.0))
        );
        assert!(!controls.is_enabled("collar.tail_taper"));
        assert!(!s.can_undo());
        assert!(controls.take_pending_edits().is_empty());
    }

    #[test]
    fn test_user_edit_applied_on_tick() {
        let mut s = SessionState::default();
        let mut controls = ControlModel::from_params();
        s.refresh_ui(&mut controls);
        controls.edit("model.radius", ParamValue::Number(300.0));
        assert_eq!(s.poll_tick(&mut controls), 1);
        assert_eq!(s.project.scene.model().unwrap().params.radius, 300.0);
        assert_eq!(s.history().undo_len(), 1);
    }

    #[test]
    fn test_clamped_edit_written_back_without_new_entry() {
        let mut s = SessionState::default();
        let mut controls = ControlModel::from_params();
        s.refresh_ui(&mut controls);
        controls.edit("material.metallic", ParamValue::Number(4.0));
        s.poll_tick(&mut controls);
        assert_eq!(controls.value("material.metallic"), Some(&ParamValue::Number(1.0)));
        assert_eq!(s.history().undo_len(), 1);
    }

    #[test]
    fn test_undo_keeps_scroll_and_focus() {
        let mut s = SessionState::default();
        let mut controls = ControlModel::from_params();
        s.refresh_ui(&mut controls);
        controls.edit("model.radius", ParamValue::Number(300.0));
        s.poll_tick(&mut controls);

        controls.scroll_to("model", 64.0);
        controls.focus("model.radius", None);
        assert!(s.undo_in(&mut controls));
        assert_eq!(controls.value("model.radius"), Some(&ParamValue::Number(220.0)));
        assert_eq!(controls.scroll_offset("model"), Some(64.0));

        controls.clear_focus();
        s.poll_tick(&mut controls);
        assert_eq!(
            controls.focused_control().map(|f| f.name),
            Some("model.radius".to_string())
        );
    }

    #[test]
    fn test_imported_mesh_controls_follow_preset() {
        let mut s = SessionState::default();
        let mut controls = ControlModel::from_params();
        s.add_collar();
        s.refresh_ui(&mut controls);
        assert!(!controls.is_visible("collar.imported_scale"));
        s.set_param("collar.preset", &ParamValue::Text("ImportedMesh".into()))
            .unwrap();
        s.poll_tick(&mut controls);
        assert!(controls.is_visible("collar.imported_scale"));
    }
}
