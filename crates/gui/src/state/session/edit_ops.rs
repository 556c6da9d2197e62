//! Domain edits. Each mutation ends in `notify_project_state_changed`.

use serde::{Deserialize, Serialize};
use shared::KnobProject;

use super::SessionState;
use crate::params::{self, ParamValue};
use crate::state::history::SceneSelectionSnapshot;
use crate::viewport::host::ViewportHost;

/// Project plus the viewport's opaque paint state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionFile {
    pub project: KnobProject,
    #[serde(default)]
    pub viewport: serde_json::Value,
}

impl SessionState {
    /// Apply a parameter edit coming from a control or a command.
    /// Ignored while controls are being refreshed from the domain.
    pub fn set_param(&mut self, key: &str, value: &ParamValue) -> Result<bool, String> {
        if self.ui_refresh.is_active() {
            tracing::trace!("Dropped echo edit of {key} during UI refresh");
            return Ok(false);
        }
        let changed = params::set_param(&mut self.project, key, value)?;
        if changed {
            self.viewport.invalidate_gpu();
            self.notify_project_state_changed();
        }
        Ok(changed)
    }

    /// Select a scene-tree entry. Selection alone is not an undo step; it
    /// is carried by the next recorded snapshot.
    pub fn select(&mut self, target: SceneSelectionSnapshot) -> bool {
        if let SceneSelectionSnapshot::Light { index } = target {
            if index >= self.project.lights.len() {
                return false;
            }
            self.project.set_selected_light_index(index);
        }
        target.resolve(&self.project, &mut self.selection);
        self.version += 1;
        self.selection.target().is_some()
    }

    /// Make light `index` the one the inspector edits
    pub fn select_light(&mut self, index: usize) -> Result<(), String> {
        if index >= self.project.lights.len() {
            return Err(format!(
                "Light index {index} out of range ({} lights)",
                self.project.lights.len()
            ));
        }
        self.select(SceneSelectionSnapshot::Light { index });
        Ok(())
    }

    pub fn add_light(&mut self) -> usize {
        let index = self.project.add_light();
        SceneSelectionSnapshot::Light { index }.resolve(&self.project, &mut self.selection);
        self.viewport.invalidate_gpu();
        self.notify_project_state_changed();
        index
    }

    /// Remove a light. The last remaining light cannot be removed.
    pub fn remove_light(&mut self, index: usize) -> Result<(), String> {
        if index >= self.project.lights.len() {
            return Err(format!("Light index {index} out of range"));
        }
        let was_selected = SceneSelectionSnapshot::capture(&self.selection, &self.project);
        if !self.project.remove_light(index) {
            return Err("Cannot remove the last light".to_string());
        }
        if matches!(was_selected, SceneSelectionSnapshot::Light { .. }) {
            SceneSelectionSnapshot::Light {
                index: self.project.selected_light_index,
            }
            .resolve(&self.project, &mut self.selection);
        }
        self.viewport.invalidate_gpu();
        self.notify_project_state_changed();
        Ok(())
    }

    /// Add a collar with default parameters. Returns false if one exists.
    pub fn add_collar(&mut self) -> bool {
        if self.project.scene.collar().is_some() {
            return false;
        }
        self.project.scene.ensure_collar();
        SceneSelectionSnapshot::Collar.resolve(&self.project, &mut self.selection);
        self.viewport.invalidate_gpu();
        self.notify_project_state_changed();
        true
    }

    pub fn remove_collar(&mut self) -> bool {
        let selected = SceneSelectionSnapshot::capture(&self.selection, &self.project);
        if !self.project.scene.remove_collar() {
            return false;
        }
        if selected == SceneSelectionSnapshot::Collar {
            SceneSelectionSnapshot::Model.resolve(&self.project, &mut self.selection);
        }
        self.viewport.invalidate_gpu();
        self.notify_project_state_changed();
        true
    }

    /// Paint on the active layer with the current brush channel
    pub fn paint_stroke(&mut self, position: [f32; 2], radius: f32) -> u64 {
        let channel = self.project.brush.channel;
        let revision = self.viewport.paint_stroke(channel, position, radius);
        self.notify_project_state_changed();
        revision
    }

    pub fn set_active_paint_layer(&mut self, index: usize) -> bool {
        if !self.viewport.set_active_paint_layer_index(index) {
            return false;
        }
        self.notify_project_state_changed();
        true
    }

    /// Start over with `project`; history and selection are discarded
    pub fn replace_project(&mut self, mut project: KnobProject) {
        project.ensure_light();
        project.clamp_selected_light();
        self.project = project;
        self.selection.clear();
        self.history.reset();
        self.viewport.invalidate_gpu();
        self.version += 1;
        self.capture_if_changed();
    }

    pub fn export_state(&self) -> SessionFile {
        SessionFile {
            project: self.project.clone(),
            viewport: self.viewport.export_state(),
        }
    }

    /// Load a saved session. The viewport state is validated first so a bad
    /// file leaves the session untouched.
    pub fn import_state(&mut self, file: SessionFile) -> Result<(), String> {
        if !file.viewport.is_null() {
            self.viewport.import_state(&file.viewport)?;
        }
        self.replace_project(file.project);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::selection::SelectionTarget;

    #[test]
    fn test_select_light_updates_index_without_recording() {
        let mut s = SessionState::default();
        s.add_light();
        let undo = s.history().undo_len();
        s.select_light(0).unwrap();
        assert_eq!(s.project.selected_light_index, 0);
        assert_eq!(s.history().undo_len(), undo);
        assert!(s.select_light(9).is_err());
    }

    #[test]
    fn test_remove_last_light_rejected() {
        let mut s = SessionState::default();
        assert!(s.remove_light(0).is_err());
        assert_eq!(s.project.lights.len(), 1);
    }

    #[test]
    fn test_add_and_undo_collar() {
        let mut s = SessionState::default();
        assert!(s.add_collar());
        assert!(!s.add_collar());
        let collar_id = s.project.scene.collar().unwrap().id.clone();
        assert_eq!(
            s.selection.target(),
            Some(&SelectionTarget::Node(collar_id))
        );
        s.undo();
        assert!(s.project.scene.collar().is_none());
        assert!(s.selection.target().is_none());
    }

    #[test]
    fn test_remove_selected_collar_selects_model() {
        let mut s = SessionState::default();
        s.add_collar();
        assert!(s.remove_collar());
        let model_id = s.project.scene.model().unwrap().id.clone();
        assert!(s.selection.is_selected(&model_id));
    }

    #[test]
    fn test_echo_edits_dropped_while_refreshing() {
        let mut s = SessionState::default();
        let _refreshing = s.ui_refresh.enter();
        assert_eq!(s.set_param("model.radius", &ParamValue::Number(300.0)), Ok(false));
        assert_eq!(s.project.scene.model().unwrap().params.radius, 220.0);
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut s = SessionState::default();
        s.set_param("model.radius", &ParamValue::Number(280.0)).unwrap();
        s.paint_stroke([0.1, 0.2], 4.0);
        let file = s.export_state();

        let mut other = SessionState::default();
        other.import_state(file).unwrap();
        assert_eq!(other.project.scene.model().unwrap().params.radius, 280.0);
        assert_eq!(other.viewport.applied_strokes().len(), 1);
        assert!(!other.can_undo());
    }
}
