//! Writing a snapshot back into the live objects

use shared::KnobProject;

use super::snapshot::{restore_lights, ProjectSnapshot};
use crate::state::profile::apply_reference_profile;
use crate::state::selection::SelectionState;
use crate::viewport::host::ViewportHost;

/// Overwrite every targeted live object from `snapshot`.
///
/// Collections are rebuilt and scalars assigned; nothing is merged. Order
/// matters: lights are rebuilt before anything that may refer to the
/// selected light, nodes are ensured before the profile is applied onto
/// them, and the scene selection is resolved last against the final node
/// identities.
pub fn apply_snapshot(
    snapshot: &ProjectSnapshot,
    project: &mut KnobProject,
    viewport: &mut dyn ViewportHost,
    selection: &mut SelectionState,
) {
    project.lighting_mode = snapshot.lighting_mode;
    project.environment = snapshot.environment.clone();
    project.shadows = snapshot.shadows.clone();

    restore_lights(project, &snapshot.lights, snapshot.selected_light_index);

    project.scene.ensure_model();
    project.scene.ensure_material();
    apply_reference_profile(project, &snapshot.reference);

    viewport.set_active_paint_layer_index(snapshot.active_paint_layer_index);
    viewport.set_focused_paint_layer_index(snapshot.focused_paint_layer_index);
    viewport.restore_paint_history_revision(snapshot.paint_history_revision);

    snapshot.selection.resolve(project, selection);

    viewport.invalidate_gpu();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::history::fingerprint::fingerprint;
    use crate::state::history::snapshot::SceneSelectionSnapshot;
    use crate::viewport::preview::PreviewViewport;

    fn capture(
        project: &KnobProject,
        viewport: &PreviewViewport,
        selection: &SelectionState,
    ) -> ProjectSnapshot {
        ProjectSnapshot::capture(project, viewport, selection)
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut project = KnobProject::default();
        let mut viewport = PreviewViewport::new();
        let mut selection = SelectionState::default();
        project.add_light();
        project.scene.ensure_collar().params.segment_count = 90;
        let snapshot = capture(&project, &viewport, &selection);

        let mut target = KnobProject::default();
        apply_snapshot(&snapshot, &mut target, &mut viewport, &mut selection);
        let first = fingerprint(&capture(&target, &viewport, &selection));
        apply_snapshot(&snapshot, &mut target, &mut viewport, &mut selection);
        let second = fingerprint(&capture(&target, &viewport, &selection));

        assert_eq!(first, second);
        assert_eq!(first, fingerprint(&snapshot));
    }

    #[test]
    fn test_apply_removes_collar_when_absent() {
        let mut project = KnobProject::default();
        let mut viewport = PreviewViewport::new();
        let mut selection = SelectionState::default();
        let snapshot = capture(&project, &viewport, &selection);
        assert!(snapshot.reference.collar.is_none());

        project.scene.ensure_collar();
        apply_snapshot(&snapshot, &mut project, &mut viewport, &mut selection);
        assert!(project.scene.collar().is_none());
    }

    #[test]
    fn test_apply_recreates_missing_model() {
        let mut project = KnobProject::default();
        let mut viewport = PreviewViewport::new();
        let mut selection = SelectionState::default();
        project.scene.ensure_model().params.radius = 180.0;
        let snapshot = capture(&project, &viewport, &selection);

        project.scene.model = None;
        apply_snapshot(&snapshot, &mut project, &mut viewport, &mut selection);
        assert_eq!(project.scene.model().unwrap().params.radius, 180.0);
        assert!(project.scene.material().is_some());
    }

    #[test]
    fn test_apply_resolves_selection_after_rebuild() {
        let mut project = KnobProject::default();
        let mut viewport = PreviewViewport::new();
        let mut selection = SelectionState::default();
        project.scene.ensure_collar();
        selection.select_node(project.scene.collar().unwrap().id.clone());
        let snapshot = capture(&project, &viewport, &selection);
        assert_eq!(snapshot.selection, SceneSelectionSnapshot::Collar);

        project.scene.remove_collar();
        selection.clear();
        apply_snapshot(&snapshot, &mut project, &mut viewport, &mut selection);
        let collar_id = project.scene.collar().unwrap().id.clone();
        assert!(selection.is_selected(&collar_id));
    }

    #[test]
    fn test_apply_restores_paint_pointers_and_invalidates() {
        let mut project = KnobProject::default();
        let mut viewport = PreviewViewport::new();
        let mut selection = SelectionState::default();
        let snapshot = capture(&project, &viewport, &selection);

        viewport.set_active_paint_layer_index(2);
        viewport.paint_stroke(shared::PaintChannel::Wear, [0.5, 0.5], 10.0);
        let invalidations = viewport.gpu_invalidations();

        apply_snapshot(&snapshot, &mut project, &mut viewport, &mut selection);
        assert_eq!(viewport.active_paint_layer_index(), 0);
        assert_eq!(viewport.paint_history_revision(), 0);
        assert_eq!(viewport.gpu_invalidations(), invalidations + 1);
    }
}
