//! Integration tests for snapshot capture, fingerprinting and apply.

use knob_gui_lib::fixtures;
use knob_gui_lib::state::history::{
    apply_snapshot, fingerprint, restore_lights, ProjectSnapshot, SnapshotHistory,
};
use knob_gui_lib::state::selection::SelectionState;
use knob_gui_lib::viewport::preview::PreviewViewport;

fn capture(
    project: &shared::KnobProject,
    viewport: &PreviewViewport,
    selection: &SelectionState,
) -> ProjectSnapshot {
    ProjectSnapshot::capture(project, viewport, selection)
}

#[test]
fn test_fingerprint_stable_across_captures() {
    let project = fixtures::lit_project();
    let viewport = PreviewViewport::new();
    let selection = SelectionState::default();

    let a = capture(&project, &viewport, &selection);
    let b = capture(&project, &viewport, &selection);
    assert_eq!(fingerprint(&a), fingerprint(&b));
}

#[test]
fn test_fingerprint_ignores_light_ids() {
    let mut project = fixtures::lit_project();
    let viewport = PreviewViewport::new();
    let selection = SelectionState::default();
    let before = fingerprint(&capture(&project, &viewport, &selection));

    for light in &mut project.lights {
        light.id = shared::new_node_id();
    }
    let after = fingerprint(&capture(&project, &viewport, &selection));
    assert_eq!(before, after);
}

#[test]
fn test_fingerprint_sees_small_float_change() {
    let mut project = fixtures::basic_project();
    let viewport = PreviewViewport::new();
    let selection = SelectionState::default();
    let before = fingerprint(&capture(&project, &viewport, &selection));

    project.scene.ensure_material().params.roughness += 1e-6;
    let after = fingerprint(&capture(&project, &viewport, &selection));
    assert_ne!(before, after);
}

#[test]
fn test_apply_is_idempotent() {
    let source = fixtures::collared_project(shared::CollarPreset::SnakeOuroboros);
    let viewport = PreviewViewport::new();
    let selection = SelectionState::default();
    let snapshot = capture(&source, &viewport, &selection);

    let mut project = fixtures::lit_project();
    let mut target_viewport = PreviewViewport::new();
    let mut target_selection = SelectionState::default();

    apply_snapshot(&snapshot, &mut project, &mut target_viewport, &mut target_selection);
    let once = fingerprint(&capture(&project, &target_viewport, &target_selection));
    apply_snapshot(&snapshot, &mut project, &mut target_viewport, &mut target_selection);
    let twice = fingerprint(&capture(&project, &target_viewport, &target_selection));

    assert_eq!(once, fingerprint(&snapshot));
    assert_eq!(once, twice);
}

#[test]
fn test_empty_light_list_restores_one_default_light() {
    let mut project = fixtures::lit_project();
    restore_lights(&mut project, &[], 5);
    assert_eq!(project.lights.len(), 1);
    assert_eq!(project.selected_light_index, 0);

    let viewport = PreviewViewport::new();
    let selection = SelectionState::default();
    let mut snapshot = capture(&fixtures::lit_project(), &viewport, &selection);
    snapshot.lights.clear();

    let mut target = fixtures::lit_project();
    let mut target_viewport = PreviewViewport::new();
    let mut target_selection = SelectionState::default();
    apply_snapshot(&snapshot, &mut target, &mut target_viewport, &mut target_selection);
    assert_eq!(target.lights.len(), 1);
}

#[test]
fn test_collar_tombstone_by_omission() {
    let viewport = PreviewViewport::new();
    let selection = SelectionState::default();
    let snapshot = capture(&fixtures::basic_project(), &viewport, &selection);
    assert!(snapshot.reference.collar.is_none());

    let mut project = fixtures::collared_project(shared::CollarPreset::BeadedRing);
    let mut target_viewport = PreviewViewport::new();
    let mut target_selection = SelectionState::default();
    apply_snapshot(&snapshot, &mut project, &mut target_viewport, &mut target_selection);
    assert!(project.scene.collar().is_none());
}

#[test]
fn test_snapshot_json_round_trip_keeps_fingerprint() {
    let viewport = PreviewViewport::new();
    let selection = SelectionState::default();
    let snapshot = capture(&fixtures::brass_project(), &viewport, &selection);
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: ProjectSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(fingerprint(&snapshot), fingerprint(&back));
}

#[test]
fn test_history_bound_is_configurable() {
    let viewport = PreviewViewport::new();
    let selection = SelectionState::default();
    let mut history = SnapshotHistory::with_capacity(3);
    for radius in [100.0, 110.0, 120.0, 130.0, 140.0, 150.0] {
        let project = fixtures::knob_project(radius, 100.0);
        history.record(capture(&project, &viewport, &selection));
    }
    assert_eq!(history.undo_len(), 3);
    let oldest = history.undo_entries().next().unwrap();
    assert_eq!(oldest.reference.model.radius, 120.0);
}
