//! Integration tests for named reference profiles.
//!
//! Covers validation, the confirmation window, undo of profile application
//! and the on-disk store.

use std::time::Duration;

use knob_gui_lib::fixtures;
use knob_gui_lib::harness::TestHarness;
use knob_gui_lib::state::history::SceneSelectionSnapshot;
use knob_gui_lib::state::profile::{ProfileAction, ProfileError, ProfileStore};

/// Store in a fresh directory, removed when the guard drops
fn temp_store() -> (ProfileStore, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::at(dir.path().join("reference_profiles.json"));
    (store, dir)
}

#[test]
fn test_profile_rename_collision_leaves_library_untouched() {
    let mut h = TestHarness::new();
    h.save_profile("Chrome").unwrap();
    h.save_profile("Aged Steel").unwrap();

    let err = h.rename_profile("Chrome", "aged steel").unwrap_err();
    assert_eq!(err, ProfileError::DuplicateName("Aged Steel".to_string()));
    assert_eq!(h.profile_names(), vec!["Chrome", "Aged Steel"]);
}

#[test]
fn test_profile_rename_own_case() {
    let mut h = TestHarness::new();
    h.save_profile("chrome").unwrap();
    h.rename_profile("Chrome", "CHROME").unwrap();
    assert_eq!(h.profile_names(), vec!["CHROME"]);
}

#[test]
fn test_profile_empty_name_rejected() {
    let mut h = TestHarness::new();
    assert_eq!(h.save_profile("   "), Err(ProfileError::EmptyName));
    assert!(h.profile_names().is_empty());
}

#[test]
fn test_profile_delete_confirm_window() {
    let mut h = TestHarness::new();
    h.save_profile("Chrome").unwrap();

    let first = h.delete_profile("Chrome").unwrap();
    assert!(matches!(first, ProfileAction::ConfirmationRequired { .. }));
    assert_eq!(h.status(), Some("Press again within 8 seconds to delete 'Chrome'"));

    h.advance_clock(Duration::from_secs(3));
    let second = h.delete_profile("chrome").unwrap();
    assert_eq!(second, ProfileAction::Deleted("Chrome".to_string()));
    assert!(h.profile_names().is_empty());
}

#[test]
fn test_profile_delete_window_restarts_after_expiry() {
    let mut h = TestHarness::new();
    h.save_profile("Chrome").unwrap();
    h.delete_profile("Chrome").unwrap();

    h.advance_clock(Duration::from_secs(9));
    let late = h.delete_profile("Chrome").unwrap();
    assert!(!late.is_mutation());
    assert_eq!(h.profile_names(), vec!["Chrome"]);

    h.advance_clock(Duration::from_secs(2));
    assert!(h.delete_profile("Chrome").unwrap().is_mutation());
}

#[test]
fn test_profile_overwrite_needs_confirmation() {
    let mut h = TestHarness::new();
    h.save_profile("Chrome").unwrap();
    h.edit("material.roughness", 0.9);

    assert!(!h.overwrite_profile("Chrome").unwrap().is_mutation());
    assert!(h.overwrite_profile("Chrome").unwrap().is_mutation());

    h.edit("material.roughness", 0.1);
    h.apply_profile("Chrome").unwrap();
    assert_eq!(h.number("material.roughness"), Some(f64::from(0.9f32)));
}

#[test]
fn test_profile_apply_then_undo() {
    let mut h = TestHarness::with_project(fixtures::brass_project());
    h.save_profile("Brass").unwrap();
    h.add_collar();
    h.edit("material.rust_amount", 0.9);

    let before = h.undo_len();
    h.apply_profile("brass").unwrap();
    assert_eq!(h.undo_len(), before + 1);
    // The profile had no collar, so applying it removes the collar
    assert!(!h.has_collar());
    assert_eq!(h.number("material.rust_amount"), Some(f64::from(0.2f32)));

    h.undo();
    assert!(h.has_collar());
    assert_eq!(h.number("material.rust_amount"), Some(f64::from(0.9f32)));
}

#[test]
fn test_profile_store_persists_between_sessions() {
    let (store, _dir) = temp_store();
    {
        let mut h = TestHarness::with_store(fixtures::basic_project(), store.clone());
        h.save_profile("Chrome").unwrap();
        h.duplicate_profile("Chrome", "Chrome Copy").unwrap();
    }
    let h = TestHarness::with_store(fixtures::basic_project(), store);
    assert_eq!(h.profile_names(), vec!["Chrome", "Chrome Copy"]);
}

#[test]
fn test_profile_apply_unknown_reports_status() {
    let mut h = TestHarness::new();
    assert!(h.apply_profile("Nope").is_err());
    assert_eq!(h.status(), Some("Profile 'Nope' not found"));
    assert!(!h.can_undo());
}

#[test]
fn test_profile_apply_follows_profile_selected_light() {
    let mut h = TestHarness::with_project(fixtures::lit_project());
    assert!(h.select(SceneSelectionSnapshot::Light { index: 0 }));
    h.save_profile("Key lit").unwrap();
    assert!(h.select(SceneSelectionSnapshot::Light { index: 2 }));

    h.apply_profile("Key lit").unwrap();
    assert_eq!(h.session.project.selected_light_index, 0);
    assert_eq!(h.selection(), SceneSelectionSnapshot::Light { index: 0 });
}

#[test]
fn test_profile_apply_keeps_non_light_selection() {
    let mut h = TestHarness::with_project(fixtures::lit_project());
    h.save_profile("Rim lit").unwrap();
    assert!(h.select(SceneSelectionSnapshot::Model));
    h.apply_profile("Rim lit").unwrap();
    assert_eq!(h.selection(), SceneSelectionSnapshot::Model);
}
