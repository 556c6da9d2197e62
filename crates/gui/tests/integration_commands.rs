//! Integration tests for the AgentCommand JSON protocol.
//!
//! Tests the full command pipeline: JSON string -> parse -> execute -> response.

use knob_gui_lib::command::{execute_json, execute_json_batch};
use knob_gui_lib::fixtures;
use knob_gui_lib::harness::TestHarness;
use knob_gui_lib::params::ParamValue;

#[test]
fn test_command_set_param() {
    let mut h = TestHarness::new();

    let json = r#"{"command": "set_param", "key": "model.radius", "value": 300}"#;

    let resp = execute_json(&mut h, json).unwrap();
    assert!(resp.success);
    assert_eq!(resp.data.as_ref().unwrap()["changed"], true);
    assert_eq!(h.number("model.radius"), Some(300.0));
}

#[test]
fn test_command_set_param_choice_and_color() {
    let mut h = TestHarness::new();
    let batch = r#"[
        {"command": "set_param", "key": "model.grip_style", "value": "Ridged"},
        {"command": "set_param", "key": "material.base_color", "value": [0.9, 0.1, 0.1]},
        {"command": "set_param", "key": "model.indicator_enabled", "value": false}
    ]"#;

    let results = execute_json_batch(&mut h, batch).unwrap();
    assert!(results.iter().all(|r| r.success));
    assert_eq!(h.undo_len(), 3);

    let resp = execute_json(&mut h, r#"{"command": "get_param", "key": "model.grip_style"}"#)
        .unwrap();
    assert_eq!(resp.data.unwrap()["value"], "Ridged");
}

#[test]
fn test_command_unknown_param() {
    let mut h = TestHarness::new();
    let resp = execute_json(
        &mut h,
        r#"{"command": "set_param", "key": "model.colour", "value": 1}"#,
    )
    .unwrap();
    assert!(!resp.success);
    assert!(resp.error.unwrap().contains("model.colour"));
}

#[test]
fn test_command_undo_redo() {
    let mut h = TestHarness::new();
    execute_json(
        &mut h,
        r#"{"command": "set_param", "key": "model.radius", "value": 300}"#,
    )
    .unwrap();

    let resp = execute_json(&mut h, r#"{"command": "undo"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["undone"], true);
    assert_eq!(h.number("model.radius"), Some(220.0));

    let resp = execute_json(&mut h, r#"{"command": "undo"}"#).unwrap();
    assert!(resp.success);
    assert_eq!(resp.data.unwrap()["undone"], false);

    let resp = execute_json(&mut h, r#"{"command": "redo"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["redone"], true);
    assert_eq!(h.number("model.radius"), Some(300.0));
}

#[test]
fn test_command_lights() {
    let mut h = TestHarness::new();
    let batch = r#"[
        {"command": "add_light"},
        {"command": "set_param", "key": "light.type", "value": "Spot"},
        {"command": "select_light", "index": 0},
        {"command": "remove_light", "index": 1}
    ]"#;
    let results = execute_json_batch(&mut h, batch).unwrap();
    assert!(results.iter().all(|r| r.success), "{results:?}");
    assert_eq!(h.light_count(), 1);

    let resp = execute_json(&mut h, r#"{"command": "remove_light", "index": 0}"#).unwrap();
    assert!(!resp.success);
}

#[test]
fn test_command_collar_and_select() {
    let mut h = TestHarness::new();
    let resp = execute_json(&mut h, r#"{"command": "add_collar"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["added"], true);

    let resp = execute_json(
        &mut h,
        r#"{"command": "select", "target": {"kind": "model"}}"#,
    )
    .unwrap();
    assert_eq!(resp.data.unwrap()["selected"]["kind"], "model");

    let resp = execute_json(&mut h, r#"{"command": "remove_collar"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["removed"], true);

    let resp = execute_json(
        &mut h,
        r#"{"command": "select", "target": {"kind": "collar"}}"#,
    )
    .unwrap();
    assert!(!resp.success);
}

#[test]
fn test_command_paint_stroke() {
    let mut h = TestHarness::new();
    let resp = execute_json(
        &mut h,
        r#"{"command": "paint_stroke", "position": [0.5, 0.5]}"#,
    )
    .unwrap();
    assert_eq!(resp.data.unwrap()["revision"], 1);
    assert_eq!(h.session.viewport.applied_strokes()[0].radius, 16.0);
}

#[test]
fn test_command_profiles_pipeline() {
    let mut h = TestHarness::new();
    let batch = r#"[
        {"command": "save_profile", "name": "Chrome"},
        {"command": "duplicate_profile", "from": "Chrome", "to": "Chrome 2"},
        {"command": "rename_profile", "from": "Chrome 2", "to": "Satin"},
        {"command": "list_profiles"}
    ]"#;
    let results = execute_json_batch(&mut h, batch).unwrap();
    assert!(results.iter().all(|r| r.success));
    let listed = results[3].data.as_ref().unwrap()["profiles"].clone();
    assert_eq!(listed, serde_json::json!(["Chrome", "Satin"]));

    let resp = execute_json(
        &mut h,
        r#"{"command": "rename_profile", "from": "Satin", "to": "chrome"}"#,
    )
    .unwrap();
    assert!(!resp.success);
    assert_eq!(
        resp.error.as_deref(),
        Some("A profile named 'Chrome' already exists")
    );
}

#[test]
fn test_command_apply_profile() {
    let mut h = TestHarness::new();
    execute_json(&mut h, r#"{"command": "save_profile", "name": "Default"}"#).unwrap();
    execute_json(
        &mut h,
        r#"{"command": "set_param", "key": "model.height", "value": 60}"#,
    )
    .unwrap();

    let resp = execute_json(&mut h, r#"{"command": "apply_profile", "name": "default"}"#).unwrap();
    assert!(resp.success);
    assert_eq!(h.number("model.height"), Some(120.0));
    assert_eq!(h.undo_len(), 2);
}

#[test]
fn test_command_inspect() {
    let mut h = TestHarness::new();
    execute_json(&mut h, r#"{"command": "add_collar"}"#).unwrap();

    let resp = execute_json(&mut h, r#"{"command": "inspect"}"#).unwrap();
    let data = resp.data.unwrap();
    assert_eq!(data["has_collar"], true);
    assert_eq!(data["model"]["radius"], 220.0);
    assert_eq!(data["selection"]["kind"], "collar");
    assert_eq!(data["undo_count"], 1);
    assert_eq!(data["redo_count"], 0);
}

#[test]
fn test_command_export_state_round_trip() {
    let mut h = TestHarness::new();
    execute_json(
        &mut h,
        r#"{"command": "set_param", "key": "model.radius", "value": 333}"#,
    )
    .unwrap();
    let resp = execute_json(&mut h, r#"{"command": "export_state"}"#).unwrap();
    let data = resp.data.unwrap();
    let state_json = data["state_json"].as_str().unwrap();

    let mut h2 = TestHarness::new();
    h2.load_json(state_json).unwrap();
    assert_eq!(h2.number("model.radius"), Some(333.0));
}

#[test]
fn test_command_batch_invalid() {
    let mut h = TestHarness::new();
    assert!(execute_json_batch(&mut h, r#"[{"command": "explode"}]"#).is_err());
    assert!(execute_json(&mut h, "not valid json").is_err());
}

#[test]
fn test_command_remove_earlier_light_keeps_selected_light() {
    let mut h = TestHarness::with_project(fixtures::lit_project());
    assert_eq!(h.get("light.name"), Some(ParamValue::Text("Rim".to_string())));

    let resp = execute_json(&mut h, r#"{"command": "remove_light", "index": 0}"#).unwrap();
    assert!(resp.success);
    assert_eq!(h.light_count(), 2);
    assert_eq!(h.session.project.selected_light_index, 1);
    assert_eq!(h.get("light.name"), Some(ParamValue::Text("Rim".to_string())));
}
