//! Integration tests for the scripted JSON command protocol.
//!
//! Tests the full command pipeline: JSON string -> parse -> execute -> response.

use shared::{Plane, PlaneSnapshot};
use vecviz_gui_lib::command::{execute_json, execute_json_batch};
use vecviz_gui_lib::harness::TestHarness;

#[test]
fn test_command_add_and_inspect() {
    let mut h = TestHarness::new();

    let resp = execute_json(&mut h, r#"{"command": "add_vector", "fields": ["-3", "7"]}"#).unwrap();
    assert!(resp.success);
    let id = resp.data.unwrap()["id"].as_str().unwrap().to_string();

    let resp = execute_json(&mut h, r#"{"command": "inspect"}"#).unwrap();
    let data = resp.data.unwrap();
    assert_eq!(data["vector_count"], 5);
    let last = &data["vectors"][4];
    assert_eq!(last["id"], id.as_str());
    assert_eq!(last["display"], "(-3, 7)");
    assert_eq!(last["unit"], false);
}

#[test]
fn test_command_tap_and_compare() {
    let mut h = TestHarness::new();
    let ids = h.user_vector_ids();

    let tap = serde_json::json!({ "command": "tap", "id": ids[0] }).to_string();
    let resp = execute_json(&mut h, &tap).unwrap();
    assert_eq!(resp.data.unwrap()["primary"], ids[0].as_str());

    let compare = serde_json::json!({ "command": "tap", "id": ids[1], "modifier": true }).to_string();
    let resp = execute_json(&mut h, &compare).unwrap();
    let data = resp.data.unwrap();
    assert_eq!(data["primary"], ids[0].as_str());
    assert_eq!(data["secondary"], ids[1].as_str());

    let resp = execute_json(&mut h, r#"{"command": "describe"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["text"], "Currently selected vector: (2, 3)");
}

#[test]
fn test_command_batch_session() {
    let mut h = TestHarness::new();

    let json = r#"[
        {"command": "select_plane", "plane": "spatial"},
        {"command": "add_vector", "fields": ["1", "2", "3"]},
        {"command": "add_vector", "fields": ["1", "x", "3"]},
        {"command": "render"},
        {"command": "clear_selection"}
    ]"#;

    let responses = execute_json_batch(&mut h, json).unwrap();
    assert_eq!(responses.len(), 5);
    assert!(responses[0].success);
    assert!(responses[1].success);
    assert!(!responses[2].success);
    assert_eq!(h.plane(), Some(Plane::Spatial));
    assert_eq!(h.vector_count(), 6);

    // 30 grid lines, 6 headless 3D shafts, 3 basis labels
    let render = responses[3].data.as_ref().unwrap();
    assert_eq!(render["lines"], 30 + 6);
    assert_eq!(render["labels"], 3);
}

#[test]
fn test_command_delete_selected() {
    let mut h = TestHarness::new();
    let ids = h.user_vector_ids();

    let resp = execute_json(&mut h, r#"{"command": "delete_selected"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["removed"], false);

    h.tap(&ids[1]);
    let resp = execute_json(&mut h, r#"{"command": "delete_selected"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["removed"], true);
    assert!(h.find(&ids[1]).is_none());
    assert!(h.selection().primary.is_none());
}

#[test]
fn test_command_export_plane() {
    let mut h = TestHarness::new();
    let ids = h.user_vector_ids();
    h.tap(&ids[0]);

    let resp = execute_json(&mut h, r#"{"command": "export_plane"}"#).unwrap();
    let data = resp.data.unwrap();
    let snap: PlaneSnapshot = serde_json::from_str(data["plane_json"].as_str().unwrap()).unwrap();
    assert_eq!(snap.plane, Plane::Planar);
    assert_eq!(snap.primary, Some(ids[0].clone()));
    assert_eq!(snap.vectors.len(), 4);
}

#[test]
fn test_command_unknown_command_rejected() {
    let mut h = TestHarness::new();
    assert!(execute_json(&mut h, r#"{"command": "rotate_camera"}"#).is_err());
    assert!(execute_json_batch(&mut h, r#"{"command": "inspect"}"#).is_err());
}
