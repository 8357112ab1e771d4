//! Integration tests for the headless harness.
//!
//! Tests full user flows: navigate -> add -> tap -> compare -> delete.

use shared::{Components, Plane};
use vecviz_gui_lib::fixtures::*;
use vecviz_gui_lib::harness::TestHarness;
use vecviz_gui_lib::state::{SelectionState, TapOutcome};
use vecviz_gui_lib::validation::{parse_new_vector, ValidationError};

#[test]
fn test_basis_store_then_add_preserves_order() {
    let mut store = basis_store(Plane::Planar);
    let id = store.add(Components::planar(2.0, 3.0), None).unwrap();

    let all = store.all();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].name.as_deref(), Some("i"));
    assert_eq!(all[1].name.as_deref(), Some("j"));
    assert_eq!(all[2].id, id);
    assert_eq!(all[2].components, Components::planar(2.0, 3.0));
    assert!(!all[2].is_unit_vector);
}

#[test]
fn test_remove_then_find_returns_none() {
    let mut h = TestHarness::new();
    h.add_vector(&["5", "5"]).unwrap();
    for id in h.user_vector_ids() {
        assert!(h.delete(&id));
        assert!(h.find(&id).is_none());
    }
    assert_eq!(h.user_vector_ids().len(), 0);
}

#[test]
fn test_remove_unit_vector_leaves_store_unchanged() {
    let mut h = TestHarness::on_plane(Plane::Spatial);
    let before = h.snapshot().unwrap();
    for name in ["i", "j", "k"] {
        let id = h.unit_vector_id(name).unwrap();
        assert!(!h.delete(&id));
    }
    assert_eq!(h.snapshot().unwrap(), before);
}

#[test]
fn test_plain_taps_replace_primary() {
    let mut h = TestHarness::new();
    let ids = h.user_vector_ids();
    h.tap(&ids[0]);
    let snap = h.tap(&ids[1]);
    assert_eq!(snap.primary, Some(ids[1].clone()));
    assert!(snap.secondary.is_none());
}

#[test]
fn test_compare_tap_sets_secondary_and_self_compare_is_noop() {
    let mut h = TestHarness::new();
    let ids = h.user_vector_ids();
    h.tap(&ids[0]);
    let snap = h.compare_tap(&ids[1]);
    assert_eq!(snap.primary, Some(ids[0].clone()));
    assert_eq!(snap.secondary, Some(ids[1].clone()));

    let again = h.compare_tap(&ids[0]);
    assert_eq!(again, snap);
}

#[test]
fn test_compare_without_primary_is_noop() {
    let mut h = TestHarness::new();
    let ids = h.user_vector_ids();
    let snap = h.compare_tap(&ids[0]);
    assert!(snap.primary.is_none());
    assert!(snap.secondary.is_none());
}

#[test]
fn test_unit_vector_taps_are_ignored() {
    let store = basis_store(Plane::Planar);
    let mut sel = SelectionState::default();
    let i = store.all()[0].id.clone();
    assert_eq!(sel.tap_in(&store, &i, false), TapOutcome::Ignored);
    assert!(sel.primary().is_none());
}

#[test]
fn test_tap_transitions_on_detached_vectors() {
    let a = planar_vector("a", 2.0, 3.0);
    let b = spatial_vector("b", 1.0, 0.0, 4.0);
    let k = unit_vector("k", "k", Components::spatial(0.0, 0.0, 1.0));
    let mut sel = SelectionState::default();

    assert_eq!(sel.tap(&b, true), TapOutcome::Ignored);
    assert_eq!(sel.tap(&a, false), TapOutcome::SelectedPrimary);
    assert_eq!(sel.tap(&k, true), TapOutcome::Ignored);
    assert_eq!(sel.tap(&a, true), TapOutcome::Ignored);
    assert_eq!(sel.tap(&b, true), TapOutcome::SelectedSecondary);
    assert_eq!(sel.primary().map(String::as_str), Some("a"));
    assert_eq!(sel.secondary().map(String::as_str), Some("b"));

    assert_eq!(sel.tap(&k, false), TapOutcome::Ignored);
    assert_eq!(sel.tap(&b, false), TapOutcome::SelectedPrimary);
    assert!(sel.secondary().is_none());
}

#[test]
fn test_session_delete_forgets_selection() {
    let mut session = session_with(Plane::Spatial, &[&[1.0, 2.0, 3.0], &[-1.0, 0.0, 2.0]]);
    let ids: Vec<_> = session.store.all()[3..].iter().map(|v| v.id.clone()).collect();
    session.selection.tap_in(&session.store, &ids[0], false);
    session.selection.tap_in(&session.store, &ids[1], true);

    assert!(session.delete(&ids[0]));
    let snap = session.snapshot();
    assert!(snap.primary.is_none());
    assert!(snap.secondary.is_none());
    assert_eq!(snap.vectors.len(), 4);

    let k = session.store.all()[2].id.clone();
    assert!(!session.delete(&k));
}

#[test]
fn test_deleting_selected_vectors_clears_selection() {
    let mut h = TestHarness::new();
    let ids = h.user_vector_ids();
    h.tap(&ids[0]);
    h.compare_tap(&ids[1]);

    assert!(h.delete(&ids[1]));
    let snap = h.selection();
    assert_eq!(snap.primary, Some(ids[0].clone()));
    assert!(snap.secondary.is_none());

    assert!(h.delete_selected());
    assert_eq!(h.selection(), Default::default());
    assert_eq!(h.describe(), "No vector is selected");
}

#[test]
fn test_describe_selection_formats_components() {
    let mut h = TestHarness::new();
    let id = h.add_vector(&["-12", "1000"]).unwrap();
    h.tap(&id);
    assert_eq!(h.describe(), "Currently selected vector: (-12, 1,000)");
}

#[test]
fn test_parse_new_vector_integer_only() {
    assert_eq!(parse_new_vector(&["2", "3"]), Ok(Components::planar(2.0, 3.0)));
    assert_eq!(parse_new_vector(&["2.5", "3"]), Err(ValidationError::InvalidValues));
    assert_eq!(parse_new_vector(&["abc", "3"]), Err(ValidationError::InvalidValues));
}

#[test]
fn test_rejected_input_keeps_editor_open_and_store_unchanged() {
    let mut h = TestHarness::new();
    let before = h.vector_count();
    let result = h.submit_via_editor(&["1", ""]).unwrap();
    assert_eq!(result, Err(ValidationError::InvalidValues));
    assert_eq!(h.vector_count(), before);

    let editor = h.state.popup.editor().unwrap();
    assert_eq!(editor.error, Some(ValidationError::InvalidValues));
    assert_eq!(editor.fields, vec!["1".to_string(), String::new()]);
}

#[test]
fn test_planes_keep_separate_stores_and_selections() {
    let mut h = TestHarness::new();
    let planar_id = h.user_vector_ids()[0].clone();
    h.tap(&planar_id);

    h.switch_plane(Plane::Spatial);
    assert!(h.selection().primary.is_none());
    let spatial_id = h.add_vector(&["1", "2", "3"]).unwrap();
    assert!(h.add_vector(&["1", "2"]).is_err());
    assert_eq!(h.find(&spatial_id).unwrap().components, Components::spatial(1.0, 2.0, 3.0));

    h.switch_plane(Plane::Planar);
    assert_eq!(h.selection().primary, Some(planar_id));
    assert!(h.find(&spatial_id).is_none());
}

#[test]
fn test_switching_plane_closes_other_editor() {
    let mut h = TestHarness::new();
    assert!(h.state.open_editor());
    h.switch_plane(Plane::Spatial);
    assert!(!h.state.popup.is_open());
}

#[test]
fn test_tap_unknown_id_is_silent() {
    let mut h = TestHarness::new();
    let ids = h.user_vector_ids();
    h.tap(&ids[0]);
    let snap = h.tap("does-not-exist");
    assert_eq!(snap.primary, Some(ids[0].clone()));
    assert!(!h.delete("does-not-exist"));
}
