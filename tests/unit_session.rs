// tests/unit_session.rs
//! Selection state machine and dataset switching.

use lineage_core::datasets::{DatasetCatalog, BOOK, MANUFACTURING};
use lineage_core::error::LineageError;
use lineage_core::graph::{CyclePolicy, LineageTable};
use lineage_core::render;
use lineage_core::session::{Selection, ViewSession};

fn open() -> ViewSession {
    ViewSession::open(DatasetCatalog::builtin(), None, CyclePolicy::Ignore).unwrap()
}

#[test]
fn test_starts_unselected_on_default() {
    let s = open();
    assert_eq!(s.dataset(), MANUFACTURING);
    assert_eq!(s.selection(), &Selection::Unselected);
    assert_eq!(s.stylesheet(), render::default_stylesheet());
}

#[test]
fn test_click_selects() {
    let mut s = open();
    let h = s.click("Metal Tube").unwrap();
    assert_eq!(h.selected_node, "Metal Tube");
    assert!(h.ancestor_nodes.contains("Planetary Formation"));
    assert_eq!(s.selection(), &Selection::Selected(h));
}

#[test]
fn test_same_click_recomputes_not_toggles() {
    let mut s = open();
    let first = s.click("Ore").unwrap();
    let second = s.click("Ore").unwrap();
    assert_eq!(first, second);
    assert!(matches!(s.selection(), Selection::Selected(_)));
}

#[test]
fn test_unknown_click_resets_selection() {
    let mut s = open();
    s.click("Ore").unwrap();
    let err = s.click("Nope").unwrap_err();
    assert!(matches!(err, LineageError::NotFound { .. }));
    assert_eq!(s.selection(), &Selection::Unselected);
}

#[test]
fn test_dataset_switch_discards_selection() {
    let mut s = open();
    s.click("Widget").unwrap();
    s.select_dataset(BOOK).unwrap();
    assert_eq!(s.dataset(), BOOK);
    assert_eq!(s.selection(), &Selection::Unselected);
    assert!(s.graph().contains("Book"));
    assert!(!s.graph().contains("Widget"));
    assert!(s.click("Widget").is_err());
}

#[test]
fn test_failed_switch_keeps_state() {
    let mut s = open();
    s.click("Ore").unwrap();
    assert!(matches!(
        s.select_dataset("Missing"),
        Err(LineageError::UnknownDataset { .. })
    ));
    assert_eq!(s.dataset(), MANUFACTURING);
    assert!(matches!(s.selection(), Selection::Selected(_)));
}

#[test]
fn test_clear() {
    let mut s = open();
    s.click("Ore").unwrap();
    s.clear();
    assert_eq!(s.selection(), &Selection::Unselected);
}

#[test]
fn test_stylesheet_follows_selection() {
    let mut s = open();
    s.click("Melted Ore").unwrap();
    let sheet = s.stylesheet();
    assert!(sheet.iter().any(|r| r.selector == "node[id = \"Melted Ore\"]"));
    assert!(sheet.iter().any(|r| r.selector == "node[id = \"Ore\"]"));
    assert!(sheet
        .iter()
        .any(|r| r.selector == "edge[source = \"Ore\"][target = \"Melted Ore\"]"));
    assert!(!sheet.iter().any(|r| r.selector == "node[id = \"Metal Tube\"]"));

    s.click("Ore").unwrap();
    let next = s.stylesheet();
    assert!(!next.iter().any(|r| r.selector == "node[id = \"Melted Ore\"]"));
}

#[test]
fn test_reject_policy_blocks_cyclic_dataset() {
    let mut catalog = DatasetCatalog::builtin();
    catalog.insert(
        "Loop",
        LineageTable::from_entries([("A", vec!["B"]), ("B", vec!["A"])]).unwrap(),
    );
    let mut s = ViewSession::open(catalog, Some(BOOK), CyclePolicy::Reject).unwrap();
    assert!(matches!(
        s.select_dataset("Loop"),
        Err(LineageError::CycleDetected { .. })
    ));
    assert_eq!(s.dataset(), BOOK);
}

#[test]
fn test_elements_cover_graph() {
    let s = open();
    let graph = s.graph();
    assert_eq!(s.elements().len(), graph.node_count() + graph.edge_count());
}
