use flowgraph::{Graph, NodeLabel, NodePatch};

use super::harness::TestHarness;

fn snapshot(harness: &TestHarness) -> Graph {
    harness.app.graph().clone()
}

#[test]
fn test_undo_redo_round_trip_is_exact() {
    let mut harness = TestHarness::new();
    let a = harness.add_node_at(NodeLabel::Start, 0.0, 0.0);
    let b = harness.add_node_at(NodeLabel::Task, 100.0, 0.0);
    harness.app.connect(a, b).unwrap();
    let original = snapshot(&harness);

    // Three recorded operations: duplicate, update, delete.
    harness.target(b);
    harness.app.duplicate_node().unwrap();
    harness.app.edit_node();
    harness.app.commit_edit(&NodePatch {
        label: None,
        name: Some("renamed".to_string()),
        execution_time: Some(9.0),
    });
    harness.target(a);
    harness.app.delete_node();
    let mutated = snapshot(&harness);
    assert_ne!(original, mutated);

    for _ in 0..3 {
        assert!(harness.app.undo());
    }
    assert_eq!(snapshot(&harness), original);

    for _ in 0..3 {
        assert!(harness.app.redo());
    }
    assert_eq!(snapshot(&harness), mutated);
}

#[test]
fn test_undo_restores_deleted_node_with_its_edges() {
    let mut harness = TestHarness::new();
    let a = harness.add_node(NodeLabel::Start);
    let b = harness.add_node(NodeLabel::Task);
    let c = harness.add_node(NodeLabel::End);
    harness.app.connect(a, b).unwrap();
    harness.app.connect(b, c).unwrap();
    let before_delete = snapshot(&harness);

    harness.target(b);
    harness.app.delete_node();
    assert_eq!(harness.app.graph().edge_count(), 0);

    assert!(harness.app.undo());
    assert_eq!(snapshot(&harness), before_delete);
    assert!(harness.app.graph().has_edge_between(a, b));
    assert!(harness.app.graph().has_edge_between(b, c));
}

#[test]
fn test_undo_of_add_removes_later_edges_and_redo_restores_them() {
    let mut harness = TestHarness::new();
    let a = harness.add_node(NodeLabel::Start);
    let b = harness.add_node(NodeLabel::Task);
    // Edge created after the add being undone; it hangs off b, so
    // undoing the add must take it down and redo must bring it back.
    harness.app.connect(a, b).unwrap();
    let with_edge = snapshot(&harness);

    assert!(harness.app.undo());
    assert!(!harness.app.graph().contains_node(b));
    assert_eq!(harness.app.graph().edge_count(), 0);

    assert!(harness.app.redo());
    assert_eq!(snapshot(&harness), with_edge);
}

#[test]
fn test_new_action_clears_redo() {
    let mut harness = TestHarness::new();
    let a = harness.add_node(NodeLabel::Task);
    harness.add_node(NodeLabel::End);

    assert!(harness.app.undo());
    assert_eq!(harness.app.redo_stack_len(), 1);

    // A brand-new mutation, not a redo.
    harness.target(a);
    harness.app.duplicate_node().unwrap();

    assert_eq!(harness.app.redo_stack_len(), 0);
    assert!(!harness.app.redo());
}

#[test]
fn test_undo_redo_empty_stacks_are_benign() {
    let mut harness = TestHarness::new();
    assert!(!harness.app.undo());
    assert!(!harness.app.redo());

    harness.add_node(NodeLabel::Task);
    assert!(harness.app.undo());
    assert!(!harness.app.undo());
    assert!(harness.app.redo());
    assert!(!harness.app.redo());
}

#[test]
fn test_history_limit_discards_oldest() {
    let mut app = flowgraph::WorkflowApp::with_history_limit(4);
    for _ in 0..6 {
        app.add_node(NodeLabel::Task, euclid::default::Point2D::zero());
    }

    assert_eq!(app.undo_stack_len(), 4);
    let mut undone = 0;
    while app.undo() {
        undone += 1;
    }
    assert_eq!(undone, 4);
    // The two oldest adds fell off the stack and survive the undo run.
    assert_eq!(app.graph().node_count(), 2);
}

#[test]
fn test_interleaved_undo_redo_keeps_linear_timeline() {
    let mut harness = TestHarness::new();
    harness.add_node(NodeLabel::Start);
    harness.add_node(NodeLabel::Task);
    harness.add_node(NodeLabel::End);

    assert!(harness.app.undo());
    assert!(harness.app.undo());
    assert_eq!(harness.app.graph().node_count(), 1);

    assert!(harness.app.redo());
    assert_eq!(harness.app.graph().node_count(), 2);

    assert!(harness.app.undo());
    assert!(harness.app.redo());
    assert!(harness.app.redo());
    assert_eq!(harness.app.graph().node_count(), 3);
    assert_eq!(harness.app.redo_stack_len(), 0);
}
