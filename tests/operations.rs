// Each list operation driven to the end on virtual time

mod common;

use common::{controller, run, values};
use dllviz::catalog::OperationKind;
use dllviz::engine::{AbortReason, OperationParams, Outcome, RunStatus};
use dllviz::history::HistoryEntry;
use dllviz::structure::{NodeStatus, Role};

fn assert_settled(c: &dllviz::engine::RunController) {
    assert_eq!(c.list().validate(), Ok(()));
    assert!(c
        .list()
        .nodes()
        .iter()
        .all(|node| node.status == NodeStatus::Default));
    assert_eq!(c.markers().get(Role::Head), c.list().head());
    for role in [Role::Current, Role::NewNode, Role::Target] {
        assert_eq!(c.markers().get(role), None, "{:?} marker left behind", role);
    }
}

#[test]
fn test_insert_at_head() {
    let mut c = controller(&[20, 30]);
    let report = run(&mut c, OperationKind::InsertHead, OperationParams::with_value(10));

    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(report.suspensions, 2);
    assert_eq!(values(&c), vec![10, 20, 30]);
    assert_eq!(report.narration[0], "Step 1: Create new node with value 10.");
    assert_eq!(c.run_state().status, RunStatus::Completed);
    assert_eq!(c.run_state().step_count, 3);
    assert_eq!(c.progress(), 100);
    assert_eq!(
        c.history().entries(),
        &[HistoryEntry::new(OperationKind::InsertHead, 10)]
    );
    assert_settled(&c);
}

#[test]
fn test_insert_at_head_of_empty_list() {
    let mut c = controller(&[]);
    let report = run(&mut c, OperationKind::InsertHead, OperationParams::with_value(7));

    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(values(&c), vec![7]);
    assert_settled(&c);
}

#[test]
fn test_insert_draws_random_value_when_empty_input() {
    let mut c = controller(&[20]);
    let report = run(&mut c, OperationKind::InsertHead, OperationParams::default());

    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(values(&c), vec![50, 20]);
}

#[test]
fn test_insert_at_tail_walks_to_the_end() {
    let mut c = controller(&[10, 20]);
    let report = run(&mut c, OperationKind::InsertTail, OperationParams::with_value(30));

    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(report.suspensions, 2);
    assert_eq!(values(&c), vec![10, 20, 30]);
    assert_eq!(
        report.narration,
        vec![
            "Created new node (30). Traversing to tail...".to_string(),
            "Traversing: at node 10...".to_string(),
            "Found tail (20). Linking: tail→next = new, new→prev = tail.".to_string(),
            "Inserted 30 at tail. Done!".to_string(),
        ]
    );
    assert_settled(&c);
}

#[test]
fn test_insert_at_tail_of_empty_list_needs_no_steps() {
    let mut c = controller(&[]);
    let report = run(&mut c, OperationKind::InsertTail, OperationParams::with_value(5));

    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(report.suspensions, 0);
    assert_eq!(values(&c), vec![5]);
    assert_eq!(c.history().len(), 1);
}

#[test]
fn test_insert_at_position_splices_between_neighbours() {
    let mut c = controller(&[10, 30]);
    let report = run(
        &mut c,
        OperationKind::InsertPosition,
        OperationParams::with_value(20).at(1),
    );

    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(report.suspensions, 1);
    assert_eq!(values(&c), vec![10, 20, 30]);
    assert_eq!(
        c.history().entries(),
        &[HistoryEntry::new(OperationKind::InsertPosition, 20).at(1)]
    );
    assert_settled(&c);
}

#[test]
fn test_insert_at_position_deeper_in_the_list() {
    let mut c = controller(&[10, 20, 30]);
    let report = run(
        &mut c,
        OperationKind::InsertPosition,
        OperationParams::with_value(25).at(2),
    );

    assert_eq!(report.suspensions, 2);
    assert_eq!(values(&c), vec![10, 20, 25, 30]);
    assert_settled(&c);
}

#[test]
fn test_insert_at_position_equal_to_length_appends() {
    let mut c = controller(&[10, 20]);
    let report = run(
        &mut c,
        OperationKind::InsertPosition,
        OperationParams::with_value(30).at(2),
    );

    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(values(&c), vec![10, 20, 30]);
    assert_settled(&c);
}

#[test]
fn test_insert_at_position_zero_behaves_like_head_insert() {
    let mut c = controller(&[10, 20]);
    let report = run(
        &mut c,
        OperationKind::InsertPosition,
        OperationParams::with_value(5).at(0),
    );

    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(report.suspensions, 2);
    assert_eq!(values(&c), vec![5, 10, 20]);
    assert_eq!(
        c.history().entries(),
        &[HistoryEntry::new(OperationKind::InsertPosition, 5).at(0)]
    );
}

#[test]
fn test_insert_at_position_out_of_bounds_leaves_list_alone() {
    let mut c = controller(&[10, 20]);
    let before = c.list().clone();
    let report = run(
        &mut c,
        OperationKind::InsertPosition,
        OperationParams::with_value(99).at(5),
    );

    assert_eq!(report.outcome, Outcome::Aborted(AbortReason::OutOfBounds));
    assert_eq!(
        report.narration.last().map(String::as_str),
        Some("Position 5 is out of bounds. Operation cancelled.")
    );
    assert_eq!(c.list().len(), 2);
    assert_eq!(c.list().next_links(), before.next_links());
    assert_eq!(c.list().prev_links(), before.prev_links());
    assert!(c.history().is_empty());
    assert_eq!(c.run_state().status, RunStatus::Idle);
    assert!(!c.run_state().is_running);
}

#[test]
fn test_insert_one_past_the_end_is_out_of_bounds() {
    let mut c = controller(&[10, 20]);
    let report = run(
        &mut c,
        OperationKind::InsertPosition,
        OperationParams::with_value(99).at(3),
    );

    assert_eq!(report.outcome, Outcome::Aborted(AbortReason::OutOfBounds));
    assert_eq!(values(&c), vec![10, 20]);
}

#[test]
fn test_invalid_value_text_aborts_insert() {
    let mut c = controller(&[10, 20]);
    c.select_operation(OperationKind::InsertTail);
    c.set_value_input("abc");
    c.start().expect("start accepted");

    assert_eq!(
        c.last_outcome(),
        Some(Outcome::Aborted(AbortReason::InvalidParameter))
    );
    assert!(!c.run_state().is_running);
    assert_eq!(values(&c), vec![10, 20]);
    assert_eq!(c.list().len(), 2);
}

#[test]
fn test_delete_from_head() {
    let mut c = controller(&[10, 20, 30]);
    let report = run(&mut c, OperationKind::DeleteHead, OperationParams::default());

    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(report.suspensions, 2);
    assert_eq!(values(&c), vec![20, 30]);
    assert_eq!(c.list().prev_of(c.list().head().unwrap()), None);
    assert_eq!(
        c.history().entries(),
        &[HistoryEntry::new(OperationKind::DeleteHead, 10)]
    );
    assert_settled(&c);
}

#[test]
fn test_delete_from_head_of_single_node_list() {
    let mut c = controller(&[42]);
    run(&mut c, OperationKind::DeleteHead, OperationParams::default());

    assert!(c.list().is_empty());
    assert_eq!(c.list().head(), None);
    assert_eq!(c.markers().get(Role::Head), None);
}

#[test]
fn test_delete_from_empty_list_is_a_no_op() {
    for kind in [
        OperationKind::DeleteHead,
        OperationKind::DeleteTail,
        OperationKind::DeleteByValue,
    ] {
        let mut c = controller(&[]);
        let report = run(&mut c, kind, OperationParams::with_value(10));

        assert_eq!(report.outcome, Outcome::Completed, "{}", kind);
        assert_eq!(
            report.narration,
            vec!["List is empty. Nothing to delete.".to_string()]
        );
        assert!(c.history().is_empty());
    }
}

#[test]
fn test_delete_from_tail() {
    let mut c = controller(&[10, 20, 30]);
    let report = run(&mut c, OperationKind::DeleteTail, OperationParams::default());

    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(report.suspensions, 3);
    assert_eq!(values(&c), vec![10, 20]);
    assert_eq!(c.list().next_of(1), None);
    assert_eq!(
        c.history().entries(),
        &[HistoryEntry::new(OperationKind::DeleteTail, 30)]
    );
    assert_settled(&c);
}

#[test]
fn test_delete_from_tail_walks_each_cursor_then_targets_the_tail() {
    let mut c = controller(&[10, 20, 30, 40]);
    c.start_with(OperationKind::DeleteTail, &OperationParams::default())
        .expect("start accepted");

    let mut seen = Vec::new();
    while let Some(remaining) = c.pending_wait() {
        seen.push((
            c.markers().get(Role::Current),
            c.markers().get(Role::Target),
        ));
        c.tick(remaining);
    }

    // fade-out keeps the markers of the step before it
    assert_eq!(
        seen,
        vec![
            (Some(0), None),
            (Some(1), None),
            (Some(2), Some(3)),
            (Some(2), Some(3)),
        ]
    );
    assert_eq!(c.last_outcome(), Some(Outcome::Completed));
    assert_eq!(c.run_state().step_count, 3);
    assert_eq!(values(&c), vec![10, 20, 30]);
    assert_settled(&c);
}

#[test]
fn test_delete_from_tail_of_single_node_clears_every_marker() {
    let mut c = controller(&[42]);
    let report = run(&mut c, OperationKind::DeleteTail, OperationParams::default());

    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(report.suspensions, 1);
    assert!(c.list().is_empty());
    for role in Role::ALL {
        assert_eq!(c.markers().get(role), None);
    }
    assert_eq!(c.history().len(), 1);
}

#[test]
fn test_delete_by_value_in_the_middle_keeps_neighbours_linked() {
    let mut c = controller(&[10, 20, 30]);
    let report = run(
        &mut c,
        OperationKind::DeleteByValue,
        OperationParams::with_value(20),
    );

    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(report.suspensions, 3);
    assert_eq!(values(&c), vec![10, 30]);
    assert_eq!(c.list().validate(), Ok(()));
    assert_eq!(
        c.history().entries(),
        &[HistoryEntry::new(OperationKind::DeleteByValue, 20)]
    );
    assert_settled(&c);
}

#[test]
fn test_delete_by_value_at_the_tail() {
    let mut c = controller(&[10, 20, 30]);
    run(
        &mut c,
        OperationKind::DeleteByValue,
        OperationParams::with_value(30),
    );

    assert_eq!(values(&c), vec![10, 20]);
    assert_settled(&c);
}

#[test]
fn test_delete_by_value_matching_head() {
    let mut c = controller(&[10, 20]);
    let report = run(
        &mut c,
        OperationKind::DeleteByValue,
        OperationParams::with_value(10),
    );

    assert_eq!(report.suspensions, 2);
    assert_eq!(values(&c), vec![20]);
    assert_settled(&c);
}

#[test]
fn test_delete_by_value_removes_only_first_match() {
    let mut c = controller(&[10, 20, 20]);
    run(
        &mut c,
        OperationKind::DeleteByValue,
        OperationParams::with_value(20),
    );

    assert_eq!(values(&c), vec![10, 20]);
}

#[test]
fn test_delete_by_value_miss_records_nothing() {
    let mut c = controller(&[10, 20]);
    let report = run(
        &mut c,
        OperationKind::DeleteByValue,
        OperationParams::with_value(99),
    );

    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(
        report.narration.last().map(String::as_str),
        Some("Value 99 not found in the list.")
    );
    assert_eq!(values(&c), vec![10, 20]);
    assert!(c.history().is_empty());
    assert_settled(&c);
}

#[test]
fn test_delete_by_value_without_value_is_invalid() {
    let mut c = controller(&[10, 20]);
    let report = run(
        &mut c,
        OperationKind::DeleteByValue,
        OperationParams::default(),
    );

    assert_eq!(
        report.outcome,
        Outcome::Aborted(AbortReason::InvalidParameter)
    );
    assert_eq!(
        report.narration,
        vec!["Please enter a value to delete.".to_string()]
    );
    assert_eq!(values(&c), vec![10, 20]);
}

#[test]
fn test_history_accumulates_in_order() {
    let mut c = controller(&[10]);
    run(&mut c, OperationKind::InsertTail, OperationParams::with_value(20));
    run(&mut c, OperationKind::InsertHead, OperationParams::with_value(5));
    run(&mut c, OperationKind::DeleteTail, OperationParams::default());

    assert_eq!(values(&c), vec![5, 10]);
    let newest: Vec<String> = c.history().newest_first().map(|e| e.to_string()).collect();
    assert_eq!(
        newest,
        vec![
            "- Delete from Tail  val: 20".to_string(),
            "+ Insert at Head  val: 5".to_string(),
            "+ Insert at Tail  val: 20".to_string(),
        ]
    );
}
