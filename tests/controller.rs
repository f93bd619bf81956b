// Run lifecycle: start, pause, resume, cancel, reset, regenerate

mod common;

use std::time::Duration;

use common::{controller, values};
use dllviz::catalog::OperationKind;
use dllviz::config::SimConfig;
use dllviz::engine::ops::Delay;
use dllviz::engine::{AbortReason, OperationParams, Outcome, RunController, RunStatus, SimError};
use dllviz::structure::{NodeStatus, Role};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn speed(c: &RunController) -> Duration {
    c.speed()
}

#[test]
fn test_start_runs_first_step_immediately() {
    let mut c = controller(&[10, 20, 30]);
    c.start_with(OperationKind::InsertTail, &OperationParams::with_value(40))
        .expect("start accepted");

    let state = c.run_state();
    assert!(state.is_running);
    assert!(!state.is_paused);
    assert_eq!(state.status, RunStatus::Running);
    assert_eq!(c.list().len(), 4);
    assert_eq!(c.narration(), "Traversing: at node 10...");
    assert_eq!(c.pending_wait(), Some(speed(&c)));
}

#[test]
fn test_second_start_is_rejected() {
    let mut c = controller(&[10, 20]);
    c.start().expect("first start accepted");
    assert!(matches!(c.start(), Err(SimError::RunInProgress)));
}

#[test]
fn test_tick_waits_for_the_full_delay() {
    let mut c = controller(&[10, 20, 30]);
    c.start_with(OperationKind::InsertTail, &OperationParams::with_value(40))
        .expect("start accepted");
    let step = c.run_state().step_count;

    assert!(!c.tick(ms(200)));
    assert_eq!(c.run_state().step_count, step);
    assert!(c.tick(ms(180)));
    assert_eq!(c.run_state().step_count, step + 1);
    assert_eq!(c.narration(), "Traversing: at node 20...");
}

#[test]
fn test_pause_freezes_and_resume_continues() {
    let mut c = controller(&[10, 20, 30]);
    c.start_with(OperationKind::InsertTail, &OperationParams::with_value(40))
        .expect("start accepted");
    let step = c.run_state().step_count;

    assert!(c.pause());
    assert!(!c.pause());
    assert_eq!(c.run_state().status, RunStatus::Paused);
    assert!(!c.tick(Duration::from_secs(10)));
    assert_eq!(c.run_state().step_count, step);

    assert!(c.resume());
    assert!(!c.resume());
    assert_eq!(c.run_state().status, RunStatus::Running);
    assert!(c.tick(speed(&c)));
    assert_eq!(c.run_state().step_count, step + 1);
}

#[test]
fn test_pause_and_resume_need_an_active_run() {
    let mut c = controller(&[10]);
    assert!(!c.pause());
    assert!(!c.resume());
    assert_eq!(c.run_state().status, RunStatus::Idle);
}

#[test]
fn test_toggle_starts_pauses_and_resumes() {
    let mut c = controller(&[10, 20]);
    c.toggle().expect("start accepted");
    assert_eq!(c.run_state().status, RunStatus::Running);
    c.toggle().expect("pause");
    assert_eq!(c.run_state().status, RunStatus::Paused);
    c.toggle().expect("resume");
    assert_eq!(c.run_state().status, RunStatus::Running);
}

#[test]
fn test_hard_stop_mid_insert_tail_leaves_partial_state() {
    let mut c = controller(&[10, 20, 30]);
    c.start_with(OperationKind::InsertTail, &OperationParams::with_value(40))
        .expect("start accepted");
    c.tick(speed(&c));

    c.hard_stop();
    let state = c.run_state();
    assert!(!state.is_running);
    assert!(!state.is_paused);
    assert_eq!(state.status, RunStatus::Idle);
    assert_eq!(c.last_outcome(), Some(Outcome::Aborted(AbortReason::Cancelled)));

    // the new node exists but nothing links to it yet
    assert_eq!(c.list().len(), 4);
    assert_eq!(values(&c), vec![10, 20, 30]);
    assert!(!c.tick(speed(&c)));

    c.reset();
    assert!(c
        .list()
        .nodes()
        .iter()
        .all(|node| node.status == NodeStatus::Default));
    assert_eq!(c.markers().get(Role::Head), c.list().head());
    assert_eq!(c.markers().get(Role::Current), None);
    assert_eq!(c.list().len(), 4);
}

#[test]
fn test_hard_stop_is_idempotent() {
    let mut c = controller(&[10, 20]);
    c.start().expect("start accepted");
    c.hard_stop();
    let state = c.run_state();
    c.hard_stop();
    assert_eq!(c.run_state(), state);
}

#[test]
fn test_external_cancel_is_seen_at_next_suspension() {
    let mut c = controller(&[10, 20, 30]);
    let handle = c.control_handle();
    c.start_with(OperationKind::DeleteTail, &OperationParams::default())
        .expect("start accepted");
    let step = c.run_state().step_count;

    handle.request_cancel();
    assert!(c.tick(ms(1)));
    assert_eq!(c.last_outcome(), Some(Outcome::Aborted(AbortReason::Cancelled)));
    assert_eq!(c.run_state().status, RunStatus::Idle);
    assert_eq!(c.run_state().step_count, step);
    assert_eq!(values(&c), vec![10, 20, 30]);
}

#[test]
fn test_pause_through_handle_is_visible_and_resumable() {
    let mut c = controller(&[10, 20, 30]);
    let handle = c.control_handle();
    c.start_with(OperationKind::InsertTail, &OperationParams::with_value(40))
        .expect("start accepted");

    handle.set_paused(true);
    let state = c.run_state();
    assert_eq!(state.status, RunStatus::Paused);
    assert!(state.is_paused);
    assert_eq!(c.snapshot().run_state.status, RunStatus::Paused);
    assert!(!c.pause());

    assert!(c.resume());
    assert!(!handle.is_paused());
    assert_eq!(c.run_state().status, RunStatus::Running);
    assert!(c.tick(speed(&c)));

    let report = c.finish_headless();
    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(values(&c), vec![10, 20, 30, 40]);
}

#[test]
fn test_cancelled_run_can_be_restarted() {
    let mut c = controller(&[10, 20]);
    c.start().expect("start accepted");
    c.hard_stop();
    c.reset();

    let report = c
        .run_with(OperationKind::DeleteHead, &OperationParams::default())
        .expect("start accepted");
    assert_eq!(report.outcome, Outcome::Completed);
}

#[test]
fn test_reset_is_idempotent() {
    let mut c = controller(&[10, 20, 30]);
    c.start_with(OperationKind::DeleteByValue, &OperationParams::with_value(30))
        .expect("start accepted");
    c.tick(speed(&c));

    c.reset();
    let list = c.list().clone();
    let markers = *c.markers();
    let state = c.run_state();
    let narration = c.narration().to_string();

    c.reset();
    assert_eq!(c.list(), &list);
    assert_eq!(c.markers(), &markers);
    assert_eq!(c.run_state(), state);
    assert_eq!(c.narration(), narration);
    assert_eq!(state.step_count, 0);
    assert_eq!(state.status, RunStatus::Idle);
    assert_eq!(narration, "Reset. Pick an operation and press Start.");
}

#[test]
fn test_narration_log_does_not_grow_between_runs() {
    let mut c = controller(&[10, 20]);
    let report = c
        .run_with(OperationKind::DeleteHead, &OperationParams::default())
        .expect("start accepted");
    assert!(!report.narration.is_empty());

    for _ in 0..100 {
        c.reset();
        c.select_operation(OperationKind::InsertTail);
    }
    c.regenerate(4);
    assert!(c.narration_log().is_empty());
    assert!(c.narration().starts_with("New list generated."));
}

#[test]
fn test_regenerate_clamps_size_and_clears_history() {
    let mut c = controller(&[10]);
    c.run_with(OperationKind::InsertHead, &OperationParams::with_value(5))
        .expect("start accepted");
    assert_eq!(c.history().len(), 1);

    c.regenerate(50);
    assert_eq!(c.list().len(), 10);
    assert_eq!(c.list_size(), 10);
    assert!(c.history().is_empty());
    assert_eq!(c.list().validate(), Ok(()));
    assert_eq!(c.run_state().status, RunStatus::Idle);

    c.regenerate(1);
    assert_eq!(c.list().len(), 3);
}

#[test]
fn test_regenerate_during_a_run_cancels_it() {
    let mut c = controller(&[10, 20, 30]);
    c.start_with(OperationKind::InsertTail, &OperationParams::with_value(40))
        .expect("start accepted");
    c.regenerate(4);

    assert!(!c.run_state().is_running);
    assert_eq!(c.list().len(), 4);
    assert_eq!(c.list().validate(), Ok(()));
}

#[test]
fn test_seeded_lists_are_reproducible() {
    let config = SimConfig::default().with_seed(42);
    let a = RunController::new(config);
    let b = RunController::new(config);

    assert_eq!(a.list().values_in_order(), b.list().values_in_order());
    assert!(a
        .list()
        .values_in_order()
        .iter()
        .all(|v| (10..=99).contains(v)));
}

#[test]
fn test_select_operation_cancels_and_resets() {
    let mut c = controller(&[10, 20]);
    c.start().expect("start accepted");
    c.select_operation(OperationKind::DeleteTail);

    assert_eq!(c.selected(), OperationKind::DeleteTail);
    assert!(!c.run_state().is_running);
    assert!(c.narration().starts_with("Reset."));
}

#[test]
fn test_speed_change_applies_to_later_suspensions() {
    let mut c = controller(&[10, 20]);
    c.start_with(OperationKind::InsertHead, &OperationParams::with_value(5))
        .expect("start accepted");

    c.set_speed(80);
    assert!(!c.tick(ms(80)));
    assert_eq!(c.pending_wait(), Some(ms(300)));
    assert!(c.tick(ms(300)));
    assert_eq!(c.pending_wait(), Some(ms(80)));
}

#[test]
fn test_speed_is_clamped() {
    let mut c = controller(&[10]);
    c.set_speed(5);
    assert_eq!(c.speed(), ms(80));
    c.set_speed(5000);
    assert_eq!(c.speed(), ms(900));
}

#[test]
fn test_fade_out_delay() {
    assert_eq!(Delay::Step.resolve(ms(380)), ms(380));
    assert_eq!(Delay::FadeOut.resolve(ms(100)), ms(120));
    let fade = Delay::FadeOut.resolve(ms(380));
    let expected = ms(228);
    let diff = fade.max(expected) - fade.min(expected);
    assert!(diff < Duration::from_micros(1));
}

#[test]
fn test_progress() {
    let mut c = controller(&[10, 20, 30]);
    assert_eq!(c.progress(), 0);

    c.start_with(OperationKind::InsertHead, &OperationParams::with_value(5))
        .expect("start accepted");
    // step 1 of four slots, counting the detached new node
    assert_eq!(c.progress(), 25);

    c.finish_headless();
    assert_eq!(c.progress(), 100);

    let empty = controller(&[]);
    assert_eq!(empty.progress(), 0);
}

#[test]
fn test_snapshot_reflects_controller_state() {
    let mut c = controller(&[10, 20]);
    c.set_value_input("15");
    c.select_operation(OperationKind::InsertTail);
    c.start().expect("start accepted");

    let snapshot = c.snapshot();
    assert_eq!(snapshot.selected, OperationKind::InsertTail);
    assert_eq!(snapshot.list.len(), 3);
    assert_eq!(snapshot.markers.get(Role::NewNode), Some(2));
    assert!(snapshot.run_state.is_running);
    assert_eq!(snapshot.narration, "Traversing: at node 10...");
    assert_eq!(snapshot.speed, ms(380));
}

#[test]
fn test_run_to_end_uses_text_inputs() {
    let mut c = controller(&[10, 30]);
    c.select_operation(OperationKind::InsertPosition);
    c.set_value_input("20");
    c.set_position_input("1");

    let report = c.run_to_end().expect("start accepted");
    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(values(&c), vec![10, 20, 30]);
}

#[test]
fn test_headless_run_resumes_a_paused_run() {
    let mut c = controller(&[10, 20, 30]);
    c.start_with(OperationKind::DeleteTail, &OperationParams::default())
        .expect("start accepted");
    c.pause();

    let report = c.finish_headless();
    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(values(&c), vec![10, 20]);
}
