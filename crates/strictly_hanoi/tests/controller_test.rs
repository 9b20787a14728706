//! Tests for full matches driven through the controller.

use std::time::Duration;
use strictly_hanoi::{
    solver, DiskId, MoveOutcome, Outcome, PegId, PuzzleController, PuzzleEvent, RejectReason,
};

fn classic(time_limit_secs: f64) -> PuzzleController {
    PuzzleController::initialize(&[1, 2, 3], 3, PegId(0), PegId(2), time_limit_secs)
        .expect("valid setup")
}

/// Drags the top disk of `from` onto `to` and lets it settle.
fn play(controller: &mut PuzzleController, from: PegId, to: PegId) -> Option<MoveOutcome> {
    let disk = controller.board().top_disk(from)?.id();
    let at = controller.disk_position(disk)?;
    assert!(controller.pointer_down(disk, at, at), "{disk} should be liftable");
    controller.overlap_enter(to);
    let outcome = controller.pointer_up();
    assert!(controller.finish_settling(disk));
    outcome
}

fn count_terminal(events: &[PuzzleEvent]) -> usize {
    events.iter().filter(|e| e.is_terminal()).count()
}

#[test]
fn test_optimal_solution_wins_once_after_last_move() {
    let mut controller = classic(120.0);
    let steps = solver::optimal_moves(3, PegId(0), PegId(2), PegId(1));
    assert_eq!(steps.len(), 7);

    for (i, step) in steps.iter().enumerate() {
        assert_eq!(play(&mut controller, step.from, step.to), Some(MoveOutcome::Committed));
        controller.tick(Duration::from_millis(100));

        let events: Vec<PuzzleEvent> = controller.drain_events().into_iter().collect();
        if i < 6 {
            assert_eq!(count_terminal(&events), 0, "won early at move {}", i + 1);
        } else {
            assert_eq!(count_terminal(&events), 1);
            let committed = events
                .iter()
                .position(|e| matches!(e, PuzzleEvent::MoveCommitted { move_count: 7, .. }))
                .expect("seventh move committed");
            let won = events
                .iter()
                .position(|e| matches!(e, PuzzleEvent::GameWon { move_count: 7, .. }))
                .expect("game won");
            assert!(committed < won);
        }
    }

    assert_eq!(controller.outcome(), Some(Outcome::Solved));
    assert_eq!(controller.board().move_count(), 7);

    // The clock stops with the win
    let elapsed = controller.clock().elapsed();
    controller.tick(Duration::from_secs(500));
    assert_eq!(controller.clock().elapsed(), elapsed);
    assert!(controller.drain_events().is_empty());
}

#[test]
fn test_timeout_fires_exactly_once() {
    let mut controller = classic(10.0);
    for _ in 0..99 {
        controller.tick(Duration::from_millis(100));
    }
    assert!(controller.drain_events().is_empty());
    assert_eq!(controller.outcome(), None);

    controller.tick(Duration::from_millis(100));
    controller.tick(Duration::from_millis(100));
    let events: Vec<PuzzleEvent> = controller.drain_events().into_iter().collect();
    assert_eq!(events, vec![PuzzleEvent::GameTimedOut { move_count: 0 }]);
    assert_eq!(controller.outcome(), Some(Outcome::TimedOut));

    controller.tick(Duration::from_secs(5));
    assert!(controller.drain_events().is_empty());
}

#[test]
fn test_no_drags_after_timeout() {
    let mut controller = classic(1.0);
    controller.tick(Duration::from_secs(2));
    let at = controller.disk_position(DiskId(0)).unwrap();
    assert!(!controller.pointer_down(DiskId(0), at, at));
}

#[test]
fn test_drop_after_timeout_is_rejected() {
    let mut controller = classic(1.0);
    let at = controller.disk_position(DiskId(0)).unwrap();
    assert!(controller.pointer_down(DiskId(0), at, at));
    controller.overlap_enter(PegId(2));
    controller.tick(Duration::from_secs(2));

    assert_eq!(controller.pointer_up(), Some(MoveOutcome::RejectedGameOver));
    let events: Vec<PuzzleEvent> = controller.drain_events().into_iter().collect();
    assert!(events.contains(&PuzzleEvent::MoveRejected {
        disk: DiskId(0),
        reason: RejectReason::GameOver,
    }));
    assert_eq!(controller.board().move_count(), 0);
}

#[test]
fn test_illegal_drop_changes_nothing() {
    let mut controller = classic(120.0);
    play(&mut controller, PegId(0), PegId(2));
    play(&mut controller, PegId(0), PegId(1));
    controller.drain_events();
    let before = controller.board().clone();

    // Size 3 onto size 1
    let outcome = play(&mut controller, PegId(0), PegId(2));
    assert_eq!(outcome, Some(MoveOutcome::RejectedIllegal));
    assert_eq!(controller.board(), &before);
    assert!(controller.drain_events().iter().any(|e| matches!(
        e,
        PuzzleEvent::MoveRejected {
            reason: RejectReason::Illegal,
            ..
        }
    )));
}

#[test]
fn test_same_stack_release_leaves_no_dim() {
    let mut controller = classic(120.0);
    let at = controller.disk_position(DiskId(0)).unwrap();
    controller.pointer_down(DiskId(0), at, at);
    controller.overlap_enter(PegId(1));
    controller.overlap_enter(PegId(0));
    assert_eq!(controller.pointer_up(), Some(MoveOutcome::RejectedSameStack));

    let mut dimmed = std::collections::HashSet::new();
    for event in controller.drain_events() {
        if let PuzzleEvent::HoverChanged {
            peg,
            dim_other_disks,
            ..
        } = event
        {
            if dim_other_disks {
                dimmed.insert(peg);
            } else {
                dimmed.remove(&peg);
            }
        }
    }
    assert!(dimmed.is_empty(), "pegs left dimmed: {dimmed:?}");
    assert_eq!(controller.board().move_count(), 0);
}

#[test]
fn test_pause_freezes_clock_and_input() {
    let mut controller = classic(10.0);
    controller.tick(Duration::from_secs(2));
    controller.set_paused(true);
    controller.tick(Duration::from_secs(30));
    assert_eq!(controller.clock().elapsed(), Duration::from_secs(2));
    assert_eq!(controller.outcome(), None);

    let at = controller.disk_position(DiskId(0)).unwrap();
    assert!(!controller.pointer_down(DiskId(0), at, at));

    controller.set_paused(false);
    assert!(controller.pointer_down(DiskId(0), at, at));
}

#[test]
fn test_settling_continues_while_paused() {
    let mut controller = classic(10.0);
    let at = controller.disk_position(DiskId(0)).unwrap();
    controller.pointer_down(DiskId(0), at, at);
    controller.overlap_enter(PegId(1));
    controller.pointer_up();
    controller.set_paused(true);

    for _ in 0..100 {
        controller.tick(Duration::from_millis(50));
    }
    assert!(controller.sessions().is_empty());
    assert!(controller
        .drain_events()
        .iter()
        .any(|e| matches!(e, PuzzleEvent::DiskSettled { disk: DiskId(0), .. })));
}
