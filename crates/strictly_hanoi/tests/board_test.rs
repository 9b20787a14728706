//! Tests for board setup, move contracts and the win rule.

use strictly_hanoi::contracts::LegalMove;
use strictly_hanoi::{
    rules, solver, ConfigurationError, DiskId, Move, MoveError, MoveOutcome, Outcome, PegId,
    PuzzleBoard,
};

fn classic() -> PuzzleBoard {
    PuzzleBoard::initialize(&[1, 2, 3], 3, PegId(0), PegId(2)).expect("valid setup")
}

#[test]
fn test_preconditions_name_the_failure() {
    let board = classic();

    let err = LegalMove::check(&Move::new(DiskId(1), PegId(0), PegId(1)), &board).unwrap_err();
    assert!(matches!(err, MoveError::NotOnTop { .. }));
    assert!(err.to_string().contains("disk#1"));

    let err = LegalMove::check(&Move::new(DiskId(0), PegId(0), PegId(5)), &board).unwrap_err();
    assert_eq!(err, MoveError::UnknownTarget(PegId(5)));
    assert_eq!(MoveOutcome::from(&err), MoveOutcome::RejectedNoTarget);

    assert!(LegalMove::check(&Move::new(DiskId(0), PegId(0), PegId(1)), &board).is_ok());
}

#[test]
fn test_blocked_move_reports_sizes() {
    let mut board = classic();
    board.try_commit_move(DiskId(0), PegId(0), PegId(1));

    let err = LegalMove::check(&Move::new(DiskId(1), PegId(0), PegId(1)), &board).unwrap_err();
    assert_eq!(
        err,
        MoveError::Blocked {
            disk_size: 2,
            top_size: 1
        }
    );
}

#[test]
fn test_single_disk_wins_in_one_move() {
    let mut board = PuzzleBoard::initialize(&[5], 2, PegId(1), PegId(0)).unwrap();
    assert!(!rules::is_solved(&board));

    assert_eq!(
        board.try_commit_move(DiskId(0), PegId(1), PegId(0)),
        MoveOutcome::Committed
    );
    assert_eq!(board.outcome(), Some(Outcome::Solved));
    assert_eq!(
        board.try_commit_move(DiskId(0), PegId(0), PegId(1)),
        MoveOutcome::RejectedGameOver
    );
}

#[test]
fn test_move_count_tracks_commits_only() {
    let mut board = classic();
    let attempts = [
        (DiskId(0), PegId(0), PegId(2), true),
        (DiskId(1), PegId(0), PegId(2), false),
        (DiskId(1), PegId(0), PegId(1), true),
        (DiskId(1), PegId(1), PegId(1), false),
        (DiskId(0), PegId(2), PegId(1), true),
    ];

    let mut expected = 0;
    for (disk, from, to, committed) in attempts {
        let outcome = board.try_commit_move(disk, from, to);
        assert_eq!(outcome.is_committed(), committed, "{disk}: {from} -> {to}");
        if committed {
            expected += 1;
        }
        assert_eq!(board.move_count(), expected);
    }
    assert_eq!(board.history().len(), 3);
}

#[test]
fn test_win_needs_every_disk() {
    let mut board = classic();
    let steps = solver::solve(&board).unwrap();

    for step in &steps[..steps.len() - 1] {
        let disk = solver::disk_for(&board, *step).unwrap();
        board.try_commit_move(disk, step.from, step.to);
        assert!(!board.is_over());
    }
    assert_eq!(board.disk_count(PegId(2)), 2);

    let last = steps[steps.len() - 1];
    let disk = solver::disk_for(&board, last).unwrap();
    board.try_commit_move(disk, last.from, last.to);
    assert!(board.is_solved());
    assert_eq!(board.move_count() as u64, solver::minimum_moves(3));
}

#[test]
fn test_setup_errors_display() {
    let err = PuzzleBoard::initialize(&[1, 2], 3, PegId(0), PegId(0)).unwrap_err();
    assert_eq!(err, ConfigurationError::SourceIsWinning);
    assert_eq!(err.to_string(), "Source and winning peg must differ");
}
