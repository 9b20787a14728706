//! Property tests: arbitrary drop sequences keep every board invariant.

use proptest::prelude::*;
use strictly_hanoi::invariants::{InvariantSet, PuzzleInvariants};
use strictly_hanoi::{DiskId, MoveOutcome, PegId, PuzzleBoard};

fn attempts(max_pegs: usize) -> impl Strategy<Value = Vec<(usize, usize, usize)>> {
    prop::collection::vec((0..8usize, 0..max_pegs + 1, 0..max_pegs + 1), 0..120)
}

proptest! {
    #[test]
    fn prop_random_drops_preserve_invariants(
        disk_count in 1..7usize,
        peg_count in 3..5usize,
        drops in attempts(5),
    ) {
        let sizes: Vec<u32> = (1..=disk_count as u32).rev().collect();
        let mut board = PuzzleBoard::initialize(&sizes, peg_count, PegId(0), PegId(peg_count - 1))
            .expect("valid setup");

        for (disk, from, to) in drops {
            let before = board.clone();
            let outcome = board.try_commit_move(DiskId(disk), PegId(from), PegId(to));

            prop_assert!(PuzzleInvariants::check_all(&board).is_ok());
            let total: usize = board.pegs().iter().map(|p| p.count()).sum();
            prop_assert_eq!(total, disk_count);

            if outcome == MoveOutcome::Committed {
                prop_assert_eq!(board.move_count(), before.move_count() + 1);
                // Repeating a resolved move changes nothing
                let after = board.clone();
                let repeat = board.try_commit_move(DiskId(disk), PegId(from), PegId(to));
                prop_assert!(!repeat.is_committed());
                prop_assert_eq!(&board, &after);
            } else {
                prop_assert_eq!(&board, &before);
            }
        }
    }

    #[test]
    fn prop_top_disk_is_always_liftable(
        disk_count in 1..6usize,
        moves in prop::collection::vec((0..3usize, 0..3usize), 0..60),
    ) {
        let sizes: Vec<u32> = (1..=disk_count as u32).collect();
        let mut board = PuzzleBoard::initialize(&sizes, 3, PegId(0), PegId(2))
            .expect("valid setup");

        for (from, to) in moves {
            if board.is_over() {
                break;
            }
            let Some(disk) = board.top_disk(PegId(from)).map(|d| d.id()) else {
                continue;
            };
            prop_assert!(board.is_top_disk(disk));
            let legal = from != to && board.can_add_disk(PegId(to), disk);
            let outcome = board.try_commit_move(disk, PegId(from), PegId(to));
            prop_assert_eq!(outcome.is_committed(), legal);
        }
    }
}
