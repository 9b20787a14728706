//! Ordering invariant: no disk rests on a smaller one.

use super::super::PuzzleBoard;
use super::Invariant;

/// Invariant: on every peg, sizes never decrease from top to bottom.
pub struct OrderedPegsInvariant;

impl Invariant<PuzzleBoard> for OrderedPegsInvariant {
    fn holds(board: &PuzzleBoard) -> bool {
        board.pegs().iter().all(|peg| {
            peg.disks()
                .windows(2)
                .all(|pair| pair[0].size() >= pair[1].size())
        })
    }

    fn description() -> &'static str {
        "Every peg is ordered largest at the bottom"
    }
}
