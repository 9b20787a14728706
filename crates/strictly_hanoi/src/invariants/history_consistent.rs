//! History consistency invariant: the stacks are the replay of the history.

use super::super::contracts::LegalMove;
use super::super::PuzzleBoard;
use super::Invariant;

/// Invariant: replaying the move history from setup reproduces the stacks.
///
/// The move counter equals the history length and every recorded move was
/// legal at the time it was made.
pub struct HistoryConsistentInvariant;

impl Invariant<PuzzleBoard> for HistoryConsistentInvariant {
    fn holds(board: &PuzzleBoard) -> bool {
        if board.move_count() as usize != board.history().len() {
            return false;
        }

        let Ok(mut replay) = PuzzleBoard::initialize(
            board.disk_sizes(),
            board.pegs().len(),
            board.source_peg(),
            board.winning_peg(),
        ) else {
            return false;
        };

        for mov in board.history() {
            if LegalMove::check(mov, &replay).is_err() {
                return false;
            }
            replay.apply(*mov);
        }

        replay.pegs() == board.pegs()
    }

    fn description() -> &'static str {
        "Stacks match the replayed move history"
    }
}
