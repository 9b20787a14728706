//! Win detection.

use super::super::PuzzleBoard;
use tracing::instrument;

/// Checks whether every disk is stacked on the winning peg.
#[instrument(skip(board), fields(winning_peg = %board.winning_peg()))]
pub fn is_solved(board: &PuzzleBoard) -> bool {
    board.disk_count(board.winning_peg()) == board.total_disks()
}
