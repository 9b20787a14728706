//! Terminal-condition policy.

use super::super::{MatchClock, Outcome, PuzzleBoard};
use super::win::is_solved;
use tracing::instrument;

/// Decides whether the match has reached a terminal state.
///
/// Timeout is evaluated before the win rule. A board that already latched an
/// outcome reports that outcome, so a timeout can never replace a win that
/// was detected on an earlier step.
#[instrument(skip_all)]
pub fn evaluate_terminal(board: &PuzzleBoard, clock: &MatchClock) -> Option<Outcome> {
    if let Some(outcome) = board.outcome() {
        return Some(outcome);
    }
    if clock.is_expired() {
        return Some(Outcome::TimedOut);
    }
    if is_solved(board) {
        return Some(Outcome::Solved);
    }
    None
}
