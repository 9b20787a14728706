//! Contract-based validation for committed moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} move {Q}. Preconditions decide the [`MoveOutcome`](crate::MoveOutcome)
//! of every drop; postconditions are verified in debug builds.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, PuzzleInvariants};
use super::PuzzleBoard;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the match is still in progress.
pub struct MatchInProgress;

impl MatchInProgress {
    /// Fails once the board latched an outcome.
    pub fn check(_mov: &Move, board: &PuzzleBoard) -> Result<(), MoveError> {
        if board.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target resolves to a peg.
pub struct TargetExists;

impl TargetExists {
    /// Fails for a target outside the board.
    pub fn check(mov: &Move, board: &PuzzleBoard) -> Result<(), MoveError> {
        board
            .peg(mov.to)
            .map(|_| ())
            .ok_or(MoveError::UnknownTarget(mov.to))
    }
}

/// Precondition: source and target differ.
pub struct DistinctPegs;

impl DistinctPegs {
    /// Fails when the disk is dropped back on its own peg.
    pub fn check(mov: &Move, _board: &PuzzleBoard) -> Result<(), MoveError> {
        if mov.from == mov.to {
            Err(MoveError::SamePeg(mov.to))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the disk is the top disk of the source peg.
pub struct DiskOnTop;

impl DiskOnTop {
    /// Fails for an unknown source or a buried disk.
    pub fn check(mov: &Move, board: &PuzzleBoard) -> Result<(), MoveError> {
        let peg = board
            .peg(mov.from)
            .ok_or(MoveError::UnknownSource(mov.from))?;
        match peg.top() {
            Some(top) if top.id() == mov.disk => Ok(()),
            _ => Err(MoveError::NotOnTop {
                disk: mov.disk,
                peg: mov.from,
            }),
        }
    }
}

/// Precondition: the target's top disk is at least as large.
pub struct TargetAccepts;

impl TargetAccepts {
    /// Fails when the disk would rest on a smaller one.
    pub fn check(mov: &Move, board: &PuzzleBoard) -> Result<(), MoveError> {
        let (Some(disk), Some(target)) = (board.disk(mov.disk), board.peg(mov.to)) else {
            return Err(MoveError::NotOnTop {
                disk: mov.disk,
                peg: mov.from,
            });
        };
        if target.can_accept(disk) {
            return Ok(());
        }
        Err(MoveError::Blocked {
            disk_size: disk.size(),
            top_size: target.top().map_or(0, |top| top.size()),
        })
    }
}

/// Composite precondition, checked in the order that decides the outcome.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &PuzzleBoard) -> Result<(), MoveError> {
        MatchInProgress::check(mov, board)?;
        TargetExists::check(mov, board)?;
        DistinctPegs::check(mov, board)?;
        DiskOnTop::check(mov, board)?;
        TargetAccepts::check(mov, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for committed moves.
///
/// Postconditions:
/// - All board invariants hold
/// - The move counter advanced by exactly one
pub struct MoveContract;

impl Contract<PuzzleBoard, Move> for MoveContract {
    fn pre(board: &PuzzleBoard, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, board)
    }

    fn post(before: &PuzzleBoard, after: &PuzzleBoard) -> Result<(), MoveError> {
        PuzzleInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if after.move_count() != before.move_count() + 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Move counter went from {} to {}",
                before.move_count(),
                after.move_count()
            )));
        }
        Ok(())
    }
}
