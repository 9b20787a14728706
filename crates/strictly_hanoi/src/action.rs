//! First-class move and outcome types.
//!
//! A move is a domain event: the intent to carry one disk from one peg to
//! another. It can be validated before it is applied and replayed afterward.

use super::{DiskId, PegId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A disk transfer between two pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The disk being carried.
    pub disk: DiskId,
    /// Peg the disk is lifted from.
    pub from: PegId,
    /// Peg the disk is dropped on.
    pub to: PegId,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(disk: DiskId, from: PegId, to: PegId) -> Self {
        Self { disk, from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.disk, self.from, self.to)
    }
}

/// Why a drop did not become a committed move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RejectReason {
    /// Released outside every peg's drop zone.
    NoTarget,
    /// Released back over the peg it was lifted from.
    SameStack,
    /// The target's top disk is smaller, or the disk was not liftable.
    Illegal,
    /// The match already ended.
    GameOver,
}

/// Result of [`PuzzleBoard::try_commit_move`](crate::PuzzleBoard::try_commit_move).
///
/// Rejections are ordinary values: gameplay continues after any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The disk moved and the move counter advanced.
    Committed,
    /// Source and target are the same peg.
    RejectedSameStack,
    /// The move breaks the size-ordering rule or the disk is not liftable.
    RejectedIllegal,
    /// The target does not resolve to any peg.
    RejectedNoTarget,
    /// The match is over.
    RejectedGameOver,
}

impl MoveOutcome {
    /// Returns true for [`MoveOutcome::Committed`].
    pub fn is_committed(&self) -> bool {
        matches!(self, MoveOutcome::Committed)
    }

    /// Returns the rejection reason, or `None` if the move was committed.
    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            MoveOutcome::Committed => None,
            MoveOutcome::RejectedSameStack => Some(RejectReason::SameStack),
            MoveOutcome::RejectedIllegal => Some(RejectReason::Illegal),
            MoveOutcome::RejectedNoTarget => Some(RejectReason::NoTarget),
            MoveOutcome::RejectedGameOver => Some(RejectReason::GameOver),
        }
    }
}

impl From<RejectReason> for MoveOutcome {
    fn from(reason: RejectReason) -> Self {
        match reason {
            RejectReason::NoTarget => MoveOutcome::RejectedNoTarget,
            RejectReason::SameStack => MoveOutcome::RejectedSameStack,
            RejectReason::Illegal => MoveOutcome::RejectedIllegal,
            RejectReason::GameOver => MoveOutcome::RejectedGameOver,
        }
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The match already ended.
    #[display("Match is already over")]
    GameOver,

    /// The target peg does not exist.
    #[display("Peg {} does not exist", _0)]
    UnknownTarget(PegId),

    /// Source and target are the same peg.
    #[display("Disk dropped back on peg {}", _0)]
    SamePeg(PegId),

    /// The source peg does not exist.
    #[display("Source peg {} does not exist", _0)]
    UnknownSource(PegId),

    /// The disk is not the top disk of the source peg.
    #[display("{} is not the top disk of peg {}", disk, peg)]
    NotOnTop {
        /// Disk that was asked to move.
        disk: DiskId,
        /// Peg it was expected on top of.
        peg: PegId,
    },

    /// The target's top disk is smaller than the disk.
    #[display("Cannot place size {} on size {}", disk_size, top_size)]
    Blocked {
        /// Size of the disk being moved.
        disk_size: u32,
        /// Size of the target's top disk.
        top_size: u32,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<&MoveError> for MoveOutcome {
    fn from(err: &MoveError) -> Self {
        match err {
            MoveError::GameOver => MoveOutcome::RejectedGameOver,
            MoveError::UnknownTarget(_) => MoveOutcome::RejectedNoTarget,
            MoveError::SamePeg(_) => MoveOutcome::RejectedSameStack,
            MoveError::UnknownSource(_)
            | MoveError::NotOnTop { .. }
            | MoveError::Blocked { .. }
            | MoveError::InvariantViolation(_) => MoveOutcome::RejectedIllegal,
        }
    }
}
