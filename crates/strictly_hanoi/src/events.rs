//! Events emitted to the presentation layer.
//!
//! Events are produced synchronously and in order: a move's
//! `MoveCommitted`/`MoveRejected` always precedes the terminal event the same
//! step produces.

use super::action::RejectReason;
use super::clock::format_duration;
use super::{DiskId, PegId, Position};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A discrete engine event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PuzzleEvent {
    /// A disk was lifted; draw it above every other disk.
    DragStarted {
        /// The lifted disk.
        disk: DiskId,
        /// Peg it was lifted from.
        from: PegId,
    },
    /// A drop became a move.
    MoveCommitted {
        /// The moved disk.
        disk: DiskId,
        /// Peg it left.
        from: PegId,
        /// Peg it now rests on.
        to: PegId,
        /// Move count after this move.
        move_count: u32,
    },
    /// A drop was cancelled; the disk returns to where it was lifted.
    MoveRejected {
        /// The returning disk.
        disk: DiskId,
        /// Why the drop was not a move.
        reason: RejectReason,
    },
    /// Hover feedback for the disks on a peg, except the dragged one.
    HoverChanged {
        /// The hovered peg.
        peg: PegId,
        /// True to dim the peg's other disks, false to restore them.
        dim_other_disks: bool,
        /// The dragged disk, which keeps its look.
        excluded_disk: DiskId,
    },
    /// Every disk reached the winning peg.
    GameWon {
        /// Time used.
        elapsed: Duration,
        /// Final move count.
        move_count: u32,
    },
    /// The clock ran out first.
    GameTimedOut {
        /// Final move count.
        move_count: u32,
    },
    /// A disk finished settling; the presentation layer may shake it.
    DiskSettled {
        /// The settled disk.
        disk: DiskId,
        /// Where it came to rest.
        final_position: Position,
    },
}

impl PuzzleEvent {
    /// Returns true for `GameWon` and `GameTimedOut`.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PuzzleEvent::GameWon { .. } | PuzzleEvent::GameTimedOut { .. }
        )
    }
}

impl fmt::Display for PuzzleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DragStarted { disk, from } => write!(f, "{disk} lifted from {from}"),
            Self::MoveCommitted {
                disk,
                from,
                to,
                move_count,
            } => write!(f, "{disk} moved {from} -> {to} (move {move_count})"),
            Self::MoveRejected { disk, reason } => write!(f, "{disk} returned ({reason})"),
            Self::HoverChanged {
                peg,
                dim_other_disks,
                ..
            } => {
                let state = if *dim_other_disks { "dimmed" } else { "restored" };
                write!(f, "peg {peg} {state}")
            }
            Self::GameWon {
                elapsed,
                move_count,
            } => write!(
                f,
                "solved in {} with {move_count} moves",
                format_duration(*elapsed)
            ),
            Self::GameTimedOut { move_count } => {
                write!(f, "time expired after {move_count} moves")
            }
            Self::DiskSettled {
                disk,
                final_position,
            } => write!(f, "{disk} settled at {final_position}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let event = PuzzleEvent::MoveCommitted {
            disk: DiskId(0),
            from: PegId(0),
            to: PegId(2),
            move_count: 1,
        };
        assert_eq!(event.to_string(), "disk#0 moved A -> C (move 1)");

        let event = PuzzleEvent::GameWon {
            elapsed: Duration::from_secs(75),
            move_count: 7,
        };
        assert_eq!(event.to_string(), "solved in 01m 15s with 7 moves");
    }

    #[test]
    fn test_json_is_tagged() {
        let event = PuzzleEvent::MoveRejected {
            disk: DiskId(2),
            reason: RejectReason::Illegal,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "move_rejected");
        assert_eq!(json["reason"], "illegal");
    }
}
