//! Match status and outcome types.

use serde::{Deserialize, Serialize};

/// Outcome of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Outcome {
    /// All disks were stacked on the winning peg.
    #[strum(to_string = "solved")]
    Solved,
    /// The match clock expired first.
    #[strum(to_string = "timed out")]
    TimedOut,
}

impl Outcome {
    /// Returns true if the puzzle was solved.
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Solved)
    }
}

/// Lifecycle of a board. Moves are only accepted while in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// The match ended; this never reverts.
    Over(Outcome),
}

impl MatchStatus {
    /// Returns the outcome once the match is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            MatchStatus::InProgress => None,
            MatchStatus::Over(outcome) => Some(*outcome),
        }
    }

    /// Returns true once the match is over.
    pub fn is_over(&self) -> bool {
        matches!(self, MatchStatus::Over(_))
    }
}
