//! Setup error types.

use serde::{Deserialize, Serialize};

/// Which configured peg index was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PegRole {
    /// The peg holding the initial pile.
    Source,
    /// The peg that must hold every disk to win.
    Winning,
}

/// Malformed match setup. Fatal at initialization, never silently defaulted.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum ConfigurationError {
    /// No disk sizes were supplied.
    #[display("At least one disk is required")]
    EmptyDiskSet,

    /// A disk size of zero was supplied.
    #[display("Disk sizes must be positive")]
    ZeroDiskSize,

    /// Two disks share a size.
    #[display("Disk size {} appears more than once", size)]
    DuplicateDiskSize {
        /// The repeated size.
        size: u32,
    },

    /// The board has no pegs.
    #[display("At least one peg is required")]
    NoPegs,

    /// A source or winning peg index does not name a peg.
    #[display("{} peg index {} is out of range for {} pegs", role, index, peg_count)]
    PegOutOfRange {
        /// Which configured peg was wrong.
        role: PegRole,
        /// The configured index.
        index: usize,
        /// Number of pegs on the board.
        peg_count: usize,
    },

    /// The initial pile already sits on the winning peg.
    #[display("Source and winning peg must differ")]
    SourceIsWinning,

    /// The time limit is zero, negative or not finite.
    #[display("Time limit must be a positive number of seconds, got {}", seconds)]
    InvalidTimeLimit {
        /// The rejected limit.
        seconds: f64,
    },

    /// A custom layout does not provide one anchor per peg.
    #[display("Layout has {} anchors for {} pegs", anchors, peg_count)]
    LayoutMismatch {
        /// Anchors supplied.
        anchors: usize,
        /// Pegs on the board.
        peg_count: usize,
    },

    /// The settle speed is zero, negative or not finite.
    #[display("Settle speed must be positive, got {}", speed)]
    InvalidSettleSpeed {
        /// The rejected speed.
        speed: f32,
    },
}

impl std::error::Error for ConfigurationError {}
