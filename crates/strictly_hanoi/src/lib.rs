//! Strictly Hanoi - a timed disk-stacking puzzle engine
//!
//! Disks are dragged between pegs under the size-ordering rule until every
//! disk rests on the winning peg or the clock runs out. Rendering is left to
//! the caller: the engine consumes pointer, overlap and tick input and emits
//! [`PuzzleEvent`]s.
//!
//! # Architecture
//!
//! - **Board**: pegs, disks and the single move-commit entry point
//! - **Contracts / invariants**: move preconditions and board properties
//! - **Drag sessions**: per-gesture state machine resolving one drop
//! - **Controller**: routes input, drives the clock, reports the outcome
//!
//! # Example
//!
//! ```
//! use strictly_hanoi::{DiskId, PegId, PuzzleController};
//!
//! let mut game = PuzzleController::initialize(&[1], 3, PegId(0), PegId(2), 60.0)?;
//! let at = game.disk_position(DiskId(0)).unwrap_or_default();
//! game.pointer_down(DiskId(0), at, at);
//! game.overlap_enter(PegId(2));
//! game.pointer_up();
//! assert!(game.board().is_solved());
//! # Ok::<(), strictly_hanoi::ConfigurationError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod clock;
mod config;
mod controller;
mod drag;
mod error;
mod events;
mod layout;
mod peg;
mod phases;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;
pub mod solver;

// Crate-level exports - Domain types
pub use types::{Disk, DiskId, PegId, Position};
pub use peg::Peg;
pub use board::PuzzleBoard;

// Crate-level exports - Moves and outcomes
pub use action::{Move, MoveError, MoveOutcome, RejectReason};
pub use phases::{MatchStatus, Outcome};

// Crate-level exports - Errors and configuration
pub use config::{ConfigError, MatchConfig};
pub use error::{ConfigurationError, PegRole};

// Crate-level exports - Clock, layout and events
pub use clock::{format_duration, MatchClock, LOW_TIME_THRESHOLD};
pub use events::PuzzleEvent;
pub use layout::{PegLayout, DEFAULT_DISK_HEIGHT, DEFAULT_PEG_SPACING};

// Crate-level exports - Interaction
pub use controller::PuzzleController;
pub use drag::{
    DragPhase, DragSession, DragState, Dragging, Settling, DEFAULT_SETTLE_SPEED, SETTLE_EPSILON,
};
