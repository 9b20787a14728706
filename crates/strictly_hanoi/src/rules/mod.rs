//! Game rules for the stacking puzzle.
//!
//! Pure functions for evaluating puzzle state. Rules are kept apart from
//! peg storage so contracts and invariants can compose them.

pub mod stacking;
pub mod terminal;
pub mod win;

pub use stacking::can_stack;
pub use terminal::evaluate_terminal;
pub use win::is_solved;
