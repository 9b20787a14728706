//! Per-gesture drag-and-drop state machine.
//!
//! Each phase is its own type carrying only the data that phase needs: an
//! idle session holds no disk, a dragging session always knows its source
//! peg, and a settling session always has a resolved target.
//!
//! ```text
//! Idle --pointer_down--> Dragging --pointer_up--> Settling --advance--> Idle
//! ```

use super::action::MoveOutcome;
use super::events::PuzzleEvent;
use super::layout::PegLayout;
use super::{Disk, DiskId, PegId, Position, PuzzleBoard};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, instrument};

/// Distance at which a settling disk snaps onto its target.
pub const SETTLE_EPSILON: f32 = 0.1;

/// World units per second a settling disk travels by default.
pub const DEFAULT_SETTLE_SPEED: f32 = 1.0 / 0.03;

/// Phase of a session, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum DragState {
    /// No disk held.
    Idle,
    /// A disk follows the pointer.
    Dragging,
    /// A released disk travels to its resolved slot.
    Settling,
}

// ─────────────────────────────────────────────────────────────
//  Dragging Phase
// ─────────────────────────────────────────────────────────────

/// A disk following the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct Dragging {
    disk: DiskId,
    source: PegId,
    hovered: Option<PegId>,
    dimmed: Option<PegId>,
    pointer_offset: Position,
    origin: Position,
    position: Position,
}

impl Dragging {
    /// The held disk.
    pub fn disk(&self) -> DiskId {
        self.disk
    }

    /// Peg the disk was lifted from.
    pub fn source(&self) -> PegId {
        self.source
    }

    /// Peg currently overlapped, last entry wins.
    pub fn hovered(&self) -> Option<PegId> {
        self.hovered
    }

    /// Peg whose other disks are currently dimmed.
    pub fn dimmed(&self) -> Option<PegId> {
        self.dimmed
    }

    /// Pointer position minus the disk position at grab time.
    pub fn pointer_offset(&self) -> Position {
        self.pointer_offset
    }

    /// Where the disk was before it was lifted.
    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Current visual position.
    pub fn position(&self) -> Position {
        self.position
    }
}

// ─────────────────────────────────────────────────────────────
//  Settling Phase
// ─────────────────────────────────────────────────────────────

/// A released disk travelling to the slot its outcome resolved to.
///
/// The logical outcome is already final; settling is presentation only.
#[derive(Debug, Clone, PartialEq)]
pub struct Settling {
    disk: DiskId,
    position: Position,
    target: Position,
    outcome: MoveOutcome,
}

impl Settling {
    /// The settling disk.
    pub fn disk(&self) -> DiskId {
        self.disk
    }

    /// Current visual position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Resolved resting position.
    pub fn target(&self) -> Position {
        self.target
    }

    /// How the drop resolved.
    pub fn outcome(&self) -> MoveOutcome {
        self.outcome
    }
}

/// Phase together with its data.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragPhase {
    /// No disk held.
    #[default]
    Idle,
    /// A disk follows the pointer.
    Dragging(Dragging),
    /// A released disk travels to its slot.
    Settling(Settling),
}

// ─────────────────────────────────────────────────────────────
//  Session
// ─────────────────────────────────────────────────────────────

/// Turns pointer and overlap events for one disk into a single drop decision.
///
/// A session resolves at most once per drag: a second `pointer_up` is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    phase: DragPhase,
    settle_speed: f32,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_SPEED)
    }
}

impl DragSession {
    /// Creates an idle session whose disks settle at `settle_speed` units per second.
    pub fn new(settle_speed: f32) -> Self {
        Self {
            phase: DragPhase::Idle,
            settle_speed,
        }
    }

    /// Starts dragging `disk` if it is liftable.
    ///
    /// Only the top disk of a peg can be lifted, nothing can be lifted once
    /// the match is over, and a session that already holds a disk ignores the
    /// request. Returns true if a drag started.
    #[instrument(skip(self, board, events))]
    pub fn pointer_down(
        &mut self,
        board: &PuzzleBoard,
        disk: DiskId,
        pointer: Position,
        disk_position: Position,
        events: &mut VecDeque<PuzzleEvent>,
    ) -> bool {
        if !self.is_idle() {
            debug!(state = %self.state(), "Session busy, ignoring pointer down");
            return false;
        }
        if board.is_over() {
            debug!("Match over, nothing is liftable");
            return false;
        }
        if !board.is_top_disk(disk) {
            debug!("Not a top disk, ignoring pointer down");
            return false;
        }
        let Some(source) = board.disk(disk).and_then(Disk::current_peg) else {
            return false;
        };

        self.phase = DragPhase::Dragging(Dragging {
            disk,
            source,
            hovered: None,
            dimmed: None,
            pointer_offset: pointer - disk_position,
            origin: disk_position,
            position: disk_position,
        });
        debug!(%source, "Drag started");
        events.push_back(PuzzleEvent::DragStarted { disk, from: source });
        true
    }

    /// Moves the held disk with the pointer. Returns its new visual position.
    pub fn pointer_move(&mut self, pointer: Position) -> Option<Position> {
        let DragPhase::Dragging(drag) = &mut self.phase else {
            return None;
        };
        drag.position = pointer - drag.pointer_offset;
        Some(drag.position)
    }

    /// The held disk started overlapping `peg`.
    pub fn overlap_enter(&mut self, peg: PegId, events: &mut VecDeque<PuzzleEvent>) {
        self.hover(peg, events);
    }

    /// The held disk still overlaps `peg`.
    pub fn overlap_stay(&mut self, peg: PegId, events: &mut VecDeque<PuzzleEvent>) {
        self.hover(peg, events);
    }

    /// The held disk stopped overlapping `peg`.
    #[instrument(skip(self, events))]
    pub fn overlap_exit(&mut self, peg: PegId, events: &mut VecDeque<PuzzleEvent>) {
        let DragPhase::Dragging(drag) = &mut self.phase else {
            return;
        };
        if drag.hovered == Some(peg) {
            drag.hovered = None;
        }
        if drag.dimmed == Some(peg) {
            drag.dimmed = None;
            events.push_back(PuzzleEvent::HoverChanged {
                peg,
                dim_other_disks: false,
                excluded_disk: drag.disk,
            });
        }
    }

    // Last write wins; at most one peg is dimmed at a time.
    fn hover(&mut self, peg: PegId, events: &mut VecDeque<PuzzleEvent>) {
        let DragPhase::Dragging(drag) = &mut self.phase else {
            return;
        };
        drag.hovered = Some(peg);
        if drag.dimmed == Some(peg) {
            return;
        }
        if let Some(previous) = drag.dimmed.take() {
            events.push_back(PuzzleEvent::HoverChanged {
                peg: previous,
                dim_other_disks: false,
                excluded_disk: drag.disk,
            });
        }
        if peg != drag.source {
            drag.dimmed = Some(peg);
            events.push_back(PuzzleEvent::HoverChanged {
                peg,
                dim_other_disks: true,
                excluded_disk: drag.disk,
            });
        }
    }

    /// Releases the held disk and resolves the drop against `board`.
    ///
    /// Emits the hover restore (if any) and then exactly one of
    /// `MoveCommitted` or `MoveRejected`. Returns `None` if no disk was held.
    #[instrument(skip(self, board, layout, events))]
    pub fn pointer_up(
        &mut self,
        board: &mut PuzzleBoard,
        layout: &PegLayout,
        events: &mut VecDeque<PuzzleEvent>,
    ) -> Option<MoveOutcome> {
        let DragPhase::Dragging(drag) = &self.phase else {
            return None;
        };
        let drag = drag.clone();

        if let Some(peg) = drag.dimmed {
            events.push_back(PuzzleEvent::HoverChanged {
                peg,
                dim_other_disks: false,
                excluded_disk: drag.disk,
            });
        }

        let (outcome, target) = match drag.hovered {
            None => (MoveOutcome::RejectedNoTarget, drag.origin),
            Some(peg) => {
                let outcome = board.try_commit_move(drag.disk, drag.source, peg);
                if outcome.is_committed() {
                    let slot = board.disk_count(peg).saturating_sub(1);
                    let target = layout.slot(peg, slot).unwrap_or(drag.position);
                    events.push_back(PuzzleEvent::MoveCommitted {
                        disk: drag.disk,
                        from: drag.source,
                        to: peg,
                        move_count: board.move_count(),
                    });
                    (outcome, target)
                } else {
                    (outcome, drag.origin)
                }
            }
        };

        if let Some(reason) = outcome.reject_reason() {
            events.push_back(PuzzleEvent::MoveRejected {
                disk: drag.disk,
                reason,
            });
        }

        debug!(?outcome, %target, "Drop resolved");
        self.phase = DragPhase::Settling(Settling {
            disk: drag.disk,
            position: drag.position,
            target,
            outcome,
        });
        Some(outcome)
    }

    /// Moves a settling disk toward its target.
    ///
    /// The distance to the target never grows. Once it is within
    /// [`SETTLE_EPSILON`] the disk snaps onto the target, `DiskSettled` is
    /// emitted and the session returns to idle. Returns true on that step.
    pub fn advance(&mut self, delta: Duration, events: &mut VecDeque<PuzzleEvent>) -> bool {
        let DragPhase::Settling(settle) = &mut self.phase else {
            return false;
        };
        let step = self.settle_speed * delta.as_secs_f32();
        settle.position = settle.position.move_towards(settle.target, step);
        if settle.position.distance(settle.target) > SETTLE_EPSILON {
            return false;
        }
        self.finish_settling(events)
    }

    /// Ends settling immediately, for presentation layers that animate on
    /// their own. Returns true if the session was settling.
    pub fn finish_settling(&mut self, events: &mut VecDeque<PuzzleEvent>) -> bool {
        let DragPhase::Settling(settle) = &self.phase else {
            return false;
        };
        let (disk, final_position) = (settle.disk, settle.target);
        self.phase = DragPhase::Idle;
        debug!(%disk, %final_position, "Disk settled");
        events.push_back(PuzzleEvent::DiskSettled {
            disk,
            final_position,
        });
        true
    }

    /// Current phase without data.
    pub fn state(&self) -> DragState {
        match self.phase {
            DragPhase::Idle => DragState::Idle,
            DragPhase::Dragging(_) => DragState::Dragging,
            DragPhase::Settling(_) => DragState::Settling,
        }
    }

    /// Current phase with data.
    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// True when no disk is held.
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, DragPhase::Idle)
    }

    /// The held disk; `Some` exactly when the session is not idle.
    pub fn dragged_disk(&self) -> Option<DiskId> {
        match &self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging(drag) => Some(drag.disk),
            DragPhase::Settling(settle) => Some(settle.disk),
        }
    }

    /// Peg currently overlapped while dragging.
    pub fn hovered_peg(&self) -> Option<PegId> {
        match &self.phase {
            DragPhase::Dragging(drag) => drag.hovered,
            _ => None,
        }
    }

    /// Visual position of the held disk.
    pub fn position(&self) -> Option<Position> {
        match &self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging(drag) => Some(drag.position),
            DragPhase::Settling(settle) => Some(settle.position),
        }
    }
}
