//! Match controller: routes input to drag sessions, drives the clock and
//! reports the terminal event.

use super::config::MatchConfig;
use super::drag::DragSession;
use super::error::ConfigurationError;
use super::events::PuzzleEvent;
use super::layout::PegLayout;
use super::phases::Outcome;
use super::rules;
use super::{DiskId, MatchClock, MoveOutcome, PegId, Position, PuzzleBoard};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// One match from setup to its terminal event.
///
/// The controller serves a single pointer, so at most one session is
/// dragging at a time. Sessions that are still settling keep their disk
/// locked but do not block drags of other disks.
#[derive(Debug, Clone)]
pub struct PuzzleController {
    config: MatchConfig,
    board: PuzzleBoard,
    clock: MatchClock,
    layout: PegLayout,
    sessions: Vec<DragSession>,
    events: VecDeque<PuzzleEvent>,
    paused: bool,
    terminal_reported: bool,
}

impl PuzzleController {
    /// Creates a controller for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] for any invalid setting.
    #[instrument(skip_all, fields(disks = config.disk_sizes().len(), pegs = config.peg_count()))]
    pub fn new(config: MatchConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let board = config.board()?;
        let clock = config.clock()?;
        let layout = config.peg_layout()?;
        info!(limit = ?clock.time_limit(), "Match ready");
        Ok(Self {
            config,
            board,
            clock,
            layout,
            sessions: Vec::new(),
            events: VecDeque::new(),
            paused: false,
            terminal_reported: false,
        })
    }

    /// Creates a controller from explicit setup values and the default layout.
    pub fn initialize(
        disk_sizes: &[u32],
        peg_count: usize,
        source: PegId,
        winning: PegId,
        time_limit_secs: f64,
    ) -> Result<Self, ConfigurationError> {
        Self::new(MatchConfig::new(
            disk_sizes.to_vec(),
            peg_count,
            source,
            winning,
            time_limit_secs,
        ))
    }

    /// A fresh match with the same configuration.
    pub fn restart(&self) -> Result<Self, ConfigurationError> {
        Self::new(self.config.clone())
    }

    // ─────────────────────────────────────────────────────────────
    //  Input
    // ─────────────────────────────────────────────────────────────

    /// Starts dragging `disk`. Returns true if a drag started.
    ///
    /// Ignored while paused, while another disk is being dragged, and for a
    /// disk whose previous drop is still settling.
    #[instrument(skip(self))]
    pub fn pointer_down(&mut self, disk: DiskId, pointer: Position, disk_position: Position) -> bool {
        if self.paused {
            debug!("Paused, ignoring pointer down");
            return false;
        }
        if self.active_index().is_some() {
            debug!("Another disk is already held");
            return false;
        }
        if self.sessions.iter().any(|s| s.dragged_disk() == Some(disk)) {
            debug!("Disk still settling");
            return false;
        }

        let mut session = DragSession::new(*self.config.settle_speed());
        if !session.pointer_down(&self.board, disk, pointer, disk_position, &mut self.events) {
            return false;
        }
        self.sessions.push(session);
        true
    }

    /// Moves the held disk. Returns its new visual position.
    pub fn pointer_move(&mut self, pointer: Position) -> Option<Position> {
        let index = self.active_index()?;
        self.sessions[index].pointer_move(pointer)
    }

    /// The held disk started overlapping `peg`.
    pub fn overlap_enter(&mut self, peg: PegId) {
        if let Some(index) = self.active_index() {
            self.sessions[index].overlap_enter(peg, &mut self.events);
        }
    }

    /// The held disk still overlaps `peg`.
    pub fn overlap_stay(&mut self, peg: PegId) {
        if let Some(index) = self.active_index() {
            self.sessions[index].overlap_stay(peg, &mut self.events);
        }
    }

    /// The held disk stopped overlapping `peg`.
    pub fn overlap_exit(&mut self, peg: PegId) {
        if let Some(index) = self.active_index() {
            self.sessions[index].overlap_exit(peg, &mut self.events);
        }
    }

    /// Releases the held disk. Returns `None` if no disk was held.
    ///
    /// A drop that solves the puzzle is followed by `GameWon` in the same
    /// call, after its `MoveCommitted`.
    #[instrument(skip(self))]
    pub fn pointer_up(&mut self) -> Option<MoveOutcome> {
        let index = self.active_index()?;
        let outcome =
            self.sessions[index].pointer_up(&mut self.board, &self.layout, &mut self.events)?;
        if outcome.is_committed() {
            self.check_terminal();
        }
        Some(outcome)
    }

    /// Advances settling disks and, unless paused or over, the clock.
    ///
    /// Settling continues while paused and after the match ends.
    #[instrument(skip(self), fields(elapsed = ?self.clock.elapsed()))]
    pub fn tick(&mut self, delta: Duration) {
        for session in &mut self.sessions {
            session.advance(delta, &mut self.events);
        }
        self.sessions.retain(|s| !s.is_idle());

        if self.paused || self.board.is_over() {
            return;
        }
        self.clock.tick(delta);
        self.check_terminal();
    }

    /// Snaps a settling disk onto its target. Returns true if it was settling.
    pub fn finish_settling(&mut self, disk: DiskId) -> bool {
        let Some(index) = self
            .sessions
            .iter()
            .position(|s| s.dragged_disk() == Some(disk))
        else {
            return false;
        };
        let settled = self.sessions[index].finish_settling(&mut self.events);
        if settled {
            self.sessions.remove(index);
        }
        settled
    }

    /// Pauses or resumes the clock and input.
    #[instrument(skip(self))]
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            debug!(paused, "Pause toggled");
        }
        self.paused = paused;
    }

    /// Takes every event emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> VecDeque<PuzzleEvent> {
        std::mem::take(&mut self.events)
    }

    // Reports the terminal event at most once per match.
    fn check_terminal(&mut self) {
        if self.terminal_reported {
            return;
        }
        let Some(outcome) = rules::evaluate_terminal(&self.board, &self.clock) else {
            return;
        };

        let move_count = self.board.move_count();
        match outcome {
            Outcome::TimedOut => {
                self.board.end_by_timeout();
                self.events.push_back(PuzzleEvent::GameTimedOut { move_count });
            }
            Outcome::Solved => {
                self.events.push_back(PuzzleEvent::GameWon {
                    elapsed: self.clock.elapsed(),
                    move_count,
                });
            }
        }
        self.clock.halt();
        self.terminal_reported = true;
        info!(%outcome, move_count, elapsed = ?self.clock.elapsed(), "Match over");
    }

    fn active_index(&self) -> Option<usize> {
        self.sessions
            .iter()
            .position(|s| matches!(s.state(), super::DragState::Dragging))
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// The board.
    pub fn board(&self) -> &PuzzleBoard {
        &self.board
    }

    /// The match clock.
    pub fn clock(&self) -> &MatchClock {
        &self.clock
    }

    /// The configuration this match was built from.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Peg geometry.
    pub fn layout(&self) -> &PegLayout {
        &self.layout
    }

    /// True while paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Outcome once the match is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.board.outcome()
    }

    /// The session currently dragging a disk.
    pub fn active_drag(&self) -> Option<&DragSession> {
        self.active_index().map(|index| &self.sessions[index])
    }

    /// Every session that is dragging or settling.
    pub fn sessions(&self) -> &[DragSession] {
        &self.sessions
    }

    /// Resting position of `disk` according to the layout.
    pub fn disk_position(&self, disk: DiskId) -> Option<Position> {
        let peg = self.board.disk(disk)?.current_peg()?;
        let slot = self
            .board
            .peg(peg)?
            .disks()
            .iter()
            .position(|d| d.id() == disk)?;
        self.layout.slot(peg, slot)
    }
}
