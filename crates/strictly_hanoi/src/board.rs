//! The puzzle board: pegs, disks, move counter and win condition.

use super::action::{Move, MoveOutcome};
use super::contracts::{Contract, MoveContract};
use super::error::{ConfigurationError, PegRole};
use super::phases::{MatchStatus, Outcome};
use super::rules;
use super::{Disk, DiskId, Peg, PegId};
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Owns every peg and disk of a match.
///
/// [`PuzzleBoard::try_commit_move`] is the only operation that mutates the
/// stacks. Once the match is over no further moves are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleBoard {
    pub(crate) pegs: Vec<Peg>,
    disk_sizes: Vec<u32>,
    source_peg: PegId,
    winning_peg: PegId,
    move_count: u32,
    pub(crate) history: Vec<Move>,
    status: MatchStatus,
}

impl PuzzleBoard {
    /// Sets up a board with every disk piled on `source`.
    ///
    /// Disk ids follow the order of `disk_sizes`. The pile is pushed
    /// largest-first, so the ordering invariant holds by construction.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the sizes are empty, contain a zero
    /// or a duplicate, if there are no pegs, if a peg index is out of range,
    /// or if the source is the winning peg.
    #[instrument(fields(disks = disk_sizes.len()))]
    pub fn initialize(
        disk_sizes: &[u32],
        peg_count: usize,
        source: PegId,
        winning: PegId,
    ) -> Result<Self, ConfigurationError> {
        validate_setup(disk_sizes, peg_count, source, winning)?;

        let mut pegs: Vec<Peg> = (0..peg_count).map(|i| Peg::new(PegId(i))).collect();

        let mut disks: Vec<Disk> = disk_sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| Disk::new(DiskId(i), size))
            .collect();
        disks.sort_by(|a, b| b.size().cmp(&a.size()));

        let pile = &mut pegs[source.index()];
        for disk in disks {
            pile.push(disk);
        }

        debug!(%source, %winning, peg_count, "Board initialized");

        Ok(Self {
            pegs,
            disk_sizes: disk_sizes.to_vec(),
            source_peg: source,
            winning_peg: winning,
            move_count: 0,
            history: Vec::new(),
            status: MatchStatus::InProgress,
        })
    }

    /// Checks whether `disk` could be dropped on `peg` right now.
    ///
    /// Unknown pegs or disks yield `false`.
    pub fn can_add_disk(&self, peg: PegId, disk: DiskId) -> bool {
        match (self.peg(peg), self.disk(disk)) {
            (Some(peg), Some(disk)) => peg.can_accept(disk),
            _ => false,
        }
    }

    /// Attempts to move `disk` from `from` to `to`.
    ///
    /// This is the single mutation entry point. Rejections leave the board
    /// untouched. A committed move increments the counter by one and
    /// re-evaluates the win rule.
    #[instrument(skip(self), fields(moves = self.move_count))]
    pub fn try_commit_move(&mut self, disk: DiskId, from: PegId, to: PegId) -> MoveOutcome {
        let action = Move::new(disk, from, to);

        if let Err(err) = MoveContract::pre(self, &action) {
            let outcome = MoveOutcome::from(&err);
            debug!(%action, reason = %err, ?outcome, "Move rejected");
            return outcome;
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.apply(action);

        #[cfg(debug_assertions)]
        if let Err(err) = MoveContract::post(&before, self) {
            tracing::error!(%action, error = %err, "Move contract broken");
            panic!("{err}");
        }

        info!(%action, moves = self.move_count, "Move committed");

        if rules::is_solved(self) {
            self.status = MatchStatus::Over(Outcome::Solved);
            info!(moves = self.move_count, "Puzzle solved");
        }

        MoveOutcome::Committed
    }

    /// Applies a move whose preconditions already hold.
    pub(crate) fn apply(&mut self, action: Move) {
        let disk = self.pegs[action.from.index()].pop();
        debug_assert_eq!(disk.map(|d| d.id()), Some(action.disk));
        if let Some(disk) = disk {
            self.pegs[action.to.index()].push(disk);
            self.move_count += 1;
            self.history.push(action);
        }
    }

    /// Latches a timeout. Returns true if the match was still in progress.
    #[instrument(skip(self))]
    pub fn end_by_timeout(&mut self) -> bool {
        if self.status.is_over() {
            return false;
        }
        self.status = MatchStatus::Over(Outcome::TimedOut);
        info!(moves = self.move_count, "Match timed out");
        true
    }

    /// Returns the top disk of `peg`.
    pub fn top_disk(&self, peg: PegId) -> Option<&Disk> {
        self.peg(peg).and_then(Peg::top)
    }

    /// Number of disks on `peg`; zero for an unknown peg.
    pub fn disk_count(&self, peg: PegId) -> usize {
        self.peg(peg).map_or(0, Peg::count)
    }

    /// Looks up a disk wherever it rests.
    pub fn disk(&self, id: DiskId) -> Option<&Disk> {
        self.pegs
            .iter()
            .flat_map(|peg| peg.disks())
            .find(|disk| disk.id() == id)
    }

    /// True if `disk` is the top disk of the peg it rests on.
    pub fn is_top_disk(&self, disk: DiskId) -> bool {
        self.disk(disk)
            .and_then(Disk::current_peg)
            .and_then(|peg| self.top_disk(peg))
            .is_some_and(|top| top.id() == disk)
    }

    /// Returns a peg by id.
    pub fn peg(&self, id: PegId) -> Option<&Peg> {
        self.pegs.get(id.index())
    }

    /// All pegs in index order.
    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }

    /// Total number of disks in the match.
    pub fn total_disks(&self) -> usize {
        self.disk_sizes.len()
    }

    /// Disk sizes in id order, as supplied at setup.
    pub fn disk_sizes(&self) -> &[u32] {
        &self.disk_sizes
    }

    /// The peg that held the initial pile.
    pub fn source_peg(&self) -> PegId {
        self.source_peg
    }

    /// The peg that must hold every disk to win.
    pub fn winning_peg(&self) -> PegId {
        self.winning_peg
    }

    /// Number of committed moves.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Committed moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Current lifecycle status.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Outcome once the match is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.status.outcome()
    }

    /// True once the match is over.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// True if every disk rests on the winning peg.
    pub fn is_solved(&self) -> bool {
        rules::is_solved(self)
    }

    /// Renders the stacks as text, one line per peg, bottom to top.
    pub fn display(&self) -> String {
        self.pegs
            .iter()
            .map(|peg| {
                let sizes = peg
                    .disks()
                    .iter()
                    .map(|d| d.size().to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                let marker = if peg.id() == self.winning_peg { "*" } else { " " };
                format!("{}{}| {}", peg.id(), marker, sizes)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn validate_setup(
    disk_sizes: &[u32],
    peg_count: usize,
    source: PegId,
    winning: PegId,
) -> Result<(), ConfigurationError> {
    if disk_sizes.is_empty() {
        return Err(ConfigurationError::EmptyDiskSet);
    }
    if disk_sizes.contains(&0) {
        return Err(ConfigurationError::ZeroDiskSize);
    }
    let mut seen = HashSet::with_capacity(disk_sizes.len());
    if let Some(&size) = disk_sizes.iter().find(|size| !seen.insert(**size)) {
        return Err(ConfigurationError::DuplicateDiskSize { size });
    }
    if peg_count == 0 {
        return Err(ConfigurationError::NoPegs);
    }
    for (role, peg) in [(PegRole::Source, source), (PegRole::Winning, winning)] {
        if peg.index() >= peg_count {
            return Err(ConfigurationError::PegOutOfRange {
                role,
                index: peg.index(),
                peg_count,
            });
        }
    }
    if source == winning {
        return Err(ConfigurationError::SourceIsWinning);
    }
    Ok(())
}
