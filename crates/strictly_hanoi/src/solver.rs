//! Reference solver producing the optimal move sequence.
//!
//! Used to drive scripted matches and to check a finished match against the
//! minimum number of moves.

use super::{Disk, DiskId, PegId, PuzzleBoard};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// One move of a solution, by stack position rather than disk identity.
///
/// `level` counts from the smallest disk: level 0 is the smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Step {
    /// Size rank of the moved disk, smallest first.
    pub level: usize,
    /// Peg the disk leaves.
    pub from: PegId,
    /// Peg the disk lands on.
    pub to: PegId,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Minimum number of moves for `disk_count` disks on three pegs.
///
/// ```
/// assert_eq!(strictly_hanoi::solver::minimum_moves(3), 7);
/// ```
pub fn minimum_moves(disk_count: usize) -> u64 {
    u32::try_from(disk_count)
        .ok()
        .and_then(|n| 1u64.checked_shl(n))
        .map_or(u64::MAX, |p| p - 1)
}

/// Optimal sequence moving a pile of `disk_count` disks from `from` to `to`.
#[instrument]
pub fn optimal_moves(disk_count: usize, from: PegId, to: PegId, via: PegId) -> Vec<Step> {
    let mut steps = Vec::new();
    collect(disk_count, from, to, via, &mut steps);
    steps
}

fn collect(levels: usize, from: PegId, to: PegId, via: PegId, steps: &mut Vec<Step>) {
    if levels == 0 {
        return;
    }
    collect(levels - 1, from, via, to, steps);
    steps.push(Step::new(levels - 1, from, to));
    collect(levels - 1, via, to, from, steps);
}

/// Solves a freshly set up board.
///
/// The spare peg is the lowest-indexed peg that is neither the source nor
/// the winning peg. Returns `None` for boards with fewer than three pegs or
/// boards that have already moved.
pub fn solve(board: &PuzzleBoard) -> Option<Vec<Step>> {
    if board.move_count() != 0 {
        return None;
    }
    let (source, winning) = (board.source_peg(), board.winning_peg());
    let spare = board
        .pegs()
        .iter()
        .map(|peg| peg.id())
        .find(|&peg| peg != source && peg != winning)?;
    Some(optimal_moves(board.total_disks(), source, winning, spare))
}

/// Resolves a step to the disk currently on top of its source peg.
pub fn disk_for(board: &PuzzleBoard, step: Step) -> Option<DiskId> {
    board.top_disk(step.from).map(Disk::id)
}
