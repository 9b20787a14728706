//! Conservation invariant: the disk set never changes during a match.

use super::super::PuzzleBoard;
use super::Invariant;

/// Invariant: every disk created at setup rests on exactly one peg.
///
/// The total count stays constant, no disk appears twice, sizes match the
/// setup, and each disk's back-reference names the peg that holds it.
pub struct DiskConservationInvariant;

impl Invariant<PuzzleBoard> for DiskConservationInvariant {
    fn holds(board: &PuzzleBoard) -> bool {
        let sizes = board.disk_sizes();
        let mut seen = vec![false; sizes.len()];

        for peg in board.pegs() {
            for disk in peg.disks() {
                let index = disk.id().0;
                if index >= sizes.len() || seen[index] || sizes[index] != disk.size() {
                    return false;
                }
                if disk.current_peg() != Some(peg.id()) {
                    return false;
                }
                seen[index] = true;
            }
        }

        seen.iter().all(|&present| present)
    }

    fn description() -> &'static str {
        "Every disk rests on exactly one peg"
    }
}
