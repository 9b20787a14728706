//! A single peg and its stack of disks.

use super::rules::can_stack;
use super::types::{Disk, DiskId, PegId};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A vertical stack slot holding disks under the size-ordering rule.
///
/// The top of the stack is the end of the sequence. Reading from top to
/// bottom, sizes never decrease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peg {
    id: PegId,
    disks: Vec<Disk>,
}

impl Peg {
    /// Creates an empty peg.
    pub fn new(id: PegId) -> Self {
        Self {
            id,
            disks: Vec::new(),
        }
    }

    /// Returns the peg identity.
    pub fn id(&self) -> PegId {
        self.id
    }

    /// True if the peg is empty or its top disk is at least as large as `disk`.
    pub fn can_accept(&self, disk: &Disk) -> bool {
        can_stack(self.top(), disk)
    }

    /// Places `disk` on top of the stack.
    ///
    /// The caller must have checked [`Peg::can_accept`]. Pushing a larger disk
    /// onto a smaller one is a programming error and panics in debug builds.
    #[instrument(skip(self), fields(peg = %self.id))]
    pub fn push(&mut self, mut disk: Disk) {
        debug_assert!(
            self.can_accept(&disk),
            "{disk} pushed onto peg {} whose top is smaller",
            self.id
        );
        disk.set_current_peg(Some(self.id));
        trace!(disk = %disk.id(), height = self.disks.len(), "Disk pushed");
        self.disks.push(disk);
    }

    /// Pushes without the ordering check so tests can build broken stacks.
    #[cfg(test)]
    pub(crate) fn push_unchecked(&mut self, mut disk: Disk) {
        disk.set_current_peg(Some(self.id));
        self.disks.push(disk);
    }

    /// Removes and returns the top disk, clearing its peg reference.
    #[instrument(skip(self), fields(peg = %self.id))]
    pub fn pop(&mut self) -> Option<Disk> {
        let mut disk = self.disks.pop()?;
        disk.set_current_peg(None);
        trace!(disk = %disk.id(), "Disk popped");
        Some(disk)
    }

    /// Returns the top disk without removing it.
    pub fn top(&self) -> Option<&Disk> {
        self.disks.last()
    }

    /// Number of disks on this peg.
    pub fn count(&self) -> usize {
        self.disks.len()
    }

    /// True if the peg holds no disks.
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// True if the disk rests anywhere on this peg.
    pub fn contains(&self, disk: DiskId) -> bool {
        self.disks.iter().any(|d| d.id() == disk)
    }

    /// Disks from bottom to top.
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disk(id: usize, size: u32) -> Disk {
        Disk::new(DiskId(id), size)
    }

    #[test]
    fn test_empty_peg_accepts_anything() {
        let peg = Peg::new(PegId(0));
        assert!(peg.can_accept(&disk(0, 99)));
        assert!(peg.top().is_none());
        assert_eq!(peg.count(), 0);
    }

    #[test]
    fn test_push_sets_back_reference() {
        let mut peg = Peg::new(PegId(1));
        peg.push(disk(0, 3));
        assert_eq!(peg.top().map(Disk::current_peg), Some(Some(PegId(1))));
    }

    #[test]
    fn test_smaller_on_larger_only() {
        let mut peg = Peg::new(PegId(0));
        peg.push(disk(0, 2));
        assert!(peg.can_accept(&disk(1, 1)));
        assert!(peg.can_accept(&disk(2, 2)));
        assert!(!peg.can_accept(&disk(3, 3)));
    }

    #[test]
    fn test_pop_clears_back_reference() {
        let mut peg = Peg::new(PegId(0));
        peg.push(disk(0, 2));
        peg.push(disk(1, 1));

        let popped = peg.pop().expect("disk on peg");
        assert_eq!(popped.id(), DiskId(1));
        assert_eq!(popped.current_peg(), None);
        assert_eq!(peg.count(), 1);
    }

    #[test]
    fn test_pop_empty_returns_none() {
        let mut peg = Peg::new(PegId(0));
        assert!(peg.pop().is_none());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "whose top is smaller")]
    fn test_push_violation_panics_in_debug() {
        let mut peg = Peg::new(PegId(0));
        peg.push(disk(0, 1));
        peg.push(disk(1, 3));
    }
}
