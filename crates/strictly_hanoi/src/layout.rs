//! Peg geometry used to resolve settle targets.

use super::error::ConfigurationError;
use super::{PegId, Position};
use serde::{Deserialize, Serialize};

/// Horizontal distance between pegs in the default layout.
pub const DEFAULT_PEG_SPACING: f32 = 3.0;

/// Vertical distance between stacked disks in the default layout.
pub const DEFAULT_DISK_HEIGHT: f32 = 0.5;

/// Base position of each peg and the height of one disk.
///
/// Slot `i` of a peg is `anchor + (0, i * disk_height)`; slot 0 is the
/// bottom of the stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PegLayout {
    anchors: Vec<Position>,
    #[serde(default = "default_disk_height")]
    disk_height: f32,
}

fn default_disk_height() -> f32 {
    DEFAULT_DISK_HEIGHT
}

impl PegLayout {
    /// Creates a layout from explicit anchors.
    pub fn new(anchors: Vec<Position>, disk_height: f32) -> Self {
        Self {
            anchors,
            disk_height,
        }
    }

    /// Pegs spaced evenly along the x axis.
    pub fn uniform(peg_count: usize) -> Self {
        let anchors = (0..peg_count)
            .map(|i| Position::new(i as f32 * DEFAULT_PEG_SPACING, 0.0))
            .collect();
        Self::new(anchors, DEFAULT_DISK_HEIGHT)
    }

    /// Checks the layout covers exactly `peg_count` pegs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::LayoutMismatch`] otherwise.
    pub fn validate(&self, peg_count: usize) -> Result<(), ConfigurationError> {
        if self.anchors.len() == peg_count {
            Ok(())
        } else {
            Err(ConfigurationError::LayoutMismatch {
                anchors: self.anchors.len(),
                peg_count,
            })
        }
    }

    /// Base position of `peg`.
    pub fn anchor(&self, peg: PegId) -> Option<Position> {
        self.anchors.get(peg.index()).copied()
    }

    /// Position of the `index`-th disk from the bottom of `peg`.
    pub fn slot(&self, peg: PegId, index: usize) -> Option<Position> {
        self.anchor(peg)
            .map(|anchor| anchor + Position::new(0.0, index as f32 * self.disk_height))
    }

    /// Number of pegs covered.
    pub fn peg_count(&self) -> usize {
        self.anchors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_slots_stack_upward() {
        let layout = PegLayout::uniform(3);
        assert_eq!(layout.anchor(PegId(2)), Some(Position::new(6.0, 0.0)));
        assert_eq!(layout.slot(PegId(1), 2), Some(Position::new(3.0, 1.0)));
        assert_eq!(layout.slot(PegId(3), 0), None);
    }

    #[test]
    fn test_validate_counts_anchors() {
        let layout = PegLayout::uniform(3);
        assert!(layout.validate(3).is_ok());
        assert_eq!(
            layout.validate(4),
            Err(ConfigurationError::LayoutMismatch {
                anchors: 3,
                peg_count: 4
            })
        );
    }
}
