//! Core domain types for the stacking puzzle.

use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Stable identity of a disk.
///
/// Ids are assigned in the order the disk sizes were supplied at setup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    derive_more::Display, derive_more::From,
)]
#[display("disk#{_0}")]
pub struct DiskId(pub usize);

/// Identity of a peg, displayed as a letter (`A`, `B`, `C`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    derive_more::From,
)]
pub struct PegId(pub usize);

impl PegId {
    /// Returns the zero-based index of this peg.
    pub fn index(self) -> usize {
        self.0
    }

    /// Parses a peg label (`A`-`Z`, case-insensitive) or a decimal index.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if let Ok(index) = label.parse::<usize>() {
            return Some(Self(index));
        }
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                Some(Self((c.to_ascii_uppercase() as u8 - b'A') as usize))
            }
            _ => None,
        }
    }
}

impl fmt::Display for PegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match u8::try_from(self.0) {
            Ok(i) if i < 26 => write!(f, "{}", char::from(b'A' + i)),
            _ => write!(f, "P{}", self.0),
        }
    }
}

/// A sized, liftable puzzle piece.
///
/// Disks are plain values. Stack membership is owned by whichever
/// [`Peg`](crate::Peg) holds the disk; `current_peg` is only a lookup aid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Disk {
    id: DiskId,
    size: u32,
    current_peg: Option<PegId>,
}

impl Disk {
    /// Creates a disk that does not rest on any peg yet.
    pub fn new(id: DiskId, size: u32) -> Self {
        Self {
            id,
            size,
            current_peg: None,
        }
    }

    /// Returns the disk identity.
    pub fn id(&self) -> DiskId {
        self.id
    }

    /// Returns the disk size.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the peg this disk rests on.
    pub fn current_peg(&self) -> Option<PegId> {
        self.current_peg
    }

    pub(crate) fn set_current_peg(&mut self, peg: Option<PegId>) {
        self.current_peg = peg;
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(size {})", self.id, self.size)
    }
}

/// World-space position used for pointer input and settle targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, new)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Position {
    /// Origin of the world.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Length of this position treated as a vector.
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Moves toward `target` by at most `max_delta`, never overshooting.
    pub fn move_towards(self, target: Self, max_delta: f32) -> Self {
        let delta = target - self;
        let distance = delta.length();
        if distance <= max_delta || distance <= f32::EPSILON {
            return target;
        }
        let scale = max_delta / distance;
        Self::new(self.x + delta.x * scale, self.y + delta.y * scale)
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
