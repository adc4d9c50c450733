//! Sides of the board and per-side data storage.
//!
//! ## Side
//!
//! Kalah is strictly two-player: `Player0` owns pits 0-5 and store 6,
//! `Player1` owns pits 7-12 and store 13.
//!
//! ## SideMap
//!
//! Fixed-size per-side storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, Range};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Player0,
    Player1,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::Player0, Side::Player1];

    /// Build a side from its 0-based index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Side::Player0),
            1 => Some(Side::Player1),
            _ => None,
        }
    }

    /// Raw side index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player0 => 0,
            Side::Player1 => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player0 => Side::Player1,
            Side::Player1 => Side::Player0,
        }
    }

    /// Slot index of this side's store.
    #[must_use]
    pub const fn store(self) -> usize {
        match self {
            Side::Player0 => 6,
            Side::Player1 => 13,
        }
    }

    /// Slot indices of this side's six pits.
    #[must_use]
    pub const fn pits(self) -> Range<usize> {
        match self {
            Side::Player0 => 0..6,
            Side::Player1 => 7..13,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index())
    }
}

/// Per-side data storage with O(1) access.
///
/// ```
/// use kalah::core::{Side, SideMap};
///
/// let mut scores: SideMap<u8> = SideMap::new(|_| 0);
/// scores[Side::Player1] = 25;
/// assert_eq!(scores[Side::Player0], 0);
/// assert_eq!(scores[Side::Player1], 25);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player0), factory(Side::Player1)],
        }
    }

}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        &self.data[side.index()]
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.data[side.index()]
    }
}
