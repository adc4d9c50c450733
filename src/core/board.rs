//! The 14-slot Kalah board.
//!
//! ```text
//!      12  11  10   9   8   7        <- Player1's pits
//!  13                          6     <- stores (13: Player1, 6: Player0)
//!       0   1   2   3   4   5        <- Player0's pits
//! ```
//!
//! Sowing runs counter-clockwise: 0 → 5, store 6, 7 → 12, store 13, back to 0.
//! Only seed counts are tracked; slot owners are fixed by index.
//!
//! The board is mutated only by the rules engine (`crate::rules`), which keeps
//! the seed total unchanged across every completed operation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{Side, SideMap};

/// Number of slots on the board (12 pits + 2 stores).
pub const SLOT_COUNT: usize = 14;

/// Number of pits owned by each side.
pub const PITS_PER_SIDE: usize = 6;

/// Seeds placed in every pit at the start of a game.
pub const SEEDS_PER_PIT: u8 = 4;

/// Seeds on a standard board.
pub const TOTAL_SEEDS: u32 = (PITS_PER_SIDE as u32) * 2 * (SEEDS_PER_PIT as u32);

/// Most seeds a board may hold. Every slot count is a `u8`, so any total
/// up to this keeps every store and capture in range.
pub const MAX_BOARD_SEEDS: u32 = u8::MAX as u32;

/// Legal pit indices for one side.
pub type PitList = SmallVec<[usize; PITS_PER_SIDE]>;

/// Read-only view of one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Slot index (0..14).
    pub index: usize,
    /// Owning side; `None` for the two stores.
    pub owner: Option<Side>,
    /// Seeds currently held.
    pub count: u8,
}

/// Seed counts for all 14 slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    counts: [u8; SLOT_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board in the starting layout.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self {
            counts: [0; SLOT_COUNT],
        };
        board.reset();
        board
    }

    /// Create a board from explicit counts.
    ///
    /// Used to set up positions for tests and tooling. The total need not be 48,
    /// but the engine will preserve whatever total it starts with. It must not
    /// exceed `MAX_BOARD_SEEDS`; debug builds panic here if it does.
    #[must_use]
    pub fn from_counts(counts: [u8; SLOT_COUNT]) -> Self {
        let board = Self { counts };
        debug_assert!(
            board.total() <= MAX_BOARD_SEEDS,
            "board holds {} seeds, more than {}",
            board.total(),
            MAX_BOARD_SEEDS
        );
        board
    }

    /// Restore the starting layout: 4 seeds per pit, empty stores.
    pub fn reset(&mut self) {
        for (index, count) in self.counts.iter_mut().enumerate() {
            *count = if Self::is_store(index) { 0 } else { SEEDS_PER_PIT };
        }
    }

    // === Geometry ===

    /// Owner of a slot. `None` for stores and out-of-range indices.
    #[must_use]
    pub const fn side_of(index: usize) -> Option<Side> {
        match index {
            0..=5 => Some(Side::Player0),
            7..=12 => Some(Side::Player1),
            _ => None,
        }
    }

    /// Whether a slot is one of the two stores.
    #[must_use]
    pub const fn is_store(index: usize) -> bool {
        index == 6 || index == 13
    }

    /// The pit facing `index` across the board.
    ///
    /// Defined for pits only.
    #[must_use]
    pub const fn opposite(index: usize) -> Option<usize> {
        if Self::side_of(index).is_some() {
            Some(12 - index)
        } else {
            None
        }
    }

    // === Queries ===

    /// Seeds held by a slot.
    ///
    /// Panics if `index >= 14`.
    #[must_use]
    pub fn count(&self, index: usize) -> u8 {
        self.counts[index]
    }

    /// Full view of a slot, or `None` if out of range.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<Slot> {
        self.counts.get(index).map(|&count| Slot {
            index,
            owner: Self::side_of(index),
            count,
        })
    }

    /// Iterate over all slots in index order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        (0..SLOT_COUNT).filter_map(|i| self.slot(i))
    }

    /// Snapshot of all slot counts.
    #[must_use]
    pub fn counts(&self) -> [u8; SLOT_COUNT] {
        self.counts
    }

    /// Seeds in a side's store.
    #[must_use]
    pub fn store(&self, side: Side) -> u8 {
        self.counts[side.store()]
    }

    /// Store counts for both sides.
    #[must_use]
    pub fn scores(&self) -> SideMap<u8> {
        SideMap::new(|side| self.store(side))
    }

    /// Seeds remaining in a side's pits (stores excluded).
    #[must_use]
    pub fn side_seeds(&self, side: Side) -> u32 {
        self.counts[side.pits()].iter().map(|&c| u32::from(c)).sum()
    }

    /// Whether all six of a side's pits are empty.
    #[must_use]
    pub fn side_is_empty(&self, side: Side) -> bool {
        self.counts[side.pits()].iter().all(|&c| c == 0)
    }

    /// Non-empty pits a side may sow from, in index order.
    #[must_use]
    pub fn legal_pits(&self, side: Side) -> PitList {
        side.pits().filter(|&i| self.counts[i] > 0).collect()
    }

    /// Total seeds on the board.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }

    // === Mutation (engine only) ===

    /// Empty a slot, returning what it held.
    pub(crate) fn take(&mut self, index: usize) -> u8 {
        std::mem::take(&mut self.counts[index])
    }

    /// Add seeds to a slot.
    pub(crate) fn add(&mut self, index: usize, seeds: u8) {
        self.counts[index] += seeds;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "    ")?;
        for i in Side::Player1.pits().rev() {
            write!(f, "{:>4}", self.counts[i])?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>4}{:>28}",
            self.counts[Side::Player1.store()],
            self.counts[Side::Player0.store()]
        )?;
        write!(f, "    ")?;
        for i in Side::Player0.pits() {
            write!(f, "{:>4}", self.counts[i])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let board = Board::new();
        for i in 0..SLOT_COUNT {
            let expected = if i == 6 || i == 13 { 0 } else { 4 };
            assert_eq!(board.count(i), expected, "slot {}", i);
        }
        assert_eq!(board.total(), TOTAL_SEEDS);
        assert_eq!(TOTAL_SEEDS, 48);
    }

    #[test]
    fn test_side_of() {
        for i in 0..6 {
            assert_eq!(Board::side_of(i), Some(Side::Player0));
        }
        for i in 7..13 {
            assert_eq!(Board::side_of(i), Some(Side::Player1));
        }
        assert_eq!(Board::side_of(6), None);
        assert_eq!(Board::side_of(13), None);
        assert_eq!(Board::side_of(14), None);
    }

    #[test]
    fn test_is_store() {
        let stores: Vec<_> = (0..SLOT_COUNT).filter(|&i| Board::is_store(i)).collect();
        assert_eq!(stores, vec![6, 13]);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Board::opposite(0), Some(12));
        assert_eq!(Board::opposite(4), Some(8));
        assert_eq!(Board::opposite(12), Some(0));
        assert_eq!(Board::opposite(6), None);
        assert_eq!(Board::opposite(13), None);

        for i in (0..6).chain(7..13) {
            let opp = Board::opposite(i).unwrap();
            assert_eq!(Board::opposite(opp), Some(i));
            assert_ne!(Board::side_of(i), Board::side_of(opp));
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut board = Board::from_counts([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 0]);
        board.reset();
        let once = board;
        board.reset();
        assert_eq!(board, once);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_slot_view() {
        let board = Board::new();
        let store = board.slot(13).unwrap();
        assert_eq!(store.owner, None);
        assert_eq!(store.count, 0);

        let pit = board.slot(9).unwrap();
        assert_eq!(pit.owner, Some(Side::Player1));
        assert_eq!(pit.count, 4);

        assert!(board.slot(14).is_none());
        assert_eq!(board.slots().count(), SLOT_COUNT);
    }

    #[test]
    fn test_legal_pits_skip_empty() {
        let board = Board::from_counts([0, 2, 0, 1, 0, 0, 10, 3, 0, 0, 0, 0, 5, 27]);
        assert_eq!(board.legal_pits(Side::Player0).as_slice(), &[1, 3]);
        assert_eq!(board.legal_pits(Side::Player1).as_slice(), &[7, 12]);
        assert_eq!(board.side_seeds(Side::Player0), 3);
        assert_eq!(board.side_seeds(Side::Player1), 8);
        assert!(!board.side_is_empty(Side::Player0));
    }

    #[test]
    fn test_scores() {
        let board = Board::from_counts([0, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 28]);
        let scores = board.scores();
        assert_eq!(scores[Side::Player0], 20);
        assert_eq!(scores[Side::Player1], 28);
    }

    #[test]
    fn test_display_layout() {
        let text = Board::new().to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].trim_start().starts_with('0'));
        assert_eq!(lines[2].split_whitespace().count(), 6);
    }

    #[test]
    fn test_full_board_sweeps_into_one_store() {
        let mut board = Board::from_counts([0, 0, 0, 0, 0, 0, 10, 10, 0, 0, 0, 0, 0, 235]);
        assert_eq!(board.total(), MAX_BOARD_SEEDS);

        let seeds = board.take(7);
        board.add(Side::Player1.store(), seeds);
        assert_eq!(board.store(Side::Player1), 245);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "more than 255")]
    fn test_from_counts_rejects_overfull_board() {
        let _ = Board::from_counts([0, 0, 0, 0, 0, 0, 10, 10, 0, 0, 0, 0, 0, 250]);
    }

    #[test]
    fn test_board_serde() {
        let board = Board::new();
        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, restored);
    }
}
