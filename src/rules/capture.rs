//! Capture detection and execution.
//!
//! A move captures when its last seed lands in an empty pit on the mover's
//! own side and the facing pit holds seeds. Both pits are emptied into the
//! mover's store.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Side};

/// A completed capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    /// The mover's pit where the last seed landed.
    pub pit: usize,
    /// The facing pit that was emptied.
    pub opposite: usize,
    /// Seeds moved into the store (facing pit's seeds + 1).
    pub seeds: u8,
}

/// Whether the board, just after sowing, is in a capturing position.
///
/// `end` is the slot that received the last seed.
#[must_use]
pub fn is_capture(board: &Board, end: usize, side: Side) -> bool {
    if Board::side_of(end) != Some(side) || board.count(end) != 1 {
        return false;
    }
    matches!(Board::opposite(end), Some(opp) if board.count(opp) > 0)
}

/// Execute the capture if there is one.
pub(crate) fn resolve(board: &mut Board, end: usize, side: Side) -> Option<Capture> {
    if !is_capture(board, end, side) {
        return None;
    }
    let opposite = Board::opposite(end)?;

    let seeds = board.take(opposite) + board.take(end);
    board.add(side.store(), seeds);

    Some(Capture {
        pit: end,
        opposite,
        seeds,
    })
}
