//! Move history records.
//!
//! Every accepted move is appended to `GameState::history` so callers can
//! replay or inspect a game after the fact.

use serde::{Deserialize, Serialize};

use super::player::Side;

/// A recorded move with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that moved.
    pub side: Side,

    /// The pit sown from.
    pub pit: usize,

    /// Slot that received the last seed.
    pub end_index: usize,

    /// Whether the mover kept the turn.
    pub extra_turn: bool,

    /// Seeds moved to the store by a capture (0 if none).
    pub captured: u8,

    /// Turn number when the move was made.
    pub turn: u32,

    /// Position of this move in the game (0-based).
    pub sequence: u32,
}

impl MoveRecord {
    /// Whether the move captured anything.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured > 0
    }
}
