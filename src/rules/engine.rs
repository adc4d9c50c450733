//! Rules engine trait and move/game results.
//!
//! The engine is the only code that mutates a `GameState`:
//! - `apply_move` validates and plays a pit
//! - `finalize` sweeps the board and records the outcome
//!
//! Both are synchronous and run to completion.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PitList, Side};

use super::capture::Capture;
use super::error::MoveError;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Side),
    /// Equal stores.
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

/// Outcome of an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// The side that moved.
    pub side: Side,
    /// Pit sown from.
    pub pit: usize,
    /// Seeds that were in the pit.
    pub sown: u8,
    /// Slot that received the last seed.
    pub end_index: usize,
    /// Last seed landed in the mover's own store.
    pub gets_another_move: bool,
    /// Capture made by this move, if any.
    pub capture: Option<Capture>,
}

impl MoveResult {
    /// Whether the move captured.
    #[must_use]
    pub fn captured(&self) -> bool {
        self.capture.is_some()
    }

    /// Seeds moved to the store by a capture (0 if none).
    #[must_use]
    pub fn captured_seeds(&self) -> u8 {
        self.capture.map_or(0, |c| c.seeds)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_move`: must leave the state untouched when it returns `Err`
/// - `finalize`: idempotent once an outcome is recorded
/// - `is_terminal`: must not mutate
pub trait RulesEngine {
    /// Pits `side` may legally play. Empty when the game is over or when it
    /// is not `side`'s turn.
    fn legal_moves(&self, state: &GameState, side: Side) -> PitList;

    /// Play `pit` for `side`.
    fn apply_move(
        &self,
        state: &mut GameState,
        side: Side,
        pit: usize,
    ) -> Result<MoveResult, MoveError>;

    /// Sweep and record the outcome once one side is empty.
    ///
    /// Returns `None` (and changes nothing) while both sides hold seeds.
    fn finalize(&self, state: &mut GameState) -> Option<GameResult>;

    /// The recorded outcome, or the one `finalize` would produce now.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Play `pit` for whoever is to move.
    fn apply_current(&self, state: &mut GameState, pit: usize) -> Result<MoveResult, MoveError> {
        let side = state.current_player();
        self.apply_move(state, side, pit)
    }
}
