//! # kalah
//!
//! A two-player Kalah (Mancala) rule engine with a computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Rules Own Mutation**: `Board` and `GameState` are plain data. Only
//!    the `RulesEngine` changes them, and a rejected move changes nothing.
//!
//! 2. **Seeds Are Conserved**: every accepted move and the final sweep keep
//!    the 48 seeds on the board. Debug builds assert it after each move.
//!
//! 3. **Deterministic Opponents**: the computer's random choices come from a
//!    seeded `GameRng`, so the same seed replays the same game.
//!
//! ## Board Layout
//!
//! ```text
//!       12  11  10   9   8   7
//!   13                           6
//!        0   1   2   3   4   5
//! ```
//!
//! Slots 0-5 are Player 0's pits and 6 its store; 7-12 are Player 1's pits
//! and 13 its store. Sowing runs counter-clockwise in index order.
//!
//! ## Modules
//!
//! - `core`: Sides, board, state, move history, RNG, configuration
//! - `rules`: Sowing, captures, scoring and the `RulesEngine` trait
//! - `opponent`: Random and heuristic computer opponents
//! - `session`: One game plus its configured opponent, for front ends

pub mod core;
pub mod rules;
pub mod opponent;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Side, SideMap, Slot, PitList,
    GameRng, GameState, MoveRecord, Phase,
    SessionConfig, PlayMode, OpponentKind, ConfigError,
    SLOT_COUNT, PITS_PER_SIDE, SEEDS_PER_PIT, TOTAL_SEEDS, MAX_BOARD_SEEDS,
};

pub use crate::rules::{Capture, GameResult, Kalah, MoveError, MoveResult, RulesEngine};

pub use crate::opponent::{
    HeuristicConfig, HeuristicOpponent, OpponentPolicy, RandomOpponent, Reason,
};

pub use crate::session::{OpponentTurn, Session, TurnReport};
