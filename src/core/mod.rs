//! Core types: sides, board, state, history, RNG, configuration.
//!
//! The board and state here are plain data. All rule logic lives in
//! `crate::rules`, which is the only code that mutates them.

pub mod board;
pub mod config;
pub mod player;
pub mod record;
pub mod rng;
pub mod state;

pub use board::{
    Board, PitList, Slot, MAX_BOARD_SEEDS, PITS_PER_SIDE, SEEDS_PER_PIT, SLOT_COUNT, TOTAL_SEEDS,
};
pub use config::{ConfigError, OpponentKind, PlayMode, SessionConfig, MAX_OPPONENT_DELAY_MS};
pub use player::{Side, SideMap};
pub use record::MoveRecord;
pub use rng::GameRng;
pub use state::{GameState, Phase};
