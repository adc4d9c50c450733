//! Shared helpers for integration tests.

#![allow(dead_code)]

use kalah::core::{Board, GameState, Side, SLOT_COUNT};
use tracing_subscriber::{fmt, EnvFilter};

/// Install a test subscriber.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`. Safe to call
/// from every test; only the first call installs anything.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// A state with the given counts and `side` to move.
pub fn state_with(counts: [u8; SLOT_COUNT], side: Side) -> GameState {
    GameState::from_board(Board::from_counts(counts), side)
}

/// Sum of all slots.
pub fn total(state: &GameState) -> u32 {
    state.slot_counts().iter().map(|&c| u32::from(c)).sum()
}
