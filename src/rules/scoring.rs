//! End-of-game detection, sweep and winner determination.
//!
//! The game ends as soon as either side's six pits are all empty. Whatever
//! is left on the other side goes to its owner's store, and the larger store
//! wins. Equal stores are a draw.

use std::cmp::Ordering;

use crate::core::{Board, Side};

use super::engine::GameResult;

/// Whether either side has run out of seeds in its pits.
#[must_use]
pub fn has_winner(board: &Board) -> bool {
    Side::ALL.into_iter().any(|side| board.side_is_empty(side))
}

/// Move each side's remaining pit seeds into that side's own store.
///
/// Only the non-empty side actually holds anything once the game is over.
pub fn sweep(board: &mut Board) {
    for side in Side::ALL {
        let mut remaining = 0;
        for pit in side.pits() {
            remaining += board.take(pit);
        }
        board.add(side.store(), remaining);
    }
}

/// Compare the two stores.
#[must_use]
pub fn decide(board: &Board) -> GameResult {
    match board.store(Side::Player0).cmp(&board.store(Side::Player1)) {
        Ordering::Greater => GameResult::Winner(Side::Player0),
        Ordering::Less => GameResult::Winner(Side::Player1),
        Ordering::Equal => GameResult::Draw,
    }
}

/// Result the game would have if it were finalized now, without touching
/// the board. `None` while both sides still have seeds.
#[must_use]
pub fn projected_result(board: &Board) -> Option<GameResult> {
    if !has_winner(board) {
        return None;
    }
    let mut scratch = *board;
    sweep(&mut scratch);
    Some(decide(&scratch))
}
