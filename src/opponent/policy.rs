//! Opponent policy trait and the uniform random opponent.

use crate::core::{Board, GameRng, Side};

/// Policy for choosing the computer's pit.
///
/// Implementations read the board and never modify it. All look-ahead runs
/// on scratch copies (see `crate::rules::probe`).
pub trait OpponentPolicy: Send + Sync {
    /// Short name, matching `OpponentKind::name`.
    fn name(&self) -> &'static str;

    /// Choose a pit for `side`.
    ///
    /// Returns a non-empty pit owned by `side` whenever one exists. `None`
    /// means `side` has no seeds left, which only happens once the game is
    /// over.
    fn choose_move(&self, board: &Board, side: Side, rng: &mut GameRng) -> Option<usize>;
}

/// Uniform random opponent.
///
/// Selects uniformly from the non-empty pits.
#[derive(Clone, Debug, Default)]
pub struct RandomOpponent;

impl OpponentPolicy for RandomOpponent {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_move(&self, board: &Board, side: Side, rng: &mut GameRng) -> Option<usize> {
        let legal = board.legal_pits(side);
        rng.choose(&legal).copied()
    }
}
