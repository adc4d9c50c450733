//! Heuristic computer opponent.
//!
//! Priorities, highest first:
//!
//! 1. **Defend**: if the human could capture next turn, play the move that
//!    shrinks their best capture the most (by moving the threatened seeds,
//!    filling the landing pit, or capturing first).
//! 2. **Attack**: the largest capture available right now.
//! 3. **Extra turn**: a pit whose last seed lands in our own store. The one
//!    nearest the store goes first, since sowing it leaves the others'
//!    counts unchanged.
//! 4. **Fallback**: a uniformly random legal pit.
//!
//! One ply of look-ahead on scratch boards; the live board is never touched.

use tracing::{debug, trace};

use crate::core::{Board, GameRng, Side};
use crate::rules::{has_winner, lands_in_store, probe};

use super::config::HeuristicConfig;
use super::policy::OpponentPolicy;

/// Which priority produced a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
    Defend,
    Attack,
    ExtraTurn,
    Random,
}

/// Largest capture `side` can make on `board`, as (pit, seeds captured).
///
/// Ties go to the lower pit index.
#[must_use]
pub fn best_capture(board: &Board, side: Side) -> Option<(usize, u8)> {
    let mut best: Option<(usize, u8)> = None;
    for pit in board.legal_pits(side) {
        let Some((_, result)) = probe(board, side, pit) else {
            continue;
        };
        let seeds = result.captured_seeds();
        if seeds > 0 && best.map_or(true, |(_, top)| seeds > top) {
            best = Some((pit, seeds));
        }
    }
    best
}

/// Seeds the opponent of `side` could capture with their best move.
#[must_use]
pub fn threat_against(board: &Board, side: Side) -> u8 {
    best_capture(board, side.opponent()).map_or(0, |(_, seeds)| seeds)
}

/// Computer opponent that plays by fixed priorities.
#[derive(Clone, Debug, Default)]
pub struct HeuristicOpponent {
    config: HeuristicConfig,
}

impl HeuristicOpponent {
    #[must_use]
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// Choose a pit and report which priority chose it.
    pub fn choose_with_reason(
        &self,
        board: &Board,
        side: Side,
        rng: &mut GameRng,
    ) -> Option<(usize, Reason)> {
        let legal = board.legal_pits(side);
        if legal.is_empty() {
            return None;
        }

        let tactical = self
            .config
            .defend
            .then(|| defend(board, side, &legal).map(|pit| (pit, Reason::Defend)))
            .flatten()
            .or_else(|| {
                self.config
                    .attack
                    .then(|| best_capture(board, side).map(|(pit, _)| (pit, Reason::Attack)))
                    .flatten()
            })
            .or_else(|| {
                self.config
                    .extra_turn
                    .then(|| extra_turn(board, side, &legal).map(|pit| (pit, Reason::ExtraTurn)))
                    .flatten()
            });

        let choice = match tactical {
            Some(choice) => choice,
            None => (*rng.choose(&legal)?, Reason::Random),
        };

        debug!(%side, pit = choice.0, reason = ?choice.1, "opponent chose pit");
        Some(choice)
    }
}

impl OpponentPolicy for HeuristicOpponent {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn choose_move(&self, board: &Board, side: Side, rng: &mut GameRng) -> Option<usize> {
        self.choose_with_reason(board, side, rng).map(|(pit, _)| pit)
    }
}

/// Move that denies the most of the human's best capture.
///
/// Ranked by (seeds denied, own capture, extra turn); ties keep the lower
/// pit index.
fn defend(board: &Board, side: Side, legal: &[usize]) -> Option<usize> {
    let threat = threat_against(board, side);
    if threat == 0 {
        return None;
    }

    let mut best: Option<(usize, (u8, u8, bool))> = None;
    for &pit in legal {
        let Some((after, result)) = probe(board, side, pit) else {
            continue;
        };
        let remaining = if has_winner(&after) {
            0
        } else {
            threat_against(&after, side)
        };
        let denied = threat.saturating_sub(remaining);
        trace!(pit, threat, remaining, "defence probe");
        if denied == 0 {
            continue;
        }

        let key = (denied, result.captured_seeds(), result.gets_another_move);
        if best.map_or(true, |(_, top)| key > top) {
            best = Some((pit, key));
        }
    }
    best.map(|(pit, _)| pit)
}

/// Extra-turn pit nearest the store.
fn extra_turn(board: &Board, side: Side, legal: &[usize]) -> Option<usize> {
    legal
        .iter()
        .rev()
        .copied()
        .find(|&pit| lands_in_store(pit, board.count(pit), side))
}
