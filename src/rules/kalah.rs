//! Kalah rules.
//!
//! `play_pit` is the board-level move: validate ownership, sow, capture.
//! `Kalah` wraps it with the state-level checks (game over, turn order),
//! the turn transition and move history.

use tracing::{debug, info, trace};

use crate::core::{Board, GameState, MoveRecord, PitList, Side, SLOT_COUNT};

use super::capture;
use super::engine::{GameResult, MoveResult, RulesEngine};
use super::error::MoveError;
use super::scoring;
use super::sowing;

fn check_range(pit: usize) -> Result<(), MoveError> {
    if pit >= SLOT_COUNT {
        return Err(MoveError::OutOfRange(pit));
    }
    Ok(())
}

/// Check that an on-board `pit` belongs to `side`.
fn check_owner(pit: usize, side: Side) -> Result<(), MoveError> {
    if Board::side_of(pit) != Some(side) {
        return Err(MoveError::WrongSide { pit, side });
    }
    Ok(())
}

/// State-level checks, in rejection order: range, phase, ownership, turn.
fn validate(state: &GameState, side: Side, pit: usize) -> Result<(), MoveError> {
    check_range(pit)?;
    if state.is_over() {
        return Err(MoveError::GameOver);
    }
    check_owner(pit, side)?;
    let current = state.current_player();
    if side != current {
        return Err(MoveError::NotYourTurn { side, current });
    }
    Ok(())
}

/// Sow `pit` for `side` on a bare board and resolve any capture.
///
/// Checks only what the board can answer: range, ownership and emptiness.
/// Turn order and game phase are the caller's concern.
pub fn play_pit(board: &mut Board, side: Side, pit: usize) -> Result<MoveResult, MoveError> {
    check_range(pit)?;
    check_owner(pit, side)?;
    let sown = board.count(pit);
    if sown == 0 {
        return Err(MoveError::EmptyPit(pit));
    }

    let total_before = board.total();
    let predicted = sowing::predict_end(pit, sown, side);

    let end_index = sowing::sow(board, pit, side);
    debug_assert_eq!(
        end_index, predicted,
        "closed-form end slot disagrees with sowing ({side} pit {pit}, {sown} seeds)"
    );

    let gets_another_move = end_index == side.store();
    let capture = if Board::is_store(end_index) {
        None
    } else {
        capture::resolve(board, end_index, side)
    };

    debug_assert_eq!(board.total(), total_before, "seed total changed by a move");

    Ok(MoveResult {
        side,
        pit,
        sown,
        end_index,
        gets_another_move,
        capture,
    })
}

/// Play `pit` on a scratch copy of `board`.
///
/// Returns the resulting board and move result, or `None` if the move is
/// illegal. The input board is never modified.
#[must_use]
pub fn probe(board: &Board, side: Side, pit: usize) -> Option<(Board, MoveResult)> {
    let mut scratch = *board;
    let result = play_pit(&mut scratch, side, pit).ok()?;
    Some((scratch, result))
}

/// The standard Kalah ruleset: 6 pits per side, 4 seeds per pit,
/// captures, extra turns on landing in one's own store.
#[derive(Clone, Copy, Debug, Default)]
pub struct Kalah;

impl Kalah {
    /// Create the rules engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RulesEngine for Kalah {
    fn legal_moves(&self, state: &GameState, side: Side) -> PitList {
        if state.is_over() || state.current_player() != side {
            return PitList::new();
        }
        state.board().legal_pits(side)
    }

    fn apply_move(
        &self,
        state: &mut GameState,
        side: Side,
        pit: usize,
    ) -> Result<MoveResult, MoveError> {
        let played =
            validate(state, side, pit).and_then(|()| play_pit(state.board_mut(), side, pit));
        let result = match played {
            Ok(result) => result,
            Err(err) => {
                trace!(%side, pit, %err, "move rejected");
                return Err(err);
            }
        };

        let turn = state.turn_number();
        let sequence = state.next_sequence();
        state.record(MoveRecord {
            side,
            pit,
            end_index: result.end_index,
            extra_turn: result.gets_another_move,
            captured: result.captured_seeds(),
            turn,
            sequence,
        });

        if !result.gets_another_move {
            state.pass_turn();
        }

        debug!(
            %side,
            pit,
            sown = result.sown,
            end = result.end_index,
            captured = result.captured_seeds(),
            extra_turn = result.gets_another_move,
            "move applied"
        );

        Ok(result)
    }

    fn finalize(&self, state: &mut GameState) -> Option<GameResult> {
        if let Some(outcome) = state.outcome() {
            return Some(*outcome);
        }
        if !scoring::has_winner(state.board()) {
            return None;
        }

        let total_before = state.board().total();
        scoring::sweep(state.board_mut());
        debug_assert_eq!(state.board().total(), total_before, "seed total changed by sweep");

        let outcome = scoring::decide(state.board());
        state.set_outcome(outcome);

        let scores = state.board().scores();
        info!(
            ?outcome,
            player0 = scores[Side::Player0],
            player1 = scores[Side::Player1],
            "game over"
        );

        Some(outcome)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state
            .outcome()
            .copied()
            .or_else(|| scoring::projected_result(state.board()))
    }
}
