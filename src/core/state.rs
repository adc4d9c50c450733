//! Game state: board, turn, outcome and history.
//!
//! `GameState` exclusively owns its `Board`. Mutation goes through the rules
//! engine (`RulesEngine::apply_move` / `RulesEngine::finalize`) and
//! `GameState::reset`; callers outside the crate only get read access.
//!
//! History uses an `im` persistent vector, so cloning a state is O(1)
//! regardless of game length.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::{Board, SLOT_COUNT};
use super::player::Side;
use super::record::MoveRecord;
use crate::rules::{scoring, GameResult};

/// Lifecycle phase of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are being accepted.
    InProgress,
    /// An outcome has been recorded; only `reset` leaves this phase.
    Over,
}

/// Complete state of one Kalah game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,

    /// Side to move.
    current_player: Side,

    /// Set once by `finalize`.
    outcome: Option<GameResult>,

    /// Turn number (starts at 1, bumped when the turn passes).
    turn_number: u32,

    /// Accepted moves in order.
    history: Vector<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a game in the starting layout with Player 0 to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Side::Player0)
    }

    /// Create a game from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board, current_player: Side) -> Self {
        Self {
            board,
            current_player,
            outcome: None,
            turn_number: 1,
            history: Vector::new(),
        }
    }

    /// Reinitialize every part of the state to the starting layout.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = Side::Player0;
        self.outcome = None;
        self.turn_number = 1;
        self.history = Vector::new();
    }

    // === Read access ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    #[must_use]
    pub fn current_player(&self) -> Side {
        self.current_player
    }

    /// Snapshot of all 14 slot counts for rendering.
    #[must_use]
    pub fn slot_counts(&self) -> [u8; SLOT_COUNT] {
        self.board.counts()
    }

    /// Recorded outcome, if the game has been finalized.
    #[must_use]
    pub fn outcome(&self) -> Option<&GameResult> {
        self.outcome.as_ref()
    }

    /// Winning side. `None` while in progress and for a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self.outcome {
            Some(GameResult::Winner(side)) => Some(side),
            _ => None,
        }
    }

    /// Whether one side's pits are all empty.
    ///
    /// True before `finalize` has run; see `is_over` for the recorded phase.
    #[must_use]
    pub fn has_winner(&self) -> bool {
        scoring::has_winner(&self.board)
    }

    /// Whether an outcome has been recorded.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_over() {
            Phase::Over
        } else {
            Phase::InProgress
        }
    }

    /// Turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Accepted moves in order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Engine access ===

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Hand the turn to the other side.
    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        self.turn_number += 1;
    }

    pub(crate) fn set_outcome(&mut self, outcome: GameResult) {
        self.outcome = Some(outcome);
    }

    /// Sequence number for the next recorded move.
    pub(crate) fn next_sequence(&self) -> u32 {
        self.history.len() as u32
    }

    pub(crate) fn record(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }
}
