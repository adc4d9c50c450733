//! Game sessions: the entry point for presentation code.
//!
//! A `Session` owns one `GameState` plus the configured opponent. Input
//! handlers call `apply_move(pit)` for the human; in single-player mode the
//! caller then waits whatever delay it likes and calls
//! `play_opponent_turn()`, which plays the computer's whole turn (extra
//! turns included) synchronously.
//!
//! ```
//! use kalah::core::{SessionConfig, Side};
//! use kalah::session::Session;
//!
//! let config = SessionConfig::default().single_player(Side::Player1);
//! let mut session = Session::new(config).unwrap();
//!
//! let report = session.apply_move(0).unwrap();
//! assert!(!report.result.gets_another_move);
//! assert!(session.awaiting_opponent());
//!
//! let turn = session.play_opponent_turn();
//! assert!(!turn.moves.is_empty());
//! assert!(!session.awaiting_opponent());
//! ```

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{ConfigError, GameRng, GameState, SessionConfig, Side, SLOT_COUNT};
use crate::opponent::OpponentPolicy;
use crate::rules::{GameResult, Kalah, MoveError, MoveResult, RulesEngine};

/// Result of one accepted move through the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// What the move did.
    pub result: MoveResult,
    /// Set when this move ended the game.
    pub outcome: Option<GameResult>,
}

/// Everything the computer did in one call to `play_opponent_turn`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpponentTurn {
    /// Moves in order. More than one when the computer earned extra turns.
    pub moves: SmallVec<[MoveResult; 4]>,
    /// Set when the computer's sequence ended the game.
    pub outcome: Option<GameResult>,
}

/// One game at a time, played under a `SessionConfig`.
pub struct Session {
    engine: Kalah,
    state: GameState,
    config: SessionConfig,
    opponent: Box<dyn OpponentPolicy>,
    /// Root stream; each game gets a fork of it.
    root_rng: GameRng,
    rng: GameRng,
}

impl Session {
    /// Validate `config` and start the first game.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let opponent = config.opponent.build(&config.heuristic);
        let mut root_rng = GameRng::new(config.seed);
        let rng = root_rng.fork();

        debug!(
            mode = ?config.mode,
            opponent = opponent.name(),
            seed = config.seed,
            "session created"
        );

        Ok(Self {
            engine: Kalah::new(),
            state: GameState::new(),
            config,
            opponent,
            root_rng,
            rng,
        })
    }

    // === Read access ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn current_player(&self) -> Side {
        self.state.current_player()
    }

    #[must_use]
    pub fn slot_counts(&self) -> [u8; SLOT_COUNT] {
        self.state.slot_counts()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.state.winner()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        self.state.outcome().copied()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// The computer's side in single-player mode.
    #[must_use]
    pub fn computer_side(&self) -> Option<Side> {
        self.config.mode.computer_side()
    }

    /// Whether the computer is to move. Human input is refused meanwhile.
    #[must_use]
    pub fn awaiting_opponent(&self) -> bool {
        !self.state.is_over() && self.computer_side() == Some(self.state.current_player())
    }

    // === Mutation ===

    /// Start a new game. The opponent gets a fresh, reproducible RNG stream.
    pub fn reset(&mut self) {
        self.state.reset();
        self.rng = self.root_rng.fork();
        debug!("session reset");
    }

    /// Play `pit` for the side to move.
    ///
    /// In single-player mode this is refused with `NotYourTurn` while the
    /// computer is to move. The game is finalized as soon as a side empties.
    pub fn apply_move(&mut self, pit: usize) -> Result<TurnReport, MoveError> {
        if self.awaiting_opponent() {
            let current = self.state.current_player();
            return Err(MoveError::NotYourTurn {
                side: current.opponent(),
                current,
            });
        }
        self.play(pit)
    }

    /// Ask the configured policy for a pit for `side`, without playing it.
    pub fn choose_move(&mut self, side: Side) -> Option<usize> {
        self.opponent
            .choose_move(self.state.board(), side, &mut self.rng)
    }

    /// Play a single computer move.
    ///
    /// `None` when the computer is not to move. Front ends that show each
    /// move separately call this in a loop; everyone else uses
    /// `play_opponent_turn`.
    pub fn play_opponent_move(&mut self) -> Option<TurnReport> {
        if !self.awaiting_opponent() {
            return None;
        }

        let side = self.state.current_player();
        let Some(pit) = self.choose_move(side) else {
            warn!(%side, "opponent found no legal pit");
            return None;
        };

        match self.play(pit) {
            Ok(report) => Some(report),
            Err(err) => {
                warn!(%side, pit, %err, "opponent move rejected");
                None
            }
        }
    }

    /// Play the computer's turn, chaining extra turns.
    ///
    /// Stops as soon as the turn passes back or the game ends. Does nothing
    /// when the computer is not to move.
    pub fn play_opponent_turn(&mut self) -> OpponentTurn {
        let mut turn = OpponentTurn::default();

        while let Some(report) = self.play_opponent_move() {
            turn.moves.push(report.result);
            if report.outcome.is_some() {
                turn.outcome = report.outcome;
                break;
            }
        }

        turn
    }

    fn play(&mut self, pit: usize) -> Result<TurnReport, MoveError> {
        let result = self.engine.apply_current(&mut self.state, pit)?;
        let outcome = if self.state.has_winner() {
            self.engine.finalize(&mut self.state)
        } else {
            None
        };
        Ok(TurnReport { result, outcome })
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("opponent", &self.opponent.name())
            .finish()
    }
}
