//! Session configuration.
//!
//! `SessionConfig` selects two-player or single-player play, which computer
//! opponent to use, and the RNG seed. It can be built in code with the
//! `with_*` builders or loaded from JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::player::Side;
use crate::opponent::{HeuristicConfig, HeuristicOpponent, OpponentPolicy, RandomOpponent};

/// Longest pause the presentation layer may insert between computer moves.
pub const MAX_OPPONENT_DELAY_MS: u64 = 10_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Who plays each side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayMode {
    /// Two humans share the board.
    #[default]
    TwoPlayer,
    /// One side is played by the computer.
    SinglePlayer { computer: Side },
}

impl PlayMode {
    /// The computer's side, if any.
    #[must_use]
    pub fn computer_side(self) -> Option<Side> {
        match self {
            PlayMode::TwoPlayer => None,
            PlayMode::SinglePlayer { computer } => Some(computer),
        }
    }
}

/// Which opponent policy drives the computer's side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpponentKind {
    /// Uniformly random legal pit.
    Random,
    /// Defend, attack, extra turn, then random.
    #[default]
    Heuristic,
}

impl OpponentKind {
    /// Look up a kind by name (`"random"` or `"heuristic"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "random" => Some(OpponentKind::Random),
            "heuristic" => Some(OpponentKind::Heuristic),
            _ => None,
        }
    }

    /// Name accepted by `from_name`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            OpponentKind::Random => "random",
            OpponentKind::Heuristic => "heuristic",
        }
    }

    /// Instantiate the policy.
    #[must_use]
    pub fn build(self, heuristic: &HeuristicConfig) -> Box<dyn OpponentPolicy> {
        match self {
            OpponentKind::Random => Box::new(RandomOpponent),
            OpponentKind::Heuristic => Box::new(HeuristicOpponent::new(heuristic.clone())),
        }
    }
}

/// Configuration for a `Session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Two-player or single-player.
    pub mode: PlayMode,

    /// Computer opponent policy (ignored in two-player mode).
    pub opponent: OpponentKind,

    /// Priorities for the heuristic opponent.
    pub heuristic: HeuristicConfig,

    /// Seed for the opponent's random fallback.
    /// Same seed produces the same computer play.
    pub seed: u64,

    /// Pause before each computer move, for the presentation layer.
    /// The engine itself never sleeps.
    pub opponent_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: PlayMode::TwoPlayer,
            opponent: OpponentKind::Heuristic,
            heuristic: HeuristicConfig::default(),
            seed: 42,
            opponent_delay_ms: 1500,
        }
    }
}

impl SessionConfig {
    /// Play against the computer, which takes `computer`'s side.
    pub fn single_player(mut self, computer: Side) -> Self {
        self.mode = PlayMode::SinglePlayer { computer };
        self
    }

    /// Two humans, no computer.
    pub fn two_player(mut self) -> Self {
        self.mode = PlayMode::TwoPlayer;
        self
    }

    /// Create a new config with a custom opponent policy.
    pub fn with_opponent(mut self, opponent: OpponentKind) -> Self {
        self.opponent = opponent;
        self
    }

    /// Create a new config with custom heuristic priorities.
    pub fn with_heuristic(mut self, heuristic: HeuristicConfig) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom computer move delay.
    pub fn with_opponent_delay_ms(mut self, delay_ms: u64) -> Self {
        self.opponent_delay_ms = delay_ms;
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.opponent_delay_ms > MAX_OPPONENT_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "opponent_delay_ms must be <= {MAX_OPPONENT_DELAY_MS}, got {}",
                self.opponent_delay_ms
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}
