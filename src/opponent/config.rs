//! Heuristic opponent configuration.

use serde::{Deserialize, Serialize};

/// Which priorities the heuristic opponent considers.
///
/// A disabled priority is skipped; with everything disabled the heuristic
/// plays like `RandomOpponent`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Block or pre-empt the human's best capture.
    pub defend: bool,

    /// Take the largest capture available.
    pub attack: bool,

    /// Prefer a pit whose last seed lands in the computer's store.
    pub extra_turn: bool,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            defend: true,
            attack: true,
            extra_turn: true,
        }
    }
}

impl HeuristicConfig {
    /// Create a new config with defending toggled.
    pub fn with_defend(mut self, enabled: bool) -> Self {
        self.defend = enabled;
        self
    }

    /// Create a new config with attacking toggled.
    pub fn with_attack(mut self, enabled: bool) -> Self {
        self.attack = enabled;
        self
    }

    /// Create a new config with extra-turn seeking toggled.
    pub fn with_extra_turn(mut self, enabled: bool) -> Self {
        self.extra_turn = enabled;
        self
    }
}
