//! Computer opponents for single-player mode.
//!
//! - `OpponentPolicy`: trait every opponent implements
//! - `RandomOpponent`: uniform over legal pits
//! - `HeuristicOpponent`: defend > attack > extra turn > random

pub mod config;
pub mod heuristic;
pub mod policy;

pub use config::HeuristicConfig;
pub use heuristic::{best_capture, threat_against, HeuristicOpponent, Reason};
pub use policy::{OpponentPolicy, RandomOpponent};
