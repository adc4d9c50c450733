//! Kalah rules: sowing, captures, extra turns, scoring.
//!
//! `RulesEngine` is the seam presentation code and opponents call through;
//! `Kalah` implements it. The free functions (`play_pit`, `probe`,
//! `has_winner`, ...) work on bare boards and are what the opponent
//! heuristic uses for look-ahead.

pub mod capture;
pub mod engine;
pub mod error;
pub mod kalah;
pub mod scoring;
pub mod sowing;

pub use capture::Capture;
pub use engine::{GameResult, MoveResult, RulesEngine};
pub use error::MoveError;
pub use kalah::{play_pit, probe, Kalah};
pub use scoring::has_winner;
pub use sowing::{lands_in_store, predict_end};
