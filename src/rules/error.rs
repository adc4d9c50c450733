//! Move rejections.
//!
//! Illegal pit selections are routine input, not failures: each one is
//! reported as a `MoveError` and leaves the game state untouched.

use crate::core::Side;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("slot {0} is not on the board")]
    OutOfRange(usize),

    #[error("slot {pit} is not one of {side}'s pits")]
    WrongSide { pit: usize, side: Side },

    #[error("pit {0} is empty")]
    EmptyPit(usize),

    #[error("{side} cannot move: it is {current}'s turn")]
    NotYourTurn { side: Side, current: Side },

    #[error("the game is over")]
    GameOver,
}
