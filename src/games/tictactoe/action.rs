//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. Each transition between two
//! history snapshots is exactly one `Move`.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The displayed board already has a winner or is full.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(#[error(not(source))] Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// Error raised when jumping through history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// The requested move index does not exist in the history.
    #[display("Move #{} does not exist (history has {} entries)", requested, len)]
    InvalidArgument {
        /// Index that was asked for.
        requested: usize,
        /// Current history length.
        len: usize,
    },
}

/// Error raised when a stored game fails its invariants on load.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Stored game is inconsistent: {}", reason)]
pub struct RestoreError {
    /// Descriptions of the violated invariants.
    pub reason: String,
}

impl RestoreError {
    /// Creates a new restore error.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
