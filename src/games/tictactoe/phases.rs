//! Game phases derived from a board.

use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Board is full and nobody has three in a row.
    Draw,
}

/// Phase of the displayed board.
///
/// `Empty` and `InProgress` are both represented by `InProgress`; the next
/// player is carried so the status line can be derived without the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves can still be made.
    InProgress {
        /// Player whose turn it is.
        next: Player,
    },
    /// A player completed a line.
    Won(Player),
    /// The board filled up with no line.
    Draw,
}

impl GameStatus {
    /// Builds the status from a computed outcome and the player to move.
    pub fn from_outcome(outcome: Option<Outcome>, next: Player) -> Self {
        match outcome {
            Some(Outcome::Winner(player)) => GameStatus::Won(player),
            Some(Outcome::Draw) => GameStatus::Draw,
            None => GameStatus::InProgress { next },
        }
    }

    /// True once no further moves are accepted on this board.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next Player: {}", next),
            GameStatus::Won(player) => write!(f, "Winner: {}", player),
            GameStatus::Draw => write!(f, "Draw: no winner"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(
            GameStatus::InProgress { next: Player::O }.to_string(),
            "Next Player: O"
        );
        assert_eq!(GameStatus::Won(Player::X).to_string(), "Winner: X");
        assert_eq!(GameStatus::Draw.to_string(), "Draw: no winner");
    }

    #[test]
    fn test_from_outcome() {
        assert_eq!(
            GameStatus::from_outcome(None, Player::X),
            GameStatus::InProgress { next: Player::X }
        );
        assert!(GameStatus::from_outcome(Some(Outcome::Draw), Player::O).is_over());
        assert_eq!(
            GameStatus::from_outcome(Some(Outcome::Winner(Player::O)), Player::X),
            GameStatus::Won(Player::O)
        );
    }
}
