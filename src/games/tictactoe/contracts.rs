//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, StoreInvariants};
use super::store::GameStateStore;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the displayed board has no winner and is not full.
pub struct BoardUndecided;

impl BoardUndecided {
    /// Fails with [`MoveError::GameOver`] on a decided board.
    #[instrument(skip(store))]
    pub fn check(store: &GameStateStore) -> Result<(), MoveError> {
        if store.status().is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(store))]
    pub fn check(mov: &Move, store: &GameStateStore) -> Result<(), MoveError> {
        if !store.current_board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn by move parity.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`MoveError::WrongPlayer`] out of turn.
    #[instrument(skip(store))]
    pub fn check(mov: &Move, store: &GameStateStore) -> Result<(), MoveError> {
        if mov.player != store.next_player() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for a legal move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(store))]
    pub fn check(mov: &Move, store: &GameStateStore) -> Result<(), MoveError> {
        BoardUndecided::check(store)?;
        SquareIsEmpty::check(mov, store)?;
        PlayersTurn::check(mov, store)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Displayed board is undecided
/// - Square must be empty
/// - Must be player's turn
///
/// Postconditions:
/// - History is anchored on the empty board and the cursor is in range
/// - Players alternate by snapshot index
/// - Each snapshot adds exactly one mark to its predecessor
/// - History was truncated to `before.current_move + 1` before the append
pub struct MoveContract;

impl Contract<GameStateStore, Move> for MoveContract {
    fn pre(store: &GameStateStore, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, store)
    }

    fn post(before: &GameStateStore, after: &GameStateStore) -> Result<(), MoveError> {
        let expected_len = before.current_move() + 2;
        if after.history().len() != expected_len || after.current_move() != expected_len - 1 {
            warn!(
                expected_len,
                actual_len = after.history().len(),
                "History was not truncated before append"
            );
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected {} snapshots after move",
                expected_len
            )));
        }

        StoreInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Store invariants violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    #[test]
    fn test_precondition_empty_square() {
        let store = GameStateStore::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&store, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let store = GameStateStore::new().apply_move(4);
        let action = Move::new(Player::O, Position::Center);
        assert!(matches!(
            MoveContract::pre(&store, &action),
            Err(MoveError::SquareOccupied(Position::Center))
        ));
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let store = GameStateStore::new();
        let action = Move::new(Player::O, Position::Center);
        assert!(matches!(
            MoveContract::pre(&store, &action),
            Err(MoveError::WrongPlayer(Player::O))
        ));
    }

    #[test]
    fn test_precondition_decided_board() {
        let store = GameStateStore::replay(&[0, 3, 1, 4, 2]).unwrap();
        let action = Move::new(Player::O, Position::BottomRight);
        assert_eq!(MoveContract::pre(&store, &action), Err(MoveError::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameStateStore::new();
        let after = before.apply_move(4);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_missing_truncation() {
        let before = GameStateStore::replay(&[0, 1, 2]).unwrap().jump_to_move(1).unwrap();
        // Pretend the append skipped truncation by comparing against the full history.
        let untruncated = GameStateStore::replay(&[0, 1, 2, 8]).unwrap();
        assert!(MoveContract::post(&before, &untruncated).is_err());
    }
}
