//! First-class invariants for the game state store.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are testable independently and back the move postcondition.

pub mod alternating_turn;
pub mod anchored_history;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use anchored_history::AnchoredHistoryInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

/// All store invariants as a composable set.
pub type StoreInvariants = (
    AnchoredHistoryInvariant,
    AlternatingTurnInvariant,
    MonotonicBoardInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameStateStore, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_store() {
        assert!(StoreInvariants::check_all(&GameStateStore::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let store = GameStateStore::replay(&[0, 4, 8])
            .unwrap()
            .jump_to_move(1)
            .unwrap()
            .apply_move(2);
        assert!(StoreInvariants::check_all(&store).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        let mut store = GameStateStore::replay(&[4]).unwrap();
        store.history[0]
            .board_mut()
            .set(Position::TopLeft, Square::Occupied(Player::O));

        let violations = StoreInvariants::check_all(&store).unwrap_err();
        // Dirty opening board, and the first transition no longer adds one mark.
        assert_eq!(violations.len(), 2);
    }
}
