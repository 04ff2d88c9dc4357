//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameStateStore, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The mark placed by transition `i -> i + 1` belongs to X when `i` is even
/// and to O when `i` is odd. Holds across the whole history, including
/// snapshots after the current move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameStateStore> for AlternatingTurnInvariant {
    fn holds(store: &GameStateStore) -> bool {
        store
            .history
            .iter()
            .skip(1)
            .enumerate()
            .all(|(i, snapshot)| {
                snapshot
                    .last_move()
                    .is_some_and(|mov| mov.player == Player::for_move(i))
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
