//! Monotonic board invariant: each snapshot adds exactly one mark.

use super::super::{GameStateStore, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Every snapshot equals its predecessor plus one newly occupied square, and
/// that square is the one the snapshot records as changed.
pub struct MonotonicBoardInvariant;

impl Invariant<GameStateStore> for MonotonicBoardInvariant {
    fn holds(store: &GameStateStore) -> bool {
        store.history.windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let mut changed = before
                .squares()
                .iter()
                .zip(after.squares())
                .enumerate()
                .filter(|(_, (b, a))| b != a);

            match (changed.next(), changed.next()) {
                (Some((index, (Square::Empty, Square::Occupied(_)))), None) => {
                    pair[1].changed().map(|p| p.to_index()) == Some(index)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to its predecessor"
    }
}
