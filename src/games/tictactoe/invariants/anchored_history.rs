//! Anchored history invariant: play starts from an empty board.

use super::super::{Board, GameStateStore};
use super::Invariant;

/// Invariant: history opens on the empty board and the cursor is in range.
///
/// `history[0]` is the empty board with no changed cell, and
/// `current_move < history.len()`.
pub struct AnchoredHistoryInvariant;

impl Invariant<GameStateStore> for AnchoredHistoryInvariant {
    fn holds(store: &GameStateStore) -> bool {
        let Some(first) = store.history.first() else {
            return false;
        };
        first.board() == &Board::new()
            && first.changed().is_none()
            && store.current_move < store.history.len()
    }

    fn description() -> &'static str {
        "History starts at the empty board and the current move is in range"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_holds() {
        assert!(AnchoredHistoryInvariant::holds(&GameStateStore::new()));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut store = GameStateStore::replay(&[4, 0]).unwrap();
        store.current_move = 3;
        assert!(!AnchoredHistoryInvariant::holds(&store));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut store = GameStateStore::new();
        store.history.clear();
        assert!(!AnchoredHistoryInvariant::holds(&store));
    }
}
