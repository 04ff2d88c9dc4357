//! Render model handed to the views on every frame.

use super::phases::{GameStatus, Outcome};
use super::store::GameStateStore;
use super::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One row of the move-history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryEntry {
    /// Snapshot index this entry jumps to.
    move_index: usize,
    /// Button text.
    label: String,
    /// Whether this snapshot is the one displayed.
    is_current: bool,
}

impl HistoryEntry {
    /// Builds the entry for snapshot `move_index`.
    pub fn for_move(move_index: usize, is_current: bool) -> Self {
        Self {
            move_index,
            label: Self::label_for(move_index),
            is_current,
        }
    }

    /// "Go to game start" for the opening board, "Go to move #N" otherwise.
    pub fn label_for(move_index: usize) -> String {
        if move_index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", move_index)
        }
    }
}

/// Read-only view of the displayed position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    board: Board,
    status: GameStatus,
    status_text: String,
    next_player: Player,
    outcome: Option<Outcome>,
    current_move: usize,
    history: Vec<HistoryEntry>,
}

impl GameView {
    /// Derives the view of `store`'s displayed snapshot.
    pub fn from_store(store: &GameStateStore) -> Self {
        let status = store.status();
        Self {
            board: *store.current_board(),
            status,
            status_text: status.to_string(),
            next_player: store.next_player(),
            outcome: store.winner(),
            current_move: store.current_move(),
            history: store.history_entries(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(HistoryEntry::label_for(0), "Go to game start");
        assert_eq!(HistoryEntry::label_for(1), "Go to move #1");
        assert_eq!(HistoryEntry::label_for(5), "Go to move #5");
    }

    #[test]
    fn test_view_marks_current_entry() {
        let store = GameStateStore::replay(&[4, 0]).unwrap().jump_to_move(1).unwrap();
        let view = store.view();
        let current: Vec<_> = view
            .history()
            .iter()
            .filter(|e| *e.is_current())
            .map(|e| *e.move_index())
            .collect();
        assert_eq!(current, vec![1]);
        assert_eq!(view.history().len(), 3);
        assert_eq!(view.status_text(), "Next Player: O");
        assert!(!view.status().is_over());
    }

    #[test]
    fn test_view_serializes() {
        let view = GameStateStore::replay(&[4]).unwrap().view();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["status_text"], "Next Player: O");
        assert_eq!(json["history"][1]["label"], "Go to move #1");
    }
}
