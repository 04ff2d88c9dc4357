//! Game state store: the move history and the position being viewed.
//!
//! The store never mutates in place. Every operation returns the next store,
//! so the caller decides when to swap it in and re-render.

use super::action::{JumpError, Move, MoveError, RestoreError};
use super::contracts::{Contract, MoveContract};
use super::invariants::{InvariantSet, StoreInvariants};
use super::phases::{GameStatus, Outcome};
use super::rules::compute_winner;
use super::snapshot::Snapshot;
use super::view::{GameView, HistoryEntry};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Ordered board history plus a pointer to the displayed snapshot.
///
/// Invariants:
/// - `history[0]` is the empty board.
/// - `current_move < history.len()`.
/// - Snapshots after `current_move` survive until a new move is applied.
///
/// Deserialized stores are checked against [`StoreInvariants`] before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoreRecord")]
pub struct GameStateStore {
    pub(super) history: Vec<Snapshot>,
    pub(super) current_move: usize,
}

/// Unchecked wire shape of a [`GameStateStore`].
#[derive(Deserialize)]
struct StoreRecord {
    history: Vec<Snapshot>,
    current_move: usize,
}

impl TryFrom<StoreRecord> for GameStateStore {
    type Error = RestoreError;

    fn try_from(record: StoreRecord) -> Result<Self, Self::Error> {
        let store = Self {
            history: record.history,
            current_move: record.current_move,
        };
        StoreInvariants::check_all(&store).map_err(|violations| {
            let reason = violations
                .into_iter()
                .map(|v| v.description)
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%reason, "Rejected stored game");
            RestoreError::new(reason)
        })?;
        Ok(store)
    }
}

impl GameStateStore {
    /// Creates a store holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
            current_move: 0,
        }
    }

    /// Builds a store by playing `cells` in order from an empty board.
    ///
    /// # Errors
    ///
    /// Stops at the first illegal cell and returns its [`MoveError`].
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        cells
            .iter()
            .try_fold(Self::new(), |store, &cell| store.try_apply_move(cell))
    }

    /// Every snapshot, including ones after the displayed move.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The displayed snapshot.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history[self.current_move]
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        self.current_snapshot().board()
    }

    /// Player who makes the next move from the displayed board.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Moves leading to the displayed board, oldest first.
    pub fn moves(&self) -> Vec<Move> {
        self.history[1..=self.current_move]
            .iter()
            .filter_map(Snapshot::last_move)
            .collect()
    }

    /// Outcome of the displayed board, if decided.
    pub fn winner(&self) -> Option<Outcome> {
        compute_winner(self.current_board())
    }

    /// Phase of the displayed board.
    pub fn status(&self) -> GameStatus {
        GameStatus::from_outcome(self.winner(), self.next_player())
    }

    /// Status line for the displayed board.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// One entry per snapshot, labelled for the history list.
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        (0..self.history.len())
            .map(|index| HistoryEntry::for_move(index, index == self.current_move))
            .collect()
    }

    /// Everything a view needs to draw the displayed position.
    pub fn view(&self) -> GameView {
        GameView::from_store(self)
    }

    /// Places the next player's mark on `cell_index`.
    ///
    /// Illegal moves (out of range, occupied square, decided board) leave the
    /// store as it was. Use [`try_apply_move`](Self::try_apply_move) to learn
    /// why a move was refused.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&self, cell_index: usize) -> Self {
        match self.try_apply_move(cell_index) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "Ignoring illegal move");
                self.clone()
            }
        }
    }

    /// Places the next player's mark on `cell_index`, reporting refusals.
    ///
    /// Snapshots after the displayed move are discarded before the new
    /// snapshot is appended.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `cell_index > 8`
    /// - [`MoveError::GameOver`] if the displayed board is decided
    /// - [`MoveError::SquareOccupied`] if the cell is taken
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn try_apply_move(&self, cell_index: usize) -> Result<Self, MoveError> {
        let position =
            Position::from_index(cell_index).ok_or(MoveError::OutOfBounds(cell_index))?;
        let action = Move::new(self.next_player(), position);

        MoveContract::pre(self, &action)?;

        let mut history = self.history[..=self.current_move].to_vec();
        let discarded = self.history.len() - history.len();
        let snapshot = Snapshot::after(self.current_snapshot(), action);
        history.push(snapshot);

        let next = Self {
            current_move: history.len() - 1,
            history,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        info!(
            player = %action.player,
            position = %action.position,
            move_number = next.current_move,
            discarded,
            "Move applied"
        );
        Ok(next)
    }

    /// Displays snapshot `move_index` without touching the history.
    ///
    /// # Errors
    ///
    /// [`JumpError::InvalidArgument`] if `move_index` is not in the history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to_move(&self, move_index: usize) -> Result<Self, JumpError> {
        if move_index >= self.history.len() {
            return Err(JumpError::InvalidArgument {
                requested: move_index,
                len: self.history.len(),
            });
        }
        debug!(from = self.current_move, to = move_index, "Jumping through history");
        Ok(Self {
            history: self.history.clone(),
            current_move: move_index,
        })
    }
}

impl Default for GameStateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store() {
        let store = GameStateStore::new();
        assert_eq!(store.history().len(), 1);
        assert_eq!(store.current_move(), 0);
        assert_eq!(store.current_board(), &Board::new());
        assert_eq!(store.status_text(), "Next Player: X");
    }

    #[test]
    fn test_apply_move_alternates() {
        let store = GameStateStore::new().apply_move(4).apply_move(0);
        assert_eq!(
            store.moves(),
            vec![
                Move::new(Player::X, Position::Center),
                Move::new(Player::O, Position::TopLeft),
            ]
        );
        assert_eq!(store.next_player(), Player::X);
    }

    #[test]
    fn test_try_apply_move_errors() {
        let store = GameStateStore::new().apply_move(4);
        assert_eq!(store.try_apply_move(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(
            store.try_apply_move(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );

        let won = GameStateStore::replay(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(won.try_apply_move(8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_jump_keeps_future_until_next_move() {
        let store = GameStateStore::replay(&[0, 1, 2]).unwrap();
        let jumped = store.jump_to_move(1).unwrap();
        assert_eq!(jumped.history().len(), 4);
        assert_eq!(jumped.current_move(), 1);
        assert_eq!(jumped.next_player(), Player::O);

        let branched = jumped.apply_move(8);
        assert_eq!(branched.history().len(), 3);
        assert_eq!(branched.current_move(), 2);
        assert_eq!(
            branched.current_board().get(Position::BottomRight),
            crate::games::tictactoe::Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_jump_out_of_range() {
        let store = GameStateStore::new();
        assert_eq!(
            store.jump_to_move(1),
            Err(JumpError::InvalidArgument {
                requested: 1,
                len: 1
            })
        );
    }

    #[test]
    fn test_deserialize_round_trips_valid_store() {
        let store = GameStateStore::replay(&[4, 0, 8])
            .unwrap()
            .jump_to_move(1)
            .unwrap();
        let json = serde_json::to_string(&store).unwrap();
        let restored: GameStateStore = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, store);
        assert_eq!(restored.apply_move(2).history().len(), 3);
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let result = serde_json::from_str::<GameStateStore>(r#"{"history":[],"current_move":0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_current_move_past_end() {
        let store = GameStateStore::replay(&[0]).unwrap();
        let mut json = serde_json::to_value(&store).unwrap();
        json["current_move"] = serde_json::json!(5);
        let err = serde_json::from_value::<GameStateStore>(json).unwrap_err();
        assert!(err.to_string().contains("current move is in range"));
    }

    #[test]
    fn test_deserialize_rejects_overwritten_square() {
        let store = GameStateStore::replay(&[0, 1]).unwrap();
        let mut json = serde_json::to_value(&store).unwrap();
        json["history"][2] = json["history"][1].clone();
        assert!(serde_json::from_value::<GameStateStore>(json).is_err());
    }

    #[test]
    fn test_moves_stop_at_current() {
        let store = GameStateStore::replay(&[0, 1, 2]).unwrap();
        assert!(store.jump_to_move(0).unwrap().moves().is_empty());
        assert_eq!(store.jump_to_move(2).unwrap().moves().len(), 2);
    }
}
