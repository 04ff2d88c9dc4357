//! Immutable board snapshots recorded in the move history.

use super::{Board, Move, Position};
use serde::{Deserialize, Serialize};

/// A board as it stood after one move, plus the cell that move changed.
///
/// Only the opening snapshot has no `changed` cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    changed: Option<Position>,
}

impl Snapshot {
    /// The empty opening board.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Snapshot produced by applying `action` to `previous`.
    pub fn after(previous: &Snapshot, action: Move) -> Self {
        Self {
            board: previous.board.with_mark(action.position, action.player),
            changed: Some(action.position),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The cell set to produce this snapshot.
    pub fn changed(&self) -> Option<Position> {
        self.changed
    }

    /// The move that produced this snapshot, read back from the board.
    pub fn last_move(&self) -> Option<Move> {
        let position = self.changed?;
        let player = self.board.get(position).player()?;
        Some(Move::new(player, position))
    }
}
