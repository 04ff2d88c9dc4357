//! Win detection logic for tic-tac-toe.

use super::super::{Board, Outcome, Player, Position, Square};
use super::draw::is_full;
use tracing::instrument;

/// The eight winning lines, scanned in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in [`LINES`] order.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            sq.player()
        } else {
            None
        }
    })
}

/// Computes the outcome of a board.
///
/// `Some(Winner)` for a complete line, `Some(Draw)` for a full board without
/// one, `None` while play can continue.
#[instrument(skip(board))]
pub fn compute_winner(board: &Board) -> Option<Outcome> {
    if let Some(player) = check_winner(board) {
        return Some(Outcome::Winner(player));
    }
    if is_full(board) {
        return Some(Outcome::Draw);
    }
    None
}
