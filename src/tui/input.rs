//! Keyboard navigation for the board cursor and history list.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// Moves cursor based on arrow keys. Stops at the grid edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Left => col.checked_sub(1).and_then(|c| Position::from_row_col(row, c)),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Up => row.checked_sub(1).and_then(|r| Position::from_row_col(r, col)),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Maps '1'..='9' to a cell index (0-8).
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}

/// Moves the history selection with Up/Down/Home/End, clamped to `len`.
pub fn move_selection(selected: usize, len: usize, key: KeyCode) -> usize {
    let last = len.saturating_sub(1);
    match key {
        KeyCode::Up => selected.saturating_sub(1),
        KeyCode::Down => (selected + 1).min(last),
        KeyCode::Home => 0,
        KeyCode::End => last,
        _ => selected.min(last),
    }
}
