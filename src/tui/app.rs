//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

use super::input::{digit_cell, move_cursor, move_selection};
use crate::config::TimelineConfig;
use crate::games::tictactoe::{GameStateStore, GameView, Position};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the cell cursor.
    Board,
    /// Arrow keys move the history selection.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Owns the game store; views only ever see a [`GameView`] derived from it.
#[derive(Debug, Getters)]
pub struct App {
    store: GameStateStore,
    cursor: Position,
    focus: Focus,
    selected: usize,
    show_hints: bool,
    message: Option<String>,
}

impl App {
    /// Creates a new application with an empty board.
    #[instrument(skip(config))]
    pub fn new(config: &TimelineConfig) -> Self {
        let focus = if *config.history_focus_on_start() {
            Focus::History
        } else {
            Focus::Board
        };
        Self {
            store: GameStateStore::new(),
            cursor: Position::Center,
            focus,
            selected: 0,
            show_hints: *config.show_hints(),
            message: None,
        }
    }

    /// Render model for the displayed position.
    pub fn view(&self) -> GameView {
        self.store.view()
    }

    /// Clicks a cell. Refused clicks leave the game untouched.
    #[instrument(skip(self))]
    pub fn click(&mut self, cell_index: usize) {
        match self.store.try_apply_move(cell_index) {
            Ok(next) => {
                self.store = next;
                self.selected = self.store.current_move();
                self.message = None;
            }
            Err(e) => {
                debug!(error = %e, "Click ignored");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Jumps to a history entry.
    #[instrument(skip(self))]
    pub fn jump(&mut self, move_index: usize) {
        match self.store.jump_to_move(move_index) {
            Ok(next) => {
                self.store = next;
                self.selected = move_index;
                self.message = None;
            }
            Err(e) => {
                warn!(error = %e, "History entry out of range");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Restarts the game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.store = GameStateStore::new();
        self.selected = 0;
        self.message = None;
    }

    /// Handles one key press.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            code => {
                if let Some(cell) = digit_cell(code) {
                    if let Some(pos) = Position::from_index(cell) {
                        self.cursor = pos;
                    }
                    self.click(cell);
                } else {
                    match self.focus {
                        Focus::Board => self.handle_board_key(code),
                        Focus::History => self.handle_history_key(code),
                    }
                }
            }
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor.to_index()),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected),
            other => {
                self.selected = move_selection(self.selected, self.store.history().len(), other)
            }
        }
    }
}
