//! Tic Tac Toe Timeline - tic-tac-toe with time travel
//!
//! The game keeps every board it has shown. Jumping back through the
//! history only moves a pointer; the abandoned future is dropped when a new
//! move is played from the earlier board.
//!
//! # Architecture
//!
//! - **Store**: [`GameStateStore`] owns the history and the displayed move
//! - **Rules**: [`compute_winner`] over the eight lines of a [`Board`]
//! - **View**: [`GameView`] is everything a renderer needs for one frame
//! - **TUI**: [`run_tui`] plays the game in a terminal
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameStateStore, Outcome, Player};
//!
//! let store = GameStateStore::new()
//!     .apply_move(4)
//!     .apply_move(6)
//!     .apply_move(0)
//!     .apply_move(3)
//!     .apply_move(8);
//! assert_eq!(store.winner(), Some(Outcome::Winner(Player::X)));
//! assert_eq!(store.status_text(), "Winner: X");
//!
//! // Going back keeps the future until a different move is played.
//! let rewound = store.jump_to_move(2).unwrap();
//! assert_eq!(rewound.history().len(), 6);
//! assert_eq!(rewound.apply_move(1).history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, TimelineConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, AnchoredHistoryInvariant, Board, BoardUndecided, Contract,
    GameStateStore, GameStatus, GameView, HistoryEntry, Invariant, InvariantSet,
    InvariantViolation, JumpError, LegalMove, MonotonicBoardInvariant, Move, MoveContract,
    MoveError, Outcome, Player, PlayersTurn, Position, RestoreError, Snapshot, Square,
    SquareIsEmpty, StoreInvariants, compute_winner, rules,
};

// Crate-level exports - Terminal UI
pub use tui::{App, AppAction, Focus, run_tui};
