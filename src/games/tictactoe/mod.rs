//! Tic-tac-toe with a branching move history.

mod action;
mod contracts;
mod invariants;
mod phases;
mod position;
pub mod rules;
mod snapshot;
mod store;
mod types;
mod view;

pub use action::{JumpError, Move, MoveError, RestoreError};
pub use contracts::{
    BoardUndecided, Contract, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty,
};
pub use invariants::{
    AlternatingTurnInvariant, AnchoredHistoryInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, StoreInvariants,
};
pub use phases::{GameStatus, Outcome};
pub use position::Position;
pub use rules::compute_winner;
pub use snapshot::Snapshot;
pub use store::GameStateStore;
pub use types::{Board, Player, Square};
pub use view::{GameView, HistoryEntry};
