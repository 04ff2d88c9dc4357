//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Nothing here knows about
//! history or turns, so the same rules apply to every snapshot.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, compute_winner};
