//! `othello` implements the rules of Othello for engines and terminal UIs.
//!
//! The board is a plain 8x8 grid that is mutated in place:
//!
//!  - [`Board::apply_move`] places a piece and returns the [`Captures`] it flipped.
//!  - [`Board::undo_move`] uses those captures to restore the previous position exactly.
//!  - [`Board::scoped_move`] wraps both in a guard, so a search can explore and retract
//!    moves without copying the board.
//!
//! [`Board::play`] is the checked entry point for raw, possibly out-of-range coordinates.

pub mod test_utils;

mod board;
mod location;
mod player;

pub use board::*;
pub use location::*;
pub use player::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
