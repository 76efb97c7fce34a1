//! Depth-limited minimax with alpha-beta pruning over an [`othello::Board`].
//!
//! The search mutates the caller's board in place and restores it before returning.

pub mod config;
pub mod search;

pub use config::{ConfigError, LeafPerspective, SearchConfig};
pub use search::{Decision, SearchStats, Searcher};

use othello::{Board, Player};
use std::time::Duration;

/// Choose a move for `player` with the default evaluation, searching `depth` plies
/// within roughly `time_limit`. A None location means `player` has to pass.
pub fn decide(board: &mut Board, player: Player, depth: u8, time_limit: Duration) -> Decision {
    Searcher::new(SearchConfig::default()).decide_with(board, player, depth, time_limit)
}
