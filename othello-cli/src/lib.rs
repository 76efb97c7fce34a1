//! Terminal play against the `othello-search` engine.

pub mod connectors;
pub mod game;
