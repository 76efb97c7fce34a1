use othello::{Board, Location, Player};
use std::io::{self, Write};

/// A way of choosing moves for one side: a person at the terminal, or the engine.
pub trait Connector {
    /// Pick a move for `player`, writing any prompts or announcements to `out`.
    /// Only called when `player` has a legal move. Returning None passes the turn.
    ///
    /// `board` may be explored in place but must be left as it was given.
    fn choose_move(
        &mut self,
        board: &mut Board,
        player: Player,
        out: &mut dyn Write,
    ) -> io::Result<Option<Location>>;
}
