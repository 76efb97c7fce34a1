use super::Connector;
use crate::game::label;
use othello::{Board, Location, Player};
use othello_search::{SearchConfig, Searcher};
use std::io::{self, Write};

/// Plays the move chosen by a minimax [`Searcher`].
pub struct ComputerConnector {
    searcher: Searcher,
}

impl ComputerConnector {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(config),
        }
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }
}

impl Connector for ComputerConnector {
    fn choose_move(
        &mut self,
        board: &mut Board,
        player: Player,
        out: &mut dyn Write,
    ) -> io::Result<Option<Location>> {
        writeln!(out, "AI's turn ({})...", label(player))?;
        let decision = self.searcher.decide(board, player);

        if let Some(loc) = decision.location {
            writeln!(out, "AI chooses move: {}", loc)?;
        }
        Ok(decision.location)
    }
}
