//! Sample positions for tests and benchmarks.
//!
//! Positions use a diagram format modelled on the
//! [FFO endgame test suite](http://www.radagast.se/othello/ffotest.html):
//! 64 cells (`X` Black, `O` White, `-` empty) followed by the side to move.

use crate::{Board, ParseBoardError, ParsePlayerError, Player};
use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A board together with the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub to_move: Player,
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
pub enum ParsePositionError {
    MissingPlayer,
    CannotParseBoard,
    CannotParsePlayer,
}

impl From<ParsePlayerError> for ParsePositionError {
    fn from(_: ParsePlayerError) -> Self {
        ParsePositionError::CannotParsePlayer
    }
}

impl From<ParseBoardError> for ParsePositionError {
    fn from(_: ParseBoardError) -> Self {
        ParsePositionError::CannotParseBoard
    }
}

impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (board_str, player_str) = s
            .trim()
            .rsplit_once(char::is_whitespace)
            .ok_or(ParsePositionError::MissingPlayer)?;

        Ok(Position {
            board: board_str.parse()?,
            to_move: player_str.parse()?,
        })
    }
}

/// Mid-game positions where both sides have several moves.
pub const MIDGAME: [&str; 3] = [
    "--XXXO--
     O-XXOO--
     OOOXXO--
     OOXOXXX-
     OOXXOX--
     O-XOOO--
     --XXO---
     -------- black",
    "--------
     --O-----
     --OOX---
     -XXOXX--
     --XOOO--
     ---XO---
     --------
     -------- white",
    "---O----
     ---OO-X-
     XXXOOXX-
     -XXXOXO-
     --XOXOO-
     --XXOOO-
     ---X-O--
     -------- black",
];

/// White cannot move here, Black has exactly one move and it ends the game.
pub const FORCED_PASS: &str = "XXXXXXXX
     XXXXXXXX
     XXXXXXXX
     XXXXXXXX
     XXXXXXXX
     XXXXXXXX
     XXXXXXXX
     XXXXXO-- white";

/// Parse all of the [`MIDGAME`] positions.
pub fn midgame_positions() -> Result<Vec<Position>, ParsePositionError> {
    MIDGAME.iter().map(|s| s.parse()).collect()
}

/// Play `plies` uniformly random legal moves from the starting position, passing
/// when forced. The same seed always gives the same position.
pub fn random_position(seed: u64, plies: usize) -> Position {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut to_move = Player::Black;

    for _ in 0..plies {
        let moves = board.valid_moves(to_move);
        match moves.choose(&mut rng) {
            Some(&loc) => {
                board.apply_move(loc, to_move);
            }
            None if board.has_valid_move(to_move.opponent()) => {}
            None => break,
        }
        to_move = to_move.opponent();
    }

    Position { board, to_move }
}
