//! Othello board dynamics on a plain 8x8 grid.
//!
//! The board is mutated in place: [`Board::apply_move`] returns the record of
//! flipped pieces and [`Board::undo_move`] uses it to restore the previous state
//! exactly. Search code should prefer [`Board::scoped_move`], which undoes the
//! move automatically when the guard is dropped.

use crate::{Location, MoveList, Player, EDGE_LENGTH, NUM_SPACES};
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::ops::Deref;

/// The eight compass directions as (row, column) steps.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Upper bound on the pieces a single move can flip:
/// four lines through the placed piece, at most six flips on each.
pub const MAX_CAPTURES: usize = 24;

/// The complete state of an Othello board.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Option<Player>; NUM_SPACES],
}

/// The pieces flipped by one move. Needed to undo that move.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Captures(ArrayVec<Location, MAX_CAPTURES>);

/// Square weights for [`Board::evaluate_with`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub corner: i32,
    pub edge: i32,
    pub interior: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            corner: 10,
            edge: 5,
            interior: 1,
        }
    }
}

/// Final piece counts of a game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

impl Score {
    /// The player with strictly more pieces, or None for a tie.
    pub fn winner(self) -> Option<Player> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display(fmt = "({}, {}) is not on the board", row, col)]
    OutOfBounds { row: usize, col: usize },
    #[display(fmt = "{} is not a legal move for {}", location, player)]
    Illegal { location: Location, player: Player },
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid board string")]
pub struct ParseBoardError;

impl Default for Board {
    /// Gets the starting board.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position: Black on the main diagonal of the centre, White on the other.
    pub fn new() -> Self {
        let mid = EDGE_LENGTH / 2;
        let mut board = Self::empty();
        board.cells[(mid - 1) * EDGE_LENGTH + (mid - 1)] = Some(Player::Black);
        board.cells[mid * EDGE_LENGTH + mid] = Some(Player::Black);
        board.cells[(mid - 1) * EDGE_LENGTH + mid] = Some(Player::White);
        board.cells[mid * EDGE_LENGTH + (mid - 1)] = Some(Player::White);
        board
    }

    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Self {
            cells: [None; NUM_SPACES],
        }
    }

    /// The piece at `loc`, if any.
    #[inline]
    pub fn get(&self, loc: Location) -> Option<Player> {
        self.cells[loc.to_index()]
    }

    #[inline]
    fn set(&mut self, loc: Location, piece: Option<Player>) {
        self.cells[loc.to_index()] = piece;
    }

    /// Length of the run of opponent pieces starting next to `from` in `direction`,
    /// if that run is closed off by one of `player`'s pieces. Zero otherwise.
    fn bracketed_run(&self, from: Location, direction: (isize, isize), player: Player) -> usize {
        let opponent = player.opponent();
        let mut run = 0;
        let mut cursor = from.offset(direction);

        while let Some(loc) = cursor {
            match self.get(loc) {
                Some(piece) if piece == opponent => {
                    run += 1;
                    cursor = loc.offset(direction);
                }
                Some(_) => return run,
                None => return 0,
            }
        }

        // Walked off the board without meeting our own piece.
        0
    }

    /// Check if placing a piece at `loc` is a legal move for `player`.
    pub fn is_valid_move(&self, loc: Location, player: Player) -> bool {
        self.get(loc).is_none()
            && DIRECTIONS
                .iter()
                .any(|&direction| self.bracketed_run(loc, direction, player) > 0)
    }

    /// All legal moves for `player`, in row-major order.
    pub fn valid_moves(&self, player: Player) -> MoveList {
        let mut moves = MoveList::default();
        for loc in Location::all() {
            if self.is_valid_move(loc, player) {
                moves.push(loc);
            }
        }
        moves
    }

    /// Whether `player` has at least one legal move.
    pub fn has_valid_move(&self, player: Player) -> bool {
        Location::all().any(|loc| self.is_valid_move(loc, player))
    }

    /// Place a piece for `player` at `loc` and flip every bracketed line.
    /// Returns None, leaving the board untouched, if the move is illegal.
    pub fn apply_move(&mut self, loc: Location, player: Player) -> Option<Captures> {
        if !self.is_valid_move(loc, player) {
            return None;
        }

        self.set(loc, Some(player));
        let mut captures = Captures::default();

        for &direction in DIRECTIONS.iter() {
            let run = self.bracketed_run(loc, direction, player);
            let mut cursor = loc;
            for _ in 0..run {
                // The run was just walked, so every step stays on the board.
                if let Some(next) = cursor.offset(direction) {
                    self.set(next, Some(player));
                    captures.0.push(next);
                    cursor = next;
                }
            }
        }

        Some(captures)
    }

    /// Reverse a move made by [`Board::apply_move`].
    pub fn undo_move(&mut self, loc: Location, player: Player, captures: &Captures) {
        self.set(loc, None);
        for &flipped in captures.iter() {
            self.set(flipped, Some(player.opponent()));
        }
    }

    /// Apply a move that is undone when the returned guard is dropped.
    /// The guard dereferences to the board in its post-move state.
    pub fn scoped_move(&mut self, loc: Location, player: Player) -> Option<ScopedMove<'_>> {
        let captures = self.apply_move(loc, player)?;
        Some(ScopedMove {
            board: self,
            location: loc,
            player,
            captures,
        })
    }

    /// Checked move entry point for raw 0-indexed coordinates, e.g. from user input.
    pub fn play(&mut self, row: usize, col: usize, player: Player) -> Result<Captures, MoveError> {
        let location = Location::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.apply_move(location, player).ok_or_else(|| {
            tracing::trace!(%location, %player, "rejected illegal move");
            MoveError::Illegal { location, player }
        })
    }

    /// Positional score for `player` with the default [`Weights`].
    #[inline]
    pub fn evaluate(&self, player: Player) -> i32 {
        self.evaluate_with(player, &Weights::default())
    }

    /// Sum of square weights over `player`'s pieces: corners, then the rest of the
    /// edge, then the interior.
    pub fn evaluate_with(&self, player: Player, weights: &Weights) -> i32 {
        Location::all()
            .filter(|&loc| self.get(loc) == Some(player))
            .map(|loc| {
                if loc.is_corner() {
                    weights.corner
                } else if loc.is_edge() {
                    weights.edge
                } else {
                    weights.interior
                }
            })
            .sum()
    }

    /// Raw number of `player`'s pieces. Used for final scoring, not by search.
    pub fn count_pieces(&self, player: Player) -> u8 {
        self.cells.iter().filter(|&&cell| cell == Some(player)).count() as u8
    }

    /// Number of empty squares.
    pub fn count_empty(&self) -> u8 {
        self.cells.iter().filter(|cell| cell.is_none()).count() as u8
    }

    /// The game is over once neither player can move.
    pub fn is_game_over(&self) -> bool {
        !self.has_valid_move(Player::Black) && !self.has_valid_move(Player::White)
    }

    pub fn score(&self) -> Score {
        Score {
            black: self.count_pieces(Player::Black),
            white: self.count_pieces(Player::White),
        }
    }
}

impl Deref for Captures {
    type Target = [Location];

    fn deref(&self) -> &[Location] {
        &self.0
    }
}

/// A move applied to a borrowed board, undone on drop.
///
/// The guard only hands out shared access to the board. Further moves go
/// through [`ScopedMove::scoped_move`], so they unwind before this one does.
#[derive(Debug)]
pub struct ScopedMove<'a> {
    board: &'a mut Board,
    location: Location,
    player: Player,
    captures: Captures,
}

impl ScopedMove<'_> {
    pub fn location(&self) -> Location {
        self.location
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    /// Apply a further move on top of this one.
    pub fn scoped_move(&mut self, loc: Location, player: Player) -> Option<ScopedMove<'_>> {
        self.board.scoped_move(loc, player)
    }
}

impl Deref for ScopedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

/// A position that moves can be tried on and retracted from: a [`Board`], or a
/// [`ScopedMove`] guard over one. Recursive searches are written against this.
pub trait Explore {
    fn position(&self) -> &Board;

    fn scoped_move(&mut self, loc: Location, player: Player) -> Option<ScopedMove<'_>>;
}

impl Explore for Board {
    #[inline]
    fn position(&self) -> &Board {
        self
    }

    #[inline]
    fn scoped_move(&mut self, loc: Location, player: Player) -> Option<ScopedMove<'_>> {
        Board::scoped_move(self, loc, player)
    }
}

impl Explore for ScopedMove<'_> {
    #[inline]
    fn position(&self) -> &Board {
        &*self.board
    }

    #[inline]
    fn scoped_move(&mut self, loc: Location, player: Player) -> Option<ScopedMove<'_>> {
        ScopedMove::scoped_move(self, loc, player)
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.board
            .undo_move(self.location, self.player, &self.captures);
    }
}

/// Parse a board from 64 cells in row-major order: `X` for Black, `O` for White,
/// `-` or `.` for empty. Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::empty();
        let mut squares = s.chars().filter(|c| !c.is_whitespace());

        for cell in board.cells.iter_mut() {
            *cell = match squares.next().ok_or(ParseBoardError)? {
                'X' | 'x' => Some(Player::Black),
                'O' | 'o' => Some(Player::White),
                '-' | '.' => None,
                _ => return Err(ParseBoardError),
            };
        }

        match squares.next() {
            None => Ok(board),
            Some(_) => Err(ParseBoardError),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("  A B C D E F G H")?;
        for (row, cells) in self.cells.chunks(EDGE_LENGTH).enumerate() {
            write!(f, "\n{}", row + 1)?;
            for cell in cells {
                f.write_char(' ')?;
                f.write_char(cell.map_or('.', Player::glyph))?;
            }
        }
        Ok(())
    }
}
