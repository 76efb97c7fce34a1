//! Code for working with [`Location`]s on the Othello board.

use crate::{EDGE_LENGTH, NUM_SPACES};
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use itertools::Itertools;
use std::fmt::{self, Formatter, Write};
use std::ops::Deref;

/// A location on the Othello board, stored as a row-major square index.
/// Always on the board: there is no way to build an out-of-range location.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Location(u8);

/// Legal moves out of a position, in row-major order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MoveList(ArrayVec<Location, NUM_SPACES>);

impl Location {
    /// Convert from a row-major square index.
    /// Returns None if the index is past the last square.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < NUM_SPACES {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> usize {
        self.0 as usize
    }

    /// Construct a Location from 0-indexed row and column coordinates.
    /// Returns None if the coordinates provided are not on the board.
    #[inline]
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            None
        } else {
            Some(Self((row * EDGE_LENGTH + col) as u8))
        }
    }

    /// Get the 0-indexed row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    #[inline]
    pub fn row(self) -> usize {
        self.to_index() / EDGE_LENGTH
    }

    #[inline]
    pub fn col(self) -> usize {
        self.to_index() % EDGE_LENGTH
    }

    /// Step one square in direction `(d_row, d_col)`, or None if that leaves the board.
    #[inline]
    pub fn offset(self, (d_row, d_col): (isize, isize)) -> Option<Self> {
        let row = self.row().checked_add_signed(d_row)?;
        let col = self.col().checked_add_signed(d_col)?;
        Self::from_coords(row, col)
    }

    /// One of the four extreme corners.
    pub fn is_corner(self) -> bool {
        let last = EDGE_LENGTH - 1;
        (self.row() == 0 || self.row() == last) && (self.col() == 0 || self.col() == last)
    }

    /// On the outer ring of the board, corners included.
    pub fn is_edge(self) -> bool {
        let last = EDGE_LENGTH - 1;
        self.row() == 0 || self.row() == last || self.col() == 0 || self.col() == last
    }

    /// Every square on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES as u8).map(Self)
    }
}

/// Convert this [`Location`] into string notation ("E3").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = "ABCDEFGH".chars().nth(self.col()).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from 1-indexed notation: either a column letter and row ("E3"),
/// or a row and column separated by whitespace ("3 5").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some(notation), None, None) => parse_notation(notation),
            (Some(row), Some(col), None) => {
                let row = parse_one_based(row)?;
                let col = parse_one_based(col)?;
                Self::from_coords(row, col).ok_or(ParseLocationError)
            }
            _ => Err(ParseLocationError),
        }
    }
}

fn parse_notation(s: &str) -> Result<Location, ParseLocationError> {
    let mut chars = s.chars();
    let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
    let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
    let row = chars
        .next()
        .ok_or(ParseLocationError)?
        .to_digit(10)
        .ok_or(ParseLocationError)? as usize;

    if chars.next().is_some() {
        return Err(ParseLocationError);
    }

    let row = row.checked_sub(1).ok_or(ParseLocationError)?;
    Location::from_coords(row, col).ok_or(ParseLocationError)
}

fn parse_one_based(s: &str) -> Result<usize, ParseLocationError> {
    let n: usize = s.parse().or(Err(ParseLocationError))?;
    n.checked_sub(1).ok_or(ParseLocationError)
}

impl MoveList {
    #[inline]
    pub(crate) fn push(&mut self, loc: Location) {
        self.0.push(loc);
    }
}

impl Deref for MoveList {
    type Target = [Location];

    fn deref(&self) -> &[Location] {
        &self.0
    }
}

impl IntoIterator for MoveList {
    type Item = Location;
    type IntoIter = arrayvec::IntoIter<Location, NUM_SPACES>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Location> for MoveList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_from_index() {
        assert_eq!(Location::from_index(0), Some(Location(0)));
        assert_eq!(Location::from_index(63), Some(Location(63)));
        assert_eq!(Location::from_index(64), None);
    }

    #[test]
    fn location_from_coords() {
        assert_eq!(Location::from_coords(0, 0), Some(Location(0)));
        assert_eq!(Location::from_coords(7, 7), Some(Location(63)));
        assert_eq!(Location::from_coords(2, 4), Some(Location(20)));
        assert_eq!(Location::from_coords(0, 8), None);
        assert_eq!(Location::from_coords(8, 0), None);
    }

    #[test]
    fn location_to_coords() {
        assert_eq!(Location(0).to_coords(), (0, 0));
        assert_eq!(Location(63).to_coords(), (7, 7));
        assert_eq!(Location(20).to_coords(), (2, 4));
    }

    #[test]
    fn location_offset_stays_on_board() {
        let corner = Location::from_coords(0, 0).unwrap();
        assert_eq!(corner.offset((-1, 0)), None);
        assert_eq!(corner.offset((0, -1)), None);
        assert_eq!(corner.offset((1, 1)), Location::from_coords(1, 1));

        let right_edge = Location::from_coords(3, 7).unwrap();
        assert_eq!(right_edge.offset((0, 1)), None);
        assert_eq!(right_edge.offset((1, -1)), Location::from_coords(4, 6));
    }

    #[test]
    fn location_regions() {
        let at = |row, col| Location::from_coords(row, col).unwrap();
        assert!(at(0, 0).is_corner());
        assert!(at(7, 0).is_corner());
        assert!(at(0, 7).is_corner());
        assert!(at(7, 7).is_corner());
        assert!(!at(0, 3).is_corner());
        assert!(at(0, 3).is_edge());
        assert!(at(5, 7).is_edge());
        assert!(!at(3, 3).is_edge());
        assert!(!at(6, 6).is_edge());

        assert_eq!(Location::all().filter(|l| l.is_corner()).count(), 4);
        assert_eq!(Location::all().filter(|l| l.is_edge()).count(), 28);
    }

    #[test]
    fn location_all_is_row_major() {
        let all: Vec<Location> = Location::all().collect();
        assert_eq!(all.len(), NUM_SPACES);
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(all[9].to_coords(), (1, 1));
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("A1"), Ok(Location(0)));
        assert_eq!(Location::from_str("h8"), Ok(Location(63)));
        assert_eq!(Location::from_str("E3"), Location::from_coords(2, 4).ok_or(ParseLocationError));
        assert_eq!(Location::from_str("3 5"), Location::from_coords(2, 4).ok_or(ParseLocationError));
        assert_eq!(Location::from_str("  8   8\n"), Ok(Location(63)));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("A12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A9"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("I5"), Err(ParseLocationError));
        assert_eq!(Location::from_str("0 4"), Err(ParseLocationError));
        assert_eq!(Location::from_str("9 1"), Err(ParseLocationError));
        assert_eq!(Location::from_str("3 x"), Err(ParseLocationError));
        assert_eq!(Location::from_str("1 2 3"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location(0).to_string(), "A1");
        assert_eq!(Location(63).to_string(), "H8");
        assert_eq!(Location::from_str("E2").unwrap().to_string(), "E2");
        assert_eq!(Location::from_str("6 6").unwrap().to_string(), "F6");
    }

    #[test]
    fn move_list_display() {
        let moves: MoveList = [Location(20), Location(29)].into_iter().collect();
        assert_eq!(moves.to_string(), "[E3, F4]");
        assert_eq!(MoveList::default().to_string(), "[]");
    }
}
