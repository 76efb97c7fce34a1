use super::Connector;
use crate::game::{label, read_line};
use othello::{Board, Location, Player};
use std::io::{self, BufRead, Write};

/// Reads moves typed by a person, re-prompting until one is legal.
pub struct HumanConnector<R> {
    input: R,
}

impl<R: BufRead> HumanConnector<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Connector for HumanConnector<R> {
    fn choose_move(
        &mut self,
        board: &mut Board,
        player: Player,
        out: &mut dyn Write,
    ) -> io::Result<Option<Location>> {
        let moves = board.valid_moves(player);
        writeln!(out, "Your turn ({})!", label(player))?;
        writeln!(out, "Valid moves: {}", moves)?;

        loop {
            write!(out, "Enter your move (e.g. E3, or row and column as '3 5'): ")?;
            out.flush()?;
            let line = read_line(&mut self.input)?;

            match line.parse::<Location>() {
                Ok(loc) if moves.contains(&loc) => return Ok(Some(loc)),
                Ok(loc) => {
                    tracing::debug!(%loc, %player, "rejected illegal move");
                    writeln!(out, "Invalid move! Choose a valid move from the list.")?;
                }
                Err(_) => {
                    writeln!(
                        out,
                        "Invalid input! Enter a move like 'E3', or row and column as numbers (e.g. '3 5')."
                    )?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn choose(input: &str) -> (io::Result<Option<Location>>, String) {
        let mut connector = HumanConnector::new(Cursor::new(input.as_bytes()));
        let mut board = Board::new();
        let mut out = Vec::new();
        let result = connector.choose_move(&mut board, Player::Black, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn accepts_notation_and_coordinates() {
        let (result, text) = choose("e3\n");
        assert_eq!(result.unwrap(), Location::from_coords(2, 4));
        assert!(text.contains("Your turn (Black (○))!"));
        assert!(text.contains("Valid moves: [E3, F4, C5, D6]"));

        let (result, _) = choose("6 4\n");
        assert_eq!(result.unwrap(), Location::from_coords(5, 3));
    }

    #[test]
    fn reprompts_until_legal() {
        let (result, text) = choose("hello\nA1\n\n4 6\n");
        assert_eq!(result.unwrap(), Location::from_coords(3, 5));
        assert_eq!(text.matches("Invalid input!").count(), 2);
        assert_eq!(text.matches("Invalid move!").count(), 1);
    }

    #[test]
    fn closed_input_is_an_error() {
        let (result, _) = choose("A1\n");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }
}
