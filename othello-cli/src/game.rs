//! The turn loop: prompts, passes, and the final result.

use crate::connectors::Connector;
use othello::{Board, Player, Score};
use std::io::{self, BufRead, Write};

/// "Black (○)" / "White (●)".
pub fn label(player: Player) -> String {
    format!("{} ({})", player, player.glyph())
}

/// Read one line, treating end of input as an error since a game cannot continue without it.
pub(crate) fn read_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the game ended",
        ));
    }
    Ok(line)
}

/// Ask which color the person wants to play until they give a valid answer.
pub fn prompt_color(input: &mut impl BufRead, out: &mut dyn Write) -> io::Result<Player> {
    loop {
        write!(out, "Do you want to play as Black (○) or White (●)? (B/W): ")?;
        out.flush()?;

        match read_line(input)?.parse() {
            Ok(player) => return Ok(player),
            Err(_) => writeln!(
                out,
                "Invalid choice! Please enter 'B' for Black or 'W' for White."
            )?,
        }
    }
}

pub fn declare_winner(score: Score, out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "Final Score - {}: {}, {}: {}",
        label(Player::Black),
        score.black,
        label(Player::White),
        score.white
    )?;

    match score.winner() {
        Some(player) => writeln!(out, "{} Wins!", label(player)),
        None => writeln!(out, "It's a Tie!"),
    }
}

/// Play a game from the starting position.
pub fn play_game(
    black: &mut dyn Connector,
    white: &mut dyn Connector,
    out: &mut dyn Write,
) -> io::Result<Score> {
    run_game(Board::new(), Player::default(), black, white, out)
}

/// Alternate turns from `board` until neither side can move, then report the result.
pub fn run_game(
    mut board: Board,
    first: Player,
    black: &mut dyn Connector,
    white: &mut dyn Connector,
    out: &mut dyn Write,
) -> io::Result<Score> {
    let mut player = first;

    loop {
        writeln!(out, "\n{}\n", board)?;

        if !board.has_valid_move(player) {
            writeln!(out, "No valid moves for {}! Passing turn.", label(player))?;
            tracing::info!(%player, "no legal move, passing");
            player = player.opponent();

            if !board.has_valid_move(player) {
                writeln!(out, "No moves for both players. Game Over!")?;
                let score = board.score();
                tracing::info!(black = score.black, white = score.white, "game over");
                declare_winner(score, out)?;
                return Ok(score);
            }
            continue;
        }

        let connector: &mut dyn Connector = match player {
            Player::Black => &mut *black,
            Player::White => &mut *white,
        };

        let loc = connector.choose_move(&mut board, player, out)?.ok_or_else(|| {
            tracing::warn!(%player, "connector passed with legal moves available");
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} passed with legal moves available", player),
            )
        })?;

        board
            .play(loc.row(), loc.col(), player)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        tracing::debug!(%player, %loc, "move played");

        player = player.opponent();
    }
}
