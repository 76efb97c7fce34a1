//! "Perft" performance test: count the number of leaves at a given depth.
//! Exercises move generation together with in-place apply and undo.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Explore, Player};

pub fn run_perft(depth: u64) -> u64 {
    let mut board = Board::new();
    let leaves = leaves_below(&mut board, Player::Black, depth, false);
    debug_assert_eq!(board, Board::new());
    leaves
}

fn leaves_below(board: &mut impl Explore, player: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let moves = board.position().valid_moves(player);
    if moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, player.opponent(), depth - 1, true);
    }

    let mut leaves = 0;
    for loc in moves {
        if let Some(mut child) = board.scoped_move(loc, player) {
            leaves += leaves_below(&mut child, player.opponent(), depth - 1, false);
        }
    }
    leaves
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_07() {
    assert_eq!(run_perft(7), 55092);
}
