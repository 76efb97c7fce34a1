//! Properties of apply/undo over positions reached by seeded random playouts.

use othello::test_utils::positions::{self, random_position};
use othello::{Board, Location, Player, NUM_SPACES};

fn assert_partition(board: &Board) {
    let total = board.count_pieces(Player::Black) as usize
        + board.count_pieces(Player::White) as usize
        + board.count_empty() as usize;
    assert_eq!(total, NUM_SPACES);
}

fn reachable_positions() -> impl Iterator<Item = positions::Position> {
    (0..40u64).flat_map(|seed| (0..60).step_by(7).map(move |plies| random_position(seed, plies)))
}

#[test]
fn undo_restores_every_legal_move() {
    for position in reachable_positions() {
        let mut board = position.board;
        let before = board;

        for player in [Player::Black, Player::White] {
            for loc in board.valid_moves(player) {
                let captures = board.apply_move(loc, player).unwrap();
                assert_partition(&board);
                board.undo_move(loc, player, &captures);
                assert_eq!(board, before, "undo of {} by {} diverged", loc, player);
            }
        }
    }
}

#[test]
fn legal_iff_captures() {
    for position in reachable_positions() {
        let mut board = position.board;
        for player in [Player::Black, Player::White] {
            for loc in Location::all() {
                let legal = board.is_valid_move(loc, player);
                match board.scoped_move(loc, player) {
                    Some(child) => {
                        assert!(legal);
                        assert!(!child.captures().is_empty());
                    }
                    None => assert!(!legal),
                }
            }
        }
        assert_eq!(board, position.board);
    }
}

#[test]
fn captures_flip_to_mover() {
    for position in reachable_positions() {
        let mut board = position.board;
        let player = position.to_move;
        let opponent_before = board.count_pieces(player.opponent());

        for loc in board.valid_moves(player) {
            let child = board.scoped_move(loc, player).unwrap();
            for &flipped in child.captures().iter() {
                assert_eq!(child.get(flipped), Some(player));
                assert_eq!(position.board.get(flipped), Some(player.opponent()));
            }
            assert_eq!(
                child.count_pieces(player.opponent()) as usize,
                opponent_before as usize - child.captures().len()
            );
        }
    }
}

#[test]
fn pieces_partition_the_board_during_play() {
    for seed in 0..10 {
        for plies in 0..64 {
            assert_partition(&random_position(seed, plies).board);
        }
    }
}

#[test]
fn valid_moves_are_sorted_and_unique() {
    for position in reachable_positions() {
        let moves = position.board.valid_moves(position.to_move);
        assert!(moves.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
