use rayon::prelude::*;

use draughts_core::{Board, Player, perft, turn_successors};

/// Published node counts for the standard opening position, Red to move.
const START_COUNTS: [(u8, u64); 4] = [(1, 7), (2, 49), (3, 302), (4, 1469)];

#[test]
fn perft_from_initial_position() {
    let board = Board::initial();
    for (depth, expected) in START_COUNTS {
        assert_eq!(
            perft(&board, Player::Red, depth),
            expected,
            "perft({depth}) from the initial position"
        );
    }
}

#[test]
fn perft_split_matches_serial() {
    let board = Board::initial();
    let depth = 5;
    let split: u64 = turn_successors(&board, Player::Red)
        .par_iter()
        .map(|(_, next)| perft(next, Player::Black, depth - 1))
        .sum();
    assert_eq!(split, perft(&board, Player::Red, depth));
}

#[test]
fn perft_is_colour_symmetric() {
    let board = Board::initial();
    assert_eq!(perft(&board, Player::Red, 3), perft(&board, Player::Black, 3));
}
