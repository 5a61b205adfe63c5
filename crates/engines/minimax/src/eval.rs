//! Heuristic board evaluation.

use draughts_core::{Board, Piece, Player, Rank, DIAGONALS};

/// Values indexed by rank: Normal, King, SuperKing.
const RANK_VALUES: [i32; 3] = [100, 250, 400];

/// Bonus for standing near the middle of the board.
#[rustfmt::skip]
const CENTER_BONUS: [[i32; 8]; 8] = [
    [0,  0,  0,  0,  0,  0,  0, 0],
    [0, 10, 10, 10, 10, 10, 10, 0],
    [0, 10, 20, 20, 20, 20, 10, 0],
    [0, 10, 20, 30, 30, 20, 10, 0],
    [0, 10, 20, 30, 30, 20, 10, 0],
    [0, 10, 20, 20, 20, 20, 10, 0],
    [0, 10, 10, 10, 10, 10, 10, 0],
    [0,  0,  0,  0,  0,  0,  0, 0],
];

/// Per row a man has travelled from its own back rank.
const ADVANCEMENT_STEP: i32 = 15;
/// A piece on the a- or h-file cannot be jumped from the side.
const EDGE_BONUS: i32 = 15;
/// Per friendly piece diagonally adjacent.
const SUPPORT_BONUS: i32 = 20;
/// Flat bonus inside the central 4x4 block.
const CENTRAL_BLOCK_BONUS: i32 = 25;

fn rank_value(rank: Rank) -> i32 {
    match rank {
        Rank::Normal => RANK_VALUES[0],
        Rank::King => RANK_VALUES[1],
        Rank::SuperKing => RANK_VALUES[2],
    }
}

pub(crate) fn is_central(row: i8, col: i8) -> bool {
    (2..=5).contains(&row) && (2..=5).contains(&col)
}

/// Rank value plus positional bonuses for a single piece.
pub fn piece_value(board: &Board, piece: &Piece) -> i32 {
    let Piece {
        owner,
        rank,
        position,
        ..
    } = *piece;
    let (row, col) = (position.row, position.col);

    let mut value = rank_value(rank) + CENTER_BONUS[row as usize][col as usize];

    if rank == Rank::Normal {
        value += (row - owner.home_row()).abs() as i32 * ADVANCEMENT_STEP;
    }
    if col == 0 || col == 7 {
        value += EDGE_BONUS;
    }

    let supporters = DIAGONALS
        .iter()
        .filter_map(|&(dr, dc)| position.offset(dr, dc))
        .filter_map(|sq| board.piece_at(sq))
        .filter(|pc| pc.owner == owner)
        .count() as i32;
    value += supporters * SUPPORT_BONUS;

    if is_central(row, col) {
        value += CENTRAL_BLOCK_BONUS;
    }
    value
}

/// Evaluates the board from `perspective`'s point of view.
///
/// Returns the signed sum of [`piece_value`] over all pieces:
/// - Positive = good for `perspective`
/// - Negative = good for the opponent
pub fn evaluate(board: &Board, perspective: Player) -> i32 {
    board
        .pieces()
        .map(|pc| {
            let v = piece_value(board, pc);
            if pc.owner == perspective {
                v
            } else {
                -v
            }
        })
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
