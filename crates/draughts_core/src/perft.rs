use crate::{board::Board, movegen::turn_successors, types::Player};

/// Pure perft node count.
/// Counts the leaf positions `depth` turns ahead; a capture chain is one turn.
pub fn perft(board: &Board, player: Player, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let successors = turn_successors(board, player);
    if depth == 1 {
        return successors.len() as u64;
    }
    successors
        .iter()
        .map(|(_, next)| perft(next, player.other(), depth - 1))
        .sum()
}
