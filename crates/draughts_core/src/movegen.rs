//! Legal move generation: single diagonal steps, captures, the forced-capture
//! rule, and whole turns with every capture chain followed to its end.

use crate::board::Board;
use crate::execute::{StepOutcome, execute_step};
use crate::types::*;

fn step_directions(piece: &Piece) -> &'static [(i8, i8)] {
    if piece.rank.is_crowned() {
        return &DIAGONALS;
    }
    match piece.owner {
        Player::Red => &[(-1, -1), (-1, 1)],
        Player::Black => &[(1, -1), (1, 1)],
    }
}

/// One-square diagonal moves onto empty squares. Men only move forward;
/// kings and super kings move one square in any diagonal direction.
pub fn basic_moves(piece: &Piece, board: &Board) -> Vec<Position> {
    step_directions(piece)
        .iter()
        .filter_map(|&(dr, dc)| piece.position.offset(dr, dc))
        .filter(|&to| board.is_vacant(to))
        .collect()
}

/// Landing squares of every capture available to `piece`.
///
/// A man needs an adjacent opposing piece ahead of it with an empty square
/// right behind. A king looks along each diagonal across empty squares to
/// the first occupied one; if that is an opponent with an empty square
/// behind it, that square is the landing.
pub fn capture_moves(piece: &Piece, board: &Board) -> Vec<Position> {
    let reach = if piece.rank.is_crowned() { BOARD_SIZE } else { 1 };
    let mut out = Vec::new();
    for &(dr, dc) in step_directions(piece) {
        let mut cur = piece.position;
        for _ in 0..reach {
            let Some(next) = cur.offset(dr, dc) else { break };
            cur = next;
            let Some(pc) = board.piece_at(cur) else { continue };
            if pc.owner != piece.owner
                && let Some(landing) = cur.offset(dr, dc)
                && board.is_vacant(landing)
            {
                out.push(landing);
            }
            break;
        }
    }
    out
}

/// The opposing piece a capture from `from` to `to` jumps over.
pub fn jumped_piece<'a>(board: &'a Board, owner: Player, from: Position, to: Position) -> Option<&'a Piece> {
    let dist = from.diagonal_distance(to)?;
    let dr = (to.row - from.row).signum();
    let dc = (to.col - from.col).signum();
    (1..dist)
        .filter_map(|i| from.offset(dr * i, dc * i))
        .filter_map(|sq| board.piece_at(sq))
        .find(|pc| pc.owner != owner)
}

/// True if any piece of `player` can capture.
pub fn has_capture(board: &Board, player: Player) -> bool {
    board
        .pieces_of(player)
        .any(|pc| !capture_moves(pc, board).is_empty())
}

/// Destinations `piece` may legally move to this turn.
///
/// A piece that is partway through a capture chain may only keep capturing
/// and no other piece of its side may move. Otherwise, if any piece of the
/// side can capture, only captures are legal for every piece of that side.
pub fn legal_moves(piece: &Piece, board: &Board) -> Vec<Position> {
    if let Some(cont) = board.continuing_piece(piece.owner) {
        return if cont.id == piece.id {
            capture_moves(piece, board)
        } else {
            Vec::new()
        };
    }
    if has_capture(board, piece.owner) {
        capture_moves(piece, board)
    } else {
        basic_moves(piece, board)
    }
}

/// Legal destinations of the piece with the given id.
///
/// # Panics
/// Panics if no piece with that id is on the board; asking about a piece
/// that does not exist is a caller bug.
pub fn legal_moves_for(board: &Board, id: PieceId) -> Vec<Position> {
    let piece = board
        .piece(id)
        .unwrap_or_else(|| panic!("no piece with id {id} on the board"));
    legal_moves(piece, board)
}

/// Every legal single step `(from, to)` for `player`.
pub fn legal_steps(board: &Board, player: Player) -> Vec<(Position, Position)> {
    board
        .pieces_of(player)
        .flat_map(|pc| {
            legal_moves(pc, board)
                .into_iter()
                .map(move |to| (pc.position, to))
        })
        .collect()
}

/// True if `player` has at least one legal move anywhere on the board.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    if board.continuing_piece(player).is_some() || has_capture(board, player) {
        return true;
    }
    board
        .pieces_of(player)
        .any(|pc| !basic_moves(pc, board).is_empty())
}

/// Generate all legal turns, returning a freshly allocated vector.
pub fn legal_turns(board: &Board, player: Player) -> Vec<Move> {
    let mut out = Vec::with_capacity(16);
    legal_turns_into(board, player, &mut out);
    out
}

/// Generate all legal turns into the provided buffer, reusing it across calls.
///
/// Each capture chain is followed to its end and listed as one [`Move`]
/// carrying every landing square. If no capture exists, single steps are
/// listed instead. A piece already partway through a chain only yields the
/// rest of its chains.
pub fn legal_turns_into(board: &Board, player: Player, out: &mut Vec<Move>) {
    out.clear();
    out.extend(turn_successors(board, player).into_iter().map(|(mv, _)| mv));
}

/// All legal turns together with the board each one produces.
pub fn turn_successors(board: &Board, player: Player) -> Vec<(Move, Board)> {
    let mut out = Vec::new();
    if let Some(cont) = board.continuing_piece(player) {
        let mut landings = Vec::new();
        follow_chains(board, cont, cont.position, &mut landings, &mut out);
        return out;
    }

    if has_capture(board, player) {
        for pc in board.pieces_of(player) {
            let mut landings = Vec::new();
            follow_chains(board, pc, pc.position, &mut landings, &mut out);
        }
    } else {
        for pc in board.pieces_of(player) {
            for to in basic_moves(pc, board) {
                let StepOutcome { board: next, .. } = execute_step(board, pc, to);
                out.push((Move::step(pc.position, to), next));
            }
        }
    }
    out
}

fn follow_chains(
    board: &Board,
    piece: &Piece,
    origin: Position,
    landings: &mut Vec<Position>,
    out: &mut Vec<(Move, Board)>,
) {
    for to in capture_moves(piece, board) {
        let outcome = execute_step(board, piece, to);
        landings.push(to);
        let next_piece = outcome
            .must_continue
            .then(|| outcome.board.piece_at(to).copied())
            .flatten();
        match next_piece {
            Some(moved) => follow_chains(&outcome.board, &moved, origin, landings, out),
            None => out.push((Move::chain(origin, landings.clone()), outcome.board)),
        }
        landings.pop();
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
