//! Applying a single step to a board.

use crate::board::Board;
use crate::error::InvalidMove;
use crate::movegen::{capture_moves, jumped_piece, legal_moves};
use crate::types::*;

/// Result of one step of a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub board: Board,
    /// The opposing piece removed by this step, if it was a capture.
    pub captured: Option<Piece>,
    /// The moved piece captured and can capture again: the turn does not pass.
    pub must_continue: bool,
    /// A man was crowned on this step.
    pub promoted: bool,
}

impl StepOutcome {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Moves the piece on `from` to `to` for `player`, returning the new board.
///
/// Fails without touching `board` if there is no piece on `from`, the piece
/// belongs to the other side, or `to` is not among its legal moves.
pub fn apply_move(
    board: &Board,
    from: Position,
    to: Position,
    player: Player,
) -> Result<StepOutcome, InvalidMove> {
    let piece = board.piece_at(from).ok_or(InvalidMove::NoPiece(from))?;
    if piece.owner != player {
        return Err(InvalidMove::WrongOwner {
            square: from,
            owner: piece.owner,
            player,
        });
    }
    if !legal_moves(piece, board).contains(&to) {
        return Err(InvalidMove::IllegalDestination { from, to });
    }
    Ok(execute_step(board, piece, to))
}

/// Plays a whole turn for `player`, step by step through [`apply_move`].
///
/// A capture chain must be played to its end: stopping while the piece can
/// still capture is [`InvalidMove::IncompleteChain`].
pub fn play_turn(board: &Board, player: Player, mv: &Move) -> Result<Board, InvalidMove> {
    let steps = mv.steps();
    if steps.is_empty() {
        return Err(InvalidMove::IllegalDestination {
            from: mv.from,
            to: mv.to,
        });
    }
    let mut current = board.clone();
    for (i, &(from, to)) in steps.iter().enumerate() {
        let outcome = apply_move(&current, from, to, player)?;
        let last = i + 1 == steps.len();
        if outcome.is_capture() != mv.is_capture() || (!last && !outcome.must_continue) {
            return Err(InvalidMove::IllegalDestination { from, to });
        }
        if last && outcome.must_continue {
            return Err(InvalidMove::IncompleteChain(to));
        }
        current = outcome.board;
    }
    Ok(current)
}

/// Applies a step already known to be legal.
pub(crate) fn execute_step(board: &Board, piece: &Piece, to: Position) -> StepOutcome {
    let from = piece.position;
    let mut next = board.clone();

    let is_jump = from.diagonal_distance(to).is_some_and(|d| d > 1);
    let captured = if is_jump {
        jumped_piece(board, piece.owner, from, to).copied()
    } else {
        None
    };
    if let Some(cap) = captured {
        next.remove(cap.id);
    }

    next.relocate(piece.id, to);

    let promoted = piece.rank == Rank::Normal && to.row == piece.owner.promotion_row();
    let must_continue = match next.piece_mut(piece.id) {
        Some(moved) => {
            if promoted {
                moved.rank = Rank::King;
            }
            moved.must_continue_capture = false;
            let moved = *moved;
            captured.is_some() && !capture_moves(&moved, &next).is_empty()
        }
        None => false,
    };
    if must_continue && let Some(moved) = next.piece_mut(piece.id) {
        moved.must_continue_capture = true;
    }

    StepOutcome {
        board: next,
        captured,
        must_continue,
        promoted,
    }
}

#[cfg(test)]
#[path = "execute_tests.rs"]
mod execute_tests;
