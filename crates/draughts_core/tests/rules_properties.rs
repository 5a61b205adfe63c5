//! Invariants checked over seeded random playouts.
//!
//! - Piece count never grows and drops by exactly one per jump
//! - Forced capture holds for every piece of the side to move
//! - A capture chain keeps the turn until it is finished
//! - A man is crowned once, on the step it reaches the far row

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use draughts_core::{
    GameState, Player, Position, Rank, capture_moves, has_capture, legal_moves, legal_steps,
};

const PLAYOUTS: u64 = 40;
const MAX_STEPS: usize = 400;

fn playout(seed: u64, mut check: impl FnMut(&GameState, &GameState, (Position, Position))) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::new().start();

    for _ in 0..MAX_STEPS {
        if state.is_terminal() {
            break;
        }
        let mover = state.current_player();
        let steps = legal_steps(state.board(), mover);
        let &(from, to) = steps.choose(&mut rng).expect("a live game has a legal step");
        let next = state
            .submit_move(mover, from, to)
            .expect("generated steps are accepted");
        check(&state, &next, (from, to));
        state = next;
    }
}

#[test]
fn piece_count_is_monotonic() {
    for seed in 0..PLAYOUTS {
        playout(seed, |before, after, (from, to)| {
            let jump = from.diagonal_distance(to).is_some_and(|d| d > 1);
            let expected = before.board().len() - usize::from(jump);
            assert_eq!(after.board().len(), expected, "seed {seed}");
            assert!(after.board().count(Player::Red) <= 12);
            assert!(after.board().count(Player::Black) <= 12);
        });
    }
}

#[test]
fn forced_capture_everywhere() {
    for seed in 0..PLAYOUTS {
        playout(seed, |_, after, _| {
            if after.is_terminal() {
                return;
            }
            let side = after.current_player();
            let board = after.board();
            if !has_capture(board, side) {
                return;
            }
            for pc in board.pieces_of(side) {
                let captures = capture_moves(pc, board);
                assert!(
                    legal_moves(pc, board).iter().all(|to| captures.contains(to)),
                    "seed {seed}: non-capture offered while a capture exists"
                );
            }
        });
    }
}

#[test]
fn capture_chain_keeps_turn() {
    for seed in 0..PLAYOUTS {
        playout(seed, |before, after, (_, to)| {
            let mover = before.current_player();
            match after.board().continuing_piece(mover) {
                Some(pc) => {
                    assert_eq!(pc.position, to);
                    assert_eq!(after.current_player(), mover);
                    // Nobody else on that side may move.
                    for other in after.board().pieces_of(mover).filter(|p| p.id != pc.id) {
                        assert!(legal_moves(other, after.board()).is_empty());
                    }
                }
                None if !after.is_terminal() => assert_eq!(after.current_player(), mover.other()),
                None => {}
            }
        });
    }
}

#[test]
fn promotion_happens_once() {
    for seed in 0..PLAYOUTS {
        playout(seed, |before, after, (from, to)| {
            let moved_before = before.board().piece_at(from).copied().unwrap();
            let moved_after = after.board().piece_at(to).copied().unwrap();
            let reached_far_row = to.row == moved_before.owner.promotion_row();
            match moved_before.rank {
                Rank::Normal if reached_far_row => assert_eq!(moved_after.rank, Rank::King),
                Rank::Normal => assert_eq!(moved_after.rank, Rank::Normal),
                rank => assert_eq!(moved_after.rank, rank, "seed {seed}: re-promoted"),
            }
        });
    }
}
