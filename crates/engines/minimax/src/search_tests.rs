use super::*;
use crate::{pick_move, MinimaxEngine};
use draughts_core::{legal_turns, Engine, Position, StopSignal};
use rand::SeedableRng;

fn p(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

fn rank(board: &Board, player: Player, difficulty: Difficulty, depth: u8) -> SearchOutcome {
    let mut nodes = 0;
    let mut rng = StdRng::seed_from_u64(7);
    let mut limits = SearchLimits::depth(depth);
    limits.start();
    rank_moves(board, player, difficulty, depth, &limits, &mut nodes, &mut rng)
}

/// Red king steps onto (7,2) and the last black man is walled in.
fn blockade() -> Board {
    Board::from_diagram(
        "
        ........
        ........
        ........
        ........
        ........
        ..r.....
        .b.R....
        r.......
        ",
    )
}

#[test]
fn test_rank_moves_start_position() {
    let outcome = rank(&Board::initial(), Player::Red, Difficulty::Medium, 4);
    assert_eq!(outcome.ranked.len(), 7);
    assert!(!outcome.stopped);
    assert!(outcome.ranked.windows(2).all(|w| w[0].1 >= w[1].1));
}

#[test]
fn test_prefers_longer_capture_chain() {
    let board = Board::from_diagram(
        "
        ........
        ........
        .b......
        ........
        .b...b..
        r.....r.
        ........
        ........
        ",
    );
    let outcome = rank(&board, Player::Red, Difficulty::Medium, 1);
    assert_eq!(outcome.ranked.len(), 2);
    let (best, _) = outcome.best().unwrap();
    assert_eq!(best, &Move::chain(p(5, 0), vec![p(3, 2), p(1, 0)]));
}

#[test]
fn test_finds_blockade_win() {
    let mv = pick_move(&blockade(), Player::Red, Difficulty::Medium).unwrap();
    assert_eq!(mv, Move::step(p(6, 3), p(7, 2)));

    let outcome = rank(&blockade(), Player::Red, Difficulty::Medium, 2);
    assert_eq!(outcome.best().unwrap().1, WIN_SCORE + 1);
}

#[test]
fn test_no_legal_turn_returns_none() {
    let board = Board::from_diagram(
        "
        .b......
        ........
        ........
        ........
        ........
        ........
        ........
        ........
        ",
    );
    assert!(pick_move(&board, Player::Red, Difficulty::Hard).is_none());

    let mut engine = MinimaxEngine::with_seed(Difficulty::Easy, 1);
    let result = engine.search(&board, Player::Red, SearchLimits::depth(2));
    assert!(result.best_move.is_none());
    assert!(!result.stopped);
}

#[test]
fn test_medium_is_deterministic() {
    let board = Board::initial();
    let first = pick_move(&board, Player::Red, Difficulty::Medium);
    for _ in 0..3 {
        assert_eq!(pick_move(&board, Player::Red, Difficulty::Medium), first);
    }
}

#[test]
fn test_seeded_engines_replay() {
    for difficulty in Difficulty::ALL {
        let mut a = MinimaxEngine::with_seed(difficulty, 42);
        let mut b = MinimaxEngine::with_seed(difficulty, 42);
        let mut board = Board::initial();
        let mut player = Player::Red;
        for _ in 0..4 {
            let ma = a.pick(&board, player).unwrap();
            let mb = b.pick(&board, player).unwrap();
            assert_eq!(ma, mb);
            board = draughts_core::play_turn(&board, player, &ma).unwrap();
            player = player.other();
        }
    }
}

#[test]
fn test_engine_move_is_legal() {
    let mut engine = MinimaxEngine::with_seed(Difficulty::Hard, 3);
    let board = Board::initial();
    let result = engine.search(&board, Player::Black, SearchLimits::depth(6));
    assert!(legal_turns(&board, Player::Black).contains(&result.best_move.unwrap()));
    assert!(result.nodes > 0);
    assert_eq!(result.depth, 6);
}

#[test]
fn test_limits_cap_depth() {
    let mut engine = MinimaxEngine::with_seed(Difficulty::Hard, 3);
    let result = engine.search(&Board::initial(), Player::Red, SearchLimits::depth(2));
    assert_eq!(result.depth, 2);
}

#[test]
fn test_raised_stop_still_returns_legal_turn() {
    let stop = StopSignal::new();
    stop.raise();
    let mut engine = MinimaxEngine::with_seed(Difficulty::Medium, 0);
    let board = Board::initial();
    let result = engine.search(&board, Player::Red, SearchLimits::depth(4).with_stop(stop));
    assert!(result.stopped);
    assert_eq!(result.best_move, legal_turns(&board, Player::Red).first().cloned());
}

#[test]
fn test_root_bonus() {
    // Central landing.
    let board = Board::initial();
    assert_eq!(
        root_bonus(&board, Player::Red, &Move::step(p(5, 2), p(4, 3))),
        50
    );
    // Edge landing by a man earns nothing.
    assert_eq!(root_bonus(&board, Player::Red, &Move::step(p(5, 6), p(4, 7))), 0);
    // King retreating to the back rows.
    assert_eq!(
        root_bonus(&blockade(), Player::Red, &Move::step(p(6, 3), p(7, 2))),
        30
    );
}
