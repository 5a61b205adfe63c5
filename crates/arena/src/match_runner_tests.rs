use super::*;
use draughts_core::{Board, Move, SearchResult};
use minimax_engine::{Difficulty, MinimaxEngine};
use random_engine::RandomEngine;

fn short(num_games: u32) -> MatchConfig {
    MatchConfig {
        num_games,
        max_turns: 60,
        ..Default::default()
    }
}

/// Always plays a move that is never legal.
struct Cheater;

impl Engine for Cheater {
    fn search(&mut self, _board: &Board, _player: Player, _limits: SearchLimits) -> SearchResult {
        SearchResult {
            best_move: Some(Move::step(
                draughts_core::Position::new(3, 0),
                draughts_core::Position::new(4, 1),
            )),
            score: 0,
            depth: 0,
            nodes: 0,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Cheater"
    }
}

#[test]
fn test_random_self_play() {
    let mut engine1 = RandomEngine::with_seed(1);
    let mut engine2 = RandomEngine::with_seed(2);

    let runner = MatchRunner::new(short(4));
    let result = runner.run_match(&mut engine1, &mut engine2);

    assert_eq!(result.total_games(), 4);
    assert_eq!(result.games.len(), 4);
    assert!(result.games.iter().all(|g| g.turns <= 60));
    let reds: Vec<bool> = result.games.iter().map(|g| g.engine1_red).collect();
    assert_eq!(reds, vec![true, false, true, false]);
}

#[test]
fn test_fixed_colors() {
    let mut engine1 = RandomEngine::with_seed(3);
    let mut engine2 = RandomEngine::with_seed(4);
    let runner = MatchRunner::new(MatchConfig {
        alternate_colors: false,
        ..short(2)
    });
    let result = runner.run_match(&mut engine1, &mut engine2);
    assert!(result.games.iter().all(|g| g.engine1_red));
}

#[test]
fn test_illegal_move_forfeits() {
    let mut cheater = Cheater;
    let mut random = RandomEngine::with_seed(5);
    let runner = MatchRunner::new(short(2));
    let result = runner.run_match(&mut cheater, &mut random);
    assert_eq!(result.losses, 2);
}

#[test]
fn test_turn_cap_is_a_draw() {
    let mut engine1 = MinimaxEngine::with_seed(Difficulty::Easy, 1);
    let mut engine2 = MinimaxEngine::with_seed(Difficulty::Easy, 2);
    let runner = MatchRunner::new(MatchConfig {
        max_turns: 2,
        ..short(1)
    });
    let result = runner.run_match(&mut engine1, &mut engine2);
    assert_eq!(result.draws, 1);
    assert_eq!(result.games[0].turns, 2);
}

#[test]
fn test_minimax_beats_random() {
    let mut minimax = MinimaxEngine::with_seed(Difficulty::Medium, 7);
    let mut random = RandomEngine::with_seed(7);
    let runner = MatchRunner::new(MatchConfig {
        num_games: 2,
        max_turns: 150,
        ..Default::default()
    });
    let result = runner.run_match(&mut minimax, &mut random);
    assert!(result.losses == 0, "medium lost to random: {result:?}");
}
