//! Match runner for playing games between engines

use std::time::Duration;

use draughts_core::{Engine, GameState, Player, SearchLimits};
use tracing::{debug, info, warn};

use crate::elo::{GameRecord, GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Depth handed to the engines; each engine still caps it at its own
    pub depth: u8,
    /// Maximum time per search (None = no limit)
    pub move_time: Option<Duration>,
    /// Turns per game before declaring a draw
    pub max_turns: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: u8::MAX,
            move_time: None,
            max_turns: 200,
            alternate_colors: true,
        }
    }
}

impl MatchConfig {
    /// Fresh limits for one search (the clock starts inside the engine)
    fn search_limits(&self) -> SearchLimits {
        match self.move_time {
            Some(time) => SearchLimits::depth_and_time(self.depth, time),
            None => SearchLimits::depth(self.depth),
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_red = !self.config.alternate_colors || game_num % 2 == 0;

            let (red_result, turns) = if engine1_red {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };
            let game_result = if engine1_red {
                red_result
            } else {
                red_result.flip()
            };

            result.record(GameRecord {
                engine1_red,
                result: game_result,
                turns,
            });

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                engine1 = engine1.name(),
                engine2 = engine2.name(),
                engine1_red,
                result = ?game_result,
                turns,
                score = %format!("{}-{}-{}", result.wins, result.losses, result.draws),
                "game finished"
            );
        }

        result
    }

    /// Plays one game from the initial position. Returns the result from
    /// Red's point of view and the number of turns played.
    pub fn play_game(&self, red: &mut dyn Engine, black: &mut dyn Engine) -> (GameResult, u32) {
        let mut state = GameState::new().start();
        red.new_game();
        black.new_game();

        for turn in 0..self.config.max_turns {
            if state.is_terminal() {
                return (red_result(&state), turn);
            }

            let player = state.current_player();
            let engine: &mut dyn Engine = match player {
                Player::Red => &mut *red,
                Player::Black => &mut *black,
            };
            let search = engine.search(state.board(), player, self.config.search_limits());

            let Some(mv) = search.best_move else {
                warn!(engine = engine.name(), %player, "engine returned no move in a live position");
                return (forfeit(player), turn);
            };
            match state.submit_turn(player, &mv) {
                Ok(next) => {
                    debug!(%player, %mv, score = search.score, nodes = search.nodes, "turn played");
                    state = next;
                }
                Err(e) => {
                    warn!(engine = engine.name(), %player, %mv, error = %e, "illegal move, game forfeited");
                    return (forfeit(player), turn);
                }
            }
        }

        if state.is_terminal() {
            (red_result(&state), self.config.max_turns)
        } else {
            (GameResult::Draw, self.config.max_turns)
        }
    }
}

fn red_result(state: &GameState) -> GameResult {
    match state.winner() {
        Some(Player::Red) => GameResult::Win,
        Some(Player::Black) => GameResult::Loss,
        None => GameResult::Draw,
    }
}

fn forfeit(offender: Player) -> GameResult {
    match offender {
        Player::Red => GameResult::Loss,
        Player::Black => GameResult::Win,
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
