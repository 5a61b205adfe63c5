//! Elo ratings, updated game by game.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{read, write, ArenaResult};

/// Rating given to an engine on its first game
pub const DEFAULT_ELO: f64 = 1500.0;

/// K-factor for Elo updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// Result of a single game from one engine's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn flip(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    pub fn score(self) -> f64 {
        match self {
            GameResult::Win => 1.0,
            GameResult::Loss => 0.0,
            GameResult::Draw => 0.5,
        }
    }
}

/// One game of a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Engine 1 played Red, which moves first.
    pub engine1_red: bool,
    /// From engine 1's point of view.
    pub result: GameResult,
    pub turns: u32,
}

/// Result of a match, from engine 1's point of view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: GameRecord) {
        match game.result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.games.push(game);
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Summary of one rated match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub engine1: String,
    pub engine2: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Net rating change for engine 1 over the whole match
    pub elo_change: f64,
}

/// Ratings for every engine that has played in the arena
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingTable {
    pub ratings: HashMap<String, f64>,
    pub games_played: HashMap<String, u32>,
    pub history: Vec<MatchRecord>,
}

impl RatingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> ArenaResult<Self> {
        Ok(serde_json::from_str(&read(path)?)?)
    }

    /// An empty table if `path` does not exist yet.
    pub fn load_or_default(path: &Path) -> ArenaResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    pub fn save(&self, path: &Path) -> ArenaResult<()> {
        write(path, &serde_json::to_string_pretty(self)?)
    }

    pub fn rating(&self, engine: &str) -> f64 {
        self.ratings.get(engine).copied().unwrap_or(DEFAULT_ELO)
    }

    /// Expected score for engine1 against engine2
    pub fn expected_score(&self, engine1: &str, engine2: &str) -> f64 {
        let r1 = self.rating(engine1);
        let r2 = self.rating(engine2);
        1.0 / (1.0 + 10.0_f64.powf((r2 - r1) / 400.0))
    }

    /// Applies one game. Returns engine1's rating change.
    ///
    /// An engine playing itself keeps its rating; the game is still counted
    /// once.
    pub fn update_game(&mut self, engine1: &str, engine2: &str, result: GameResult) -> f64 {
        if engine1 == engine2 {
            self.ratings
                .entry(engine1.to_string())
                .or_insert(DEFAULT_ELO);
            *self.games_played.entry(engine1.to_string()).or_insert(0) += 1;
            return 0.0;
        }

        let expected = self.expected_score(engine1, engine2);
        let change = K_FACTOR * (result.score() - expected);

        let r1 = self.rating(engine1);
        let r2 = self.rating(engine2);
        self.ratings.insert(engine1.to_string(), r1 + change);
        self.ratings.insert(engine2.to_string(), r2 - change);
        *self.games_played.entry(engine1.to_string()).or_insert(0) += 1;
        *self.games_played.entry(engine2.to_string()).or_insert(0) += 1;
        change
    }

    /// Applies every game of a match in the order it was played.
    pub fn update_match(&mut self, engine1: &str, engine2: &str, result: &MatchResult) {
        let elo_change: f64 = result
            .games
            .iter()
            .map(|g| self.update_game(engine1, engine2, g.result))
            .sum();

        self.history.push(MatchRecord {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            wins: result.wins,
            losses: result.losses,
            draws: result.draws,
            elo_change,
        });
    }

    /// Engines sorted by rating, best first
    pub fn leaderboard(&self) -> Vec<(String, f64, u32)> {
        let mut entries: Vec<_> = self
            .ratings
            .iter()
            .map(|(name, &rating)| {
                let games = self.games_played.get(name).copied().unwrap_or(0);
                (name.clone(), rating, games)
            })
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    pub fn render_leaderboard(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Engine Leaderboard ===\n");
        out.push_str(&format!("{:<24} {:>8} {:>8}\n", "Engine", "Elo", "Games"));
        out.push_str(&"-".repeat(42));
        out.push('\n');
        for (name, rating, games) in self.leaderboard() {
            out.push_str(&format!("{:<24} {:>8.1} {:>8}\n", name, rating, games));
        }
        out
    }
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
