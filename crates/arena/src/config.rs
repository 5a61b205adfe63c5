//! Arena settings, read from an optional TOML file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{read, ArenaResult};
use crate::match_runner::MatchConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games_per_match: u32,
    /// Turns after which a game is scored as a draw.
    pub max_turns: u32,
    pub alternate_colors: bool,
    /// Base seed for every engine's RNG; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Per-search time budget in milliseconds.
    pub move_time_ms: Option<u64>,
    pub results_path: PathBuf,
    pub ratings_path: PathBuf,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games_per_match: 10,
            max_turns: 200,
            alternate_colors: true,
            seed: None,
            move_time_ms: None,
            results_path: PathBuf::from("arena_results.json"),
            ratings_path: PathBuf::from("arena_ratings.json"),
        }
    }
}

impl ArenaConfig {
    pub fn from_toml(text: &str) -> ArenaResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> ArenaResult<Self> {
        Self::from_toml(&read(path)?)
    }

    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            num_games: self.games_per_match,
            max_turns: self.max_turns,
            alternate_colors: self.alternate_colors,
            move_time: self.move_time_ms.map(Duration::from_millis),
            ..MatchConfig::default()
        }
    }
}
