use std::time::Duration;

use draughts_core::Player;
use minimax_engine::Difficulty;
use serde::{Deserialize, Serialize};

/// Who plays one colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    /// Moves arrive through [`MatchHandle`](crate::MatchHandle) calls.
    Human,
    /// The host searches and plays this side itself.
    Ai(Difficulty),
}

/// Settings for one hosted match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub red: Seat,
    pub black: Seat,
    /// Wall-clock cap for each AI search, on top of the difficulty's depth.
    pub move_time: Option<Duration>,
    /// Seeds the AI's random choices so a hosted game can be replayed.
    pub seed: Option<u64>,
}

impl HostConfig {
    pub fn seat(&self, player: Player) -> Seat {
        match player {
            Player::Red => self.red,
            Player::Black => self.black,
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            red: Seat::Human,
            black: Seat::Ai(Difficulty::Medium),
            move_time: None,
            seed: None,
        }
    }
}
