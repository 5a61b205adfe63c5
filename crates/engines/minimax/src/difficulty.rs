//! Named strength profiles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown difficulty {0:?} (expected easy, medium or hard)")]
pub struct UnknownDifficulty(pub String);

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Search depth in plies, the root turn included.
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        }
    }

    /// Half-width of the uniform noise added to every leaf evaluation.
    pub fn eval_noise(self) -> i32 {
        match self {
            Difficulty::Easy => 100,
            Difficulty::Medium | Difficulty::Hard => 0,
        }
    }

    /// Chance of deliberately playing the second-best root move.
    pub fn second_best_chance(self) -> f64 {
        match self {
            Difficulty::Hard => 0.1,
            Difficulty::Easy | Difficulty::Medium => 0.0,
        }
    }

    /// Whether root moves get the central-control and king-safety bonuses.
    pub fn root_heuristics(self) -> bool {
        self == Difficulty::Hard
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "difficulty_tests.rs"]
mod difficulty_tests;
