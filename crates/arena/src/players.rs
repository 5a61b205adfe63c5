//! Engine lookup by name.

use draughts_core::Engine;
use minimax_engine::{Difficulty, MinimaxEngine};
use random_engine::RandomEngine;

use crate::error::{ArenaError, ArenaResult};

/// Every engine name the arena knows, weakest first.
pub const ENGINE_NAMES: [&str; 4] = ["random", "easy", "medium", "hard"];

/// Builds an engine from its name. With a seed, the engine's random
/// choices are reproducible.
pub fn create_engine(name: &str, seed: Option<u64>) -> ArenaResult<Box<dyn Engine>> {
    let name = name.trim().to_ascii_lowercase();
    if name == "random" {
        return Ok(Box::new(match seed {
            Some(seed) => RandomEngine::with_seed(seed),
            None => RandomEngine::new(),
        }));
    }

    let difficulty: Difficulty = name
        .parse()
        .map_err(|_| ArenaError::UnknownEngine(name.clone()))?;
    Ok(Box::new(match seed {
        Some(seed) => MinimaxEngine::with_seed(difficulty, seed),
        None => MinimaxEngine::new(difficulty),
    }))
}
