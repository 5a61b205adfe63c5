//! Random Checkers Engine
//!
//! Picks a whole turn uniformly at random among the legal ones. It is the
//! floor every difficulty profile should clear in the arena, and a cheap
//! way to drive the rules through long random games.

use draughts_core::{legal_turns_into, Board, Engine, Player, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, player: Player, _limits: SearchLimits) -> SearchResult {
        let mut turns = Vec::with_capacity(16);
        legal_turns_into(board, player, &mut turns);
        self.nodes = 1;

        SearchResult {
            best_move: turns.choose(&mut self.rng).cloned(),
            score: 0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
