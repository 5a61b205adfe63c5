//! Minimax Checkers Engine
//!
//! Negamax search with alpha-beta pruning over whole turns, a positional
//! evaluation and three difficulty profiles.

mod difficulty;
mod eval;
mod search;

use draughts_core::{Board, Engine, Move, Player, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use difficulty::{Difficulty, UnknownDifficulty};
pub use eval::{evaluate, piece_value};
pub use search::{rank_moves, SearchOutcome, WIN_SCORE};

/// Checkers AI playing at a fixed [`Difficulty`].
///
/// Search depth comes from the difficulty unless the caller's
/// [`SearchLimits`] ask for something shallower. Random choices (Easy's
/// evaluation noise, Hard's occasional second-best move) draw from an
/// engine-owned RNG, so a seeded engine replays the same game.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    difficulty: Difficulty,
    rng: StdRng,
    /// Node counter for statistics
    nodes: u64,
    name: String,
}

impl MinimaxEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::from_rng(difficulty, StdRng::from_entropy())
    }

    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::from_rng(difficulty, StdRng::seed_from_u64(seed))
    }

    fn from_rng(difficulty: Difficulty, rng: StdRng) -> Self {
        Self {
            difficulty,
            rng,
            nodes: 0,
            name: format!("Minimax ({difficulty})"),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Picks a turn for `player`, or `None` if it has no legal turn.
    pub fn pick(&mut self, board: &Board, player: Player) -> Option<Move> {
        self.search(board, player, SearchLimits::depth(self.difficulty.depth()))
            .best_move
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, player: Player, mut limits: SearchLimits) -> SearchResult {
        limits.start();
        self.nodes = 0;
        let depth = limits.depth.min(self.difficulty.depth()).max(1);

        let outcome = rank_moves(
            board,
            player,
            self.difficulty,
            depth,
            &limits,
            &mut self.nodes,
            &mut self.rng,
        );

        let chance = self.difficulty.second_best_chance();
        let pick = if outcome.ranked.len() > 1 && chance > 0.0 && self.rng.gen_bool(chance) {
            outcome.ranked.get(1)
        } else {
            outcome.best()
        };

        SearchResult {
            best_move: pick.map(|(mv, _)| mv.clone()),
            score: pick.map(|(_, s)| *s).unwrap_or(-WIN_SCORE),
            depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Picks a turn for `player` at `difficulty`, or `None` if it has no
/// legal turn. Randomized profiles draw from a fresh entropy-seeded RNG.
pub fn pick_move(board: &Board, player: Player, difficulty: Difficulty) -> Option<Move> {
    MinimaxEngine::new(difficulty).pick(board, player)
}
