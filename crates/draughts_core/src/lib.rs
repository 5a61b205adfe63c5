pub mod board;
pub mod error;
pub mod execute;
pub mod game;
pub mod limits;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use execute::{StepOutcome, apply_move, play_turn};
pub use game::*;
pub use limits::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;

/// The standard starting position.
pub fn create_initial_board() -> Board {
    Board::initial()
}

// =============================================================================
// Engine trait: implemented by every move picker
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best turn found (None if the side has no legal move)
    pub best_move: Option<Move>,
    /// Evaluation from the searching side's perspective
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
    /// Whether search was cut short by the stop signal or time budget
    pub stopped: bool,
}

/// Trait that all engines must implement.
///
/// An engine never mutates game state: it looks at a board and proposes a
/// whole turn, which the caller plays through [`GameState::submit_turn`].
pub trait Engine: Send {
    /// Search `board` for `player` within the given limits.
    fn search(&mut self, board: &Board, player: Player, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for reports and logs
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "damas"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
