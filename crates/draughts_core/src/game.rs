//! Turn ownership, match lifecycle and terminal-state detection.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{EngineError, EngineResult, InvalidMove};
use crate::execute::apply_move;
use crate::movegen::{has_legal_move, legal_moves};
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Created, second player not yet present.
    Waiting,
    Playing,
    Finished,
}

/// Pieces captured by each side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub red: u32,
    pub black: u32,
}

impl Scores {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Red => self.red,
            Player::Black => self.black,
        }
    }

    fn add_capture(&mut self, player: Player) {
        match player {
            Player::Red => self.red += 1,
            Player::Black => self.black += 1,
        }
    }
}

/// One match. Every transition returns a new value and leaves `self` as it
/// was, so a rejected move never leaves partial state behind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: Status,
    winner: Option<Player>,
    scores: Scores,
    /// Number of steps applied so far; a capture chain counts each jump.
    move_number: u32,
}

impl GameState {
    /// A match waiting for its second player. Red moves first.
    pub fn new() -> Self {
        GameState {
            board: Board::initial(),
            current_player: Player::Red,
            status: Status::Waiting,
            winner: None,
            scores: Scores::default(),
            move_number: 0,
        }
    }

    /// A match in progress from an arbitrary position. If `to_move` is
    /// already stuck the match is finished on the spot.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let mut state = GameState {
            board,
            current_player: to_move,
            status: Status::Playing,
            winner: None,
            scores: Scores::default(),
            move_number: 0,
        };
        state.check_terminal();
        state
    }

    /// Both players are present: `Waiting` becomes `Playing`. Any other
    /// status is left alone.
    pub fn start(mut self) -> Self {
        if self.status == Status::Waiting {
            self.status = Status::Playing;
        }
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    pub fn is_terminal(&self) -> bool {
        self.status == Status::Finished
    }

    /// Legal destinations for a piece of the side to move. Empty when the
    /// match is not being played or the piece belongs to the other side.
    ///
    /// # Panics
    /// Panics if no piece has that id.
    pub fn legal_moves(&self, id: PieceId) -> Vec<Position> {
        let piece = self
            .board
            .piece(id)
            .unwrap_or_else(|| panic!("no piece with id {id} on the board"));
        if self.status != Status::Playing || piece.owner != self.current_player {
            return Vec::new();
        }
        legal_moves(piece, &self.board)
    }

    /// Plays one step for `player`. The turn passes unless the moved piece
    /// captured and can capture again.
    pub fn submit_move(&self, player: Player, from: Position, to: Position) -> EngineResult<GameState> {
        if self.status != Status::Playing {
            return Err(EngineError::NotPlaying(self.status));
        }
        if player != self.current_player {
            return Err(EngineError::NotYourTurn {
                expected: self.current_player,
                actual: player,
            });
        }

        let outcome = apply_move(&self.board, from, to, player)?;

        let mut next = self.clone();
        next.board = outcome.board;
        next.move_number += 1;
        if outcome.captured.is_some() {
            next.scores.add_capture(player);
        }
        if !outcome.must_continue {
            next.current_player = player.other();
        }
        next.check_terminal();
        Ok(next)
    }

    /// Plays a whole turn, every jump of a capture chain included. Either
    /// the full turn is applied or nothing is.
    pub fn submit_turn(&self, player: Player, mv: &Move) -> EngineResult<GameState> {
        let steps = mv.steps();
        if steps.is_empty() {
            return Err(InvalidMove::IllegalDestination {
                from: mv.from,
                to: mv.to,
            }
            .into());
        }

        let mut state = self.clone();
        for (i, &(from, to)) in steps.iter().enumerate() {
            let is_jump = from.diagonal_distance(to).is_some_and(|d| d > 1);
            let turn_over = i > 0 && (state.current_player != player || state.is_terminal());
            if turn_over || is_jump != mv.is_capture() {
                return Err(InvalidMove::IllegalDestination { from, to }.into());
            }
            state = state.submit_move(player, from, to)?;
        }

        if !state.is_terminal() && state.current_player == player {
            return Err(InvalidMove::IncompleteChain(mv.to).into());
        }
        Ok(state)
    }

    /// `player` resigns; the other side wins whatever the board says. A
    /// finished match is returned unchanged.
    pub fn surrender(&self, player: Player) -> GameState {
        let mut next = self.clone();
        if next.status != Status::Finished {
            next.status = Status::Finished;
            next.winner = Some(player.other());
        }
        next
    }

    /// Finishes the match if a side has been wiped out or the side to move
    /// has no legal move.
    fn check_terminal(&mut self) {
        let to_move = self.current_player;
        let loser = if self.board.count(to_move.other()) == 0 {
            Some(to_move.other())
        } else if self.board.count(to_move) == 0 || !has_legal_move(&self.board, to_move) {
            Some(to_move)
        } else {
            None
        };

        if let Some(loser) = loser {
            self.status = Status::Finished;
            self.winner = Some(loser.other());
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
