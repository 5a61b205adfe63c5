//! Error types for board construction and rule violations.
//!
//! Every rule violation is returned to the caller as a typed value; none of
//! them leave partial state behind.

use thiserror::Error;

use crate::game::Status;
use crate::types::{PieceId, Player, Position};

/// A board that would break one of the placement invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("square {0} is not a playable dark square")]
    UnplayableSquare(Position),

    #[error("square {0} is already occupied")]
    Occupied(Position),

    #[error("piece id {0} is used twice")]
    DuplicateId(PieceId),

    #[error("{0} has more than 12 pieces")]
    TooManyPieces(Player),
}

/// A move that is not in the legal set for the acting player.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("no piece on {0}")]
    NoPiece(Position),

    #[error("piece on {square} belongs to {owner}, not {player}")]
    WrongOwner {
        square: Position,
        owner: Player,
        player: Player,
    },

    #[error("{to} is not a legal destination from {from}")]
    IllegalDestination { from: Position, to: Position },

    #[error("turn ends on {0} but the capture chain must continue")]
    IncompleteChain(Position),
}

/// Errors returned by the game state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),

    #[error("it is {expected}'s turn, not {actual}'s")]
    NotYourTurn { expected: Player, actual: Player },

    #[error("game is not being played (status {0:?})")]
    NotPlaying(Status),
}

/// Result type alias for game state operations
pub type EngineResult<T> = Result<T, EngineError>;
