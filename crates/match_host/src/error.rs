use draughts_core::{EngineError, Player};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("{0} is played by the AI")]
    AiSeat(Player),

    #[error("match host has shut down")]
    Closed,
}

pub type HostResult<T> = Result<T, HostError>;
