//! Hosting for live checkers matches.
//!
//! Each match runs as its own tokio task: commands from the session layer
//! are applied one at a time, AI seats are searched on the blocking pool,
//! and every new [`GameState`](draughts_core::GameState) is published on a
//! watch channel.

mod config;
mod error;
mod host;

pub use config::{HostConfig, Seat};
pub use error::{HostError, HostResult};
pub use host::{MatchHandle, MatchHost};
