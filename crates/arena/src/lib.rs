//! Self-play arena for checkers engines
//!
//! This crate provides infrastructure for:
//! - Running matches between engines under a turn cap
//! - Tracking Elo ratings game by game
//! - Writing JSON reports used to calibrate the difficulty profiles
//!
//! # Usage
//!
//! ```bash
//! # One match
//! cargo run -p arena -- match hard medium --games 20
//!
//! # Every engine against every other
//! cargo run -p arena -- ladder --games 10
//! ```

mod config;
mod elo;
mod error;
mod match_runner;
mod players;
mod results;

pub use config::*;
pub use elo::*;
pub use error::{ArenaError, ArenaResult};
pub use match_runner::*;
pub use players::*;
pub use results::*;
