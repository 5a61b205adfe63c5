//! Search budgets and cancellation shared by every engine.
//!
//! The only throttles are the ones a caller hands in: a depth cap, an
//! optional wall-clock budget, and a [`StopSignal`] the caller may raise
//! from another thread when the result is no longer wanted.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// How often (in nodes) a search looks at the clock.
pub const CHECK_INTERVAL: u64 = 1024;

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    raised: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Relaxed)
    }
}

/// Limits for one search.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies; a whole capture chain is one ply.
    pub depth: u8,
    /// Wall-clock budget for this search (None = depth only)
    pub move_time: Option<Duration>,
    pub stop: StopSignal,
    started: Option<Instant>,
}

impl SearchLimits {
    /// Create limits with only depth constraint (no time limit).
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            stop: StopSignal::new(),
            started: None,
        }
    }

    /// Create limits with both depth and time constraints.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            move_time: Some(move_time),
            ..Self::depth(depth)
        }
    }

    /// Search under a caller-owned stop signal.
    pub fn with_stop(mut self, stop: StopSignal) -> Self {
        self.stop = stop;
        self
    }

    /// Start the clock. Engines call this when a search begins.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.started.map(|s| s.elapsed()).unwrap_or(Duration::ZERO)
    }

    /// True if the search must unwind now. The stop flag is read on every
    /// call, the clock only every [`CHECK_INTERVAL`] nodes.
    #[inline]
    pub fn should_stop(&self, nodes: u64) -> bool {
        if self.stop.is_raised() {
            return true;
        }
        if nodes % CHECK_INTERVAL != 0 {
            return false;
        }
        match self.move_time {
            Some(limit) if self.elapsed() >= limit => {
                self.stop.raise();
                true
            }
            _ => false,
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod limits_tests;
