//! Search error types.

use thiserror::Error;

/// The time budget ran out mid-search.
///
/// Raised by the budget check at the top of every node and carried back to
/// the strategy entry point with `?`. Strategies recover from it with a
/// fallback move; it never escapes `Agent::choose_move`.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error("search timed out with {remaining_ms}ms left (threshold {threshold_ms}ms)")]
pub struct SearchTimeout {
    /// Time the probe reported when the search gave up.
    pub remaining_ms: f64,
    /// Configured threshold.
    pub threshold_ms: f64,
}

/// Invalid `SearchConfig` values.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("search depth must be at least 1")]
    ZeroDepth,

    #[error("time threshold must be a positive, finite number of milliseconds, got {0}")]
    InvalidThreshold(f64),

    #[error("iterative deepening depth cap must be at least 1")]
    ZeroMaxDepth,
}
