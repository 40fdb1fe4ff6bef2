//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::eval::Heuristic;

use super::error::ConfigError;

/// Which strategy an agent runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Plain minimax to `search_depth` plies.
    #[default]
    FixedDepth,
    /// Alpha-beta at depth 1, 2, 3, ... until time runs out.
    IterativeDeepening,
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched in fixed-depth mode (default: 3).
    /// A depth of 1 only looks at the immediate successors.
    pub search_depth: u32,

    /// Remaining milliseconds at or below which search aborts (default: 10).
    /// Should leave enough slack to return before the turn clock hits zero.
    pub time_threshold_ms: f64,

    /// Strategy to run.
    pub mode: SearchMode,

    /// Evaluator used when the agent is built from this config.
    pub heuristic: Heuristic,

    /// Deepest iteration in iterative-deepening mode (None = unbounded).
    pub max_depth: Option<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            time_threshold_ms: 10.0,
            mode: SearchMode::FixedDepth,
            heuristic: Heuristic::MobilityRatio,
            max_depth: None,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom fixed search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    /// Create a new config with custom time threshold.
    pub fn with_threshold(mut self, threshold_ms: f64) -> Self {
        self.time_threshold_ms = threshold_ms;
        self
    }

    /// Create a new config with custom search mode.
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Create a new config with custom heuristic.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Create a new config with an iterative-deepening depth cap.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if !(self.time_threshold_ms.is_finite() && self.time_threshold_ms > 0.0) {
            return Err(ConfigError::InvalidThreshold(self.time_threshold_ms));
        }
        if self.max_depth == Some(0) {
            return Err(ConfigError::ZeroMaxDepth);
        }
        Ok(())
    }
}
