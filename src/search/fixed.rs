//! Fixed-depth minimax agent.

use std::time::Instant;

use log::debug;

use crate::core::{Move, TimeProbe};
use crate::eval::Evaluator;
use crate::rules::GameState;

use super::agent::Agent;
use super::budget::Budget;
use super::config::SearchConfig;
use super::error::SearchTimeout;
use super::minimax::{RootProgress, Searcher};
use super::stats::SearchStats;

/// Plain minimax to `config.search_depth` plies.
///
/// On timeout the agent returns `Move::NONE`: nothing is trusted from a
/// root pass that did not finish.
pub struct FixedDepthAgent<E> {
    config: SearchConfig,
    evaluator: E,
    stats: SearchStats,
}

impl<E> FixedDepthAgent<E> {
    /// Create a new fixed-depth agent.
    ///
    /// `config` is taken as given; run `SearchConfig::validate` first (or
    /// build through `from_config`) to reject a zero depth or a bad
    /// threshold.
    pub fn new(config: SearchConfig, evaluator: E) -> Self {
        Self {
            config,
            evaluator,
            stats: SearchStats::default(),
        }
    }

    /// Search configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best move by minimax to `depth` plies.
    ///
    /// Returns `Move::NONE` if there are no legal moves, and
    /// `Err(SearchTimeout)` if the budget runs out first. Statistics
    /// accumulate until the next `choose_move`.
    pub fn search<S>(&mut self, state: &S, depth: u32, time_left: &dyn TimeProbe) -> Result<Move, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let budget = Budget::new(time_left, self.config.time_threshold_ms);
        let player = state.active_player();
        let mut progress = RootProgress::default();

        Searcher::new(&self.evaluator, budget, player, &mut self.stats).root_min_max(state, depth, &mut progress)
    }
}

impl<S, E> Agent<S> for FixedDepthAgent<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn choose_move(&mut self, state: &S, time_left: &dyn TimeProbe) -> Move {
        let start = Instant::now();
        self.stats.reset();

        let depth = self.config.search_depth;
        let best = match self.search(state, depth, time_left) {
            Ok(mv) => {
                self.stats.depth_completed = depth;
                mv
            }
            Err(timeout) => {
                debug!("fixed-depth search abandoned at depth {}: {}", depth, timeout);
                self.stats.timed_out = true;
                Move::NONE
            }
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        best
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
