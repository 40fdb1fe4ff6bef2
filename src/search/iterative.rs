//! Iterative-deepening alpha-beta agent.
//!
//! Runs the alpha-beta root search at depth 1, 2, 3, ... until the budget
//! runs out, keeping the move of the deepest completed depth. Stops early
//! when a completed depth never hit the depth limit (the whole remaining
//! game was searched) or when `config.max_depth` is reached.
//!
//! ## Timeout fallback
//!
//! In order of preference:
//! 1. The move of the last completed depth
//! 2. With no completed depth, the best root move fully evaluated at depth 1
//! 3. The first legal move
//! 4. `Move::NONE` if there are no legal moves

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

/// Iterative-deepening alpha-beta search.
pub struct IterativeDeepeningAgent<E> {
    config: SearchConfig,
    evaluator: E,
    stats: SearchStats,
}

impl<E> IterativeDeepeningAgent<E> {
    /// Create a new iterative-deepening agent.
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

    /// Best move by alpha-beta to exactly `depth` plies.
    ///
    /// Returns `Move::NONE` if there are no legal moves, and
    /// `Err(SearchTimeout)` if the budget runs out first.
    pub fn alpha_beta<S>(&mut self, state: &S, depth: u32, time_left: &dyn TimeProbe) -> Result<Move, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.alpha_beta_pass(state, depth, time_left, &mut RootProgress::default())
    }

    fn alpha_beta_pass<S>(
        &mut self,
        state: &S,
        depth: u32,
        time_left: &dyn TimeProbe,
        progress: &mut RootProgress,
    ) -> Result<Move, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let budget = Budget::new(time_left, self.config.time_threshold_ms);
        let player = state.active_player();

        Searcher::new(&self.evaluator, budget, player, &mut self.stats).root_alpha_beta(state, depth, progress)
    }

    fn deepen<S>(&mut self, state: &S, time_left: &dyn TimeProbe) -> Result<Move, (SearchTimeout, Option<Move>)>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let mut best = None;
        let mut depth = 1;

        while self.config.max_depth.map_or(true, |cap| depth <= cap) {
            let horizon_before = self.stats.horizon_leaves;
            let mut progress = RootProgress::default();

            let mv = match self.alpha_beta_pass(state, depth, time_left, &mut progress) {
                Ok(mv) => mv,
                Err(timeout) => {
                    let partial = (best.is_none() && progress.evaluated > 0).then_some(progress.best_move);
                    return Err((timeout, best.or(partial)));
                }
            };

            best = Some(mv);
            self.stats.depth_completed = depth;
            debug!(
                "{} depth {} complete: {} scored {} ({} nodes)",
                Evaluator::<S>::name(&self.evaluator),
                depth,
                mv,
                progress.best_score,
                self.stats.nodes
            );

            if mv.is_none() || self.stats.horizon_leaves == horizon_before {
                break;
            }
            depth += 1;
        }

        Ok(best.unwrap_or(Move::NONE))
    }
}

impl<S, E> Agent<S> for IterativeDeepeningAgent<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn choose_move(&mut self, state: &S, time_left: &dyn TimeProbe) -> Move {
        let start = Instant::now();
        self.stats.reset();

        let best = match self.deepen(state, time_left) {
            Ok(mv) => mv,
            Err((timeout, fallback)) => {
                self.stats.timed_out = true;
                let mv = fallback
                    .or_else(|| state.legal_moves().first().copied())
                    .unwrap_or(Move::NONE);
                debug!(
                    "iterative deepening stopped after depth {}: {}; playing {}",
                    self.stats.depth_completed, timeout, mv
                );
                mv
            }
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        best
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
