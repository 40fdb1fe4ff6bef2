//! The agent contract and config-driven construction.

use crate::core::{Move, TimeProbe};
use crate::rules::GameState;

use super::config::{SearchConfig, SearchMode};
use super::error::ConfigError;
use super::fixed::FixedDepthAgent;
use super::iterative::IterativeDeepeningAgent;
use super::stats::SearchStats;

/// A game-playing agent.
///
/// `choose_move` is the only operational entry point. It always returns
/// normally: a timeout is recovered inside the agent with a fallback move.
pub trait Agent<S: GameState> {
    /// Pick a move for the player to act in `state`.
    ///
    /// `time_left` reports the milliseconds remaining in this turn and is
    /// re-read at every node. Returns `Move::NONE` when there are no legal
    /// moves.
    fn choose_move(&mut self, state: &S, time_left: &dyn TimeProbe) -> Move;

    /// Statistics from the most recent `choose_move`.
    fn stats(&self) -> &SearchStats;
}

/// Build the agent named by `config.mode`, scoring with `config.heuristic`.
///
/// ```
/// use isolation_search::core::Unlimited;
/// use isolation_search::games::isolation::IsolationBoard;
/// use isolation_search::rules::GameState;
/// use isolation_search::search::{agent, SearchConfig};
///
/// let board = IsolationBoard::new(4, 4).unwrap();
/// let mut agent = agent::from_config::<IsolationBoard>(SearchConfig::default().with_depth(1)).unwrap();
///
/// let mv = agent.choose_move(&board, &Unlimited);
/// assert!(board.legal_moves().contains(&mv));
/// ```
pub fn from_config<S: GameState>(config: SearchConfig) -> Result<Box<dyn Agent<S>>, ConfigError> {
    config.validate()?;

    let heuristic = config.heuristic;
    let agent: Box<dyn Agent<S>> = match config.mode {
        SearchMode::FixedDepth => Box::new(FixedDepthAgent::new(config, heuristic)),
        SearchMode::IterativeDeepening => Box::new(IterativeDeepeningAgent::new(config, heuristic)),
    };
    Ok(agent)
}
