//! # isolation-search
//!
//! Game-tree search for Isolation: two players hop around a board like chess
//! knights, every visited square is blocked, and the player left without a
//! legal move loses.
//!
//! ## Design Principles
//!
//! 1. **Board-Agnostic**: The search only sees the `GameState` trait. It
//!    never mutates a state; every node works on a forecast successor.
//!
//! 2. **Pluggable Evaluation**: Heuristics implement `Evaluator`; the
//!    search core has no formula of its own.
//!
//! 3. **Explicit Cancellation**: The time budget is re-read at every node and
//!    expiry travels back up as `Err(SearchTimeout)`, never as a panic.
//!
//! ## Modules
//!
//! - `core`: Moves, scores, players, time probes, RNG
//! - `rules`: `GameState` trait for board implementations
//! - `eval`: Evaluation functions
//! - `search`: Minimax core, fixed-depth and iterative-deepening agents
//! - `games`: Isolation board used to exercise the engine

pub mod core;
pub mod rules;
pub mod eval;
pub mod search;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Move, MoveList, Score,
    PlayerId, PlayerMap,
    TimeProbe, Deadline, Unlimited, CountdownProbe,
    GameRng,
};

pub use crate::rules::{GameResult, GameState};

pub use crate::eval::{Evaluator, Heuristic, MobilityRatio, WeightedMobility, CenterWeightedMobility};

pub use crate::search::{
    Agent, FixedDepthAgent, IterativeDeepeningAgent,
    SearchConfig, SearchMode, SearchStats,
    ConfigError, SearchTimeout,
};

pub use crate::games::isolation::{BoardError, IsolationBoard, IsolationBoardBuilder};
