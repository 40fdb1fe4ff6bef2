//! Adversarial game-tree search.
//!
//! ## Overview
//!
//! Two agents share one min/max recursion (`minimax::Searcher`):
//!
//! - **`FixedDepthAgent`**: plain minimax to a fixed number of plies
//! - **`IterativeDeepeningAgent`**: alpha-beta at increasing depth until the
//!   time budget runs out
//!
//! Both read the remaining time through a `TimeProbe` at every node. When it
//! drops to the configured threshold the search unwinds with
//! `SearchTimeout` and the agent returns its fallback move.
//!
//! ## Usage
//!
//! ```rust
//! use isolation_search::core::Deadline;
//! use isolation_search::eval::WeightedMobility;
//! use isolation_search::games::isolation::IsolationBoard;
//! use isolation_search::rules::GameState;
//! use isolation_search::search::{Agent, IterativeDeepeningAgent, SearchConfig};
//!
//! let board = IsolationBoard::new(7, 7).unwrap();
//! let mut agent = IterativeDeepeningAgent::new(SearchConfig::default(), WeightedMobility);
//!
//! let mv = agent.choose_move(&board, &Deadline::after_ms(150));
//! assert!(board.legal_moves().contains(&mv));
//! ```

pub mod agent;
pub mod budget;
pub mod config;
pub mod error;
pub mod fixed;
pub mod iterative;
pub mod minimax;
pub mod stats;

// Re-export main types
pub use agent::{from_config, Agent};
pub use budget::Budget;
pub use config::{SearchConfig, SearchMode};
pub use error::{ConfigError, SearchTimeout};
pub use fixed::FixedDepthAgent;
pub use iterative::IterativeDeepeningAgent;
pub use minimax::{Ply, RootProgress, Searcher};
pub use stats::SearchStats;
