//! Static evaluation for the search.
//!
//! The search never hardcodes a formula: it is generic over `Evaluator`.
//! Three mobility-based heuristics ship with the crate; any
//! `Fn(&S, PlayerId) -> Score` closure works as well.
//!
//! ```
//! use isolation_search::core::PlayerId;
//! use isolation_search::eval::{Evaluator, MobilityRatio};
//! use isolation_search::games::isolation::IsolationBoard;
//!
//! let board = IsolationBoard::new(7, 7).unwrap();
//! assert_eq!(MobilityRatio.score(&board, PlayerId::FIRST), 0.5);
//! ```

pub mod heuristics;

pub use heuristics::{CenterWeightedMobility, Evaluator, Heuristic, MobilityRatio, WeightedMobility};
