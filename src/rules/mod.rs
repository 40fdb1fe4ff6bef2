//! Game state trait for board implementations.
//!
//! Boards implement `GameState` to define:
//! - Legal moves for each player
//! - How a move produces the successor position
//! - Player locations and board dimensions (for positional heuristics)
//!
//! The search calls into `GameState` but never interprets
//! board-specific concepts directly.

pub mod engine;

pub use engine::{GameResult, GameState};
