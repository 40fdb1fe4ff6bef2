//! Isolation board for exercising the search.
//!
//! - Two players on a rectangular board (7x7 by default)
//! - The first move of each player may land on any blank square
//! - Afterwards players jump like chess knights
//! - Every visited square is blocked for the rest of the game
//! - The player to move with no legal jump loses

mod board;

pub use board::{BoardError, IsolationBoard, IsolationBoardBuilder};
