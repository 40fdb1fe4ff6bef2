//! Board coordinates and scores.
//!
//! A `Move` is the square a player jumps to, given as `(row, col)`.
//! The sentinel `Move::NONE` (`(-1, -1)`) means "no legal move available"
//! and is an ordinary return value of the search, never an error.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Heuristic value of a position.
///
/// `f64::INFINITY` and `f64::NEG_INFINITY` are only used as alpha-beta
/// bounds and fold identities; evaluators always return finite values.
pub type Score = f64;

/// Move list with inline room for every knight jump.
///
/// Opening placements (anywhere on a blank board) spill to the heap.
pub type MoveList = SmallVec<[Move; 8]>;

/// A square on the board, `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    /// Sentinel for "no legal move".
    pub const NONE: Move = Move { row: -1, col: -1 };

    /// Create a move to `(row, col)`.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check if this is the `NONE` sentinel.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.row == Self::NONE.row && self.col == Self::NONE.col
    }

    /// Offset this square by `(d_row, d_col)`.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }
}

impl Default for Move {
    fn default() -> Self {
        Self::NONE
    }
}

impl From<(i32, i32)> for Move {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Move> for (i32, i32) {
    fn from(mv: Move) -> Self {
        (mv.row, mv.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
