//! Game state trait consumed by the search.
//!
//! Boards implement `GameState` to tell the engine:
//! - Whose turn it is and which moves are legal
//! - What position a move leads to
//! - Where each player stands and how big the board is

use serde::{Deserialize, Serialize};

use crate::core::{Move, MoveList, PlayerId};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The other player was left without a legal move.
    Winner(PlayerId),
}

/// Game state trait.
///
/// The search treats states as immutable snapshots: it never mutates one,
/// it only asks for successors via `forecast`.
///
/// ## Implementation Notes
///
/// - `legal_moves_for`: enumeration order is the tie-breaking order of the
///   root search; return an empty list when the player is immobilized
/// - `forecast`: must not mutate `self`; only called with legal moves
/// - `player_location`: `None` until the player has been placed
pub trait GameState: Sized {
    /// The player to move.
    fn active_player(&self) -> PlayerId;

    /// Legal moves for `player`.
    fn legal_moves_for(&self, player: PlayerId) -> MoveList;

    /// Successor state after the active player plays `mv`.
    fn forecast(&self, mv: Move) -> Self;

    /// Current square of `player`.
    fn player_location(&self, player: PlayerId) -> Option<Move>;

    /// Board `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    // === Convenience Methods ===

    /// Legal moves for the player to act.
    fn legal_moves(&self) -> MoveList {
        self.legal_moves_for(self.active_player())
    }

    /// The adversary of `player`.
    fn opponent(&self, player: PlayerId) -> PlayerId {
        player.other()
    }

    /// Check if the game is over.
    ///
    /// A player to act with no legal move loses.
    fn outcome(&self) -> Option<GameResult> {
        let active = self.active_player();
        if self.legal_moves_for(active).is_empty() {
            Some(GameResult::Winner(self.opponent(active)))
        } else {
            None
        }
    }
}
