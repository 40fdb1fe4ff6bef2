//! Evaluation functions scoring a position for one player.
//!
//! Evaluators are called at every leaf of the search tree, so they must be
//! pure: same state and player, same score, no side effects.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Score};
use crate::rules::GameState;

/// Static evaluation of a position from `player`'s point of view.
///
/// Higher is better for `player`. Must return a finite value.
pub trait Evaluator<S: GameState> {
    /// Score `state` for `player`.
    fn score(&self, state: &S, player: PlayerId) -> Score;

    /// Short name used in log output.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: Fn(&S, PlayerId) -> Score,
{
    fn score(&self, state: &S, player: PlayerId) -> Score {
        self(state, player)
    }
}

/// Legal move counts for `player` and their opponent.
fn mobility<S: GameState>(state: &S, player: PlayerId) -> (f64, f64) {
    let own = state.legal_moves_for(player).len() as f64;
    let opp = state.legal_moves_for(state.opponent(player)).len() as f64;
    (own, opp)
}

/// Share of the available moves that belong to `player`.
///
/// Formula: `own / (own + opp)`, and exactly `0.0` when neither player can
/// move. Always within `[0, 1]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MobilityRatio;

impl<S: GameState> Evaluator<S> for MobilityRatio {
    fn score(&self, state: &S, player: PlayerId) -> Score {
        let (own, opp) = mobility(state, player);
        let total = own + opp;
        if total == 0.0 {
            return 0.0;
        }
        own / total
    }

    fn name(&self) -> &str {
        "mobility_ratio"
    }
}

/// Own moves minus twice the opponent's moves.
///
/// Chases the opponent harder than it protects its own mobility.
#[derive(Clone, Copy, Debug, Default)]
pub struct WeightedMobility;

impl WeightedMobility {
    /// Weight applied to the opponent's move count.
    pub const OPPONENT_WEIGHT: f64 = 2.0;
}

impl<S: GameState> Evaluator<S> for WeightedMobility {
    fn score(&self, state: &S, player: PlayerId) -> Score {
        let (own, opp) = mobility(state, player);
        own - Self::OPPONENT_WEIGHT * opp
    }

    fn name(&self) -> &str {
        "weighted_mobility"
    }
}

/// `WeightedMobility` plus the squared distance of the player from the
/// board center.
///
/// Formula: `own - 2 * opp + (h/2 - row)^2 + (w/2 - col)^2`. A player
/// that has not been placed yet adds nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct CenterWeightedMobility;

impl<S: GameState> Evaluator<S> for CenterWeightedMobility {
    fn score(&self, state: &S, player: PlayerId) -> Score {
        let weighted = WeightedMobility.score(state, player);

        let Some(location) = state.player_location(player) else {
            return weighted;
        };

        let (width, height) = state.dimensions();
        let center_row = f64::from(height) / 2.0;
        let center_col = f64::from(width) / 2.0;
        let d_row = center_row - f64::from(location.row);
        let d_col = center_col - f64::from(location.col);

        weighted + d_row * d_row + d_col * d_col
    }

    fn name(&self) -> &str {
        "center_weighted_mobility"
    }
}

/// Built-in evaluators, selectable from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    #[default]
    MobilityRatio,
    WeightedMobility,
    CenterWeightedMobility,
}

impl<S: GameState> Evaluator<S> for Heuristic {
    fn score(&self, state: &S, player: PlayerId) -> Score {
        match self {
            Heuristic::MobilityRatio => MobilityRatio.score(state, player),
            Heuristic::WeightedMobility => WeightedMobility.score(state, player),
            Heuristic::CenterWeightedMobility => CenterWeightedMobility.score(state, player),
        }
    }

    fn name(&self) -> &str {
        match self {
            Heuristic::MobilityRatio => "mobility_ratio",
            Heuristic::WeightedMobility => "weighted_mobility",
            Heuristic::CenterWeightedMobility => "center_weighted_mobility",
        }
    }
}
