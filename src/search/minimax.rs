//! Shared min/max recursion for both search strategies.
//!
//! Values are always from the point of view of the searching player: it
//! maximizes, its opponent minimizes, whoever is to move at a node.
//!
//! Every node starts with the same entry check:
//! 1. Budget check, `SearchTimeout` on expiry (propagated with `?`)
//! 2. Zero plies left: evaluate (horizon leaf)
//! 3. No legal moves: evaluate (terminal leaf)
//!
//! Depth counts plies: a root search at depth `d` hands its children
//! `d - 1` remaining plies, and a node with none left is evaluated.

use log::trace;

use crate::core::{Move, MoveList, PlayerId, Score};
use crate::eval::Evaluator;
use crate::rules::GameState;

use super::budget::Budget;
use super::error::SearchTimeout;
use super::stats::SearchStats;

/// Which side a node folds for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ply {
    /// The searching player's node: take the maximum.
    Max,
    /// The opponent's node: take the minimum.
    Min,
}

impl Ply {
    /// The side one ply deeper.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Ply::Max => Ply::Min,
            Ply::Min => Ply::Max,
        }
    }

    /// Starting value of the fold.
    #[must_use]
    pub fn identity(self) -> Score {
        match self {
            Ply::Max => f64::NEG_INFINITY,
            Ply::Min => f64::INFINITY,
        }
    }

    /// Fold one child value into the running value.
    #[must_use]
    pub fn fold(self, running: Score, value: Score) -> Score {
        match self {
            Ply::Max => running.max(value),
            Ply::Min => running.min(value),
        }
    }
}

/// Best root move seen so far in one root pass.
///
/// Survives a timeout so callers can fall back on moves that were fully
/// evaluated before the budget ran out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootProgress {
    /// Best move: `Move::NONE` before the pass starts, then the first legal
    /// move until a root move scores above `-inf`.
    pub best_move: Move,
    /// Score of `best_move`.
    pub best_score: Score,
    /// Root moves fully evaluated.
    pub evaluated: usize,
}

impl Default for RootProgress {
    fn default() -> Self {
        Self {
            best_move: Move::NONE,
            best_score: f64::NEG_INFINITY,
            evaluated: 0,
        }
    }
}

impl RootProgress {
    /// Hold `mv` as the answer if nothing has been chosen yet.
    ///
    /// A root whose every score is `-inf` or NaN never records a best move,
    /// so the pass still answers with a legal one.
    pub fn start_with(&mut self, mv: Move) {
        if self.best_move.is_none() {
            self.best_move = mv;
        }
    }

    /// Record an evaluated root move. Only a strictly better score replaces
    /// the current best, so ties go to the earlier move.
    ///
    /// Returns whether the best move changed.
    pub fn record(&mut self, mv: Move, score: Score) -> bool {
        self.evaluated += 1;
        if score > self.best_score {
            self.best_score = score;
            self.best_move = mv;
            true
        } else {
            false
        }
    }
}

/// Outcome of the entry check at a node.
enum Node {
    Leaf(Score),
    Expand(MoveList),
}

/// One search pass: evaluator, budget and statistics for a single root.
pub struct Searcher<'a, E> {
    evaluator: &'a E,
    budget: Budget<'a>,
    player: PlayerId,
    stats: &'a mut SearchStats,
}

impl<'a, E> Searcher<'a, E> {
    /// Search on behalf of `player`.
    pub fn new(evaluator: &'a E, budget: Budget<'a>, player: PlayerId, stats: &'a mut SearchStats) -> Self {
        Self {
            evaluator,
            budget,
            player,
            stats,
        }
    }

    fn evaluate<S>(&mut self, state: &S) -> Score
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.evaluations += 1;
        self.evaluator.score(state, self.player)
    }

    fn enter<S>(&mut self, state: &S, depth: u32) -> Result<Node, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.budget.check()?;
        self.stats.nodes += 1;

        if depth == 0 {
            self.stats.horizon_leaves += 1;
            return Ok(Node::Leaf(self.evaluate(state)));
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok(Node::Leaf(self.evaluate(state)));
        }

        Ok(Node::Expand(moves))
    }

    /// Unpruned minimax value of `state` with `depth` plies left.
    pub fn min_max<S>(&mut self, state: &S, depth: u32, ply: Ply) -> Result<Score, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let moves = match self.enter(state, depth)? {
            Node::Leaf(score) => return Ok(score),
            Node::Expand(moves) => moves,
        };

        let mut value = ply.identity();
        for mv in moves {
            let child = state.forecast(mv);
            value = ply.fold(value, self.min_max(&child, depth - 1, ply.flip())?);
        }
        Ok(value)
    }

    /// Minimax value of `state` with alpha-beta pruning.
    ///
    /// Returns as soon as the running value reaches `beta` at a `Max` node
    /// or falls to `alpha` at a `Min` node; the bounds handed to later
    /// siblings only ever narrow.
    pub fn alpha_beta<S>(
        &mut self,
        state: &S,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        ply: Ply,
    ) -> Result<Score, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let moves = match self.enter(state, depth)? {
            Node::Leaf(score) => return Ok(score),
            Node::Expand(moves) => moves,
        };

        let mut value = ply.identity();
        for mv in moves {
            let child = state.forecast(mv);
            value = ply.fold(value, self.alpha_beta(&child, depth - 1, alpha, beta, ply.flip())?);

            match ply {
                Ply::Max => {
                    if value >= beta {
                        self.stats.cutoffs += 1;
                        return Ok(value);
                    }
                    alpha = alpha.max(value);
                }
                Ply::Min => {
                    if value <= alpha {
                        self.stats.cutoffs += 1;
                        return Ok(value);
                    }
                    beta = beta.min(value);
                }
            }
        }
        Ok(value)
    }

    /// Best root move by plain minimax to `depth` plies.
    ///
    /// Returns `Move::NONE` when there are no legal moves.
    pub fn root_min_max<S>(
        &mut self,
        state: &S,
        depth: u32,
        progress: &mut RootProgress,
    ) -> Result<Move, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.budget.check()?;

        let moves = state.legal_moves();
        if let Some(&first) = moves.first() {
            progress.start_with(first);
        }

        for mv in moves {
            let score = self.min_max(&state.forecast(mv), depth.saturating_sub(1), Ply::Min)?;
            trace!("depth {} root move {} scored {}", depth, mv, score);
            progress.record(mv, score);
        }

        Ok(progress.best_move)
    }

    /// Best root move by alpha-beta to `depth` plies, starting from the
    /// full `(-inf, +inf)` window.
    ///
    /// Returns `Move::NONE` when there are no legal moves.
    pub fn root_alpha_beta<S>(
        &mut self,
        state: &S,
        depth: u32,
        progress: &mut RootProgress,
    ) -> Result<Move, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.budget.check()?;

        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;

        let moves = state.legal_moves();
        if let Some(&first) = moves.first() {
            progress.start_with(first);
        }

        for mv in moves {
            let score = self.alpha_beta(&state.forecast(mv), depth.saturating_sub(1), alpha, beta, Ply::Min)?;
            trace!("depth {} root move {} scored {}", depth, mv, score);

            if progress.record(mv, score) && progress.best_score >= beta {
                self.stats.cutoffs += 1;
                return Ok(progress.best_move);
            }
            alpha = alpha.max(score);
        }

        Ok(progress.best_move)
    }
}
