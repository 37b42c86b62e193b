//! Fixed-depth minimax with alpha-beta pruning.

use tracing::{debug, trace, warn};

use crate::error::SearchError;
use crate::eval::{Evaluator, MaterialEvaluator};
use crate::game::{GameState, Side};

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    /// The chosen move; `None` only when the root has no legal moves.
    pub best_move: Option<M>,
    /// Minimax value of the root from the positive side's perspective.
    pub best_score: f64,
    /// Depth searched, in plies.
    pub depth: u32,
    /// Positions visited, root included.
    pub nodes: u64,
}

/// Depth-first minimax searcher.
///
/// Holds no state between calls besides its evaluator; every search is a
/// fresh tree walk.
#[derive(Debug, Clone)]
pub struct Searcher<E = MaterialEvaluator> {
    evaluator: E,
    prune: bool,
    nodes: u64,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    /// Alpha-beta searcher with the standard material evaluator.
    pub fn new() -> Self {
        Self::with_evaluator(MaterialEvaluator::default())
    }
}

impl<E> Searcher<E> {
    /// Alpha-beta searcher with a custom evaluator.
    pub fn with_evaluator(evaluator: E) -> Self {
        Self {
            evaluator,
            prune: true,
            nodes: 0,
        }
    }

    /// Searcher that visits the full tree without pruning. Only useful as a
    /// reference: it returns the same result as the pruned search, slower.
    pub fn exhaustive(evaluator: E) -> Self {
        Self {
            evaluator,
            prune: false,
            nodes: 0,
        }
    }

    /// Searches `position` to `depth` plies and returns the best move for the
    /// side to move.
    ///
    /// The position is mutated during the walk and restored before return.
    /// The root maximizes when the positive side is to move and minimizes
    /// otherwise; ties keep the first move in enumeration order.
    pub fn find_best_move<G>(
        &mut self,
        position: &mut G,
        depth: i32,
    ) -> Result<SearchResult<G::Move>, SearchError>
    where
        G: GameState,
        E: Evaluator<G>,
    {
        let depth = validate_depth(depth)?;
        self.nodes = 1;

        let moves = position.legal_moves();
        if moves.is_empty() {
            let best_score = self.evaluator.evaluate(position);
            debug!(depth, best_score, "no legal moves at root");
            return Ok(SearchResult {
                best_move: None,
                best_score,
                depth,
                nodes: self.nodes,
            });
        }

        let maximizing = position.side_to_move() == Side::POSITIVE;
        let mut alpha = f64::NEG_INFINITY;
        let mut beta = f64::INFINITY;
        let mut best_move = None;
        let mut best_score = if maximizing { alpha } else { beta };

        for mv in moves {
            let score = self.child_score(position, &mv, depth - 1, alpha, beta, !maximizing)?;
            trace!(?mv, score, "root move");

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves || best_move.is_none() {
                best_score = score;
                best_move = Some(mv);
            }

            if self.prune {
                if maximizing {
                    alpha = alpha.max(best_score);
                } else {
                    beta = beta.min(best_score);
                }
            }
        }

        debug!(
            depth,
            nodes = self.nodes,
            best_score,
            best_move = ?best_move,
            "search complete"
        );

        Ok(SearchResult {
            best_move,
            best_score,
            depth,
            nodes: self.nodes,
        })
    }

    /// Applies `mv`, scores the subtree below it and undoes the move.
    fn child_score<G>(
        &mut self,
        position: &mut G,
        mv: &G::Move,
        depth: u32,
        alpha: f64,
        beta: f64,
        maximizing: bool,
    ) -> Result<f64, SearchError>
    where
        G: GameState,
        E: Evaluator<G>,
    {
        position.make_move(mv).map_err(SearchError::rules)?;
        let score = self.minimax(position, depth, alpha, beta, maximizing);
        match (score, position.unmake_move()) {
            (Ok(score), Ok(())) => Ok(score),
            (Ok(_), Err(undo)) => Err(SearchError::rules(undo)),
            (Err(err), Ok(())) => Err(err),
            // The failure from below is the one to report.
            (Err(err), Err(undo)) => {
                warn!(error = %undo, "undo failed while unwinding a failed search");
                Err(err)
            }
        }
    }

    fn minimax<G>(
        &mut self,
        position: &mut G,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> Result<f64, SearchError>
    where
        G: GameState,
        E: Evaluator<G>,
    {
        self.nodes += 1;

        if depth == 0 || position.is_terminal() {
            return Ok(self.evaluator.evaluate(position));
        }

        let moves = position.legal_moves();
        if moves.is_empty() {
            return Ok(self.evaluator.evaluate(position));
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for mv in &moves {
                let score = self.child_score(position, mv, depth - 1, alpha, beta, false)?;
                best = best.max(score);
                alpha = alpha.max(best);
                if self.prune && beta <= alpha {
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best = f64::INFINITY;
            for mv in &moves {
                let score = self.child_score(position, mv, depth - 1, alpha, beta, true)?;
                best = best.min(score);
                beta = beta.min(best);
                if self.prune && beta <= alpha {
                    break;
                }
            }
            Ok(best)
        }
    }
}

fn validate_depth(depth: i32) -> Result<u32, SearchError> {
    match u32::try_from(depth) {
        Ok(d) if d >= 1 => Ok(d),
        _ => Err(SearchError::InvalidDepth(depth)),
    }
}

/// Alpha-beta search with the standard evaluator.
pub fn find_best_move<G: GameState>(
    position: &mut G,
    depth: i32,
) -> Result<SearchResult<G::Move>, SearchError> {
    Searcher::new().find_best_move(position, depth)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
