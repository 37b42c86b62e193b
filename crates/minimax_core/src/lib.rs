//! Minimax search core.
//!
//! A depth-bounded minimax search with alpha-beta pruning, driven by a static
//! material + positional evaluator. Board rules stay with an external rules
//! engine, reached only through the [`GameState`] trait.

pub mod error;
pub mod eval;
pub mod game;
pub mod search;

pub use error::SearchError;
pub use eval::{EvaluationTable, Evaluator, MaterialEvaluator, STANDARD_TABLE, evaluate};
pub use game::{Cell, GameState, Occupant, PieceKind, Side};
pub use search::{SearchResult, Searcher, find_best_move};
