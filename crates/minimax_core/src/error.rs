use thiserror::Error;

/// Failures reported by a search.
///
/// A position with no legal moves is not an error: it yields a result with
/// `best_move: None`.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Depth below one ply. Raised before any search work.
    #[error("search depth must be at least 1 ply, got {0}")]
    InvalidDepth(i32),

    /// The rules engine refused an operation.
    #[error("rules engine failure: {0}")]
    Rules(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SearchError {
    pub fn rules<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SearchError::Rules(Box::new(err))
    }
}
