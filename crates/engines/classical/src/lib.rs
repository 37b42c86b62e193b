//! Classical Chess Engine
//!
//! Fixed-depth alpha-beta search with material + piece-square evaluation,
//! playing chess through the cozy-chess rules engine.

pub mod config;
pub mod position;
pub mod uci;
pub mod worker;

pub use config::{ConfigError, Difficulty, EngineConfig};
pub use position::{ChessError, ChessPosition};
pub use uci::{move_to_uci, parse_uci_move, set_position_from_uci};
pub use worker::{BackgroundSearch, SearchOutcome};

use cozy_chess::Move;
use minimax_core::{SearchError, SearchResult, Searcher};

/// Chess engine built on the minimax core.
///
/// Searches synchronously with [`ClassicalEngine::search`], or on a worker
/// thread with [`ClassicalEngine::request_move`] /
/// [`ClassicalEngine::poll_move`]. At most one background search, finished
/// or not, is held at a time.
#[derive(Default)]
pub struct ClassicalEngine {
    config: EngineConfig,
    searcher: Searcher,
    pending: Option<BackgroundSearch<Move>>,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn depth(&self) -> i32 {
        self.config.search_depth()
    }

    pub fn set_depth(&mut self, depth: i32) {
        self.config.depth = Some(depth);
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
        self.config.depth = None;
    }

    /// Searches a copy of `pos` at the configured depth.
    pub fn search(&mut self, pos: &ChessPosition) -> Result<SearchResult<Move>, SearchError> {
        let mut tmp = pos.clone();
        self.searcher.find_best_move(&mut tmp, self.depth())
    }

    /// Starts a background search. Returns `false`, without starting
    /// anything, while another search is in flight or its result has not
    /// been collected with [`ClassicalEngine::poll_move`] or
    /// [`ClassicalEngine::wait_move`]. [`ClassicalEngine::new_game`]
    /// discards it.
    pub fn request_move(&mut self, pos: &ChessPosition) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(BackgroundSearch::spawn(pos.clone(), self.depth()));
        true
    }

    /// True while a background search is running.
    pub fn is_thinking(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| p.is_thinking())
    }

    /// Takes the background result once it is ready.
    pub fn poll_move(&mut self) -> Option<SearchOutcome<Move>> {
        let outcome = self.pending.as_ref()?.try_result()?;
        self.pending = None;
        Some(outcome)
    }

    /// Blocks on the background search, if any.
    pub fn wait_move(&mut self) -> Option<SearchOutcome<Move>> {
        self.pending.take()?.wait()
    }

    /// Drops any in-flight search; its result will be discarded.
    pub fn new_game(&mut self) {
        self.pending = None;
    }

    pub fn name(&self) -> &str {
        "Classical v2.0"
    }

    pub fn author(&self) -> &str {
        "ML-chess"
    }
}
