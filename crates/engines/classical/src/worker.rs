//! Off-thread search for hosts that must stay responsive.
//!
//! A search blocks for as long as the tree takes. The worker runs it on its
//! own thread over an owned copy of the position and hands the result back
//! over a channel. There is no cancellation: a host that no longer wants the
//! answer drops the handle and the late result is discarded.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use minimax_core::{Evaluator, GameState, MaterialEvaluator, SearchError, SearchResult, Searcher};
use tracing::{info, warn};

pub type SearchOutcome<M> = Result<SearchResult<M>, SearchError>;

/// Handle to a search running on a worker thread.
pub struct BackgroundSearch<M> {
    receiver: Receiver<SearchOutcome<M>>,
    thinking: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl<M: Send + 'static> BackgroundSearch<M> {
    /// Starts a search with the standard evaluator.
    pub fn spawn<G>(position: G, depth: i32) -> Self
    where
        G: GameState<Move = M> + Send + 'static,
    {
        Self::spawn_with(position, depth, MaterialEvaluator::default())
    }

    pub fn spawn_with<G, E>(mut position: G, depth: i32, evaluator: E) -> Self
    where
        G: GameState<Move = M> + Send + 'static,
        E: Evaluator<G> + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let thinking = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&thinking);

        let handle = thread::spawn(move || {
            let started = Instant::now();
            let outcome = Searcher::with_evaluator(evaluator).find_best_move(&mut position, depth);
            let elapsed_ms = started.elapsed().as_millis() as u64;
            match &outcome {
                Ok(result) => info!(depth, elapsed_ms, nodes = result.nodes, "background search finished"),
                Err(err) => warn!(depth, elapsed_ms, error = %err, "background search failed"),
            }
            // A dropped handle means nobody wants the result.
            let _ = sender.send(outcome);
            flag.store(false, Ordering::Release);
        });

        Self {
            receiver,
            thinking,
            handle: Some(handle),
        }
    }
}

impl<M> BackgroundSearch<M> {
    /// True until the worker has posted its result.
    pub fn is_thinking(&self) -> bool {
        self.thinking.load(Ordering::Acquire)
    }

    /// The result if it is ready, without blocking.
    ///
    /// Returns `None` while the search runs, and after the result has been
    /// taken once.
    pub fn try_result(&self) -> Option<SearchOutcome<M>> {
        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Blocks until the search finishes. `None` if the worker died without
    /// posting a result.
    pub fn wait(mut self) -> Option<SearchOutcome<M>> {
        let outcome = self.receiver.recv().ok();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        outcome
    }
}
