//! Listener hooks for search monitoring.
//!
//! Listeners are called synchronously on the run-loop thread, in
//! registration order, and never while the status lock is held. A listener
//! may therefore query the search handle freely.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use nsearch_core::SimpleEvaluation;
//! use nsearch_engine::event::{SearchListener, SearchListeners};
//!
//! #[derive(Debug)]
//! struct PrintBest;
//!
//! impl SearchListener<Vec<u8>, SimpleEvaluation> for PrintBest {
//!     fn new_best_solution(&self, _solution: &Vec<u8>, evaluation: &SimpleEvaluation) {
//!         println!("new best: {evaluation}");
//!     }
//! }
//!
//! let mut listeners = SearchListeners::<Vec<u8>, SimpleEvaluation>::new();
//! listeners.add(Arc::new(PrintBest));
//! assert_eq!(listeners.len(), 1);
//! ```

use std::fmt::{self, Debug};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use crate::status::SearchStatus;

/// Receives notifications about a running search.
///
/// All methods default to doing nothing.
pub trait SearchListener<S, E>: Send + Sync + Debug {
    /// Called when a run has been initialized and starts its first step.
    fn search_started(&self, _name: &str) {}

    /// Called when a run has ended.
    fn search_stopped(&self, _name: &str, _steps: u64) {}

    /// Called when a new best solution was found.
    fn new_best_solution(&self, _solution: &S, _evaluation: &E) {}

    /// Called whenever the current solution changed, before the engine
    /// clears its evaluated move cache.
    fn new_current_solution(&self, _solution: &S, _evaluation: &E) {}

    /// Called after every completed step.
    fn step_completed(&self, _step: u64) {}

    /// Called after the run loop changed the search status.
    fn status_changed(&self, _status: SearchStatus) {}
}

/// Ordered list of listeners with broadcast helpers.
pub struct SearchListeners<S, E> {
    listeners: Vec<Arc<dyn SearchListener<S, E>>>,
}

impl<S, E> SearchListeners<S, E> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn add(&mut self, listener: Arc<dyn SearchListener<S, E>>) {
        self.listeners.push(listener);
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn fire_search_started(&self, name: &str) {
        for listener in &self.listeners {
            listener.search_started(name);
        }
    }

    pub fn fire_search_stopped(&self, name: &str, steps: u64) {
        for listener in &self.listeners {
            listener.search_stopped(name, steps);
        }
    }

    pub fn fire_new_best_solution(&self, solution: &S, evaluation: &E) {
        for listener in &self.listeners {
            listener.new_best_solution(solution, evaluation);
        }
    }

    pub fn fire_new_current_solution(&self, solution: &S, evaluation: &E) {
        for listener in &self.listeners {
            listener.new_current_solution(solution, evaluation);
        }
    }

    pub fn fire_step_completed(&self, step: u64) {
        for listener in &self.listeners {
            listener.step_completed(step);
        }
    }

    pub fn fire_status_changed(&self, status: SearchStatus) {
        for listener in &self.listeners {
            listener.status_changed(status);
        }
    }
}

impl<S, E> Default for SearchListeners<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, E> Debug for SearchListeners<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchListeners")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Logs search events through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSearchListener;

impl LoggingSearchListener {
    pub fn new() -> Self {
        Self
    }
}

impl<S, E: Debug> SearchListener<S, E> for LoggingSearchListener {
    fn search_started(&self, name: &str) {
        info!(event = "listener_search_started", search = name);
    }

    fn search_stopped(&self, name: &str, steps: u64) {
        info!(event = "listener_search_stopped", search = name, steps);
    }

    fn new_best_solution(&self, _solution: &S, evaluation: &E) {
        debug!(event = "new_best", evaluation = ?evaluation);
    }

    fn status_changed(&self, status: SearchStatus) {
        debug!(event = "status_changed", status = %status);
    }
}

/// Counts events. Mainly useful in tests.
#[derive(Debug, Default)]
pub struct CountingSearchListener {
    started: AtomicUsize,
    stopped: AtomicUsize,
    new_best: AtomicUsize,
    new_current: AtomicUsize,
    steps: AtomicUsize,
    status_changes: AtomicUsize,
}

impl CountingSearchListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started_count(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn stopped_count(&self) -> usize {
        self.stopped.load(Ordering::SeqCst)
    }

    pub fn new_best_count(&self) -> usize {
        self.new_best.load(Ordering::SeqCst)
    }

    pub fn new_current_count(&self) -> usize {
        self.new_current.load(Ordering::SeqCst)
    }

    pub fn step_count(&self) -> usize {
        self.steps.load(Ordering::SeqCst)
    }

    pub fn status_change_count(&self) -> usize {
        self.status_changes.load(Ordering::SeqCst)
    }
}

impl<S, E> SearchListener<S, E> for CountingSearchListener {
    fn search_started(&self, _name: &str) {
        self.started.fetch_add(1, Ordering::SeqCst);
    }

    fn search_stopped(&self, _name: &str, _steps: u64) {
        self.stopped.fetch_add(1, Ordering::SeqCst);
    }

    fn new_best_solution(&self, _solution: &S, _evaluation: &E) {
        self.new_best.fetch_add(1, Ordering::SeqCst);
    }

    fn new_current_solution(&self, _solution: &S, _evaluation: &E) {
        self.new_current.fetch_add(1, Ordering::SeqCst);
    }

    fn step_completed(&self, _step: u64) {
        self.steps.fetch_add(1, Ordering::SeqCst);
    }

    fn status_changed(&self, _status: SearchStatus) {
        self.status_changes.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
