//! Search status and the status lock shared with observer threads.
//!
//! The run-loop thread is the only writer of the move counters. Counters are
//! stored next to the status inside one mutex so that an observer always
//! sees a status and counters that belong together.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use nsearch_core::{Result, SearchError};

/// Lifecycle phase of a neighbourhood search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    /// Not running. Configuration may be changed.
    Idle,
    /// A run has been started; counters are being reset and the initial
    /// solution is being prepared.
    Initializing,
    /// Steps are being executed.
    Running,
    /// A stop was requested or a termination condition fired.
    Terminating,
    /// The search was disposed and cannot be started again.
    Disposed,
}

impl SearchStatus {
    /// Returns true while a run is in progress.
    pub fn is_active(self) -> bool {
        matches!(
            self,
            SearchStatus::Initializing | SearchStatus::Running | SearchStatus::Terminating
        )
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchStatus::Idle => "idle",
            SearchStatus::Initializing => "initializing",
            SearchStatus::Running => "running",
            SearchStatus::Terminating => "terminating",
            SearchStatus::Disposed => "disposed",
        };
        f.write_str(name)
    }
}

/// Number of accepted or rejected moves, as observed from outside the run
/// loop.
///
/// # Example
///
/// ```
/// use nsearch_engine::MoveCount;
///
/// assert_eq!(MoveCount::NotStarted.count(), None);
/// assert_eq!(MoveCount::Counted(3).count(), Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveCount {
    /// No run has been started yet.
    NotStarted,
    /// A run is initializing; counters are not yet meaningful.
    Initializing,
    /// Live value during a run, or frozen value of the last run.
    Counted(u64),
}

impl MoveCount {
    /// Returns the count, if available.
    pub fn count(self) -> Option<u64> {
        match self {
            MoveCount::Counted(n) => Some(n),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MoveCounters {
    pub(crate) accepted: u64,
    pub(crate) rejected: u64,
}

#[derive(Debug)]
pub(crate) struct RunState {
    pub(crate) status: SearchStatus,
    /// `None` until the first run starts.
    pub(crate) counters: Option<MoveCounters>,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            status: SearchStatus::Idle,
            counters: None,
        }
    }
}

impl RunState {
    /// Fails unless the search is idle.
    pub(crate) fn assert_idle(&self, message: &str) -> Result<()> {
        match self.status {
            SearchStatus::Idle => Ok(()),
            SearchStatus::Disposed => Err(SearchError::Disposed),
            status => Err(SearchError::InvalidState(format!(
                "{message} Search is {status} (expected: idle)."
            ))),
        }
    }

    fn move_count(&self, select: impl Fn(&MoveCounters) -> u64) -> MoveCount {
        if self.status == SearchStatus::Initializing {
            return MoveCount::Initializing;
        }
        match &self.counters {
            Some(counters) => MoveCount::Counted(select(counters)),
            None => MoveCount::NotStarted,
        }
    }
}

/// Cloneable handle on the status lock of a search.
///
/// Observer threads use it to read the status and the move counters, and to
/// request the search to stop.
///
/// # Example
///
/// ```
/// use nsearch_engine::{MoveCount, SearchHandle, SearchStatus};
///
/// let handle = SearchHandle::new();
/// assert_eq!(handle.status(), SearchStatus::Idle);
/// assert_eq!(handle.num_accepted_moves(), MoveCount::NotStarted);
///
/// // nothing to stop while idle
/// assert!(!handle.stop());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchHandle {
    state: Arc<Mutex<RunState>>,
}

impl SearchHandle {
    /// Creates a handle for an idle search that has never run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the run state.
    ///
    /// A panic inside a step cannot leave the state half-written, so a
    /// poisoned lock is recovered instead of propagated.
    pub(crate) fn lock(&self) -> MutexGuard<'_, RunState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the current status.
    pub fn status(&self) -> SearchStatus {
        self.lock().status
    }

    /// Returns the number of accepted moves of the current or last run.
    pub fn num_accepted_moves(&self) -> MoveCount {
        self.lock().move_count(|c| c.accepted)
    }

    /// Returns the number of rejected moves of the current or last run.
    pub fn num_rejected_moves(&self) -> MoveCount {
        self.lock().move_count(|c| c.rejected)
    }

    /// Requests the running search to stop after the current step.
    ///
    /// Returns true if the request moved the search to
    /// [`SearchStatus::Terminating`].
    pub fn stop(&self) -> bool {
        let mut state = self.lock();
        match state.status {
            SearchStatus::Initializing | SearchStatus::Running => {
                state.status = SearchStatus::Terminating;
                true
            }
            _ => false,
        }
    }

    /// Returns true if both handles observe the same search.
    pub fn same_search(&self, other: &SearchHandle) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    /// Moves `from` to `to` atomically. Returns false if the status was not
    /// `from`.
    pub(crate) fn transition(&self, from: SearchStatus, to: SearchStatus) -> bool {
        let mut state = self.lock();
        if state.status == from {
            state.status = to;
            true
        } else {
            false
        }
    }

    /// Sets the status unconditionally, returning the previous one.
    pub(crate) fn set_status(&self, to: SearchStatus) -> SearchStatus {
        std::mem::replace(&mut self.lock().status, to)
    }

    pub(crate) fn inc_accepted(&self, n: u64) {
        let mut state = self.lock();
        state.counters.get_or_insert_with(MoveCounters::default).accepted += n;
    }

    pub(crate) fn inc_rejected(&self, n: u64) {
        let mut state = self.lock();
        state.counters.get_or_insert_with(MoveCounters::default).rejected += n;
    }

    pub(crate) fn counters(&self) -> MoveCounters {
        self.lock().counters.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_before_first_run() {
        let handle = SearchHandle::new();
        assert_eq!(handle.num_accepted_moves(), MoveCount::NotStarted);
        assert_eq!(handle.num_rejected_moves(), MoveCount::NotStarted);
    }

    #[test]
    fn test_counts_hidden_while_initializing() {
        let handle = SearchHandle::new();
        {
            let mut state = handle.lock();
            state.status = SearchStatus::Initializing;
            state.counters = Some(MoveCounters {
                accepted: 4,
                rejected: 1,
            });
        }
        assert_eq!(handle.num_accepted_moves(), MoveCount::Initializing);
        assert_eq!(handle.num_rejected_moves(), MoveCount::Initializing);

        handle.set_status(SearchStatus::Running);
        assert_eq!(handle.num_accepted_moves(), MoveCount::Counted(4));
        assert_eq!(handle.num_rejected_moves(), MoveCount::Counted(1));
    }

    #[test]
    fn test_assert_idle() {
        let handle = SearchHandle::new();
        assert!(handle.lock().assert_idle("Cannot do it.").is_ok());

        handle.set_status(SearchStatus::Running);
        let err = handle.lock().assert_idle("Cannot do it.").unwrap_err();
        assert!(matches!(err, SearchError::InvalidState(ref msg) if msg.contains("running")));

        handle.set_status(SearchStatus::Disposed);
        assert!(matches!(
            handle.lock().assert_idle("Cannot do it."),
            Err(SearchError::Disposed)
        ));
    }

    #[test]
    fn test_stop_only_while_active() {
        let handle = SearchHandle::new();
        assert!(!handle.stop());

        handle.set_status(SearchStatus::Running);
        assert!(handle.stop());
        assert_eq!(handle.status(), SearchStatus::Terminating);
        assert!(!handle.stop());
    }

    #[test]
    fn test_transition() {
        let handle = SearchHandle::new();
        assert!(!handle.transition(SearchStatus::Running, SearchStatus::Idle));
        assert!(handle.transition(SearchStatus::Idle, SearchStatus::Initializing));
        assert_eq!(handle.status(), SearchStatus::Initializing);
    }

    #[test]
    fn test_clones_share_state() {
        let handle = SearchHandle::new();
        let observer = handle.clone();
        handle.inc_accepted(2);
        handle.inc_rejected(5);

        assert!(observer.same_search(&handle));
        assert!(!observer.same_search(&SearchHandle::new()));
        assert_eq!(observer.num_accepted_moves(), MoveCount::Counted(2));
        assert_eq!(observer.num_rejected_moves(), MoveCount::Counted(5));
    }
}
