//! Neighbourhood search lifecycle.
//!
//! A [`NeighbourhoodSearch`] owns the problem, the strategy, the current
//! and best solutions, the evaluated move cache and the status lock. A run
//! is executed synchronously by [`start`](NeighbourhoodSearch::start):
//!
//! ```text
//! Idle -> Initializing -> Running -> Terminating -> Idle
//! ```
//!
//! Other threads observe and stop the run through a [`SearchHandle`].

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use nsearch_core::{Problem, Result};

use crate::cache::{BoxedMoveCache, SingleEvaluatedMoveCache};
use crate::engine::MoveEngine;
use crate::event::{SearchListener, SearchListeners};
use crate::scope::RunScope;
use crate::solution::{offer_best, EvaluatedSolution};
use crate::status::{MoveCount, MoveCounters, SearchHandle, SearchStatus};
use crate::strategy::{SearchStrategy, StepOutcome};
use crate::termination::Termination;

/// Default name of a search.
pub const DEFAULT_SEARCH_NAME: &str = "NeighbourhoodSearch";

type Evaluated<P> = EvaluatedSolution<<P as Problem>::Solution, <P as Problem>::Evaluation>;

/// A local search over a problem, driven by a strategy.
///
/// # Example
///
/// ```
/// use nsearch_core::{SingleSwapNeighbourhood, SubsetProblem, SubsetSolution};
/// use nsearch_engine::{MoveCount, NeighbourhoodSearch, SteepestDescent};
///
/// let problem = SubsetProblem::new(0..6, 2, 2, |s: &SubsetSolution| {
///     s.selected().iter().sum::<usize>() as f64
/// })
/// .unwrap();
/// let strategy = SteepestDescent::new(SingleSwapNeighbourhood::new());
///
/// let mut search = NeighbourhoodSearch::new(problem, strategy);
/// assert_eq!(search.num_accepted_moves(), MoveCount::NotStarted);
///
/// search.start().unwrap();
/// let best = search.best_solution().unwrap();
/// assert!(best.is_selected(4) && best.is_selected(5));
/// ```
pub struct NeighbourhoodSearch<P, St>
where
    P: Problem,
    St: SearchStrategy<P>,
{
    name: String,
    problem: P,
    strategy: St,
    current: Option<Evaluated<P>>,
    best: Option<Evaluated<P>>,
    cache: Option<BoxedMoveCache<St::Move, P::Evaluation>>,
    handle: SearchHandle,
    listeners: SearchListeners<P::Solution, P::Evaluation>,
    termination: Option<Box<dyn Termination>>,
    rng: StdRng,
    last_run: RunScope,
}

impl<P, St> NeighbourhoodSearch<P, St>
where
    P: Problem,
    St: SearchStrategy<P>,
{
    /// Creates an idle search with a single slot move cache.
    pub fn new(problem: P, strategy: St) -> Self {
        Self {
            name: DEFAULT_SEARCH_NAME.to_string(),
            problem,
            strategy,
            current: None,
            best: None,
            cache: Some(Box::new(SingleEvaluatedMoveCache::new())),
            handle: SearchHandle::new(),
            listeners: SearchListeners::new(),
            termination: None,
            rng: StdRng::from_os_rng(),
            last_run: RunScope::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn strategy(&self) -> &St {
        &self.strategy
    }

    /// Returns a handle for observing and stopping this search from other
    /// threads.
    pub fn handle(&self) -> SearchHandle {
        self.handle.clone()
    }

    pub fn status(&self) -> SearchStatus {
        self.handle.status()
    }

    /// Number of accepted moves in the current or last run.
    pub fn num_accepted_moves(&self) -> MoveCount {
        self.handle.num_accepted_moves()
    }

    /// Number of rejected moves in the current or last run.
    pub fn num_rejected_moves(&self) -> MoveCount {
        self.handle.num_rejected_moves()
    }

    /// Number of steps of the current or last run.
    pub fn num_steps(&self) -> u64 {
        self.last_run.step_count()
    }

    /// Replaces the evaluated move cache. `None` disables caching.
    ///
    /// # Errors
    ///
    /// Fails unless the search is idle.
    pub fn set_evaluated_move_cache(
        &mut self,
        cache: Option<BoxedMoveCache<St::Move, P::Evaluation>>,
    ) -> Result<()> {
        let state = self.handle.lock();
        state.assert_idle("Cannot set custom evaluated move cache in neighbourhood search.")?;
        self.cache = cache;
        Ok(())
    }

    /// Installs a custom current solution to start the next run from.
    ///
    /// The solution is evaluated and offered as best solution.
    ///
    /// # Errors
    ///
    /// Fails unless the search is idle.
    pub fn set_current_solution(&mut self, solution: P::Solution) -> Result<()> {
        self.handle
            .lock()
            .assert_idle("Cannot set current solution in neighbourhood search.")?;
        let evaluation = self.problem.evaluate(&solution);
        let current = EvaluatedSolution::new(solution, evaluation);
        self.current_solution_changed(&current);
        self.current = Some(current);
        Ok(())
    }

    /// Seeds the random generator used by the problem and the strategy.
    ///
    /// # Errors
    ///
    /// Fails unless the search is idle.
    pub fn set_random_seed(&mut self, seed: u64) -> Result<()> {
        self.handle
            .lock()
            .assert_idle("Cannot set random seed of neighbourhood search.")?;
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }

    /// Sets the condition that ends a run.
    ///
    /// # Errors
    ///
    /// Fails unless the search is idle.
    pub fn set_termination(&mut self, termination: Option<Box<dyn Termination>>) -> Result<()> {
        self.handle
            .lock()
            .assert_idle("Cannot set termination of neighbourhood search.")?;
        self.termination = termination;
        Ok(())
    }

    pub fn add_listener(&mut self, listener: Arc<dyn SearchListener<P::Solution, P::Evaluation>>) {
        self.listeners.add(listener);
    }

    pub fn current_solution(&self) -> Option<&P::Solution> {
        self.current.as_ref().map(EvaluatedSolution::solution)
    }

    pub fn current_evaluation(&self) -> Option<P::Evaluation> {
        self.current.as_ref().map(EvaluatedSolution::evaluation)
    }

    /// Best admissible solution found so far, over all runs.
    pub fn best_solution(&self) -> Option<&P::Solution> {
        self.best.as_ref().map(EvaluatedSolution::solution)
    }

    pub fn best_evaluation(&self) -> Option<P::Evaluation> {
        self.best.as_ref().map(EvaluatedSolution::evaluation)
    }

    /// Requests the running search to stop after the current step.
    pub fn stop(&self) -> bool {
        self.handle.stop()
    }

    /// Releases the search. A disposed search cannot be started again.
    ///
    /// Disposing twice is a no-op.
    ///
    /// # Errors
    ///
    /// Fails while a run is in progress.
    pub fn dispose(&mut self) -> Result<()> {
        {
            let mut state = self.handle.lock();
            if state.status == SearchStatus::Disposed {
                return Ok(());
            }
            state.assert_idle("Cannot dispose neighbourhood search.")?;
            state.status = SearchStatus::Disposed;
        }
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
        debug!(event = "search_disposed", search = %self.name);
        self.listeners.fire_status_changed(SearchStatus::Disposed);
        Ok(())
    }

    /// Executes a run on the calling thread and returns when it ends.
    ///
    /// Starts from the current solution if one is set, otherwise from a
    /// random solution. The run ends when the strategy stops, a termination
    /// condition fires or a stop is requested.
    ///
    /// # Errors
    ///
    /// Fails unless the search is idle.
    pub fn start(&mut self) -> Result<()> {
        {
            let mut state = self.handle.lock();
            state.assert_idle("Cannot start neighbourhood search.")?;
            state.status = SearchStatus::Initializing;
            state.counters = Some(MoveCounters::default());
        }
        self.listeners.fire_status_changed(SearchStatus::Initializing);

        let mut current = match self.current.take() {
            Some(current) => current,
            None => {
                let mut solution = self.problem.create_random_solution(&mut self.rng);
                self.strategy.prepare_initial_solution(&mut solution);
                let evaluation = self.problem.evaluate(&solution);
                let current = EvaluatedSolution::new(solution, evaluation);
                self.current_solution_changed(&current);
                current
            }
        };
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
        let mut scope = RunScope::new();
        scope.start();

        if self
            .handle
            .transition(SearchStatus::Initializing, SearchStatus::Running)
        {
            self.listeners.fire_status_changed(SearchStatus::Running);
        }
        info!(
            event = "search_start",
            search = %self.name,
            strategy = self.strategy.strategy_name(),
            evaluation = ?current.evaluation(),
        );
        self.listeners.fire_search_started(&self.name);

        while self.handle.status() == SearchStatus::Running {
            if let Some(termination) = &self.termination {
                if termination.is_terminated(&scope) {
                    debug!(event = "terminated", steps = scope.step_count());
                    break;
                }
            }

            let (outcome, improved) = {
                let mut engine = MoveEngine::new(
                    &self.problem,
                    &mut current,
                    &mut self.best,
                    &mut self.cache,
                    &self.handle,
                    &self.listeners,
                    &mut self.rng,
                );
                let outcome = self.strategy.search_step(&mut engine);
                (outcome, engine.found_new_best())
            };
            scope.record_step(improved);
            self.listeners.fire_step_completed(scope.step_count());

            if outcome == StepOutcome::Stop {
                break;
            }
        }

        self.handle.set_status(SearchStatus::Terminating);
        self.listeners.fire_status_changed(SearchStatus::Terminating);
        self.current = Some(current);

        let counters = self.handle.counters();
        let duration = scope.elapsed().unwrap_or_default();
        info!(
            event = "search_stop",
            search = %self.name,
            duration_ms = duration.as_millis() as u64,
            steps = scope.step_count(),
            accepted = counters.accepted,
            rejected = counters.rejected,
            best = ?self.best_evaluation(),
        );
        self.listeners
            .fire_search_stopped(&self.name, scope.step_count());
        self.last_run = scope;

        self.handle.set_status(SearchStatus::Idle);
        self.listeners.fire_status_changed(SearchStatus::Idle);
        Ok(())
    }

    /// Notifies the strategy and listeners of a solution installed outside
    /// a step, clears the cache and offers the solution as best.
    fn current_solution_changed(&mut self, current: &Evaluated<P>) {
        self.strategy.current_solution_changed();
        self.listeners
            .fire_new_current_solution(current.solution(), &current.evaluation());
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
        if offer_best(&self.problem, &mut self.best, current, false) {
            self.listeners
                .fire_new_best_solution(current.solution(), &current.evaluation());
        }
    }
}

impl<P, St> std::fmt::Debug for NeighbourhoodSearch<P, St>
where
    P: Problem,
    St: SearchStrategy<P>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NeighbourhoodSearch")
            .field("name", &self.name)
            .field("strategy", &self.strategy)
            .field("status", &self.handle.status())
            .field("best_evaluation", &self.best_evaluation())
            .finish()
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
