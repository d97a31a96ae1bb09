//! Wiring between configuration and search components.

use std::sync::Arc;

use nsearch_config::{MoveCacheConfig, SearchConfig};
use nsearch_core::{Problem, Result};

use crate::cache::{BoxedMoveCache, SingleEvaluatedMoveCache};
use crate::event::SearchListener;
use crate::search::NeighbourhoodSearch;
use crate::strategy::SearchStrategy;
use crate::termination::{self, Termination};

/// Builds the move cache selected by `config`.
pub fn build_move_cache<M, E>(config: MoveCacheConfig) -> Option<BoxedMoveCache<M, E>>
where
    M: Clone + PartialEq + Send + std::fmt::Debug + 'static,
    E: Copy + Send + std::fmt::Debug + 'static,
{
    match config {
        MoveCacheConfig::Single => Some(Box::new(SingleEvaluatedMoveCache::new())),
        MoveCacheConfig::Disabled => None,
    }
}

/// Step-by-step construction of a [`NeighbourhoodSearch`].
///
/// # Example
///
/// ```
/// use nsearch_config::SearchConfig;
/// use nsearch_core::{SingleSwapNeighbourhood, SubsetProblem, SubsetSolution};
/// use nsearch_engine::{SearchBuilder, SteepestDescent};
///
/// let problem = SubsetProblem::new(0..10, 3, 3, |s: &SubsetSolution| {
///     s.num_selected() as f64
/// })
/// .unwrap();
/// let config = SearchConfig::new()
///     .with_name("demo")
///     .with_random_seed(7)
///     .with_step_count_limit(100);
///
/// let search = SearchBuilder::new(problem, SteepestDescent::new(SingleSwapNeighbourhood::new()))
///     .with_config(&config)
///     .build()
///     .unwrap();
/// assert_eq!(search.name(), "demo");
/// ```
pub struct SearchBuilder<P, St>
where
    P: Problem,
    St: SearchStrategy<P>,
{
    problem: P,
    strategy: St,
    name: Option<String>,
    random_seed: Option<u64>,
    cache: Option<BoxedMoveCache<St::Move, P::Evaluation>>,
    termination: Option<Box<dyn Termination>>,
    initial_solution: Option<P::Solution>,
    listeners: Vec<Arc<dyn SearchListener<P::Solution, P::Evaluation>>>,
}

impl<P, St> SearchBuilder<P, St>
where
    P: Problem,
    St: SearchStrategy<P>,
{
    /// Starts a builder with a single slot move cache and no termination.
    pub fn new(problem: P, strategy: St) -> Self {
        Self {
            problem,
            strategy,
            name: None,
            random_seed: None,
            cache: Some(Box::new(SingleEvaluatedMoveCache::new())),
            termination: None,
            initial_solution: None,
            listeners: Vec::new(),
        }
    }

    /// Applies name, seed, cache and termination settings of `config`.
    ///
    /// The strategy is not taken from the config; see
    /// [`SubsetStrategy::from_config`](crate::SubsetStrategy::from_config).
    pub fn with_config(mut self, config: &SearchConfig) -> Self {
        if let Some(name) = &config.name {
            self.name = Some(name.clone());
        }
        if let Some(seed) = config.random_seed {
            self.random_seed = Some(seed);
        }
        self.cache = build_move_cache(config.move_cache);
        if let Some(termination) = config.termination.as_ref().and_then(termination::from_config) {
            self.termination = Some(termination);
        }
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Installs a custom move cache. `None` disables caching.
    pub fn with_move_cache(mut self, cache: Option<BoxedMoveCache<St::Move, P::Evaluation>>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_termination(mut self, termination: impl Termination + 'static) -> Self {
        self.termination = Some(Box::new(termination));
        self
    }

    pub fn with_initial_solution(mut self, solution: P::Solution) -> Self {
        self.initial_solution = Some(solution);
        self
    }

    pub fn with_listener(
        mut self,
        listener: Arc<dyn SearchListener<P::Solution, P::Evaluation>>,
    ) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Builds an idle search.
    pub fn build(self) -> Result<NeighbourhoodSearch<P, St>> {
        let mut search = NeighbourhoodSearch::new(self.problem, self.strategy);
        if let Some(name) = self.name {
            search.set_name(name);
        }
        if let Some(seed) = self.random_seed {
            search.set_random_seed(seed)?;
        }
        search.set_evaluated_move_cache(self.cache)?;
        search.set_termination(self.termination)?;
        for listener in self.listeners {
            search.add_listener(listener);
        }
        if let Some(solution) = self.initial_solution {
            search.set_current_solution(solution)?;
        }
        Ok(search)
    }
}

impl<P, St> std::fmt::Debug for SearchBuilder<P, St>
where
    P: Problem,
    St: SearchStrategy<P>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchBuilder")
            .field("strategy", &self.strategy)
            .field("name", &self.name)
            .field("random_seed", &self.random_seed)
            .field("cache_enabled", &self.cache.is_some())
            .field("termination", &self.termination)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
