//! Test utilities for nsearch-engine
//!
//! Provides an [`EngineFixture`] owning everything a [`MoveEngine`] borrows,
//! so tests can build an engine, drop it, and inspect the parts.

use rand::rngs::StdRng;
use rand::SeedableRng;

use nsearch_core::{Move, Problem};

use crate::cache::{BoxedMoveCache, SingleEvaluatedMoveCache};
use crate::engine::MoveEngine;
use crate::event::SearchListeners;
use crate::solution::EvaluatedSolution;
use crate::status::{MoveCounters, SearchHandle, SearchStatus};

pub use nsearch_test::{ScriptedMove, ScriptedNeighbourhood, ScriptedProblem, ScriptedSolution};

pub struct EngineFixture<P: Problem, M> {
    pub problem: P,
    pub current: EvaluatedSolution<P::Solution, P::Evaluation>,
    pub best: Option<EvaluatedSolution<P::Solution, P::Evaluation>>,
    pub cache: Option<BoxedMoveCache<M, P::Evaluation>>,
    pub handle: SearchHandle,
    pub listeners: SearchListeners<P::Solution, P::Evaluation>,
    pub rng: StdRng,
}

impl<P, M> EngineFixture<P, M>
where
    P: Problem,
    M: Move<P::Solution>,
{
    /// A running search over a random solution of `problem`, with a single
    /// slot cache and zeroed counters. The initial solution is also the best.
    pub fn new(problem: P) -> Self {
        let mut rng = StdRng::seed_from_u64(42);
        let solution = problem.create_random_solution(&mut rng);
        let evaluation = problem.evaluate(&solution);
        let current = EvaluatedSolution::new(solution, evaluation);

        let handle = SearchHandle::new();
        {
            let mut state = handle.lock();
            state.status = SearchStatus::Running;
            state.counters = Some(MoveCounters::default());
        }

        Self {
            problem,
            best: Some(current.clone()),
            current,
            cache: Some(Box::new(SingleEvaluatedMoveCache::new())),
            handle,
            listeners: SearchListeners::new(),
            rng,
        }
    }

    pub fn without_cache(mut self) -> Self {
        self.cache = None;
        self
    }

    pub fn engine(&mut self) -> MoveEngine<'_, P, M> {
        MoveEngine::new(
            &self.problem,
            &mut self.current,
            &mut self.best,
            &mut self.cache,
            &self.handle,
            &self.listeners,
            &mut self.rng,
        )
    }

    pub fn cached_evaluation(&self, mv: &M) -> Option<P::Evaluation> {
        self.cache.as_ref()?.cached_move_evaluation(mv)
    }

    pub fn cached_rejection(&self, mv: &M) -> Option<bool> {
        self.cache.as_ref()?.cached_move_rejection(mv)
    }
}

/// Fixture over a maximizing scripted problem starting at zero, with call
/// counters reset.
pub fn scripted_fixture() -> EngineFixture<ScriptedProblem, ScriptedMove> {
    let fixture = EngineFixture::new(ScriptedProblem::new(0.0));
    fixture.problem.reset_counts();
    fixture
}
