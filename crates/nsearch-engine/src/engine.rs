//! Move evaluation and acceptance.
//!
//! [`MoveEngine`] is the capability handed to a search strategy for the
//! duration of one step. It borrows the current solution, the best solution,
//! the evaluated move cache and the status lock from the enclosing search,
//! so only code holding an engine can evaluate, accept or reject moves.
//!
//! Every evaluation follows apply, measure, undo: the current solution is
//! unchanged when [`evaluate_move`](MoveEngine::evaluate_move) or
//! [`validate_move`](MoveEngine::validate_move) return.

use rand::rngs::StdRng;
use tracing::{debug, trace};

use nsearch_core::{compute_delta, Move, Neighbourhood, Problem};

use crate::cache::BoxedMoveCache;
use crate::event::SearchListeners;
use crate::solution::{offer_best, EvaluatedSolution};
use crate::status::SearchHandle;

type Evaluated<P> = EvaluatedSolution<<P as Problem>::Solution, <P as Problem>::Evaluation>;

/// Per-step view of a search through which strategies evaluate, select,
/// accept and reject moves.
pub struct MoveEngine<'a, P: Problem, M> {
    problem: &'a P,
    current: &'a mut Evaluated<P>,
    best: &'a mut Option<Evaluated<P>>,
    cache: &'a mut Option<BoxedMoveCache<M, P::Evaluation>>,
    handle: &'a SearchHandle,
    listeners: &'a SearchListeners<P::Solution, P::Evaluation>,
    rng: &'a mut StdRng,
    found_new_best: bool,
}

impl<'a, P, M> MoveEngine<'a, P, M>
where
    P: Problem,
    M: Move<P::Solution>,
{
    pub(crate) fn new(
        problem: &'a P,
        current: &'a mut Evaluated<P>,
        best: &'a mut Option<Evaluated<P>>,
        cache: &'a mut Option<BoxedMoveCache<M, P::Evaluation>>,
        handle: &'a SearchHandle,
        listeners: &'a SearchListeners<P::Solution, P::Evaluation>,
        rng: &'a mut StdRng,
    ) -> Self {
        Self {
            problem,
            current,
            best,
            cache,
            handle,
            listeners,
            rng,
            found_new_best: false,
        }
    }

    pub fn problem(&self) -> &P {
        self.problem
    }

    pub fn current_solution(&self) -> &P::Solution {
        self.current.solution()
    }

    pub fn current_evaluation(&self) -> P::Evaluation {
        self.current.evaluation()
    }

    pub fn best_evaluation(&self) -> Option<P::Evaluation> {
        self.best.as_ref().map(EvaluatedSolution::evaluation)
    }

    pub fn rng(&mut self) -> &mut StdRng {
        self.rng
    }

    /// Returns true if a move accepted through this engine produced a new
    /// best solution.
    pub fn found_new_best(&self) -> bool {
        self.found_new_best
    }

    /// Signed improvement of `new` over `old`; positive means better.
    pub fn compute_delta(&self, new: &P::Evaluation, old: &P::Evaluation) -> f64 {
        compute_delta(new, old, self.problem.is_minimizing())
    }

    /// Draws a random move for the current solution.
    pub fn random_move<N>(&mut self, neighbourhood: &N) -> Option<M>
    where
        N: Neighbourhood<P::Solution, Move = M>,
    {
        neighbourhood.random_move(self.current.solution(), self.rng)
    }

    /// Generates all moves for the current solution.
    pub fn all_moves<N>(&self, neighbourhood: &N) -> Vec<M>
    where
        N: Neighbourhood<P::Solution, Move = M>,
    {
        neighbourhood.all_moves(self.current.solution())
    }

    /// Returns the evaluation of the current solution with `mv` applied.
    pub fn evaluate_move(&mut self, mv: &M) -> P::Evaluation {
        if let Some(evaluation) = self
            .cache
            .as_ref()
            .and_then(|cache| cache.cached_move_evaluation(mv))
        {
            trace!(?mv, "move evaluation cache hit");
            return evaluation;
        }
        trace!(?mv, "move evaluation cache miss");

        let solution = self.current.solution_mut();
        mv.apply(solution);
        let evaluation = self.problem.evaluate(solution);
        if let Some(cache) = self.cache.as_mut() {
            cache.cache_move_evaluation(mv, evaluation);
        }
        mv.undo(solution);
        evaluation
    }

    /// Returns true if the current solution with `mv` applied is not
    /// rejected by a mandatory constraint.
    pub fn validate_move(&mut self, mv: &M) -> bool {
        if let Some(rejected) = self
            .cache
            .as_ref()
            .and_then(|cache| cache.cached_move_rejection(mv))
        {
            trace!(?mv, rejected, "move rejection cache hit");
            return !rejected;
        }
        trace!(?mv, "move rejection cache miss");

        let solution = self.current.solution_mut();
        mv.apply(solution);
        let rejected = self.problem.reject_solution(solution);
        if let Some(cache) = self.cache.as_mut() {
            cache.cache_move_rejection(mv, rejected);
        }
        mv.undo(solution);
        !rejected
    }

    /// Returns true if `mv` is admissible and strictly improves the current
    /// solution. `None` is never an improvement.
    pub fn is_improvement(&mut self, mv: Option<&M>) -> bool {
        let Some(mv) = mv else {
            return false;
        };
        if !self.validate_move(mv) {
            return false;
        }
        let evaluation = self.evaluate_move(mv);
        self.compute_delta(&evaluation, &self.current.evaluation()) > 0.0
    }

    /// Returns the admissible move with the largest delta.
    ///
    /// The first move reaching the largest delta wins. With
    /// `positive_deltas_only`, only strictly improving moves are considered.
    /// Returns `None` if no move qualifies.
    pub fn select_best_move<I>(&mut self, moves: I, positive_deltas_only: bool) -> Option<M>
    where
        I: IntoIterator<Item = M>,
    {
        self.select_best(moves, positive_deltas_only, true)
    }

    /// Like [`select_best_move`](MoveEngine::select_best_move), but ignores
    /// rejection verdicts.
    ///
    /// For strategies that pass through inadmissible intermediate solutions,
    /// such as a subset that is temporarily too large.
    pub fn select_best_evaluated_move<I>(
        &mut self,
        moves: I,
        positive_deltas_only: bool,
    ) -> Option<M>
    where
        I: IntoIterator<Item = M>,
    {
        self.select_best(moves, positive_deltas_only, false)
    }

    fn select_best<I>(&mut self, moves: I, positive_deltas_only: bool, validate: bool) -> Option<M>
    where
        I: IntoIterator<Item = M>,
    {
        let current_evaluation = self.current.evaluation();
        let mut best_delta = f64::NEG_INFINITY;
        let mut best: Option<(M, P::Evaluation)> = None;

        for mv in moves {
            if validate && !self.validate_move(&mv) {
                continue;
            }
            let evaluation = self.evaluate_move(&mv);
            let delta = self.compute_delta(&evaluation, &current_evaluation);
            trace!(?mv, delta, "candidate move");
            if delta > best_delta && (!positive_deltas_only || delta > 0.0) {
                best_delta = delta;
                best = Some((mv, evaluation));
            }
        }

        let (mv, evaluation) = best?;
        self.hint_selected_move(&mv, evaluation, validate);
        Some(mv)
    }

    /// Re-caches the results of a just selected move, so that accepting it
    /// right away hits the cache.
    fn hint_selected_move(&mut self, mv: &M, evaluation: P::Evaluation, validated: bool) {
        if let Some(cache) = self.cache.as_mut() {
            if validated {
                cache.cache_move_rejection(mv, false);
            }
            cache.cache_move_evaluation(mv, evaluation);
        }
    }

    /// Applies `mv` to the current solution and counts it as accepted.
    ///
    /// The move must be admissible; it is not validated again.
    pub fn accept_move(&mut self, mv: &M) {
        let evaluation = self.evaluate_move(mv);
        mv.apply(self.current.solution_mut());
        self.update_current_and_best_solution(evaluation, true);
        self.handle.inc_accepted(1);
    }

    /// Applies `mv` to the current solution and counts it as accepted, even
    /// if the resulting solution is inadmissible.
    ///
    /// The best solution is only replaced by an admissible solution.
    pub fn accept_move_validating_best(&mut self, mv: &M) {
        let evaluation = self.evaluate_move(mv);
        mv.apply(self.current.solution_mut());
        self.update_current_and_best_solution(evaluation, false);
        self.handle.inc_accepted(1);
    }

    /// Counts one rejected move. The current solution is left untouched.
    pub fn reject_move(&mut self) {
        self.handle.inc_rejected(1);
    }

    /// Adds `n` to the accepted move counter.
    pub fn inc_num_accepted_moves(&mut self, n: u64) {
        self.handle.inc_accepted(n);
    }

    /// Adds `n` to the rejected move counter.
    pub fn inc_num_rejected_moves(&mut self, n: u64) {
        self.handle.inc_rejected(n);
    }

    fn update_current_and_best_solution(
        &mut self,
        evaluation: P::Evaluation,
        skip_validation: bool,
    ) {
        self.current.set_evaluation(evaluation);
        self.listeners
            .fire_new_current_solution(self.current.solution(), &evaluation);
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
        if offer_best(self.problem, self.best, self.current, skip_validation) {
            self.found_new_best = true;
            debug!(evaluation = ?evaluation, "new best solution");
            self.listeners
                .fire_new_best_solution(self.current.solution(), &evaluation);
        }
    }
}

impl<P, M> std::fmt::Debug for MoveEngine<'_, P, M>
where
    P: Problem,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveEngine")
            .field("current_evaluation", &self.current.evaluation())
            .field("best_evaluation", &self.best.as_ref().map(|b| b.evaluation()))
            .field("cache_enabled", &self.cache.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
