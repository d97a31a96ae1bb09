//! Solutions paired with their evaluation.

use nsearch_core::{compute_delta, Problem};

/// A solution together with its last computed evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedSolution<S, E> {
    solution: S,
    evaluation: E,
}

impl<S, E: Copy> EvaluatedSolution<S, E> {
    pub fn new(solution: S, evaluation: E) -> Self {
        Self {
            solution,
            evaluation,
        }
    }

    pub fn solution(&self) -> &S {
        &self.solution
    }

    pub fn evaluation(&self) -> E {
        self.evaluation
    }

    pub fn into_solution(self) -> S {
        self.solution
    }

    pub(crate) fn solution_mut(&mut self) -> &mut S {
        &mut self.solution
    }

    pub(crate) fn set_evaluation(&mut self, evaluation: E) {
        self.evaluation = evaluation;
    }
}

/// Replaces `best` with a copy of `candidate` if the candidate is strictly
/// better and, unless `skip_validation` is set, not rejected.
///
/// Returns true if `best` was replaced.
pub(crate) fn offer_best<P: Problem>(
    problem: &P,
    best: &mut Option<EvaluatedSolution<P::Solution, P::Evaluation>>,
    candidate: &EvaluatedSolution<P::Solution, P::Evaluation>,
    skip_validation: bool,
) -> bool {
    let improves = match best {
        Some(best) => {
            compute_delta(
                &candidate.evaluation,
                &best.evaluation,
                problem.is_minimizing(),
            ) > 0.0
        }
        None => true,
    };
    if !improves || (!skip_validation && problem.reject_solution(&candidate.solution)) {
        return false;
    }
    *best = Some(candidate.clone());
    true
}
