//! Core domain traits

use std::fmt::Debug;

use rand::rngs::StdRng;

use crate::evaluation::Evaluation;

/// A problem to be solved by a neighbourhood search.
///
/// The problem owns the objective (through [`evaluate`](Problem::evaluate)),
/// the mandatory constraints (through
/// [`reject_solution`](Problem::reject_solution)) and the optimization
/// direction.
///
/// # Example
///
/// ```
/// use nsearch_core::{Problem, SimpleEvaluation};
/// use rand::rngs::StdRng;
/// use rand::Rng;
///
/// #[derive(Debug)]
/// struct MaximizeSum;
///
/// impl Problem for MaximizeSum {
///     type Solution = Vec<i32>;
///     type Evaluation = SimpleEvaluation;
///
///     fn evaluate(&self, solution: &Vec<i32>) -> SimpleEvaluation {
///         SimpleEvaluation::of(solution.iter().sum::<i32>() as f64)
///     }
///
///     fn create_random_solution(&self, rng: &mut StdRng) -> Vec<i32> {
///         (0..4).map(|_| rng.random_range(0..10)).collect()
///     }
/// }
/// ```
pub trait Problem: Send {
    /// The solution type of this problem.
    type Solution: Clone + Debug + Send + 'static;

    /// The evaluation type produced by this problem.
    type Evaluation: Evaluation;

    /// Evaluates the given solution.
    fn evaluate(&self, solution: &Self::Solution) -> Self::Evaluation;

    /// Returns true if the solution violates a mandatory constraint.
    ///
    /// Rejected solutions are never accepted, regardless of their evaluation.
    fn reject_solution(&self, _solution: &Self::Solution) -> bool {
        false
    }

    /// Returns true if lower evaluations are better.
    fn is_minimizing(&self) -> bool {
        false
    }

    /// Creates a random solution, used when a search starts without a
    /// custom initial solution.
    fn create_random_solution(&self, rng: &mut StdRng) -> Self::Solution;
}

/// A reversible transformation of a solution.
///
/// `apply` modifies the solution in place to produce a neighbour. `undo`
/// exactly reverses the most recent `apply` on the same solution. Calls must
/// come in matching, non-interleaved pairs per solution.
///
/// Moves are compared by equality when used as cache keys, so two moves that
/// compare equal must have identical effects.
pub trait Move<S>: Clone + PartialEq + Debug + Send + 'static {
    /// Applies this move to the solution.
    fn apply(&self, solution: &mut S);

    /// Reverses a previous [`apply`](Move::apply) on the same solution.
    fn undo(&self, solution: &mut S);
}

/// Generates moves that transform a solution into one of its neighbours.
pub trait Neighbourhood<S>: Send + Debug {
    /// The move type generated by this neighbourhood.
    type Move: Move<S>;

    /// Returns a random move for the given solution, or `None` if no move
    /// can be generated.
    fn random_move(&self, solution: &S, rng: &mut StdRng) -> Option<Self::Move>;

    /// Returns all moves for the given solution.
    fn all_moves(&self, solution: &S) -> Vec<Self::Move>;
}
