//! Search strategies driving the move engine.
//!
//! - [`SteepestDescent`]: applies the best improving move of a neighbourhood
//! - [`RandomDescent`]: applies random moves that improve
//! - [`LrSubsetSearch`]: greedy L additions and R deletions per step
//!
//! A strategy never owns the solution. Each step it receives a
//! [`MoveEngine`] borrowing the search state, and it can only change that
//! state through the engine.

mod lr_subset;
mod random_descent;
mod steepest_descent;
mod subset;

use std::fmt::Debug;

use nsearch_core::{Move, Problem};

use crate::engine::MoveEngine;

pub use lr_subset::LrSubsetSearch;
pub use random_descent::RandomDescent;
pub use steepest_descent::SteepestDescent;
pub use subset::SubsetStrategy;

/// Result of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The search may continue with another step.
    Continue,
    /// The strategy has converged; the run ends.
    Stop,
}

/// A local search strategy.
///
/// # Type Parameters
/// * `P` - The problem being searched
pub trait SearchStrategy<P: Problem>: Send + Debug {
    /// The move type the strategy works with.
    type Move: Move<P::Solution>;

    /// Executes one step.
    fn search_step(&mut self, engine: &mut MoveEngine<'_, P, Self::Move>) -> StepOutcome;

    /// Adjusts a randomly generated initial solution before the first step.
    fn prepare_initial_solution(&self, _solution: &mut P::Solution) {}

    /// Called when the search installs a new current solution from outside
    /// a step, so strategies can drop derived state.
    fn current_solution_changed(&mut self) {}

    /// Returns the name of this strategy type.
    fn strategy_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests;
