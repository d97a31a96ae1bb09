//! Subset selection problem.

use std::fmt::{self, Debug};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::constraint::{Constraint, PenalizingConstraint};
use crate::domain::Problem;
use crate::error::{Result, SearchError};
use crate::evaluation::PenalizedEvaluation;

use super::SubsetSolution;

type Objective = Box<dyn Fn(&SubsetSolution) -> f64 + Send + Sync>;

/// A problem that selects a subset of IDs within given size bounds.
///
/// Solutions whose size falls outside `[min_subset_size, max_subset_size]`
/// or that violate a mandatory constraint are rejected. Penalizing
/// constraints contribute a penalty to the [`PenalizedEvaluation`].
///
/// # Example
///
/// ```
/// use nsearch_core::{Evaluation, Problem, SubsetProblem, SubsetSolution};
///
/// // maximize the sum of the selected IDs, selecting exactly two of them
/// let problem = SubsetProblem::new(0..5, 2, 2, |s: &SubsetSolution| {
///     s.selected().iter().sum::<usize>() as f64
/// })
/// .unwrap();
///
/// let solution = SubsetSolution::with_selection(0..5, [3, 4]).unwrap();
/// assert_eq!(problem.evaluate(&solution).value(), 7.0);
/// assert!(!problem.reject_solution(&solution));
/// ```
pub struct SubsetProblem {
    ids: Vec<usize>,
    min_subset_size: usize,
    max_subset_size: usize,
    objective: Objective,
    minimizing: bool,
    mandatory_constraints: Vec<Box<dyn Constraint<SubsetSolution>>>,
    penalizing_constraints: Vec<Box<dyn PenalizingConstraint<SubsetSolution>>>,
}

impl SubsetProblem {
    /// Creates a maximizing subset problem.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::DomainModel`] if `min_subset_size` exceeds
    /// `max_subset_size` or `max_subset_size` exceeds the number of IDs.
    pub fn new<F>(
        ids: impl IntoIterator<Item = usize>,
        min_subset_size: usize,
        max_subset_size: usize,
        objective: F,
    ) -> Result<Self>
    where
        F: Fn(&SubsetSolution) -> f64 + Send + Sync + 'static,
    {
        let mut ids: Vec<usize> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();

        if min_subset_size > max_subset_size {
            return Err(SearchError::DomainModel(format!(
                "minimum subset size {} exceeds maximum subset size {}",
                min_subset_size, max_subset_size
            )));
        }
        if max_subset_size > ids.len() {
            return Err(SearchError::DomainModel(format!(
                "maximum subset size {} exceeds number of IDs {}",
                max_subset_size,
                ids.len()
            )));
        }

        Ok(Self {
            ids,
            min_subset_size,
            max_subset_size,
            objective: Box::new(objective),
            minimizing: false,
            mandatory_constraints: Vec::new(),
            penalizing_constraints: Vec::new(),
        })
    }

    /// Makes lower evaluations better.
    pub fn set_minimizing(&mut self) {
        self.minimizing = true;
    }

    /// Makes higher evaluations better (the default).
    pub fn set_maximizing(&mut self) {
        self.minimizing = false;
    }

    pub fn add_mandatory_constraint(&mut self, constraint: impl Constraint<SubsetSolution> + 'static) {
        self.mandatory_constraints.push(Box::new(constraint));
    }

    pub fn add_penalizing_constraint(
        &mut self,
        constraint: impl PenalizingConstraint<SubsetSolution> + 'static,
    ) {
        self.penalizing_constraints.push(Box::new(constraint));
    }

    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    pub fn min_subset_size(&self) -> usize {
        self.min_subset_size
    }

    pub fn max_subset_size(&self) -> usize {
        self.max_subset_size
    }

    /// Returns the mandatory constraints violated by the solution.
    pub fn violated_constraints(
        &self,
        solution: &SubsetSolution,
    ) -> Vec<&dyn Constraint<SubsetSolution>> {
        self.mandatory_constraints
            .iter()
            .filter(|c| !c.is_satisfied(solution))
            .map(|c| c.as_ref())
            .collect()
    }
}

impl Debug for SubsetProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubsetProblem")
            .field("id_count", &self.ids.len())
            .field("min_subset_size", &self.min_subset_size)
            .field("max_subset_size", &self.max_subset_size)
            .field("minimizing", &self.minimizing)
            .field("mandatory_constraints", &self.mandatory_constraints.len())
            .field("penalizing_constraints", &self.penalizing_constraints.len())
            .finish()
    }
}

impl Problem for SubsetProblem {
    type Solution = SubsetSolution;
    type Evaluation = PenalizedEvaluation;

    fn evaluate(&self, solution: &SubsetSolution) -> PenalizedEvaluation {
        let value = (self.objective)(solution);
        let penalty = self
            .penalizing_constraints
            .iter()
            .map(|c| c.penalty(solution))
            .sum();
        PenalizedEvaluation::new(value, penalty, self.minimizing)
    }

    fn reject_solution(&self, solution: &SubsetSolution) -> bool {
        let size = solution.num_selected();
        size < self.min_subset_size
            || size > self.max_subset_size
            || self
                .mandatory_constraints
                .iter()
                .any(|c| !c.is_satisfied(solution))
    }

    fn is_minimizing(&self) -> bool {
        self.minimizing
    }

    fn create_random_solution(&self, rng: &mut StdRng) -> SubsetSolution {
        let size = rng.random_range(self.min_subset_size..=self.max_subset_size);
        let mut shuffled = self.ids.clone();
        shuffled.shuffle(rng);

        let mut solution = SubsetSolution::new(self.ids.iter().copied());
        for &id in shuffled.iter().take(size) {
            solution.select(id);
        }
        solution
    }
}
