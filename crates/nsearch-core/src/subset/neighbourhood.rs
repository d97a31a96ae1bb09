//! Neighbourhoods over subset solutions.
//!
//! Each neighbourhood respects optional subset size limits, so that it never
//! generates a move leading to a subset that is too small or too large.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::Rng;

use crate::domain::Neighbourhood;

use super::{SubsetMove, SubsetSolution};

/// Draws a uniformly random element of `set`.
///
/// Linear in the size of `set`, as a `BTreeSet` has no positional access.
/// Random moves over very large universes pay this scan on every draw.
fn random_element(set: &BTreeSet<usize>, rng: &mut StdRng) -> Option<usize> {
    if set.is_empty() {
        return None;
    }
    set.iter().nth(rng.random_range(0..set.len())).copied()
}

/// Generates moves that select a single additional ID.
#[derive(Debug, Clone, Default)]
pub struct SingleAdditionNeighbourhood {
    max_subset_size: Option<usize>,
}

impl SingleAdditionNeighbourhood {
    pub fn new() -> Self {
        Self::default()
    }

    /// No additions are generated once the subset reaches this size.
    pub fn with_max_subset_size(max_subset_size: usize) -> Self {
        Self {
            max_subset_size: Some(max_subset_size),
        }
    }

    fn can_add(&self, solution: &SubsetSolution) -> bool {
        self.max_subset_size
            .map_or(true, |max| solution.num_selected() < max)
    }
}

impl Neighbourhood<SubsetSolution> for SingleAdditionNeighbourhood {
    type Move = SubsetMove;

    fn random_move(&self, solution: &SubsetSolution, rng: &mut StdRng) -> Option<SubsetMove> {
        if !self.can_add(solution) {
            return None;
        }
        random_element(solution.unselected(), rng).map(SubsetMove::Addition)
    }

    fn all_moves(&self, solution: &SubsetSolution) -> Vec<SubsetMove> {
        if !self.can_add(solution) {
            return Vec::new();
        }
        solution
            .unselected()
            .iter()
            .map(|&id| SubsetMove::Addition(id))
            .collect()
    }
}

/// Generates moves that deselect a single ID.
#[derive(Debug, Clone, Default)]
pub struct SingleDeletionNeighbourhood {
    min_subset_size: usize,
}

impl SingleDeletionNeighbourhood {
    pub fn new() -> Self {
        Self::default()
    }

    /// No deletions are generated once the subset shrinks to this size.
    pub fn with_min_subset_size(min_subset_size: usize) -> Self {
        Self { min_subset_size }
    }

    fn can_delete(&self, solution: &SubsetSolution) -> bool {
        solution.num_selected() > self.min_subset_size
    }
}

impl Neighbourhood<SubsetSolution> for SingleDeletionNeighbourhood {
    type Move = SubsetMove;

    fn random_move(&self, solution: &SubsetSolution, rng: &mut StdRng) -> Option<SubsetMove> {
        if !self.can_delete(solution) {
            return None;
        }
        random_element(solution.selected(), rng).map(SubsetMove::Deletion)
    }

    fn all_moves(&self, solution: &SubsetSolution) -> Vec<SubsetMove> {
        if !self.can_delete(solution) {
            return Vec::new();
        }
        solution
            .selected()
            .iter()
            .map(|&id| SubsetMove::Deletion(id))
            .collect()
    }
}

/// Generates moves that swap a selected ID with an unselected one.
///
/// Swaps keep the subset size fixed.
#[derive(Debug, Clone, Default)]
pub struct SingleSwapNeighbourhood;

impl SingleSwapNeighbourhood {
    pub fn new() -> Self {
        Self
    }
}

impl Neighbourhood<SubsetSolution> for SingleSwapNeighbourhood {
    type Move = SubsetMove;

    fn random_move(&self, solution: &SubsetSolution, rng: &mut StdRng) -> Option<SubsetMove> {
        let add = random_element(solution.unselected(), rng)?;
        let delete = random_element(solution.selected(), rng)?;
        Some(SubsetMove::Swap { add, delete })
    }

    fn all_moves(&self, solution: &SubsetSolution) -> Vec<SubsetMove> {
        let mut moves = Vec::with_capacity(solution.num_selected() * solution.num_unselected());
        for &add in solution.unselected() {
            for &delete in solution.selected() {
                moves.push(SubsetMove::Swap { add, delete });
            }
        }
        moves
    }
}
