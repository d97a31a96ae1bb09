//! Subset solution.

use std::collections::BTreeSet;

use crate::error::{Result, SearchError};

/// A selection of IDs from a fixed universe.
///
/// Every ID of the universe is contained in exactly one of the selected and
/// unselected sets. Ordered sets keep move generation deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetSolution {
    selected: BTreeSet<usize>,
    unselected: BTreeSet<usize>,
}

impl SubsetSolution {
    /// Creates a solution in which no ID is selected.
    pub fn new(ids: impl IntoIterator<Item = usize>) -> Self {
        Self {
            selected: BTreeSet::new(),
            unselected: ids.into_iter().collect(),
        }
    }

    /// Creates a solution with the given initial selection.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::DomainModel`] if a selected ID is not part of
    /// the universe.
    pub fn with_selection(
        ids: impl IntoIterator<Item = usize>,
        selection: impl IntoIterator<Item = usize>,
    ) -> Result<Self> {
        let mut solution = Self::new(ids);
        for id in selection {
            if !solution.unselected.contains(&id) && !solution.selected.contains(&id) {
                return Err(SearchError::DomainModel(format!(
                    "ID {} is not part of the universe",
                    id
                )));
            }
            solution.select(id);
        }
        Ok(solution)
    }

    /// Selects an ID. Returns false if it was already selected or unknown.
    pub fn select(&mut self, id: usize) -> bool {
        if self.unselected.remove(&id) {
            self.selected.insert(id);
            true
        } else {
            false
        }
    }

    /// Deselects an ID. Returns false if it was not selected.
    pub fn deselect(&mut self, id: usize) -> bool {
        if self.selected.remove(&id) {
            self.unselected.insert(id);
            true
        } else {
            false
        }
    }

    /// Selects every ID of the universe.
    pub fn select_all(&mut self) {
        self.selected.append(&mut self.unselected);
    }

    /// Deselects every ID.
    pub fn deselect_all(&mut self) {
        self.unselected.append(&mut self.selected);
    }

    pub fn is_selected(&self, id: usize) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub fn unselected(&self) -> &BTreeSet<usize> {
        &self.unselected
    }

    pub fn num_selected(&self) -> usize {
        self.selected.len()
    }

    pub fn num_unselected(&self) -> usize {
        self.unselected.len()
    }

    /// Returns the size of the universe.
    pub fn universe_size(&self) -> usize {
        self.selected.len() + self.unselected.len()
    }
}
