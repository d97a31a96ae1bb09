//! Subset moves.

use crate::domain::Move;

use super::SubsetSolution;

/// A move that modifies the selection of a [`SubsetSolution`].
///
/// # Example
///
/// ```
/// use nsearch_core::{Move, SubsetMove, SubsetSolution};
///
/// let mut solution = SubsetSolution::with_selection(0..4, [0, 1]).unwrap();
/// let m = SubsetMove::Swap { add: 3, delete: 0 };
///
/// m.apply(&mut solution);
/// assert!(solution.is_selected(3));
/// assert!(!solution.is_selected(0));
///
/// m.undo(&mut solution);
/// assert_eq!(solution, SubsetSolution::with_selection(0..4, [0, 1]).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubsetMove {
    /// Selects a currently unselected ID.
    Addition(usize),
    /// Deselects a currently selected ID.
    Deletion(usize),
    /// Selects `add` and deselects `delete`.
    Swap { add: usize, delete: usize },
    /// Applies a sequence of moves in order; undone in reverse order.
    Compound(Vec<SubsetMove>),
}

impl SubsetMove {
    /// Returns a compound move consisting of these moves followed by `next`.
    pub fn then(&self, next: SubsetMove) -> SubsetMove {
        let mut moves = match self {
            SubsetMove::Compound(moves) => moves.clone(),
            other => vec![other.clone()],
        };
        moves.push(next);
        SubsetMove::Compound(moves)
    }

    /// Returns the number of elementary moves contained in this move.
    pub fn len(&self) -> usize {
        match self {
            SubsetMove::Compound(moves) => moves.iter().map(SubsetMove::len).sum(),
            _ => 1,
        }
    }

    /// Returns true for an empty compound move.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the change in subset size caused by this move.
    pub fn size_delta(&self) -> isize {
        match self {
            SubsetMove::Addition(_) => 1,
            SubsetMove::Deletion(_) => -1,
            SubsetMove::Swap { .. } => 0,
            SubsetMove::Compound(moves) => moves.iter().map(SubsetMove::size_delta).sum(),
        }
    }
}

impl Move<SubsetSolution> for SubsetMove {
    fn apply(&self, solution: &mut SubsetSolution) {
        match self {
            SubsetMove::Addition(id) => {
                solution.select(*id);
            }
            SubsetMove::Deletion(id) => {
                solution.deselect(*id);
            }
            SubsetMove::Swap { add, delete } => {
                solution.deselect(*delete);
                solution.select(*add);
            }
            SubsetMove::Compound(moves) => {
                for m in moves {
                    m.apply(solution);
                }
            }
        }
    }

    fn undo(&self, solution: &mut SubsetSolution) {
        match self {
            SubsetMove::Addition(id) => {
                solution.deselect(*id);
            }
            SubsetMove::Deletion(id) => {
                solution.select(*id);
            }
            SubsetMove::Swap { add, delete } => {
                solution.deselect(*add);
                solution.select(*delete);
            }
            SubsetMove::Compound(moves) => {
                for m in moves.iter().rev() {
                    m.undo(solution);
                }
            }
        }
    }
}
