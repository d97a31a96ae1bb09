//! Subset selection domain.
//!
//! A subset solution selects a number of IDs from a fixed universe. Moves
//! add, delete or swap single IDs; compound moves chain several of them.

mod moves;
mod neighbourhood;
mod problem;
mod solution;


pub use moves::SubsetMove;
pub use neighbourhood::{
    SingleAdditionNeighbourhood, SingleDeletionNeighbourhood, SingleSwapNeighbourhood,
};
pub use problem::SubsetProblem;
pub use solution::SubsetSolution;
