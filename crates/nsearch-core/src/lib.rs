//! nsearch Core - Core types and traits for neighbourhood search
//!
//! This crate provides the fundamental abstractions used by the engine:
//! - Evaluation types for representing solution quality
//! - Domain traits for problems, moves and neighbourhoods
//! - Constraint traits for mandatory and penalizing constraints
//! - A subset-selection domain (solution, moves, neighbourhoods, problem)

pub mod constraint;
pub mod domain;
pub mod error;
pub mod evaluation;
pub mod subset;

pub use constraint::{Constraint, PenalizingConstraint};
pub use domain::{Move, Neighbourhood, Problem};
pub use error::{Result, SearchError};
pub use evaluation::{compute_delta, Evaluation, PenalizedEvaluation, SimpleEvaluation};
pub use subset::{
    SingleAdditionNeighbourhood, SingleDeletionNeighbourhood, SingleSwapNeighbourhood,
    SubsetMove, SubsetProblem, SubsetSolution,
};
