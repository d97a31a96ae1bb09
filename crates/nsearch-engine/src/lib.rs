//! nsearch Engine
//!
//! This crate provides the move evaluation and acceptance engine including:
//! - Evaluated move cache (contract and single slot default)
//! - Move engine: evaluate, validate, select, accept and reject moves
//! - Search lifecycle with a status lock shared with observer threads
//! - Termination conditions
//! - Event system for monitoring
//! - Strategies (steepest descent, random descent, LR subset search)
//! - Configuration wiring (builder module)

pub mod builder;
pub mod cache;
pub mod engine;
pub mod event;
pub mod scope;
pub mod search;
pub mod solution;
pub mod status;
pub mod strategy;
pub mod termination;

#[cfg(test)]
pub(crate) mod test_utils;

pub use builder::{build_move_cache, SearchBuilder};
pub use cache::{BoxedMoveCache, EvaluatedMoveCache, SingleEvaluatedMoveCache};
pub use engine::MoveEngine;
pub use event::{CountingSearchListener, LoggingSearchListener, SearchListener, SearchListeners};
pub use scope::RunScope;
pub use search::{NeighbourhoodSearch, DEFAULT_SEARCH_NAME};
pub use solution::EvaluatedSolution;
pub use status::{MoveCount, SearchHandle, SearchStatus};
pub use strategy::{
    LrSubsetSearch, RandomDescent, SearchStrategy, SteepestDescent, StepOutcome, SubsetStrategy,
};
pub use termination::{
    OrTermination, StepCountTermination, Termination, TimeTermination,
    UnimprovedStepCountTermination,
};
