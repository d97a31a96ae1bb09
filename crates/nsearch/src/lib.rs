//! nsearch - Neighbourhood Search in Rust
//!
//! Define a problem, pick a strategy and let the engine evaluate, cache
//! and accept moves.
//!
//! # Example
//!
//! ```rust
//! use nsearch::prelude::*;
//!
//! let problem = SubsetProblem::new(0..8, 3, 3, |s: &SubsetSolution| {
//!     s.selected().iter().sum::<usize>() as f64
//! })
//! .unwrap();
//! let config = SearchConfig::new().with_random_seed(1);
//!
//! let search = nsearch::solve_subset(problem, &config).unwrap();
//! let best = search.best_solution().unwrap();
//! assert_eq!(best.selected().iter().copied().collect::<Vec<_>>(), vec![5, 6, 7]);
//! ```

// Evaluations and domain contracts
pub use nsearch_core::{
    compute_delta, Constraint, Evaluation, Move, Neighbourhood, PenalizedEvaluation,
    PenalizingConstraint, Problem, Result, SearchError, SimpleEvaluation,
};

// Subset selection
pub use nsearch_core::{
    SingleAdditionNeighbourhood, SingleDeletionNeighbourhood, SingleSwapNeighbourhood,
    SubsetMove, SubsetProblem, SubsetSolution,
};

// Configuration
pub use nsearch_config::{
    ConfigError, MoveCacheConfig, SearchConfig, StrategyConfig, TerminationConfig,
};

// Engine and lifecycle
pub use nsearch_engine::{
    BoxedMoveCache, EvaluatedMoveCache, LoggingSearchListener, LrSubsetSearch, MoveCount,
    MoveEngine, NeighbourhoodSearch, RandomDescent, SearchBuilder, SearchHandle,
    SearchListener, SearchStatus, SearchStrategy, SingleEvaluatedMoveCache, SteepestDescent,
    StepOutcome, SubsetStrategy, Termination,
};

#[cfg(feature = "console")]
pub mod console;

mod solve;
pub use solve::{solve_subset, subset_search, SubsetSearch};

pub mod prelude {
    pub use super::{
        Evaluation, Move, Neighbourhood, PenalizedEvaluation, Problem, SimpleEvaluation,
    };
    pub use super::{SubsetMove, SubsetProblem, SubsetSolution};
    pub use super::{MoveCacheConfig, SearchConfig, StrategyConfig, TerminationConfig};
    pub use super::{
        MoveCount, NeighbourhoodSearch, SearchBuilder, SearchHandle, SearchStatus,
        SearchStrategy, SubsetStrategy,
    };
}
