//! Shared test fixtures for nsearch crates.
//!
//! - [`scripted`] - A problem whose moves carry a fixed value change and
//!   rejection verdict, with call counters for cache assertions
//! - [`constraint`] - Constraint stubs with fixed verdicts
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! nsearch-test = { workspace = true }
//! ```

pub mod constraint;
pub mod scripted;

pub use constraint::{
    AlwaysSatisfiedConstraint, NeverSatisfiedConstraint, PenalizingConstraintStub,
};
pub use scripted::{ScriptedMove, ScriptedNeighbourhood, ScriptedProblem, ScriptedSolution};
