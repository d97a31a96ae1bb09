//! Constraint traits for subset and custom problems.
//!
//! Mandatory constraints make a solution inadmissible when violated.
//! Penalizing constraints keep the solution admissible but worsen its
//! evaluation by a penalty.

use std::fmt::Debug;

/// A mandatory constraint.
pub trait Constraint<S>: Send + Sync + Debug {
    /// Returns true if the solution satisfies this constraint.
    fn is_satisfied(&self, solution: &S) -> bool;
}

/// A constraint that penalizes violating solutions instead of rejecting them.
pub trait PenalizingConstraint<S>: Send + Sync + Debug {
    /// Returns the penalty assigned to the solution; zero when satisfied.
    fn penalty(&self, solution: &S) -> f64;
}
