//! Constraint stubs with fixed verdicts.

use nsearch_core::{Constraint, PenalizingConstraint};

/// Mandatory constraint satisfied by every solution.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysSatisfiedConstraint;

impl<S> Constraint<S> for AlwaysSatisfiedConstraint {
    fn is_satisfied(&self, _solution: &S) -> bool {
        true
    }
}

/// Mandatory constraint violated by every solution.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverSatisfiedConstraint;

impl<S> Constraint<S> for NeverSatisfiedConstraint {
    fn is_satisfied(&self, _solution: &S) -> bool {
        false
    }
}

/// Penalizing constraint with a fixed verdict and penalty.
#[derive(Debug, Clone, Copy)]
pub struct PenalizingConstraintStub {
    satisfied: bool,
    penalty: f64,
}

impl PenalizingConstraintStub {
    /// A constraint that is always satisfied.
    pub fn satisfied() -> Self {
        Self {
            satisfied: true,
            penalty: 0.0,
        }
    }

    /// A constraint that is always violated with the given penalty.
    pub fn violated(penalty: f64) -> Self {
        Self {
            satisfied: false,
            penalty,
        }
    }
}

impl<S> Constraint<S> for PenalizingConstraintStub {
    fn is_satisfied(&self, _solution: &S) -> bool {
        self.satisfied
    }
}

impl<S> PenalizingConstraint<S> for PenalizingConstraintStub {
    fn penalty(&self, _solution: &S) -> f64 {
        if self.satisfied {
            0.0
        } else {
            self.penalty
        }
    }
}
