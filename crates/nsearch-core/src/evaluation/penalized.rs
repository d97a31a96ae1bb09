//! PenalizedEvaluation - objective value combined with constraint penalties

use std::fmt;

use super::traits::Evaluation;

/// An objective value combined with the total penalty of all violated
/// penalizing constraints.
///
/// The penalty always makes the evaluation worse: it is subtracted for
/// maximizing problems and added for minimizing problems.
///
/// # Examples
///
/// ```
/// use nsearch_core::{Evaluation, PenalizedEvaluation};
///
/// let max = PenalizedEvaluation::new(10.0, 2.0, false);
/// assert_eq!(max.value(), 8.0);
///
/// let min = PenalizedEvaluation::new(10.0, 2.0, true);
/// assert_eq!(min.value(), 12.0);
/// ```
#[derive(Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PenalizedEvaluation {
    evaluation: f64,
    penalty: f64,
    minimizing: bool,
}

impl PenalizedEvaluation {
    /// Creates a penalized evaluation.
    pub const fn new(evaluation: f64, penalty: f64, minimizing: bool) -> Self {
        Self {
            evaluation,
            penalty,
            minimizing,
        }
    }

    /// Returns the unpenalized objective value.
    pub fn evaluation(&self) -> f64 {
        self.evaluation
    }

    /// Returns the total penalty.
    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    /// Returns true if any penalty has been assigned.
    pub fn is_penalized(&self) -> bool {
        self.penalty > 0.0
    }
}

impl Evaluation for PenalizedEvaluation {
    fn value(&self) -> f64 {
        if self.minimizing {
            self.evaluation + self.penalty
        } else {
            self.evaluation - self.penalty
        }
    }
}

impl fmt::Debug for PenalizedEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PenalizedEvaluation")
            .field("evaluation", &self.evaluation)
            .field("penalty", &self.penalty)
            .field("minimizing", &self.minimizing)
            .finish()
    }
}

impl fmt::Display for PenalizedEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (penalty {})", self.value(), self.penalty)
    }
}
