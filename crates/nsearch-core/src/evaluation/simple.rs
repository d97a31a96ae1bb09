//! SimpleEvaluation - single objective value

use std::fmt;

use super::traits::Evaluation;

/// An evaluation consisting of a single objective value.
///
/// # Examples
///
/// ```
/// use nsearch_core::{Evaluation, SimpleEvaluation};
///
/// let eval = SimpleEvaluation::of(-2.5);
/// assert_eq!(eval.value(), -2.5);
/// ```
#[derive(Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleEvaluation {
    value: f64,
}

impl SimpleEvaluation {
    /// Creates a new evaluation with the given value.
    #[inline]
    pub const fn of(value: f64) -> Self {
        SimpleEvaluation { value }
    }
}

impl Evaluation for SimpleEvaluation {
    #[inline]
    fn value(&self) -> f64 {
        self.value
    }
}

impl From<f64> for SimpleEvaluation {
    fn from(value: f64) -> Self {
        SimpleEvaluation::of(value)
    }
}

impl fmt::Debug for SimpleEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SimpleEvaluation({})", self.value)
    }
}

impl fmt::Display for SimpleEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
