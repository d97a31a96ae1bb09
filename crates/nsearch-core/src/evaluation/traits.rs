//! Core Evaluation trait definition

use std::fmt::Debug;

/// Core trait for all evaluation types.
///
/// Evaluations are small immutable values. They must be cheap to copy so
/// they can be stored in the evaluated move cache and handed back on a hit.
///
/// All evaluation implementations must be:
/// - Immutable (`Copy`)
/// - Thread-safe (`Send + Sync`)
/// - Reducible to a single `f64` used for delta computation
pub trait Evaluation: Copy + Debug + PartialEq + Send + Sync + 'static {
    /// Returns the numeric value used to compare this evaluation with others.
    fn value(&self) -> f64;
}

impl Evaluation for f64 {
    #[inline]
    fn value(&self) -> f64 {
        *self
    }
}
