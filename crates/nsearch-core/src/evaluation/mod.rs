//! Evaluation types for representing solution quality
//!
//! An evaluation wraps the objective value computed for a solution. The
//! optimization direction is owned by the problem, so comparisons between
//! evaluations always go through [`compute_delta`].

mod penalized;
mod simple;
mod traits;


pub use penalized::PenalizedEvaluation;
pub use simple::SimpleEvaluation;
pub use traits::Evaluation;

/// Computes the signed improvement of `new` over `old`.
///
/// A positive delta always means improvement: for maximizing problems this is
/// `new - old`, for minimizing problems `old - new`.
///
/// # Examples
///
/// ```
/// use nsearch_core::{compute_delta, SimpleEvaluation};
///
/// let old = SimpleEvaluation::of(10.0);
/// let new = SimpleEvaluation::of(7.0);
///
/// assert_eq!(compute_delta(&new, &old, false), -3.0);
/// assert_eq!(compute_delta(&new, &old, true), 3.0);
/// ```
#[inline]
pub fn compute_delta<E: Evaluation>(new: &E, old: &E, minimizing: bool) -> f64 {
    if minimizing {
        old.value() - new.value()
    } else {
        new.value() - old.value()
    }
}
