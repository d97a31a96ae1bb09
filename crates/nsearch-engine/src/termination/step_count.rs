//! Step count termination.

use super::Termination;
use crate::scope::RunScope;

/// Terminates after a step count.
///
/// # Example
///
/// ```
/// use nsearch_engine::termination::StepCountTermination;
///
/// // Terminate after 1000 steps
/// let term = StepCountTermination::new(1000);
/// ```
#[derive(Debug, Clone)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for StepCountTermination {
    fn is_terminated(&self, scope: &RunScope) -> bool {
        scope.step_count() >= self.limit
    }
}
