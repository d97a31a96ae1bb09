//! Termination on lack of improvement.

use super::Termination;
use crate::scope::RunScope;

/// Terminates if the best solution did not improve for a number of
/// consecutive steps.
#[derive(Debug, Clone)]
pub struct UnimprovedStepCountTermination {
    limit: u64,
}

impl UnimprovedStepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for UnimprovedStepCountTermination {
    fn is_terminated(&self, scope: &RunScope) -> bool {
        scope.steps_since_improvement() >= self.limit
    }
}
