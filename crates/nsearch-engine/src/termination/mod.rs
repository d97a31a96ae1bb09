//! Termination conditions checked by the run loop between steps.

mod composite;
mod step_count;
mod time;
mod unimproved;

use std::fmt::Debug;

use nsearch_config::TerminationConfig;

use crate::scope::RunScope;

pub use composite::OrTermination;
pub use step_count::StepCountTermination;
pub use time::TimeTermination;
pub use unimproved::UnimprovedStepCountTermination;

/// Decides when a run should stop.
pub trait Termination: Send + Debug {
    /// Returns true if the run should stop before its next step.
    fn is_terminated(&self, scope: &RunScope) -> bool;
}

impl<T: Termination + ?Sized> Termination for Box<T> {
    fn is_terminated(&self, scope: &RunScope) -> bool {
        (**self).is_terminated(scope)
    }
}

/// Builds the termination described by `config`.
///
/// Several limits are combined with OR semantics. Returns `None` if the
/// config sets no limit.
pub fn from_config(config: &TerminationConfig) -> Option<Box<dyn Termination>> {
    let mut terminations: Vec<Box<dyn Termination>> = Vec::new();

    if let Some(limit) = config.time_limit() {
        terminations.push(Box::new(TimeTermination::new(limit)));
    }
    if let Some(limit) = config.step_count_limit {
        terminations.push(Box::new(StepCountTermination::new(limit)));
    }
    if let Some(limit) = config.unimproved_step_count_limit {
        terminations.push(Box::new(UnimprovedStepCountTermination::new(limit)));
    }

    match terminations.len() {
        0 => None,
        1 => terminations.pop(),
        _ => Some(Box::new(OrTermination::new(terminations))),
    }
}

#[cfg(test)]
mod tests;
