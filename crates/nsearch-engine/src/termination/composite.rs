//! OR combination of termination conditions.

use super::Termination;
use crate::scope::RunScope;

/// Terminates when any of its children terminates.
///
/// # Example
///
/// ```
/// use nsearch_engine::termination::{
///     OrTermination, StepCountTermination, Termination, TimeTermination,
/// };
///
/// // Terminate after 30 seconds OR 1000 steps
/// let termination = OrTermination::new(vec![
///     Box::new(TimeTermination::seconds(30)) as Box<dyn Termination>,
///     Box::new(StepCountTermination::new(1000)),
/// ]);
/// assert_eq!(termination.len(), 2);
/// ```
#[derive(Debug)]
pub struct OrTermination(Vec<Box<dyn Termination>>);

impl OrTermination {
    pub fn new(terminations: Vec<Box<dyn Termination>>) -> Self {
        Self(terminations)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Termination for OrTermination {
    fn is_terminated(&self, scope: &RunScope) -> bool {
        self.0.iter().any(|t| t.is_terminated(scope))
    }
}
