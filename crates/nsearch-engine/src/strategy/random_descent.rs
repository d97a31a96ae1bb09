//! Random descent.

use tracing::debug;

use nsearch_core::{Neighbourhood, Problem};

use super::{SearchStrategy, StepOutcome};
use crate::engine::MoveEngine;

/// Draws one random move per step and accepts it only if it improves the
/// current solution.
///
/// Runs until a termination condition fires or the neighbourhood has no
/// move left.
#[derive(Debug, Clone)]
pub struct RandomDescent<N> {
    neighbourhood: N,
}

impl<N> RandomDescent<N> {
    pub fn new(neighbourhood: N) -> Self {
        Self { neighbourhood }
    }
}

impl<P, N> SearchStrategy<P> for RandomDescent<N>
where
    P: Problem,
    N: Neighbourhood<P::Solution>,
{
    type Move = N::Move;

    fn search_step(&mut self, engine: &mut MoveEngine<'_, P, N::Move>) -> StepOutcome {
        let Some(mv) = engine.random_move(&self.neighbourhood) else {
            debug!("neighbourhood is empty, stopping");
            return StepOutcome::Stop;
        };
        if engine.is_improvement(Some(&mv)) {
            engine.accept_move(&mv);
        } else {
            engine.reject_move();
        }
        StepOutcome::Continue
    }

    fn strategy_name(&self) -> &'static str {
        "RandomDescent"
    }
}
