//! Steepest descent.

use tracing::debug;

use nsearch_core::{Neighbourhood, Problem};

use super::{SearchStrategy, StepOutcome};
use crate::engine::MoveEngine;

/// Applies the best improving move of the neighbourhood each step and stops
/// in a local optimum.
#[derive(Debug, Clone)]
pub struct SteepestDescent<N> {
    neighbourhood: N,
}

impl<N> SteepestDescent<N> {
    pub fn new(neighbourhood: N) -> Self {
        Self { neighbourhood }
    }

    pub fn neighbourhood(&self) -> &N {
        &self.neighbourhood
    }
}

impl<P, N> SearchStrategy<P> for SteepestDescent<N>
where
    P: Problem,
    N: Neighbourhood<P::Solution>,
{
    type Move = N::Move;

    fn search_step(&mut self, engine: &mut MoveEngine<'_, P, N::Move>) -> StepOutcome {
        let moves = engine.all_moves(&self.neighbourhood);
        match engine.select_best_move(moves, true) {
            Some(mv) => {
                engine.accept_move(&mv);
                StepOutcome::Continue
            }
            None => {
                debug!("no improving move, stopping");
                StepOutcome::Stop
            }
        }
    }

    fn strategy_name(&self) -> &'static str {
        "SteepestDescent"
    }
}
