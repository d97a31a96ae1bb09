//! Strategies for subset selection, built from configuration.

use nsearch_config::StrategyConfig;
use nsearch_core::{Problem, Result, SingleSwapNeighbourhood, SubsetMove, SubsetSolution};

use super::{LrSubsetSearch, RandomDescent, SearchStrategy, SteepestDescent, StepOutcome};
use crate::engine::MoveEngine;

/// Any of the built-in strategies over subset moves.
#[derive(Debug, Clone)]
pub enum SubsetStrategy {
    SteepestDescent(SteepestDescent<SingleSwapNeighbourhood>),
    RandomDescent(RandomDescent<SingleSwapNeighbourhood>),
    LrSubset(LrSubsetSearch),
}

impl SubsetStrategy {
    /// Builds the configured strategy; steepest descent over swaps when
    /// none is configured.
    pub fn from_config(config: Option<&StrategyConfig>) -> Result<Self> {
        Ok(match config {
            None | Some(StrategyConfig::SteepestDescent) => {
                SubsetStrategy::SteepestDescent(SteepestDescent::new(SingleSwapNeighbourhood::new()))
            }
            Some(StrategyConfig::RandomDescent) => {
                SubsetStrategy::RandomDescent(RandomDescent::new(SingleSwapNeighbourhood::new()))
            }
            Some(StrategyConfig::LrSubset { l, r }) => {
                SubsetStrategy::LrSubset(LrSubsetSearch::new(*l, *r)?)
            }
        })
    }
}

impl<P> SearchStrategy<P> for SubsetStrategy
where
    P: Problem<Solution = SubsetSolution>,
{
    type Move = SubsetMove;

    fn search_step(&mut self, engine: &mut MoveEngine<'_, P, SubsetMove>) -> StepOutcome {
        match self {
            SubsetStrategy::SteepestDescent(s) => SearchStrategy::<P>::search_step(s, engine),
            SubsetStrategy::RandomDescent(s) => SearchStrategy::<P>::search_step(s, engine),
            SubsetStrategy::LrSubset(s) => SearchStrategy::<P>::search_step(s, engine),
        }
    }

    fn prepare_initial_solution(&self, solution: &mut SubsetSolution) {
        if let SubsetStrategy::LrSubset(s) = self {
            SearchStrategy::<P>::prepare_initial_solution(s, solution);
        }
    }

    fn strategy_name(&self) -> &'static str {
        match self {
            SubsetStrategy::SteepestDescent(s) => SearchStrategy::<P>::strategy_name(s),
            SubsetStrategy::RandomDescent(s) => SearchStrategy::<P>::strategy_name(s),
            SubsetStrategy::LrSubset(s) => SearchStrategy::<P>::strategy_name(s),
        }
    }
}
