//! LR subset search.

use tracing::debug;

use nsearch_core::{
    Move, Neighbourhood, Problem, Result, SearchError, SingleAdditionNeighbourhood,
    SingleDeletionNeighbourhood, SubsetMove, SubsetSolution,
};

use super::{SearchStrategy, StepOutcome};
use crate::engine::MoveEngine;

/// Greedily performs `l` additions and `r` deletions per step.
///
/// With `l > r` the subset grows: the search starts from an empty selection
/// and adds before it deletes. With `l < r` it starts from the full
/// selection and deletes first. Each single addition or deletion is the best
/// one given the previous ones. While the current solution is rejected, for
/// example because the subset is still too small or too large, the combined
/// move is always applied. Once it is admissible the combined move is only
/// applied if it improves the current solution; otherwise the search stops.
///
/// Rejection verdicts are ignored along the way, since a fixed size subset
/// is only reached after several steps. Only admissible solutions become the
/// best solution.
#[derive(Debug, Clone)]
pub struct LrSubsetSearch {
    l: usize,
    r: usize,
    additions: SingleAdditionNeighbourhood,
    deletions: SingleDeletionNeighbourhood,
}

impl LrSubsetSearch {
    /// Creates an LR search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `l == r`.
    pub fn new(l: usize, r: usize) -> Result<Self> {
        if l == r {
            return Err(SearchError::Config(format!(
                "LR subset search requires L != R (got L = R = {l})"
            )));
        }
        Ok(Self {
            l,
            r,
            additions: SingleAdditionNeighbourhood::new(),
            deletions: SingleDeletionNeighbourhood::new(),
        })
    }

    pub fn l(&self) -> usize {
        self.l
    }

    pub fn r(&self) -> usize {
        self.r
    }

    fn is_increasing(&self) -> bool {
        self.l > self.r
    }
}

/// Extends `base` with `count` moves of `neighbourhood`, each the best
/// choice after the previous ones.
fn extend_greedily<P, N>(
    engine: &mut MoveEngine<'_, P, SubsetMove>,
    base: SubsetMove,
    neighbourhood: &N,
    count: usize,
) -> Option<SubsetMove>
where
    P: Problem<Solution = SubsetSolution>,
    N: Neighbourhood<SubsetSolution, Move = SubsetMove>,
{
    let mut compound = base;
    for _ in 0..count {
        let mut partial = engine.current_solution().clone();
        compound.apply(&mut partial);
        let candidates: Vec<SubsetMove> = neighbourhood
            .all_moves(&partial)
            .into_iter()
            .map(|next| compound.then(next))
            .collect();
        compound = engine.select_best_evaluated_move(candidates, false)?;
    }
    Some(compound)
}

/// Returns true if `mv` improves the current evaluation, admissible or not.
fn improves<P>(engine: &mut MoveEngine<'_, P, SubsetMove>, mv: &SubsetMove) -> bool
where
    P: Problem<Solution = SubsetSolution>,
{
    let evaluation = engine.evaluate_move(mv);
    engine.compute_delta(&evaluation, &engine.current_evaluation()) > 0.0
}

impl<P> SearchStrategy<P> for LrSubsetSearch
where
    P: Problem<Solution = SubsetSolution>,
{
    type Move = SubsetMove;

    fn search_step(&mut self, engine: &mut MoveEngine<'_, P, SubsetMove>) -> StepOutcome {
        let empty = SubsetMove::Compound(Vec::new());
        let lr_move = if self.is_increasing() {
            extend_greedily(engine, empty, &self.additions, self.l)
                .and_then(|m| extend_greedily(engine, m, &self.deletions, self.r))
        } else {
            extend_greedily(engine, empty, &self.deletions, self.r)
                .and_then(|m| extend_greedily(engine, m, &self.additions, self.l))
        };

        // an inadmissible current solution is left whatever the delta
        let admissible = !engine.problem().reject_solution(engine.current_solution());
        match lr_move {
            Some(mv) if !admissible || improves(engine, &mv) => {
                let size = mv.len() as u64;
                engine.accept_move_validating_best(&mv);
                engine.inc_num_accepted_moves(size.saturating_sub(1));
                StepOutcome::Continue
            }
            Some(_) => {
                debug!(l = self.l, r = self.r, "LR move does not improve, stopping");
                engine.reject_move();
                StepOutcome::Stop
            }
            None => {
                debug!(l = self.l, r = self.r, "no LR move left, stopping");
                StepOutcome::Stop
            }
        }
    }

    fn prepare_initial_solution(&self, solution: &mut SubsetSolution) {
        if self.is_increasing() {
            solution.deselect_all();
        } else {
            solution.select_all();
        }
    }

    fn strategy_name(&self) -> &'static str {
        "LrSubsetSearch"
    }
}
