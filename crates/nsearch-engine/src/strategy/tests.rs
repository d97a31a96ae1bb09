//! Tests for the built-in strategies.

use nsearch_config::StrategyConfig;
use nsearch_core::{
    Evaluation, PenalizedEvaluation, SearchError, SingleSwapNeighbourhood, SubsetMove, SubsetProblem,
    SubsetSolution,
};
use nsearch_test::{NeverSatisfiedConstraint, PenalizingConstraintStub};

use super::*;
use crate::search::NeighbourhoodSearch;
use crate::status::MoveCount;
use crate::test_utils::{
    scripted_fixture, EngineFixture, ScriptedMove, ScriptedNeighbourhood, ScriptedProblem,
};

fn sum(solution: &SubsetSolution) -> f64 {
    solution.selected().iter().sum::<usize>() as f64
}

fn subset_problem(min: usize, max: usize) -> SubsetProblem {
    SubsetProblem::new(0..6, min, max, sum).unwrap()
}

fn empty_fixture(problem: SubsetProblem) -> EngineFixture<SubsetProblem, SubsetMove> {
    let mut fixture = EngineFixture::new(problem);
    let mut solution = fixture.current.solution().clone();
    solution.deselect_all();
    let evaluation = nsearch_core::Problem::evaluate(&fixture.problem, &solution);
    fixture.current = crate::solution::EvaluatedSolution::new(solution, evaluation);
    fixture
}

fn full_fixture(problem: SubsetProblem) -> EngineFixture<SubsetProblem, SubsetMove> {
    let mut fixture = EngineFixture::new(problem);
    let mut solution = fixture.current.solution().clone();
    solution.select_all();
    let evaluation = nsearch_core::Problem::evaluate(&fixture.problem, &solution);
    fixture.current = crate::solution::EvaluatedSolution::new(solution, evaluation);
    fixture
}

#[test]
fn test_steepest_descent_step() {
    let mut fixture = scripted_fixture();
    let mut strategy = SteepestDescent::new(ScriptedNeighbourhood::new(vec![
        ScriptedMove::new("small", 1.0),
        ScriptedMove::new("large", 3.0),
        ScriptedMove::new("worse", -2.0),
    ]));

    let outcome = strategy.search_step(&mut fixture.engine());

    assert_eq!(outcome, StepOutcome::Continue);
    assert_eq!(fixture.current.solution().value(), 3.0);
    assert_eq!(fixture.handle.num_accepted_moves(), MoveCount::Counted(1));
    assert_eq!(fixture.handle.num_rejected_moves(), MoveCount::Counted(0));
}

#[test]
fn test_steepest_descent_stops_in_local_optimum() {
    let mut fixture = scripted_fixture();
    let mut strategy = SteepestDescent::new(ScriptedNeighbourhood::new(vec![
        ScriptedMove::new("flat", 0.0),
        ScriptedMove::new("worse", -2.0),
        ScriptedMove::rejected("forbidden", 5.0),
    ]));

    let outcome = strategy.search_step(&mut fixture.engine());

    assert_eq!(outcome, StepOutcome::Stop);
    assert_eq!(fixture.current.solution().value(), 0.0);
    assert_eq!(fixture.handle.num_accepted_moves(), MoveCount::Counted(0));
}

#[test]
fn test_random_descent_step() {
    let mut fixture = scripted_fixture();
    let mut improving = RandomDescent::new(ScriptedNeighbourhood::new(vec![ScriptedMove::new(
        "up", 1.0,
    )]));
    let mut worsening = RandomDescent::new(ScriptedNeighbourhood::new(vec![ScriptedMove::new(
        "down", -1.0,
    )]));

    assert_eq!(improving.search_step(&mut fixture.engine()), StepOutcome::Continue);
    assert_eq!(worsening.search_step(&mut fixture.engine()), StepOutcome::Continue);
    assert_eq!(worsening.search_step(&mut fixture.engine()), StepOutcome::Continue);

    assert_eq!(fixture.current.solution().value(), 1.0);
    assert_eq!(fixture.handle.num_accepted_moves(), MoveCount::Counted(1));
    assert_eq!(fixture.handle.num_rejected_moves(), MoveCount::Counted(2));
}

#[test]
fn test_random_descent_empty_neighbourhood_stops() {
    let mut fixture = scripted_fixture();
    let mut strategy = RandomDescent::new(ScriptedNeighbourhood::default());
    assert_eq!(strategy.search_step(&mut fixture.engine()), StepOutcome::Stop);
}

#[test]
fn test_lr_requires_distinct_l_and_r() {
    assert!(matches!(LrSubsetSearch::new(1, 1), Err(SearchError::Config(_))));
    assert!(matches!(LrSubsetSearch::new(0, 0), Err(SearchError::Config(_))));

    let search = LrSubsetSearch::new(2, 1).unwrap();
    assert_eq!((search.l(), search.r()), (2, 1));
    let search = LrSubsetSearch::new(0, 3).unwrap();
    assert_eq!((search.l(), search.r()), (0, 3));
}

#[test]
fn test_lr_prepares_initial_solution() {
    let increasing = LrSubsetSearch::new(2, 1).unwrap();
    let decreasing = LrSubsetSearch::new(1, 2).unwrap();
    let mut solution = SubsetSolution::with_selection(0..4, [1, 2]).unwrap();

    SearchStrategy::<SubsetProblem>::prepare_initial_solution(&increasing, &mut solution);
    assert_eq!(solution.num_selected(), 0);

    SearchStrategy::<SubsetProblem>::prepare_initial_solution(&decreasing, &mut solution);
    assert_eq!(solution.num_selected(), 4);
}

#[test]
fn test_lr_step_adds_then_deletes() {
    let mut fixture = empty_fixture(subset_problem(0, 6));
    let mut strategy = LrSubsetSearch::new(2, 1).unwrap();

    let outcome = strategy.search_step(&mut fixture.engine());

    assert_eq!(outcome, StepOutcome::Continue);
    let expected = SubsetSolution::with_selection(0..6, [5]).unwrap();
    assert_eq!(fixture.current.solution(), &expected);
    // one compound move of two additions and one deletion
    assert_eq!(fixture.handle.num_accepted_moves(), MoveCount::Counted(3));
}

#[test]
fn test_lr_step_stops_without_candidates() {
    let mut fixture = empty_fixture(subset_problem(0, 6));
    let mut strategy = LrSubsetSearch::new(0, 1).unwrap();

    // nothing selected, nothing to delete
    let outcome = strategy.search_step(&mut fixture.engine());

    assert_eq!(outcome, StepOutcome::Stop);
    assert_eq!(fixture.handle.num_accepted_moves(), MoveCount::Counted(0));
}

#[test]
fn test_lr_step_leaves_rejected_solution_without_improvement() {
    // full selection is too large for a subset of exactly three
    let mut fixture = full_fixture(subset_problem(3, 3));
    let mut strategy = LrSubsetSearch::new(1, 2).unwrap();

    let outcome = strategy.search_step(&mut fixture.engine());

    // deletes 0 and 1, adds 1 back: same sum, one ID less
    assert_eq!(outcome, StepOutcome::Continue);
    let expected = SubsetSolution::with_selection(0..6, [1, 2, 3, 4, 5]).unwrap();
    assert_eq!(fixture.current.solution(), &expected);
    assert_eq!(fixture.current.evaluation().value(), 15.0);
    assert_eq!(fixture.handle.num_accepted_moves(), MoveCount::Counted(3));
    assert_eq!(fixture.handle.num_rejected_moves(), MoveCount::Counted(0));
}

#[test]
fn test_lr_step_requires_improvement_once_admissible() {
    let mut problem = subset_problem(0, 6);
    problem.set_minimizing();
    let mut minimizing = empty_fixture(problem);
    let mut maximizing = empty_fixture(subset_problem(0, 6));
    let mut strategy = LrSubsetSearch::new(2, 1).unwrap();

    // the empty selection is admissible and the best LR move keeps the sum at 0
    assert_eq!(strategy.search_step(&mut minimizing.engine()), StepOutcome::Stop);
    assert_eq!(minimizing.current.solution().num_selected(), 0);
    assert_eq!(minimizing.handle.num_accepted_moves(), MoveCount::Counted(0));
    assert_eq!(minimizing.handle.num_rejected_moves(), MoveCount::Counted(1));

    assert_eq!(strategy.search_step(&mut maximizing.engine()), StepOutcome::Continue);
}

fn lr_search(
    problem: SubsetProblem,
    l: usize,
    r: usize,
) -> NeighbourhoodSearch<SubsetProblem, LrSubsetSearch> {
    let mut search = NeighbourhoodSearch::new(problem, LrSubsetSearch::new(l, r).unwrap());
    search.set_random_seed(11).unwrap();
    search
}

#[test]
fn test_lr_increasing_run_finds_fixed_size_optimum() {
    let mut search = lr_search(subset_problem(3, 3), 2, 1);
    search.start().unwrap();

    let expected = SubsetSolution::with_selection(0..6, [3, 4, 5]).unwrap();
    assert_eq!(search.best_solution(), Some(&expected));
    assert_eq!(search.best_evaluation().map(|e| e.evaluation()), Some(12.0));
}

#[test]
fn test_lr_decreasing_run_minimizing() {
    let mut problem = subset_problem(3, 3);
    problem.set_minimizing();
    let mut search = lr_search(problem, 1, 2);
    search.start().unwrap();

    let expected = SubsetSolution::with_selection(0..6, [0, 1, 2]).unwrap();
    assert_eq!(search.best_solution(), Some(&expected));
    assert!(search.num_accepted_moves().count().unwrap() > 0);
}

#[test]
fn test_lr_decreasing_run_maximizing() {
    let mut search = lr_search(subset_problem(3, 3), 1, 2);
    search.start().unwrap();

    // the first steps do not improve, but leave the oversized selection
    let expected = SubsetSolution::with_selection(0..6, [3, 4, 5]).unwrap();
    assert_eq!(search.best_solution(), Some(&expected));
    assert_eq!(search.best_evaluation().map(|e| e.evaluation()), Some(12.0));
    assert_eq!(search.num_accepted_moves(), MoveCount::Counted(9));
    assert_eq!(search.num_rejected_moves(), MoveCount::Counted(1));
}

#[test]
fn test_lr_increasing_runs_minimizing() {
    let mut problem = subset_problem(3, 3);
    problem.set_minimizing();
    let mut search = lr_search(problem, 2, 1);
    search.start().unwrap();

    let expected = SubsetSolution::with_selection(0..6, [0, 1, 2]).unwrap();
    assert_eq!(search.best_solution(), Some(&expected));
    assert_eq!(search.best_evaluation().map(|e| e.evaluation()), Some(3.0));

    // a subsequent run continues from the local optimum and keeps the best
    search.start().unwrap();
    assert_eq!(search.best_solution(), Some(&expected));
    assert_eq!(search.num_accepted_moves(), MoveCount::Counted(0));
    assert_eq!(search.num_rejected_moves(), MoveCount::Counted(1));
}

#[test]
fn test_lr_run_with_unsatisfiable_constraint() {
    let mut problem = subset_problem(3, 3);
    problem.add_mandatory_constraint(NeverSatisfiedConstraint);
    let mut search = lr_search(problem, 2, 1);
    search.start().unwrap();

    assert_eq!(search.best_solution(), None);
}

#[test]
fn test_lr_run_with_penalizing_constraint() {
    let penalty = 7.8;
    let mut problem = subset_problem(3, 3);
    problem.add_penalizing_constraint(PenalizingConstraintStub::violated(penalty));
    let mut search = lr_search(problem, 2, 1);
    search.start().unwrap();

    let best: PenalizedEvaluation = search.best_evaluation().unwrap();
    assert!((best.evaluation() - 12.0).abs() < 1e-9);
    assert!((best.evaluation() - best.value() - penalty).abs() < 1e-9);
}

#[test]
fn test_subset_strategy_from_config() {
    let default = SubsetStrategy::from_config(None).unwrap();
    assert!(matches!(default, SubsetStrategy::SteepestDescent(_)));

    let random = SubsetStrategy::from_config(Some(&StrategyConfig::RandomDescent)).unwrap();
    assert_eq!(
        SearchStrategy::<SubsetProblem>::strategy_name(&random),
        "RandomDescent"
    );

    let lr = SubsetStrategy::from_config(Some(&StrategyConfig::LrSubset { l: 3, r: 1 })).unwrap();
    assert!(matches!(lr, SubsetStrategy::LrSubset(ref s) if s.l() == 3 && s.r() == 1));

    assert!(SubsetStrategy::from_config(Some(&StrategyConfig::LrSubset { l: 2, r: 2 })).is_err());
}

#[test]
fn test_subset_strategy_steepest_descent_run() {
    let strategy = SubsetStrategy::SteepestDescent(SteepestDescent::new(
        SingleSwapNeighbourhood::new(),
    ));
    let mut search = NeighbourhoodSearch::new(subset_problem(2, 2), strategy);
    search.set_random_seed(5).unwrap();
    search.start().unwrap();

    let expected = SubsetSolution::with_selection(0..6, [4, 5]).unwrap();
    assert_eq!(search.best_solution(), Some(&expected));
    assert_eq!(search.current_solution(), Some(&expected));
}

#[test]
fn test_scripted_problem_strategies_share_engine() {
    // the same fixture type serves any strategy over scripted moves
    let mut fixture: EngineFixture<ScriptedProblem, ScriptedMove> =
        EngineFixture::new(ScriptedProblem::minimizing(5.0));
    let mut strategy = SteepestDescent::new(ScriptedNeighbourhood::new(vec![
        ScriptedMove::new("down", -1.0),
        ScriptedMove::new("up", 1.0),
    ]));

    assert_eq!(strategy.search_step(&mut fixture.engine()), StepOutcome::Continue);
    assert_eq!(fixture.current.solution().value(), 4.0);
}
