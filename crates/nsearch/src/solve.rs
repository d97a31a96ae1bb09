//! Entry points that wire a subset problem to a configured search.

use tracing::info;

use nsearch_config::SearchConfig;
use nsearch_core::{Result, SearchError, SubsetProblem};
use nsearch_engine::{NeighbourhoodSearch, SearchBuilder, SubsetStrategy};

/// Search over a [`SubsetProblem`] with one of the built-in strategies.
pub type SubsetSearch = NeighbourhoodSearch<SubsetProblem, SubsetStrategy>;

/// Builds an idle search for `problem` from `config`.
///
/// Steepest descent over swap moves is used when no strategy is configured.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for configuration values that can never
/// be used, such as an LR search with `l == r`.
pub fn subset_search(problem: SubsetProblem, config: &SearchConfig) -> Result<SubsetSearch> {
    config
        .validate()
        .map_err(|e| SearchError::Config(e.to_string()))?;
    let strategy = SubsetStrategy::from_config(config.strategy.as_ref())?;
    SearchBuilder::new(problem, strategy).with_config(config).build()
}

/// Builds a search from `config`, runs it once and returns it.
///
/// Read the result from [`best_solution`](NeighbourhoodSearch::best_solution)
/// and the move counters of the returned search.
pub fn solve_subset(problem: SubsetProblem, config: &SearchConfig) -> Result<SubsetSearch> {
    let mut search = subset_search(problem, config)?;
    search.start()?;
    info!(
        event = "solve_complete",
        search = search.name(),
        steps = search.num_steps(),
        best = ?search.best_evaluation(),
    );
    Ok(search)
}

#[cfg(test)]
mod tests {
    use nsearch_config::{MoveCacheConfig, StrategyConfig};
    use nsearch_core::{Evaluation, SubsetSolution};
    use nsearch_engine::{MoveCount, SearchStatus};

    use super::*;

    fn weights_problem(min: usize, max: usize) -> SubsetProblem {
        // weight of item i is (i * 5) % 9, so items 7, 5 and 3 weigh 8, 7 and 6
        SubsetProblem::new(0..9, min, max, |s: &SubsetSolution| {
            s.selected().iter().map(|&i| ((i * 5) % 9) as f64).sum()
        })
        .unwrap()
    }

    fn selected(search: &SubsetSearch) -> Vec<usize> {
        search
            .best_solution()
            .map(|s| s.selected().iter().copied().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_default_config_runs_steepest_descent() {
        let config = SearchConfig::new().with_random_seed(3);
        let search = solve_subset(weights_problem(3, 3), &config).unwrap();

        assert_eq!(search.status(), SearchStatus::Idle);
        assert!(matches!(search.strategy(), SubsetStrategy::SteepestDescent(_)));
        assert_eq!(selected(&search), vec![3, 5, 7]);
        assert_eq!(search.best_evaluation().map(|e| e.value()), Some(21.0));
    }

    #[test]
    fn test_lr_strategy_from_toml() {
        let config = SearchConfig::from_toml_str(
            r#"
            name = "lr"
            random_seed = 11

            [strategy]
            type = "lr_subset"
            l = 2
            r = 1
            "#,
        )
        .unwrap();

        let search = solve_subset(weights_problem(3, 3), &config).unwrap();

        assert_eq!(search.name(), "lr");
        assert_eq!(selected(&search), vec![3, 5, 7]);
        assert!(search.num_accepted_moves().count().is_some());
    }

    #[test]
    fn test_step_limit_and_disabled_cache() {
        let config = SearchConfig::new()
            .with_random_seed(5)
            .with_move_cache(MoveCacheConfig::Disabled)
            .with_strategy(StrategyConfig::RandomDescent)
            .with_step_count_limit(25);

        let search = solve_subset(weights_problem(2, 4), &config).unwrap();

        assert_eq!(search.num_steps(), 25);
        match (search.num_accepted_moves(), search.num_rejected_moves()) {
            (MoveCount::Counted(accepted), MoveCount::Counted(rejected)) => {
                assert_eq!(accepted + rejected, 25);
            }
            other => panic!("counters not available: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_lr_config() {
        let config = SearchConfig::new().with_strategy(StrategyConfig::LrSubset { l: 2, r: 2 });

        let err = subset_search(weights_problem(3, 3), &config).unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn test_subset_search_is_idle() {
        let search = subset_search(weights_problem(3, 3), &SearchConfig::new()).unwrap();

        assert_eq!(search.status(), SearchStatus::Idle);
        assert_eq!(search.num_accepted_moves(), MoveCount::NotStarted);
        assert!(search.best_solution().is_none());
    }
}
