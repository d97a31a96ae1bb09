//! Tests for termination conditions.

use std::time::Duration;

use nsearch_config::TerminationConfig;

use super::*;

fn scope_after(steps: u64, improved_at: Option<u64>) -> RunScope {
    let mut scope = RunScope::new();
    scope.start();
    for step in 1..=steps {
        scope.record_step(Some(step) == improved_at);
    }
    scope
}

#[test]
fn test_step_count_termination() {
    let term = StepCountTermination::new(3);
    assert!(!term.is_terminated(&scope_after(0, None)));
    assert!(!term.is_terminated(&scope_after(2, None)));
    assert!(term.is_terminated(&scope_after(3, None)));
}

#[test]
fn test_time_termination() {
    let zero = TimeTermination::new(Duration::ZERO);
    let long = TimeTermination::seconds(3600);
    let scope = scope_after(0, None);

    assert!(zero.is_terminated(&scope));
    assert!(!long.is_terminated(&scope));
    // clock not started
    assert!(!zero.is_terminated(&RunScope::new()));
}

#[test]
fn test_unimproved_step_count_termination() {
    let term = UnimprovedStepCountTermination::new(2);
    assert!(!term.is_terminated(&scope_after(3, Some(2))));
    assert!(term.is_terminated(&scope_after(4, Some(2))));
}

#[test]
fn test_or_termination() {
    let term = OrTermination::new(vec![
        Box::new(StepCountTermination::new(10)) as Box<dyn Termination>,
        Box::new(UnimprovedStepCountTermination::new(2)),
    ]);
    assert!(!term.is_terminated(&scope_after(1, None)));
    assert!(term.is_terminated(&scope_after(2, None)));
    assert!(!OrTermination::new(Vec::new()).is_terminated(&scope_after(5, None)));
}

#[test]
fn test_from_config_empty() {
    assert!(from_config(&TerminationConfig::default()).is_none());
}

#[test]
fn test_from_config_single_limit() {
    let config = TerminationConfig {
        step_count_limit: Some(2),
        ..TerminationConfig::default()
    };
    let term = from_config(&config).unwrap();
    assert!(!term.is_terminated(&scope_after(1, None)));
    assert!(term.is_terminated(&scope_after(2, None)));
}

#[test]
fn test_from_config_combined_limits() {
    let config = TerminationConfig {
        seconds_spent_limit: Some(3600),
        step_count_limit: Some(100),
        unimproved_step_count_limit: Some(3),
        ..TerminationConfig::default()
    };
    let term = from_config(&config).unwrap();
    assert!(format!("{term:?}").contains("OrTermination"));
    assert!(term.is_terminated(&scope_after(3, None)));
    assert!(!term.is_terminated(&scope_after(3, Some(3))));
}
