//! Per-run bookkeeping.

use std::time::{Duration, Instant};

/// Step statistics of one run, consulted by termination conditions.
#[derive(Debug, Clone, Default)]
pub struct RunScope {
    start_time: Option<Instant>,
    step_count: u64,
    steps_since_improvement: u64,
}

impl RunScope {
    /// Creates a scope for a run that has not started its clock yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the start of the run.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.step_count = 0;
        self.steps_since_improvement = 0;
    }

    /// Records a completed step.
    pub fn record_step(&mut self, improved_best: bool) {
        self.step_count += 1;
        if improved_best {
            self.steps_since_improvement = 0;
        } else {
            self.steps_since_improvement += 1;
        }
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn steps_since_improvement(&self) -> u64 {
        self.steps_since_improvement
    }

    /// Returns the time since [`start`](RunScope::start), if started.
    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }
}
