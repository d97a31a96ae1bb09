//! Scripted problem: every move carries a fixed value change and a fixed
//! rejection verdict.
//!
//! The problem counts how often it was asked to evaluate or check a
//! solution, so tests can tell cache hits from recomputations.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::rngs::StdRng;
use rand::Rng;

use nsearch_core::{Move, Neighbourhood, Problem, SimpleEvaluation};

/// Solution holding a single value and the rejection verdict of the last
/// applied move.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedSolution {
    value: f64,
    rejected: bool,
    undo_stack: Vec<(f64, bool)>,
}

impl ScriptedSolution {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            rejected: false,
            undo_stack: Vec::new(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_rejected(&self) -> bool {
        self.rejected
    }

    /// Number of applied moves that have not been undone.
    pub fn applied_moves(&self) -> usize {
        self.undo_stack.len()
    }
}

/// Move that adds `change` to the solution value.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedMove {
    name: &'static str,
    change: f64,
    rejected: bool,
}

impl ScriptedMove {
    /// An admissible move.
    pub fn new(name: &'static str, change: f64) -> Self {
        Self {
            name,
            change,
            rejected: false,
        }
    }

    /// A move whose neighbour violates a mandatory constraint.
    pub fn rejected(name: &'static str, change: f64) -> Self {
        Self {
            name,
            change,
            rejected: true,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn change(&self) -> f64 {
        self.change
    }
}

impl Move<ScriptedSolution> for ScriptedMove {
    fn apply(&self, solution: &mut ScriptedSolution) {
        solution
            .undo_stack
            .push((solution.value, solution.rejected));
        solution.value += self.change;
        solution.rejected = self.rejected;
    }

    fn undo(&self, solution: &mut ScriptedSolution) {
        if let Some((value, rejected)) = solution.undo_stack.pop() {
            solution.value = value;
            solution.rejected = rejected;
        }
    }
}

/// Problem evaluating a [`ScriptedSolution`] to its value.
#[derive(Debug)]
pub struct ScriptedProblem {
    initial_value: f64,
    minimizing: bool,
    evaluations: AtomicUsize,
    rejection_checks: AtomicUsize,
}

impl ScriptedProblem {
    /// A maximizing problem whose random solutions start at `initial_value`.
    pub fn new(initial_value: f64) -> Self {
        Self {
            initial_value,
            minimizing: false,
            evaluations: AtomicUsize::new(0),
            rejection_checks: AtomicUsize::new(0),
        }
    }

    /// A minimizing problem whose random solutions start at `initial_value`.
    pub fn minimizing(initial_value: f64) -> Self {
        Self {
            minimizing: true,
            ..Self::new(initial_value)
        }
    }

    /// Number of calls to `evaluate` so far.
    pub fn evaluation_count(&self) -> usize {
        self.evaluations.load(Ordering::SeqCst)
    }

    /// Number of calls to `reject_solution` so far.
    pub fn rejection_check_count(&self) -> usize {
        self.rejection_checks.load(Ordering::SeqCst)
    }

    pub fn reset_counts(&self) {
        self.evaluations.store(0, Ordering::SeqCst);
        self.rejection_checks.store(0, Ordering::SeqCst);
    }
}

impl Problem for ScriptedProblem {
    type Solution = ScriptedSolution;
    type Evaluation = SimpleEvaluation;

    fn evaluate(&self, solution: &ScriptedSolution) -> SimpleEvaluation {
        self.evaluations.fetch_add(1, Ordering::SeqCst);
        SimpleEvaluation::of(solution.value)
    }

    fn reject_solution(&self, solution: &ScriptedSolution) -> bool {
        self.rejection_checks.fetch_add(1, Ordering::SeqCst);
        solution.rejected
    }

    fn is_minimizing(&self) -> bool {
        self.minimizing
    }

    fn create_random_solution(&self, _rng: &mut StdRng) -> ScriptedSolution {
        ScriptedSolution::new(self.initial_value)
    }
}

/// Neighbourhood offering the same fixed list of moves for every solution.
#[derive(Debug, Clone, Default)]
pub struct ScriptedNeighbourhood {
    moves: Vec<ScriptedMove>,
}

impl ScriptedNeighbourhood {
    pub fn new(moves: Vec<ScriptedMove>) -> Self {
        Self { moves }
    }
}

impl Neighbourhood<ScriptedSolution> for ScriptedNeighbourhood {
    type Move = ScriptedMove;

    fn random_move(&self, _solution: &ScriptedSolution, rng: &mut StdRng) -> Option<ScriptedMove> {
        if self.moves.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.moves.len());
        Some(self.moves[index].clone())
    }

    fn all_moves(&self, _solution: &ScriptedSolution) -> Vec<ScriptedMove> {
        self.moves.clone()
    }
}
