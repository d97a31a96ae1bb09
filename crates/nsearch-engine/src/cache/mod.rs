//! Evaluated move cache.
//!
//! A cache maps a move, interpreted against the current solution, to its
//! previously computed evaluation and/or rejection verdict. Entries carry no
//! solution key: the cache is cleared whenever the current solution changes,
//! so only entries for the live current solution are ever present.

mod single;

#[cfg(test)]
mod tests;

use std::fmt::Debug;

pub use single::SingleEvaluatedMoveCache;

/// Cache of evaluations and rejection verdicts of moves applied to the
/// current solution.
///
/// Absence of an entry is never an error. Implementations may forget entries
/// at any time; callers always fall back to recomputing.
///
/// # Type Parameters
/// * `M` - The move type used as key
/// * `E` - The evaluation type
pub trait EvaluatedMoveCache<M, E>: Send + Debug {
    /// Stores or overwrites the evaluation of the given move.
    fn cache_move_evaluation(&mut self, mv: &M, evaluation: E);

    /// Returns the cached evaluation of the given move, if present.
    fn cached_move_evaluation(&self, mv: &M) -> Option<E>;

    /// Stores or overwrites the rejection verdict of the given move.
    fn cache_move_rejection(&mut self, mv: &M, rejected: bool);

    /// Returns the cached rejection verdict of the given move, if present.
    fn cached_move_rejection(&self, mv: &M) -> Option<bool>;

    /// Discards all entries.
    fn clear(&mut self);
}

/// Boxed cache as installed in a search.
pub type BoxedMoveCache<M, E> = Box<dyn EvaluatedMoveCache<M, E>>;
