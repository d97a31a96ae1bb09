//! Single-slot evaluated move cache.

use std::fmt::Debug;

use super::EvaluatedMoveCache;

/// Caches the evaluation of at most one move and the rejection verdict of at
/// most one (possibly different) move.
///
/// Storing an entry for a new move evicts the previous entry of the same
/// kind. Lookups compare the key by equality.
///
/// # Example
///
/// ```
/// use nsearch_engine::cache::{EvaluatedMoveCache, SingleEvaluatedMoveCache};
///
/// let mut cache = SingleEvaluatedMoveCache::<&str, f64>::new();
/// cache.cache_move_evaluation(&"a", 1.5);
/// cache.cache_move_evaluation(&"b", 2.5);
///
/// assert_eq!(cache.cached_move_evaluation(&"a"), None);
/// assert_eq!(cache.cached_move_evaluation(&"b"), Some(2.5));
/// ```
#[derive(Debug, Clone)]
pub struct SingleEvaluatedMoveCache<M, E> {
    evaluated: Option<(M, E)>,
    validated: Option<(M, bool)>,
}

impl<M, E> SingleEvaluatedMoveCache<M, E> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            evaluated: None,
            validated: None,
        }
    }
}

impl<M, E> Default for SingleEvaluatedMoveCache<M, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, E> EvaluatedMoveCache<M, E> for SingleEvaluatedMoveCache<M, E>
where
    M: Clone + PartialEq + Send + Debug,
    E: Copy + Send + Debug,
{
    fn cache_move_evaluation(&mut self, mv: &M, evaluation: E) {
        self.evaluated = Some((mv.clone(), evaluation));
    }

    fn cached_move_evaluation(&self, mv: &M) -> Option<E> {
        match &self.evaluated {
            Some((key, evaluation)) if key == mv => Some(*evaluation),
            _ => None,
        }
    }

    fn cache_move_rejection(&mut self, mv: &M, rejected: bool) {
        self.validated = Some((mv.clone(), rejected));
    }

    fn cached_move_rejection(&self, mv: &M) -> Option<bool> {
        match &self.validated {
            Some((key, rejected)) if key == mv => Some(*rejected),
            _ => None,
        }
    }

    fn clear(&mut self) {
        self.evaluated = None;
        self.validated = None;
    }
}
