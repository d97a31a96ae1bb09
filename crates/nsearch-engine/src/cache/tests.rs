use super::*;

type TestCache = SingleEvaluatedMoveCache<u32, f64>;

#[test]
fn test_empty_cache_misses() {
    let cache = TestCache::new();
    assert_eq!(cache.cached_move_evaluation(&1), None);
    assert_eq!(cache.cached_move_rejection(&1), None);
}

#[test]
fn test_evaluation_hit_and_miss() {
    let mut cache = TestCache::new();
    cache.cache_move_evaluation(&1, 4.0);

    assert_eq!(cache.cached_move_evaluation(&1), Some(4.0));
    assert_eq!(cache.cached_move_evaluation(&2), None);
    // evaluations and rejections are independent slots
    assert_eq!(cache.cached_move_rejection(&1), None);
}

#[test]
fn test_overwrite_same_move() {
    let mut cache = TestCache::new();
    cache.cache_move_evaluation(&1, 4.0);
    cache.cache_move_evaluation(&1, 5.0);
    assert_eq!(cache.cached_move_evaluation(&1), Some(5.0));
}

#[test]
fn test_new_move_evicts_previous() {
    let mut cache = TestCache::new();
    cache.cache_move_evaluation(&1, 4.0);
    cache.cache_move_rejection(&1, true);

    cache.cache_move_evaluation(&2, 7.0);
    assert_eq!(cache.cached_move_evaluation(&1), None);
    assert_eq!(cache.cached_move_evaluation(&2), Some(7.0));
    // rejection slot still holds move 1
    assert_eq!(cache.cached_move_rejection(&1), Some(true));

    cache.cache_move_rejection(&3, false);
    assert_eq!(cache.cached_move_rejection(&1), None);
    assert_eq!(cache.cached_move_rejection(&3), Some(false));
}

#[test]
fn test_slots_may_hold_different_moves() {
    let mut cache = TestCache::new();
    cache.cache_move_evaluation(&1, 4.0);
    cache.cache_move_rejection(&2, false);

    assert_eq!(cache.cached_move_evaluation(&1), Some(4.0));
    assert_eq!(cache.cached_move_rejection(&2), Some(false));
}

#[test]
fn test_clear() {
    let mut cache = TestCache::new();
    cache.cache_move_evaluation(&1, 4.0);
    cache.cache_move_rejection(&1, false);

    cache.clear();
    assert_eq!(cache.cached_move_evaluation(&1), None);
    assert_eq!(cache.cached_move_rejection(&1), None);
}

#[test]
fn test_boxed_as_trait_object() {
    let mut cache: BoxedMoveCache<u32, f64> = Box::new(TestCache::default());
    cache.cache_move_rejection(&9, true);
    assert_eq!(cache.cached_move_rejection(&9), Some(true));
}
