//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache against a naive recency-ordered model.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::cache::{Key, LruCache, PutOutcome};
use crate::error::CacheError;

// == Test Configuration ==
const KEY_SPACE: Key = 16;

// == Strategies ==
/// Small key space so sequences hit existing keys often
fn key_strategy() -> impl Strategy<Value = Key> {
    0..KEY_SPACE
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,8}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: Key, value: String },
    Get { key: Key },
    Build { capacity: i64 },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        6 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Put { key, value }),
        4 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => (-2i64..8).prop_map(|capacity| CacheOp::Build { capacity }),
        1 => Just(CacheOp::Clear),
    ]
}

// == Reference Model ==
/// Entries from most to least recently used; every operation is O(n).
#[derive(Debug, Default)]
struct Model {
    capacity: usize,
    entries: Vec<(Key, String)>,
}

impl Model {
    fn position(&self, key: Key) -> Option<usize> {
        self.entries.iter().position(|(k, _)| *k == key)
    }

    fn put(&mut self, key: Key, value: String) -> Option<Key> {
        if let Some(pos) = self.position(key) {
            self.entries.remove(pos);
            self.entries.insert(0, (key, value));
            return None;
        }
        if self.capacity == 0 {
            return None;
        }
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop().map(|(k, _)| k)
        } else {
            None
        };
        self.entries.insert(0, (key, value));
        evicted
    }

    fn get(&mut self, key: Key) -> Option<String> {
        let pos = self.position(key)?;
        let entry = self.entries.remove(pos);
        let value = entry.1.clone();
        self.entries.insert(0, entry);
        Some(value)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // For any sequence of operations the cache matches the model exactly,
    // and every structural invariant holds after each call.
    #[test]
    fn prop_matches_reference_model(
        initial in 0usize..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..120)
    ) {
        let mut cache = LruCache::with_capacity(initial);
        let mut model = Model { capacity: initial, ..Model::default() };

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    let outcome = cache.put(key, value.clone());
                    let expected_evicted = model.put(key, value);
                    match outcome {
                        PutOutcome::Evicted { evicted } => {
                            prop_assert_eq!(Some(evicted.key), expected_evicted);
                        }
                        _ => prop_assert_eq!(expected_evicted, None),
                    }
                }
                CacheOp::Get { key } => {
                    let actual = cache.get(key).map(str::to_owned);
                    match model.get(key) {
                        Some(value) => prop_assert_eq!(actual, Ok(value)),
                        None => prop_assert_eq!(actual, Err(CacheError::KeyNotFound(key))),
                    }
                }
                CacheOp::Build { capacity } => {
                    let result = cache.build(capacity);
                    if capacity < 0 {
                        prop_assert_eq!(result, Err(CacheError::InvalidCapacity(capacity)));
                    } else {
                        prop_assert!(result.is_ok());
                        model = Model { capacity: capacity as usize, ..Model::default() };
                    }
                }
                CacheOp::Clear => {
                    cache.clear();
                    model = Model::default();
                }
            }

            cache.debug_validate_invariants();
            prop_assert_eq!(cache.capacity(), model.capacity);
            let actual: Vec<(Key, String)> =
                cache.iter().map(|(k, v)| (k, v.to_string())).collect();
            prop_assert_eq!(&actual, &model.entries);
        }
    }

    // Inserting capacity + 1 distinct keys without reads evicts exactly the first.
    #[test]
    fn prop_eviction_removes_first_inserted(capacity in 1usize..32) {
        let mut cache = LruCache::with_capacity(capacity);

        for key in 0..=capacity as Key {
            cache.put(key, key.to_string());
        }

        prop_assert_eq!(cache.get(0), Err(CacheError::KeyNotFound(0)));
        for key in 1..=capacity as Key {
            let expected = key.to_string();
            prop_assert_eq!(cache.get(key), Ok(expected.as_str()));
        }
    }

    // A key read with get outlives every other held key under pressure.
    #[test]
    fn prop_promoted_key_evicted_last(capacity in 2usize..16, pick in 0usize..16) {
        let mut cache = LruCache::with_capacity(capacity);
        let promoted = (pick % capacity) as Key;

        for key in 0..capacity as Key {
            cache.put(key, "v");
        }
        cache.get(promoted).unwrap();

        for fresh in 0..(capacity - 1) as Key {
            cache.put(100 + fresh, "fresh");
            prop_assert!(cache.contains(promoted));
        }
        cache.put(1000, "last");
        prop_assert!(!cache.contains(promoted));
    }

    // Overwriting a key keeps the size and makes it most recently used.
    #[test]
    fn prop_update_in_place(
        keys in prop::collection::hash_set(key_strategy(), 1..8),
        target_pick in 0usize..8,
        value in value_strategy()
    ) {
        let keys: Vec<Key> = keys.into_iter().collect();
        let target = keys[target_pick % keys.len()];
        let mut cache = LruCache::with_capacity(keys.len());
        for &key in &keys {
            cache.put(key, "old");
        }

        let outcome = cache.put(target, value.clone());

        prop_assert_eq!(outcome, PutOutcome::Updated { previous: "old".to_string() });
        prop_assert_eq!(cache.len(), keys.len());
        prop_assert_eq!(cache.iter().next(), Some((target, value.as_str())));
    }

    // With zero capacity nothing is ever stored.
    #[test]
    fn prop_zero_capacity_stays_empty(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 0..50)
    ) {
        let mut cache = LruCache::new();
        let mut seen = HashSet::new();

        for (key, value) in entries {
            prop_assert_eq!(cache.put(key, value), PutOutcome::Rejected);
            seen.insert(key);
            prop_assert_eq!(cache.len(), 0);
        }
        for key in seen {
            prop_assert_eq!(cache.get(key), Err(CacheError::KeyNotFound(key)));
        }
    }
}
