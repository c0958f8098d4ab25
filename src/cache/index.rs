//! Index Module
//!
//! Maps keys to handles into the recency list.

use std::collections::HashMap;

use crate::cache::{Handle, Key};

// == Index ==
/// Associative lookup from key to recency list handle.
///
/// Holds no ordering information and never owns an entry.
#[derive(Debug, Default)]
pub struct Index {
    map: HashMap<Key, Handle>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the handle stored for `key`.
    pub fn lookup(&self, key: Key) -> Option<Handle> {
        self.map.get(&key).copied()
    }

    /// Maps `key` to `handle`, returning the handle it replaced.
    pub fn insert(&mut self, key: Key, handle: Handle) -> Option<Handle> {
        self.map.insert(key, handle)
    }

    pub fn remove(&mut self, key: Key) -> Option<Handle> {
        self.map.remove(&key)
    }

    pub fn contains(&self, key: Key) -> bool {
        self.map.contains_key(&key)
    }

    pub fn size(&self) -> usize {
        self.map.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Iterates `(key, handle)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, Handle)> + '_ {
        self.map.iter().map(|(&key, &handle)| (key, handle))
    }

    /// Returns every indexed key in ascending order.
    pub fn keys_sorted(&self) -> Vec<Key> {
        let mut keys: Vec<Key> = self.map.keys().copied().collect();
        keys.sort_unstable();
        keys
    }
}
