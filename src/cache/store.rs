//! Cache Store Module
//!
//! Main cache engine keeping the index and the recency list in lockstep
//! behind a fixed capacity.

use std::fmt;

use serde::Serialize;

use crate::cache::{CacheObserver, CacheStats, Entry, Index, Key, RecencyList};
use crate::error::{CacheError, Result};

/// Upper bound on slots reserved up front; larger caches grow on demand.
const PREALLOC_LIMIT: usize = 1024;

// == Put Outcome ==
/// What a `put` did to the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutOutcome {
    /// A new key was admitted without evicting anything
    Inserted,
    /// The key was already present; its old value is returned
    Updated { previous: String },
    /// A new key was admitted after evicting the least recently used entry
    Evicted { evicted: Entry },
    /// Capacity is zero, so nothing was stored
    Rejected,
}

// == Snapshot ==
/// Point-in-time view of the cache contents, for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheSnapshot {
    pub capacity: usize,
    /// Entries from most to least recently used
    pub entries: Vec<Entry>,
    /// Indexed keys in ascending order
    pub index: Vec<Key>,
}

// == LRU Cache ==
/// Fixed-capacity key/value store with least-recently-used eviction.
///
/// Every operation is O(1) apart from `build`/`clear`, which release all entries.
pub struct LruCache {
    /// Entries ordered by recency; owns the data
    list: RecencyList,
    /// Key to list handle lookup
    index: Index,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Usage counters
    stats: CacheStats,
    /// Optional mutation hooks
    observer: Option<Box<dyn CacheObserver>>,
}

impl LruCache {
    // == Constructor ==
    /// Creates a cache with capacity zero, which admits nothing until `build`.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty cache holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut stats = CacheStats::new();
        stats.set_capacity(capacity);
        let reserve = capacity.min(PREALLOC_LIMIT);
        Self {
            list: RecencyList::with_capacity(reserve),
            index: Index::with_capacity(reserve),
            capacity,
            stats,
            observer: None,
        }
    }

    // == Observer ==
    /// Attaches an observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: Box<dyn CacheObserver>) {
        self.observer = Some(observer);
    }

    /// Detaches and returns the current observer.
    pub fn take_observer(&mut self) -> Option<Box<dyn CacheObserver>> {
        self.observer.take()
    }

    // == Build ==
    /// Discards every entry and sets a new capacity.
    ///
    /// A negative capacity is rejected and leaves the cache untouched.
    pub fn build(&mut self, capacity: i64) -> Result<()> {
        let capacity =
            usize::try_from(capacity).map_err(|_| CacheError::InvalidCapacity(capacity))?;
        self.reset(capacity);
        Ok(())
    }

    // == Clear ==
    /// Empties the cache. Same as `build(0)`: the capacity drops to zero too.
    pub fn clear(&mut self) {
        self.reset(0);
    }

    // == Put ==
    /// Stores a value under `key`.
    ///
    /// An existing key is updated in place and promoted. A new key evicts the
    /// least recently used entry first when the cache is full.
    pub fn put(&mut self, key: Key, value: impl Into<String>) -> PutOutcome {
        let value = value.into();

        if let Some(handle) = self.index.lookup(key) {
            if let Some(entry) = self.list.get_mut(handle) {
                let previous = entry.replace_value(value);
                self.list.move_to_front(handle);
                self.stats.record_update();
                self.notify(|observer| observer.on_update(key));
                return PutOutcome::Updated { previous };
            }
        }

        if self.capacity == 0 {
            return PutOutcome::Rejected;
        }

        let evicted = if self.list.len() >= self.capacity {
            self.evict_lru()
        } else {
            None
        };

        let handle = self.list.push_front(Entry::new(key, value));
        self.index.insert(key, handle);
        self.stats.record_insertion();
        self.stats.set_total_entries(self.list.len());
        self.notify(|observer| observer.on_insert(key));

        match evicted {
            Some(evicted) => PutOutcome::Evicted { evicted },
            None => PutOutcome::Inserted,
        }
    }

    // == Get ==
    /// Returns the value for `key` and marks it most recently used.
    pub fn get(&mut self, key: Key) -> Result<&str> {
        let handle = match self.index.lookup(key) {
            Some(handle) if self.list.move_to_front(handle) => handle,
            _ => {
                self.stats.record_miss();
                return Err(CacheError::KeyNotFound(key));
            }
        };

        self.stats.record_hit();
        self.notify(|observer| observer.on_promote(key));

        self.list
            .get(handle)
            .map(|entry| entry.value.as_str())
            .ok_or(CacheError::KeyNotFound(key))
    }

    // == Read-only Accessors ==
    /// Returns the value for `key` without touching recency or stats.
    pub fn peek(&self, key: Key) -> Option<&str> {
        self.index
            .lookup(key)
            .and_then(|handle| self.list.get(handle))
            .map(|entry| entry.value.as_str())
    }

    /// Returns the entry that the next eviction would remove.
    pub fn peek_lru(&self) -> Option<&Entry> {
        self.list.peek_tail()
    }

    pub fn contains(&self, key: Key) -> bool {
        self.index.contains(key)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Iterates `(key, value)` pairs from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = (Key, &str)> + '_ {
        self.list
            .iter()
            .map(|entry| (entry.key, entry.value.as_str()))
    }

    /// Returns all indexed keys in ascending order.
    pub fn index_keys(&self) -> Vec<Key> {
        self.index.keys_sorted()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    pub fn snapshot(&self) -> CacheSnapshot {
        CacheSnapshot {
            capacity: self.capacity,
            entries: self.list.iter().cloned().collect(),
            index: self.index.keys_sorted(),
        }
    }

    fn reset(&mut self, capacity: usize) {
        let discarded = self.list.len();
        self.list.clear();
        self.index.clear();
        self.capacity = capacity;
        self.stats.set_capacity(capacity);
        self.stats.set_total_entries(0);
        self.notify(|observer| observer.on_reset(capacity, discarded));
    }

    fn evict_lru(&mut self) -> Option<Entry> {
        let evicted = self.list.remove_tail()?;
        self.index.remove(evicted.key);
        self.stats.record_eviction();
        self.notify(|observer| observer.on_evict(evicted.key, &evicted.value));
        Some(evicted)
    }

    fn notify(&mut self, event: impl FnOnce(&mut dyn CacheObserver)) {
        if let Some(observer) = self.observer.as_deref_mut() {
            event(observer);
        }
    }

    /// Panics if the index and the recency list disagree in any way.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        use std::collections::HashSet;

        self.list.debug_validate_invariants();
        assert_eq!(self.list.len(), self.index.size(), "size mismatch");
        assert!(
            self.list.len() <= self.capacity,
            "size {} exceeds capacity {}",
            self.list.len(),
            self.capacity
        );

        let mut handles = HashSet::new();
        for (key, handle) in self.index.iter() {
            let entry = self.list.get(handle).expect("index points at empty slot");
            assert_eq!(entry.key, key, "index handle points at wrong entry");
            assert!(handles.insert(handle), "two keys share a handle");
        }

        let mut keys = HashSet::new();
        for entry in self.list.iter() {
            assert!(keys.insert(entry.key), "duplicate key {}", entry.key);
            assert!(self.index.contains(entry.key), "unindexed key {}", entry.key);
        }

        assert_eq!(self.stats.total_entries, self.list.len());
        assert_eq!(self.stats.capacity, self.capacity);
    }
}

impl Default for LruCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LruCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.list.len())
            .field("stats", &self.stats)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
