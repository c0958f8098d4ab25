//! Cache Statistics Module
//!
//! Tracks cache usage counters including hits, misses, and evictions.

use serde::Serialize;

// == Cache Stats ==
/// Lifetime counters for a cache, plus its current size and capacity.
///
/// Counters survive `build` and `clear`; only the size and capacity follow the cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of successful reads
    pub hits: u64,
    /// Number of reads for absent keys
    pub misses: u64,
    /// Number of entries evicted due to LRU policy
    pub evictions: u64,
    /// Number of new keys admitted
    pub insertions: u64,
    /// Number of writes that replaced an existing value
    pub updates: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Current capacity of the cache
    pub capacity: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    // == Update Gauges ==
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }
}
