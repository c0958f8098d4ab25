//! Cache Observer Module
//!
//! Optional hooks a collaborator can attach to watch the cache mutate.
//! The cache itself performs no I/O.

use tracing::{debug, info};

use crate::cache::Key;

// == Observer Trait ==
/// Receives notifications about cache mutations.
///
/// All methods default to no-ops so implementors override only what they need.
pub trait CacheObserver {
    /// A new key was admitted.
    fn on_insert(&mut self, _key: Key) {}

    /// An existing key had its value replaced.
    fn on_update(&mut self, _key: Key) {}

    /// A read moved `key` to the most recently used position.
    fn on_promote(&mut self, _key: Key) {}

    /// The least recently used entry was dropped to make room.
    fn on_evict(&mut self, _key: Key, _value: &str) {}

    /// The cache was rebuilt with `capacity`, discarding `discarded` entries.
    fn on_reset(&mut self, _capacity: usize, _discarded: usize) {}
}

// == Tracing Observer ==
/// Forwards every cache event to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CacheObserver for TracingObserver {
    fn on_insert(&mut self, key: Key) {
        debug!(key, "entry inserted");
    }

    fn on_update(&mut self, key: Key) {
        debug!(key, "entry updated");
    }

    fn on_promote(&mut self, key: Key) {
        debug!(key, "entry promoted");
    }

    fn on_evict(&mut self, key: Key, value: &str) {
        info!(key, value, "cache full, evicted least recently used entry");
    }

    fn on_reset(&mut self, capacity: usize, discarded: usize) {
        info!(capacity, discarded, "cache rebuilt");
    }
}
