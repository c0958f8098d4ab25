//! Cache Module
//!
//! Fixed-capacity key/value storage with least-recently-used eviction.

mod entry;
mod index;
mod observer;
mod recency;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{Entry, Key};
pub use index::Index;
pub use observer::{CacheObserver, TracingObserver};
pub use recency::{Handle, RecencyList};
pub use stats::CacheStats;
pub use store::{CacheSnapshot, LruCache, PutOutcome};
