//! Mini LRU - A fixed-capacity key/value store
//!
//! Provides constant-time lookup, insertion, promotion and least-recently-used
//! eviction, plus an interactive text menu to drive it.

pub mod cache;
pub mod config;
pub mod error;
pub mod menu;

pub use cache::{LruCache, PutOutcome};
pub use config::Config;
pub use error::{CacheError, Result};
pub use menu::Menu;
