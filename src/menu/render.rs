//! Presentation of cache contents and statistics.

use anyhow::{Context, Result};

use crate::cache::{CacheStats, LruCache};
use crate::config::StateFormat;

/// Renders the memory (MRU to LRU) and index (ascending keys) of `cache`.
pub fn render_state(cache: &LruCache, format: StateFormat) -> Result<String> {
    match format {
        StateFormat::Json => {
            serde_json::to_string(&cache.snapshot()).context("failed to serialize cache state")
        }
        StateFormat::Text => {
            let memory: Vec<String> = cache
                .iter()
                .map(|(key, value)| format!("{} => {}", key, value))
                .collect();
            let index: Vec<String> = cache.index_keys().iter().map(i64::to_string).collect();
            Ok(format!(
                "Memory (most to least recent): [{}]\nIndex: [{}]",
                memory.join(", "),
                index.join(", ")
            ))
        }
    }
}

pub fn render_stats(stats: &CacheStats, format: StateFormat) -> Result<String> {
    match format {
        StateFormat::Json => {
            serde_json::to_string(stats).context("failed to serialize cache statistics")
        }
        StateFormat::Text => Ok(format!(
            "Entries: {}/{}\nHits: {}  Misses: {}  Hit rate: {:.1}%\nInsertions: {}  Updates: {}  Evictions: {}",
            stats.total_entries,
            stats.capacity,
            stats.hits,
            stats.misses,
            stats.hit_rate() * 100.0,
            stats.insertions,
            stats.updates,
            stats.evictions,
        )),
    }
}
