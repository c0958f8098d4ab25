//! Error types for the LRU cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

use crate::cache::Key;

// == Cache Error Enum ==
/// Unified error type for cache operations.
///
/// Every variant is recoverable: the cache is left untouched when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key not present in the cache
    #[error("Key not found: {0}")]
    KeyNotFound(Key),

    /// Capacity passed to `build` was negative
    #[error("Invalid capacity: {0} (must be non-negative)")]
    InvalidCapacity(i64),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CacheError::KeyNotFound(7).to_string(), "Key not found: 7");
        assert_eq!(
            CacheError::InvalidCapacity(-3).to_string(),
            "Invalid capacity: -3 (must be non-negative)"
        );
    }
}
