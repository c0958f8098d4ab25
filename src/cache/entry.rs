//! Cache Entry Module
//!
//! Defines the key/value pair stored in each recency list slot.

use serde::Serialize;

/// Key type accepted by the cache.
pub type Key = i64;

// == Cache Entry ==
/// A single cached key/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Key identifying the entry
    pub key: Key,
    /// The stored value
    pub value: String,
}

impl Entry {
    // == Constructor ==
    /// Creates a new entry.
    pub fn new(key: Key, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    // == Replace Value ==
    /// Swaps in a new value and returns the old one.
    pub fn replace_value(&mut self, value: String) -> String {
        std::mem::replace(&mut self.value, value)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = Entry::new(3, "three");
        assert_eq!(entry.key, 3);
        assert_eq!(entry.value, "three");
    }

    #[test]
    fn test_entry_replace_value() {
        let mut entry = Entry::new(3, "old");
        let previous = entry.replace_value("new".to_string());

        assert_eq!(previous, "old");
        assert_eq!(entry.value, "new");
        assert_eq!(entry.key, 3);
    }
}
