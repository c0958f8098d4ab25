//! Recency List Module
//!
//! Doubly linked list of cache entries ordered from most to least recently
//! used. Nodes live in a slot arena and link to each other through [`Handle`]s,
//! so every splice is O(1) and no handle can dangle into freed memory.
//!
//! ```text
//!   slots: Vec<Option<Node>>          free: [3]
//!   ┌───┬──────────────────────────────────────┐
//!   │ 0 │ Node { key: 7, prev: None, next: 2 } │  <- head (MRU)
//!   │ 1 │ Node { key: 4, prev: 2, next: None } │  <- tail (LRU)
//!   │ 2 │ Node { key: 9, prev: 0, next: 1 }    │
//!   │ 3 │ None                                 │
//!   └───┴──────────────────────────────────────┘
//! ```

use crate::cache::Entry;

// == Handle ==
/// Stable reference to a slot in the recency list.
///
/// A handle stays valid until its entry is removed; the slot may then be
/// reused by a later insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(usize);

#[derive(Debug)]
struct Node {
    entry: Entry,
    prev: Option<Handle>,
    next: Option<Handle>,
}

// == Recency List ==
/// Arena-backed recency ordering.
///
/// - Head = Most recently used
/// - Tail = Least recently used
#[derive(Debug, Default)]
pub struct RecencyList {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<Handle>,
    tail: Option<Handle>,
    len: usize,
}

impl RecencyList {
    // == Constructor ==
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    // == Push Front ==
    /// Inserts an entry at the head and returns its handle.
    pub fn push_front(&mut self, entry: Entry) -> Handle {
        let node = Node {
            entry,
            prev: None,
            next: self.head,
        };
        let handle = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                Handle(idx)
            }
            None => {
                self.slots.push(Some(node));
                Handle(self.slots.len() - 1)
            }
        };

        match self.head {
            Some(old_head) => {
                if let Some(node) = self.node_mut(old_head) {
                    node.prev = Some(handle);
                }
            }
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
        self.len += 1;
        handle
    }

    // == Move To Front ==
    /// Promotes an entry to the head.
    ///
    /// Returns `false` if `handle` does not refer to a live entry.
    pub fn move_to_front(&mut self, handle: Handle) -> bool {
        if self.node(handle).is_none() {
            return false;
        }
        if self.head == Some(handle) {
            return true;
        }
        self.detach(handle);
        self.attach_front(handle);
        true
    }

    // == Remove ==
    /// Unlinks an entry and returns it, freeing its slot.
    pub fn remove(&mut self, handle: Handle) -> Option<Entry> {
        self.node(handle)?;
        self.detach(handle);
        let node = self.slots.get_mut(handle.0)?.take()?;
        self.free.push(handle.0);
        self.len -= 1;
        Some(node.entry)
    }

    // == Remove Tail ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the list is empty.
    pub fn remove_tail(&mut self) -> Option<Entry> {
        let tail = self.tail?;
        self.remove(tail)
    }

    // == Peek Tail ==
    /// Returns the least recently used entry without removing it.
    pub fn peek_tail(&self) -> Option<&Entry> {
        self.tail.and_then(|handle| self.get(handle))
    }

    /// Returns the most recently used entry.
    pub fn peek_head(&self) -> Option<&Entry> {
        self.head.and_then(|handle| self.get(handle))
    }

    // == Accessors ==
    pub fn get(&self, handle: Handle) -> Option<&Entry> {
        self.node(handle).map(|node| &node.entry)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut Entry> {
        self.node_mut(handle).map(|node| &mut node.entry)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    // == Clear ==
    /// Drops every entry and releases all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    fn node(&self, handle: Handle) -> Option<&Node> {
        self.slots.get(handle.0).and_then(|slot| slot.as_ref())
    }

    fn node_mut(&mut self, handle: Handle) -> Option<&mut Node> {
        self.slots.get_mut(handle.0).and_then(|slot| slot.as_mut())
    }

    fn detach(&mut self, handle: Handle) {
        let (prev, next) = match self.node(handle) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev) => {
                if let Some(node) = self.node_mut(prev) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next) => {
                if let Some(node) = self.node_mut(next) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(handle) {
            node.prev = None;
            node.next = None;
        }
    }

    fn attach_front(&mut self, handle: Handle) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(handle) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(old_head) => {
                if let Some(node) = self.node_mut(old_head) {
                    node.prev = Some(handle);
                }
            }
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
    }

    /// Walks the list and panics if any link is inconsistent.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none(), "head set on empty list");
            assert!(self.tail.is_none(), "tail set on empty list");
            assert_eq!(self.len, 0);
            return;
        }
        assert!(self.peek_head().is_some(), "head slot is empty");
        assert!(self.peek_tail().is_some(), "tail slot is empty");

        let mut seen = std::collections::HashSet::new();
        let mut prev = None;
        let mut current = self.head;
        let mut count = 0usize;

        while let Some(handle) = current {
            assert!(seen.insert(handle), "cycle at slot {}", handle.0);
            let node = self.node(handle).expect("linked slot is empty");
            assert_eq!(node.prev, prev, "broken prev link at slot {}", handle.0);
            if node.next.is_none() {
                assert_eq!(self.tail, Some(handle), "tail does not end the chain");
            }
            prev = Some(handle);
            current = node.next;
            count += 1;
            assert!(count <= self.len);
        }

        assert_eq!(count, self.len);
        let live = self.slots.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(live, self.len);
        assert_eq!(live + self.free.len(), self.slots.len());
    }
}

// == Iterator ==
/// Iterator over entries from most to least recently used.
pub struct Iter<'a> {
    list: &'a RecencyList,
    current: Option<Handle>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.current?)?;
        self.current = node.next;
        Some(&node.entry)
    }
}
