//! Cache Entry Module
//!
//! Defines a single slot of the recency list.

// == Entry ==
/// One key-value pair stored in the recency list arena.
///
/// `prev` points towards the head (more recently used), `next` towards
/// the tail (less recently used). Both are arena handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The key this entry is indexed under
    pub key: String,
    /// The stored value
    pub value: String,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

impl Entry {
    // == Constructor ==
    /// Creates a detached entry with no neighbours.
    pub fn new(key: String, value: String) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }

    // == Is Detached ==
    /// Returns true if the entry is not linked to any neighbour.
    pub fn is_detached(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_new_is_detached() {
        let entry = Entry::new("key".to_string(), "value".to_string());
        assert_eq!(entry.key, "key");
        assert_eq!(entry.value, "value");
        assert!(entry.is_detached());
    }

    #[test]
    fn test_entry_with_links_is_not_detached() {
        let mut entry = Entry::new("key".to_string(), String::new());
        entry.next = Some(3);
        assert!(!entry.is_detached());
        assert_eq!(entry.value, "");
    }
}
