//! Recency List Module
//!
//! Arena-backed doubly linked list ordering entries by recency of use.

use crate::cache::Entry;

// == Recency List ==
/// Orders entries from most recently used (head) to least recently used (tail).
///
/// Entries live in a `Vec` arena and link to each other by index, so a
/// handle returned from [`RecencyList::push_front`] can be relinked or
/// popped in O(1) without scanning. Slots released by `pop_back` are
/// recycled through a free list.
#[derive(Debug, Default)]
pub struct RecencyList {
    /// Arena of slots; `None` marks a free slot
    slots: Vec<Option<Entry>>,
    /// Free slot indices available for reuse
    free: Vec<usize>,
    /// Most recently used entry
    head: Option<usize>,
    /// Least recently used entry
    tail: Option<usize>,
    /// Number of live entries
    len: usize,
}

impl RecencyList {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty list with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    // == Push Front ==
    /// Inserts a new entry at the head and returns its handle.
    pub fn push_front(&mut self, key: String, value: String) -> usize {
        let mut entry = Entry::new(key, value);
        entry.next = self.head;

        let handle = match self.free.pop() {
            Some(handle) => {
                self.slots[handle] = Some(entry);
                handle
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        };

        match self.head {
            Some(old_head) => self.link_mut(old_head).prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
        self.len += 1;
        handle
    }

    // == Move To Front ==
    /// Marks the entry at `handle` as most recently used.
    ///
    /// Does nothing for a handle that does not refer to a live entry.
    pub fn move_to_front(&mut self, handle: usize) {
        if self.head == Some(handle) || self.get(handle).is_none() {
            return;
        }

        self.unlink(handle);

        let old_head = self.head;
        {
            let entry = self.link_mut(handle);
            entry.prev = None;
            entry.next = old_head;
        }
        match old_head {
            Some(old_head) => self.link_mut(old_head).prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
    }

    // == Touch ==
    /// Moves a live entry to the head and returns it.
    ///
    /// # Panics
    /// Panics if `handle` does not refer to a live entry. Handles held in a
    /// key index kept in step with the list always do.
    pub fn touch(&mut self, handle: usize) -> &mut Entry {
        self.move_to_front(handle);
        self.link_mut(handle)
    }

    // == Pop Back ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<Entry> {
        let handle = self.tail?;
        self.unlink(handle);

        let mut entry = self.slots[handle].take()?;
        entry.prev = None;
        entry.next = None;
        self.free.push(handle);
        self.len -= 1;
        Some(entry)
    }

    // == Peek Back ==
    /// Returns the least recently used entry without removing it.
    pub fn peek_back(&self) -> Option<&Entry> {
        self.tail.and_then(|handle| self.get(handle))
    }

    // == Accessors ==
    /// Returns the entry at `handle`, if it is live.
    pub fn get(&self, handle: usize) -> Option<&Entry> {
        self.slots.get(handle).and_then(Option::as_ref)
    }

    /// Returns the entry at `handle` mutably, if it is live.
    pub fn get_mut(&mut self, handle: usize) -> Option<&mut Entry> {
        self.slots.get_mut(handle).and_then(Option::as_mut)
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iter ==
    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    // Detaches `handle` from its neighbours, fixing up head/tail.
    fn unlink(&mut self, handle: usize) {
        let (prev, next) = match self.get(handle) {
            Some(entry) => (entry.prev, entry.next),
            None => return,
        };

        match prev {
            Some(prev) => self.link_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.link_mut(next).prev = prev,
            None => self.tail = prev,
        }
    }

    // Linked handles always point at live slots.
    fn link_mut(&mut self, handle: usize) -> &mut Entry {
        match self.slots.get_mut(handle).and_then(Option::as_mut) {
            Some(entry) => entry,
            None => unreachable!("recency list link points at a free slot"),
        }
    }
}

// == Iterator ==
/// Head-to-tail iterator over a [`RecencyList`].
pub struct Iter<'a> {
    list: &'a RecencyList,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.list.get(self.cursor?)?;
        self.cursor = entry.next;
        Some(entry)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &RecencyList) -> Vec<&str> {
        list.iter().map(|entry| entry.key.as_str()).collect()
    }

    fn push(list: &mut RecencyList, key: &str) -> usize {
        list.push_front(key.to_string(), format!("v-{}", key))
    }

    #[test]
    fn test_list_new() {
        let list = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.peek_back().is_none());
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut list = RecencyList::with_capacity(3);
        push(&mut list, "a");
        push(&mut list, "b");
        push(&mut list, "c");

        assert_eq!(list.len(), 3);
        assert_eq!(keys(&list), vec!["c", "b", "a"]);
        assert_eq!(list.peek_back().map(|e| e.key.as_str()), Some("a"));
    }

    #[test]
    fn test_move_to_front_from_tail() {
        let mut list = RecencyList::new();
        let a = push(&mut list, "a");
        push(&mut list, "b");
        push(&mut list, "c");

        list.move_to_front(a);

        assert_eq!(keys(&list), vec!["a", "c", "b"]);
        assert_eq!(list.peek_back().map(|e| e.key.as_str()), Some("b"));
    }

    #[test]
    fn test_move_to_front_from_middle() {
        let mut list = RecencyList::new();
        push(&mut list, "a");
        let b = push(&mut list, "b");
        push(&mut list, "c");

        list.move_to_front(b);

        assert_eq!(keys(&list), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_to_front_head_is_noop() {
        let mut list = RecencyList::new();
        push(&mut list, "a");
        let b = push(&mut list, "b");

        list.move_to_front(b);

        assert_eq!(keys(&list), vec!["b", "a"]);
    }

    #[test]
    fn test_move_to_front_single_entry() {
        let mut list = RecencyList::new();
        let a = push(&mut list, "a");

        list.move_to_front(a);

        assert_eq!(keys(&list), vec!["a"]);
        assert_eq!(list.pop_back().map(|e| e.key), Some("a".to_string()));
        assert!(list.is_empty());
    }

    #[test]
    fn test_move_to_front_stale_handle_is_ignored() {
        let mut list = RecencyList::new();
        push(&mut list, "a");

        list.move_to_front(42);

        assert_eq!(keys(&list), vec!["a"]);
    }

    #[test]
    fn test_pop_back_returns_least_recent() {
        let mut list = RecencyList::new();
        push(&mut list, "a");
        push(&mut list, "b");
        push(&mut list, "c");

        let popped = list.pop_back().unwrap();
        assert_eq!(popped.key, "a");
        assert_eq!(popped.value, "v-a");
        assert!(popped.is_detached());

        assert_eq!(list.pop_back().map(|e| e.key), Some("b".to_string()));
        assert_eq!(list.pop_back().map(|e| e.key), Some("c".to_string()));
        assert!(list.pop_back().is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_pop_back_frees_slot_for_reuse() {
        let mut list = RecencyList::new();
        let a = push(&mut list, "a");
        push(&mut list, "b");

        list.pop_back();
        assert!(list.get(a).is_none());

        let c = push(&mut list, "c");
        assert_eq!(c, a);
        assert_eq!(keys(&list), vec!["c", "b"]);
    }

    #[test]
    fn test_get_mut_updates_value_in_place() {
        let mut list = RecencyList::new();
        let a = push(&mut list, "a");

        if let Some(entry) = list.get_mut(a) {
            entry.value = "updated".to_string();
        }

        assert_eq!(list.get(a).map(|e| e.value.as_str()), Some("updated"));
    }

    #[test]
    fn test_touch_moves_to_front_and_returns_entry() {
        let mut list = RecencyList::new();
        let a = push(&mut list, "a");
        push(&mut list, "b");

        let entry = list.touch(a);
        assert_eq!(entry.key, "a");
        entry.value = "fresh".to_string();

        assert_eq!(keys(&list), vec!["a", "b"]);
        assert_eq!(list.get(a).map(|e| e.value.as_str()), Some("fresh"));
    }

    #[test]
    #[should_panic(expected = "free slot")]
    fn test_touch_freed_handle_panics() {
        let mut list = RecencyList::new();
        let a = push(&mut list, "a");
        push(&mut list, "b");
        list.pop_back();

        list.touch(a);
    }

    #[test]
    fn test_order_after_multiple_touches() {
        let mut list = RecencyList::new();
        let a = push(&mut list, "a");
        let b = push(&mut list, "b");
        let c = push(&mut list, "c");

        // [c, b, a] -> a -> [a, c, b] -> c -> [c, a, b] -> b -> [b, c, a]
        list.move_to_front(a);
        list.move_to_front(c);
        list.move_to_front(b);

        assert_eq!(keys(&list), vec!["b", "c", "a"]);
        assert_eq!(list.pop_back().map(|e| e.key), Some("a".to_string()));
        assert_eq!(list.pop_back().map(|e| e.key), Some("c".to_string()));
        assert_eq!(list.pop_back().map(|e| e.key), Some("b".to_string()));
    }
}
