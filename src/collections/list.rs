//! Singly linked list used as the query-results container
//!
//! Deliberately minimal: tail append walks the list, membership and removal
//! are linear scans. Result sets are small, so simplicity wins over an
//! amortized tail pointer.

use std::fmt;

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// An insertion-ordered singly linked list.
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Appends a value at the tail.
    ///
    /// O(n): walks to the tail on every call.
    pub fn push_back(&mut self, value: T) {
        let node = Box::new(Node { value, next: None });
        let mut cursor = &mut self.head;
        while let Some(current) = cursor {
            cursor = &mut current.next;
        }
        *cursor = Some(node);
        self.len += 1;
    }

    /// Returns the value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`. Out-of-range access is a caller bug,
    /// not a recoverable condition.
    pub fn get(&self, index: usize) -> &T {
        if index >= self.len {
            panic!(
                "index out of range: the len is {} but the index is {}",
                self.len, index
            );
        }
        let mut cursor = self.head.as_deref();
        for _ in 0..index {
            cursor = cursor.and_then(|node| node.next.as_deref());
        }
        match cursor {
            Some(node) => &node.value,
            // Unreachable: the bounds check above guarantees a node exists.
            None => panic!("list shorter than its recorded length"),
        }
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a fresh forward iterator starting at the head.
    ///
    /// Each call restarts the traversal; iterators do not resume.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Linear membership test.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Removes the first value equal to `value`.
    ///
    /// Returns true if a value was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut cursor = &mut self.head;
        loop {
            match cursor.take() {
                None => return false,
                Some(mut node) => {
                    if node.value == *value {
                        *cursor = node.next.take();
                        self.len -= 1;
                        return true;
                    }
                    *cursor = Some(node);
                    match cursor {
                        Some(node) => cursor = &mut node.next,
                        // Unreachable: the node was just put back.
                        None => return false,
                    }
                }
            }
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

/// Forward iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_back_preserves_order() {
        let mut list = LinkedList::new();
        list.push_back("a");
        list.push_back("b");
        list.push_back("c");

        assert_eq!(list.len(), 3);
        assert_eq!(*list.get(0), "a");
        assert_eq!(*list.get(1), "b");
        assert_eq!(*list.get(2), "c");
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn test_get_out_of_range_panics() {
        let mut list = LinkedList::new();
        list.push_back(1);
        list.get(1);
    }

    #[test]
    fn test_contains() {
        let mut list = LinkedList::new();
        list.push_back(10);
        list.push_back(20);

        assert!(list.contains(&10));
        assert!(list.contains(&20));
        assert!(!list.contains(&30));
    }

    #[test]
    fn test_remove_first_match() {
        let mut list = LinkedList::new();
        list.push_back("x");
        list.push_back("y");
        list.push_back("x");

        assert!(list.remove(&"x"));
        assert_eq!(list.len(), 2);
        assert_eq!(*list.get(0), "y");
        assert_eq!(*list.get(1), "x");
    }

    #[test]
    fn test_remove_head() {
        let mut list = LinkedList::new();
        list.push_back(1);
        list.push_back(2);

        assert!(list.remove(&1));
        assert_eq!(list.len(), 1);
        assert_eq!(*list.get(0), 2);
    }

    #[test]
    fn test_remove_missing_returns_false() {
        let mut list: LinkedList<i32> = LinkedList::new();
        assert!(!list.remove(&5));
        list.push_back(1);
        assert!(!list.remove(&5));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_iter_restarts_from_head() {
        let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();

        let first: Vec<_> = list.iter().copied().collect();
        let second: Vec<_> = list.iter().copied().collect();

        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_list() {
        let list: LinkedList<String> = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
    }
}
