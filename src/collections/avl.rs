//! Set-valued AVL tree used as a secondary index
//!
//! Maps one ordered key (an author name or a keyword) to the set of article
//! titles associated with it. Insertion rebalances the path back to the
//! root; the tree defines no delete operation because indexed keys are
//! never removed.
//!
//! # Invariants Enforced
//!
//! - `height = 1 + max(height(left), height(right))` for every node
//! - balance factor `height(left) - height(right)` stays within [-1, 1]
//! - title sets collapse duplicates and preserve first-seen order

use std::borrow::Borrow;
use std::collections::HashSet;

/// An insertion-ordered title set: a sequence for order plus a companion
/// membership set for the duplicate check.
#[derive(Debug, Default)]
struct TitleSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl TitleSet {
    fn with_title(title: &str) -> Self {
        let mut set = Self::default();
        set.insert(title);
        set
    }

    /// Adds a title; a duplicate leaves the set unchanged.
    fn insert(&mut self, title: &str) {
        if self.seen.insert(title.to_string()) {
            self.order.push(title.to_string());
        }
    }

    fn as_slice(&self) -> &[String] {
        &self.order
    }
}

struct AvlNode<K> {
    key: K,
    titles: TitleSet,
    left: Option<Box<AvlNode<K>>>,
    right: Option<Box<AvlNode<K>>>,
    height: i32,
}

impl<K> AvlNode<K> {
    fn new(key: K, title: &str) -> Self {
        Self {
            key,
            titles: TitleSet::with_title(title),
            left: None,
            right: None,
            height: 1,
        }
    }

    fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }
}

fn height<K>(node: &Option<Box<AvlNode<K>>>) -> i32 {
    node.as_ref().map_or(0, |n| n.height)
}

/// A height-balanced binary search tree mapping keys to title sets.
pub struct AvlTree<K> {
    root: Option<Box<AvlNode<K>>>,
    key_count: usize,
}

impl<K: Ord> AvlTree<K> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: None,
            key_count: 0,
        }
    }

    /// Inserts `title` into the set held under `key`.
    ///
    /// A new key creates a one-title node; an existing key grows its set
    /// (no-op for a duplicate title). Rebalances on the way back up.
    pub fn insert(&mut self, key: K, title: &str) {
        let root = self.root.take();
        let mut inserted_key = false;
        self.root = Some(Self::insert_node(root, key, title, &mut inserted_key));
        if inserted_key {
            self.key_count += 1;
        }
    }

    /// Returns the titles associated with `key`, in first-seen order.
    ///
    /// An absent key yields an empty slice, never an error.
    pub fn titles_for<Q>(&self, key: &Q) -> &[String]
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match key.cmp(node.key.borrow()) {
                std::cmp::Ordering::Equal => return node.titles.as_slice(),
                std::cmp::Ordering::Less => node.left.as_deref(),
                std::cmp::Ordering::Greater => node.right.as_deref(),
            };
        }
        &[]
    }

    /// Returns all keys in ascending order.
    pub fn in_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.key_count);
        Self::walk_in_order(&self.root, &mut keys);
        keys
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.key_count
    }

    /// True when the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.key_count == 0
    }

    fn insert_node(
        node: Option<Box<AvlNode<K>>>,
        key: K,
        title: &str,
        inserted_key: &mut bool,
    ) -> Box<AvlNode<K>> {
        let mut node = match node {
            None => {
                *inserted_key = true;
                return Box::new(AvlNode::new(key, title));
            }
            Some(node) => node,
        };

        match key.cmp(&node.key) {
            std::cmp::Ordering::Less => {
                node.left = Some(Self::insert_node(node.left.take(), key, title, inserted_key));
            }
            std::cmp::Ordering::Greater => {
                node.right = Some(Self::insert_node(node.right.take(), key, title, inserted_key));
            }
            std::cmp::Ordering::Equal => {
                node.titles.insert(title);
                return node;
            }
        }

        node.update_height();
        Self::rebalance(node)
    }

    /// Restores the balance invariant at `node` after an insertion below it.
    ///
    /// Cases checked in order: left-left, right-right, left-right, right-left.
    fn rebalance(node: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
        let bf = node.balance_factor();

        if bf > 1 && height_balance(&node.left) >= 0 {
            return Self::rotate_right(node);
        }
        if bf < -1 && height_balance(&node.right) <= 0 {
            return Self::rotate_left(node);
        }
        if bf > 1 && height_balance(&node.left) < 0 {
            let mut node = node;
            if let Some(left) = node.left.take() {
                node.left = Some(Self::rotate_left(left));
            }
            return Self::rotate_right(node);
        }
        if bf < -1 && height_balance(&node.right) > 0 {
            let mut node = node;
            if let Some(right) = node.right.take() {
                node.right = Some(Self::rotate_right(right));
            }
            return Self::rotate_left(node);
        }

        node
    }

    /// Single right rotation. Reassigns three links and refreshes the two
    /// affected heights; title sets are untouched.
    fn rotate_right(mut y: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
        match y.left.take() {
            Some(mut x) => {
                y.left = x.right.take();
                y.update_height();
                x.right = Some(y);
                x.update_height();
                x
            }
            // Only reachable on a broken balance factor; leave the node as-is.
            None => y,
        }
    }

    /// Single left rotation, mirror of [`Self::rotate_right`].
    fn rotate_left(mut x: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
        match x.right.take() {
            Some(mut y) => {
                x.right = y.left.take();
                x.update_height();
                y.left = Some(x);
                y.update_height();
                y
            }
            None => x,
        }
    }

    fn walk_in_order<'a>(node: &'a Option<Box<AvlNode<K>>>, keys: &mut Vec<&'a K>) {
        if let Some(node) = node {
            Self::walk_in_order(&node.left, keys);
            keys.push(&node.key);
            Self::walk_in_order(&node.right, keys);
        }
    }
}

fn height_balance<K>(node: &Option<Box<AvlNode<K>>>) -> i32 {
    node.as_ref().map_or(0, |n| n.balance_factor())
}

impl<K: Ord> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}
