//! Owning tree handle.

use crate::node::{self, AvlNode, Link};
use crate::ops;
use crate::print;
use crate::verify::{self, InvariantError};

/// Result of [`AvlTree::insert`].
///
/// Duplicates are rejected rather than overwritten; the `Duplicate` arm
/// returns ownership of the value that was not stored, so the caller can
/// decide what to do with it.
#[derive(Debug, PartialEq, Eq)]
pub enum InsertOutcome<V> {
    Inserted,
    Duplicate(V),
}

impl<V> InsertOutcome<V> {
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted)
    }

    /// The value handed back on a duplicate, `None` when inserted.
    pub fn into_rejected(self) -> Option<V> {
        match self {
            InsertOutcome::Inserted => None,
            InsertOutcome::Duplicate(value) => Some(value),
        }
    }
}

/// A map from `i64` keys to caller-owned values, kept height-balanced.
///
/// The handle stores nothing but the root link; emptiness, heights, and
/// every other property live in the nodes themselves.
pub struct AvlTree<V> {
    root: Link<V>,
}

impl<V> AvlTree<V> {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Inserts `key` → `value`, or hands `value` back when the key is
    /// already present. O(log n).
    pub fn insert(&mut self, key: i64, value: V) -> InsertOutcome<V> {
        let (root, rejected) = ops::insert(self.root.take(), key, value);
        self.root = Some(root);
        match rejected {
            None => InsertOutcome::Inserted,
            Some(value) => InsertOutcome::Duplicate(value),
        }
    }

    /// Removes `key` and returns its value; `None` when absent. O(log n).
    pub fn remove(&mut self, key: i64) -> Option<V> {
        let (root, removed) = ops::remove(self.root.take(), key);
        self.root = root;
        removed
    }

    /// The matching node, read-only. O(log n).
    pub fn find(&self, key: i64) -> Option<&AvlNode<V>> {
        ops::find(&self.root, key)
    }

    pub fn get(&self, key: i64) -> Option<&V> {
        ops::find(&self.root, key).map(|n| &n.value)
    }

    pub fn get_mut(&mut self, key: i64) -> Option<&mut V> {
        ops::find_mut(&mut self.root, key).map(|n| &mut n.value)
    }

    pub fn has(&self, key: i64) -> bool {
        ops::find(&self.root, key).is_some()
    }

    /// Height of the whole tree, 0 when empty.
    pub fn height(&self) -> u32 {
        node::height(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node. Teardown is plain ownership: children are
    /// released before their parent, and values go down with their nodes.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Root node, for read-only walks by collaborators.
    pub fn root(&self) -> Option<&AvlNode<V>> {
        self.root.as_deref()
    }

    /// In-order traversal, ascending by key.
    pub fn for_each<F: FnMut(i64, &V)>(&self, mut f: F) {
        fn walk<V, F: FnMut(i64, &V)>(link: &Link<V>, f: &mut F) {
            let Some(node) = link.as_deref() else { return };
            walk(&node.left, f);
            f(node.key, &node.value);
            walk(&node.right, f);
        }
        walk(&self.root, &mut f);
    }

    /// Verifies heights, the AVL bound, and key order over the whole
    /// tree. O(n); meant for tests and debugging.
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        verify::assert_valid(&self.root)
    }

    /// Depth-indented rendering, see [`print`](crate::print::print).
    pub fn print(&self) -> String {
        print::print(&self.root)
    }
}

impl<V> Default for AvlTree<V> {
    fn default() -> Self {
        Self::new()
    }
}
