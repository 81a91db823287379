//! Recursive tree operations: lookup, insertion, removal, rotations.
//!
//! All functions here consume and return [`Link`]s or node boxes rather
//! than taking a tree handle, so each recursion level hands ownership of
//! its subtree down and receives the (possibly rotated) replacement root
//! back on the unwind. [`AvlTree`](crate::tree::AvlTree) wraps these into
//! a method surface.

use std::cmp::Ordering;
use std::mem;

use crate::node::{balance_factor, height, update_height, AvlNode, Link};

/// Promotes `node.left`; the demoted `node` becomes the new root's right
/// child. Only called when the balance check has already established that
/// the left child exists.
fn rotate_right<V>(mut node: Box<AvlNode<V>>) -> Box<AvlNode<V>> {
    let mut pivot = node.left.take().expect("left child exists");
    node.left = pivot.right.take();
    update_height(&mut node);
    pivot.right = Some(node);
    update_height(&mut pivot);
    pivot
}

/// Mirror image of [`rotate_right`]: promotes `node.right`.
fn rotate_left<V>(mut node: Box<AvlNode<V>>) -> Box<AvlNode<V>> {
    let mut pivot = node.right.take().expect("right child exists");
    node.right = pivot.left.take();
    update_height(&mut node);
    pivot.left = Some(node);
    update_height(&mut pivot);
    pivot
}

/// Double rotation for a left subtree that is itself right-heavy.
fn rotate_left_right<V>(mut node: Box<AvlNode<V>>) -> Box<AvlNode<V>> {
    let left = node.left.take().expect("left child exists");
    node.left = Some(rotate_left(left));
    rotate_right(node)
}

/// Double rotation for a right subtree that is itself left-heavy.
fn rotate_right_left<V>(mut node: Box<AvlNode<V>>) -> Box<AvlNode<V>> {
    let right = node.right.take().expect("right child exists");
    node.right = Some(rotate_right(right));
    rotate_left(node)
}

/// Refreshes `node.height` and applies at most one rotation (single or
/// double) to restore the AVL bound at this node.
///
/// Runs at every ancestor on the unwind path of [`insert`] and [`remove`].
/// One local pass per ancestor is sufficient: a single mutation changes
/// any subtree height by at most 1, so no node can be out of balance by
/// more than 2 at the moment it is examined.
fn rebalance<V>(mut node: Box<AvlNode<V>>) -> Box<AvlNode<V>> {
    update_height(&mut node);
    let bf = balance_factor(&node);
    if bf > 1 {
        let x = node.left.as_deref().expect("left child exists");
        if height(&x.left) >= height(&x.right) {
            rotate_right(node)
        } else {
            rotate_left_right(node)
        }
    } else if bf < -1 {
        let x = node.right.as_deref().expect("right child exists");
        if height(&x.left) <= height(&x.right) {
            rotate_left(node)
        } else {
            rotate_right_left(node)
        }
    } else {
        node
    }
}

/// Plain BST descent. No side effects, no rebalancing.
pub fn find<V>(link: &Link<V>, key: i64) -> Option<&AvlNode<V>> {
    let node = link.as_deref()?;
    match key.cmp(&node.key) {
        Ordering::Equal => Some(node),
        Ordering::Less => find(&node.left, key),
        Ordering::Greater => find(&node.right, key),
    }
}

/// Mutable variant of [`find`], used to hand out `&mut V`.
pub fn find_mut<V>(link: &mut Link<V>, key: i64) -> Option<&mut AvlNode<V>> {
    let node = link.as_deref_mut()?;
    match key.cmp(&node.key) {
        Ordering::Equal => Some(node),
        Ordering::Less => find_mut(&mut node.left, key),
        Ordering::Greater => find_mut(&mut node.right, key),
    }
}

/// In-order successor: the leftmost node of `node.right`, or `None` when
/// `node` has no right subtree.
pub fn successor<V>(node: &AvlNode<V>) -> Option<&AvlNode<V>> {
    let mut curr = node.right.as_deref()?;
    while let Some(next) = curr.left.as_deref() {
        curr = next;
    }
    Some(curr)
}

/// Inserts `key`/`value` into the subtree and returns the new subtree
/// root together with the rejected value when `key` was already present.
///
/// A duplicate key leaves the subtree untouched: the existing entry keeps
/// its value and the caller gets the new value back. The unwind skips the
/// rebalance step in that case, since heights along the path are still
/// valid.
pub fn insert<V>(link: Link<V>, key: i64, value: V) -> (Box<AvlNode<V>>, Option<V>) {
    let Some(mut node) = link else {
        return (AvlNode::new(key, value), None);
    };
    match key.cmp(&node.key) {
        Ordering::Equal => (node, Some(value)),
        Ordering::Less => {
            let (child, rejected) = insert(node.left.take(), key, value);
            node.left = Some(child);
            if rejected.is_some() {
                return (node, rejected);
            }
            (rebalance(node), None)
        }
        Ordering::Greater => {
            let (child, rejected) = insert(node.right.take(), key, value);
            node.right = Some(child);
            if rejected.is_some() {
                return (node, rejected);
            }
            (rebalance(node), None)
        }
    }
}

/// Removes `key` from the subtree and returns the new subtree root
/// together with the evicted value, `None` when the key was absent.
///
/// Rebalancing runs at every ancestor on the unwind: one removal can
/// shrink subtree heights along the whole path, so unlike insertion the
/// rotations may cascade up several levels.
pub fn remove<V>(link: Link<V>, key: i64) -> (Link<V>, Option<V>) {
    let Some(mut node) = link else {
        return (None, None);
    };
    match key.cmp(&node.key) {
        Ordering::Less => {
            let (child, removed) = remove(node.left.take(), key);
            node.left = child;
            if removed.is_none() {
                return (Some(node), None);
            }
            (Some(rebalance(node)), removed)
        }
        Ordering::Greater => {
            let (child, removed) = remove(node.right.take(), key);
            node.right = child;
            if removed.is_none() {
                return (Some(node), None);
            }
            (Some(rebalance(node)), removed)
        }
        Ordering::Equal => remove_root(node),
    }
}

/// Detaches the matched node itself.
fn remove_root<V>(mut node: Box<AvlNode<V>>) -> (Link<V>, Option<V>) {
    if node.left.is_none() {
        // Covers the leaf case too. The lifted child subtree keeps its
        // own height; only ancestors need refreshing.
        let child = node.right.take();
        return (child, Some(node.value));
    }
    if node.right.is_none() {
        let child = node.left.take();
        return (child, Some(node.value));
    }
    // Two children: promote the in-order successor into this node in
    // place (no reallocation of the node that stays), then evict the
    // successor's old slot from the right subtree.
    let succ_key = successor(&node).expect("two-child node has a successor").key;
    let (right, succ_value) = remove(node.right.take(), succ_key);
    node.right = right;
    node.key = succ_key;
    let removed = mem::replace(
        &mut node.value,
        succ_value.expect("successor was present in the right subtree"),
    );
    (Some(rebalance(node)), Some(removed))
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::assert_valid;

    fn build(keys: &[i64]) -> Link<i64> {
        let mut root: Link<i64> = None;
        for &k in keys {
            let (node, rejected) = insert(root, k, k * 10);
            assert!(rejected.is_none());
            root = Some(node);
        }
        root
    }

    fn key_of(link: &Link<i64>) -> i64 {
        link.as_deref().expect("node exists").key
    }

    #[test]
    fn ascending_ladder_triggers_single_left_rotation() {
        let root = build(&[1, 2, 3]);
        let node = root.as_deref().unwrap();
        assert_eq!(node.key, 2);
        assert_eq!(node.height, 2);
        assert_eq!(key_of(&node.left), 1);
        assert_eq!(key_of(&node.right), 3);
        assert_eq!(height(&node.left), 1);
        assert_eq!(height(&node.right), 1);
    }

    #[test]
    fn descending_ladder_triggers_single_right_rotation() {
        let root = build(&[3, 2, 1]);
        let node = root.as_deref().unwrap();
        assert_eq!(node.key, 2);
        assert_eq!(key_of(&node.left), 1);
        assert_eq!(key_of(&node.right), 3);
    }

    #[test]
    fn zigzag_insertions_take_the_double_rotations() {
        // Left subtree right-heavy: 3, 1, 2 ends with a left-right.
        let root = build(&[3, 1, 2]);
        assert_eq!(key_of(&root), 2);
        assert_valid(&root).unwrap();

        // Right subtree left-heavy: 1, 3, 2 ends with a right-left.
        let root = build(&[1, 3, 2]);
        assert_eq!(key_of(&root), 2);
        assert_valid(&root).unwrap();
    }

    #[test]
    fn duplicate_insert_returns_value_and_leaves_tree_alone() {
        let root = build(&[2, 1, 3]);
        let (root, rejected) = insert(root, 3, 999);
        assert_eq!(rejected, Some(999));
        let root = Some(root);
        assert_eq!(find(&root, 3).map(|n| n.value), Some(30));
        assert_valid(&root).unwrap();
    }

    #[test]
    fn find_descends_both_ways() {
        let root = build(&[5, 3, 8, 1, 4, 7, 9]);
        for k in [1, 3, 4, 5, 7, 8, 9] {
            assert_eq!(find(&root, k).map(|n| n.value), Some(k * 10));
        }
        assert_eq!(find(&root, 6).map(|n| n.value), None);
        assert_eq!(find(&None::<Box<AvlNode<i64>>>, 6).map(|n| n.key), None);
    }

    #[test]
    fn successor_is_leftmost_of_right_subtree() {
        let root = build(&[5, 3, 8, 1, 4, 7, 9]);
        let node = root.as_deref().unwrap();
        assert_eq!(node.key, 5);
        assert_eq!(successor(node).map(|n| n.key), Some(7));

        let leaf = find(&root, 9).unwrap();
        assert!(successor(leaf).is_none());
    }

    #[test]
    fn removing_a_leaf() {
        let root = build(&[2, 1, 3]);
        let (root, removed) = remove(root, 1);
        assert_eq!(removed, Some(10));
        assert_eq!(key_of(&root), 2);
        assert!(root.as_deref().unwrap().left.is_none());
        assert_valid(&root).unwrap();
    }

    #[test]
    fn removing_a_one_child_node_lifts_the_child() {
        let root = build(&[2, 1, 3, 4]);
        let (root, removed) = remove(root, 3);
        assert_eq!(removed, Some(30));
        let node = root.as_deref().unwrap();
        assert_eq!(node.key, 2);
        assert_eq!(key_of(&node.right), 4);
        assert_valid(&root).unwrap();
    }

    #[test]
    fn removing_a_two_child_root_promotes_the_successor() {
        let root = build(&[2, 1, 3]);
        let (root, removed) = remove(root, 2);
        assert_eq!(removed, Some(20));
        let node = root.as_deref().unwrap();
        assert_eq!(node.key, 3);
        assert_eq!(node.value, 30);
        assert_eq!(key_of(&node.left), 1);
        assert!(node.right.is_none());
        assert_valid(&root).unwrap();
    }

    #[test]
    fn removing_an_absent_key_is_a_no_op() {
        let root = build(&[2, 1, 3]);
        let (root, removed) = remove(root, 42);
        assert!(removed.is_none());
        assert_eq!(key_of(&root), 2);
        assert_valid(&root).unwrap();
    }

    #[test]
    fn removal_rebalances_every_ancestor() {
        // Deleting from the shallow side forces rotations on the unwind.
        let root = build(&[8, 4, 12, 2, 6, 10, 14, 1, 3, 5, 9, 13, 15, 16]);
        let (mut root, removed) = remove(root, 6);
        assert_eq!(removed, Some(60));
        assert_valid(&root).unwrap();
        for k in [2, 1, 3, 5, 4] {
            let (next, removed) = remove(root, k);
            assert!(removed.is_some());
            root = next;
            assert_valid(&root).unwrap();
        }
    }
}
