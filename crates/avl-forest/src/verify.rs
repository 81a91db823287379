//! Whole-tree invariant checking.
//!
//! Walks every node and cross-checks the stored heights against a fresh
//! bottom-up measurement, the AVL balance bound, and strict in-order key
//! ordering. O(n) — the mutation paths never call this; it is the backbone
//! of the test suite.

use thiserror::Error;

use crate::node::Link;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    #[error("stored height {stored} at key {key}, measured {measured}")]
    HeightMismatch { key: i64, stored: u32, measured: u32 },
    #[error("balance factor {bf} at key {key} exceeds the AVL bound")]
    BalanceViolated { key: i64, bf: i32 },
    #[error("key order violated: {prev} precedes {next} in-order")]
    OrderViolated { prev: i64, next: i64 },
}

/// Checks heights, balance, and key order over the whole subtree.
pub fn assert_valid<V>(link: &Link<V>) -> Result<(), InvariantError> {
    check_heights(link)?;
    check_order(link, &mut None)
}

fn check_heights<V>(link: &Link<V>) -> Result<u32, InvariantError> {
    let Some(node) = link.as_deref() else {
        return Ok(0);
    };
    let lh = check_heights(&node.left)?;
    let rh = check_heights(&node.right)?;
    let measured = 1 + lh.max(rh);
    if node.height != measured {
        return Err(InvariantError::HeightMismatch {
            key: node.key,
            stored: node.height,
            measured,
        });
    }
    let bf = lh as i32 - rh as i32;
    if !(-1..=1).contains(&bf) {
        return Err(InvariantError::BalanceViolated { key: node.key, bf });
    }
    Ok(measured)
}

fn check_order<V>(link: &Link<V>, prev: &mut Option<i64>) -> Result<(), InvariantError> {
    let Some(node) = link.as_deref() else {
        return Ok(());
    };
    check_order(&node.left, prev)?;
    if let Some(p) = *prev {
        if p >= node.key {
            return Err(InvariantError::OrderViolated {
                prev: p,
                next: node.key,
            });
        }
    }
    *prev = Some(node.key);
    check_order(&node.right, prev)
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::AvlNode;

    #[test]
    fn empty_tree_is_valid() {
        assert_eq!(assert_valid::<()>(&None), Ok(()));
    }

    #[test]
    fn detects_a_stale_height() {
        let mut root = AvlNode::new(2, ());
        root.left = Some(AvlNode::new(1, ()));
        // Height never refreshed after attaching the child.
        let link = Some(root);
        assert_eq!(
            assert_valid(&link),
            Err(InvariantError::HeightMismatch {
                key: 2,
                stored: 1,
                measured: 2
            })
        );
    }

    #[test]
    fn detects_an_unbalanced_spine() {
        let mut a = AvlNode::new(1, ());
        let mut b = AvlNode::new(2, ());
        let c = AvlNode::new(3, ());
        b.right = Some(c);
        b.height = 2;
        a.right = Some(b);
        a.height = 3;
        let link = Some(a);
        assert_eq!(
            assert_valid(&link),
            Err(InvariantError::BalanceViolated { key: 1, bf: -2 })
        );
    }

    #[test]
    fn detects_broken_key_order() {
        let mut root = AvlNode::new(1, ());
        root.left = Some(AvlNode::new(5, ()));
        root.right = Some(AvlNode::new(9, ()));
        root.height = 2;
        let link = Some(root);
        assert_eq!(
            assert_valid(&link),
            Err(InvariantError::OrderViolated { prev: 5, next: 1 })
        );
    }
}
