//! Node type and O(1) height bookkeeping.

/// An owned subtree: `None` for an absent child, `Some` for a node box.
pub type Link<V> = Option<Box<AvlNode<V>>>;

/// A single tree node.
///
/// `height` counts nodes on the longest path from this node down to a
/// leaf, inclusive, so a leaf has height 1 and an absent subtree counts
/// as 0. The field is maintained eagerly by the mutation paths in
/// [`ops`](crate::ops); readers may trust it without re-measuring.
#[derive(Debug)]
pub struct AvlNode<V> {
    pub key: i64,
    pub value: V,
    pub height: u32,
    pub left: Link<V>,
    pub right: Link<V>,
}

impl<V> AvlNode<V> {
    /// Allocates a fresh leaf.
    pub fn new(key: i64, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        })
    }
}

/// Stored height of a subtree, 0 for an absent one. Never traverses.
#[inline]
pub fn height<V>(link: &Link<V>) -> u32 {
    match link {
        None => 0,
        Some(node) => node.height,
    }
}

/// Recomputes `node.height` from the children's stored heights.
///
/// Must run bottom-up after any structural change beneath `node`, before
/// the balance of `node` itself is inspected.
#[inline]
pub fn update_height<V>(node: &mut AvlNode<V>) {
    node.height = 1 + height(&node.left).max(height(&node.right));
}

/// `height(left) - height(right)`. Computed on demand, never stored.
#[inline]
pub fn balance_factor<V>(node: &AvlNode<V>) -> i32 {
    height(&node.left) as i32 - height(&node.right) as i32
}

// ── Tests ─────────────────────────────────────────────────────────────────
