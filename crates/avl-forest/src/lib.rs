//! Height-balanced (AVL) search tree mapping integer keys to caller-owned
//! values.
//!
//! The tree is a pure ownership structure: each node owns its children
//! through `Option<Box<_>>` links, the whole tree is nothing but a root
//! [`Link`], and there are no parent pointers and no side metadata. Every
//! mutation recomputes heights bottom-up on the unwind of the recursion and
//! restores balance with at most one single or double rotation per ancestor
//! on the search path, which keeps `search`, `insert`, and `remove` at
//! O(log n).
//!
//! Values are opaque to the tree: it stores them, moves them, and hands
//! them back on removal, but never inspects them or drops them on its own
//! behalf outside of ordinary ownership.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`node`] | [`AvlNode`], [`Link`], O(1) height bookkeeping |
//! | [`ops`] | Recursive `find` / `insert` / `remove` plus rotations |
//! | [`tree`] | [`AvlTree`] owning handle and [`InsertOutcome`] |
//! | [`print`] | Depth-indented diagnostic rendering |
//! | [`verify`] | Whole-tree invariant checker used by tests |

pub mod node;
pub mod ops;
pub mod print;
pub mod tree;
pub mod verify;

pub use node::{balance_factor, height, AvlNode, Link};
pub use ops::{find, insert, remove, successor};
pub use print::print;
pub use tree::{AvlTree, InsertOutcome};
pub use verify::{assert_valid, InvariantError};
