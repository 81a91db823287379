//! Diagnostic tree rendering.
//!
//! Read-only collaborator of the tree proper: it touches nothing but
//! keys, heights, and child links. The layout is reverse in-order with
//! two spaces of indent per level, so the output reads as the tree lying
//! on its side with the root at the left margin:
//!
//! ```text
//!   3 [1]
//! 2 [2]
//!   1 [1]
//! ```

use std::fmt::Write;

use crate::node::Link;

/// Renders a subtree as `key [height]` lines; `∅` for an empty tree.
pub fn print<V>(link: &Link<V>) -> String {
    if link.is_none() {
        return "∅".to_string();
    }
    let mut out = String::new();
    render(link, 0, &mut out);
    out
}

fn render<V>(link: &Link<V>, depth: usize, out: &mut String) {
    let Some(node) = link.as_deref() else { return };
    render(&node.right, depth + 1, out);
    let _ = writeln!(out, "{:indent$}{} [{}]", "", node.key, node.height, indent = depth * 2);
    render(&node.left, depth + 1, out);
}

// ── Tests ─────────────────────────────────────────────────────────────────
