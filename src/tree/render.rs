//! Render
//!
//! Plain text rendering of a fitted tree. Each internal node prints its
//! failing branch, then its passing branch, one space of indentation per
//! level:
//!
//! ```text
//! |- X1 is not fashion
//!  |- X2 is not professional
//!   [0]
//!  |- X2 is professional
//!   [1]
//! |- X1 is fashion
//!  [0]
//! ```
use crate::node::Node;
use crate::tree::core::DecisionTree;
use std::fmt;

fn write_node(f: &mut fmt::Formatter, node: &Node, depth: usize) -> fmt::Result {
    let indent = " ".repeat(depth);
    match node {
        Node::Leaf(leaf) => writeln!(f, "{}[{}]", indent, leaf.label),
        Node::Internal(internal) => {
            let (no, yes) = internal.operators();
            let feature = internal.feature() + 1;
            writeln!(f, "{}|- X{} {} {}", indent, feature, no, internal.value())?;
            if let Some(left) = internal.left() {
                write_node(f, left, depth + 1)?;
            }
            writeln!(f, "{}|- X{} {} {}", indent, feature, yes, internal.value())?;
            if let Some(right) = internal.right() {
                write_node(f, right, depth + 1)?;
            }
            Ok(())
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_node(f, self, 0)
    }
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.root() {
            Some(root) => write!(f, "{}", root),
            None => writeln!(f, "<unfitted tree>"),
        }
    }
}
