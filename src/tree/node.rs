//! Owned binary tree node
//!
//! Each node exclusively owns its children; no parent links.

use std::fmt;

/// Binary search tree node
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct TreeNode {
    /// Stored value
    pub val: i32,

    /// Subtree of values ordered before `val`
    pub left: Option<Box<TreeNode>>,

    /// Subtree of values ordered after `val`
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Create a node with the given children
    pub fn new(val: i32, left: Option<Box<TreeNode>>, right: Option<Box<TreeNode>>) -> Self {
        Self { val, left, right }
    }

    /// Create a childless node
    pub fn leaf(val: i32) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Borrow left child
    #[inline]
    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    /// Borrow right child
    #[inline]
    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }
}

// Unlink iteratively so deep caller-built trees don't blow the stack on drop.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Compact rendering: leaf = `v`, inner = `v(left,right)`, absent child = `-`
impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            return write!(f, "{}", self.val);
        }
        write!(f, "{}(", self.val)?;
        fmt_child(self.left(), f)?;
        write!(f, ",")?;
        fmt_child(self.right(), f)?;
        write!(f, ")")
    }
}

fn fmt_child(child: Option<&TreeNode>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match child {
        Some(node) => write!(f, "{}", node),
        None => write!(f, "-"),
    }
}
