//! Balanced output tree
//!
//! Nodes own their children outright. The index `Span` drives midpoint
//! recursion during construction; traversals inspect the finished tree.

mod node;
mod span;
mod traversal;

pub use node::TreeNode;
pub use span::Span;
pub use traversal::{
    height, height_bound, inorder, is_height_balanced, is_search_tree, is_size_balanced,
    level_order, preorder, render_levels, size, InorderIter,
};
