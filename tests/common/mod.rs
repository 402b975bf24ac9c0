#![allow(dead_code)]

use listree::{list, ListNode, TreeNode};

/// Owned list head built from `values`
pub fn list_of(values: &[i32]) -> Option<Box<ListNode>> {
    list::from_values(values.iter().copied())
}

/// Compact rendering of an optional root (`-` for an empty tree)
pub fn render(root: Option<&TreeNode>) -> String {
    root.map_or_else(|| "-".to_string(), |node| node.to_string())
}

/// Structure only: values dropped, absent children kept
pub fn shape(root: Option<&TreeNode>) -> String {
    match root {
        None => "-".to_string(),
        Some(node) if node.is_leaf() => "*".to_string(),
        Some(node) => format!("*({},{})", shape(node.left()), shape(node.right())),
    }
}
