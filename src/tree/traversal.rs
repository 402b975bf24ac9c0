//! Traversals and structural checks
//!
//! Walks and checks keep explicit stacks instead of recursing, so
//! caller-built degenerate trees are handled as well as balanced ones.

use std::collections::VecDeque;

use super::TreeNode;

/// In-order iterator (left, root, right)
#[derive(Debug, Clone)]
pub struct InorderIter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> InorderIter<'a> {
    /// Start walking at `root`
    pub fn new(root: Option<&'a TreeNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a> Iterator for InorderIter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.val)
    }
}

/// Values in in-order sequence
pub fn inorder(root: Option<&TreeNode>) -> Vec<i32> {
    InorderIter::new(root).collect()
}

/// Values in pre-order sequence (root, left, right)
pub fn preorder(root: Option<&TreeNode>) -> Vec<i32> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        out.push(node.val);
        // Right first so left is popped first
        stack.extend(node.right());
        stack.extend(node.left());
    }
    out
}

/// Values grouped by depth, root level first
pub fn level_order(root: Option<&TreeNode>) -> Vec<Vec<i32>> {
    let mut levels = Vec::new();
    let mut queue: VecDeque<&TreeNode> = root.into_iter().collect();
    while !queue.is_empty() {
        let width = queue.len();
        let mut level = Vec::with_capacity(width);
        for _ in 0..width {
            if let Some(node) = queue.pop_front() {
                level.push(node.val);
                queue.extend(node.left());
                queue.extend(node.right());
            }
        }
        levels.push(level);
    }
    levels
}

/// Number of nodes on the longest root-to-leaf path (empty tree = 0)
pub fn height(root: Option<&TreeNode>) -> usize {
    fold_postorder(root, |left, right| Some(1 + left.max(right))).unwrap_or(0)
}

/// Total number of nodes
pub fn size(root: Option<&TreeNode>) -> usize {
    InorderIter::new(root).count()
}

/// Every node's subtree sizes differ by at most one
pub fn is_size_balanced(root: Option<&TreeNode>) -> bool {
    fold_postorder(root, |left, right| {
        (left.abs_diff(right) <= 1).then_some(left + right + 1)
    })
    .is_some()
}

/// Every node's subtree heights differ by at most one
pub fn is_height_balanced(root: Option<&TreeNode>) -> bool {
    fold_postorder(root, |left, right| {
        (left.abs_diff(right) <= 1).then_some(1 + left.max(right))
    })
    .is_some()
}

enum Visit<'a> {
    Enter(Option<&'a TreeNode>),
    Exit,
}

/// Bottom-up fold with an explicit stack; empty subtrees contribute 0.
/// `combine` returning `None` aborts the whole fold.
fn fold_postorder<F>(root: Option<&TreeNode>, combine: F) -> Option<usize>
where
    F: Fn(usize, usize) -> Option<usize>,
{
    let mut work = vec![Visit::Enter(root)];
    let mut results: Vec<usize> = Vec::new();
    while let Some(visit) = work.pop() {
        match visit {
            Visit::Enter(None) => results.push(0),
            Visit::Enter(Some(node)) => {
                work.push(Visit::Exit);
                work.push(Visit::Enter(node.right()));
                work.push(Visit::Enter(node.left()));
            }
            Visit::Exit => {
                let right = results.pop()?;
                let left = results.pop()?;
                results.push(combine(left, right)?);
            }
        }
    }
    results.pop()
}

/// In-order sequence is non-decreasing
pub fn is_search_tree(root: Option<&TreeNode>) -> bool {
    let mut iter = InorderIter::new(root);
    let Some(mut previous) = iter.next() else {
        return true;
    };
    for value in iter {
        if value < previous {
            return false;
        }
        previous = value;
    }
    true
}

/// Upper bound on height for `len` values: ⌈log2(len + 1)⌉
#[inline]
pub fn height_bound(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()) as usize
}

/// One line per depth, values separated by spaces
pub fn render_levels(root: Option<&TreeNode>) -> String {
    level_order(root)
        .iter()
        .map(|level| {
            level
                .iter()
                .map(i32::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(val: i32, left: Option<TreeNode>, right: Option<TreeNode>) -> TreeNode {
        TreeNode::new(val, left.map(Box::new), right.map(Box::new))
    }

    // 3(1(-,2),4(-,5))
    fn sample() -> TreeNode {
        node(
            3,
            Some(node(1, None, Some(TreeNode::leaf(2)))),
            Some(node(4, None, Some(TreeNode::leaf(5)))),
        )
    }

    #[test]
    fn test_orders() {
        let root = sample();
        assert_eq!(inorder(Some(&root)), vec![1, 2, 3, 4, 5]);
        assert_eq!(preorder(Some(&root)), vec![3, 1, 2, 4, 5]);
        assert_eq!(level_order(Some(&root)), vec![vec![3], vec![1, 4], vec![2, 5]]);
        assert_eq!(render_levels(Some(&root)), "3\n1 4\n2 5");
    }

    #[test]
    fn test_measurements() {
        let root = sample();
        assert_eq!(height(Some(&root)), 3);
        assert_eq!(size(Some(&root)), 5);
        assert_eq!(height(None), 0);
        assert_eq!(size(None), 0);
    }

    #[test]
    fn test_height_bound() {
        assert_eq!(height_bound(0), 0);
        assert_eq!(height_bound(1), 1);
        assert_eq!(height_bound(2), 2);
        assert_eq!(height_bound(3), 2);
        assert_eq!(height_bound(4), 3);
        assert_eq!(height_bound(7), 3);
        assert_eq!(height_bound(8), 4);
    }

    #[test]
    fn test_balance_checks() {
        let root = sample();
        assert!(is_size_balanced(Some(&root)));
        assert!(is_height_balanced(Some(&root)));

        let chain = node(1, None, Some(node(2, None, Some(TreeNode::leaf(3)))));
        assert!(!is_size_balanced(Some(&chain)));
        assert!(!is_height_balanced(Some(&chain)));
    }

    #[test]
    fn test_search_tree_check() {
        assert!(is_search_tree(Some(&sample())));
        assert!(is_search_tree(None));

        let swapped = node(2, Some(TreeNode::leaf(3)), Some(TreeNode::leaf(1)));
        assert!(!is_search_tree(Some(&swapped)));
    }

    #[test]
    fn test_deep_chain_without_overflow() {
        let mut chain: Option<Box<TreeNode>> = None;
        for val in (0..200_000).rev() {
            chain = Some(Box::new(TreeNode::new(val, None, chain)));
        }
        let root = chain.as_deref();
        assert_eq!(height(root), 200_000);
        assert_eq!(size(root), 200_000);
        assert!(!is_size_balanced(root));
        assert!(!is_height_balanced(root));
        assert!(is_search_tree(root));
        drop(chain);
    }
}
