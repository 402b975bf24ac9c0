//! In-order simulation over the list cursor
//!
//! Left subtree gets ⌊(len-1)/2⌋ values, then the root is taken from the
//! cursor, then the right subtree gets the rest: the same sizes as the
//! lower-midpoint split, consumed in list order.

use crate::list::{self, ListNode};
use crate::tree::TreeNode;

/// Build from a list whose length is already known
pub(super) fn build(head: Option<&ListNode>, len: usize) -> Option<Box<TreeNode>> {
    let mut cursor = list::iter(head);
    build_sized(&mut cursor, len)
}

fn build_sized<I>(cursor: &mut I, len: usize) -> Option<Box<TreeNode>>
where
    I: Iterator<Item = i32>,
{
    if len == 0 {
        return None;
    }
    let left_len = (len - 1) / 2;
    let left = build_sized(cursor, left_len);
    // `len` was counted from the same list, so the cursor is never short
    let val = cursor.next()?;
    let right = build_sized(cursor, len - 1 - left_len);
    Some(Box::new(TreeNode::new(val, left, right)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::from_values;

    #[test]
    fn test_streaming_shape() {
        let head = from_values([1, 2, 3, 4, 5]);
        let root = build(head.as_deref(), 5).unwrap();
        assert_eq!(root.to_string(), "3(1(-,2),4(-,5))");
    }

    #[test]
    fn test_streaming_empty() {
        assert!(build(None, 0).is_none());
    }
}
