//! Midpoint search by pointer chasing
//!
//! A segment is the half-open node range [head, end). Its root is found with
//! slow/fast pointers that stop one step early, landing on the lower middle.

use std::ptr;

use crate::list::ListNode;
use crate::tree::TreeNode;

/// Build from the whole list
pub(super) fn build(head: Option<&ListNode>) -> Option<Box<TreeNode>> {
    build_segment(head, None)
}

fn build_segment<'a>(
    head: Option<&'a ListNode>,
    end: Option<&'a ListNode>,
) -> Option<Box<TreeNode>> {
    if same_node(head, end) {
        return None;
    }
    let head = head?;
    let mid = lower_middle(head, end);
    Some(Box::new(TreeNode::new(
        mid.val,
        build_segment(Some(head), Some(mid)),
        build_segment(mid.next(), end),
    )))
}

fn lower_middle<'a>(head: &'a ListNode, end: Option<&'a ListNode>) -> &'a ListNode {
    let mut slow = head;
    let mut fast = head;
    loop {
        let Some(step) = fast.next().filter(|n| !same_node(Some(*n), end)) else {
            break;
        };
        let Some(jump) = step.next().filter(|n| !same_node(Some(*n), end)) else {
            break;
        };
        match slow.next() {
            Some(next) => slow = next,
            None => break,
        }
        fast = jump;
    }
    slow
}

fn same_node(a: Option<&ListNode>, b: Option<&ListNode>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => ptr::eq(a, b),
        (None, None) => true,
        _ => false,
    }
}
