//! List node and borrowing iteration

use std::fmt;

/// One cell of a singly-linked list of integers
pub struct ListNode {
    /// Stored value
    pub val: i32,

    /// Next cell, `None` at the end of the list
    pub next: Option<Box<ListNode>>,
}

impl ListNode {
    /// Create a detached node
    pub fn new(val: i32) -> Self {
        Self { val, next: None }
    }

    /// Borrow the next node
    #[inline]
    pub fn next(&self) -> Option<&ListNode> {
        self.next.as_deref()
    }

    /// Iterate values starting at this node
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: Some(self) }
    }
}

// Unlink iteratively so long lists don't blow the stack on drop.
impl Drop for ListNode {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

// Equality and formatting walk the list instead of recursing through `next`.
impl PartialEq for ListNode {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for ListNode {}

impl fmt::Debug for ListNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over list values, head to end
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    next: Option<&'a ListNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.next?;
        self.next = node.next();
        Some(node.val)
    }
}

/// Iterate an optional list head
pub fn iter(head: Option<&ListNode>) -> Iter<'_> {
    Iter { next: head }
}

/// Number of nodes reachable from `head`
pub fn len(head: Option<&ListNode>) -> usize {
    iter(head).count()
}

/// Build a list holding `values` in iteration order
pub fn from_values<I>(values: I) -> Option<Box<ListNode>>
where
    I: IntoIterator<Item = i32>,
{
    let values: Vec<i32> = values.into_iter().collect();
    let mut head = None;
    for &val in values.iter().rev() {
        let mut node = ListNode::new(val);
        node.next = head;
        head = Some(Box::new(node));
    }
    head
}
