//! # Sorted List → Height-Balanced BST
//!
//! Converts a sorted singly-linked list of integers into a binary search tree
//! whose in-order traversal reproduces the list and whose height is at most
//! ⌈log2(n + 1)⌉.
//!
//! ## Core Algorithm
//!
//! 1. **Flatten**: walk the list once into an index-addressable `Vec<i32>`
//! 2. **Midpoint split**: root each span [start, end) at ⌊(start + last) / 2⌋
//! 3. **Recurse**: left span before the root, right span after it
//!
//! Result: O(n) time, O(n) auxiliary values, O(log n) recursion depth
//!
//! ## Usage Example
//!
//! ```
//! use listree::{convert, list, tree};
//!
//! let head = list::from_values([1, 2, 3, 4, 5]);
//! let root = convert(head.as_deref());
//! assert_eq!(tree::inorder(root.as_deref()), vec![1, 2, 3, 4, 5]);
//! assert_eq!(root.map(|r| r.to_string()), Some("3(1(-,2),4(-,5))".to_string()));
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod convert; // List → tree construction strategies
pub mod list;    // Singly-linked input list
pub mod tree;    // Owned output tree, spans, traversals

// Re-exports for convenience
pub use convert::{build_range, convert, Conversion, ConvertConfig, Converter, Strategy};
pub use list::ListNode;
pub use tree::{Span, TreeNode};

use thiserror::Error;

/// Errors that can occur during checked conversion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Input violated the non-decreasing precondition
    #[error("list is not sorted: value {next} at index {index} follows {previous}")]
    Unsorted {
        /// Index of the first out-of-order value
        index: usize,
        /// Value preceding it
        previous: i32,
        /// Out-of-order value
        next: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_converts_to_none() {
        assert!(convert(None).is_none());
    }

    #[test]
    fn test_error_message() {
        let err = ConvertError::Unsorted {
            index: 2,
            previous: 9,
            next: 4,
        };
        assert_eq!(
            err.to_string(),
            "list is not sorted: value 4 at index 2 follows 9"
        );
    }
}
