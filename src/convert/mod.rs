//! Sorted list → height-balanced search tree
//!
//! Default strategy flattens the list into a `Vec<i32>` (one pass) and then
//! recurses on index spans, rooting each span at its lower midpoint.
//! The alternative strategies build the identical tree without the vector.

mod streaming;
mod two_pointer;

use tracing::{debug, instrument};

use crate::list::{self, ListNode};
use crate::tree::{self, Span, TreeNode};
use crate::ConvertError;

/// Construction strategy
///
/// All strategies yield structurally identical trees for the same input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Flatten to a vector, then midpoint recursion (O(n) time, O(n) space)
    #[default]
    Flatten,

    /// Count, then in-order simulation over the list cursor (O(n) time, no vector)
    Streaming,

    /// Slow/fast pointer search for each segment's midpoint (O(n log n) time)
    TwoPointer,
}

/// Configuration parameters for conversion
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    /// How the tree is built
    pub strategy: Strategy,

    /// Reject input that is not non-decreasing
    pub check_sorted: bool,
}

impl ConvertConfig {
    /// Default configuration: flatten strategy, sortedness assumed
    pub fn new() -> Self {
        Self::default()
    }

    /// Select construction strategy
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable the sortedness precondition check
    pub fn with_sorted_check(mut self, enabled: bool) -> Self {
        self.check_sorted = enabled;
        self
    }
}

/// Result of a conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Root of the new tree, `None` for an empty list
    pub root: Option<Box<TreeNode>>,

    /// Number of values converted
    pub len: usize,

    /// Height of the produced tree
    pub height: usize,
}

impl Conversion {
    /// Theoretical height bound: ⌈log2(len + 1)⌉
    pub fn height_bound(&self) -> usize {
        tree::height_bound(self.len)
    }

    /// Verify result satisfies the height bound
    pub fn satisfies_bound(&self) -> bool {
        self.height <= self.height_bound()
    }

    /// Take ownership of the tree
    pub fn into_root(self) -> Option<Box<TreeNode>> {
        self.root
    }
}

/// Conversion driver
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    /// Create converter with the given configuration
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Convert the list starting at `head`
    ///
    /// Fails only when `check_sorted` is enabled and a value is smaller than
    /// its predecessor.
    #[instrument(level = "debug", skip(self, head), fields(strategy = ?self.config.strategy))]
    pub fn run(&self, head: Option<&ListNode>) -> Result<Conversion, ConvertError> {
        if self.config.check_sorted {
            check_sorted(head)?;
        }

        let (root, len) = match self.config.strategy {
            Strategy::Flatten => {
                let values = flatten(head);
                debug!(len = values.len(), "flattened list");
                (build_range(&values, Span::full(values.len())), values.len())
            }
            Strategy::Streaming => {
                let len = list::len(head);
                (streaming::build(head, len), len)
            }
            Strategy::TwoPointer => (two_pointer::build(head), list::len(head)),
        };

        let height = tree::height(root.as_deref());
        debug!(len, height, "built balanced tree");

        Ok(Conversion { root, len, height })
    }
}

/// Convert a sorted list into a height-balanced search tree
///
/// Total: an empty list yields `None`. Sortedness is assumed, not verified;
/// unsorted input still yields a balanced tree over the same in-order sequence.
pub fn convert(head: Option<&ListNode>) -> Option<Box<TreeNode>> {
    let values = flatten(head);
    build_range(&values, Span::full(values.len()))
}

/// Build the subtree for `values[span]`
///
/// Empty span → `None`. Otherwise the value at `span.midpoint()` becomes the
/// root, with the spans before and after it as left and right subtrees.
pub fn build_range(values: &[i32], span: Span) -> Option<Box<TreeNode>> {
    if span.is_empty() {
        return None;
    }
    if span.is_leaf() {
        return Some(Box::new(TreeNode::leaf(values[span.start])));
    }

    let (left, mid, right) = span.split();
    Some(Box::new(TreeNode::new(
        values[mid],
        build_range(values, left),
        build_range(values, right),
    )))
}

fn flatten(head: Option<&ListNode>) -> Vec<i32> {
    head.into_iter().flat_map(ListNode::iter).collect()
}

fn check_sorted(head: Option<&ListNode>) -> Result<(), ConvertError> {
    let mut values = list::iter(head);
    let Some(mut previous) = values.next() else {
        return Ok(());
    };
    for (offset, next) in values.enumerate() {
        if next < previous {
            return Err(ConvertError::Unsorted {
                index: offset + 1,
                previous,
                next,
            });
        }
        previous = next;
    }
    Ok(())
}
