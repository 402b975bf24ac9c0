//! Index span over the flattened values
//!
//! Span = half-open range [start, end) ⊆ [0, n)
//! Root of a span via lower midpoint: m = start + ⌊(len - 1) / 2⌋
//!   Left subtree: [start, m)
//!   Right subtree: [m+1, end)

/// Range of value indices covered by one subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// First index (inclusive)
    pub start: usize,

    /// One past the last index (exclusive)
    pub end: usize,
}

impl Span {
    /// Create span [start, end)
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span covering `len` values
    pub fn full(len: usize) -> Self {
        Self { start: 0, end: len }
    }

    /// No values covered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Exactly one value covered
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.len() == 1
    }

    /// Number of values covered
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Index of the subtree root
    ///
    /// Equal to ⌊(start + last) / 2⌋ with `last = end - 1`, so even-length
    /// spans pick the lower of the two middle values.
    #[inline]
    pub fn midpoint(&self) -> usize {
        debug_assert!(!self.is_empty(), "Empty span has no midpoint");
        self.start + (self.len() - 1) / 2
    }

    /// Split around the midpoint
    ///
    /// Returns: ([start, mid), mid, [mid+1, end))
    /// Both sides are strictly shorter than `self`.
    pub fn split(&self) -> (Span, usize, Span) {
        let mid = self.midpoint();
        (Span::new(self.start, mid), mid, Span::new(mid + 1, self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_midpoint() {
        assert_eq!(Span::full(5).midpoint(), 2);
        assert_eq!(Span::full(4).midpoint(), 1);
        assert_eq!(Span::full(2).midpoint(), 0);
        assert_eq!(Span::new(3, 5).midpoint(), 3);
    }

    #[test]
    fn test_split_sizes() {
        let (left, mid, right) = Span::full(100).split();
        assert_eq!(mid, 49);
        assert_eq!(left, Span::new(0, 49));
        assert_eq!(right, Span::new(50, 100));
        assert!(left.len().abs_diff(right.len()) <= 1);
    }

    #[test]
    fn test_geometric_shrinkage() {
        let mut span = Span::full(128);
        let mut depth = 0;
        while !span.is_empty() {
            let (_, _, right) = span.split();
            assert!(right.len() <= span.len() / 2);
            span = right;
            depth += 1;
        }
        // Longest path through 128 values has ⌈log2(129)⌉ = 8 nodes
        assert!(depth <= 8, "depth {} exceeds log bound", depth);
    }
}
