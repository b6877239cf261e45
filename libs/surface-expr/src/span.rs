//! # Source Spans
//!
//! Byte ranges into the expression source, used by tokens and errors.

/// Half-open byte range `[start, end)` into the source text.
///
/// ## Example
///
/// ```rust
/// use surface_expr::Span;
///
/// let span = Span::from_bytes(2, 5);
/// assert_eq!(span.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// First byte covered.
    pub start: usize,
    /// One past the last byte covered.
    pub end: usize,
}

impl Span {
    /// Create a span from byte offsets.
    pub const fn from_bytes(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Empty span at offset zero.
    pub const fn zero() -> Self {
        Self { start: 0, end: 0 }
    }

    /// Number of bytes covered.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// True if the span covers no bytes.
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
