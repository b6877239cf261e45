//! # Character Cursor
//!
//! Peekable character cursor for the lexer.
//! Tracks the byte offset as it advances.
//!
//! ## Example
//!
//! ```rust
//! use surface_expr::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("x**2");
//! assert_eq!(cursor.peek(), Some('x'));
//! cursor.advance();
//! assert_eq!(cursor.peek(), Some('*'));
//! ```

// =============================================================================
// CURSOR
// =============================================================================

/// Character cursor with byte offset tracking.
pub struct Cursor<'a> {
    /// Source text.
    source: &'a str,
    /// Current byte offset.
    byte: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor for source text.
    pub fn new(source: &'a str) -> Self {
        Self { source, byte: 0 }
    }

    /// Current byte offset.
    pub fn offset(&self) -> usize {
        self.byte
    }

    /// Check if at end of input.
    pub fn is_eof(&self) -> bool {
        self.byte >= self.source.len()
    }

    /// Peek at current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.source[self.byte..].chars().next()
    }

    /// Peek at next character (one ahead of current).
    pub fn peek_next(&self) -> Option<char> {
        self.peek_nth(1)
    }

    /// Peek `n` characters ahead of current without consuming anything.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.source[self.byte..].chars().nth(n)
    }

    /// Advance to next character, returning the one consumed.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.byte += c.len_utf8();
        Some(c)
    }

    /// Advance while predicate is true.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Source text between `start` and the current offset.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.byte]
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_empty() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_cursor_peek_next() {
        let cursor = Cursor::new("**");
        assert_eq!(cursor.peek(), Some('*'));
        assert_eq!(cursor.peek_next(), Some('*'));
    }

    #[test]
    fn test_cursor_advance_while() {
        let mut cursor = Cursor::new("sqrt(x)");
        cursor.advance_while(|c| c.is_alphabetic());
        assert_eq!(cursor.peek(), Some('('));
        assert_eq!(cursor.slice_from(0), "sqrt");
    }

    #[test]
    fn test_cursor_utf8() {
        let mut cursor = Cursor::new("π");
        assert_eq!(cursor.advance(), Some('π'));
        assert_eq!(cursor.offset(), 2);
    }
}
