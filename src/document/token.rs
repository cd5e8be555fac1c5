//! Source tokens and cursor positions.
//!
//! Every node of a parsed document carries one `Token`: the raw text that
//! represents it and the 1-based line and column where that text starts.
//! Lookups by cursor position only ever compare against this text, never
//! against the full region a composite node renders over.

use std::fmt;
use std::ops::Range;

/// A 1-based (line, column) coordinate in the source text.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The raw text of a node and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    position: Position,
}

impl Token {
    /// Creates a token starting at `position`.
    pub fn new(text: impl Into<String>, position: Position) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }

    /// Creates a token with no text. It occupies no columns and never
    /// covers any position.
    pub fn empty(position: Position) -> Self {
        Self::new(String::new(), position)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Number of characters in the token text.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Half-open column range `[column, column + len)` on the token's line.
    ///
    /// Multi-line text (block scalars, folded quotes) is measured as a whole,
    /// so the range may extend past the end of the first line.
    pub fn span(&self) -> Range<usize> {
        self.position.column..self.position.column + self.len()
    }

    /// Returns true when `target` lies on this token's line and inside its span.
    pub fn covers(&self, target: Position) -> bool {
        target.line == self.position.line && self.span().contains(&target.column)
    }
}
