//! Locations of things within a source string

use std::fmt::{Display, Formatter};

/// Something that occupies a contiguous region of a source string
pub trait Spanned {
    /// The byte offset where this starts
    fn offset(&self) -> usize;

    /// The length in bytes
    fn len(&self) -> usize;

    /// Whether this covers no source at all
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The byte offset just past the end of this
    fn end(&self) -> usize {
        self.offset() + self.len()
    }
}

/// A 1-based line and column within a source string
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    /// Finds the line and column of a byte offset. Offsets past the end of the source are
    /// clamped to the end.
    pub fn locate(source: &str, offset: usize) -> Self {
        let before = prefix(source, offset);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let col = before[line_start..].chars().count() + 1;
        Self { line, col }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Gets the full line of `source` containing the byte `offset`, without its line terminator
pub fn line_at(source: &str, offset: usize) -> &str {
    let before = prefix(source, offset);
    let start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let end = source[start..]
        .find('\n')
        .map(|i| start + i)
        .unwrap_or(source.len());
    source[start..end].trim_end_matches('\r')
}

fn prefix(source: &str, offset: usize) -> &str {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    &source[..offset]
}
