//! A lexical token from a source string

use crate::lexeme::Lexeme;
use crate::spanned::{Position, Spanned};
use std::fmt::{Debug, Formatter};

/// A lexical token, a slice of the source text along with where it starts.
///
/// Tokens are not classified. Use [is](Token::is) to check whether a token satisfies a
/// given [Lexeme].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    text: &'src str,
    offset: usize,
}

impl<'src> Token<'src> {
    /// Creates a new token
    pub fn new(text: &'src str, offset: usize) -> Self {
        Self { text, offset }
    }

    /// Gets the source text of this token
    pub fn text(&self) -> &'src str {
        self.text
    }

    /// Checks whether the text of this token is recognized by the given lexeme
    #[inline]
    pub fn is(&self, lexeme: Lexeme) -> bool {
        lexeme.matches(self.text)
    }

    /// Gets the 1-based line and column of this token within `source`
    pub fn position(&self, source: &str) -> Position {
        Position::locate(source, self.offset)
    }
}

impl Spanned for Token<'_> {
    fn offset(&self) -> usize {
        self.offset
    }

    fn len(&self) -> usize {
        self.text.len()
    }
}

impl Debug for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}@{}", self.text, self.offset)
    }
}
