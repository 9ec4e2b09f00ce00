//! Errors that can occur while parsing a program

use bftc_symbols::ScopeError;
use bftc_tokens::spanned::{line_at, Position};
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use std::path::Path;
use thiserror::Error;

/// An error raised while applying an instruction to a scope
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    #[error(transparent)]
    Scope(#[from] ScopeError),
    #[error("value error: {0}")]
    ValueError(String),
}

impl SemanticError {
    pub fn invalid_array_size(suffix: impl AsRef<str>) -> Self {
        Self::ValueError(format!("{} is not a valid array size", suffix.as_ref()))
    }

    pub fn array_size_out_of_range(size: usize, allowed: &RangeInclusive<usize>) -> Self {
        Self::ValueError(format!(
            "array size {size} must be between {} and {}",
            allowed.start(),
            allowed.end()
        ))
    }
}

/// [ParseError] kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("invalid syntax")]
    InvalidSyntax,
    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

impl From<ScopeError> for ParseErrorKind {
    fn from(value: ScopeError) -> Self {
        Self::Semantic(value.into())
    }
}

impl ParseErrorKind {
    pub fn is_invalid_syntax(&self) -> bool {
        matches!(self, Self::InvalidSyntax)
    }

    pub fn is_duplicate_symbol(&self) -> bool {
        matches!(
            self,
            Self::Semantic(SemanticError::Scope(ScopeError::DuplicateSymbol(_)))
        )
    }

    pub fn is_value_error(&self) -> bool {
        matches!(self, Self::Semantic(SemanticError::ValueError(_)))
    }
}

/// Represents the first error found in a program, along with where the offending line began
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    kind: ParseErrorKind,
    starting_index: usize,
    offset: usize,
}

impl ParseError {
    /// Creates a new error
    pub fn new(kind: impl Into<ParseErrorKind>, starting_index: usize, offset: usize) -> Self {
        Self {
            kind: kind.into(),
            starting_index,
            offset,
        }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Gets the message of this error
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// The index, in the token sequence, of the first token of the offending line
    pub fn starting_index(&self) -> usize {
        self.starting_index
    }

    /// The byte offset, in the source, of the first token of the offending line
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Renders this error against the source it was found in
    pub fn render<'a>(&'a self, source: &'a str, path: Option<&'a Path>) -> Diagnostic<'a> {
        Diagnostic {
            error: self,
            source,
            path,
        }
    }
}

/// A [ParseError] with the source it came from, displaying the offending line
#[derive(Debug)]
pub struct Diagnostic<'a> {
    error: &'a ParseError,
    source: &'a str,
    path: Option<&'a Path>,
}

impl Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.error)?;
        let Position { line, col } = Position::locate(self.source, self.error.offset);
        match self.path {
            Some(path) => writeln!(f, "  -> {}:{line}:{col}", path.to_string_lossy())?,
            None => writeln!(f, "  -> {line}:{col}")?,
        }
        let width = line.to_string().len();
        writeln!(
            f,
            "{line:width$} | {}",
            line_at(self.source, self.error.offset).trim_end()
        )?;
        writeln!(f, "{}{}^", " ".repeat(width + 3), " ".repeat(col - 1))
    }
}
