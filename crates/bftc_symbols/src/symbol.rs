//! A declared identifier and its metadata

use crate::scope::ScopeId;
use std::fmt::{Display, Formatter};

/// A declared identifier.
///
/// The identifier is normalized to lower case when the symbol is created, so identifiers
/// that only differ by case name the same symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    id: String,
    array_size: Option<usize>,
    terminal_value: Option<u8>,
    scope: Option<ScopeId>,
}

impl Symbol {
    /// Creates a new, non-array symbol
    pub fn new(id: impl AsRef<str>) -> Self {
        Self {
            id: normalize(id.as_ref()),
            array_size: None,
            terminal_value: None,
            scope: None,
        }
    }

    /// Creates a new array symbol with the given number of cells
    pub fn array(id: impl AsRef<str>, size: usize) -> Self {
        Self::new(id).with_array_size(size)
    }

    /// Marks this symbol as an array with the given number of cells
    pub fn with_array_size(mut self, size: usize) -> Self {
        self.array_size = Some(size);
        self
    }

    /// Marks this symbol as a constant with a known value
    pub fn with_terminal_value(mut self, value: u8) -> Self {
        self.terminal_value = Some(value);
        self
    }

    /// Gets the normalized identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_array(&self) -> bool {
        self.array_size.is_some()
    }

    /// Gets the number of cells, if this is an array
    pub fn array_size(&self) -> Option<usize> {
        self.array_size
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal_value.is_some()
    }

    pub fn terminal_value(&self) -> Option<u8> {
        self.terminal_value
    }

    /// Gets the scope that stored this symbol, if it has been stored yet
    pub fn scope(&self) -> Option<ScopeId> {
        self.scope
    }

    pub(crate) fn set_scope(&mut self, scope: ScopeId) {
        self.scope = Some(scope);
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)?;
        if let Some(size) = self.array_size {
            write!(f, "[{size}]")?;
        }
        if let Some(value) = self.terminal_value {
            write!(f, " = {value}")?;
        }
        Ok(())
    }
}

/// Normalizes an identifier
pub(crate) fn normalize(id: &str) -> String {
    id.to_lowercase()
}
