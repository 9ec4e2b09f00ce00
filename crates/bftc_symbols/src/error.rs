use thiserror::Error;

/// An error occurred while modifying a [SymbolTable](crate::SymbolTable)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    #[error("symbol already defined: {0}")]
    DuplicateSymbol(String),
}
