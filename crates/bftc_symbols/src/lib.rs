#![doc = include_str!("../README.md")]

pub mod error;
pub mod scope;
pub mod symbol;

pub use error::ScopeError;
pub use scope::{ScopeId, SymbolTable};
pub use symbol::Symbol;
