#![doc = include_str!("../README.md")]

pub mod error;
pub mod instruction;
pub mod lines;
pub mod parser;

pub use error::{Diagnostic, ParseError, ParseErrorKind, SemanticError};
pub use instruction::Instruction;
pub use parser::{parse, BuildParserError, Parser, ParserBuilder, ParserConfig};
