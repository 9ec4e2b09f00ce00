#![doc = include_str!("../README.md")]

pub mod lexeme;
pub mod lexer;
pub mod spanned;
pub mod token;

pub use lexeme::Lexeme;
pub use lexer::{lexer, Lexer};
pub use token::Token;
