//! Drives parsing of a whole program: tokenizing, reading lines, dispatching instructions
//! and threading the scope between them.

use crate::error::{ParseError, ParseErrorKind};
use crate::instruction::Instruction;
use crate::lines::Lines;
use bftc_symbols::SymbolTable;
use bftc_tokens::lexer;
use bftc_tokens::spanned::Spanned;
use std::ops::RangeInclusive;
use thiserror::Error;
use tracing::{debug, instrument, trace};

/// Smallest number of cells an array may be declared with
pub const MIN_ARRAY_SIZE: usize = 1;
/// Largest number of cells an array may be declared with
pub const MAX_ARRAY_SIZE: usize = 256;

/// Settings that change how programs are parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    collapse_to_global: bool,
    array_sizes: RangeInclusive<usize>,
}

impl ParserConfig {
    /// Whether every declaration is stored in the global scope
    pub fn collapse_to_global(&self) -> bool {
        self.collapse_to_global
    }

    /// The sizes arrays may be declared with
    pub fn array_sizes(&self) -> &RangeInclusive<usize> {
        &self.array_sizes
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            collapse_to_global: true,
            array_sizes: MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE,
        }
    }
}

/// Parses programs into their symbol table.
///
/// Must be configured using a [ParserBuilder], or use [Parser::default].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Creates the default ParserBuilder
    #[inline]
    pub fn builder() -> ParserBuilder {
        ParserBuilder::new()
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a program, returning its symbol table or the first error found.
    #[instrument(skip_all, fields(len = source.len()))]
    pub fn parse(&self, source: &str) -> Result<SymbolTable, ParseError> {
        let tokens = lexer(source);
        trace!(tokens = tokens.len(), "tokenized source");

        let mut table = SymbolTable::new(self.config.collapse_to_global);
        let mut scope = table.root();
        for line in Lines::new(&tokens) {
            let starting_index = line.starting_index();
            let keyword = line.keyword();
            let parameters = line.parameters();

            let Some(instruction) = Instruction::from_keyword(keyword.text())
                .filter(|instruction| instruction.validate(parameters))
            else {
                debug!(?keyword, ?parameters, "invalid syntax");
                return Err(ParseError::new(
                    ParseErrorKind::InvalidSyntax,
                    starting_index,
                    keyword.offset(),
                ));
            };

            debug!(%instruction, ?parameters, "applying instruction");
            scope = instruction
                .apply(parameters, scope, &mut table, &self.config)
                .map_err(|e| {
                    debug!(error = %e, "could not apply instruction");
                    ParseError::new(e, starting_index, keyword.offset())
                })?;
        }
        Ok(table)
    }
}

/// Builder for creating a [Parser] instance.
#[derive(Debug)]
pub struct ParserBuilder {
    /// Store every declaration in the global scope
    pub collapse_to_global: bool,
    /// The sizes arrays may be declared with
    pub array_sizes: RangeInclusive<usize>,
}

impl ParserBuilder {
    /// Creates a ParserBuilder with default settings
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether every declaration is stored in the global scope
    pub fn collapse_to_global(mut self, collapse: bool) -> Self {
        self.collapse_to_global = collapse;
        self
    }

    /// Sets the sizes arrays may be declared with
    pub fn array_sizes(mut self, sizes: RangeInclusive<usize>) -> Self {
        self.array_sizes = sizes;
        self
    }

    /// Builds a [Parser] instance from this builder
    pub fn build(self) -> Result<Parser, BuildParserError> {
        if self.array_sizes.is_empty() {
            return Err(BuildParserError::EmptyArraySizes(self.array_sizes));
        }
        if *self.array_sizes.start() == 0 {
            return Err(BuildParserError::ZeroSizedArrays);
        }
        Ok(Parser {
            config: ParserConfig {
                collapse_to_global: self.collapse_to_global,
                array_sizes: self.array_sizes,
            },
        })
    }
}

impl Default for ParserBuilder {
    fn default() -> Self {
        let ParserConfig {
            collapse_to_global,
            array_sizes,
        } = ParserConfig::default();
        Self {
            collapse_to_global,
            array_sizes,
        }
    }
}

/// An error occurred while building a [Parser] instance
#[derive(Debug, Error)]
pub enum BuildParserError {
    #[error("no array size is allowed by {0:?}")]
    EmptyArraySizes(RangeInclusive<usize>),
    #[error("arrays must have at least one cell")]
    ZeroSizedArrays,
}

/// Parses a program with the default settings
pub fn parse(source: &str) -> Result<SymbolTable, ParseError> {
    Parser::default().parse(source)
}
