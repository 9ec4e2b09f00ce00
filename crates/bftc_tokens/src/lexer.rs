//! Responsible with converting source text into a token stream

use crate::lexeme::Lexeme;
use crate::token::Token;
use regex::{Matches, Regex};
use std::sync::LazyLock;
use tracing::trace;

/// The order the catalog is tried in while scanning. Comments come first so that nothing
/// inside them is tokenized, and words are scanned as identifiers before bare instructions
/// so that `$`, `_` and digits stay attached to the word they belong to.
const SCAN_ORDER: [Lexeme; 6] = [
    Lexeme::Comment,
    Lexeme::VarName,
    Lexeme::ArraySymbol,
    Lexeme::VarNameOrNumber,
    Lexeme::Eol,
    Lexeme::Instruction,
];

static SCANNER: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = SCAN_ORDER
        .iter()
        .map(|lexeme| format!("(?:{})", lexeme.pattern()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("combined lexeme pattern must compile")
});

/// Responsible with converting source text into a token stream.
///
/// Characters not recognized by any [Lexeme] are skipped.
#[derive(Debug)]
pub struct Lexer<'src> {
    source: &'src str,
    matches: Matches<'static, 'src>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer over the given source
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            matches: SCANNER.find_iter(source),
        }
    }

    /// Gets the source this lexer is reading from
    pub fn source(&self) -> &'src str {
        self.source
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = self.matches.next()?;
        let token = Token::new(found.as_str(), found.start());
        trace!(?token, "lexed token");
        Some(token)
    }
}

/// Converts source text into an ordered list of tokens.
///
/// This never fails, unrecognized characters are simply absent from the output.
pub fn lexer(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}
