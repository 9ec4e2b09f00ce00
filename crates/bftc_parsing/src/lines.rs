//! Groups a token sequence into the lines of a program

use bftc_tokens::{Lexeme, Token};
use tracing::trace;

/// A non-empty line of tokens, with comments removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'src> {
    starting_index: usize,
    tokens: Vec<Token<'src>>,
}

impl<'src> Line<'src> {
    /// The index of the first token of this line within the whole token sequence
    pub fn starting_index(&self) -> usize {
        self.starting_index
    }

    /// The first token of the line, expected to be an instruction keyword
    pub fn keyword(&self) -> Token<'src> {
        self.tokens[0]
    }

    /// Every token after the keyword
    pub fn parameters(&self) -> &[Token<'src>] {
        &self.tokens[1..]
    }
}

/// Reads lines out of a token sequence.
///
/// An `EOL` token ends a line. Lines that hold nothing but comments or blanks are skipped.
#[derive(Debug)]
pub struct Lines<'t, 'src> {
    tokens: &'t [Token<'src>],
    index: usize,
}

impl<'t, 'src> Lines<'t, 'src> {
    pub fn new(tokens: &'t [Token<'src>]) -> Self {
        Self { tokens, index: 0 }
    }
}

impl<'src> Iterator for Lines<'_, 'src> {
    type Item = Line<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut starting_index = self.index;
        let mut tokens = vec![];
        while let Some(&token) = self.tokens.get(self.index) {
            let index = self.index;
            self.index += 1;
            if token.is(Lexeme::Eol) {
                if !tokens.is_empty() {
                    break;
                }
            } else if token.is(Lexeme::Comment) {
                trace!(?token, "skipping comment");
            } else {
                if tokens.is_empty() {
                    starting_index = index;
                }
                tokens.push(token);
            }
        }
        if tokens.is_empty() {
            None
        } else {
            Some(Line {
                starting_index,
                tokens,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bftc_tokens::lexer;
    use test_log::test;

    fn read(source: &str) -> Vec<(usize, Vec<&str>)> {
        let tokens = lexer(source);
        Lines::new(&tokens)
            .map(|line| {
                let texts = std::iter::once(line.keyword())
                    .chain(line.parameters().iter().copied())
                    .map(|token| token.text())
                    .collect();
                (line.starting_index(), texts)
            })
            .collect()
    }

    #[test]
    fn test_lines() {
        assert_eq!(
            read("set val 0\n  inc val 1   \ninc val 1"),
            [
                (0, vec!["set", "val", "0"]),
                (4, vec!["inc", "val", "1"]),
                (8, vec!["inc", "val", "1"]),
            ]
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(
            read("\n\nvar a\n\n\nvar b\n"),
            [(2, vec!["var", "a"]), (7, vec!["var", "b"])]
        );
        assert!(read("\n\n\n").is_empty());
        assert!(read("").is_empty());
    }

    #[test]
    fn test_comments_are_inert() {
        assert_eq!(
            read("// header\nvar a -- trailing\n# set a 1\ninc a 1"),
            [(2, vec!["var", "a"]), (8, vec!["inc", "a", "1"])]
        );
    }
}
