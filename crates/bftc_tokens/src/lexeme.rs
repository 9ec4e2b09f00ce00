//! The lexeme catalog, the closed set of lexical categories and their recognition rules.

use regex::Regex;
use std::fmt::{Display, Formatter};
use std::sync::LazyLock;
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Whole-string matchers, indexed by the lexeme's discriminant
static MATCHERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    Lexeme::iter()
        .map(|lexeme| {
            Regex::new(&format!("^(?:{})$", lexeme.pattern()))
                .expect("lexeme patterns are static and must compile")
        })
        .collect()
});

/// A lexical category of the language.
///
/// Categories overlap: `inc` is both an [Instruction](Lexeme::Instruction) and a
/// [VarName](Lexeme::VarName). There is no single canonical category for a piece of text,
/// callers test against the category they are interested in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr, IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum Lexeme {
    /// A bare alphabetic word
    Instruction,
    /// `//`, `--` or `#` up to the end of the line
    Comment,
    /// An identifier
    VarName,
    /// An array size, such as `[5]`
    ArraySymbol,
    /// An identifier or a non-negative integer literal
    VarNameOrNumber,
    /// A single new line
    #[strum(serialize = "EOL")]
    Eol,
}

impl Lexeme {
    /// The recognition rule of this lexeme, as a regular expression.
    ///
    /// The rule is unanchored. Use [matches](Self::matches) for a whole-string test.
    pub const fn pattern(&self) -> &'static str {
        match self {
            Lexeme::Instruction => r"[a-zA-Z]+",
            Lexeme::Comment => r"(?://|--|#)[^\n]*",
            Lexeme::VarName => r"[$_a-zA-Z][$_a-zA-Z0-9]*",
            Lexeme::ArraySymbol => r"\[[0-9]+\]",
            Lexeme::VarNameOrNumber => r"[$_a-zA-Z][$_a-zA-Z0-9]*|[0-9]+",
            Lexeme::Eol => r"\n",
        }
    }

    /// Gets the name of this lexeme
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// Checks whether the whole of `text` is recognized by this lexeme
    pub fn matches(&self, text: &str) -> bool {
        MATCHERS[*self as usize].is_match(text)
    }

    /// Finds the first lexeme, in catalog order, that matches the whole of `text`
    pub fn classify(text: &str) -> Option<Lexeme> {
        Lexeme::iter().find(|lexeme| lexeme.matches(text))
    }
}

impl Display for Lexeme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
