//! The instruction registry: every instruction of the language, how its parameters are
//! validated, and how it changes the scope it is applied to.

use crate::error::SemanticError;
use crate::parser::ParserConfig;
use bftc_symbols::{ScopeId, Symbol, SymbolTable};
use bftc_tokens::{Lexeme, Token};
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use std::str::FromStr;
use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};
use tracing::trace;

const TARGET_AND_VALUE: &[Lexeme] = &[Lexeme::VarName, Lexeme::VarNameOrNumber];

/// An instruction of the language, identified by its keyword
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Instruction {
    /// `var a b[5]`, declares variables and arrays
    Var,
    /// `set a 5`, assigns a value
    Set,
    /// `inc a b`, increments by a value
    Inc,
}

impl Instruction {
    /// Looks up an instruction by its exact, case-sensitive keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::from_str(keyword).ok()
    }

    pub fn keyword(&self) -> &'static str {
        (*self).into()
    }

    /// The lexemes each parameter must satisfy, in order. `None` if the instruction takes a
    /// variable number of parameters.
    pub fn parameter_shape(&self) -> Option<&'static [Lexeme]> {
        match self {
            Instruction::Var => None,
            Instruction::Set | Instruction::Inc => Some(TARGET_AND_VALUE),
        }
    }

    /// Checks whether the given parameters are valid for this instruction
    pub fn validate(&self, parameters: &[Token]) -> bool {
        match self.parameter_shape() {
            Some(shape) => {
                shape.len() == parameters.len()
                    && shape
                        .iter()
                        .zip(parameters)
                        .all(|(&lexeme, parameter)| parameter.is(lexeme))
            }
            None => parameters.iter().all(|parameter| {
                parameter.is(Lexeme::VarName) || parameter.is(Lexeme::ArraySymbol)
            }),
        }
    }

    /// Applies this instruction to a scope, returning the scope following instructions
    /// should be applied to.
    ///
    /// The parameters must already have been [validated](Self::validate).
    pub fn apply(
        &self,
        parameters: &[Token],
        scope: ScopeId,
        table: &mut SymbolTable,
        config: &ParserConfig,
    ) -> Result<ScopeId, SemanticError> {
        match self {
            Instruction::Var => declare(parameters, scope, table, config.array_sizes()),
            // assignment and increment are carried out by the code generator
            Instruction::Set | Instruction::Inc => Ok(scope),
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

fn declare(
    parameters: &[Token],
    scope: ScopeId,
    table: &mut SymbolTable,
    array_sizes: &RangeInclusive<usize>,
) -> Result<ScopeId, SemanticError> {
    for (index, parameter) in parameters.iter().enumerate() {
        if !parameter.is(Lexeme::VarName) {
            continue;
        }
        let mut symbol = Symbol::new(parameter.text());
        if let Some(suffix) = parameters
            .get(index + 1)
            .filter(|next| next.is(Lexeme::ArraySymbol))
        {
            symbol = symbol.with_array_size(array_size(suffix.text(), array_sizes)?);
        }
        trace!(%symbol, "declaring");
        table.add_symbol(scope, symbol)?;
    }
    Ok(scope)
}

/// Parses the size out of an array suffix such as `[5]`
fn array_size(suffix: &str, allowed: &RangeInclusive<usize>) -> Result<usize, SemanticError> {
    let size = suffix
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .and_then(|digits| digits.parse::<usize>().ok())
        .ok_or_else(|| SemanticError::invalid_array_size(suffix))?;
    if !allowed.contains(&size) {
        return Err(SemanticError::array_size_out_of_range(size, allowed));
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bftc_symbols::ScopeError;
    use bftc_tokens::lexer;
    use strum::IntoEnumIterator;
    use test_log::test;

    fn apply(
        instruction: Instruction,
        parameters: &str,
    ) -> (SymbolTable, Result<ScopeId, SemanticError>) {
        let tokens = lexer(parameters);
        let mut table = SymbolTable::default();
        let root = table.root();
        let result = instruction.apply(&tokens, root, &mut table, &ParserConfig::default());
        (table, result)
    }

    #[test]
    fn test_registry() {
        let keywords = Instruction::iter().map(|i| i.keyword()).collect::<Vec<_>>();
        assert_eq!(keywords, ["var", "set", "inc"]);
        assert_eq!(Instruction::from_keyword("inc"), Some(Instruction::Inc));
        assert_eq!(Instruction::from_keyword("INC"), None);
        assert_eq!(Instruction::from_keyword("print"), None);
    }

    #[test]
    fn test_keyword_outlives_instruction() {
        let keyword: &'static str = {
            let instruction = Instruction::from_keyword("inc").unwrap();
            instruction.keyword()
        };
        assert_eq!(keyword, "inc");
        assert_eq!(Instruction::from_keyword(keyword), Some(Instruction::Inc));
        assert_eq!(Instruction::Var.as_ref(), Instruction::Var.keyword());
        assert_eq!(Instruction::Set.to_string(), "set");
    }

    #[test]
    fn test_var_validator() {
        assert!(Instruction::Var.validate(&lexer("a b[4] c")));
        assert!(Instruction::Var.validate(&[]));
        assert!(!Instruction::Var.validate(&lexer("a 1")));
    }

    #[test]
    fn test_set_and_inc_validators() {
        for instruction in [Instruction::Set, Instruction::Inc] {
            assert!(instruction.validate(&lexer("a 1")));
            assert!(instruction.validate(&lexer("a b")));
            assert!(!instruction.validate(&lexer("1 a")));
            assert!(!instruction.validate(&lexer("a")));
            assert!(!instruction.validate(&lexer("a 1 2")));
            assert!(!instruction.validate(&lexer("a [1]")));
        }
    }

    #[test]
    fn test_var_declares() {
        let (table, result) = apply(Instruction::Var, "a B[5] c");
        assert_eq!(result, Ok(table.root()));
        let declared = table
            .symbols(table.root())
            .map(|s| (s.id().to_string(), s.array_size()))
            .collect::<Vec<_>>();
        assert_eq!(
            declared,
            [
                ("a".to_string(), None),
                ("b".to_string(), Some(5)),
                ("c".to_string(), None)
            ]
        );
    }

    #[test]
    fn test_array_bounds() {
        for size in ["1", "256", "0001"] {
            let (_, result) = apply(Instruction::Var, &format!("a[{size}]"));
            assert!(result.is_ok(), "size {size} should be accepted");
        }
        for size in ["0", "257", "99999999999999999999999"] {
            let (_, result) = apply(Instruction::Var, &format!("a[{size}]"));
            assert!(
                matches!(result, Err(SemanticError::ValueError(_))),
                "size {size} should be rejected"
            );
        }
    }

    #[test]
    fn test_var_redefinition() {
        let (table, result) = apply(Instruction::Var, "a A");
        assert_eq!(
            result,
            Err(SemanticError::Scope(ScopeError::DuplicateSymbol("a".to_string())))
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_set_and_inc_are_inert() {
        for instruction in [Instruction::Set, Instruction::Inc] {
            let (table, result) = apply(instruction, "a 1");
            assert_eq!(result, Ok(table.root()));
            assert!(table.is_empty());
        }
    }
}
