//! responsible for storing and resolving declared symbols

use crate::error::ScopeError;
use crate::symbol::{normalize, Symbol};
use indexmap::IndexMap;
use itertools::Itertools as _;
use std::fmt::{Display, Formatter};
use tracing::{debug, trace};

/// Identifies a scope within a [SymbolTable]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(usize);

#[derive(Debug, Default)]
struct Scope {
    parent: Option<ScopeId>,
    symbols: IndexMap<String, Symbol>,
}

/// A tree of scopes. The root scope is created along with the table and is the global
/// namespace.
///
/// When the table collapses to the global scope, any symbol added through any scope is
/// stored in the root, so only the root is ever populated.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
    collapse_to_global: bool,
}

impl SymbolTable {
    /// Creates a new symbol table containing only an empty root scope
    pub fn new(collapse_to_global: bool) -> Self {
        Self {
            scopes: vec![Scope::default()],
            collapse_to_global,
        }
    }

    /// Gets the root, global scope
    #[inline]
    pub fn root(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Whether all insertions are redirected to the root scope
    pub fn collapses_to_global(&self) -> bool {
        self.collapse_to_global
    }

    /// Creates a new, empty scope as a child of `parent`
    pub fn new_scope(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            parent: Some(parent),
            symbols: IndexMap::new(),
        });
        trace!(?id, ?parent, "created scope");
        id
    }

    /// Gets the parent of a scope
    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scope(scope).parent
    }

    /// Gets the scope that actually receives symbols added through `scope`
    pub fn effective_scope(&self, scope: ScopeId) -> ScopeId {
        if self.collapse_to_global {
            self.root()
        } else {
            scope
        }
    }

    /// Adds a symbol through the given scope, returning the scope that stored it.
    ///
    /// Fails if a symbol with the same identifier is already visible from `scope`.
    pub fn add_symbol(
        &mut self,
        scope: ScopeId,
        mut symbol: Symbol,
    ) -> Result<ScopeId, ScopeError> {
        if self.find(scope, symbol.id()).is_some() {
            return Err(ScopeError::DuplicateSymbol(symbol.id().to_string()));
        }
        let target = self.effective_scope(scope);
        symbol.set_scope(target);
        debug!(%symbol, ?target, "declared symbol");
        self.scope_mut(target)
            .symbols
            .insert(symbol.id().to_string(), symbol);
        Ok(target)
    }

    /// Finds a symbol by identifier, searching `scope` first and then its parents
    pub fn find(&self, scope: ScopeId, id: &str) -> Option<&Symbol> {
        let id = normalize(id);
        let mut current = Some(scope);
        while let Some(scope) = current {
            let scope = self.scope(scope);
            if let Some(symbol) = scope.symbols.get(&id) {
                return Some(symbol);
            }
            current = scope.parent;
        }
        None
    }

    /// Finds a symbol in the global scope
    #[inline]
    pub fn find_global(&self, id: &str) -> Option<&Symbol> {
        self.find(self.root(), id)
    }

    /// Gets the symbols stored directly in a scope, in declaration order
    pub fn symbols(&self, scope: ScopeId) -> impl Iterator<Item = &Symbol> {
        self.scope(scope).symbols.values()
    }

    /// Gets all scopes of this table
    pub fn scopes(&self) -> impl Iterator<Item = ScopeId> {
        (0..self.scopes.len()).map(ScopeId)
    }

    /// The total number of symbols across all scopes
    pub fn len(&self) -> usize {
        self.scopes.iter().map(|scope| scope.symbols.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0]
    }

    fn scope_mut(&mut self, id: ScopeId) -> &mut Scope {
        &mut self.scopes[id.0]
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbols(self.root()).join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_add_and_find() {
        let mut table = SymbolTable::new(true);
        let root = table.root();
        assert_eq!(table.add_symbol(root, Symbol::new("a")), Ok(root));
        let found = table.find(root, "a").expect("a should be declared");
        assert_eq!(found.scope(), Some(root));
        assert!(table.find(root, "b").is_none());
    }

    #[test]
    fn test_redefinition() {
        let mut table = SymbolTable::default();
        let root = table.root();
        table.add_symbol(root, Symbol::new("a")).unwrap();
        assert_eq!(
            table.add_symbol(root, Symbol::array("a", 3)),
            Err(ScopeError::DuplicateSymbol("a".to_string()))
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_case_insensitive() {
        let mut table = SymbolTable::default();
        let root = table.root();
        table.add_symbol(root, Symbol::new("A")).unwrap();
        assert!(table.find(root, "a").is_some());
        assert!(table.find(root, "A").is_some());
        assert!(table.add_symbol(root, Symbol::new("a")).is_err());
    }

    #[test]
    fn test_collapse_to_global() {
        let mut table = SymbolTable::new(true);
        let root = table.root();
        let child = table.new_scope(root);
        let grandchild = table.new_scope(child);
        assert_eq!(table.effective_scope(grandchild), root);
        assert_eq!(table.add_symbol(grandchild, Symbol::new("x")), Ok(root));
        assert_eq!(table.symbols(root).count(), 1);
        assert_eq!(table.symbols(grandchild).count(), 0);
        assert!(table.add_symbol(child, Symbol::new("x")).is_err());
    }

    #[test]
    fn test_nested_scopes() {
        let mut table = SymbolTable::new(false);
        let root = table.root();
        let left = table.new_scope(root);
        let right = table.new_scope(root);
        assert_eq!(table.parent(left), Some(root));
        assert_eq!(table.parent(root), None);

        table.add_symbol(root, Symbol::new("global")).unwrap();
        assert_eq!(table.add_symbol(left, Symbol::new("local")), Ok(left));

        assert!(table.find(left, "global").is_some());
        assert!(table.find(left, "local").is_some());
        assert!(table.find(right, "local").is_none());
        assert!(table.find(root, "local").is_none());
        assert!(table.add_symbol(right, Symbol::new("local")).is_ok());
        assert!(table.add_symbol(left, Symbol::new("global")).is_err());
        assert_eq!(table.scopes().count(), 3);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_display_in_declaration_order() {
        let mut table = SymbolTable::default();
        let root = table.root();
        for symbol in [Symbol::new("z"), Symbol::array("m", 4), Symbol::new("a")] {
            table.add_symbol(root, symbol).unwrap();
        }
        assert_eq!(table.to_string(), "z, m[4], a");
    }
}
