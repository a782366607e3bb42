//! Lexical scope chain, a stack of ribs each chaining to its parent —
//! grounded on the resolver's rib-stack design, reshaped around a name-keyed
//! chain since this language has no item-graph to index into.

use rustc_hash::FxHashMap;

use crate::symbol::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RibId(usize);

struct Rib {
    bindings: FxHashMap<String, Symbol>,
    parent: Option<RibId>,
}

/// Definition rejects duplicates within a single scope; lookup walks
/// outward through parents and is always case-insensitive (§3).
pub struct ScopeStack {
    ribs: Vec<Rib>,
    current: RibId,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self {
            ribs: vec![Rib { bindings: FxHashMap::default(), parent: None }],
            current: RibId(0),
        }
    }

    pub fn enter(&mut self) {
        let parent = self.current;
        self.ribs.push(Rib { bindings: FxHashMap::default(), parent: Some(parent) });
        self.current = RibId(self.ribs.len() - 1);
    }

    pub fn exit(&mut self) {
        if let Some(parent) = self.ribs[self.current.0].parent {
            self.current = parent;
        }
    }

    /// Defines `symbol` in the current scope. Returns `false` without
    /// overwriting if the (case-insensitive) name is already bound here.
    pub fn define(&mut self, symbol: Symbol) -> bool {
        let key = symbol.name.to_ascii_lowercase();
        let rib = &mut self.ribs[self.current.0];
        if rib.bindings.contains_key(&key) {
            return false;
        }
        rib.bindings.insert(key, symbol);
        true
    }

    pub fn resolve(&self, name: &str) -> Option<&Symbol> {
        let key = name.to_ascii_lowercase();
        let mut rib_id = self.current;
        loop {
            let rib = &self.ribs[rib_id.0];
            if let Some(symbol) = rib.bindings.get(&key) {
                return Some(symbol);
            }
            match rib.parent {
                Some(parent) => rib_id = parent,
                None => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ty::StaticType;
    use pseudoc_par::ast::BasicType;
    use pseudoc_util::Span;

    fn var(name: &str) -> Symbol {
        Symbol::new(name, Span::DUMMY, crate::symbol::SymbolKind::Variable(StaticType::Basic(BasicType::Integer)))
    }

    #[test]
    fn resolves_through_parent_scope() {
        let mut scopes = ScopeStack::new();
        assert!(scopes.define(var("Total")));
        scopes.enter();
        assert!(scopes.resolve("total").is_some());
        scopes.exit();
    }

    #[test]
    fn duplicate_definition_in_same_scope_is_rejected() {
        let mut scopes = ScopeStack::new();
        assert!(scopes.define(var("Total")));
        assert!(!scopes.define(var("TOTAL")));
    }

    #[test]
    fn child_scope_declaration_does_not_leak_to_parent() {
        let mut scopes = ScopeStack::new();
        scopes.enter();
        scopes.define(var("Local"));
        scopes.exit();
        assert!(scopes.resolve("Local").is_none());
    }
}
