//! Symbols held in scope (§3 "Symbol").

use pseudoc_util::Span;

use crate::ty::StaticType;

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub span: Span,
    pub kind: SymbolKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SymbolKind {
    Variable(StaticType),
    Constant(StaticType),
    Param(StaticType),
    Procedure { params: Vec<StaticType> },
    Function { params: Vec<StaticType>, return_type: StaticType },
}

impl Symbol {
    pub fn new(name: impl Into<String>, span: Span, kind: SymbolKind) -> Self {
        Self { name: name.into(), span, kind }
    }

    /// The type a reference to this symbol evaluates to. Procedures have no
    /// value type; referencing one as an expression is always `Unknown` and
    /// left for `SEM024` to flag the misuse.
    pub fn ty(&self) -> StaticType {
        match &self.kind {
            SymbolKind::Variable(ty) | SymbolKind::Constant(ty) | SymbolKind::Param(ty) => ty.clone(),
            SymbolKind::Function { return_type, .. } => return_type.clone(),
            SymbolKind::Procedure { .. } => StaticType::Unknown,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self.kind, SymbolKind::Constant(_))
    }
}
