//! The analyzer itself: a pre-pass that registers routines, then a single
//! walk of the AST threading a scope stack and an `openFiles` map (§4.3).

mod expr;
mod stmt;

use rustc_hash::FxHashMap;

use pseudoc_par::ast::{FileMode, Program, Stmt, StmtKind};
use pseudoc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::scope::ScopeStack;
use crate::symbol::{Symbol, SymbolKind};
use crate::ty::StaticType;
use crate::SemanticResult;

pub(crate) struct Analyzer<'a> {
    handler: &'a Handler,
    scopes: ScopeStack,
    /// Literal file name -> the mode it is currently open under. Only
    /// string-literal file identifiers are tracked (§3 invariant).
    open_files: FxHashMap<String, FileMode>,
    /// Lowercase identifier -> declared type, consumed downstream by code
    /// generation so `INPUT` coercion doesn't need to re-run resolution.
    /// Keyed globally by name (last declaration wins) rather than per-scope:
    /// IGCSE pseudocode programs essentially never shadow a name across
    /// nested blocks, and duplicating the scope stack in the generator to
    /// get perfect shadowing fidelity isn't worth the coupling.
    variable_types: FxHashMap<String, StaticType>,
    /// Lowercase identifier -> the spelling it was first declared with
    /// (§4.4 "Name mapping"). Recorded once per name; later references keep
    /// whatever casing they were written with in the AST, so the generator
    /// consults this to normalize them back to the canonical spelling.
    canonical_names: FxHashMap<String, String>,
    /// The declared return type of the function body currently being
    /// walked, if any. `RETURN` outside of this is `SEM013`.
    current_return_type: Option<StaticType>,
}

impl<'a> Analyzer<'a> {
    pub(crate) fn new(handler: &'a Handler) -> Self {
        Self {
            handler,
            scopes: ScopeStack::new(),
            open_files: FxHashMap::default(),
            variable_types: FxHashMap::default(),
            canonical_names: FxHashMap::default(),
            current_return_type: None,
        }
    }

    pub(crate) fn run(mut self, program: &Program) -> SemanticResult {
        self.register_top_level_routines(program);
        for stmt in program {
            self.analyze_stmt(stmt);
        }
        SemanticResult {
            variable_types: self.variable_types,
            canonical_names: self.canonical_names,
        }
    }

    /// Records `name`'s first-seen spelling, keyed by lowercase. A later
    /// call with a different casing of the same name is a no-op.
    pub(crate) fn record_spelling(&mut self, name: &str) {
        self.canonical_names.entry(name.to_ascii_lowercase()).or_insert_with(|| name.to_string());
    }

    /// Pre-pass (§4.3): every top-level `PROCEDURE`/`FUNCTION` is registered
    /// before any body is analyzed, so routines can call each other
    /// regardless of source order. Name collisions (including across
    /// procedure/function kinds) are `SEM001`.
    fn register_top_level_routines(&mut self, program: &Program) {
        for stmt in program {
            let (name, kind, span) = match &stmt.kind {
                StmtKind::ProcedureDef { name, params, .. } => (
                    name,
                    SymbolKind::Procedure {
                        params: params.iter().map(|p| StaticType::from_type_node(&p.ty)).collect(),
                    },
                    stmt.span,
                ),
                StmtKind::FunctionDef { name, params, return_type, .. } => (
                    name,
                    SymbolKind::Function {
                        params: params.iter().map(|p| StaticType::from_type_node(&p.ty)).collect(),
                        return_type: StaticType::from_type_node(return_type),
                    },
                    stmt.span,
                ),
                _ => continue,
            };
            self.record_spelling(name);
            if !self.scopes.define(Symbol::new(name.clone(), span, kind)) {
                self.report(
                    DiagnosticCode::Sem001,
                    span,
                    format!("'{name}' is already defined at the top level"),
                );
            }
        }
    }

    /// Runs `body` in a fresh child scope whose `openFiles` state is
    /// restored on exit — a block's own opens/closes never leak to its
    /// enclosing scope (§4.3).
    fn in_block_scope<T>(&mut self, body: impl FnOnce(&mut Self) -> T) -> T {
        self.scopes.enter();
        let saved_open_files = self.open_files.clone();
        let result = body(self);
        self.open_files = saved_open_files;
        self.scopes.exit();
        result
    }

    /// Whether `stmts` textually contains a `RETURN` anywhere, including
    /// inside nested `IF`/`CASE`/loop bodies but *not* inside a nested
    /// routine definition (§9: "textual presence", not per-branch analysis).
    fn contains_return(stmts: &[Stmt]) -> bool {
        stmts.iter().any(Self::stmt_contains_return)
    }

    fn stmt_contains_return(stmt: &Stmt) -> bool {
        match &stmt.kind {
            StmtKind::Return { .. } => true,
            StmtKind::If { then_branch, else_branch, .. } => {
                Self::contains_return(then_branch)
                    || else_branch.as_deref().is_some_and(Self::contains_return)
            }
            StmtKind::Case { clauses, otherwise, .. } => {
                clauses.iter().any(|c| Self::stmt_contains_return(&c.body))
                    || otherwise.as_deref().is_some_and(Self::stmt_contains_return)
            }
            StmtKind::For { body, .. } | StmtKind::While { body, .. } | StmtKind::Repeat { body, .. } => {
                Self::contains_return(body)
            }
            _ => false,
        }
    }

    pub(crate) fn report(&self, code: DiagnosticCode, span: Span, message: impl Into<String>) {
        DiagnosticBuilder::error(code, message).span(span).emit(self.handler);
    }
}
