//! pseudoc-sem — the semantic analyzer (§4.3).
//!
//! Walks the parsed AST with a scope stack and a map of currently-open
//! virtual files, checking scoping, typing, routine signatures, file-mode
//! discipline, and the function return-path rule. Never aborts on its own
//! diagnostics — an `unknown` type absorbs into every comparison so one bad
//! expression doesn't cascade into a wall of further errors.

mod analyzer;
mod scope;
mod symbol;
mod ty;

#[cfg(test)]
mod edge_cases;

use rustc_hash::FxHashMap;

use pseudoc_par::ast::Program;
use pseudoc_util::Handler;

pub use symbol::{Symbol, SymbolKind};
pub use ty::StaticType;

/// Everything downstream (code generation) needs from analysis, beyond the
/// diagnostics already pushed onto the shared [`Handler`].
#[derive(Debug, Default)]
pub struct SemanticResult {
    /// Lowercase identifier -> declared type, used by code generation to
    /// pick the right `__coerce_input` target type for `INPUT` statements
    /// without re-running name resolution.
    pub variable_types: FxHashMap<String, StaticType>,
    /// Lowercase identifier -> the spelling used at its first declaration
    /// (§4.4 "Name mapping": emitted code preserves the first declared
    /// spelling regardless of how later references are cased).
    pub canonical_names: FxHashMap<String, String>,
}

impl SemanticResult {
    pub fn type_of(&self, name: &str) -> Option<&StaticType> {
        self.variable_types.get(&name.to_ascii_lowercase())
    }

    /// The spelling to emit for `name`, falling back to `name` itself for
    /// built-ins and anything analysis never saw (e.g. inside an `unknown`-
    /// typed expression following an earlier error).
    pub fn spelling_of<'a>(&'a self, name: &'a str) -> &'a str {
        self.canonical_names
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
            .unwrap_or(name)
    }
}

/// Runs semantic analysis over a parsed program, reporting diagnostics to
/// `handler` as it goes.
pub fn analyze(program: &Program, handler: &Handler) -> SemanticResult {
    analyzer::Analyzer::new(handler).run(program)
}
