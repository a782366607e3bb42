//! pseudoc-gen — translates a type-checked AST into a standalone Python
//! module (§4.4).
//!
//! Generation is total: by the time a program reaches this crate it has
//! already passed semantic analysis, so there is no failure path here and
//! no `Result` to thread. The emitted module always starts with the fixed
//! runtime [`prelude`], followed by every top-level routine as a Python
//! `def` in source order, a `def __main__():` wrapping the remaining
//! top-level statements, and a final bare call to it.

mod generator;
mod prelude;

#[cfg(test)]
mod edge_cases;

use pseudoc_par::ast::Program;
use pseudoc_sem::SemanticResult;

pub use prelude::PRELUDE;

/// Renders `program` as a complete, runnable Python module.
pub fn generate(program: &Program, semantics: &SemanticResult) -> String {
    generator::generate(program, semantics)
}
