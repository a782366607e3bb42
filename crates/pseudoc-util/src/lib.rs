//! pseudoc-util — shared diagnostic and span types.
//!
//! Every other crate in this workspace (`pseudoc-lex`, `pseudoc-par`,
//! `pseudoc-sem`, `pseudoc-gen`, `pseudoc-drv`) depends on this crate and
//! only this crate; it has no dependency of its own on the rest of the
//! workspace. That keeps the diagnostic model — the one thing every stage
//! must agree on — from accidentally depending on any single stage's
//! internals.

mod diagnostic;
mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Severity};
pub use span::Span;
