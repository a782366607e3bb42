//! Diagnostic model shared by every compiler stage (§3 of the spec).

mod builder;
mod codes;
mod level;

pub use builder::{Diagnostic, DiagnosticBuilder, Handler};
pub use codes::DiagnosticCode;
pub use level::Severity;
