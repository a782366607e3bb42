//! [`Diagnostic`] itself, the fluent [`DiagnosticBuilder`] used by every
//! compiler stage to construct one, and the [`Handler`] that stages share to
//! accumulate diagnostics without threading a `Vec` through every call.

use std::cell::RefCell;

use crate::diagnostic::{DiagnosticCode, Severity};
use crate::span::Span;

/// One structured diagnostic: a stable code, a severity, a human message, a
/// span, and an optional hint. This is the internal representation used
/// throughout the pipeline (§3 of the spec); the wire shape sent to callers
/// is a separate, flatter struct defined at the façade boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub message: String,
    pub severity: Severity,
    pub span: Span,
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, severity: Severity, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            severity,
            span,
            hint: None,
        }
    }
}

/// Builds a [`Diagnostic`] one field at a time, then either hands it back
/// (`build`) or pushes it directly onto a [`Handler`] (`emit`).
///
/// # Examples
///
/// ```
/// use pseudoc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error(DiagnosticCode::Sem019, "Value is not declared")
///     .span(Span::at(1, 1))
///     .hint("add a DECLARE statement before first use")
///     .emit(&handler);
/// assert!(handler.has_errors());
/// ```
pub struct DiagnosticBuilder {
    code: DiagnosticCode,
    severity: Severity,
    message: String,
    span: Span,
    hint: Option<String>,
}

impl DiagnosticBuilder {
    pub fn new(severity: Severity, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            severity,
            message: message.into(),
            span: Span::DUMMY,
            hint: None,
        }
    }

    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    pub fn info(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, code, message)
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic {
            code: self.code,
            message: self.message,
            severity: self.severity,
            span: self.span,
            hint: self.hint,
        }
    }

    pub fn emit(self, handler: &Handler) {
        handler.emit(self.build());
    }
}

/// Shared sink for diagnostics across the whole pipeline.
///
/// Every stage (tokenizer, parser, semantic analyzer) takes a `&Handler` and
/// pushes into it as it goes; the façade collects the final, sorted list
/// once every stage has run. Interior mutability means stages don't need
/// exclusive access to report an error in the middle of read-only analysis.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain the handler, returning diagnostics sorted by
    /// `(start_line, start_column, code)` as required by §3/§5.
    pub fn into_sorted(self) -> Vec<Diagnostic> {
        let mut diagnostics = self.diagnostics.into_inner();
        diagnostics.sort_by(|a, b| {
            (a.span.start_line, a.span.start_column, a.code.as_str()).cmp(&(
                b.span.start_line,
                b.span.start_column,
                b.code.as_str(),
            ))
        });
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_through_builder_records_diagnostic() {
        let handler = Handler::new();
        DiagnosticBuilder::error(DiagnosticCode::Syn002, "Unexpected character")
            .span(Span::at(1, 1))
            .emit(&handler);
        assert_eq!(handler.len(), 1);
        assert!(handler.has_errors());
    }

    #[test]
    fn warnings_do_not_count_as_errors() {
        let handler = Handler::new();
        DiagnosticBuilder::warning(DiagnosticCode::Sem011, "unused").emit(&handler);
        assert!(!handler.has_errors());
    }

    #[test]
    fn into_sorted_orders_by_position_then_code() {
        let handler = Handler::new();
        DiagnosticBuilder::error(DiagnosticCode::Sem019, "b")
            .span(Span::at(2, 1))
            .emit(&handler);
        DiagnosticBuilder::error(DiagnosticCode::Syn002, "a")
            .span(Span::at(1, 5))
            .emit(&handler);
        DiagnosticBuilder::error(DiagnosticCode::Syn001, "a2")
            .span(Span::at(1, 5))
            .emit(&handler);

        let sorted = handler.into_sorted();
        let codes: Vec<_> = sorted.iter().map(|d| d.code).collect();
        assert_eq!(
            codes,
            vec![
                DiagnosticCode::Syn001,
                DiagnosticCode::Syn002,
                DiagnosticCode::Sem019
            ]
        );
    }
}
