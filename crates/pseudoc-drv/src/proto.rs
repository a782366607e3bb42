//! Wire-level DTOs for the external interfaces of spec §6. These are kept
//! separate from the internal [`pseudoc_util::Diagnostic`]/[`pseudoc_util::Span`]
//! representation used by the pipeline itself: the wire shape is flat
//! (`line`/`column` pairs instead of a nested span) and uses a lowercase
//! string for severity, while the internal representation stays free to
//! evolve (e.g. the `(start_line, start_column, code)` sort in §4.5/§5 only
//! has to hold for the internal type).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use pseudoc_util::{Diagnostic, Severity};

/// A compile request, per §6. `strict` is reserved and currently always
/// `true` — the grammar of §4.2 has no non-strict mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileRequest {
    pub source: String,
    pub filename: String,
    #[serde(default = "default_strict")]
    pub strict: bool,
}

fn default_strict() -> bool {
    true
}

impl CompileRequest {
    pub fn new(source: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            filename: filename.into(),
            strict: true,
        }
    }
}

/// The result of a compile request, per §6.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileResult {
    pub success: bool,
    pub diagnostics: Vec<DiagnosticWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ast_json: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python_code: Option<String>,
}

/// The flat diagnostic shape exchanged with callers (§6 "Diagnostic wire
/// shape"), as opposed to the nested-[`pseudoc_util::Span`] shape used
/// internally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticWire {
    pub code: String,
    pub message: String,
    pub severity: String,
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl From<&Diagnostic> for DiagnosticWire {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            code: diagnostic.code.as_str().to_owned(),
            message: diagnostic.message.clone(),
            severity: severity_str(diagnostic.severity).to_owned(),
            line: diagnostic.span.start_line,
            column: diagnostic.span.start_column,
            end_line: diagnostic.span.end_line,
            end_column: diagnostic.span.end_column,
            hint: diagnostic.hint.clone(),
        }
    }
}

fn severity_str(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    }
}

/// The sandbox run request, per §6. The compiler core never executes this —
/// the execution sandbox is an out-of-scope external collaborator (§1) — but
/// the shape is defined here so a host can speak it without guessing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    pub python_code: String,
    pub stdin_lines: Vec<String>,
    pub virtual_files: BTreeMap<String, Vec<String>>,
}

/// The sandbox run result, per §6.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    pub diagnostics: Vec<DiagnosticWire>,
    pub virtual_files: BTreeMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pseudoc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

    #[test]
    fn wire_severity_is_lowercase() {
        let handler = Handler::new();
        DiagnosticBuilder::error(DiagnosticCode::Sem019, "Value is not declared")
            .span(Span::at(1, 1))
            .emit(&handler);
        let diagnostics = handler.into_sorted();
        let wire = DiagnosticWire::from(&diagnostics[0]);
        assert_eq!(wire.severity, "error");
        assert_eq!(wire.code, "SEM019");
        assert_eq!(wire.line, 1);
        assert_eq!(wire.column, 1);
    }

    #[test]
    fn compile_request_defaults_strict_true_on_missing_field() {
        let json = r#"{"source": "", "filename": "a.pseudo"}"#;
        let request: CompileRequest = serde_json::from_str(json).unwrap();
        assert!(request.strict);
    }

    #[test]
    fn compile_result_omits_optional_fields_when_failed() {
        let result = CompileResult {
            success: false,
            diagnostics: Vec::new(),
            ast_json: None,
            python_code: None,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("ast_json"));
        assert!(!json.contains("python_code"));
    }
}
