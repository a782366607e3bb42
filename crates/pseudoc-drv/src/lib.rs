//! pseudoc-drv — the compiler façade (§4.5) and the external-interface DTOs
//! of §6.
//!
//! This crate ties the four pipeline crates together: tokenize, parse,
//! analyze, generate. It owns nothing about the language itself — every
//! rule in spec §4 lives in `pseudoc-lex`/`pseudoc-par`/`pseudoc-sem`/
//! `pseudoc-gen` — its only job is sequencing those stages, merging their
//! diagnostics into one sorted list, and gating code emission on the
//! absence of an `error`-severity diagnostic (§4.5, §7).
//!
//! The pipeline itself is synchronous and has no shared mutable state across
//! calls (§5): [`compile`] takes source text and returns a value, full stop.

pub mod error;
pub mod proto;

use pseudoc_util::Handler;

pub use proto::{CompileRequest, CompileResult, DiagnosticWire, RunRequest, RunResult};

/// Runs the full pipeline over `request.source` and returns the merged
/// result (§4.5, §6).
///
/// `request.filename` is currently unused by the pipeline itself (the
/// grammar has no multi-file or `#include` construct — see `spec.md`
/// Non-goals) but is threaded through so a future diagnostic referencing the
/// originating file has somewhere to get it from without a signature change.
pub fn compile(request: &CompileRequest) -> CompileResult {
    let _span = tracing::debug_span!("compile", filename = %request.filename).entered();
    let handler = Handler::new();

    let tokens = {
        let _span = tracing::trace_span!("tokenize").entered();
        pseudoc_lex::Lexer::new(&request.source, &handler).tokenize()
    };
    tracing::debug!(token_count = tokens.len(), "tokenized");

    let program = {
        let _span = tracing::trace_span!("parse").entered();
        pseudoc_par::Parser::new(tokens, &handler).parse()
    };
    tracing::debug!(stmt_count = program.len(), "parsed");

    let semantics = {
        let _span = tracing::trace_span!("analyze").entered();
        pseudoc_sem::analyze(&program, &handler)
    };

    let diagnostics = handler.into_sorted();
    let has_errors = diagnostics
        .iter()
        .any(|d| d.severity == pseudoc_util::Severity::Error);
    tracing::debug!(
        diagnostic_count = diagnostics.len(),
        has_errors,
        "analyzed"
    );

    let ast_json = serde_json::to_string(&program).ok();
    let wire_diagnostics = diagnostics.iter().map(DiagnosticWire::from).collect();

    if has_errors {
        return CompileResult {
            success: false,
            diagnostics: wire_diagnostics,
            ast_json,
            python_code: None,
        };
    }

    let python_code = {
        let _span = tracing::trace_span!("generate").entered();
        pseudoc_gen::generate(&program, &semantics)
    };
    tracing::debug!(output_len = python_code.len(), "generated");

    CompileResult {
        success: true,
        diagnostics: wire_diagnostics,
        ast_json,
        python_code: Some(python_code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile_source(source: &str) -> CompileResult {
        compile(&CompileRequest::new(source, "test.pseudo"))
    }

    #[test]
    fn totals_program_compiles_and_runs_the_expected_shape() {
        let source = "DECLARE Total : INTEGER\nDECLARE Index : INTEGER\nFOR Index <- 1 TO 3\n    Total <- Total + Index\nNEXT Index\nOUTPUT Total\n";
        let result = compile_source(source);
        assert!(result.success, "{:?}", result.diagnostics);
        let code = result.python_code.expect("python code on success");
        assert!(code.contains("for Index in __inclusive_range(1, 3, 1):"));
        assert!(code.contains("__output(Total)"));
    }

    #[test]
    fn malformed_if_fails_with_syn018() {
        let source = "DECLARE Score : INTEGER\nIF Score > 10 THEN\n    OUTPUT \"High\"\n";
        let result = compile_source(source);
        assert!(!result.success);
        assert!(result.python_code.is_none());
        assert!(result.diagnostics.iter().any(|d| d.code == "SYN018"));
    }

    #[test]
    fn undeclared_identifier_fails_with_sem019_at_one_one() {
        let result = compile_source("Value <- 7\n");
        assert!(!result.success);
        let d = result
            .diagnostics
            .iter()
            .find(|d| d.code == "SEM019")
            .expect("SEM019 present");
        assert_eq!((d.line, d.column), (1, 1));
    }

    #[test]
    fn array_dimension_mismatch_fails_with_sem027() {
        let source = "DECLARE Grid : ARRAY[1:3, 1:3] OF INTEGER\nDECLARE Value : INTEGER\nValue <- Grid[1]\n";
        let result = compile_source(source);
        assert!(!result.success);
        assert!(result.diagnostics.iter().any(|d| d.code == "SEM027"));
    }

    #[test]
    fn file_mode_violation_fails_with_sem015() {
        let source = "DECLARE Line : STRING\nOPENFILE \"FileA.txt\" FOR WRITE\nREADFILE \"FileA.txt\", Line\n";
        let result = compile_source(source);
        assert!(!result.success);
        assert!(result.diagnostics.iter().any(|d| d.code == "SEM015"));
    }

    #[test]
    fn lowercase_keyword_fails_with_syn001_and_uppercase_fixes_it() {
        let lower = compile_source("declare X : INTEGER\n");
        assert!(!lower.success);
        assert!(lower.diagnostics.iter().any(|d| d.code == "SYN001"));

        let upper = compile_source("DECLARE X : INTEGER\n");
        assert!(upper.success, "{:?}", upper.diagnostics);
    }

    #[test]
    fn diagnostics_are_sorted_by_line_then_column_then_code() {
        let source = "Value <- Other\nOUTPUT Missing\n";
        let result = compile_source(source);
        assert!(!result.success);
        let positions: Vec<_> = result
            .diagnostics
            .iter()
            .map(|d| (d.line, d.column))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn success_iff_no_error_severity_diagnostic() {
        for source in [
            "DECLARE X : INTEGER\nOUTPUT X\n",
            "Y <- 1\n",
            "declare z : INTEGER\n",
        ] {
            let result = compile_source(source);
            let any_error = result.diagnostics.iter().any(|d| d.severity == "error");
            assert_eq!(result.success, !any_error, "source: {source:?}");
            assert_eq!(result.success, result.python_code.is_some());
        }
    }

    #[test]
    fn ast_json_is_present_on_both_success_and_failure() {
        assert!(compile_source("DECLARE X : INTEGER\n").ast_json.is_some());
        assert!(compile_source("Value <- 1\n").ast_json.is_some());
    }
}
