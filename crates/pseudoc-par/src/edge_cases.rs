//! Property-based coverage for parser recovery behaviors (§8).

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use pseudoc_lex::Lexer;
    use pseudoc_util::Handler;

    use crate::ast::{ExprKind, StmtKind};
    use crate::Parser;

    fn parse(source: &str) -> (crate::Program, Handler) {
        let handler = Handler::new();
        let tokens = Lexer::new(source, &handler).tokenize();
        let program = Parser::new(tokens, &handler).parse();
        (program, handler)
    }

    proptest! {
        /// A chain of `n` integer literals joined by `+` always parses to a
        /// single expression statement with no diagnostics, regardless of
        /// chain length.
        #[test]
        fn chained_additions_parse_without_errors(n in 1usize..12) {
            let mut source = String::from("OUTPUT 1");
            for _ in 0..n {
                source.push_str(" + 1");
            }
            source.push('\n');
            let (program, handler) = parse(&source);
            prop_assert!(!handler.has_errors());
            prop_assert_eq!(program.len(), 1);
        }

        /// Mismatched NEXT identifiers always report a diagnostic, and the
        /// loop body is parsed regardless.
        #[test]
        fn mismatched_next_identifier_always_errors(suffix in "[A-Z][a-z]{1,5}") {
            let source = format!(
                "DECLARE I : INTEGER\nFOR I <- 1 TO 2\n    OUTPUT I\nNEXT Other{suffix}\n"
            );
            let (program, handler) = parse(&source);
            prop_assert!(handler.has_errors());
            prop_assert_eq!(program.len(), 2);
        }
    }

    #[test]
    fn unterminated_expression_yields_error_node_not_a_panic() {
        let (program, handler) = parse("OUTPUT\n");
        assert!(handler.has_errors());
        assert_eq!(program.len(), 1);
        match &program[0].kind {
            StmtKind::Output { values } => {
                assert_eq!(values.len(), 1);
                assert!(matches!(values[0].kind, ExprKind::Error));
            }
            other => panic!("expected an Output statement, got {other:?}"),
        }
    }

    #[test]
    fn case_clause_spanning_two_lines_reports_syn023() {
        let source = "DECLARE Grade : INTEGER\nCASE OF Grade\n    1:\n        OUTPUT \"One\"\nENDCASE\n";
        let (_, handler) = parse(source);
        assert!(handler.has_errors());
    }
}
