//! Statement parsing: one method per construct in §4.2's "Statement forms".

use pseudoc_lex::{Keyword, TokenKind};
use pseudoc_util::{DiagnosticCode, Span};

use crate::ast::{CaseClause, FileMode, Param, Stmt, StmtKind};
use crate::Parser;

/// Keywords that close an `IF`/`CASE` block at the top level, used as the
/// stop set so `parse_block` doesn't swallow an `ELSE`/`OTHERWISE` it
/// doesn't own.
const ENDIF_OR_ELSE: &[Keyword] = &[Keyword::Endif, Keyword::Else];

impl<'a> Parser<'a> {
    pub(crate) fn parse_keyword_statement(&mut self, keyword: Keyword) -> Option<Stmt> {
        match keyword {
            Keyword::Declare => Some(self.parse_declare()),
            Keyword::Constant => Some(self.parse_constant()),
            Keyword::Input => Some(self.parse_input()),
            Keyword::Output => Some(self.parse_output()),
            Keyword::If => Some(self.parse_if()),
            Keyword::Case => Some(self.parse_case()),
            Keyword::For => Some(self.parse_for()),
            Keyword::Repeat => Some(self.parse_repeat()),
            Keyword::While => Some(self.parse_while()),
            Keyword::Procedure => Some(self.parse_procedure_def()),
            Keyword::Function => Some(self.parse_function_def()),
            Keyword::Call => Some(self.parse_call_stmt()),
            Keyword::Return => Some(self.parse_return()),
            Keyword::Openfile => Some(self.parse_openfile()),
            Keyword::Readfile => Some(self.parse_readfile()),
            Keyword::Writefile => Some(self.parse_writefile()),
            Keyword::Closefile => Some(self.parse_closefile()),
            _ => {
                self.report(DiagnosticCode::Syn004, "Unexpected keyword at statement position");
                self.recover_line();
                None
            }
        }
    }

    /// `DECLARE <name> : <type>`
    fn parse_declare(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // DECLARE
        let name = self.expect_identifier(DiagnosticCode::Syn010, "Expected an identifier after DECLARE");
        if !matches!(self.peek().kind, TokenKind::Colon) {
            self.report(DiagnosticCode::Syn010, "Expected ':' after declared name");
        } else {
            self.advance();
        }
        let ty = self.parse_type();
        let span = start.merge(self.current_span());
        self.end_statement();
        Stmt::new(StmtKind::Declare { name, ty }, span)
    }

    /// `CONSTANT <name> = <literal expression>`
    fn parse_constant(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // CONSTANT
        let name = self.expect_identifier(DiagnosticCode::Syn014, "Expected an identifier after CONSTANT");
        if matches!(self.peek().kind, TokenKind::Eq) {
            self.advance();
        } else {
            self.report(DiagnosticCode::Syn014, "Expected '=' after constant name");
        }
        let value = self.parse_expr(0);
        let span = start.merge(value.span);
        self.end_statement();
        Stmt::new(StmtKind::Constant { name, value }, span)
    }

    /// `INPUT <target>`
    fn parse_input(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // INPUT
        let target = self.parse_postfix_primary();
        self.validate_assignable(&target);
        let span = start.merge(target.span);
        self.end_statement();
        Stmt::new(StmtKind::Input { target }, span)
    }

    /// `OUTPUT <expr> (, <expr>)*`
    fn parse_output(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // OUTPUT
        let mut values = vec![self.parse_expr(0)];
        while matches!(self.peek().kind, TokenKind::Comma) {
            self.advance();
            values.push(self.parse_expr(0));
        }
        let span = start.merge(self.current_span());
        self.end_statement();
        Stmt::new(StmtKind::Output { values }, span)
    }

    /// `IF <cond> THEN <newline> <stmts> (ELSE <newline> <stmts>)? ENDIF`
    fn parse_if(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // IF
        let condition = self.parse_expr(0);
        self.expect_keyword(Keyword::Then, DiagnosticCode::Syn015, "Expected THEN after IF condition");
        let then_branch = self.parse_block(ENDIF_OR_ELSE);
        let else_branch = if self.is_keyword(Keyword::Else) {
            self.advance();
            Some(self.parse_block(&[Keyword::Endif]))
        } else {
            None
        };
        let end = self.current_span();
        self.expect_keyword(Keyword::Endif, DiagnosticCode::Syn018, "Expected ENDIF closing IF");
        let span = start.merge(end);
        self.end_statement();
        Stmt::new(
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            },
            span,
        )
    }

    /// `CASE OF <subject> (<value> : <stmt>)* (OTHERWISE : <stmt>)? ENDCASE`
    /// Each clause body must start on the same line as its `:` (SYN023).
    fn parse_case(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // CASE
        self.expect_keyword(Keyword::Of, DiagnosticCode::Syn017, "Expected OF after CASE");
        let subject = self.parse_expr(0);
        self.end_statement();

        let mut clauses = Vec::new();
        let mut otherwise = None;
        loop {
            self.skip_newlines();
            if self.is_keyword(Keyword::Otherwise) {
                let clause_start = self.current_span();
                self.advance();
                if matches!(self.peek().kind, TokenKind::Colon) {
                    self.advance();
                } else {
                    self.report(DiagnosticCode::Syn041, "Expected ':' after OTHERWISE");
                }
                let body = self.parse_single_line_clause_body(clause_start);
                otherwise = Some(Box::new(body));
                continue;
            }
            if self.at_eof() || self.is_keyword(Keyword::Endcase) {
                break;
            }
            let clause_start = self.current_span();
            let value = self.parse_expr(0);
            if matches!(self.peek().kind, TokenKind::Colon) {
                self.advance();
            } else {
                self.report(DiagnosticCode::Syn041, "Expected ':' after CASE value");
            }
            let body = self.parse_single_line_clause_body(clause_start);
            clauses.push(CaseClause {
                value,
                span: clause_start.merge(body.span),
                body: Box::new(body),
            });
        }
        let end = self.current_span();
        self.expect_keyword(Keyword::Endcase, DiagnosticCode::Syn046, "Expected ENDCASE closing CASE");
        let span = start.merge(end);
        self.end_statement();
        Stmt::new(
            StmtKind::Case {
                subject,
                clauses,
                otherwise,
            },
            span,
        )
    }

    /// A CASE clause body must be exactly one statement on the same source
    /// line as its `:` — SYN023 if the line ends before a statement starts.
    fn parse_single_line_clause_body(&mut self, clause_start: Span) -> Stmt {
        if matches!(self.peek().kind, TokenKind::Newline) || self.at_eof() {
            self.report(DiagnosticCode::Syn023, "CASE clause body must start on the same line");
            self.recover_line();
            return Stmt::new(StmtKind::Output { values: vec![] }, clause_start);
        }
        self.parse_statement()
            .unwrap_or_else(|| Stmt::new(StmtKind::Output { values: vec![] }, clause_start))
    }

    /// `FOR <iterator> <- <start> TO <end> (STEP <step>)? <newline> <stmts> NEXT <iterator>`
    fn parse_for(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // FOR
        let iterator = self.expect_identifier(DiagnosticCode::Syn019, "Expected the loop iterator name after FOR");
        if matches!(self.peek().kind, TokenKind::Assign) {
            self.advance();
        } else {
            self.report(DiagnosticCode::Syn042, "Expected assignment arrow after FOR iterator");
        }
        let start_expr = self.parse_expr(0);
        self.expect_keyword(Keyword::To, DiagnosticCode::Syn019, "Expected TO in FOR header");
        let end_expr = self.parse_expr(0);
        let step = if self.is_keyword(Keyword::Step) {
            self.advance();
            Some(self.parse_expr(0))
        } else {
            None
        };
        let body = self.parse_block(&[Keyword::Next]);
        let next_span = self.current_span();
        if self.expect_keyword(Keyword::Next, DiagnosticCode::Syn027, "Expected NEXT closing FOR loop") {
            if matches!(self.peek().kind, TokenKind::Identifier) {
                let next_name = self.advance().lexeme;
                if !next_name.eq_ignore_ascii_case(&iterator) {
                    self.report(DiagnosticCode::Syn028, "NEXT identifier does not match the FOR loop's iterator");
                }
            }
        }
        let span = start.merge(next_span);
        self.end_statement();
        Stmt::new(
            StmtKind::For {
                iterator,
                start: start_expr,
                end: end_expr,
                step,
                body,
            },
            span,
        )
    }

    /// `REPEAT <newline> <stmts> UNTIL <cond>`
    fn parse_repeat(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // REPEAT
        let body = self.parse_block(&[Keyword::Until]);
        self.expect_keyword(Keyword::Until, DiagnosticCode::Syn021, "Expected UNTIL closing REPEAT");
        let condition = self.parse_expr(0);
        let span = start.merge(condition.span);
        self.end_statement();
        Stmt::new(StmtKind::Repeat { body, condition }, span)
    }

    /// `WHILE <cond> DO <newline> <stmts> ENDWHILE`
    fn parse_while(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // WHILE
        let condition = self.parse_expr(0);
        self.expect_keyword(Keyword::Do, DiagnosticCode::Syn020, "Expected DO after WHILE condition");
        let body = self.parse_block(&[Keyword::Endwhile]);
        let end = self.current_span();
        self.expect_keyword(Keyword::Endwhile, DiagnosticCode::Syn031, "Expected ENDWHILE closing WHILE");
        let span = start.merge(end);
        self.end_statement();
        Stmt::new(StmtKind::While { condition, body }, span)
    }

    /// `PROCEDURE <name> (<params>)? <newline> <stmts> ENDPROCEDURE`
    fn parse_procedure_def(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // PROCEDURE
        let name = self.expect_identifier(DiagnosticCode::Syn022, "Expected a procedure name");
        let params = self.parse_optional_param_list();
        let body = self.parse_block(&[Keyword::Endprocedure]);
        let end = self.current_span();
        self.expect_keyword(Keyword::Endprocedure, DiagnosticCode::Syn033, "Expected ENDPROCEDURE closing PROCEDURE");
        let span = start.merge(end);
        self.end_statement();
        Stmt::new(StmtKind::ProcedureDef { name, params, body }, span)
    }

    /// `FUNCTION <name> (<params>)? RETURNS <type> <newline> <stmts> ENDFUNCTION`
    fn parse_function_def(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // FUNCTION
        let name = self.expect_identifier(DiagnosticCode::Syn022, "Expected a function name");
        let params = self.parse_optional_param_list();
        self.expect_keyword(Keyword::Returns, DiagnosticCode::Syn025, "Expected RETURNS in FUNCTION header");
        let return_type = self.parse_type();
        let body = self.parse_block(&[Keyword::Endfunction]);
        let end = self.current_span();
        self.expect_keyword(Keyword::Endfunction, DiagnosticCode::Syn034, "Expected ENDFUNCTION closing FUNCTION");
        let span = start.merge(end);
        self.end_statement();
        Stmt::new(
            StmtKind::FunctionDef {
                name,
                params,
                return_type,
                body,
            },
            span,
        )
    }

    fn parse_optional_param_list(&mut self) -> Vec<Param> {
        if !matches!(self.peek().kind, TokenKind::LParen) {
            return Vec::new();
        }
        self.advance(); // '('
        let mut params = Vec::new();
        if !matches!(self.peek().kind, TokenKind::RParen) {
            loop {
                let param_span = self.current_span();
                let name = self.expect_identifier(DiagnosticCode::Syn026, "Expected a parameter name");
                if matches!(self.peek().kind, TokenKind::Colon) {
                    self.advance();
                } else {
                    self.report(DiagnosticCode::Syn026, "Expected ':' after parameter name");
                }
                let ty = self.parse_type();
                params.push(Param {
                    name,
                    ty,
                    span: param_span.merge(self.current_span()),
                });
                if matches!(self.peek().kind, TokenKind::Comma) {
                    self.advance();
                    continue;
                }
                break;
            }
        }
        if matches!(self.peek().kind, TokenKind::RParen) {
            self.advance();
        } else {
            self.report(DiagnosticCode::Syn024, "Expected ')' closing parameter list");
        }
        params
    }

    /// `CALL <name> (<args>)?`
    fn parse_call_stmt(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // CALL
        let name = self.expect_identifier(DiagnosticCode::Syn037, "Expected a procedure name after CALL");
        let mut args = Vec::new();
        if matches!(self.peek().kind, TokenKind::LParen) {
            self.advance();
            if !matches!(self.peek().kind, TokenKind::RParen) {
                loop {
                    args.push(self.parse_expr(0));
                    if matches!(self.peek().kind, TokenKind::Comma) {
                        self.advance();
                        continue;
                    }
                    break;
                }
            }
            if matches!(self.peek().kind, TokenKind::RParen) {
                self.advance();
            } else {
                self.report(DiagnosticCode::Syn035, "Expected ')' closing call arguments");
            }
        }
        let span = start.merge(self.current_span());
        self.end_statement();
        Stmt::new(StmtKind::Call { name, args }, span)
    }

    /// `RETURN <expr>`
    fn parse_return(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // RETURN
        if matches!(self.peek().kind, TokenKind::Newline) || self.at_eof() {
            self.report(DiagnosticCode::Syn038, "Expected a value after RETURN");
            self.end_statement();
            return Stmt::new(
                StmtKind::Return {
                    value: crate::ast::Expr::new(crate::ast::ExprKind::Error, start),
                },
                start,
            );
        }
        let value = self.parse_expr(0);
        let span = start.merge(value.span);
        self.end_statement();
        Stmt::new(StmtKind::Return { value }, span)
    }

    /// `OPENFILE <name> FOR (READ | WRITE)`
    fn parse_openfile(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // OPENFILE
        let name = self.parse_expr(0);
        let mode = if self.is_keyword(Keyword::Read) {
            self.advance();
            FileMode::Read
        } else if self.is_keyword(Keyword::Write) {
            self.advance();
            FileMode::Write
        } else {
            self.report(DiagnosticCode::Syn039, "Expected READ or WRITE after OPENFILE target");
            FileMode::Read
        };
        let span = start.merge(self.current_span());
        self.end_statement();
        Stmt::new(StmtKind::OpenFile { name, mode }, span)
    }

    /// `READFILE <name> , <target>`
    fn parse_readfile(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // READFILE
        let name = self.parse_expr(0);
        if matches!(self.peek().kind, TokenKind::Comma) {
            self.advance();
        } else {
            self.report(DiagnosticCode::Syn040, "Expected ',' between file name and target");
        }
        let target = self.parse_postfix_primary();
        self.validate_assignable(&target);
        let span = start.merge(target.span);
        self.end_statement();
        Stmt::new(StmtKind::ReadFile { name, target }, span)
    }

    /// `WRITEFILE <name> , <value>`
    fn parse_writefile(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // WRITEFILE
        let name = self.parse_expr(0);
        if matches!(self.peek().kind, TokenKind::Comma) {
            self.advance();
        } else {
            self.report(DiagnosticCode::Syn040, "Expected ',' between file name and value");
        }
        let value = self.parse_expr(0);
        let span = start.merge(value.span);
        self.end_statement();
        Stmt::new(StmtKind::WriteFile { name, value }, span)
    }

    /// `CLOSEFILE <name>`
    fn parse_closefile(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // CLOSEFILE
        let name = self.parse_expr(0);
        let span = start.merge(name.span);
        self.end_statement();
        Stmt::new(StmtKind::CloseFile { name }, span)
    }

    fn expect_identifier(&mut self, code: DiagnosticCode, message: &str) -> String {
        if matches!(self.peek().kind, TokenKind::Identifier) {
            self.advance().lexeme
        } else {
            self.report(code, message);
            String::new()
        }
    }

    /// `INPUT`/`READFILE` targets must be an identifier or array element,
    /// never a literal or call expression — reported at parse time since
    /// no type information is needed to detect it.
    fn validate_assignable(&mut self, target: &crate::ast::Expr) {
        use crate::ast::ExprKind;
        if !matches!(target.kind, ExprKind::Identifier(_) | ExprKind::ArrayAccess { .. }) {
            self.report(DiagnosticCode::Syn043, "Expected a variable or array element here");
        }
    }
}
