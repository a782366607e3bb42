//! pseudoc-par — the parser (§4.2).
//!
//! Recursive descent for statements, Pratt (operator-precedence) parsing for
//! expressions. A syntax error never aborts the whole parse: the offending
//! statement is abandoned up to the next `NEWLINE` and parsing resumes from
//! there, so one typo produces one diagnostic instead of a hundred.

mod expr;
mod stmt;
mod types;

pub mod ast;

#[cfg(test)]
mod edge_cases;

use pseudoc_lex::{Keyword, Token, TokenKind};
use pseudoc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

pub use ast::Program;

pub struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    handler: &'a Handler,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, handler: &'a Handler) -> Self {
        Self {
            tokens,
            pos: 0,
            handler,
        }
    }

    pub fn parse(mut self) -> Program {
        self.parse_program()
    }

    fn parse_program(&mut self) -> Program {
        let mut stmts = Vec::new();
        self.skip_newlines();
        while !self.at_eof() {
            if let Some(stmt) = self.parse_statement() {
                stmts.push(stmt);
            }
            self.skip_newlines();
        }
        stmts
    }

    /// Parses statements until the lookahead is one of `stop` or EOF.
    /// Returns without consuming the stop keyword — the caller decides
    /// whether to consume it or report it missing.
    pub(crate) fn parse_block(&mut self, stop: &[Keyword]) -> Vec<ast::Stmt> {
        let mut stmts = Vec::new();
        self.skip_newlines();
        while !self.at_eof() && !self.at_any_keyword(stop) {
            if let Some(stmt) = self.parse_statement() {
                stmts.push(stmt);
            }
            self.skip_newlines();
        }
        stmts
    }

    fn parse_statement(&mut self) -> Option<ast::Stmt> {
        match &self.peek().kind {
            TokenKind::Keyword(kw) => self.parse_keyword_statement(*kw),
            TokenKind::Identifier => Some(self.parse_assignment()),
            _ => {
                self.report(DiagnosticCode::Syn004, "Expected a statement");
                self.recover_line();
                None
            }
        }
    }

    fn parse_assignment(&mut self) -> ast::Stmt {
        let target = self.parse_postfix_primary();
        let start = target.span;
        if !self.consume_keyword_or_token_assign() {
            self.report(DiagnosticCode::Syn042, "Expected assignment arrow");
        }
        let value = self.parse_expr(0);
        let span = start.merge(value.span);
        self.end_statement();
        ast::Stmt::new(ast::StmtKind::Assign { target, value }, span)
    }

    fn consume_keyword_or_token_assign(&mut self) -> bool {
        if matches!(self.peek().kind, TokenKind::Assign) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Discards any unconsumed tokens up to (and including) the next
    /// `NEWLINE`, the per-statement error recovery strategy (§4.2).
    pub(crate) fn recover_line(&mut self) {
        while !self.at_eof() && !matches!(self.peek().kind, TokenKind::Newline) {
            self.advance();
        }
        if matches!(self.peek().kind, TokenKind::Newline) {
            self.advance();
        }
    }

    /// Consumes a trailing newline (or stops at EOF) without reporting
    /// anything — used after well-formed single-line statements.
    pub(crate) fn end_statement(&mut self) {
        if matches!(self.peek().kind, TokenKind::Newline) {
            self.advance();
        }
    }

    // ---- token cursor primitives ----

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub(crate) fn peek_at(&self, offset: usize) -> &Token {
        self.tokens
            .get(self.pos + offset)
            .unwrap_or_else(|| self.tokens.last().expect("tokens always end in Eof"))
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn at_eof(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    pub(crate) fn current_span(&self) -> Span {
        self.peek().span
    }

    pub(crate) fn is_keyword(&self, keyword: Keyword) -> bool {
        self.peek().is_keyword(keyword)
    }

    pub(crate) fn at_any_keyword(&self, keywords: &[Keyword]) -> bool {
        keywords.iter().any(|k| self.is_keyword(*k))
    }

    pub(crate) fn skip_newlines(&mut self) {
        while matches!(self.peek().kind, TokenKind::Newline) {
            self.advance();
        }
    }

    /// Consumes `keyword` if present, reporting `code`/`message` if not.
    /// Returns whether the keyword was found.
    pub(crate) fn expect_keyword(
        &mut self,
        keyword: Keyword,
        code: DiagnosticCode,
        message: &str,
    ) -> bool {
        if self.is_keyword(keyword) {
            self.advance();
            true
        } else {
            self.report(code, message);
            false
        }
    }

    pub(crate) fn report(&self, code: DiagnosticCode, message: impl Into<String>) {
        DiagnosticBuilder::error(code, message)
            .span(self.current_span())
            .emit(self.handler);
    }
}
