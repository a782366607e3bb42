//! Expression parsing: Pratt (operator-precedence) climbing over the table
//! in §4.2 — `OR` loosest, `^` tightest among binaries, unary `NOT`/`-`
//! binding tighter than any binary operator.

use pseudoc_lex::{Keyword, TokenKind};
use pseudoc_util::DiagnosticCode;

use crate::ast::{BinaryOp, Expr, ExprKind, UnaryOp};
use crate::Parser;

/// Binding power a unary prefix operator parses its operand at — tighter
/// than every binary operator below, including `^`.
const UNARY_BP: u8 = 13;

impl<'a> Parser<'a> {
    pub(crate) fn parse_expr(&mut self, min_bp: u8) -> Expr {
        let mut left = self.parse_unary();
        loop {
            let (op, l_bp, r_bp) = match self.peek_binary_op() {
                Some(triple) => triple,
                None => break,
            };
            if l_bp < min_bp {
                break;
            }
            self.advance();
            let right = self.parse_expr(r_bp);
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }
        left
    }

    fn peek_binary_op(&self) -> Option<(BinaryOp, u8, u8)> {
        let op = match &self.peek().kind {
            TokenKind::Keyword(Keyword::Or) => BinaryOp::Or,
            TokenKind::Keyword(Keyword::And) => BinaryOp::And,
            TokenKind::Eq => BinaryOp::Eq,
            TokenKind::Ne => BinaryOp::Ne,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::Le => BinaryOp::Le,
            TokenKind::Gt => BinaryOp::Gt,
            TokenKind::Ge => BinaryOp::Ge,
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Caret => BinaryOp::Pow,
            _ => return None,
        };
        let (l_bp, r_bp) = match op {
            BinaryOp::Or => (1, 2),
            BinaryOp::And => (3, 4),
            BinaryOp::Eq
            | BinaryOp::Ne
            | BinaryOp::Lt
            | BinaryOp::Le
            | BinaryOp::Gt
            | BinaryOp::Ge => (5, 6),
            BinaryOp::Add | BinaryOp::Sub => (7, 8),
            BinaryOp::Mul | BinaryOp::Div => (9, 10),
            // right-associative: the right operand parses at a lower bp
            // than the left compares against.
            BinaryOp::Pow => (12, 11),
        };
        Some((op, l_bp, r_bp))
    }

    fn parse_unary(&mut self) -> Expr {
        let start = self.current_span();
        if self.is_keyword(Keyword::Not) {
            self.advance();
            let operand = self.parse_expr(UNARY_BP);
            let span = start.merge(operand.span);
            return Expr::new(
                ExprKind::Unary {
                    op: UnaryOp::Not,
                    operand: Box::new(operand),
                },
                span,
            );
        }
        if matches!(self.peek().kind, TokenKind::Minus) {
            self.advance();
            let operand = self.parse_expr(UNARY_BP);
            let span = start.merge(operand.span);
            return Expr::new(
                ExprKind::Unary {
                    op: UnaryOp::Neg,
                    operand: Box::new(operand),
                },
                span,
            );
        }
        self.parse_postfix_primary()
    }

    /// A primary expression, followed by an optional single `(args)` or
    /// `[indices]` trailer — pseudocode has no chained postfixes like `a()()`.
    pub(crate) fn parse_postfix_primary(&mut self) -> Expr {
        let primary = self.parse_primary();
        if let ExprKind::Identifier(name) = &primary.kind {
            let name = name.clone();
            if matches!(self.peek().kind, TokenKind::LParen) {
                return self.parse_call_trailer(name, primary.span);
            }
            if matches!(self.peek().kind, TokenKind::LBracket) {
                return self.parse_array_index_trailer(name, primary.span);
            }
        }
        primary
    }

    fn parse_call_trailer(&mut self, name: String, start_span: pseudoc_util::Span) -> Expr {
        self.advance(); // '('
        let mut args = Vec::new();
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
        let end_span = self.current_span();
        if matches!(self.peek().kind, TokenKind::RParen) {
            self.advance();
        } else {
            self.report(DiagnosticCode::Syn035, "Expected ')' closing call arguments");
        }
        Expr::new(ExprKind::Call { name, args }, start_span.merge(end_span))
    }

    fn parse_array_index_trailer(&mut self, name: String, start_span: pseudoc_util::Span) -> Expr {
        self.advance(); // '['
        let mut indices = Vec::new();
        loop {
            indices.push(self.parse_expr(0));
            if matches!(self.peek().kind, TokenKind::Comma) {
                self.advance();
                continue;
            }
            break;
        }
        let end_span = self.current_span();
        if matches!(self.peek().kind, TokenKind::RBracket) {
            self.advance();
        } else {
            self.report(DiagnosticCode::Syn036, "Expected ']' closing array index");
        }
        Expr::new(
            ExprKind::ArrayAccess { name, indices },
            start_span.merge(end_span),
        )
    }

    fn parse_primary(&mut self) -> Expr {
        let span = self.current_span();
        match self.peek().kind.clone() {
            TokenKind::IntegerLiteral(n) => {
                self.advance();
                Expr::new(ExprKind::IntegerLiteral(n), span)
            }
            TokenKind::RealLiteral(n) => {
                self.advance();
                Expr::new(ExprKind::RealLiteral(n), span)
            }
            TokenKind::StringLiteral(s) => {
                self.advance();
                Expr::new(ExprKind::StringLiteral(s), span)
            }
            TokenKind::CharLiteral(c) => {
                self.advance();
                Expr::new(ExprKind::CharLiteral(c), span)
            }
            TokenKind::Keyword(Keyword::True) => {
                self.advance();
                Expr::new(ExprKind::BooleanLiteral(true), span)
            }
            TokenKind::Keyword(Keyword::False) => {
                self.advance();
                Expr::new(ExprKind::BooleanLiteral(false), span)
            }
            TokenKind::Identifier => {
                let name = self.advance().lexeme;
                Expr::new(ExprKind::Identifier(name), span)
            }
            TokenKind::Keyword(kw) if kw.is_builtin_function() => {
                let name = self.advance().lexeme;
                Expr::new(ExprKind::Identifier(name), span)
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr(0);
                if matches!(self.peek().kind, TokenKind::RParen) {
                    self.advance();
                } else {
                    self.report(DiagnosticCode::Syn030, "Expected ')' closing parenthesized expression");
                }
                inner
            }
            _ => {
                self.report(DiagnosticCode::Syn029, "Expected an expression");
                Expr::new(ExprKind::Error, span)
            }
        }
    }
}
