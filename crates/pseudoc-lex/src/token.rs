//! Token definitions (§3 "Token").

use pseudoc_util::Span;
use serde::{Deserialize, Serialize};

use crate::keyword::Keyword;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    Newline,
    Eof,
    Identifier,
    IntegerLiteral(i64),
    RealLiteral(f64),
    StringLiteral(String),
    CharLiteral(char),
    Keyword(Keyword),

    /// `<-` or `←`.
    Assign,
    Colon,
    Comma,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Eq,
    Lt,
    Gt,
    Le,
    Ge,
    Ne,
}

/// A single lexical token: its kind, its original source spelling, and the
/// span it covers. Every token carries a span (§3 invariant).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self.kind, TokenKind::Keyword(k) if k == keyword)
    }
}
