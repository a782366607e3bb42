//! Punctuation and operator scanning, including the two-character lookahead
//! operators (`<-`, `<=`, `>=`, `<>`).

use pseudoc_util::DiagnosticCode;

use crate::token::{Token, TokenKind};

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn lex_operator_or_punct(&mut self) -> Token {
        if self.cursor.matches_str("<-") {
            self.cursor.advance();
            self.cursor.advance();
            return self.make(TokenKind::Assign, "<-");
        }
        if self.cursor.matches_str("<=") {
            self.cursor.advance();
            self.cursor.advance();
            return self.make(TokenKind::Le, "<=");
        }
        if self.cursor.matches_str(">=") {
            self.cursor.advance();
            self.cursor.advance();
            return self.make(TokenKind::Ge, ">=");
        }
        if self.cursor.matches_str("<>") {
            self.cursor.advance();
            self.cursor.advance();
            return self.make(TokenKind::Ne, "<>");
        }

        let c = self.cursor.current();
        let kind = match c {
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '=' => TokenKind::Eq,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            _ => {
                self.cursor.advance();
                self.report(DiagnosticCode::Syn002, format!("Unexpected character '{c}'"));
                // Skip the bad character entirely rather than emitting a
                // fake token for it; the next real token picks up from here.
                return self.next_token();
            }
        };
        self.cursor.advance();
        self.make(kind, c.to_string())
    }
}
