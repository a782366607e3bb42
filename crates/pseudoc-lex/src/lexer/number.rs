//! Numeric literal scanning: `[0-9]+` is an integer; a `.` followed by
//! another digit extends it into a real.

use crate::token::{Token, TokenKind};

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn lex_number(&mut self) -> Token {
        let mut text = String::new();
        while self.cursor.current().is_ascii_digit() {
            text.push(self.cursor.advance());
        }

        if self.cursor.current() == '.' && self.cursor.peek(1).is_ascii_digit() {
            text.push(self.cursor.advance()); // '.'
            while self.cursor.current().is_ascii_digit() {
                text.push(self.cursor.advance());
            }
            let value: f64 = text.parse().unwrap_or(0.0);
            return self.make(TokenKind::RealLiteral(value), text);
        }

        let value: i64 = text.parse().unwrap_or(0);
        self.make(TokenKind::IntegerLiteral(value), text)
    }
}
