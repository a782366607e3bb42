//! The tokenizer (§4.1 of the spec): UTF-8 source text in, a token stream
//! and lexical diagnostics out.

mod identifier;
mod number;
mod operator;
mod string;

use pseudoc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

pub struct Lexer<'a> {
    cursor: Cursor,
    handler: &'a Handler,
    token_start_line: u32,
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Tokenizes the whole source, always ending with one `Eof` token.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return self.make(TokenKind::Eof, String::new());
        }

        let c = self.cursor.current();
        match c {
            '\n' => {
                self.cursor.advance();
                self.make(TokenKind::Newline, "\n")
            }
            '\u{2190}' => {
                self.cursor.advance();
                self.make(TokenKind::Assign, "\u{2190}")
            }
            '"' => self.lex_string(),
            '\'' | '\u{A78C}' => self.lex_char(),
            '0'..='9' => self.lex_number(),
            c if c.is_ascii_alphabetic() => self.lex_identifier(),
            _ => self.lex_operator_or_punct(),
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current() {
                ' ' | '\t' | '\r' => {
                    self.cursor.advance();
                }
                '/' if self.cursor.peek(1) == '/' => {
                    while !self.cursor.is_at_end() && self.cursor.current() != '\n' {
                        self.cursor.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn span_from_start(&self) -> Span {
        Span::new(
            self.token_start_line,
            self.token_start_column,
            self.cursor.line(),
            self.cursor.column(),
        )
    }

    fn make(&self, kind: TokenKind, lexeme: impl Into<String>) -> Token {
        Token::new(kind, lexeme, self.span_from_start())
    }

    fn report(&self, code: DiagnosticCode, message: impl Into<String>) {
        DiagnosticBuilder::error(code, message)
            .span(self.span_from_start())
            .emit(self.handler);
    }
}
