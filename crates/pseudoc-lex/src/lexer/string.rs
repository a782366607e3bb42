//! String and character literal scanning.

use pseudoc_util::DiagnosticCode;

use crate::token::{Token, TokenKind};

use super::Lexer;

const CHAR_QUOTES: [char; 2] = ['\'', '\u{A78C}'];

impl<'a> Lexer<'a> {
    pub(super) fn lex_string(&mut self) -> Token {
        self.cursor.advance(); // opening '"'
        let mut content = String::new();
        loop {
            if self.cursor.current() == '"' {
                self.cursor.advance();
                return self.make(TokenKind::StringLiteral(content.clone()), format!("\"{content}\""));
            }
            if self.cursor.is_at_end() || self.cursor.current() == '\n' {
                self.report(DiagnosticCode::Syn008, "Unterminated string literal");
                return self.make(TokenKind::StringLiteral(content.clone()), format!("\"{content}"));
            }
            content.push(self.cursor.advance());
        }
    }

    pub(super) fn lex_char(&mut self) -> Token {
        self.cursor.advance(); // opening quote
        if CHAR_QUOTES.contains(&self.cursor.current()) {
            // empty char literal: treat as unterminated, nothing to read.
            self.report(DiagnosticCode::Syn009, "Unterminated character literal");
            self.cursor.advance();
            return self.make(TokenKind::CharLiteral('\0'), "''");
        }

        let c = self.cursor.current();
        if c == '\n' || self.cursor.is_at_end() {
            self.report(DiagnosticCode::Syn009, "Unterminated character literal");
            return self.make(TokenKind::CharLiteral('\0'), "'");
        }
        self.cursor.advance();

        if CHAR_QUOTES.contains(&self.cursor.current()) {
            self.cursor.advance();
            self.make(TokenKind::CharLiteral(c), format!("'{c}'"))
        } else {
            self.report(DiagnosticCode::Syn009, "Unterminated character literal");
            self.make(TokenKind::CharLiteral(c), format!("'{c}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pseudoc_util::Handler;

    fn tokenize(source: &str) -> (Token, bool) {
        let handler = Handler::new();
        let token = Lexer::new(source, &handler).tokenize().remove(0);
        (token, handler.has_errors())
    }

    #[test]
    fn closed_string_literal() {
        let (token, errors) = tokenize("\"hello\"");
        assert_eq!(token.kind, TokenKind::StringLiteral("hello".into()));
        assert!(!errors);
    }

    #[test]
    fn unterminated_string_still_yields_token() {
        let (token, errors) = tokenize("\"hello");
        assert_eq!(token.kind, TokenKind::StringLiteral("hello".into()));
        assert!(errors);
    }

    #[test]
    fn string_unterminated_at_newline() {
        let (token, errors) = tokenize("\"hello\nworld\"");
        assert_eq!(token.kind, TokenKind::StringLiteral("hello".into()));
        assert!(errors);
    }

    #[test]
    fn closed_char_literal() {
        let (token, errors) = tokenize("'x'");
        assert_eq!(token.kind, TokenKind::CharLiteral('x'));
        assert!(!errors);
    }

    #[test]
    fn alternate_char_quote_accepted() {
        let (token, errors) = tokenize("\u{A78C}x\u{A78C}");
        assert_eq!(token.kind, TokenKind::CharLiteral('x'));
        assert!(!errors);
    }

    #[test]
    fn unterminated_char_literal() {
        let (_, errors) = tokenize("'x");
        assert!(errors);
    }
}
