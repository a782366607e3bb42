//! Identifier and keyword scanning.

use pseudoc_util::DiagnosticCode;

use crate::keyword::Keyword;
use crate::token::{Token, TokenKind};

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn lex_identifier(&mut self) -> Token {
        let mut word = String::new();
        while self.cursor.current().is_ascii_alphanumeric() {
            word.push(self.cursor.advance());
        }

        let upper = word.to_ascii_uppercase();
        if let Some(keyword) = Keyword::from_uppercase(&upper) {
            if word != upper {
                self.report(
                    DiagnosticCode::Syn001,
                    format!("Keyword {upper} must be uppercase in strict mode"),
                );
            }
            return self.make(TokenKind::Keyword(keyword), word);
        }

        self.make(TokenKind::Identifier, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pseudoc_util::Handler;

    fn tokenize(source: &str) -> (Vec<Token>, Handler) {
        let handler = Handler::new();
        let tokens = Lexer::new(source, &handler).tokenize();
        (tokens, handler)
    }

    #[test]
    fn uppercase_keyword_is_clean() {
        let (tokens, handler) = tokenize("DECLARE");
        assert!(tokens[0].is_keyword(Keyword::Declare));
        assert!(!handler.has_errors());
    }

    #[test]
    fn lowercase_keyword_still_classifies_but_warns() {
        let (tokens, handler) = tokenize("declare");
        assert!(tokens[0].is_keyword(Keyword::Declare));
        assert!(handler.has_errors());
    }

    #[test]
    fn mixed_case_keyword_also_flagged() {
        let (_, handler) = tokenize("DeclaRe");
        assert!(handler.has_errors());
    }

    #[test]
    fn plain_identifier_preserves_spelling() {
        let (tokens, handler) = tokenize("TotalScore");
        assert_eq!(tokens[0].lexeme, "TotalScore");
        assert!(matches!(tokens[0].kind, TokenKind::Identifier));
        assert!(!handler.has_errors());
    }
}
