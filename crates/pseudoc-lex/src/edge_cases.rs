//! Property-based coverage for the tokenizer boundary behaviors called out
//! in §8 of the spec (keyword-casing idempotence).

#[cfg(test)]
mod tests {
    use pseudoc_util::Handler;
    use proptest::prelude::*;

    use crate::keyword::Keyword;
    use crate::lexer::Lexer;
    use crate::token::TokenKind;

    const ALL_KEYWORDS: &[&str] = &[
        "DECLARE", "CONSTANT", "ARRAY", "OF", "INTEGER", "REAL", "CHAR", "STRING", "BOOLEAN",
        "INPUT", "OUTPUT", "IF", "THEN", "ELSE", "ENDIF", "CASE", "OTHERWISE", "ENDCASE", "FOR",
        "TO", "STEP", "NEXT", "REPEAT", "UNTIL", "WHILE", "DO", "ENDWHILE", "PROCEDURE",
        "ENDPROCEDURE", "FUNCTION", "RETURNS", "ENDFUNCTION", "CALL", "RETURN", "OPENFILE",
        "READFILE", "WRITEFILE", "CLOSEFILE", "READ", "WRITE", "TRUE", "FALSE", "AND", "OR",
        "NOT", "DIV", "MOD", "LENGTH", "LCASE", "UCASE", "SUBSTRING", "ROUND", "RANDOM",
    ];

    proptest! {
        #[test]
        fn lowercasing_any_keyword_triggers_syn001(idx in 0..ALL_KEYWORDS.len()) {
            let word = ALL_KEYWORDS[idx];
            let handler = Handler::new();
            let tokens = Lexer::new(&word.to_ascii_lowercase(), &handler).tokenize();
            prop_assert!(handler.has_errors());
            prop_assert!(Keyword::from_uppercase(word).is_some());
            prop_assert!(matches!(tokens[0].kind, TokenKind::Keyword(_)));
        }

        #[test]
        fn uppercase_keyword_is_always_clean(idx in 0..ALL_KEYWORDS.len()) {
            let word = ALL_KEYWORDS[idx];
            let handler = Handler::new();
            Lexer::new(word, &handler).tokenize();
            prop_assert!(!handler.has_errors());
        }
    }
}
