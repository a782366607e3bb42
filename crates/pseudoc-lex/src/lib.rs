//! pseudoc-lex — the tokenizer (§4.1).
//!
//! Turns UTF-8 pseudocode source into a flat token stream. Whitespace and
//! `//` comments are discarded; newlines are kept as first-class tokens
//! because the grammar is statement-per-line. Scanning never aborts: a bad
//! character, an unterminated string, or a miscased keyword all produce a
//! diagnostic and keep going, because recovery is the parser's job, not the
//! lexer's.

mod cursor;
#[cfg(test)]
mod edge_cases;
mod keyword;
mod lexer;
mod token;

pub use keyword::Keyword;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
