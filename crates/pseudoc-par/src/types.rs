//! Type annotation parsing shared by `DECLARE`, parameter lists and
//! `FUNCTION ... RETURNS`.

use pseudoc_lex::{Keyword, TokenKind};
use pseudoc_util::DiagnosticCode;

use crate::ast::{BasicType, Dimension, TypeNode};
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_type(&mut self) -> TypeNode {
        if self.is_keyword(Keyword::Array) {
            return self.parse_array_type();
        }
        TypeNode::Basic(self.parse_basic_type())
    }

    fn parse_basic_type(&mut self) -> BasicType {
        let kw = match &self.peek().kind {
            TokenKind::Keyword(kw) => *kw,
            _ => {
                self.report(DiagnosticCode::Syn011, "Expected a type name");
                return BasicType::Integer;
            }
        };
        let basic = match kw {
            Keyword::Integer => BasicType::Integer,
            Keyword::Real => BasicType::Real,
            Keyword::Char => BasicType::Char,
            Keyword::String => BasicType::String,
            Keyword::Boolean => BasicType::Boolean,
            _ => {
                self.report(DiagnosticCode::Syn011, "Expected a type name");
                return BasicType::Integer;
            }
        };
        self.advance();
        basic
    }

    /// `ARRAY[lo:hi, lo:hi] OF <basic type>`
    fn parse_array_type(&mut self) -> TypeNode {
        self.advance(); // ARRAY
        let mut dimensions = Vec::new();
        if matches!(self.peek().kind, TokenKind::LBracket) {
            self.advance();
            loop {
                dimensions.push(self.parse_dimension());
                if matches!(self.peek().kind, TokenKind::Comma) {
                    self.advance();
                    continue;
                }
                break;
            }
            if matches!(self.peek().kind, TokenKind::RBracket) {
                self.advance();
            } else {
                self.report(DiagnosticCode::Syn013, "Expected ']' closing array dimensions");
            }
        } else {
            self.report(DiagnosticCode::Syn013, "Expected '[' opening array dimensions");
        }
        if !self.expect_keyword(Keyword::Of, DiagnosticCode::Syn012, "Expected OF after array dimensions") {
            // fall through; still try to read the element type
        }
        let element = self.parse_basic_type();
        TypeNode::Array { element, dimensions }
    }

    /// `lower : upper`, both integer literals (optionally negative).
    fn parse_dimension(&mut self) -> Dimension {
        let lower = self.parse_dimension_bound();
        if matches!(self.peek().kind, TokenKind::Colon) {
            self.advance();
        } else {
            self.report(DiagnosticCode::Syn013, "Expected ':' between array bounds");
        }
        let upper = self.parse_dimension_bound();
        Dimension { lower, upper }
    }

    fn parse_dimension_bound(&mut self) -> i64 {
        let negative = if matches!(self.peek().kind, TokenKind::Minus) {
            self.advance();
            true
        } else {
            false
        };
        let value = match self.peek().kind {
            TokenKind::IntegerLiteral(n) => {
                self.advance();
                n
            }
            _ => {
                self.report(DiagnosticCode::Syn013, "Expected an integer array bound");
                0
            }
        };
        if negative {
            -value
        } else {
            value
        }
    }
}
