//! Expression emission (§4.4 "Operators"). Every binary/unary operator is
//! aggressively parenthesized so precedence never has to round-trip through
//! Python's own rules.

use pseudoc_par::ast::{BinaryOp, Expr, ExprKind, UnaryOp};

use crate::generator::Generator;

/// `^` has no literal Python equivalent; §4.2's precedence table treats it
/// as a genuine right-associative exponentiation operator, so it maps to
/// Python's `**` rather than bitwise XOR (the "others passed through"
/// wording in §4.4 is a gap the exponentiation semantics elsewhere in the
/// spec leave only one sane reading of).
fn binary_op_str(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "+",
        BinaryOp::Sub => "-",
        BinaryOp::Mul => "*",
        BinaryOp::Div => "/",
        BinaryOp::Pow => "**",
        BinaryOp::Eq => "==",
        BinaryOp::Ne => "!=",
        BinaryOp::Lt => "<",
        BinaryOp::Le => "<=",
        BinaryOp::Gt => ">",
        BinaryOp::Ge => ">=",
        BinaryOp::And => "and",
        BinaryOp::Or => "or",
    }
}

fn builtin_wrapper(uppercase_name: &str) -> Option<&'static str> {
    Some(match uppercase_name {
        "DIV" => "__div",
        "MOD" => "__mod",
        "LENGTH" => "__length",
        "LCASE" => "__lcase",
        "UCASE" => "__ucase",
        "SUBSTRING" => "__substring",
        "ROUND" => "__round",
        "RANDOM" => "__random",
        _ => return None,
    })
}

impl<'a> Generator<'a> {
    pub(crate) fn expr_text(&self, expr: &Expr) -> String {
        match &expr.kind {
            ExprKind::IntegerLiteral(n) => n.to_string(),
            // `{:?}` on f64 always includes a decimal point, guaranteeing
            // Python parses the literal as a float rather than an int.
            ExprKind::RealLiteral(n) => format!("{n:?}"),
            ExprKind::StringLiteral(s) => format!("{s:?}"),
            ExprKind::CharLiteral(c) => format!("{:?}", c.to_string()),
            ExprKind::BooleanLiteral(true) => "True".to_string(),
            ExprKind::BooleanLiteral(false) => "False".to_string(),
            ExprKind::Identifier(name) => self.spelling(name),

            ExprKind::Unary { op, operand } => {
                let operand = self.expr_text(operand);
                match op {
                    UnaryOp::Not => format!("(not ({operand}))"),
                    UnaryOp::Neg => format!("(-({operand}))"),
                }
            }

            ExprKind::Binary { op, left, right } => {
                format!("(({}) {} ({}))", self.expr_text(left), binary_op_str(*op), self.expr_text(right))
            }

            ExprKind::Call { name, args } => {
                let arg_text = args.iter().map(|a| self.expr_text(a)).collect::<Vec<_>>().join(", ");
                match builtin_wrapper(&name.to_ascii_uppercase()) {
                    Some(wrapper) => format!("{wrapper}({arg_text})"),
                    None => format!("{}({arg_text})", self.spelling(name)),
                }
            }

            ExprKind::ArrayAccess { name, indices } => {
                let index_text = indices.iter().map(|i| self.expr_text(i)).collect::<Vec<_>>().join(", ");
                format!("{}[{index_text}]", self.spelling(name))
            }

            // Only reachable if generation runs ahead of a rejected
            // compile; `None` keeps the emitted module importable.
            ExprKind::Error => "None".to_string(),
        }
    }
}
