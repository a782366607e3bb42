//! Expression typing (§4.3 "Expression typing").

use pseudoc_par::ast::{BasicType, BinaryOp, Expr, ExprKind, UnaryOp};
use pseudoc_util::{DiagnosticCode, Span};

use crate::analyzer::Analyzer;
use crate::symbol::SymbolKind;
use crate::ty::StaticType;

/// `DIV(INT,INT)->INT`, `MOD(INT,INT)->INT`, `LENGTH(STRING)->INT`,
/// `LCASE(STRING)->STRING`, `UCASE(STRING)->STRING`,
/// `SUBSTRING(STRING,INT,INT)->STRING`, `ROUND(REAL,INT)->REAL`,
/// `RANDOM()->REAL`.
fn builtin_signature(uppercase_name: &str) -> Option<(Vec<StaticType>, StaticType)> {
    use BasicType::*;
    let basic = StaticType::Basic;
    Some(match uppercase_name {
        "DIV" => (vec![basic(Integer), basic(Integer)], basic(Integer)),
        "MOD" => (vec![basic(Integer), basic(Integer)], basic(Integer)),
        "LENGTH" => (vec![basic(String)], basic(Integer)),
        "LCASE" => (vec![basic(String)], basic(String)),
        "UCASE" => (vec![basic(String)], basic(String)),
        "SUBSTRING" => (vec![basic(String), basic(Integer), basic(Integer)], basic(String)),
        "ROUND" => (vec![basic(Real), basic(Integer)], basic(Real)),
        "RANDOM" => (vec![], basic(Real)),
        _ => return None,
    })
}

impl<'a> Analyzer<'a> {
    pub(crate) fn analyze_expr(&mut self, expr: &Expr) -> StaticType {
        match &expr.kind {
            ExprKind::IntegerLiteral(_) => StaticType::Basic(BasicType::Integer),
            ExprKind::RealLiteral(_) => StaticType::Basic(BasicType::Real),
            ExprKind::StringLiteral(_) => StaticType::Basic(BasicType::String),
            ExprKind::CharLiteral(_) => StaticType::Basic(BasicType::Char),
            ExprKind::BooleanLiteral(_) => StaticType::Basic(BasicType::Boolean),
            ExprKind::Error => StaticType::Unknown,

            ExprKind::Identifier(name) => match self.scopes.resolve(name) {
                Some(symbol) => symbol.ty(),
                None => {
                    self.report(DiagnosticCode::Sem019, expr.span, format!("'{name}' is not declared"));
                    StaticType::Unknown
                }
            },

            ExprKind::Unary { op, operand } => self.analyze_unary(expr, *op, operand),
            ExprKind::Binary { op, left, right } => self.analyze_binary(expr, *op, left, right),
            ExprKind::ArrayAccess { name, indices } => self.analyze_array_access(expr, name, indices),
            ExprKind::Call { name, args } => self.analyze_call_expr(expr, name, args),
        }
    }

    fn analyze_unary(&mut self, expr: &Expr, op: UnaryOp, operand: &Expr) -> StaticType {
        let operand_ty = self.analyze_expr(operand);
        match op {
            UnaryOp::Not => {
                if !operand_ty.is_boolean() {
                    self.report(DiagnosticCode::Sem020, expr.span, "NOT requires a BOOLEAN operand");
                }
                StaticType::Basic(BasicType::Boolean)
            }
            UnaryOp::Neg => {
                if !operand_ty.is_numeric() {
                    self.report(DiagnosticCode::Sem021, expr.span, "Unary '-' requires a numeric operand");
                    return StaticType::Unknown;
                }
                operand_ty
            }
        }
    }

    fn analyze_binary(&mut self, expr: &Expr, op: BinaryOp, left: &Expr, right: &Expr) -> StaticType {
        let left_ty = self.analyze_expr(left);
        let right_ty = self.analyze_expr(right);
        match op {
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Pow => {
                if !left_ty.is_numeric() || !right_ty.is_numeric() {
                    self.report(DiagnosticCode::Sem022, expr.span, "Arithmetic operands must be numeric");
                    return StaticType::Unknown;
                }
                left_ty.arithmetic_result(&right_ty, op == BinaryOp::Div)
            }
            BinaryOp::Eq
            | BinaryOp::Ne
            | BinaryOp::Lt
            | BinaryOp::Le
            | BinaryOp::Gt
            | BinaryOp::Ge => StaticType::Basic(BasicType::Boolean),
            BinaryOp::And | BinaryOp::Or => {
                if !left_ty.is_boolean() || !right_ty.is_boolean() {
                    self.report(DiagnosticCode::Sem023, expr.span, "AND/OR operands must be BOOLEAN");
                }
                StaticType::Basic(BasicType::Boolean)
            }
        }
    }

    fn analyze_array_access(&mut self, expr: &Expr, name: &str, indices: &[Expr]) -> StaticType {
        let declared = match self.scopes.resolve(name) {
            Some(symbol) => symbol.ty(),
            None => {
                self.report(DiagnosticCode::Sem019, expr.span, format!("'{name}' is not declared"));
                return StaticType::Unknown;
            }
        };
        for index in indices {
            let index_ty = self.analyze_expr(index);
            if !index_ty.is_integer() {
                self.report(DiagnosticCode::Sem028, index.span, "Array index must be INTEGER");
            }
        }
        match declared {
            StaticType::Array { element, dimensions } => {
                if dimensions != indices.len() {
                    self.report(
                        DiagnosticCode::Sem027,
                        expr.span,
                        format!("'{name}' has {dimensions} dimension(s), not {}", indices.len()),
                    );
                    return StaticType::Unknown;
                }
                StaticType::Basic(element)
            }
            StaticType::Unknown => StaticType::Unknown,
            StaticType::Basic(_) => {
                self.report(DiagnosticCode::Sem027, expr.span, format!("'{name}' is not an array"));
                StaticType::Unknown
            }
        }
    }

    fn analyze_call_expr(&mut self, expr: &Expr, name: &str, args: &[Expr]) -> StaticType {
        if let Some((params, return_type)) = builtin_signature(&name.to_ascii_uppercase()) {
            self.check_args(expr.span, &params, args);
            return return_type;
        }
        match self.scopes.resolve(name).cloned() {
            Some(symbol) => match symbol.kind {
                SymbolKind::Function { params, return_type } => {
                    self.check_args(expr.span, &params, args);
                    return_type
                }
                _ => {
                    self.report(DiagnosticCode::Sem024, expr.span, format!("'{name}' is not a function"));
                    StaticType::Unknown
                }
            },
            None => {
                self.report(DiagnosticCode::Sem024, expr.span, format!("'{name}' is not a known routine"));
                StaticType::Unknown
            }
        }
    }

    /// Checks argument count (`SEM017`) and positional type compatibility
    /// (`SEM018`) against `params`, evaluating every argument regardless so
    /// nested errors still surface.
    pub(crate) fn check_args(&mut self, call_span: Span, params: &[StaticType], args: &[Expr]) {
        if params.len() != args.len() {
            self.report(
                DiagnosticCode::Sem017,
                call_span,
                format!("Expected {} argument(s), found {}", params.len(), args.len()),
            );
        }
        for (i, arg) in args.iter().enumerate() {
            let arg_ty = self.analyze_expr(arg);
            if let Some(param_ty) = params.get(i) {
                if !arg_ty.feeds(param_ty) {
                    self.report(DiagnosticCode::Sem018, arg.span, "Argument type does not match parameter type");
                }
            }
        }
    }
}
