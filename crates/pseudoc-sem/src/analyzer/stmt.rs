//! Statement checks (§4.3 "Statement checks").

use pseudoc_par::ast::{Expr, ExprKind, FileMode, Param, Stmt, StmtKind};
use pseudoc_util::DiagnosticCode;

use crate::analyzer::Analyzer;
use crate::symbol::{Symbol, SymbolKind};
use crate::ty::StaticType;

impl<'a> Analyzer<'a> {
    pub(crate) fn analyze_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Declare { name, ty } => self.analyze_declare(stmt, name, ty),
            StmtKind::Constant { name, value } => self.analyze_constant(stmt, name, value),
            StmtKind::Assign { target, value } => self.analyze_assign(stmt, target, value),
            StmtKind::Input { target } => self.analyze_input(stmt, target),
            StmtKind::Output { values } => {
                for value in values {
                    self.analyze_expr(value);
                }
            }
            StmtKind::If { condition, then_branch, else_branch } => {
                self.analyze_if(condition, then_branch, else_branch.as_deref())
            }
            StmtKind::Case { subject, clauses, otherwise } => {
                self.analyze_expr(subject);
                for clause in clauses {
                    self.analyze_expr(&clause.value);
                    self.in_block_scope(|a| a.analyze_stmt(&clause.body));
                }
                if let Some(otherwise) = otherwise {
                    self.in_block_scope(|a| a.analyze_stmt(otherwise));
                }
            }
            StmtKind::For { iterator, start, end, step, body } => {
                self.analyze_for(stmt, iterator, start, end, step.as_ref(), body)
            }
            StmtKind::Repeat { body, condition } => {
                self.in_block_scope(|a| {
                    for s in body {
                        a.analyze_stmt(s);
                    }
                });
                let condition_ty = self.analyze_expr(condition);
                if !condition_ty.is_boolean() {
                    self.report(DiagnosticCode::Sem008, condition.span, "UNTIL condition must be BOOLEAN");
                }
            }
            StmtKind::While { condition, body } => {
                let condition_ty = self.analyze_expr(condition);
                if !condition_ty.is_boolean() {
                    self.report(DiagnosticCode::Sem009, condition.span, "WHILE condition must be BOOLEAN");
                }
                self.in_block_scope(|a| {
                    for s in body {
                        a.analyze_stmt(s);
                    }
                });
            }
            StmtKind::ProcedureDef { params, body, .. } => self.analyze_routine_body(params, body, None),
            StmtKind::FunctionDef { params, return_type, body, .. } => {
                let return_ty = StaticType::from_type_node(return_type);
                self.analyze_routine_body(params, body, Some(return_ty));
                if !Self::contains_return(body) {
                    self.report(DiagnosticCode::Sem011, stmt.span, "Function body contains no RETURN statement");
                }
            }
            StmtKind::Call { name, args } => self.analyze_call_stmt(stmt, name, args),
            StmtKind::Return { value } => self.analyze_return(stmt, value),
            StmtKind::OpenFile { name, mode } => self.analyze_openfile(name, *mode),
            StmtKind::ReadFile { name, target } => self.analyze_readfile(name, target),
            StmtKind::WriteFile { name, value } => self.analyze_writefile(name, value),
            StmtKind::CloseFile { name } => self.analyze_closefile(name),
        }
    }

    fn analyze_declare(&mut self, stmt: &Stmt, name: &str, ty: &pseudoc_par::ast::TypeNode) {
        let static_ty = StaticType::from_type_node(ty);
        self.record_spelling(name);
        if !self.scopes.define(Symbol::new(name, stmt.span, SymbolKind::Variable(static_ty.clone()))) {
            self.report(DiagnosticCode::Sem002, stmt.span, format!("'{name}' is already declared in this scope"));
        }
        self.variable_types.insert(name.to_ascii_lowercase(), static_ty);
    }

    fn analyze_constant(&mut self, stmt: &Stmt, name: &str, value: &Expr) {
        let value_ty = self.analyze_expr(value);
        self.record_spelling(name);
        if !self.scopes.define(Symbol::new(name, stmt.span, SymbolKind::Constant(value_ty.clone()))) {
            self.report(DiagnosticCode::Sem002, stmt.span, format!("'{name}' is already declared in this scope"));
        }
        self.variable_types.insert(name.to_ascii_lowercase(), value_ty);
    }

    fn analyze_assign(&mut self, stmt: &Stmt, target: &Expr, value: &Expr) {
        self.reject_constant_target(target);
        let target_ty = self.analyze_expr(target);
        let value_ty = self.analyze_expr(value);
        if !value_ty.feeds(&target_ty) {
            self.report(DiagnosticCode::Sem003, stmt.span, "Assigned value does not match the target's type");
        }
    }

    fn analyze_input(&mut self, _stmt: &Stmt, target: &Expr) {
        self.reject_constant_target(target);
        self.analyze_expr(target);
    }

    /// `CONSTANT`s cannot be assigned or `INPUT`-ed into (`SEM025`).
    fn reject_constant_target(&mut self, target: &Expr) {
        if let ExprKind::Identifier(name) = &target.kind {
            if let Some(symbol) = self.scopes.resolve(name) {
                if symbol.is_constant() {
                    self.report(DiagnosticCode::Sem025, target.span, format!("'{name}' is a CONSTANT and cannot be assigned"));
                }
            }
        }
    }

    fn analyze_if(&mut self, condition: &Expr, then_branch: &[Stmt], else_branch: Option<&[Stmt]>) {
        let condition_ty = self.analyze_expr(condition);
        if !condition_ty.is_boolean() {
            self.report(DiagnosticCode::Sem004, condition.span, "IF condition must be BOOLEAN");
        }
        self.in_block_scope(|a| {
            for s in then_branch {
                a.analyze_stmt(s);
            }
        });
        if let Some(else_branch) = else_branch {
            self.in_block_scope(|a| {
                for s in else_branch {
                    a.analyze_stmt(s);
                }
            });
        }
    }

    fn analyze_for(&mut self, stmt: &Stmt, iterator: &str, start: &Expr, end: &Expr, step: Option<&Expr>, body: &[Stmt]) {
        match self.scopes.resolve(iterator) {
            Some(symbol) => {
                if !symbol.ty().is_integer() {
                    self.report(DiagnosticCode::Sem006, stmt.span, format!("FOR iterator '{iterator}' must be INTEGER"));
                }
            }
            None => {
                self.report(DiagnosticCode::Sem005, stmt.span, format!("FOR iterator '{iterator}' is not declared"));
            }
        }
        let start_ty = self.analyze_expr(start);
        let end_ty = self.analyze_expr(end);
        if !start_ty.is_numeric() || !end_ty.is_numeric() {
            self.report(DiagnosticCode::Sem007, stmt.span, "FOR bounds must be numeric");
        }
        if let Some(step) = step {
            let step_ty = self.analyze_expr(step);
            if !step_ty.is_numeric() {
                self.report(DiagnosticCode::Sem007, step.span, "FOR STEP must be numeric");
            }
        }
        self.in_block_scope(|a| {
            for s in body {
                a.analyze_stmt(s);
            }
        });
    }

    fn analyze_routine_body(&mut self, params: &[Param], body: &[Stmt], return_ty: Option<StaticType>) {
        let previous_return_type = self.current_return_type.take();
        self.current_return_type = return_ty;
        self.scopes.enter();
        let saved_open_files = self.open_files.clone();

        let mut seen = std::collections::HashSet::new();
        for param in params {
            let key = param.name.to_ascii_lowercase();
            if !seen.insert(key) {
                self.report(DiagnosticCode::Sem010, param.span, format!("Duplicate parameter '{}'", param.name));
                continue;
            }
            let ty = StaticType::from_type_node(&param.ty);
            self.record_spelling(&param.name);
            self.variable_types.insert(param.name.to_ascii_lowercase(), ty.clone());
            self.scopes.define(Symbol::new(param.name.as_str(), param.span, SymbolKind::Param(ty)));
        }
        for s in body {
            self.analyze_stmt(s);
        }

        self.open_files = saved_open_files;
        self.scopes.exit();
        self.current_return_type = previous_return_type;
    }

    fn analyze_call_stmt(&mut self, stmt: &Stmt, name: &str, args: &[Expr]) {
        match self.scopes.resolve(name).cloned() {
            Some(Symbol { kind: SymbolKind::Procedure { params }, .. }) => {
                self.check_args(stmt.span, &params, args);
            }
            _ => {
                self.report(DiagnosticCode::Sem012, stmt.span, format!("'{name}' is not a known procedure"));
                for arg in args {
                    self.analyze_expr(arg);
                }
            }
        }
    }

    fn analyze_return(&mut self, stmt: &Stmt, value: &Expr) {
        let value_ty = self.analyze_expr(value);
        match self.current_return_type.clone() {
            Some(return_ty) => {
                if !value_ty.feeds(&return_ty) {
                    self.report(DiagnosticCode::Sem014, stmt.span, "RETURN value does not match the declared return type");
                }
            }
            None => self.report(DiagnosticCode::Sem013, stmt.span, "RETURN used outside a function body"),
        }
    }

    fn analyze_openfile(&mut self, name: &Expr, mode: FileMode) {
        self.analyze_expr(name);
        if let Some(literal) = string_literal_value(name) {
            self.open_files.insert(literal, mode);
        }
    }

    fn analyze_readfile(&mut self, name: &Expr, target: &Expr) {
        self.analyze_expr(name);
        self.reject_constant_target(target);
        self.analyze_expr(target);
        if let Some(literal) = string_literal_value(name) {
            if self.open_files.get(&literal) == Some(&FileMode::Write) {
                self.report(DiagnosticCode::Sem015, name.span, format!("'{literal}' is open for WRITE, not READ"));
            }
        }
    }

    fn analyze_writefile(&mut self, name: &Expr, value: &Expr) {
        self.analyze_expr(name);
        self.analyze_expr(value);
        if let Some(literal) = string_literal_value(name) {
            if self.open_files.get(&literal) == Some(&FileMode::Read) {
                self.report(DiagnosticCode::Sem016, name.span, format!("'{literal}' is open for READ, not WRITE"));
            }
        }
    }

    fn analyze_closefile(&mut self, name: &Expr) {
        self.analyze_expr(name);
        if let Some(literal) = string_literal_value(name) {
            self.open_files.remove(&literal);
        }
    }
}

fn string_literal_value(expr: &Expr) -> Option<String> {
    match &expr.kind {
        ExprKind::StringLiteral(s) => Some(s.clone()),
        _ => None,
    }
}
