//! Statement emission (§4.4 "Scalar+array declarations", "Control flow",
//! "I/O", "File operations", "Routines").

use pseudoc_par::ast::{BasicType, Expr, ExprKind, FileMode, Stmt, StmtKind};
use pseudoc_sem::StaticType;

use crate::generator::Generator;

impl<'a> Generator<'a> {
    pub(crate) fn generate_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Declare { name, ty } => {
                let default = self.declared_default(ty);
                self.line(&format!("{} = {default}", self.spelling(name)));
            }
            StmtKind::Constant { name, value } => {
                let value = self.expr_text(value);
                self.line(&format!("{} = {value}", self.spelling(name)));
            }
            StmtKind::Assign { target, value } => {
                let target = self.expr_text(target);
                let value = self.expr_text(value);
                self.line(&format!("{target} = {value}"));
            }
            StmtKind::Input { target } => self.generate_input(target),
            StmtKind::Output { values } => {
                let args = values.iter().map(|v| self.expr_text(v)).collect::<Vec<_>>().join(", ");
                self.line(&format!("__output({args})"));
            }
            StmtKind::If { condition, then_branch, else_branch } => {
                self.generate_if(condition, then_branch, else_branch.as_deref())
            }
            StmtKind::Case { subject, clauses, otherwise } => self.generate_case(subject, clauses, otherwise.as_deref()),
            StmtKind::For { iterator, start, end, step, body } => {
                self.generate_for(iterator, start, end, step.as_ref(), body)
            }
            StmtKind::Repeat { body, condition } => self.generate_repeat(body, condition),
            StmtKind::While { condition, body } => self.generate_while(condition, body),
            StmtKind::ProcedureDef { name, params, body } => self.emit_routine_def(name, params, None, body),
            StmtKind::FunctionDef { name, params, return_type, body } => {
                self.emit_routine_def(name, params, Some(return_type), body)
            }
            StmtKind::Call { name, args } => {
                let args = args.iter().map(|a| self.expr_text(a)).collect::<Vec<_>>().join(", ");
                self.line(&format!("{}({args})", self.spelling(name)));
            }
            StmtKind::Return { value } => {
                let value = self.expr_text(value);
                self.line(&format!("return {value}"));
            }
            StmtKind::OpenFile { name, mode } => {
                let name = self.expr_text(name);
                let mode = match mode {
                    FileMode::Read => "READ",
                    FileMode::Write => "WRITE",
                };
                self.line(&format!("__open_file({name}, \"{mode}\")"));
            }
            StmtKind::ReadFile { name, target } => {
                let name = self.expr_text(name);
                let target = self.expr_text(target);
                self.line(&format!("{target} = __read_file({name})"));
            }
            StmtKind::WriteFile { name, value } => {
                let name = self.expr_text(name);
                let value = self.expr_text(value);
                self.line(&format!("__write_file({name}, {value})"));
            }
            StmtKind::CloseFile { name } => {
                let name = self.expr_text(name);
                self.line(&format!("__close_file({name})"));
            }
        }
    }

    fn generate_body(&mut self, body: &[Stmt]) {
        if body.is_empty() {
            self.line("pass");
        } else {
            for stmt in body {
                self.generate_stmt(stmt);
            }
        }
    }

    /// Coerces `INPUT`'s raw line through `__coerce_input` when the target's
    /// declared type is known; array elements look up the array's element
    /// type rather than the array's own (dimension-only) static type.
    fn generate_input(&mut self, target: &Expr) {
        let target_text = self.expr_text(target);
        let scalar_type = match &target.kind {
            ExprKind::Identifier(name) => self.semantics.type_of(name).and_then(basic_of),
            ExprKind::ArrayAccess { name, .. } => self.semantics.type_of(name).and_then(|ty| match ty {
                StaticType::Array { element, .. } => Some(*element),
                _ => None,
            }),
            _ => None,
        };
        match scalar_type {
            Some(basic) => {
                self.line(&format!("{target_text} = __coerce_input(__input(), \"{}\")", type_name(basic)));
            }
            None => self.line(&format!("{target_text} = __input()")),
        }
    }

    fn generate_if(&mut self, condition: &Expr, then_branch: &[Stmt], else_branch: Option<&[Stmt]>) {
        let condition = self.expr_text(condition);
        self.line(&format!("if {condition}:"));
        self.indented(|g| g.generate_body(then_branch));
        if let Some(else_branch) = else_branch {
            self.line("else:");
            self.indented(|g| g.generate_body(else_branch));
        }
    }

    /// Evaluates the subject once into a synthetic `__case_N` variable, then
    /// an `if`/`elif` chain against each clause's value, `OTHERWISE`
    /// trailing as a plain `else` (§4.4 "Control flow").
    fn generate_case(&mut self, subject: &Expr, clauses: &[pseudoc_par::ast::CaseClause], otherwise: Option<&Stmt>) {
        let subject_text = self.expr_text(subject);
        let case_var = self.next_case_var();
        self.line(&format!("{case_var} = {subject_text}"));

        if clauses.is_empty() {
            match otherwise {
                Some(body) => self.generate_stmt(body),
                None => self.line("pass"),
            }
            return;
        }

        for (i, clause) in clauses.iter().enumerate() {
            let value = self.expr_text(&clause.value);
            let keyword = if i == 0 { "if" } else { "elif" };
            self.line(&format!("{keyword} {case_var} == {value}:"));
            self.indented(|g| g.generate_stmt(&clause.body));
        }
        if let Some(otherwise) = otherwise {
            self.line("else:");
            self.indented(|g| g.generate_stmt(otherwise));
        }
    }

    fn generate_for(&mut self, iterator: &str, start: &Expr, end: &Expr, step: Option<&Expr>, body: &[Stmt]) {
        let iterator = self.spelling(iterator);
        let start = self.expr_text(start);
        let end = self.expr_text(end);
        let step = step.map(|s| self.expr_text(s)).unwrap_or_else(|| "1".to_string());
        self.line(&format!("for {iterator} in __inclusive_range({start}, {end}, {step}):"));
        self.indented(|g| g.generate_body(body));
    }

    fn generate_repeat(&mut self, body: &[Stmt], condition: &Expr) {
        self.line("while True:");
        self.indented(|g| {
            g.generate_body(body);
            let condition = g.expr_text(condition);
            g.line(&format!("if {condition}:"));
            g.indented(|g| g.line("break"));
        });
    }

    fn generate_while(&mut self, condition: &Expr, body: &[Stmt]) {
        let condition = self.expr_text(condition);
        self.line(&format!("while {condition}:"));
        self.indented(|g| g.generate_body(body));
    }
}

fn basic_of(ty: &StaticType) -> Option<BasicType> {
    match ty {
        StaticType::Basic(basic) => Some(*basic),
        _ => None,
    }
}

fn type_name(basic: BasicType) -> &'static str {
    match basic {
        BasicType::Integer => "INTEGER",
        BasicType::Real => "REAL",
        BasicType::Char => "CHAR",
        BasicType::String => "STRING",
        BasicType::Boolean => "BOOLEAN",
    }
}
