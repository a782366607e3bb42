//! Orchestrates emission: prelude, then every top-level routine definition
//! in source order, then a `__main__` wrapper around the remaining
//! top-level statements, then a bare call to it (§4.4, §5).

mod expr;
mod stmt;

use pseudoc_par::ast::{BasicType, Program, StmtKind, TypeNode};
use pseudoc_sem::SemanticResult;

use crate::prelude::PRELUDE;

pub(crate) struct Generator<'a> {
    semantics: &'a SemanticResult,
    out: String,
    indent: usize,
    case_counter: u32,
}

pub fn generate(program: &Program, semantics: &SemanticResult) -> String {
    let mut generator = Generator {
        semantics,
        out: String::new(),
        indent: 0,
        case_counter: 0,
    };
    generator.run(program);
    generator.out
}

impl<'a> Generator<'a> {
    fn run(&mut self, program: &Program) {
        self.out.push_str(PRELUDE);
        self.out.push('\n');

        for stmt in program {
            match &stmt.kind {
                StmtKind::ProcedureDef { name, params, body } => {
                    self.emit_routine_def(name, params, None, body);
                    self.out.push('\n');
                }
                StmtKind::FunctionDef { name, params, return_type, body } => {
                    self.emit_routine_def(name, params, Some(return_type), body);
                    self.out.push('\n');
                }
                _ => {}
            }
        }

        self.line("def __main__():");
        self.indented(|g| {
            let body: Vec<_> = program
                .iter()
                .filter(|s| !matches!(s.kind, StmtKind::ProcedureDef { .. } | StmtKind::FunctionDef { .. }))
                .collect();
            if body.is_empty() {
                g.line("pass");
            } else {
                for stmt in body {
                    g.generate_stmt(stmt);
                }
            }
        });
        self.out.push('\n');
        self.line("__main__()");
    }

    /// Shared by top-level routine emission and (syntactically legal, if
    /// unusual) nested definitions: Python nests `def`s natively, so the
    /// same emission works at any indent level.
    pub(crate) fn emit_routine_def(
        &mut self,
        name: &str,
        params: &[pseudoc_par::ast::Param],
        _return_type: Option<&TypeNode>,
        body: &[pseudoc_par::ast::Stmt],
    ) {
        let spelling = self.spelling(name);
        let param_list = params
            .iter()
            .map(|p| self.spelling(&p.name))
            .collect::<Vec<_>>()
            .join(", ");
        self.line(&format!("def {spelling}({param_list}):"));
        self.indented(|g| {
            if body.is_empty() {
                g.line("pass");
            } else {
                for stmt in body {
                    g.generate_stmt(stmt);
                }
            }
        });
    }

    pub(crate) fn spelling(&self, name: &str) -> String {
        self.semantics.spelling_of(name).to_string()
    }

    pub(crate) fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.out.push_str("    ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    pub(crate) fn indented(&mut self, body: impl FnOnce(&mut Self)) {
        self.indent += 1;
        body(self);
        self.indent -= 1;
    }

    pub(crate) fn next_case_var(&mut self) -> String {
        let name = format!("__case_{}", self.case_counter);
        self.case_counter += 1;
        name
    }

    pub(crate) fn scalar_default(ty: BasicType) -> &'static str {
        match ty {
            BasicType::Integer => "0",
            BasicType::Real => "0.0",
            BasicType::Char => "''",
            BasicType::String => "\"\"",
            BasicType::Boolean => "False",
        }
    }

    pub(crate) fn declared_default(&self, ty: &TypeNode) -> String {
        match ty {
            TypeNode::Basic(basic) => Self::scalar_default(*basic).to_string(),
            TypeNode::Array { element, dimensions } => {
                let dims = dimensions
                    .iter()
                    .map(|d| format!("({}, {})", d.lower, d.upper))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("__PseudoArray([{dims}], {})", Self::scalar_default(*element))
            }
        }
    }
}
