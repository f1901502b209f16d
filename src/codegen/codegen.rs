use crate::{
    analyzer::SymbolTable,
    parser::{Condition, Expr, Program, Stmt},
};

use super::MonitorTable;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodegenOptions {
    pub indent_width: usize,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

/// Emits C for a checked program. Output depends only on the program and
/// the options, so the same input always produces the same text.
pub struct Codegen {
    symbol_table: SymbolTable,
    options: CodegenOptions,
    out: String,
    depth: usize,
    loop_index: usize,
}

impl Codegen {
    pub fn new(symbol_table: SymbolTable, options: CodegenOptions) -> Self {
        Self {
            symbol_table,
            options,
            out: String::new(),
            depth: 0,
            loop_index: 0,
        }
    }

    pub fn generate(mut self, program: &Program) -> String {
        self.line("#include <stdio.h>");
        self.line("");
        self.gen_globals();
        self.gen_main(program);
        self.out
    }

    fn line(&mut self, s: &str) {
        if !s.is_empty() {
            let indent = self.depth * self.options.indent_width;
            self.out.extend(std::iter::repeat(' ').take(indent));
            self.out.push_str(s);
        }
        self.out.push('\n');
    }

    /// Loop indices count up and skip declared names, so nested loops never
    /// shadow each other or a user variable.
    fn new_loop_var(&mut self) -> String {
        loop {
            let name = format!("_i{}", self.loop_index);
            self.loop_index += 1;
            if !self.symbol_table.is_declared(&name) {
                return name;
            }
        }
    }

    fn gen_globals(&mut self) {
        let vars = self.symbol_table.vars().to_vec();
        for var in &vars {
            self.line(&format!("int {var} = 0;"));
        }
        if !vars.is_empty() {
            self.line("");
        }
    }

    fn gen_main(&mut self, program: &Program) {
        let mut monitors = MonitorTable::new(self.symbol_table.monitored());

        self.line("int main() {");
        self.depth += 1;

        for stmt in &program.body {
            self.gen_stmt(stmt, &mut monitors);
            for name in monitors.take_dirty() {
                self.gen_trace(&name);
            }
        }

        if !program.body.is_empty() {
            self.line("");
        }
        self.gen_final_trace(&monitors);
        self.line("return 0;");

        self.depth -= 1;
        self.line("}");
    }

    fn gen_trace(&mut self, name: &str) {
        self.line(&format!("printf(\"{name} = %d\\n\", {name});"));
    }

    fn gen_final_trace(&mut self, monitors: &MonitorTable) {
        let names: Vec<String> = monitors.names().map(str::to_string).collect();
        self.line(&format!("// Monitored vars: {}", names.join(" ")));
        for name in &names {
            self.gen_trace(name);
        }
    }

    fn gen_block(&mut self, stmts: &[Stmt], monitors: &mut MonitorTable) {
        self.depth += 1;
        for stmt in stmts {
            self.gen_stmt(stmt, monitors);
        }
        self.depth -= 1;
    }

    fn gen_stmt(&mut self, stmt: &Stmt, monitors: &mut MonitorTable) {
        match stmt {
            Stmt::Assign(ident, expr) => {
                let value = gen_expr(expr);
                self.line(&format!("{} = {value};", ident.name));
            }
            Stmt::Zero(ident) => self.line(&format!("{} = 0;", ident.name)),
            Stmt::If(cond, then_stmts, else_stmts) => {
                self.gen_if(cond, then_stmts, else_stmts.as_deref(), monitors)
            }
            Stmt::While(cond, body) => self.gen_while(cond, body, monitors),
            Stmt::Repeat(body, count) => self.gen_repeat(body, count, monitors),
        };

        if let Some(ident) = stmt.target() {
            monitors.mark(&ident.name);
        }
    }

    fn gen_if(
        &mut self,
        cond: &Condition,
        then_stmts: &[Stmt],
        else_stmts: Option<&[Stmt]>,
        monitors: &mut MonitorTable,
    ) {
        self.line(&format!("if ({}) {{", gen_condition(cond)));
        self.gen_block(then_stmts, monitors);
        if let Some(else_stmts) = else_stmts {
            self.line("} else {");
            self.gen_block(else_stmts, monitors);
        }
        self.line("}");
    }

    fn gen_while(&mut self, cond: &Condition, body: &[Stmt], monitors: &mut MonitorTable) {
        self.line(&format!("while ({}) {{", gen_condition(cond)));
        self.gen_block(body, monitors);
        self.line("}");
    }

    fn gen_repeat(&mut self, body: &[Stmt], count: &Expr, monitors: &mut MonitorTable) {
        let i = self.new_loop_var();
        self.line(&format!(
            "for (int {i} = 0; {i} < {}; {i}++) {{",
            gen_expr(count)
        ));
        self.gen_block(body, monitors);
        self.line("}");
    }
}

pub fn gen_expr(expr: &Expr) -> String {
    match expr {
        Expr::Num(n) => n.to_string(),
        Expr::Var(ident) => ident.name.clone(),
        Expr::Binary(kind, lhs, rhs) => {
            format!("{} {} {}", gen_expr(lhs), kind.symbol(), gen_expr(rhs))
        }
        Expr::Paren(inner) => format!("({})", gen_expr(inner)),
    }
}

pub fn gen_condition(cond: &Condition) -> String {
    format!(
        "{} {} {}",
        gen_expr(&cond.lhs),
        cond.kind.symbol(),
        gen_expr(&cond.rhs)
    )
}
