use phf::phf_set;
use thiserror::Error;

use crate::lexer::Span;
use crate::parser::{Condition, Expr, Identifier, Program, Stmt};

use super::symbol_table::SymbolTable;

/// Names a global `int` cannot take in the generated C: keywords, the entry
/// point, and what `<stdio.h>` declares.
static C_RESERVED: phf::Set<&str> = phf_set! {
    "auto", "break", "case", "char", "const", "continue", "default", "do",
    "double", "else", "enum", "extern", "float", "for", "goto", "if", "inline",
    "int", "long", "register", "restrict", "return", "short", "signed",
    "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned",
    "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic", "_Bool",
    "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert",
    "_Thread_local", "alignas", "alignof", "bool", "constexpr", "false",
    "nullptr", "static_assert", "thread_local", "true", "typeof",
    "typeof_unqual",
    "main",
    "printf", "fprintf", "sprintf", "snprintf", "vprintf", "vfprintf",
    "vsprintf", "vsnprintf", "scanf", "fscanf", "sscanf", "puts", "fputs",
    "putc", "putchar", "fputc", "getc", "getchar", "fgetc", "gets", "fgets",
    "ungetc", "fopen", "freopen", "fclose", "fflush", "fread", "fwrite",
    "fseek", "ftell", "rewind", "fgetpos", "fsetpos", "remove", "rename",
    "perror", "feof", "ferror", "clearerr", "setbuf", "setvbuf", "tmpfile",
    "tmpnam", "stdin", "stdout", "stderr", "FILE", "fpos_t", "size_t", "EOF",
    "NULL", "BUFSIZ", "FILENAME_MAX", "FOPEN_MAX", "L_tmpnam", "TMP_MAX",
    "SEEK_SET", "SEEK_CUR", "SEEK_END", "_IOFBF", "_IOLBF", "_IONBF",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SemanticErrorKind {
    DuplicateVariable,
    ReservedInTarget,
    UndeclaredMonitor,
    UndeclaredVariable,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Semantic error at {span}: {}", describe(.kind, .name))]
pub struct SemanticError {
    pub kind: SemanticErrorKind,
    pub name: String,
    pub span: Span,
}

fn describe(kind: &SemanticErrorKind, name: &str) -> String {
    match kind {
        SemanticErrorKind::DuplicateVariable => format!("variable '{name}' is declared twice"),
        SemanticErrorKind::ReservedInTarget => {
            format!("variable '{name}' clashes with a reserved name in the generated C")
        }
        SemanticErrorKind::UndeclaredMonitor => {
            format!("monitored variable '{name}' is not declared under INICIO")
        }
        SemanticErrorKind::UndeclaredVariable => format!("variable '{name}' is not declared"),
    }
}

impl SemanticError {
    fn new(kind: SemanticErrorKind, ident: &Identifier) -> Self {
        Self {
            kind,
            name: ident.name.clone(),
            span: ident.span,
        }
    }
}

pub struct SemanticVisitor {
    symbol_table: SymbolTable,
}

impl SemanticVisitor {
    pub fn new() -> Self {
        Self {
            symbol_table: SymbolTable::new(),
        }
    }

    pub fn visit_program(mut self, program: &Program) -> Result<SymbolTable, SemanticError> {
        for ident in &program.vars {
            if !self.symbol_table.declare_var(&ident.name) {
                return Err(SemanticError::new(
                    SemanticErrorKind::DuplicateVariable,
                    ident,
                ));
            }
            if C_RESERVED.contains(ident.name.as_str()) {
                return Err(SemanticError::new(
                    SemanticErrorKind::ReservedInTarget,
                    ident,
                ));
            }
        }

        for ident in &program.monitored {
            if !self.symbol_table.is_declared(&ident.name) {
                return Err(SemanticError::new(
                    SemanticErrorKind::UndeclaredMonitor,
                    ident,
                ));
            }
            self.symbol_table.declare_monitor(ident);
        }

        self.visit_stmts(&program.body)?;

        Ok(self.symbol_table)
    }

    fn visit_stmts(&self, stmts: &[Stmt]) -> Result<(), SemanticError> {
        stmts.iter().try_for_each(|s| self.visit_stmt(s))
    }

    fn visit_stmt(&self, stmt: &Stmt) -> Result<(), SemanticError> {
        match stmt {
            Stmt::Assign(ident, expr) => {
                self.visit_ident(ident)?;
                self.visit_expr(expr)
            }
            Stmt::If(cond, then_stmts, else_stmts) => {
                self.visit_condition(cond)?;
                self.visit_stmts(then_stmts)?;
                if let Some(else_stmts) = else_stmts {
                    self.visit_stmts(else_stmts)?;
                }
                Ok(())
            }
            Stmt::While(cond, body) => {
                self.visit_condition(cond)?;
                self.visit_stmts(body)
            }
            Stmt::Repeat(body, count) => {
                self.visit_stmts(body)?;
                self.visit_expr(count)
            }
            Stmt::Zero(ident) => self.visit_ident(ident),
        }
    }

    fn visit_condition(&self, cond: &Condition) -> Result<(), SemanticError> {
        self.visit_expr(&cond.lhs)?;
        self.visit_expr(&cond.rhs)
    }

    fn visit_expr(&self, expr: &Expr) -> Result<(), SemanticError> {
        let mut undeclared = None;
        expr.for_each_var(&mut |ident| {
            if undeclared.is_none() && !self.symbol_table.is_declared(&ident.name) {
                undeclared = Some(ident);
            }
        });
        match undeclared {
            Some(ident) => Err(SemanticError::new(
                SemanticErrorKind::UndeclaredVariable,
                ident,
            )),
            None => Ok(()),
        }
    }

    fn visit_ident(&self, ident: &Identifier) -> Result<(), SemanticError> {
        if self.symbol_table.is_declared(&ident.name) {
            Ok(())
        } else {
            Err(SemanticError::new(
                SemanticErrorKind::UndeclaredVariable,
                ident,
            ))
        }
    }
}

impl Default for SemanticVisitor {
    fn default() -> Self {
        Self::new()
    }
}
