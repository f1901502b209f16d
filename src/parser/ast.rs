use crate::lexer::Span;

use super::{Condition, Expr};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    Assign(Identifier, Expr),
    If(Condition, Vec<Stmt>, Option<Vec<Stmt>>),
    While(Condition, Vec<Stmt>),
    Repeat(Vec<Stmt>, Expr),
    Zero(Identifier),
}

impl Stmt {
    /// The variable this statement writes directly, if any.
    pub fn target(&self) -> Option<&Identifier> {
        match self {
            Stmt::Assign(ident, _) | Stmt::Zero(ident) => Some(ident),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    pub vars: Vec<Identifier>,
    pub monitored: Vec<Identifier>,
    pub body: Vec<Stmt>,
}
