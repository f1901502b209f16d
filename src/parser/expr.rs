use super::Identifier;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOpKind {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Num(i64),
    Var(Identifier),
    Binary(BinOpKind, Box<Expr>, Box<Expr>),
    Paren(Box<Expr>),
}

impl Expr {
    /// Calls `f` on every variable reference, left to right.
    pub fn for_each_var<'a>(&'a self, f: &mut impl FnMut(&'a Identifier)) {
        match self {
            Expr::Num(_) => (),
            Expr::Var(ident) => f(ident),
            Expr::Binary(_, lhs, rhs) => {
                lhs.for_each_var(f);
                rhs.for_each_var(f);
            }
            Expr::Paren(inner) => inner.for_each_var(f),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmpOpKind {
    Equal,
    GreaterThan,
    LessThan,
}

impl CmpOpKind {
    pub fn symbol(&self) -> &'static str {
        match self {
            CmpOpKind::Equal => "==",
            CmpOpKind::GreaterThan => ">",
            CmpOpKind::LessThan => "<",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Condition {
    pub kind: CmpOpKind,
    pub lhs: Expr,
    pub rhs: Expr,
}
