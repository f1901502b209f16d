use crate::lexer::{Span, Token, TokenKind};

use super::{
    BinOpKind, CmpOpKind, Condition, Expr, Identifier, ParseError, ParseResult, Program, Stmt,
};

/// Deepest nesting of blocks, parentheses and operator chains accepted.
/// Later passes recurse over the tree, so this also bounds their stack use.
pub const MAX_DEPTH: usize = 256;

#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            index: 0,
            depth: 0,
        }
    }

    pub fn parse(&mut self) -> ParseResult<Program> {
        let program = self.parse_program()?;
        if let Some(t) = self.peek() {
            return Err(ParseError::unexpected(t, "end of input"));
        }
        Ok(program)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    fn error(&self, expected: impl Into<String>) -> ParseError {
        match self.peek() {
            Some(t) => ParseError::unexpected(t, expected),
            None => ParseError::UnexpectedEof {
                expected: expected.into(),
            },
        }
    }

    fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            let span = self
                .peek()
                .or(self.tokens.last())
                .map_or(Span::default(), |t| t.span);
            return Err(ParseError::TooDeep { span });
        }
        Ok(())
    }

    fn leave(&mut self, levels: usize) {
        self.depth -= levels;
    }

    fn consume(&mut self, kind: &TokenKind) -> bool {
        if self.peek_kind() != Some(kind) {
            return false;
        }
        self.index += 1;
        true
    }

    fn consume_ident(&mut self) -> Option<Identifier> {
        let t = self.peek()?;
        let TokenKind::Ident(name) = &t.kind else {
            return None;
        };
        let ident = Identifier {
            name: name.clone(),
            span: t.span,
        };
        self.index += 1;
        Some(ident)
    }

    fn expect(&mut self, kind: &TokenKind) -> ParseResult<()> {
        if self.consume(kind) {
            Ok(())
        } else {
            Err(self.error(kind.to_string()))
        }
    }

    fn expect_ident(&mut self) -> ParseResult<Identifier> {
        match self.consume_ident() {
            Some(ident) => Ok(ident),
            None => Err(self.error("identifier")),
        }
    }

    /// program = "INICIO" ident+ "MONITOR" ident+ "EXECUTE" stmt* "TERMINO"
    fn parse_program(&mut self) -> ParseResult<Program> {
        self.expect(&TokenKind::Inicio)?;
        let vars = self.parse_ident_list()?;
        self.expect(&TokenKind::Monitor)?;
        let monitored = self.parse_ident_list()?;
        self.expect(&TokenKind::Execute)?;
        let body = self.parse_stmts()?;
        self.expect(&TokenKind::Termino)?;

        Ok(Program {
            vars,
            monitored,
            body,
        })
    }

    fn parse_ident_list(&mut self) -> ParseResult<Vec<Identifier>> {
        let mut idents = vec![self.expect_ident()?];
        while let Some(ident) = self.consume_ident() {
            idents.push(ident);
        }
        Ok(idents)
    }

    /// Statements run until a token that cannot open one; the caller checks
    /// which terminator it expects.
    fn parse_stmts(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut stmts = vec![];
        while self.peek_kind().is_some_and(TokenKind::starts_stmt) {
            stmts.push(self.parse_stmt()?);
        }
        Ok(stmts)
    }

    /// stmt = ident "=" expr
    ///      | "IF" cond "THEN" stmt* ("ELSE" stmt*)? "END_IF"
    ///      | "ENQUANTO" cond "FACA" stmt* "FIM"
    ///      | "EVAL" stmt* "VEZES" expr "FIM"
    ///      | "ZERO" "(" ident ")"
    fn parse_stmt(&mut self) -> ParseResult<Stmt> {
        self.enter()?;
        let stmt = self.parse_stmt_inner()?;
        self.leave(1);
        Ok(stmt)
    }

    fn parse_stmt_inner(&mut self) -> ParseResult<Stmt> {
        if self.consume(&TokenKind::If) {
            let cond = self.parse_condition()?;
            self.expect(&TokenKind::Then)?;
            let then_stmts = self.parse_stmts()?;
            let else_stmts = if self.consume(&TokenKind::Else) {
                Some(self.parse_stmts()?)
            } else {
                None
            };
            self.expect(&TokenKind::EndIf)?;
            Ok(Stmt::If(cond, then_stmts, else_stmts))
        } else if self.consume(&TokenKind::Enquanto) {
            let cond = self.parse_condition()?;
            self.expect(&TokenKind::Faca)?;
            let body = self.parse_stmts()?;
            self.expect(&TokenKind::Fim)?;
            Ok(Stmt::While(cond, body))
        } else if self.consume(&TokenKind::Eval) {
            let body = self.parse_stmts()?;
            self.expect(&TokenKind::Vezes)?;
            let count = self.parse_expr()?;
            self.expect(&TokenKind::Fim)?;
            Ok(Stmt::Repeat(body, count))
        } else if self.consume(&TokenKind::Zero) {
            self.expect(&TokenKind::OpenParen)?;
            let ident = self.expect_ident()?;
            self.expect(&TokenKind::CloseParen)?;
            Ok(Stmt::Zero(ident))
        } else {
            let ident = self.expect_ident()?;
            self.expect(&TokenKind::Equal)?;
            Ok(Stmt::Assign(ident, self.parse_expr()?))
        }
    }

    /// cond = expr ("==" | ">" | "<") expr
    fn parse_condition(&mut self) -> ParseResult<Condition> {
        let lhs = self.parse_expr()?;
        let kind = if self.consume(&TokenKind::DoubleEqual) {
            CmpOpKind::Equal
        } else if self.consume(&TokenKind::GreaterThan) {
            CmpOpKind::GreaterThan
        } else if self.consume(&TokenKind::LessThan) {
            CmpOpKind::LessThan
        } else {
            return Err(self.error("'==', '>' or '<'"));
        };
        let rhs = self.parse_expr()?;
        Ok(Condition { kind, lhs, rhs })
    }

    /// expr = mul ("+" mul | "-" mul)*
    fn parse_expr(&mut self) -> ParseResult<Expr> {
        let mut node = self.parse_mul()?;
        let mut chained = 0;
        loop {
            let kind = if self.consume(&TokenKind::Plus) {
                BinOpKind::Add
            } else if self.consume(&TokenKind::Minus) {
                BinOpKind::Sub
            } else {
                self.leave(chained);
                return Ok(node);
            };
            self.enter()?;
            chained += 1;
            node = Expr::Binary(kind, Box::new(node), Box::new(self.parse_mul()?));
        }
    }

    /// mul = primary ("*" primary | "/" primary)*
    fn parse_mul(&mut self) -> ParseResult<Expr> {
        let mut node = self.parse_primary()?;
        let mut chained = 0;
        loop {
            let kind = if self.consume(&TokenKind::Star) {
                BinOpKind::Mul
            } else if self.consume(&TokenKind::Slash) {
                BinOpKind::Div
            } else {
                self.leave(chained);
                return Ok(node);
            };
            self.enter()?;
            chained += 1;
            node = Expr::Binary(kind, Box::new(node), Box::new(self.parse_primary()?));
        }
    }

    /// primary = num | ident | "(" expr ")"
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        match self.peek_kind() {
            Some(TokenKind::OpenParen) => {
                self.enter()?;
                self.index += 1;
                let expr = self.parse_expr()?;
                self.expect(&TokenKind::CloseParen)?;
                self.leave(1);
                Ok(Expr::Paren(Box::new(expr)))
            }
            Some(TokenKind::Num(num)) => {
                let num = *num;
                self.index += 1;
                Ok(Expr::Num(num))
            }
            Some(TokenKind::Ident(_)) => Ok(Expr::Var(self.expect_ident()?)),
            _ => Err(self.error("expression")),
        }
    }
}
