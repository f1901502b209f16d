use std::fmt;

use phf::phf_map;

pub static KEYWORDS: phf::Map<&str, TokenKind> = phf_map! {
    "INICIO" => TokenKind::Inicio,
    "MONITOR" => TokenKind::Monitor,
    "EXECUTE" => TokenKind::Execute,
    "TERMINO" => TokenKind::Termino,
    "ENQUANTO" => TokenKind::Enquanto,
    "FACA" => TokenKind::Faca,
    "FIM" => TokenKind::Fim,
    "IF" => TokenKind::If,
    "THEN" => TokenKind::Then,
    "ELSE" => TokenKind::Else,
    "END_IF" => TokenKind::EndIf,
    "ZERO" => TokenKind::Zero,
    "EVAL" => TokenKind::Eval,
    "VEZES" => TokenKind::Vezes,
};

pub static TWO_SYMBOLS_TOKENS: phf::Map<&str, TokenKind> = phf_map! {
    "==" => TokenKind::DoubleEqual,
};

pub static ONE_SYMBOL_TOKENS: phf::Map<char, TokenKind> = phf_map! {
    '+' => TokenKind::Plus,
    '-' => TokenKind::Minus,
    '*' => TokenKind::Star,
    '/' => TokenKind::Slash,
    '(' => TokenKind::OpenParen,
    ')' => TokenKind::CloseParen,
    '<' => TokenKind::LessThan,
    '>' => TokenKind::GreaterThan,
    '=' => TokenKind::Equal,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Plus,
    Minus,
    Star,
    Slash,
    Num(i64),
    OpenParen,
    CloseParen,

    LessThan,
    GreaterThan,
    DoubleEqual,

    Ident(String),
    Equal,

    Inicio,
    Monitor,
    Execute,
    Termino,
    Enquanto,
    Faca,
    Fim,
    If,
    Then,
    Else,
    EndIf,
    Zero,
    Eval,
    Vezes,
}

impl TokenKind {
    /// Whether this token can open a statement.
    pub fn starts_stmt(&self) -> bool {
        matches!(
            self,
            TokenKind::Ident(_)
                | TokenKind::If
                | TokenKind::Enquanto
                | TokenKind::Eval
                | TokenKind::Zero
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Num(_) => "number",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::LessThan => "'<'",
            TokenKind::GreaterThan => "'>'",
            TokenKind::DoubleEqual => "'=='",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Equal => "'='",
            TokenKind::Inicio => "INICIO",
            TokenKind::Monitor => "MONITOR",
            TokenKind::Execute => "EXECUTE",
            TokenKind::Termino => "TERMINO",
            TokenKind::Enquanto => "ENQUANTO",
            TokenKind::Faca => "FACA",
            TokenKind::Fim => "FIM",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::EndIf => "END_IF",
            TokenKind::Zero => "ZERO",
            TokenKind::Eval => "EVAL",
            TokenKind::Vezes => "VEZES",
        };
        f.write_str(s)
    }
}

/// Location of a token in the source. `line` and `column` are 1-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}
