use thiserror::Error;

use super::Span;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    #[error("Illegal character '{character}' at {span}")]
    UnexpectedCharacter { character: char, span: Span },
    #[error("Integer literal {literal} at {span} does not fit in 64 bits")]
    IntegerOverflow { literal: String, span: Span },
}
