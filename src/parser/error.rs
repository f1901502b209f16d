use thiserror::Error;

use crate::lexer::{Span, Token};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Syntax error at {span}: unexpected {found} '{text}' (was expecting {expected})")]
    UnexpectedToken {
        found: String,
        text: String,
        span: Span,
        expected: String,
    },
    #[error("Syntax error: unexpected end of input (was expecting {expected})")]
    UnexpectedEof { expected: String },
    #[error("Syntax error at {span}: nesting is too deep")]
    TooDeep { span: Span },
}

impl ParseError {
    pub(super) fn unexpected(token: &Token, expected: impl Into<String>) -> Self {
        ParseError::UnexpectedToken {
            found: token.kind.to_string(),
            text: token.text.clone(),
            span: token.span,
            expected: expected.into(),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
