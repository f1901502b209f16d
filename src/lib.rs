pub mod analyzer;
pub mod codegen;
pub mod lexer;
pub mod parser;

use thiserror::Error;

use analyzer::{SemanticError, SemanticVisitor};
use codegen::{Codegen, CodegenOptions};
use lexer::{LexError, Lexer};
use parser::{ParseError, Parser};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

/// The generated C, plus the characters the lexer had to skip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Translation {
    pub output: String,
    pub diagnostics: Vec<LexError>,
}

pub fn compile(user_input: &str) -> Result<Translation, CompileError> {
    compile_with(user_input, CodegenOptions::default())
}

pub fn compile_with(
    user_input: &str,
    options: CodegenOptions,
) -> Result<Translation, CompileError> {
    let (tokens, diagnostics) = Lexer::tokenize(user_input);

    let mut parser = Parser::new(tokens);
    let program = parser.parse()?;

    let symbol_table = SemanticVisitor::new().visit_program(&program)?;

    let output = Codegen::new(symbol_table, options).generate(&program);
    Ok(Translation {
        output,
        diagnostics,
    })
}
