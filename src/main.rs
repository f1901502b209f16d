use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_stdin::FileOrStdin;

use monc::codegen::CodegenOptions;
use monc::lexer::{LexError, Lexer};
use monc::{compile_with, parser};

#[derive(Parser)]
#[command(name = "monc")]
#[command(about = "Translates INICIO/MONITOR/EXECUTE programs to C")]
struct Args {
    /// Source file to translate, or "-" to read stdin
    input: FileOrStdin,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stage to print
    #[arg(long, value_enum, default_value_t = Emit::C)]
    emit: Emit,

    /// Indentation width of the generated C
    #[arg(long, default_value_t = 4)]
    indent: usize,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Emit {
    C,
    Tokens,
    Ast,
}

fn report(diagnostics: &[LexError]) {
    for d in diagnostics {
        eprintln!("warning: {d}");
    }
}

/// Returns `false` when the program was rejected.
fn run(args: Args) -> Result<bool> {
    let source = args.input.contents().context("Reading input")?;

    let text = match args.emit {
        Emit::Tokens => {
            let (tokens, diagnostics) = Lexer::tokenize(&source);
            report(&diagnostics);
            format!("{tokens:#?}\n")
        }
        Emit::Ast => {
            let (tokens, diagnostics) = Lexer::tokenize(&source);
            report(&diagnostics);
            match parser::Parser::new(tokens).parse() {
                Ok(program) => format!("{program:#?}\n"),
                Err(e) => {
                    eprintln!("error: {e}");
                    return Ok(false);
                }
            }
        }
        Emit::C => {
            let options = CodegenOptions {
                indent_width: args.indent,
            };
            match compile_with(&source, options) {
                Ok(translation) => {
                    report(&translation.diagnostics);
                    translation.output
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    return Ok(false);
                }
            }
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("Writing {}", path.display()))?
        }
        None => print!("{text}"),
    }
    Ok(true)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    if run(args)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
