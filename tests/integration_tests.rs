use monc::analyzer::SemanticErrorKind;
use monc::lexer::LexError;
use monc::parser::ParseError;
use monc::{compile, CompileError};

fn translate(input: &str) -> String {
    let translation = compile(input).unwrap();
    assert!(translation.diagnostics.is_empty());
    translation.output
}

const TRACE_X: &str = "printf(\"x = %d\\n\", x);";

#[test]
fn single_monitored_assignment() {
    let out = translate("INICIO x MONITOR x EXECUTE x = 5 TERMINO");
    assert_eq!(out.matches("int x = 0;").count(), 1);
    assert!(out.contains(&format!("    x = 5;\n    {TRACE_X}\n")));
    // One trace after the assignment, one in the final block.
    assert_eq!(out.matches(TRACE_X).count(), 2);
    assert!(out.ends_with(&format!(
        "// Monitored vars: x\n    {TRACE_X}\n    return 0;\n}}\n"
    )));
}

#[test]
fn zero_on_monitored_variable() {
    let out = translate("INICIO x MONITOR x EXECUTE x = 3 ZERO(x) TERMINO");
    assert!(out.contains(&format!("    x = 0;\n    {TRACE_X}\n")));
}

#[test]
fn repeat_with_constant_and_variable_bounds() {
    let out = translate("INICIO x n MONITOR x EXECUTE EVAL x = x + 1 VEZES 3 FIM TERMINO");
    assert!(out.contains("for (int _i0 = 0; _i0 < 3; _i0++) {\n        x = x + 1;\n    }\n"));

    let out = translate("INICIO x n MONITOR x EXECUTE n = 4 EVAL x = x + 1 VEZES n FIM TERMINO");
    assert!(out.contains("for (int _i0 = 0; _i0 < n; _i0++) {"));
}

#[test]
fn conditional_branches_are_exclusive() {
    let out = translate(
        "INICIO a b x MONITOR x EXECUTE IF a > b THEN x = 1 ELSE x = 2 END_IF TERMINO",
    );
    assert!(out.contains(
        "    if (a > b) {\n        x = 1;\n    } else {\n        x = 2;\n    }\n"
    ));
    // The whole conditional is one traced statement.
    assert_eq!(out.matches(TRACE_X).count(), 2);
}

#[test]
fn unmonitored_variables_are_not_traced() {
    let out = translate("INICIO x y MONITOR x EXECUTE y = 1 TERMINO");
    assert!(!out.contains("printf(\"y"));
}

#[test]
fn deterministic_output() {
    let input = "INICIO a b c MONITOR c a b EXECUTE
        ENQUANTO a < 10 FACA
            a = a + 1
            EVAL b = b * 2 VEZES (a - 1) / 2 FIM
        FIM
        c = a - b
    TERMINO";
    assert_eq!(translate(input), translate(input));
}

#[test]
fn illegal_character_does_not_abort() {
    let translation = compile("INICIO x MONITOR x EXECUTE x = 1 # TERMINO").unwrap();
    assert!(matches!(
        translation.diagnostics.as_slice(),
        [LexError::UnexpectedCharacter { character: '#', .. }]
    ));
    assert!(translation.output.contains("    x = 1;\n"));
}

#[test]
fn syntax_error_produces_no_output() {
    let err = compile("INICIO x MONITOR x EXECUTE x = TERMINO").unwrap_err();
    match err {
        CompileError::Parse(ParseError::UnexpectedToken { text, .. }) => {
            assert_eq!(text, "TERMINO")
        }
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn undeclared_variables_are_rejected() {
    let err = compile("INICIO x MONITOR x EXECUTE y = 1 TERMINO").unwrap_err();
    match err {
        CompileError::Semantic(e) => assert_eq!(e.kind, SemanticErrorKind::UndeclaredVariable),
        other => panic!("expected a semantic error, got {other:?}"),
    }

    let err = compile("INICIO x MONITOR y EXECUTE TERMINO").unwrap_err();
    assert!(matches!(
        err,
        CompileError::Semantic(e) if e.kind == SemanticErrorKind::UndeclaredMonitor
    ));
}

#[test]
fn target_reserved_names_are_rejected() {
    let input = "INICIO int while printf MONITOR int EXECUTE int = 1 while = int printf = 2 TERMINO";
    let err = compile(input).unwrap_err();
    match err {
        CompileError::Semantic(e) => {
            assert_eq!(e.kind, SemanticErrorKind::ReservedInTarget);
            assert_eq!(e.name, "int");
        }
        other => panic!("expected a semantic error, got {other:?}"),
    }
}

#[test]
fn deeply_nested_input_is_an_error() {
    let depth = 200_000;
    let input = format!(
        "INICIO x MONITOR x EXECUTE x = {}1{} TERMINO",
        "(".repeat(depth),
        ")".repeat(depth)
    );
    assert!(matches!(
        compile(&input),
        Err(CompileError::Parse(ParseError::TooDeep { .. }))
    ));
}

#[test]
fn oversized_literal_is_reported() {
    let translation =
        compile("INICIO x MONITOR x EXECUTE x = 18446744073709551617 TERMINO").unwrap();
    assert!(matches!(
        translation.diagnostics.as_slice(),
        [LexError::IntegerOverflow { literal, .. }] if literal == "18446744073709551617"
    ));
}

#[test]
fn full_program() {
    let input = "
INICIO a b c
MONITOR c a
EXECUTE
    a = 2
    b = (a + 3) * 2 - 1
    ENQUANTO a < b FACA
        a = a * 2
    FIM
    IF a == b THEN
        ZERO(c)
    ELSE
        c = a / b
    END_IF
TERMINO
";
    let expected = "\
#include <stdio.h>

int a = 0;
int b = 0;
int c = 0;

int main() {
    a = 2;
    printf(\"a = %d\\n\", a);
    b = (a + 3) * 2 - 1;
    while (a < b) {
        a = a * 2;
    }
    printf(\"a = %d\\n\", a);
    if (a == b) {
        c = 0;
    } else {
        c = a / b;
    }
    printf(\"c = %d\\n\", c);

    // Monitored vars: c a
    printf(\"c = %d\\n\", c);
    printf(\"a = %d\\n\", a);
    return 0;
}
";
    assert_eq!(translate(input), expected);
}
