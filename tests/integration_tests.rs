//! Integration tests for the full front-end.
//!
//! These tests verify that the complete pipeline works correctly from
//! source text through tokenization and parsing, and that errors from
//! either stage come back through the same `Result`.

use std::rc::Rc;

use hindian::{
    ast::ast::{Expr, ExprType},
    errors::errors::ErrorImpl,
    lexer::{
        lexer::{tokenize, tokenize_with, ColumnPolicy, LexerOptions},
        tokens::{NumericLiteral, TokenKind},
    },
    parser::parser::{parse, MAX_NESTING_DEPTH},
    run,
};

#[test]
fn test_run_simple_expression() {
    let ast = run("test.hin", "1 + 2").unwrap();

    assert_eq!(ast.get_expr_type(), ExprType::Binary);
    assert_eq!(ast.to_string(), "(integer:1, plus, integer:2)");
}

#[test]
fn test_run_matches_separate_stages() {
    let source = "12 * (3.5 - 1) / 4";
    let tokens = tokenize("test.hin", source).unwrap();
    let parsed = parse(tokens, Rc::new("test.hin".to_string())).unwrap();

    assert_eq!(run("test.hin", source).unwrap(), parsed);
}

#[test]
fn test_run_precedence_and_grouping() {
    let flat = run("test.hin", "2+3*4").unwrap();
    let grouped = run("test.hin", "(2+3)*4").unwrap();

    assert_eq!(flat.to_string(), "(integer:2, plus, (integer:3, multiply, integer:4))");
    assert_eq!(grouped.to_string(), "((integer:2, plus, integer:3), multiply, integer:4)");
}

#[test]
fn test_run_left_associative_chain() {
    let ast = run("test.hin", "8-3-2").unwrap();

    assert_eq!(ast.to_string(), "((integer:8, minus, integer:3), minus, integer:2)");
}

#[test]
fn test_run_float_split_on_second_dot() {
    let error = run("test.hin", "1.2.3").unwrap_err();

    // Two adjacent numbers lex fine but do not form an expression
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            token: ".3".to_string()
        }
    );
    assert_eq!(error.get_position().index, 3);
}

#[test]
fn test_run_illegal_character() {
    let error = run("prog.hin", "3 + x").unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::IllegalCharacter { character: 'x' });
    assert_eq!(error.render(), "Illegal Character: x\nFile prog.hin, line 1");
}

#[test]
fn test_run_illegal_character_discards_tokens() {
    // The error wins even though a valid expression precedes it
    let error = run("test.hin", "1 + 2 ; 3").unwrap_err();

    assert_eq!(error.details(), ";");
}

#[test]
fn test_run_empty_source() {
    assert!(tokenize("test.hin", "").unwrap().is_empty());

    let error = run("test.hin", "").unwrap_err();
    assert_eq!(error.get_kind(), &ErrorImpl::UnexpectedEndOfInput);
    assert_eq!(error.render(), "Unexpected End Of Input: expected a number or '('\nFile test.hin, line 1");
}

#[test]
fn test_every_accepted_character_lexes() {
    let source = "0123456789.+-*/() 9.";
    let tokens = tokenize("test.hin", source).unwrap();

    let rebuilt: String = tokens.iter().map(|t| t.lexeme()).collect();
    assert_eq!(rebuilt, source.replace(' ', ""));
}

#[test]
fn test_illegal_characters_report_themselves() {
    for c in ['!', '#', 'a', '\t', '\n', '\r', '[', '\u{e9}'] {
        let error = tokenize("test.hin", &format!("1 {}", c)).unwrap_err();

        assert_eq!(error.get_kind(), &ErrorImpl::IllegalCharacter { character: c });
        assert_eq!(error.details(), c.to_string());

        let again = tokenize("test.hin", &error.details()).unwrap_err();
        assert_eq!(again.get_kind(), error.get_kind());
    }
}

#[test]
fn test_error_line_after_newline() {
    let options = LexerOptions {
        column_policy: ColumnPolicy::Continue,
    };
    let error = tokenize_with("test.hin", "1\n", options).unwrap_err();

    assert_eq!(error.get_span().start.line, 0);
    assert_eq!(error.get_span().end.line, 1);
    assert_eq!(error.render(), "Illegal Character: \n\nFile test.hin, line 1");
}

#[test]
fn test_excerpt_points_at_character() {
    let error = run("test.hin", "  12 * &").unwrap_err();

    let expected = "Error: Illegal Character\n-> test.hin\n  |\n1 | 12 * &\n  | -----^";
    assert_eq!(error.render_excerpt(), expected);
}

#[test]
fn test_number_values() {
    let ast = run("test.hin", "3.").unwrap();
    let number = ast.as_number().unwrap();

    assert_eq!(number.token.kind, TokenKind::Float);
    assert_eq!(number.value(), &NumericLiteral::Float(3.0));
}

#[test]
fn test_tree_owns_children() {
    let ast = run("test.hin", "1*2+3*4").unwrap();
    let copy: Expr = ast.clone();

    assert_eq!(ast, copy);
    assert_eq!(ast.node_count(), 7);
}

#[test]
fn test_run_integer_wider_than_machine_word() {
    let ast = run("test.hin", "99999999999999999999 + 1").unwrap();

    assert_eq!(ast.to_string(), "(integer:99999999999999999999, plus, integer:1)");
}

#[test]
fn test_run_deep_nesting_is_an_error() {
    let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let error = run("test.hin", &source).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::NestingTooDeep {
            limit: MAX_NESTING_DEPTH
        }
    );
    assert_eq!(error.render(), format!("Nesting Too Deep: more than {} open parentheses\nFile test.hin, line 1", MAX_NESTING_DEPTH));
}
