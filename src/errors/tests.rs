//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::lexer::tokenize;
use crate::SourcePosition;

fn position(index: i32, line: u32) -> SourcePosition {
    SourcePosition {
        index,
        line,
        column: index,
        file_name: Rc::new("test.hin".to_string()),
        file_text: Rc::new("1 + #".to_string()),
    }
}

#[test]
fn test_error_creation() {
    let error = Error::at(ErrorImpl::IllegalCharacter { character: '@' }, position(10, 0));

    assert_eq!(error.get_error_name(), "Illegal Character");
    assert_eq!(error.details(), "@");
}

#[test]
fn test_error_position() {
    let error = Error::at(
        ErrorImpl::UnexpectedToken {
            token: "plus".to_string(),
        },
        position(42, 3),
    );

    assert_eq!(error.get_position().index, 42);
    assert_eq!(error.get_position().line, 3);
}

#[test]
fn test_error_names() {
    let nesting = Error::at(ErrorImpl::NestingTooDeep { limit: 128 }, position(0, 0));
    let token = Error::at(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        position(0, 0),
    );
    let end = Error::at(ErrorImpl::UnexpectedEndOfInput, position(0, 0));

    assert_eq!(nesting.get_error_name(), "Nesting Too Deep");
    assert_eq!(nesting.details(), "more than 128 open parentheses");
    assert_eq!(token.get_error_name(), "Unexpected Token");
    assert_eq!(end.get_error_name(), "Unexpected End Of Input");
}

#[test]
fn test_render_two_lines() {
    let error = tokenize("test.hin", "1 + #").unwrap_err();

    assert_eq!(error.render(), "Illegal Character: #\nFile test.hin, line 1");
    assert_eq!(error.to_string(), error.render());
}

#[test]
fn test_render_one_based_line() {
    let error = Error::at(ErrorImpl::IllegalCharacter { character: '?' }, position(9, 2));

    assert_eq!(error.render(), "Illegal Character: ?\nFile test.hin, line 3");
}

#[test]
fn test_render_excerpt() {
    let error = tokenize("test.hin", "1 + #").unwrap_err();

    let expected = "Error: Illegal Character\n-> test.hin\n  |\n1 | 1 + #\n  | ----^";
    assert_eq!(error.render_excerpt(), expected);
}

#[test]
fn test_render_excerpt_at_end_of_input() {
    let tokens = tokenize("test.hin", "1 +").unwrap();
    let error = crate::parser::parser::parse(tokens, Rc::new("test.hin".to_string())).unwrap_err();

    let expected = "Error: Unexpected End Of Input (The expression ended early, is an operand or `)` missing?)\n\
                    -> test.hin\n  |\n1 | 1 +\n  | ---^";
    assert_eq!(error.render_excerpt(), expected);
}

#[test]
fn test_render_excerpt_without_source() {
    let error = Error::at(
        ErrorImpl::UnexpectedEndOfInput,
        SourcePosition::origin(Rc::new("test.hin".to_string())),
    );

    assert_eq!(error.render_excerpt(), error.render());
}

#[test]
fn test_error_tip_none() {
    let error = Error::at(ErrorImpl::IllegalCharacter { character: '@' }, position(0, 0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_for_whitespace() {
    let error = Error::at(ErrorImpl::IllegalCharacter { character: '\t' }, position(0, 0));

    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::at(
        ErrorImpl::UnexpectedToken {
            token: "rightParenthesis".to_string(),
        },
        position(0, 0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_source_is_kind() {
    let error = Error::at(ErrorImpl::UnexpectedEndOfInput, position(0, 0));
    let source = std::error::Error::source(&error).unwrap();

    assert_eq!(source.to_string(), "unexpected end of input");
}
