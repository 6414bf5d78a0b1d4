#![allow(clippy::module_inception)]

use std::rc::Rc;

use log::debug;

use crate::{
    ast::ast::Expr,
    errors::errors::Error,
    lexer::lexer::{tokenize, ColumnPolicy},
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in a source file.
///
/// `index` counts the characters consumed so far and is -1 before the first
/// advance. `line` and `column` are zero-based.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePosition {
    pub index: i32,
    pub line: u32,
    pub column: i32,
    pub file_name: Rc<String>,
    pub file_text: Rc<String>,
}

impl SourcePosition {
    /// Position before the first character of `file_text`.
    pub fn new(file_name: Rc<String>, file_text: Rc<String>) -> Self {
        SourcePosition {
            index: -1,
            line: 0,
            column: -1,
            file_name,
            file_text,
        }
    }

    /// First character of a file whose text is not available.
    pub fn origin(file_name: Rc<String>) -> Self {
        SourcePosition {
            index: 0,
            line: 0,
            column: 0,
            file_name,
            file_text: Rc::new(String::new()),
        }
    }

    /// Returns the position after stepping over `current`.
    pub fn advance(&self, current: Option<char>, policy: ColumnPolicy) -> Self {
        let mut next = self.clone();
        next.index += 1;
        next.column += 1;

        if current == Some('\n') {
            next.line += 1;
            if policy == ColumnPolicy::ResetOnNewline {
                next.column = 0;
            }
        }

        next
    }
}

/// Half-open character range `[start.index, end.index)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl Span {
    /// The source characters covered by this span.
    pub fn text(&self) -> String {
        let start = self.start.index.max(0) as usize;
        let end = self.end.index.max(0) as usize;

        self.start
            .file_text
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }
}

/// Tokenizes and parses `text`, returning the expression tree or the first error.
pub fn run(file_name: &str, text: &str) -> Result<Expr, Error> {
    let tokens = tokenize(file_name, text)?;
    debug!("{}: tokenized {} tokens", file_name, tokens.len());

    let ast = parse(tokens, Rc::new(String::from(file_name)))?;
    debug!("{}: parsed {}", file_name, ast);

    Ok(ast)
}

/// Finds the line holding character `position` of `text`.
///
/// Returns the one-based line number, the line itself, and the offset of
/// `position` inside that line. The position just past the end of the text
/// belongs to the last line.
pub fn get_line_at_position(text: &str, position: usize) -> Option<(usize, String, usize)> {
    let mut start = 0;
    let mut last = None;

    for (line_number, line) in text.split_inclusive('\n').enumerate() {
        let end = start + line.chars().count();

        if (start..end).contains(&position) {
            return Some((line_number + 1, line.to_string(), position - start));
        }

        last = Some((line_number + 1, line, start));
        start = end;
    }

    match last {
        Some((line_number, line, line_start)) if position == start && !line.ends_with('\n') => {
            Some((line_number, line.to_string(), position - line_start))
        }
        Some((line_number, _, _)) if position == start => Some((line_number + 1, String::new(), 0)),
        _ => None,
    }
}
