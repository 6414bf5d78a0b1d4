use std::rc::Rc;

use lazy_static::lazy_static;
use log::{debug, trace};
use num_bigint::BigInt;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, SourcePosition, Span, MK_TOKEN};

use super::tokens::{NumericLiteral, Token, TokenKind, SINGLE_CHAR_LOOKUP};

lazy_static! {
    // Digits with at most one dot; a second dot ends the literal.
    static ref NUMBER_PATTERN: Regex = Regex::new(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]*)").unwrap();
}

/// How the column counter behaves when the cursor steps over a newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnPolicy {
    /// Start the next line at column 0.
    #[default]
    ResetOnNewline,
    /// Keep counting columns across lines, as the original tool did.
    Continue,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LexerOptions {
    pub column_policy: ColumnPolicy,
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: Rc<String>,
    pos: SourcePosition,
    /// Byte offset of `current_char` in `source`
    byte_pos: usize,
    current_char: Option<char>,
    options: LexerOptions,
}

impl Lexer {
    pub fn new(file: &str, source: &str, options: LexerOptions) -> Lexer {
        let source = Rc::new(String::from(source));
        let mut lexer = Lexer {
            tokens: vec![],
            pos: SourcePosition::new(Rc::new(String::from(file)), Rc::clone(&source)),
            source,
            byte_pos: 0,
            current_char: None,
            options,
        };
        lexer.advance();
        lexer
    }

    pub fn advance(&mut self) {
        if let Some(current) = self.current_char {
            self.byte_pos += current.len_utf8();
        }
        self.pos = self.pos.advance(self.current_char, self.options.column_policy);
        self.current_char = self.source[self.byte_pos..].chars().next();
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    pub fn push(&mut self, token: Token) {
        trace!("token {} at {}", token, token.span.start.index);
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.current_char
    }

    /// The unread part of the source, starting at the current character.
    pub fn remainder(&self) -> &str {
        &self.source[self.byte_pos..]
    }

    pub fn position(&self) -> SourcePosition {
        self.pos.clone()
    }

    fn make_number(&mut self) -> Token {
        let start = self.position();
        let literal = NUMBER_PATTERN
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        self.advance_n(literal.chars().count());
        let span = Span { start, end: self.position() };

        if literal.contains('.') {
            MK_TOKEN!(TokenKind::Float, Some(float_literal(&literal)), span)
        } else {
            MK_TOKEN!(TokenKind::Integer, Some(integer_literal(&literal)), span)
        }
    }

    /// Consumes the lexer and returns every token of the source.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Error> {
        while let Some(current) = self.at() {
            if current == ' ' {
                self.advance();
            } else if current.is_ascii_digit() || current == '.' {
                let token = self.make_number();
                self.push(token);
            } else if let Some(kind) = SINGLE_CHAR_LOOKUP.get(&current) {
                let start = self.position();
                self.advance();
                let span = Span { start, end: self.position() };
                self.push(MK_TOKEN!(*kind, span));
            } else {
                let start = self.position();
                self.advance();
                let span = Span { start, end: self.position() };
                return Err(Error::new(ErrorImpl::IllegalCharacter { character: current }, span));
            }
        }

        Ok(self.tokens)
    }
}

// NUMBER_PATTERN only yields ASCII digits here, which always parse.
fn integer_literal(literal: &str) -> NumericLiteral {
    NumericLiteral::Integer(literal.parse::<BigInt>().expect("integer literal is all digits"))
}

// Pad both sides so "3.", ".3" and "." all read as decimal floats.
fn float_literal(literal: &str) -> NumericLiteral {
    NumericLiteral::Float(
        format!("0{}0", literal)
            .parse::<f64>()
            .expect("float literal is digits around one dot"),
    )
}

/// Converts `source` into tokens using the default [`LexerOptions`].
pub fn tokenize(file: &str, source: &str) -> Result<Vec<Token>, Error> {
    tokenize_with(file, source, LexerOptions::default())
}

/// Converts `source` into tokens.
///
/// Only plain spaces are skipped. The first character outside digits, `.`,
/// the four operators and the parentheses fails the whole call and no
/// tokens are returned.
pub fn tokenize_with(file: &str, source: &str, options: LexerOptions) -> Result<Vec<Token>, Error> {
    Lexer::new(file, source, options).tokenize().inspect_err(|error| {
        debug!("{}: {}", file, error.get_kind());
    })
}
