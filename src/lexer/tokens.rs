use lazy_static::lazy_static;
use num_bigint::BigInt;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref SINGLE_CHAR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Minus);
        map.insert('*', TokenKind::Multiply);
        map.insert('/', TokenKind::Divide);
        map.insert('(', TokenKind::LParen);
        map.insert(')', TokenKind::RParen);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Integer,
    Float,

    Plus,
    Minus,
    Multiply,
    Divide,

    LParen,
    RParen,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Multiply => "multiply",
            TokenKind::Divide => "division",
            TokenKind::LParen => "leftParenthesis",
            TokenKind::RParen => "rightParenthesis",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Value of an `Integer` or `Float` token.
/// Integers are unbounded, like the decimal literals they come from.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericLiteral {
    Integer(BigInt),
    Float(f64),
}

impl Display for NumericLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericLiteral::Integer(value) => write!(f, "{}", value),
            NumericLiteral::Float(value) => write!(f, "{:?}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<NumericLiteral>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}:{}", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    /// The source text this token was scanned from.
    pub fn lexeme(&self) -> String {
        self.span.text()
    }
}
