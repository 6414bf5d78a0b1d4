use crate::{
    lexer::tokens::{NumericLiteral, Token},
    Span,
};

use super::ast::Expr;

// LITERALS

/// Number Expression
/// Represents an integer or float literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub token: Token,
    pub value: NumericLiteral,
    pub span: Span,
}

impl NumberExpr {
    pub fn new(token: Token, value: NumericLiteral) -> Self {
        NumberExpr {
            span: token.span.clone(),
            token,
            value,
        }
    }

    pub fn value(&self) -> &NumericLiteral {
        &self.value
    }
}

// OPERATORS

/// Binary Expression
/// Represents an arithmetic operation between two operands in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub span: Span,
}

impl BinaryExpr {
    pub fn new(left: Expr, operator: Token, right: Expr) -> Self {
        BinaryExpr {
            span: Span {
                start: left.get_span().start.clone(),
                end: right.get_span().end.clone(),
            },
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}
