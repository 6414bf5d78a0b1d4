use std::fmt::Display;

use crate::Span;

use super::expressions::{BinaryExpr, NumberExpr};

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ExprType {
    Number,
    Binary,
}

/// Expression tree produced by the parser.
///
/// Each `Binary` node owns its operands, so the tree has no sharing.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    Binary(BinaryExpr),
}

impl Expr {
    /// Returns the expression type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Number(_) => ExprType::Number,
            Expr::Binary(_) => ExprType::Binary,
        }
    }

    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
        }
    }

    pub fn as_number(&self) -> Option<&NumberExpr> {
        match self {
            Expr::Number(expr) => Some(expr),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&BinaryExpr> {
        match self {
            Expr::Binary(expr) => Some(expr),
            _ => None,
        }
    }

    /// Number of nodes below and including this one.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Number(_) => 1,
            Expr::Binary(expr) => 1 + expr.left.node_count() + expr.right.node_count(),
        }
    }
}

impl From<NumberExpr> for Expr {
    fn from(expr: NumberExpr) -> Self {
        Expr::Number(expr)
    }
}

impl From<BinaryExpr> for Expr {
    fn from(expr: BinaryExpr) -> Self {
        Expr::Binary(expr)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(expr) => write!(f, "{}", expr.token),
            Expr::Binary(expr) => write!(f, "({}, {}, {})", expr.left, expr.operator, expr.right),
        }
    }
}
