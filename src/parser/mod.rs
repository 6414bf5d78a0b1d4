//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an expression tree. It uses a Pratt parser with two precedence
//! levels above the default:
//!
//! - Additive: `+` and `-`
//! - Multiplicative: `*` and `/`
//!
//! Numbers and parenthesized groups are the operands. All operators are
//! left-associative.

pub mod expr;
pub mod lookups;
pub mod parser;
