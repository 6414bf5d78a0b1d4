//! Lexical analysis module for the front-end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Number literals (integers and floats) and the arithmetic operators
//! - Parentheses for grouping
//! - Line and column tracking for error reporting

pub mod lexer;
pub mod tokens;
