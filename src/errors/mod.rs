//! Error types and error handling for the front-end.
//!
//! This module defines the error type shared by the lexer and the parser.
//! It includes:
//!
//! - Error structures carrying the source span they refer to
//! - Specific error variants for lexing and parsing
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
