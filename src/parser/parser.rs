//! Parser implementation for building the expression tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Expressions are parsed with a binding-power loop driven by NUD/LED
//! handlers registered per token kind.
//!
//! It maintains lookup tables for:
//! - NUD (null denotation) handlers for operands
//! - LED (left denotation) handlers for infix operators
//! - Binding powers for operator precedence

use std::{collections::HashMap, rc::Rc};

use log::debug;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    SourcePosition,
};

use super::{
    expr::parse_expression,
    lookups::{create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup},
};

/// The main parser structure that maintains parsing state.
///
/// Holds the token stream and the lookup tables for parsing expressions.
/// There is no end-of-stream token: once the cursor passes the last token,
/// `current_token` returns `None`.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Lookup table for null denotation (operand) handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) handlers
    led_lookup: LEDLookup,
    /// Lookup table for binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Number of currently open parenthesized groups
    depth: usize,
}

/// Deepest parenthesis nesting the parser accepts.
pub const MAX_NESTING_DEPTH: usize = 128;

impl Parser {
    /// Creates a new Parser instance with empty lookup tables.
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Advances to the next token and returns the one just consumed.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let token = self.tokens.get(self.pos).cloned().ok_or_else(|| self.end_of_input())?;
        self.pos += 1;
        Ok(token)
    }

    /// Consumes the current token if it has the expected kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let Some(token) = self.current_token() else {
            return Err(self.end_of_input());
        };
        if token.kind != expected_kind {
            return Err(unexpected_token(token));
        }

        self.advance()
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (operand) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Enters a parenthesized group opened by `open`.
    pub fn enter_group(&mut self, open: &Token) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                open.span.clone(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Position just past the last token, or the start of the file when
    /// there are no tokens.
    pub fn end_position(&self) -> SourcePosition {
        match self.tokens.last() {
            Some(token) => token.span.end.clone(),
            None => SourcePosition::origin(Rc::clone(&self.file)),
        }
    }

    pub fn end_of_input(&self) -> Error {
        Error::at(ErrorImpl::UnexpectedEndOfInput, self.end_position())
    }
}

pub fn unexpected_token(token: &Token) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            token: token.lexeme(),
        },
        token.span.clone(),
    )
}

/// Parses a stream of tokens into an expression tree.
///
/// Every token must belong to the expression: anything left over after
/// the top-level expression is reported as an unexpected token.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Expr, Error> {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);

    let result = parse_expression(&mut parser).and_then(|expr| match parser.current_token() {
        Some(token) => Err(unexpected_token(token)),
        None => Ok(expr),
    });

    if let Err(error) = &result {
        debug!("{}: {}", parser.file, error.get_kind());
    }

    result
}
