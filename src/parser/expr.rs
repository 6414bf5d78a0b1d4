use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, NumberExpr},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::BindingPower,
    parser::{unexpected_token, Parser},
};

/// `expression := term ((PLUS | MINUS) term)*`
pub fn parse_expression(parser: &mut Parser) -> Result<Expr, Error> {
    parse_expr(parser, BindingPower::Default)
}

/// `term := factor ((MUL | DIV) factor)*`
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    parse_expr(parser, BindingPower::Additive)
}

/// `factor := INTEGER | FLOAT | LPAREN expression RPAREN`
pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    let Some(token) = parser.current_token() else {
        return Err(parser.end_of_input());
    };
    let Some(handler) = parser.get_nud_lookup().get(&token.kind).copied() else {
        return Err(unexpected_token(token));
    };

    handler(parser)
}

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let mut left = parse_factor(parser)?;

    // Fold while the next operator binds tighter than the current level
    while let Some(token_kind) = parser.current_token_kind() {
        let token_bp = *parser.get_bp_lookup().get(&token_kind).unwrap_or(&BindingPower::Default);
        if token_bp <= bp {
            break;
        }

        let Some(handler) = parser.get_led_lookup().get(&token_kind).copied() else {
            break;
        };

        left = handler(parser, left, token_bp)?;
    }

    Ok(left)
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance()?;
    let Some(value) = token.value.clone() else {
        return Err(unexpected_token(&token));
    };

    Ok(NumberExpr::new(token, value).into())
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;
    let right = parse_expr(parser, bp)?;

    Ok(BinaryExpr::new(left, operator_token, right).into())
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.advance()?;
    parser.enter_group(&open)?;

    let expr = parse_expression(parser)?;
    parser.expect(TokenKind::RParen)?;
    parser.leave_group();

    Ok(expr)
}
