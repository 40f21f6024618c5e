use crate::{
    ast::expressions::{
        BooleanLiteral, Expression, Identifier, InfixExpression, IntegerLiteral, PrefixExpression,
    },
    errors::errors::Diagnostic,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Precedence-climbing core. Parses one expression whose operators all
/// bind tighter than `bp`, leaving `current` on the expression's last
/// token.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expression> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.nud_handler(token_kind) else {
        parser.record(Diagnostic::MissingPrefixParse { kind: token_kind });
        return None;
    };

    let mut left = nud_fn(parser)?;

    // While the next token is an operator binding tighter than the
    // caller, fold the left expression through its LED. A peek token
    // without a LED ends the expression as-is.
    while !parser.peek_token_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let Some(led_fn) = parser.led_handler(parser.peek_token_kind()) else {
            return Some(left);
        };

        parser.advance();
        left = led_fn(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();
    let value = token.literal.clone();

    Some(Expression::Identifier(Identifier { token, value }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
        Err(_) => {
            parser.record(Diagnostic::IntegerParse {
                literal: token.literal,
            });
            None
        }
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();
    let value = parser.current_token_is(TokenKind::True);

    Some(Expression::Boolean(BooleanLiteral { token, value }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();
    let operator = token.literal.clone();

    parser.advance();
    let right = parse_expr(parser, BindingPower::Unary)?;

    Some(Expression::Prefix(PrefixExpression {
        token,
        operator,
        right: Box::new(right),
    }))
}

/// Generic LED for the binary operators. The caller has already
/// advanced onto the operator; the right side parses at the operator's
/// own binding power, which makes equal-precedence chains fold left.
pub fn parse_binary_expr(parser: &mut Parser, left: Expression) -> Option<Expression> {
    let token = parser.current_token().clone();
    let operator = token.literal.clone();
    let bp = parser.current_binding_power();

    parser.advance();
    let right = parse_expr(parser, bp)?;

    Some(Expression::Infix(InfixExpression {
        token,
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expression> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(expr)
}
