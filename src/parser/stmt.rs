use crate::{
    ast::{
        expressions::Identifier,
        statements::{ExpressionStatement, LetStatement, ReturnStatement, Statement},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Dispatches on the current token: registered statement keywords get
/// their handler, anything else parses as an expression statement.
pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    if let Some(stmt_fn) = parser.stmt_handler(parser.current_token_kind()) {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }

    let name_token = parser.current_token().clone();
    let name = Identifier {
        value: name_token.literal.clone(),
        token: name_token,
    };

    if !parser.expect_peek(TokenKind::Assignment) {
        return None;
    }

    // TODO: parse the value expression instead of skipping it.
    // The EOF check keeps an unterminated statement from looping.
    while !parser.current_token_is(TokenKind::Semicolon)
        && !parser.current_token_is(TokenKind::EOF)
    {
        parser.advance();
    }

    Some(Statement::Let(LetStatement {
        token,
        name,
        value: None,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();
    parser.advance();

    // TODO: parse the return value expression instead of skipping it.
    while !parser.current_token_is(TokenKind::Semicolon)
        && !parser.current_token_is(TokenKind::EOF)
    {
        parser.advance();
    }

    Some(Statement::Return(ReturnStatement { token, value: None }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Default);

    // Statement terminators are optional at end of input. The trailing
    // semicolon is consumed even when the expression failed, so the
    // program loop resumes on the next statement.
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Statement::Expression(ExpressionStatement {
        token,
        expression: expression?,
    }))
}
