//! Unit tests for the parser module.
//!
//! This module contains tests for:
//! - `let` and `return` statements
//! - Expression statements: identifiers, literals, prefix and infix forms
//! - Operator precedence via parenthesized reconstruction
//! - Diagnostic accumulation and recovery on malformed input

use crate::{
    ast::{
        ast::{Node, Program},
        expressions::Expression,
        statements::Statement,
    },
    errors::errors::Diagnostic,
    lexer::{lexer::Lexer, tokens::TokenKind},
};

use super::parser::Parser;

fn parse_input(source: &str) -> (Program, Vec<Diagnostic>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let diagnostics = parser.errors().to_vec();

    (program, diagnostics)
}

fn check_parser_errors(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }

    for diagnostic in diagnostics {
        eprintln!("parser error: {}", diagnostic);
    }
    panic!("parser has {} errors", diagnostics.len());
}

fn unwrap_expression_stmt(statement: &Statement) -> &Expression {
    match statement {
        Statement::Expression(expression_statement) => &expression_statement.expression,
        other => panic!("statement is not an expression statement: {:?}", other),
    }
}

fn assert_integer_literal(expression: &Expression, value: i64) {
    let Expression::Integer(integer) = expression else {
        panic!("expression is not an integer literal: {:?}", expression);
    };
    assert_eq!(integer.value, value);
    assert_eq!(integer.token_literal(), value.to_string());
}

fn assert_identifier(expression: &Expression, value: &str) {
    let Expression::Identifier(identifier) = expression else {
        panic!("expression is not an identifier: {:?}", expression);
    };
    assert_eq!(identifier.value, value);
    assert_eq!(identifier.token_literal(), value);
}

#[test]
fn test_parse_let_statements() {
    let source = "let x = 5;
let y = 10;
let foobar = 838383;
";
    let (program, diagnostics) = parse_input(source);
    check_parser_errors(&diagnostics);

    assert_eq!(program.statements.len(), 3);

    let expected_names = ["x", "y", "foobar"];
    for (statement, expected) in program.statements.iter().zip(expected_names) {
        assert_eq!(statement.token_literal(), "let");

        let Statement::Let(let_statement) = statement else {
            panic!("statement is not a let statement: {:?}", statement);
        };
        assert_eq!(let_statement.name.value, expected);
        assert_eq!(let_statement.name.token_literal(), expected);
    }
}

#[test]
fn test_let_statement_missing_assignment() {
    let (_, diagnostics) = parse_input("let x 5;");

    assert_eq!(
        diagnostics,
        vec![Diagnostic::UnexpectedToken {
            expected: TokenKind::Assignment,
            found: TokenKind::Int,
        }]
    );
    assert!(diagnostics[0]
        .to_string()
        .contains("expected next token to be ="));
}

#[test]
fn test_let_statement_missing_identifier() {
    let (_, diagnostics) = parse_input("let = 10;");

    assert_eq!(
        diagnostics[0],
        Diagnostic::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Assignment,
        }
    );
    assert_eq!(
        diagnostics[0].to_string(),
        "expected next token to be IDENT, got = instead"
    );
}

#[test]
fn test_parse_return_statements() {
    let source = "return 5;
return 10;
return 993322;
";
    let (program, diagnostics) = parse_input(source);
    check_parser_errors(&diagnostics);

    assert_eq!(program.statements.len(), 3);

    for statement in &program.statements {
        assert_eq!(statement.token_literal(), "return");
        assert!(matches!(statement, Statement::Return(_)));
    }
}

#[test]
fn test_parse_identifier_expression() {
    let (program, diagnostics) = parse_input("foobar;");
    check_parser_errors(&diagnostics);

    assert_eq!(program.statements.len(), 1);
    assert_identifier(unwrap_expression_stmt(&program.statements[0]), "foobar");
}

#[test]
fn test_parse_integer_literal_expression() {
    let (program, diagnostics) = parse_input("5;");
    check_parser_errors(&diagnostics);

    assert_eq!(program.statements.len(), 1);
    assert_integer_literal(unwrap_expression_stmt(&program.statements[0]), 5);
}

#[test]
fn test_parse_boolean_expressions() {
    for (source, expected) in [("true;", true), ("false;", false)] {
        let (program, diagnostics) = parse_input(source);
        check_parser_errors(&diagnostics);

        assert_eq!(program.statements.len(), 1);
        let Expression::Boolean(boolean) = unwrap_expression_stmt(&program.statements[0]) else {
            panic!("expression is not a boolean literal");
        };
        assert_eq!(boolean.value, expected);
    }
}

#[test]
fn test_parse_prefix_expressions() {
    let cases = [("!5;", "!", 5), ("-15;", "-", 15)];

    for (source, operator, value) in cases {
        let (program, diagnostics) = parse_input(source);
        check_parser_errors(&diagnostics);

        assert_eq!(program.statements.len(), 1);
        let Expression::Prefix(prefix) = unwrap_expression_stmt(&program.statements[0]) else {
            panic!("expression is not a prefix expression");
        };
        assert_eq!(prefix.operator, operator);
        assert_integer_literal(&prefix.right, value);
    }
}

#[test]
fn test_parse_infix_expressions() {
    let cases = [
        ("5 + 5;", 5, "+", 5),
        ("5 - 5;", 5, "-", 5),
        ("5 * 5;", 5, "*", 5),
        ("5 / 5;", 5, "/", 5),
        ("5 > 5;", 5, ">", 5),
        ("5 < 5;", 5, "<", 5),
        ("5 == 5;", 5, "==", 5),
        ("5 != 5;", 5, "!=", 5),
    ];

    for (source, left, operator, right) in cases {
        let (program, diagnostics) = parse_input(source);
        check_parser_errors(&diagnostics);

        assert_eq!(program.statements.len(), 1);
        let Expression::Infix(infix) = unwrap_expression_stmt(&program.statements[0]) else {
            panic!("expression is not an infix expression: {}", source);
        };
        assert_eq!(infix.operator, operator);
        assert_integer_literal(&infix.left, left);
        assert_integer_literal(&infix.right, right);
    }
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
        ),
        ("true", "true"),
        ("false", "false"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("3 < 5 == true", "((3 < 5) == true)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
    ];

    for (source, expected) in cases {
        let (program, diagnostics) = parse_input(source);
        check_parser_errors(&diagnostics);

        assert_eq!(program.to_string(), expected, "input: {}", source);
    }
}

#[test]
fn test_missing_prefix_parse_function() {
    let (program, diagnostics) = parse_input("* 5;");

    // The bad operator fails, then recovery picks `5` back up.
    assert_eq!(program.statements.len(), 1);
    assert_integer_literal(unwrap_expression_stmt(&program.statements[0]), 5);
    assert_eq!(
        diagnostics[0],
        Diagnostic::MissingPrefixParse {
            kind: TokenKind::Star,
        }
    );
    assert_eq!(
        diagnostics[0].to_string(),
        "no prefix parse function for * found"
    );
}

#[test]
fn test_illegal_token_in_expression_position() {
    let (_, diagnostics) = parse_input("@;");

    assert_eq!(
        diagnostics,
        vec![Diagnostic::MissingPrefixParse {
            kind: TokenKind::Illegal,
        }]
    );
}

#[test]
fn test_integer_literal_out_of_range() {
    let (program, diagnostics) = parse_input("92233720368547758089;");

    assert!(program.statements.is_empty());
    assert_eq!(
        diagnostics,
        vec![Diagnostic::IntegerParse {
            literal: "92233720368547758089".to_string(),
        }]
    );
    assert_eq!(
        diagnostics[0].to_string(),
        "could not parse \"92233720368547758089\" as integer"
    );
}

#[test]
fn test_trailing_semicolon_is_optional() {
    let (program, diagnostics) = parse_input("a + b");
    check_parser_errors(&diagnostics);

    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.to_string(), "(a + b)");
}

#[test]
fn test_grouped_expression_missing_close_paren() {
    let (_, diagnostics) = parse_input("(1 + 2;");

    assert_eq!(
        diagnostics[0],
        Diagnostic::UnexpectedToken {
            expected: TokenKind::CloseParen,
            found: TokenKind::Semicolon,
        }
    );
}

#[test]
fn test_unterminated_let_statement_terminates() {
    // No semicolon and no further tokens: the skip loop must stop at
    // EOF instead of spinning.
    let (program, diagnostics) = parse_input("let x = 5");
    check_parser_errors(&diagnostics);

    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.statements[0].token_literal(), "let");
}

#[test]
fn test_recovery_continues_after_bad_statement() {
    // The first statement fails, the following ones still parse.
    let (program, diagnostics) = parse_input("let x 5; let y = 10; foobar;");

    assert_eq!(
        diagnostics,
        vec![Diagnostic::UnexpectedToken {
            expected: TokenKind::Assignment,
            found: TokenKind::Int,
        }]
    );

    // Recovery picks `5` back up as an expression statement before the
    // two good statements.
    assert_eq!(program.statements.len(), 3);
    assert!(matches!(program.statements[1], Statement::Let(_)));
    assert!(matches!(program.statements[2], Statement::Expression(_)));
}

#[test]
fn test_program_token_literal() {
    let (program, diagnostics) = parse_input("let x = 5;");
    check_parser_errors(&diagnostics);
    assert_eq!(program.token_literal(), "let");

    let (empty, _) = parse_input("");
    assert!(empty.statements.is_empty());
    assert_eq!(empty.token_literal(), "");
}

#[test]
fn test_relexing_node_literals_reproduces_kinds() {
    let (program, diagnostics) = parse_input("foobar; 5; true;");
    check_parser_errors(&diagnostics);

    let expected_kinds = [TokenKind::Identifier, TokenKind::Int, TokenKind::True];
    for (statement, expected) in program.statements.iter().zip(expected_kinds) {
        let literal = statement.token_literal().to_string();
        let mut lexer = Lexer::new(literal);
        assert_eq!(lexer.next_token().kind, expected);
    }
}
