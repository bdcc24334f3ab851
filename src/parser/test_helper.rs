//! Shared assertion helpers for parser tests.
//!
//! These mirror the small helper functions that accompany a Pratt parser test
//! suite: rather than repeating the same `match` boilerplate in every test,
//! callers assert on the shape of a parsed node through a handful of
//! documented helpers.

use crate::ast::{Expression, Statement};
use crate::parser::Parser;

/// Panics with all accumulated parser errors if any were recorded.
pub fn check_parser_errors(p: &Parser) {
    let errors = p.errors();
    if errors.is_empty() {
        return;
    }
    let mut msg = format!("parser has {} errors\n", errors.len());
    for err in errors {
        msg.push_str(&format!("parser error: {}\n", err));
    }
    panic!("{}", msg);
}

/// Asserts that `stmt` is a `let` statement binding `name`.
pub fn test_let_statement(stmt: &Statement, name: &str) -> bool {
    let let_stmt = match stmt {
        Statement::Let(let_stmt) => let_stmt,
        _ => {
            eprintln!("stmt is not a LetStatement. got={:?}", stmt);
            return false;
        }
    };
    if let_stmt.name.value != name {
        eprintln!(
            "let_stmt.name.value is not '{}'. got={}",
            name, let_stmt.name.value
        );
        return false;
    }
    true
}

/// Asserts that `stmt` is a `return` statement.
pub fn is_return_statement(stmt: &Statement) -> bool {
    match stmt {
        Statement::Return(_) => true,
        _ => {
            eprintln!("stmt is not a ReturnStatement. got={:?}", stmt);
            false
        }
    }
}

/// Asserts that `expr` is an identifier with the given name.
pub fn test_identifier(expr: Expression, value: &str) -> bool {
    let ident = match expr {
        Expression::Identifier(ident) => ident,
        other => {
            eprintln!("expr is not an Identifier. got={:?}", other);
            return false;
        }
    };
    ident.value == value
}

/// Asserts that `expr` is an integer literal with the given value.
pub fn test_integer_literal(expr: Expression, value: i64) -> bool {
    let int_lit = match expr {
        Expression::IntegerLiteral(int_lit) => int_lit,
        other => {
            eprintln!("expr is not an IntegerLiteral. got={:?}", other);
            return false;
        }
    };
    if int_lit.value != value {
        eprintln!("int_lit.value is not {}. got={}", value, int_lit.value);
        return false;
    }
    true
}

/// Asserts that `expr` is a boolean literal with the given value.
pub fn test_boolean_literal(expr: Expression, value: bool) -> bool {
    let bool_lit = match expr {
        Expression::BooleanLiteral(bool_lit) => bool_lit,
        other => {
            eprintln!("expr is not a BooleanLiteral. got={:?}", other);
            return false;
        }
    };
    if bool_lit.value != value {
        eprintln!("bool_lit.value is not {}. got={}", value, bool_lit.value);
        return false;
    }
    true
}

/// Asserts that `expr` is an integer literal equal to `value`.
pub fn test_literal_expression(expr: Expression, value: i64) -> bool {
    test_integer_literal(expr, value)
}

/// Asserts that `expr` is a literal (identifier, integer, or boolean) whose
/// textual value matches `expected`.
pub fn test_literal_expression_str(expr: Expression, expected: &str) -> bool {
    match expr {
        Expression::Identifier(_) => test_identifier(expr, expected),
        Expression::IntegerLiteral(_) => match expected.parse::<i64>() {
            Ok(value) => test_integer_literal(expr, value),
            Err(_) => {
                eprintln!("expected '{}' is not a valid integer literal", expected);
                false
            }
        },
        Expression::BooleanLiteral(_) => match expected.parse::<bool>() {
            Ok(value) => test_boolean_literal(expr, value),
            Err(_) => {
                eprintln!("expected '{}' is not a valid boolean literal", expected);
                false
            }
        },
        other => {
            eprintln!(
                "expr is not Identifier, IntegerLiteral, or BooleanLiteral. got={:?}",
                other
            );
            false
        }
    }
}

/// Asserts that `expr` is an infix expression `<left> <operator> <right>` whose
/// operands match the given literal strings.
pub fn test_infix_expression_str(expr: Expression, left: &str, operator: &str, right: &str) -> bool {
    let infix = match expr {
        Expression::InfixExpression(infix) => infix,
        other => {
            eprintln!("expr is not an InfixExpression. got={:?}", other);
            return false;
        }
    };
    if !test_literal_expression_str(*infix.left, left) {
        return false;
    }
    if infix.operator != operator {
        eprintln!(
            "infix.operator is not '{}'. got='{}'",
            operator, infix.operator
        );
        return false;
    }
    test_literal_expression_str(*infix.right, right)
}
