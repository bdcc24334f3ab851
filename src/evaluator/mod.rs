//! Tree-walking evaluator for the Monkey language.
//!
//! `eval` recursively walks the AST produced by the parser, threading an `Environment`
//! through the recursion so `let` bindings and function calls can introduce and look up
//! scope. Two unwind-like mechanisms ride alongside the normal return value:
//! `Object::ReturnValue` carries a `return` statement's value up to the nearest function
//! call or program boundary, and `Object::Error` short-circuits any expression or
//! statement sequence it appears in.

use crate::ast::expression::Expression;
use crate::ast::statement::Statement;
use crate::ast::Program;
use crate::environment::Environment;
use crate::object::{native_bool, null, Object, ObjectKind};
use std::cell::RefCell;
use std::rc::Rc;

/// Evaluates a whole program: statements run in order, a `return` unwraps its value at
/// this level, and an `Error` stops evaluation immediately.
pub fn eval_program(program: &Program, env: &Rc<RefCell<Environment>>) -> Rc<Object> {
    let mut result = null();
    for stmt in &program.statements {
        result = eval_statement(stmt, env);
        match &*result {
            Object::ReturnValue(value) => return Rc::clone(value),
            Object::Error(_) => return result,
            _ => {}
        }
    }
    result
}

/// Evaluates a block's statements in order without unwrapping `ReturnValue`, so a
/// `return` inside a nested `if` keeps propagating up through enclosing blocks until a
/// function call or the program boundary unwraps it.
fn eval_block_statement(block: &crate::ast::expression::BlockStatement, env: &Rc<RefCell<Environment>>) -> Rc<Object> {
    let mut result = null();
    for stmt in &block.statements {
        result = eval_statement(stmt, env);
        if matches!(&*result, Object::ReturnValue(_) | Object::Error(_)) {
            return result;
        }
    }
    result
}

fn eval_statement(stmt: &Statement, env: &Rc<RefCell<Environment>>) -> Rc<Object> {
    match stmt {
        Statement::Let(let_stmt) => {
            let value = match &let_stmt.value {
                Some(expr) => eval_expression(expr, env),
                None => null(),
            };
            if matches!(&*value, Object::Error(_)) {
                return value;
            }
            env.borrow_mut()
                .set(let_stmt.name.value.clone(), Rc::clone(&value));
            value
        }
        Statement::Return(ret_stmt) => {
            let value = match &ret_stmt.value {
                Some(expr) => eval_expression(expr, env),
                None => null(),
            };
            if matches!(&*value, Object::Error(_)) {
                return value;
            }
            Rc::new(Object::ReturnValue(value))
        }
        Statement::Expression(expr_stmt) => eval_expression(&expr_stmt.value, env),
    }
}

fn eval_expression(expr: &Expression, env: &Rc<RefCell<Environment>>) -> Rc<Object> {
    match expr {
        Expression::IntegerLiteral(lit) => Rc::new(Object::Integer(lit.value)),
        Expression::BooleanLiteral(lit) => native_bool(lit.value),
        Expression::Identifier(ident) => match env.borrow().get(&ident.value) {
            Some(value) => value,
            None => error(format!("identifier not found: {}", ident.value)),
        },
        Expression::PrefixExpression(pe) => {
            let right = eval_expression(&pe.right, env);
            if matches!(&*right, Object::Error(_)) {
                return right;
            }
            eval_prefix_expression(&pe.operator, &right)
        }
        Expression::InfixExpression(ie) => {
            let left = eval_expression(&ie.left, env);
            if matches!(&*left, Object::Error(_)) {
                return left;
            }
            let right = eval_expression(&ie.right, env);
            if matches!(&*right, Object::Error(_)) {
                return right;
            }
            eval_infix_expression(&ie.operator, &left, &right)
        }
        Expression::IfExpression(if_expr) => eval_if_expression(if_expr, env),
        Expression::BlockStatement(block) => eval_block_statement(block, env),
        Expression::FunctionLiteral(func_lit) => Rc::new(Object::Function {
            parameters: func_lit.parameters.clone(),
            body: func_lit.body.clone(),
            env: Rc::clone(env),
        }),
        Expression::CallExpression(call) => eval_call_expression(call, env),
    }
}

fn eval_prefix_expression(operator: &str, right: &Rc<Object>) -> Rc<Object> {
    match operator {
        "!" => native_bool(!right.is_truthy()),
        "-" => match &**right {
            Object::Integer(value) => Rc::new(Object::Integer(-value)),
            other => error(format!("unknown operator: -{}", other.kind())),
        },
        other => error(format!("unknown operator: {}{}", other, right.kind())),
    }
}

fn eval_infix_expression(operator: &str, left: &Rc<Object>, right: &Rc<Object>) -> Rc<Object> {
    match (&**left, &**right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix_expression(operator, *l, *r),
        _ if operator == "==" => native_bool(Rc::ptr_eq(left, right)),
        _ if operator == "!=" => native_bool(!Rc::ptr_eq(left, right)),
        _ if left.kind() != right.kind() => error(format!(
            "type mismatch: {} {} {}",
            left.kind(),
            operator,
            right.kind()
        )),
        _ => error(format!(
            "unknown operator: {} {} {}",
            left.kind(),
            operator,
            right.kind()
        )),
    }
}

fn eval_integer_infix_expression(operator: &str, left: i64, right: i64) -> Rc<Object> {
    match operator {
        "+" => Rc::new(Object::Integer(left + right)),
        "-" => Rc::new(Object::Integer(left - right)),
        "*" => Rc::new(Object::Integer(left * right)),
        "/" => Rc::new(Object::Integer(left / right)),
        "<" => native_bool(left < right),
        ">" => native_bool(left > right),
        "==" => native_bool(left == right),
        "!=" => native_bool(left != right),
        other => error(format!(
            "unknown operator: {} {} {}",
            ObjectKind::Integer,
            other,
            ObjectKind::Integer
        )),
    }
}

fn eval_if_expression(
    if_expr: &crate::ast::expression::IfExpression,
    env: &Rc<RefCell<Environment>>,
) -> Rc<Object> {
    let condition = eval_expression(&if_expr.condition, env);
    if matches!(&*condition, Object::Error(_)) {
        return condition;
    }
    if condition.is_truthy() {
        eval_expression(&if_expr.consequence, env)
    } else if let Some(alternative) = &if_expr.alternative {
        eval_expression(alternative, env)
    } else {
        null()
    }
}

fn eval_call_expression(
    call: &crate::ast::expression::CallExpression,
    env: &Rc<RefCell<Environment>>,
) -> Rc<Object> {
    let function = eval_expression(&call.function, env);
    if matches!(&*function, Object::Error(_)) {
        return function;
    }

    let mut arguments = Vec::with_capacity(call.arguments.len());
    for arg in &call.arguments {
        let value = eval_expression(arg, env);
        if matches!(&*value, Object::Error(_)) {
            return value;
        }
        arguments.push(value);
    }

    apply_function(&function, &arguments)
}

fn apply_function(function: &Rc<Object>, arguments: &[Rc<Object>]) -> Rc<Object> {
    let (parameters, body, captured_env) = match &**function {
        Object::Function {
            parameters,
            body,
            env,
        } => (parameters, body, env),
        other => return error(format!("not a function: {}", other.kind())),
    };

    let call_env = Environment::new_enclosed(Rc::clone(captured_env));
    for (param, arg) in parameters.iter().zip(arguments.iter()) {
        call_env
            .borrow_mut()
            .set(param.value.clone(), Rc::clone(arg));
    }

    let result = eval_block_statement(body, &call_env);
    match &*result {
        Object::ReturnValue(value) => Rc::clone(value),
        _ => result,
    }
}

fn error(message: String) -> Rc<Object> {
    Rc::new(Object::Error(message))
}
