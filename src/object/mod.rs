//! The runtime value model for evaluated Monkey programs.
//!
//! Every value produced by the evaluator is an `Object`, shared behind an `Rc` so that
//! environments, closures, and return values can all point at the same instance without
//! copying. `TRUE`, `FALSE`, and `NULL` are process-wide singletons: the evaluator never
//! allocates a second `Boolean(true)` or a second `Null`, which lets infix `==`/`!=` on
//! non-integer operands fall back to `Rc::ptr_eq` instead of a structural comparison.

use crate::ast::expression::{BlockStatement, Identifier};
use crate::environment::Environment;
use std::cell::RefCell;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

/// The kind tag of an `Object`, used in error messages (`INTEGER`, `BOOLEAN`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Integer,
    Boolean,
    Null,
    ReturnValue,
    Error,
    Function,
}

impl Display for ObjectKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ObjectKind::Integer => "INTEGER",
            ObjectKind::Boolean => "BOOLEAN",
            ObjectKind::Null => "NULL",
            ObjectKind::ReturnValue => "RETURN",
            ObjectKind::Error => "ERROR",
            ObjectKind::Function => "FUNCTION",
        };
        write!(f, "{}", s)
    }
}

/// A runtime value produced by the evaluator.
#[derive(Debug, Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Null,
    ReturnValue(Rc<Object>),
    Error(String),
    Function {
        parameters: Vec<Identifier>,
        body: Box<BlockStatement>,
        env: Rc<RefCell<Environment>>,
    },
}

impl Object {
    /// The kind tag for this value, used in error messages and the `FUNCTION`/`INTEGER`/...
    /// strings that appear in evaluator errors.
    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Integer(_) => ObjectKind::Integer,
            Object::Boolean(_) => ObjectKind::Boolean,
            Object::Null => ObjectKind::Null,
            Object::ReturnValue(_) => ObjectKind::ReturnValue,
            Object::Error(_) => ObjectKind::Error,
            Object::Function { .. } => ObjectKind::Function,
        }
    }

    /// Renders the value the way the REPL and `inspect`-based tests expect.
    pub fn inspect(&self) -> String {
        match self {
            Object::Integer(value) => value.to_string(),
            Object::Boolean(value) => value.to_string(),
            Object::Null => "null".to_string(),
            Object::ReturnValue(inner) => inner.inspect(),
            Object::Error(message) => format!("ERROR: {}", message),
            Object::Function {
                parameters, body, ..
            } => {
                let params: Vec<String> = parameters.iter().map(|p| p.value.clone()).collect();
                format!("fn({}) {{\n{}\n}}", params.join(", "), body)
            }
        }
    }

    /// Whether this value is "truthy" for `if` conditions: everything except `FALSE` and
    /// `NULL`.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }
}

thread_local! {
    /// The shared `TRUE` singleton; compared by `Rc::ptr_eq` for non-integer equality.
    pub static TRUE: Rc<Object> = Rc::new(Object::Boolean(true));
    /// The shared `FALSE` singleton.
    pub static FALSE: Rc<Object> = Rc::new(Object::Boolean(false));
    /// The shared `NULL` singleton.
    pub static NULL: Rc<Object> = Rc::new(Object::Null);
}

/// Returns the shared `TRUE` or `FALSE` singleton for a native bool.
pub fn native_bool(value: bool) -> Rc<Object> {
    if value {
        TRUE.with(Rc::clone)
    } else {
        FALSE.with(Rc::clone)
    }
}

/// Returns the shared `NULL` singleton.
pub fn null() -> Rc<Object> {
    NULL.with(Rc::clone)
}
