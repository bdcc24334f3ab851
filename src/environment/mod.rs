//! Lexical scope for the evaluator.
//!
//! An `Environment` is a flat name table plus an optional link to an enclosing scope.
//! Function calls create a child environment whose parent is the function's captured
//! environment, which is what makes closures work: a name missing from the call's own
//! frame is looked up in the frame it was defined in, not the frame it was called from.

use crate::object::Object;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Rc<Object>>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates a new, empty root environment with no parent scope.
    pub fn new() -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: None,
        }))
    }

    /// Creates a new environment enclosed by `outer`. Lookups that miss in the new
    /// environment's own store fall through to `outer`.
    pub fn new_enclosed(outer: Rc<RefCell<Environment>>) -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    /// Looks up `name`, walking outward through enclosing scopes if it isn't bound
    /// locally.
    pub fn get(&self, name: &str) -> Option<Rc<Object>> {
        if let Some(value) = self.store.get(name) {
            return Some(Rc::clone(value));
        }
        self.outer.as_ref()?.borrow().get(name)
    }

    /// Binds `name` to `value` in this environment's own frame, shadowing (rather than
    /// mutating) any binding of the same name in an enclosing scope.
    pub fn set(&mut self, name: String, value: Rc<Object>) {
        self.store.insert(name, value);
    }
}
