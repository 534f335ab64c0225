use std::{collections::HashMap, rc::Rc};

use crate::{ast::FunctionDef, interpreter::value::core::Value};

/// A variable bound by `let`, a function call or a `for` loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// The bound value.
    pub value:  Value,
    /// Position of the iteration cursor used by `.next()` and `.current()`.
    /// `None` until the first `.next()`.
    pub cursor: Option<usize>,
}

impl Binding {
    /// Creates a binding whose cursor has not started yet.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self { value, cursor: None }
    }
}

/// The stack of variable scopes active during one evaluation.
///
/// Every `let`, function call and loop iteration pushes one frame and pops it
/// when its body finishes, on success and on error alike. Lookups scan frames
/// from the innermost outwards, so inner bindings shadow outer ones and
/// function bodies see the frames of their caller.
///
/// # Example
/// ```
/// use hulk::interpreter::{environment::Scopes, value::core::Value};
///
/// let mut scopes = Scopes::default();
/// scopes.push_frame();
/// scopes.define("x", Value::from(1.0));
/// scopes.push_frame();
/// scopes.define("x", Value::from(2.0));
///
/// assert_eq!(scopes.lookup("x").map(|b| &b.value), Some(&Value::from(2.0)));
/// scopes.pop_frame();
/// assert_eq!(scopes.lookup("x").map(|b| &b.value), Some(&Value::from(1.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scopes {
    frames: Vec<HashMap<String, Binding>>,
}

impl Scopes {
    /// Opens a new innermost frame.
    pub fn push_frame(&mut self) {
        self.frames.push(HashMap::new());
    }

    /// Closes the innermost frame, dropping its bindings.
    pub fn pop_frame(&mut self) {
        self.frames.pop();
    }

    /// Binds `name` in the innermost frame, replacing an earlier binding of
    /// the same name in that frame.
    pub fn define(&mut self, name: &str, value: Value) {
        if self.frames.is_empty() {
            self.push_frame();
        }
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.to_string(), Binding::new(value));
        }
    }

    /// Finds the innermost binding of `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    /// Finds the innermost binding of `name` for mutation.
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Binding> {
        self.frames.iter_mut().rev().find_map(|frame| frame.get_mut(name))
    }

    /// Returns the number of open frames.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Removes every frame.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

/// The user-defined functions of a session.
///
/// Functions are declared by the parser and outlive individual statements,
/// so a function declared on one line can be called on the next.
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    functions: HashMap<String, Rc<FunctionDef>>,
}

impl FunctionTable {
    /// Adds a function definition.
    ///
    /// Returns `false` and leaves the table unchanged if a function with the
    /// same name already exists.
    pub fn declare(&mut self, def: FunctionDef) -> bool {
        if self.functions.contains_key(&def.name) {
            return false;
        }
        tracing::debug!(name = %def.name, params = def.params.len(), "function declared");
        self.functions.insert(def.name.clone(), Rc::new(def));
        true
    }

    /// Looks up a function by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Rc<FunctionDef>> {
        self.functions.get(name).cloned()
    }

    /// Returns `true` if a function named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }
}

/// Variables and functions visible to the parser and evaluator.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Variable scopes; reset before every top-level evaluation.
    pub scopes:    Scopes,
    /// Declared functions; kept for the whole session.
    pub functions: FunctionTable,
}
