use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::interpreter::value::core::Value;

/// A single scope: its own bindings plus a link to the enclosing scope.
struct Scope {
    parent:   Option<Environment>,
    bindings: RefCell<HashMap<String, Value>>,
}

/// A handle to a chain of scopes.
///
/// Cloning an `Environment` clones the handle, not the bindings: every clone
/// observes the same scope. Function values and classes keep such a handle to
/// the scope they were defined in.
///
/// Writes follow a two-tier rule:
/// - [`Environment::define`] always binds in the current scope.
/// - [`Environment::assign`] mutates the nearest ancestor binding when the
///   current scope does not bind the name itself, and defines locally
///   otherwise.
///
/// # Example
/// ```
/// use aurora::interpreter::{environment::Environment, value::core::Value};
///
/// let outer = Environment::new();
/// outer.define("x", Value::Number(1.0));
///
/// let inner = outer.child();
/// inner.assign("x", Value::Number(2.0));
/// inner.assign("y", Value::Number(3.0));
///
/// assert_eq!(outer.get("x"), Value::Number(2.0));
/// assert_eq!(outer.get("y"), Value::Absent);
/// assert_eq!(inner.get("y"), Value::Number(3.0));
/// ```
#[derive(Clone)]
pub struct Environment(Rc<Scope>);

impl Environment {
    /// Creates an empty top-level environment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parent(None)
    }

    fn with_parent(parent: Option<Self>) -> Self {
        Self(Rc::new(Scope { parent,
                             bindings: RefCell::new(HashMap::new()) }))
    }

    /// Creates a new, empty scope whose parent is `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Self::with_parent(Some(self.clone()))
    }

    /// Looks `name` up through the chain, innermost scope first.
    ///
    /// Returns [`Value::Absent`] when no scope binds the name.
    #[must_use]
    pub fn get(&self, name: &str) -> Value {
        let mut scope = self;
        loop {
            if let Some(value) = scope.0.bindings.borrow().get(name) {
                return value.clone();
            }
            match &scope.0.parent {
                Some(parent) => scope = parent,
                None => return Value::Absent,
            }
        }
    }

    /// Returns `true` if any scope in the chain binds `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.binds_locally(name)
        || self.0
               .parent
               .as_ref()
               .is_some_and(|parent| parent.contains(name))
    }

    fn binds_locally(&self, name: &str) -> bool {
        self.0.bindings.borrow().contains_key(name)
    }

    /// Binds `name` in the current scope, overwriting any local binding.
    pub fn define(&self, name: &str, value: Value) {
        self.0.bindings.borrow_mut().insert(name.to_string(), value);
    }

    /// Writes `name` following the declare-or-mutate-outer rule.
    ///
    /// If the current scope does not bind `name` but an ancestor does, the
    /// ancestor's binding is updated. Otherwise the name is created or
    /// overwritten in the current scope.
    pub fn assign(&self, name: &str, value: Value) {
        if !self.binds_locally(name)
           && let Some(parent) = &self.0.parent
           && parent.contains(name)
        {
            parent.assign(name, value);
            return;
        }

        self.define(name, value);
    }

    /// Number of scopes in the chain, including this one.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.0.parent.as_ref().map_or(0, Self::depth)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<String> = self.0.bindings.borrow().keys().cloned().collect();
        names.sort();

        f.debug_struct("Environment")
         .field("names", &names)
         .field("depth", &self.depth())
         .finish()
    }
}
