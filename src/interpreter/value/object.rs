use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::{ClassDef, FunctionDef},
    interpreter::{environment::Environment, value::core::Value},
};

/// A user-defined function together with the scope it was defined in.
pub struct Function {
    /// The parsed definition: name, parameters and body.
    pub def:     Rc<FunctionDef>,
    /// The environment active where the `define` statement ran.
    pub closure: Environment,
}

impl Function {
    #[must_use]
    pub const fn new(def: Rc<FunctionDef>, closure: Environment) -> Self {
        Self { def, closure }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("name", &self.def.name)
         .field("params", &self.def.params)
         .finish_non_exhaustive()
    }
}

/// A class descriptor.
///
/// The method table is filled once, when the class statement runs, and never
/// changes afterwards. Every instance shares its class through an `Rc`.
pub struct Class {
    /// The class name, used for display.
    pub name:    String,
    methods:     HashMap<String, Rc<FunctionDef>>,
    /// The environment active where the `class` statement ran. Methods use it
    /// as their defining scope.
    pub closure: Environment,
}

impl Class {
    /// Builds a class descriptor from its definition.
    ///
    /// Methods are registered, not evaluated. A later method with the same
    /// name replaces an earlier one.
    #[must_use]
    pub fn new(def: &ClassDef, closure: Environment) -> Self {
        let methods = def.methods
                         .iter()
                         .map(|method| (method.name.clone(), Rc::clone(method)))
                         .collect();

        Self { name: def.name.clone(),
               methods,
               closure }
    }

    /// Looks up a method by name.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<Rc<FunctionDef>> {
        self.methods.get(name).cloned()
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut methods: Vec<&String> = self.methods.keys().collect();
        methods.sort();

        f.debug_struct("Class")
         .field("name", &self.name)
         .field("methods", &methods)
         .finish_non_exhaustive()
    }
}

/// An instance of a class with its own mutable fields.
pub struct Instance {
    /// The class this instance was created from. Never reassigned.
    pub class: Rc<Class>,
    fields:    RefCell<HashMap<String, Value>>,
}

impl Instance {
    /// Creates an instance with no fields.
    #[must_use]
    pub fn new(class: Rc<Class>) -> Self {
        Self { class,
               fields: RefCell::new(HashMap::new()) }
    }

    /// Sets (or replaces) a field.
    pub fn set_field(&self, name: &str, value: Value) {
        self.fields.borrow_mut().insert(name.to_string(), value);
    }

    /// Reads a field without considering methods.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<Value> {
        self.fields.borrow().get(name).cloned()
    }
}

/// Reads an attribute from an instance.
///
/// A field takes priority over a method of the same name. A method lookup
/// produces a [`BoundMethod`] pairing the instance with the method. Anything
/// else is [`Value::Absent`].
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use aurora::{
///     ast::ClassDef,
///     interpreter::{
///         environment::Environment,
///         value::{
///             core::Value,
///             object::{Class, Instance, get_attribute},
///         },
///     },
/// };
///
/// let def = ClassDef { name:    "Point".to_string(),
///                      methods: Vec::new(),
///                      line:    1, };
/// let class = Rc::new(Class::new(&def, Environment::new()));
/// let point = Rc::new(Instance::new(class));
/// point.set_field("x", Value::Number(3.0));
///
/// assert_eq!(get_attribute(&point, "x"), Value::Number(3.0));
/// assert_eq!(get_attribute(&point, "y"), Value::Absent);
/// ```
#[must_use]
pub fn get_attribute(instance: &Rc<Instance>, name: &str) -> Value {
    if let Some(value) = instance.field(name) {
        return value;
    }

    instance.class
            .method(name)
            .map_or(Value::Absent, |method| {
                Value::BoundMethod(Rc::new(BoundMethod { receiver: Rc::clone(instance),
                                                         method }))
            })
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<String> = self.fields.borrow().keys().cloned().collect();
        fields.sort();

        f.debug_struct("Instance")
         .field("class", &self.class.name)
         .field("fields", &fields)
         .finish()
    }
}

/// A method looked up through an instance, waiting to be called.
///
/// Calling it passes the receiver as the first argument.
pub struct BoundMethod {
    /// The instance the method was read from.
    pub receiver: Rc<Instance>,
    /// The method definition from the receiver's class.
    pub method:   Rc<FunctionDef>,
}

impl fmt::Debug for BoundMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundMethod")
         .field("class", &self.receiver.class.name)
         .field("method", &self.method.name)
         .finish()
    }
}
