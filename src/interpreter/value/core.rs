use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    ast::LiteralValue,
    interpreter::value::object::{BoundMethod, Class, Function, Instance},
    util::num::format_number,
};

/// Shared, mutable list storage.
///
/// Every alias of a list refers to the same storage, so `push` through one
/// name is visible through all of them.
pub type ListRef = Rc<RefCell<Vec<Value>>>;

/// Represents a runtime value in the interpreter.
///
/// This enum models every value a program can produce: the primitive
/// constants, shared lists, the object-oriented values and the `Absent`
/// marker.
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    Str(String),
    /// A boolean value (`true` or `false`).
    /// Produced only by the comparison operators.
    Bool(bool),
    /// An ordered list, shared by reference.
    List(ListRef),
    /// A class descriptor; calling it creates an instance.
    Class(Rc<Class>),
    /// An instance of a user-defined class.
    Instance(Rc<Instance>),
    /// A method read through an instance.
    BoundMethod(Rc<BoundMethod>),
    /// A user-defined function.
    Function(Rc<Function>),
    /// No such binding or attribute.
    ///
    /// Unknown names, unknown attributes and ignored calls all evaluate to
    /// `Absent` instead of failing.
    Absent,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(RefCell::new(v)))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Number(n) => (*n).into(),
            LiteralValue::Str(s) => s.as_str().into(),
        }
    }
}

impl Value {
    /// Applies the language's truthiness rule.
    ///
    /// `0`, `NaN`, the empty string, `false` and `Absent` are falsy. Every
    /// other value, including an empty list, is truthy.
    ///
    /// # Example
    /// ```
    /// use aurora::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(!Value::Absent.is_truthy());
    /// assert!(Value::from(Vec::new()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Absent => false,
            Self::List(_)
            | Self::Class(_)
            | Self::Instance(_)
            | Self::BoundMethod(_)
            | Self::Function(_) => true,
        }
    }

    /// A short name for the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::List(_) => "list",
            Self::Class(_) => "class",
            Self::Instance(_) => "instance",
            Self::BoundMethod(_) => "bound method",
            Self::Function(_) => "function",
            Self::Absent => "null",
        }
    }

    /// Returns `true` if the value is [`Value::Absent`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Writes the display form, printing `[...]` for a list that contains
    /// itself.
    fn write_display(&self,
                     f: &mut fmt::Formatter<'_>,
                     open_lists: &mut Vec<*const RefCell<Vec<Self>>>)
                     -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::List(list) => {
                let ptr = Rc::as_ptr(list);
                if open_lists.contains(&ptr) {
                    return write!(f, "[...]");
                }
                open_lists.push(ptr);

                write!(f, "[")?;
                for (index, value) in list.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    value.write_display(f, open_lists)?;
                }
                write!(f, "]")?;

                open_lists.pop();
                Ok(())
            },
            Self::Class(class) => write!(f, "<class {}>", class.name),
            Self::Instance(instance) => write!(f, "<{} Instance>", instance.class.name),
            Self::BoundMethod(bound) => {
                write!(f,
                       "<bound method {}.{}>",
                       bound.receiver.class.name, bound.method.name)
            },
            Self::Function(function) => write!(f, "<function {}>", function.def.name),
            Self::Absent => write!(f, "null"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_display(f, &mut Vec::new())
    }
}

/// Equality as observed by the `==` operator.
///
/// Numbers, strings and booleans compare by value (so `NaN` is unequal to
/// itself). Lists, classes, instances and functions compare by identity. Two
/// bound methods are equal when they pair the same receiver with the same
/// method. `Absent` equals only `Absent`, and values of different types are
/// never equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::List(a), Self::List(b)) => Rc::ptr_eq(a, b),
            (Self::Class(a), Self::Class(b)) => Rc::ptr_eq(a, b),
            (Self::Instance(a), Self::Instance(b)) => Rc::ptr_eq(a, b),
            (Self::BoundMethod(a), Self::BoundMethod(b)) => {
                Rc::ptr_eq(&a.receiver, &b.receiver) && Rc::ptr_eq(&a.method, &b.method)
            },
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Absent, Self::Absent) => true,
            _ => false,
        }
    }
}
