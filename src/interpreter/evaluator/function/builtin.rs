use crate::{interpreter::value::core::Value, util::num::usize_to_f64_checked};

/// Appends `args[1]` to the list `args[0]` in place.
///
/// Every alias of the list observes the new element. Always returns `Absent`;
/// a first argument that is not a list is left untouched.
///
/// # Example
/// ```
/// use aurora::interpreter::{evaluator::function::builtin::push, value::core::Value};
///
/// let list = Value::from(vec![Value::Number(1.0)]);
/// let alias = list.clone();
///
/// assert_eq!(push(&[list, Value::Number(2.0)], 1), Value::Absent);
/// assert_eq!(alias.to_string(), "[1, 2]");
/// ```
#[must_use]
pub fn push(args: &[Value], line: usize) -> Value {
    match args {
        [Value::List(list), value, ..] => list.borrow_mut().push(value.clone()),
        [other, ..] => log::debug!("push on a {} at line {line} ignored", other.type_name()),
        [] => {},
    }
    Value::Absent
}

/// Removes and returns the last element of the list `args[0]`.
///
/// Returns `Absent` for an empty list or a non-list argument.
///
/// # Example
/// ```
/// use aurora::interpreter::{evaluator::function::builtin::pop, value::core::Value};
///
/// let list = Value::from(vec![Value::Number(1.0), Value::Number(2.0)]);
///
/// assert_eq!(pop(&[list.clone()], 1), Value::Number(2.0));
/// assert_eq!(list.to_string(), "[1]");
/// ```
#[must_use]
pub fn pop(args: &[Value], line: usize) -> Value {
    match args.first() {
        Some(Value::List(list)) => list.borrow_mut().pop().unwrap_or(Value::Absent),
        Some(other) => {
            log::debug!("pop on a {} at line {line} ignored", other.type_name());
            Value::Absent
        },
        None => Value::Absent,
    }
}

/// Returns the number of elements of a list, or of characters of a string.
///
/// Any other argument yields `Absent`.
#[must_use]
pub fn len(args: &[Value], line: usize) -> Value {
    let count = match args.first() {
        Some(Value::List(list)) => list.borrow().len(),
        Some(Value::Str(s)) => s.chars().count(),
        Some(other) => {
            log::debug!("len of a {} at line {line} ignored", other.type_name());
            return Value::Absent;
        },
        None => return Value::Absent,
    };

    usize_to_f64_checked(count, ()).map_or(Value::Absent, Value::Number)
}
