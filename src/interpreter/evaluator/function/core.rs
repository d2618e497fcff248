use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDef},
    config::ScopeMode,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{Context, EvalResult, Flow},
            function::builtin,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line number.
/// It cannot fail; a call it cannot make sense of yields `Absent`.
type BuiltinFn = fn(&[Value], usize) -> Value;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `AtLeast(n)` means the builtin needs `n` arguments; extra ones are
///   ignored.
#[derive(Clone, Copy)]
enum Arity {
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "push" => { arity: Arity::AtLeast(2), func: builtin::push },
    "pop"  => { arity: Arity::AtLeast(1), func: builtin::pop },
    "len"  => { arity: Arity::AtLeast(1), func: builtin::len },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::AtLeast(m) => n >= m,
        }
    }
}

/// Calls the built-in named `name`, if there is one.
///
/// Unknown names and calls with too few arguments yield `Absent` and have no
/// side effect.
///
/// # Example
/// ```
/// use aurora::interpreter::{evaluator::function::core::call_builtin, value::core::Value};
///
/// let list = Value::from(vec![Value::Number(1.0)]);
///
/// assert_eq!(call_builtin("len", &[list], 1), Value::Number(1.0));
/// assert_eq!(call_builtin("shout", &[], 1), Value::Absent);
/// ```
#[must_use]
pub fn call_builtin(name: &str, args: &[Value], line: usize) -> Value {
    let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) else {
        log::debug!("call to unknown function '{name}' on line {line} ignored");
        return Value::Absent;
    };

    if !builtin.arity.check(args.len()) {
        log::debug!("'{name}' called with {} arguments on line {line}, ignored", args.len());
        return Value::Absent;
    }

    (builtin.func)(args, line)
}

impl Context<'_> {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments from left to right.
    /// What happens next depends on the callee value:
    /// - a class creates an instance (see [`Context::instantiate`]),
    /// - a bound method is invoked with its receiver prepended,
    /// - a function is invoked with the arguments only,
    /// - `Absent` from a bare name falls back to the built-in table.
    ///
    /// Any other callee yields `Absent`.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            line: usize,
                            env: &Environment)
                            -> EvalResult<Value> {
        let target = self.eval(callee, env)?;
        let args = self.eval_arguments(arguments, env)?;

        match target {
            Value::Class(class) => self.instantiate(&class, args, line, env),
            Value::BoundMethod(bound) => {
                let mut full_args = Vec::with_capacity(args.len() + 1);
                full_args.push(Value::Instance(Rc::clone(&bound.receiver)));
                full_args.extend(args);

                self.invoke(&bound.method, &bound.receiver.class.closure, full_args, line, env)
            },
            Value::Function(function) => {
                self.invoke(&function.def, &function.closure, args, line, env)
            },
            Value::Absent => match callee {
                Expr::Variable { name, .. } => Ok(call_builtin(name, &args, line)),
                _ => Ok(Value::Absent),
            },
            other => {
                log::debug!("ignoring call to a {} on line {line}", other.type_name());
                Ok(Value::Absent)
            },
        }
    }

    /// Invokes a user-defined function or method.
    ///
    /// A new scope is created for the call. Its parent is `closure` under
    /// [`ScopeMode::Lexical`] and `caller` under [`ScopeMode::Dynamic`].
    /// Parameters are bound in order; missing arguments bind `Absent` and
    /// extra arguments are ignored.
    ///
    /// # Parameters
    /// - `def`: The function to run.
    /// - `closure`: The scope the function was defined in.
    /// - `args`: Evaluated arguments, including any receiver.
    /// - `line`: Line of the call, for error reporting.
    /// - `caller`: The scope the call is evaluated in.
    ///
    /// # Returns
    /// The value of the `return` that ended the call, or `Absent` if the body
    /// finished without one.
    ///
    /// # Errors
    /// Returns [`RuntimeError::CallDepthExceeded`] if the call would nest
    /// deeper than the configured limit, and propagates any error raised by
    /// the body.
    pub(crate) fn invoke(&mut self,
                         def: &FunctionDef,
                         closure: &Environment,
                         args: Vec<Value>,
                         line: usize,
                         caller: &Environment)
                         -> EvalResult<Value> {
        if self.depth >= self.config.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { limit: self.config.max_call_depth,
                                                         line });
        }

        let parent = match self.config.scope_mode {
            ScopeMode::Lexical => closure,
            ScopeMode::Dynamic => caller,
        };
        let scope = parent.child();

        let mut args = args.into_iter();
        for param in &def.params {
            scope.define(param, args.next().unwrap_or(Value::Absent));
        }

        log::trace!("calling '{}' from line {line} at depth {}", def.name, self.depth + 1);

        self.depth += 1;
        let result = self.eval_block(&def.body, &scope);
        self.depth -= 1;

        Ok(match result? {
            Flow::Returning(value) => value,
            Flow::Plain(_) => Value::Absent,
        })
    }
}
