use crate::{
    ast::Expr,
    config::Config,
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Remaining stack below which evaluation continues on a freshly allocated
/// segment.
pub(crate) const STACK_RED_ZONE: usize = 128 * 1024;
/// Size of each segment allocated when the red zone is reached.
pub(crate) const STACK_GROW_SIZE: usize = 4 * 1024 * 1024;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The outcome of executing a statement or a block.
///
/// A `return` produces [`Flow::Returning`]. Every block and loop hands it
/// upwards unchanged until a function call unwraps it.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Execution finished normally with this value.
    Plain(Value),
    /// A `return` was executed with this value.
    Returning(Value),
}

impl Flow {
    /// The carried value, regardless of how execution ended.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Plain(value) | Self::Returning(value) => value,
        }
    }
}

/// Stores the runtime evaluation context.
///
/// This struct holds the state of one program run: its configuration, the
/// output sink that receives every `say` line, and the current call depth.
/// Variables live in [`Environment`]s, which are passed to every evaluation
/// method explicitly.
///
/// ## Usage
///
/// A `Context` is created for a single run and dropped afterwards.
///
/// ```
/// use aurora::{
///     ast::{Expr, LiteralValue},
///     config::Config,
///     interpreter::{environment::Environment, evaluator::core::Context, value::core::Value},
/// };
///
/// let mut lines = Vec::new();
/// let mut sink = |line: &str| lines.push(line.to_string());
/// let mut context = Context::new(Config::default(), &mut sink);
///
/// let expr = Expr::Literal { value: LiteralValue::Number(4.0),
///                            line:  1, };
/// let value = context.eval(&expr, &Environment::new()).unwrap();
///
/// assert_eq!(value, Value::Number(4.0));
/// ```
pub struct Context<'a> {
    pub(crate) config: Config,
    output:            &'a mut dyn FnMut(&str),
    pub(crate) depth:  usize,
}

impl<'a> Context<'a> {
    /// Creates a context that sends output lines to `output`.
    #[must_use]
    pub fn new(config: Config, output: &'a mut dyn FnMut(&str)) -> Self {
        Self { config,
               output,
               depth: 0 }
    }

    /// Sends one line to the output sink.
    pub(crate) fn emit(&mut self, line: &str) {
        (self.output)(line);
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands and
    /// arguments are always evaluated left to right.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: The scope the expression is evaluated in.
    ///
    /// # Returns
    /// The value of the expression. Unknown names and attributes produce
    /// [`Value::Absent`] rather than an error.
    ///
    /// Nesting depth is bounded by the call-depth limit, not by the host
    /// stack: the stack grows on demand while evaluating.
    pub fn eval(&mut self, expr: &Expr, env: &Environment) -> EvalResult<Value> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || self.eval_inner(expr, env))
    }

    fn eval_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::ListLiteral { elements, .. } => self.eval_list_literal(elements, env),
            Expr::Variable { name, line } => Ok(Self::eval_variable(name, *line, env)),
            Expr::Assign { name, value, .. } => {
                let value = self.eval(value, env)?;
                env.assign(name, value.clone());
                Ok(value)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::GetAttr { target, name, .. } => {
                let target = self.eval(target, env)?;
                Ok(Self::get_attr(&target, name))
            },
            Expr::SetAttr { target,
                            name,
                            value,
                            line, } => {
                let target = self.eval(target, env)?;
                let value = self.eval(value, env)?;
                Ok(Self::set_attr(&target, name, value, *line))
            },
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line, env),
        }
    }
}
