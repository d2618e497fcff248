use crate::{
    ast::Expr,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Looks up a variable by name.
    ///
    /// An unbound name is not an error; it reads as [`Value::Absent`].
    ///
    /// # Example
    /// ```
    /// use aurora::interpreter::{
    ///     environment::Environment, evaluator::core::Context, value::core::Value,
    /// };
    ///
    /// let env = Environment::new();
    /// env.define("x", Value::Number(10.0));
    ///
    /// assert_eq!(Context::eval_variable("x", 1, &env), Value::Number(10.0));
    /// assert_eq!(Context::eval_variable("y", 1, &env), Value::Absent);
    /// ```
    #[must_use]
    pub fn eval_variable(name: &str, line: usize, env: &Environment) -> Value {
        let value = env.get(name);
        if value.is_absent() {
            log::trace!("'{name}' on line {line} is unbound");
        }
        value
    }

    /// Evaluates the elements of a list literal, left to right, into a newly
    /// allocated list.
    pub fn eval_list_literal(&mut self, elements: &[Expr], env: &Environment) -> EvalResult<Value> {
        Ok(Value::from(self.eval_arguments(elements, env)?))
    }

    /// Evaluates a sequence of expressions left to right.
    ///
    /// Used for call arguments and list literal elements. The first error
    /// aborts the sequence.
    pub fn eval_arguments(&mut self, exprs: &[Expr], env: &Environment) -> EvalResult<Vec<Value>> {
        exprs.iter().map(|expr| self.eval(expr, env)).collect()
    }
}
