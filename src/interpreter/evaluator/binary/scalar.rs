use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates an arithmetic operation.
    ///
    /// Numbers follow IEEE 754 semantics, so `/` is always floating-point
    /// division and dividing by zero gives an infinity or `NaN`. `+` on two
    /// strings concatenates them. There is no other implicit conversion.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul` or `Div`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// Returns [`RuntimeError::TypeError`] for any other operand combination.
    ///
    /// # Example
    /// ```
    /// use aurora::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let joined = Context::eval_scalar_op(BinaryOperator::Add,
    ///                                      &Value::from("ab"),
    ///                                      &Value::from("cd"),
    ///                                      1).unwrap();
    /// assert_eq!(joined, Value::from("abcd"));
    ///
    /// let mixed = Context::eval_scalar_op(BinaryOperator::Add,
    ///                                     &Value::from("n = "),
    ///                                     &Value::Number(1.0),
    ///                                     1);
    /// assert!(mixed.is_err());
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        match (left, right, op) {
            (Value::Number(a), Value::Number(b), Add) => Ok(Value::Number(a + b)),
            (Value::Number(a), Value::Number(b), Sub) => Ok(Value::Number(a - b)),
            (Value::Number(a), Value::Number(b), Mul) => Ok(Value::Number(a * b)),
            (Value::Number(a), Value::Number(b), Div) => Ok(Value::Number(a / b)),
            (Value::Str(a), Value::Str(b), Add) => Ok(Value::Str(format!("{a}{b}"))),
            _ => Err(type_error(op, left, right, line)),
        }
    }
}

/// Builds the error for an operator applied to unsupported operand types.
pub(in crate::interpreter::evaluator) fn type_error(op: BinaryOperator,
                                                    left: &Value,
                                                    right: &Value,
                                                    line: usize)
                                                    -> RuntimeError {
    RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                               left.type_name(),
                                               right.type_name()),
                              line }
}
