use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::scalar::type_error,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates an ordering comparison of the form `Value <Operator> Value`.
    ///
    /// Two numbers compare numerically and two strings compare
    /// lexicographically by Unicode scalar value. Comparisons involving `NaN`
    /// are `false`.
    ///
    /// # Parameters
    /// - `op`: `Less` or `Greater`.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Errors
    /// Returns a type error for any other combination of operands.
    ///
    /// # Example
    /// ```
    /// use aurora::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Number(3.0);
    /// let b = Value::Number(5.0);
    ///
    /// let result = Context::eval_ordering(BinaryOperator::Less, &a, &b, 1);
    ///
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_ordering(op: BinaryOperator,
                         left: &Value,
                         right: &Value,
                         line: usize)
                         -> EvalResult<Value> {
        let ordering = match (left, right) {
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            _ => return Err(type_error(op, left, right, line)),
        };

        Ok(Value::Bool(match op {
                           BinaryOperator::Less => ordering.is_some_and(|o| o.is_lt()),
                           BinaryOperator::Greater => ordering.is_some_and(|o| o.is_gt()),
                           _ => return Err(type_error(op, left, right, line)),
                       }))
    }
}
