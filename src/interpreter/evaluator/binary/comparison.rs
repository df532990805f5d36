use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Equality (`==`, `!=`) applies to two integers or two booleans;
    /// ordering (`<`, `>`, `<=`, `>=`) applies to two integers only.
    /// Closure operands, and operands of differing kinds, are not
    /// comparable and fail with [`RuntimeError::TypeMismatch`].
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use lambra::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less,
    ///                                       &Value::Integer(3),
    ///                                       &Value::Integer(5),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let mismatch = || RuntimeError::TypeMismatch { details: format!("cannot compare a {} and a {} with '{op}'",
                                                                        left.kind_name(),
                                                                        right.kind_name()),
                                                       line };

        let result = match op {
            Equal | NotEqual => {
                let equal = match (left, right) {
                    (Value::Integer(a), Value::Integer(b)) => a == b,
                    (Value::Bool(a), Value::Bool(b)) => a == b,
                    _ => return Err(mismatch()),
                };
                if matches!(op, Equal) { equal } else { !equal }
            },

            Less | Greater | LessEqual | GreaterEqual => {
                let (a, b) = match (left, right) {
                    (Value::Integer(a), Value::Integer(b)) => (a, b),
                    _ => return Err(mismatch()),
                };
                match op {
                    Less => a < b,
                    Greater => a > b,
                    LessEqual => a <= b,
                    GreaterEqual => a >= b,
                    _ => unreachable!(),
                }
            },

            _ => unreachable!("eval_comparison used with a non comparison operator"),
        };

        Ok(Value::Bool(result))
    }
}
