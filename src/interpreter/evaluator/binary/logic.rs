use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, value::Value},
};

impl Context {
    /// Evaluates a logical operation between two values.
    ///
    /// This is the non-short-circuit path: by the time it runs, the left
    /// operand has already failed to decide the result on its own. Both
    /// operands are judged by truthiness (non-zero integers and `True`
    /// are truthy) and the result is always a boolean.
    ///
    /// # Parameters
    /// - `op`: `And` or `Or`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The boolean result.
    ///
    /// # Example
    /// ```
    /// use lambra::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let result = Context::eval_logic(BinaryOperator::And,
    ///                                  &Value::Bool(true),
    ///                                  &Value::Integer(2));
    /// assert_eq!(result, Value::Bool(true));
    /// ```
    #[must_use]
    pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        use BinaryOperator::{And, Or};

        Value::Bool(match op {
                        And => left.is_truthy() && right.is_truthy(),
                        Or => left.is_truthy() || right.is_truthy(),
                        _ => unreachable!("eval_logic used with a non logical operator"),
                    })
    }
}
