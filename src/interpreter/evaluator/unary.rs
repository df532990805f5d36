use crate::{
    ast::UnaryOperator,
    interpreter::{evaluator::core::Context, value::Value},
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// The only unary operator is logical NOT, which negates the operand's
    /// truthiness and always yields a boolean. The operator set is a closed
    /// enum, so no "unknown operator" state can reach evaluation.
    ///
    /// # Example
    /// ```
    /// use lambra::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::Bool(false));
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::Integer(3));
    /// assert_eq!(v, Value::Bool(false));
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> Value {
        match op {
            UnaryOperator::Not => Value::Bool(!value.is_truthy()),
        }
    }
}
