use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two already-evaluated values.
    ///
    /// This function routes the operation to the specialized handler for
    /// its operator class: arithmetic (`+ - * / %`), comparison
    /// (`== != > < >= <=`), or logic (`&& ||`). Short-circuiting has
    /// already happened by the time this is called; the logic handler only
    /// covers the non-short-circuit path.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use lambra::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add,
    ///                                   &Value::Integer(3),
    ///                                   &Value::Integer(4),
    ///                                   1);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_arith(op, left, right, line),

            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => {
                Self::eval_comparison(op, left, right, line)
            },

            And | Or => Ok(Self::eval_logic(op, left, right)),
        }
    }
}
