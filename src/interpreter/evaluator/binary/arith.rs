use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates an arithmetic operation on two integers.
    ///
    /// Both operands must be integers; anything else is a type mismatch.
    /// `+ - *` are standard checked integer arithmetic. `/` is floor
    /// division (the quotient is rounded toward negative infinity, so
    /// `-7 / 2` is `-4`) and `%` is the matching floor modulo whose result
    /// takes the divisor's sign. A zero divisor fails with
    /// [`RuntimeError::DivisionByZero`]; overflow fails with
    /// [`RuntimeError::Overflow`] instead of wrapping.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul`, `Div`, `Mod`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed integer.
    ///
    /// # Example
    /// ```
    /// use lambra::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let result = Context::eval_arith(BinaryOperator::Div,
    ///                                  &Value::Integer(-7),
    ///                                  &Value::Integer(2),
    ///                                  1);
    /// assert_eq!(result.unwrap(), Value::Integer(-4));
    /// ```
    pub fn eval_arith(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        let (a, b) = match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => (*a, *b),
            _ => {
                return Err(RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to a {} and a {}",
                                                                         left.kind_name(),
                                                                         right.kind_name()),
                                                        line });
            },
        };

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                floor_div(a, b)
            },
            Mod => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                floor_mod(a, b)
            },
            _ => unreachable!("eval_arith used with a non arithmetic operator"),
        };

        result.map(Value::Integer)
              .ok_or(RuntimeError::Overflow { line })
    }
}

/// Floor division: the quotient rounded toward negative infinity.
///
/// Differs from Rust's truncating `/` exactly when the operands have
/// opposite signs and the division is inexact. `None` only for the
/// `i64::MIN / -1` overflow.
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let q = a.checked_div(b)?;
    let r = a.checked_rem(b)?;
    if r != 0 && (r < 0) != (b < 0) {
        Some(q - 1)
    } else {
        Some(q)
    }
}

/// Floor modulo: the remainder matching [`floor_div`], taking the
/// divisor's sign (`-7 % 2 == 1`, `7 % -2 == -1`).
fn floor_mod(a: i64, b: i64) -> Option<i64> {
    let r = a.checked_rem(b)?;
    if r != 0 && (r < 0) != (b < 0) {
        Some(r + b)
    } else {
        Some(r)
    }
}
