use std::rc::Rc;

use crate::{
    ast::{Callee, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        frame::Frame,
        value::{NamedClosure, Value},
    },
};

impl Context {
    /// Evaluates a function application.
    ///
    /// The callee is resolved first: a bare name by frame lookup, an
    /// arbitrary callee expression (a lambda) by evaluation. All argument
    /// expressions are then evaluated left to right in the caller's frame,
    /// and the resolved value is applied:
    /// - a [`NamedClosure`] takes all arguments at once, with an exact
    ///   arity check;
    /// - a [`CurriedClosure`](crate::interpreter::value::CurriedClosure)
    ///   consumes one argument per application, folded across the argument
    ///   list;
    /// - anything else is a type mismatch.
    ///
    /// # Parameters
    /// - `callee`: The callee position of the application.
    /// - `args`: Argument expressions, unevaluated.
    /// - `frame`: The caller's frame.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The application result; void when a named function's body produced
    /// no value.
    ///
    /// # Errors
    /// - [`RuntimeError::UndefinedIdentifier`] when a bare callee name is
    ///   unbound.
    /// - [`RuntimeError::ArityMismatch`] on a named-function argument count
    ///   mismatch.
    /// - [`RuntimeError::TypeMismatch`] when applying a non-closure value.
    pub(crate) fn eval_application(&self,
                                   callee: &Callee,
                                   args: &[Expr],
                                   frame: &Frame,
                                   line: usize)
                                   -> EvalResult<Option<Value>> {
        let callee = match callee {
            Callee::Name(name) => frame.lookup(name, line)?,
            Callee::Expression(expr) => self.eval_child(expr, frame)?,
        };

        let mut arg_values = Vec::with_capacity(args.len());
        for arg in args {
            arg_values.push(self.eval_child(arg, frame)?);
        }

        match callee {
            Value::Function(closure) => self.apply_named(&closure, arg_values, line),
            Value::Lambda(_) => self.apply_curried(callee, arg_values, line),
            other => {
                Err(RuntimeError::TypeMismatch { details: format!("expected a function or lambda expression, but got a {}",
                                                                  other.kind_name()),
                                                 line })
            },
        }
    }

    /// Applies a named closure to all of its arguments at once.
    ///
    /// The declared parameter count must equal the argument count. A new
    /// child frame of the *captured* frame binds parameters to argument
    /// values, and the body is evaluated there.
    fn apply_named(&self,
                   closure: &NamedClosure,
                   args: Vec<Value>,
                   line: usize)
                   -> EvalResult<Option<Value>> {
        if args.len() != closure.params.len() {
            return Err(RuntimeError::ArityMismatch { expected: closure.params.len(),
                                                     found:    args.len(),
                                                     line });
        }

        let frame = closure.frame.extend(&closure.params, args);
        self.eval(&closure.body, &frame)
    }

    /// Applies a curried closure to its arguments, one at a time.
    ///
    /// Each step extends the closure's captured frame with exactly one
    /// parameter/argument pair and evaluates the body. The fold continues
    /// only while the intermediate result is itself a curried closure;
    /// supplying more arguments than the chain of lambdas can consume is a
    /// type mismatch. With no arguments the closure itself is returned
    /// unapplied.
    fn apply_curried(&self,
                     callee: Value,
                     args: Vec<Value>,
                     line: usize)
                     -> EvalResult<Option<Value>> {
        let mut result = Some(callee);

        for arg in args {
            let closure = match result {
                Some(Value::Lambda(ref closure)) => Rc::clone(closure),
                Some(other) => {
                    return Err(RuntimeError::TypeMismatch { details: format!("expected a lambda expression to apply, but got a {}",
                                                                             other.kind_name()),
                                                            line });
                },
                None => return Err(RuntimeError::MissingValue { line }),
            };

            let frame = closure.frame
                               .extend(std::slice::from_ref(&closure.param), vec![arg]);
            result = self.eval(&closure.body, &frame)?;
        }

        Ok(result)
    }
}
