use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        frame::Frame,
        value::{CurriedClosure, NamedClosure, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context owns the top-level scope frame shared by all statements of a
/// run. Each function or lambda invocation allocates its own child frame;
/// the context itself carries no other state.
///
/// ## Usage
///
/// `Context` is created once and reused for evaluating statements. A
/// statement that fails at runtime leaves the top-level frame intact, so
/// subsequent independent statements still evaluate, in batch and
/// interactive modes alike.
pub struct Context {
    globals: Frame,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with an empty top-level frame.
    #[must_use]
    pub fn new() -> Self {
        Self { globals: Frame::new(), }
    }

    /// The top-level frame shared by every statement of this context.
    #[must_use]
    pub const fn globals(&self) -> &Frame {
        &self.globals
    }

    /// Evaluates one top-level statement against the shared top-level
    /// frame.
    ///
    /// # Returns
    /// `Some(Value)` for statements that produce a value, or `None` for
    /// void results (a function definition, or an untaken `if` without
    /// `else`).
    ///
    /// # Errors
    /// Propagates any `RuntimeError` raised while evaluating the
    /// statement. The top-level frame is never corrupted by a failure.
    pub fn eval_statement(&self, statement: &Expr) -> EvalResult<Option<Value>> {
        self.eval(statement, &self.globals)
    }

    /// Evaluates an expression in the given frame.
    ///
    /// This is the single recursive entry point of the tree-walking
    /// evaluator, dispatched exhaustively over the closed set of AST
    /// variants:
    /// - literals return their held value unchanged;
    /// - identifiers resolve through the frame chain;
    /// - binary operations evaluate left first and short-circuit `&&`/`||`;
    /// - a function definition binds a [`NamedClosure`] into the *current*
    ///   frame before any call, so the body can refer to its own name;
    /// - a lambda expression captures the current frame in a
    ///   [`CurriedClosure`] without touching any frame;
    /// - applications resolve the callee and apply it (all at once for
    ///   named closures, one argument at a time for curried ones);
    /// - `if` picks a branch by truthiness, yielding void when no branch
    ///   applies.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `frame`: The lexical frame to resolve names in.
    ///
    /// # Returns
    /// `Some(Value)` for expressions that produce a value, or `None` for
    /// void constructs.
    ///
    /// # Errors
    /// Any error aborts the whole expression's evaluation; no partial value
    /// is produced.
    pub fn eval(&self, expr: &Expr, frame: &Frame) -> EvalResult<Option<Value>> {
        match expr {
            Expr::IntegerLiteral { value, .. } => Ok(Some(Value::Integer(*value))),

            Expr::BooleanLiteral { value, .. } => Ok(Some(Value::Bool(*value))),

            Expr::Identifier { name, line } => frame.lookup(name, *line).map(Some),

            Expr::UnaryOperation { op, operand, .. } => {
                let value = self.eval_child(operand, frame)?;
                Ok(Some(Self::eval_unary(*op, &value)))
            },

            Expr::BinaryOperation { left,
                                    op,
                                    right,
                                    line, } => {
                self.eval_binary_operation(left, *op, right, frame, *line)
                    .map(Some)
            },

            Expr::FunctionDefinition { name, params, body, .. } => {
                let closure = NamedClosure { params: params.clone(),
                                             body:   (**body).clone(),
                                             frame:  frame.clone(), };
                // The binding lands in the very frame the closure captured,
                // which is what makes self-recursion resolve.
                frame.define(name, Value::Function(Rc::new(closure)));
                Ok(None)
            },

            Expr::LambdaExpression { param, body, .. } => {
                let closure = CurriedClosure { param: param.clone(),
                                               body:  (**body).clone(),
                                               frame: frame.clone(), };
                Ok(Some(Value::Lambda(Rc::new(closure))))
            },

            Expr::FunctionApplication { callee, args, line } => {
                self.eval_application(callee, args, frame, *line)
            },

            Expr::IfExpression { condition,
                                 consequence,
                                 alternative,
                                 .. } => {
                let condition = self.eval_child(condition, frame)?;
                if condition.is_truthy() {
                    self.eval(consequence, frame)
                } else if let Some(alternative) = alternative {
                    self.eval(alternative, frame)
                } else {
                    Ok(None)
                }
            },
        }
    }

    /// Evaluates a binary operation, short-circuiting the logical
    /// operators.
    ///
    /// The left operand is always evaluated first. For `||`, a truthy left
    /// operand yields `True` without evaluating the right operand; for
    /// `&&`, a falsy left operand yields `False` the same way. All other
    /// operators evaluate both operands and dispatch to
    /// [`Context::eval_binary`].
    fn eval_binary_operation(&self,
                             left: &Expr,
                             op: BinaryOperator,
                             right: &Expr,
                             frame: &Frame,
                             line: usize)
                             -> EvalResult<Value> {
        let left = self.eval_child(left, frame)?;

        match op {
            BinaryOperator::Or if left.is_truthy() => return Ok(Value::Bool(true)),
            BinaryOperator::And if !left.is_truthy() => return Ok(Value::Bool(false)),
            _ => {},
        }

        let right = self.eval_child(right, frame)?;
        Self::eval_binary(op, &left, &right, line)
    }

    /// Evaluates a subexpression and requires it to produce a value.
    ///
    /// Operand, condition, argument and callee positions all need an actual
    /// value; a void result (from an untaken `if` without `else`, or a
    /// function application whose body was void) reports
    /// [`RuntimeError::MissingValue`] at the subexpression's own line.
    pub(crate) fn eval_child(&self, expr: &Expr, frame: &Frame) -> EvalResult<Value> {
        self.eval(expr, frame)?
            .ok_or(RuntimeError::MissingValue { line: expr.line_number(), })
    }
}
