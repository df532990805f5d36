use std::rc::Rc;

use crate::{ast::Expr, interpreter::frame::Frame};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear as evaluation
/// results: integers, booleans, and the two structurally distinct closure
/// forms. A [`NamedClosure`] takes all its arguments at once; a
/// [`CurriedClosure`] takes exactly one argument per application.
#[derive(Debug, Clone)]
pub enum Value {
    /// An integer value (64 bit signed).
    Integer(i64),
    /// A boolean value (`True` or `False`).
    /// Produced by boolean literals, comparison operators, and logical
    /// operations.
    Bool(bool),
    /// A named function closure, created by a `Defun` definition.
    Function(Rc<NamedClosure>),
    /// A curried lambda closure, created by a `Lambd` expression.
    Lambda(Rc<CurriedClosure>),
}

/// The closure produced by a named function definition.
///
/// Captures the frame the definition was evaluated in; since the function
/// name is bound into that same frame before any call, the body can resolve
/// the name recursively.
pub struct NamedClosure {
    /// Parameter names, in declaration order.
    pub params: Vec<String>,
    /// The body evaluated on application.
    pub body:   Expr,
    /// The captured defining frame.
    pub frame:  Frame,
}

/// The closure produced by a lambda expression.
///
/// Accepts exactly one argument per application; multi-step application is
/// built from nested lambda expressions.
pub struct CurriedClosure {
    /// The sole parameter name.
    pub param: String,
    /// The body evaluated on application.
    pub body:  Expr,
    /// The captured defining frame.
    pub frame: Frame,
}

// The captured frame may transitively contain the closure itself, so the
// Debug impls must not descend into it.
impl std::fmt::Debug for NamedClosure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamedClosure")
         .field("params", &self.params)
         .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for CurriedClosure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurriedClosure")
         .field("param", &self.param)
         .finish_non_exhaustive()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Lambda(a), Self::Lambda(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Judges the value's truthiness.
    ///
    /// Non-zero integers and `True` are truthy; `0` and `False` are falsy;
    /// closures are truthy. Used for `if` conditions, logical operators and
    /// `!`.
    ///
    /// # Example
    /// ```
    /// use lambra::interpreter::value::Value;
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Bool(b) => *b,
            Self::Function(_) | Self::Lambda(_) => true,
        }
    }

    /// Returns a short human-readable name for the value's kind, used in
    /// type mismatch messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Bool(_) => "boolean",
            Self::Function(_) => "function",
            Self::Lambda(_) => "lambda",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Function(closure) => {
                write!(f, "<function ({})>", closure.params.join(", "))
            },
            Self::Lambda(closure) => write!(f, "<lambda {}>", closure.param),
        }
    }
}
