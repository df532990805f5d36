/// An abstract syntax tree (AST) node representing one construct of the
/// language.
///
/// `Expr` covers every parseable form: literals, identifiers, unary and
/// binary operations, conditionals, lambda expressions, function definitions
/// and function applications. Top-level statements are plain `Expr` values;
/// the language has no separate statement forms.
///
/// Nodes are immutable once built. The parser produces them and the
/// evaluator only reads them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A named function definition, e.g.
    /// `Defun {name: square, arguments: (x,)} x * x`.
    FunctionDefinition {
        /// The function name bound in the defining frame.
        name:   String,
        /// The parameter names, in declaration order.
        params: Vec<String>,
        /// The body evaluated on application.
        body:   Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// A single-parameter lambda expression, e.g. `(Lambd x. x + 1)`.
    LambdaExpression {
        /// The sole parameter name.
        param: String,
        /// The body evaluated on application.
        body:  Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Application of a function to argument expressions.
    FunctionApplication {
        /// What is being applied: a bare name or a callee expression.
        callee: Callee,
        /// The argument expressions, evaluated left to right.
        args:   Vec<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// Conditional expression with an optional alternative.
    IfExpression {
        /// The condition, judged by truthiness.
        condition:   Box<Self>,
        /// Evaluated when the condition is truthy.
        consequence: Box<Self>,
        /// Evaluated when the condition is falsy, if present.
        alternative: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A binary operation (arithmetic, boolean, or comparison).
    BinaryOperation {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation; only logical negation exists.
    UnaryOperation {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal: `True` or `False`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use lambra::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::FunctionDefinition { line, .. }
            | Self::LambdaExpression { line, .. }
            | Self::FunctionApplication { line, .. }
            | Self::IfExpression { line, .. }
            | Self::BinaryOperation { line, .. }
            | Self::UnaryOperation { line, .. }
            | Self::IntegerLiteral { line, .. }
            | Self::BooleanLiteral { line, .. }
            | Self::Identifier { line, .. } => *line,
        }
    }
}

/// The callee position of an [`Expr::FunctionApplication`].
///
/// A call written as `name(args)` stores the bare name and is resolved by
/// frame lookup at application time. A call written as
/// `(Lambd x. body)(args)` stores the callee expression, which must itself
/// evaluate to a closure.
#[derive(Debug, Clone, PartialEq)]
pub enum Callee {
    /// A bare function name, resolved through the frame chain.
    Name(String),
    /// An arbitrary callee expression yielding a closure.
    Expression(Box<Expr>),
}

/// Represents a binary operator.
///
/// All binary operators bind at one flat precedence level, strictly left to
/// right; there is no precedence hierarchy between arithmetic, boolean and
/// comparison operators. Parenthesization is the only way to override
/// left-to-right grouping.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Floor division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            And => "&&",
            Or => "||",
            Equal => "==",
            NotEqual => "!=",
            Greater => ">",
            Less => "<",
            GreaterEqual => ">=",
            LessEqual => "<=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
        }
    }
}
