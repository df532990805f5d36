#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A name was not bound in any enclosing frame.
    UndefinedIdentifier {
        /// The name that failed to resolve.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A named function was called with the wrong number of arguments.
    ArityMismatch {
        /// The number of parameters the function declares.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operand or callee had an incompatible kind.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division (or modulo) by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression that must produce a value produced nothing.
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedIdentifier { name, line } => {
                write!(f, "Error on line {line}: Undefined identifier '{name}'.")
            },

            Self::ArityMismatch { expected,
                                  found,
                                  line, } => write!(f,
                                                    "Error on line {line}: Function expected {expected} argument(s) but got {found}."),

            Self::TypeMismatch { details, line } => {
                write!(f, "Error on line {line}: Type mismatch: {details}.")
            },

            Self::DivisionByZero { line } => {
                write!(f, "Error on line {line}: Division by zero is not allowed.")
            },

            Self::MissingValue { line } => write!(f, "Error on line {line}: Value missing."),

            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
