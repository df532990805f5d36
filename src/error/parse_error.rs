#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer found a character (or malformed literal) it cannot scan.
    UnexpectedCharacter {
        /// The offending source slice.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// A description of what the parser expected.
        expected: String,
        /// The token actually encountered.
        found:    String,
        /// The source line of the offending token.
        line:     usize,
        /// The column of the offending token, counted from the most recent
        /// line start.
        column:   usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, line } => {
                write!(f, "Error on line {line}: unexpected character {found:?}.")
            },

            Self::UnexpectedToken { expected,
                                    found,
                                    line,
                                    column, } => {
                write!(f,
                       "Syntax error at line {line}, column {column}: expected {expected}, found {found}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
