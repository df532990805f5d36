/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// source code. Parse errors include unscannable characters, unexpected
/// tokens, and premature end of input. Any parse error aborts the whole
/// parse; no partial syntax tree is returned.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include undefined identifiers, arity mismatches, type mismatches,
/// division by zero, and integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
