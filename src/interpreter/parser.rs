/// Program-level parsing.
///
/// Contains the parse-result alias and the statement loop driving a whole
/// program.
pub mod core;

/// Expression parsing.
///
/// Implements the single flat, strictly left-associative binary operator
/// level and the token-to-operator mapping.
pub mod expression;

/// Statement parsing.
///
/// Dispatches top-level statements: function definitions, `if` expressions,
/// lambda expressions, and plain expressions.
pub mod statement;

/// Term parsing.
///
/// Parses the atoms of the expression grammar: negation, calls, lambdas,
/// literals, identifiers, and groupings.
pub mod term;

/// Utility functions for the parser.
///
/// Provides `expect` and the shared identifier/argument/parameter list
/// parsers.
pub mod utils;
