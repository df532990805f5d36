/// Arithmetic evaluation: checked `+ - *`, floor `/` and floor `%`.
pub mod arith;

/// Comparison evaluation: equality and ordering.
pub mod comparison;

/// Operator-class dispatch for binary operations.
pub mod core;

/// Logical evaluation on truthiness (non-short-circuit path).
pub mod logic;
