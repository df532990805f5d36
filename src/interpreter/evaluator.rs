/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, split by
/// operator class: arithmetic, comparisons, and logical operators.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context owning the
/// top-level frame, short-circuit handling, and error propagation.
pub mod core;

/// Function application.
///
/// Handles callee resolution, argument evaluation, named-closure arity
/// checking, and the one-argument-at-a-time curried application fold.
pub mod function;

/// Unary operator evaluation logic.
///
/// Implements logical NOT, the language's only unary operation.
pub mod unary;
