//! # lambra
//!
//! lambra is a small, expression-oriented functional language interpreter
//! written in Rust. It supports named function definitions, single-argument
//! curried lambda expressions with lexical closures, conditionals, and a
//! deliberately flat (precedence-free) set of arithmetic, boolean, and
//! comparison operators.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::{ParseError, RuntimeError},
    interpreter::{evaluator::core::Context, parser::core::parse_program, value::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent
/// the syntactic structure of source code as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of expression node variants.
/// - Attaches source lines to AST nodes for error reporting.
/// - Defines the closed operator enums matched exhaustively at evaluation.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including source positions.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers (and columns for syntax errors) for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Loads a grammar-description file into a diagnostic rule table.
///
/// The table is printed on request for inspection; evaluation never
/// consults it.
pub mod grammar;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, scope frames,
/// value representations and error handling to provide a complete runtime
/// for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// The outcome of one top-level statement: a value, a void result, or a
/// runtime error. Runtime failures are per-statement; they never abort the
/// rest of a program.
pub type StatementOutcome = Result<Option<Value>, RuntimeError>;

/// Tokenizes and parses a complete source string into a program.
///
/// # Errors
/// Returns a [`ParseError`] on the first lexical or syntax error; the whole
/// parse aborts and no partial program is returned.
///
/// # Examples
/// ```
/// use lambra::parse_source;
///
/// let program = parse_source("1 + 2").unwrap();
/// assert_eq!(program.len(), 1);
///
/// // '=' is not part of the language.
/// assert!(parse_source("x = 1").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Vec<Expr>, ParseError> {
    let tokens = interpreter::lexer::tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    parse_program(&mut iter)
}

/// Evaluates a parsed program, one statement at a time, against the
/// context's top-level frame.
///
/// Each statement yields a [`StatementOutcome`]. A statement that fails at
/// runtime is recorded as an error outcome and evaluation proceeds with the
/// next statement; the shared top-level frame survives the failure.
#[must_use]
pub fn run_program(program: &[Expr], context: &Context) -> Vec<StatementOutcome> {
    program.iter()
           .map(|statement| context.eval_statement(statement))
           .collect()
}

/// Parses and evaluates a source string in one call.
///
/// This is the main embedding entry point, used by both the batch runner
/// and the REPL (which calls it once per input line against a persistent
/// context).
///
/// # Errors
/// Returns a [`ParseError`] when the source does not parse; runtime errors
/// are reported per statement in the returned outcomes instead.
///
/// # Examples
/// ```
/// use lambra::{interpreter::{evaluator::core::Context, value::Value}, run_source};
///
/// let context = Context::new();
/// let outcomes = run_source("1 + 2", &context).unwrap();
/// assert_eq!(outcomes, vec![Ok(Some(Value::Integer(3)))]);
/// ```
pub fn run_source(source: &str, context: &Context) -> Result<Vec<StatementOutcome>, ParseError> {
    Ok(run_program(&parse_source(source)?, context))
}
