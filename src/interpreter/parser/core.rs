use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Pos, Token},
        parser::statement::parse_statement,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// A program is an ordered sequence of top-level statements, parsed until
/// the token stream is exhausted. The first unexpected token aborts the
/// whole parse; no partial syntax tree is returned.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Pos)` pairs.
///
/// # Returns
/// The parsed statements, in source order.
///
/// # Errors
/// Propagates the first [`ParseError`] from any statement.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let mut statements = Vec::new();

    while tokens.peek().is_some() {
        statements.push(parse_statement(tokens)?);
    }

    Ok(statements)
}
