use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::{Pos, Token},
        parser::{
            core::ParseResult,
            expression::parse_expression,
            term::parse_lambda_expression,
            utils::{expect, parse_identifier, parse_params},
        },
    },
};

/// Parses a single top-level statement.
///
/// A statement may be one of:
/// - a function definition (starting with `Defun`),
/// - an `if` expression,
/// - a lambda expression (a `(` immediately followed by `Lambd`),
/// - any other expression.
///
/// Dispatch uses one token of lookahead, plus a second token on a cloned
/// iterator to tell a parenthesized lambda apart from a parenthesized
/// sub-expression.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Pos)` pairs.
///
/// # Returns
/// A parsed [`Expr`] statement node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let lambda = matches!(tokens.peek(), Some((Token::LParen, _))) && lambda_follows(tokens);
    match tokens.peek() {
        Some((Token::Defun, _)) => parse_function_definition(tokens),
        Some((Token::If, _)) => parse_if_expression(tokens),
        Some((Token::LParen, _)) if lambda => parse_lambda_expression(tokens),
        _ => parse_expression(tokens),
    }
}

/// Checks whether the token after the current `(` is `Lambd`.
fn lambda_follows<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();
    matches!(lookahead.next(), Some((Token::Lambd, _)))
}

/// Parses a named function definition.
///
/// Expected form:
///
/// ```text
///     Defun {name: <ID>, arguments: (<ID>, <ID>, ...)} <body>
/// ```
/// where `<body>` is an `if` expression or a plain expression. Every
/// parameter in the argument list is followed by a comma, including the
/// last.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `Defun` keyword.
///
/// # Returns
/// An [`Expr::FunctionDefinition`] node.
///
/// # Errors
/// Returns a `ParseError` if any piece of the header (`{`, `name`, `:`,
/// the function name, `,`, `arguments`, `:`, the parameter list, `}`) is
/// missing or malformed, or if the body fails to parse.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let pos = expect(tokens, &Token::Defun, "'Defun'")?;
    expect(tokens, &Token::LBrace, "'{'")?;
    expect(tokens, &Token::Name, "'name'")?;
    expect(tokens, &Token::Colon, "':'")?;
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::Comma, "','")?;
    expect(tokens, &Token::Arguments, "'arguments'")?;
    expect(tokens, &Token::Colon, "':'")?;
    let params = parse_params(tokens)?;
    expect(tokens, &Token::RBrace, "'}'")?;

    let body = match tokens.peek() {
        Some((Token::If, _)) => parse_if_expression(tokens)?,
        _ => parse_expression(tokens)?,
    };

    Ok(Expr::FunctionDefinition { name,
                                  params,
                                  body: Box::new(body),
                                  line: pos.line })
}

/// Parses an `if` expression with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if <condition> { <expression> }
///     if <condition> { <expression> } else { <expression> }
/// ```
/// The condition is a full expression (commonly parenthesized); each branch
/// body is a single expression. Without an `else`, a falsy condition makes
/// the whole expression void.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `if` keyword.
///
/// # Returns
/// An [`Expr::IfExpression`] node.
///
/// # Errors
/// Returns a `ParseError` if braces are missing or a branch fails to
/// parse.
pub(in crate::interpreter::parser) fn parse_if_expression<'a, I>(tokens: &mut Peekable<I>)
                                                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let pos = expect(tokens, &Token::If, "'if'")?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::LBrace, "'{'")?;
    let consequence = parse_expression(tokens)?;
    expect(tokens, &Token::RBrace, "'}'")?;

    let alternative = match tokens.peek() {
        Some((Token::Else, _)) => {
            tokens.next();
            expect(tokens, &Token::LBrace, "'{'")?;
            let alternative = parse_expression(tokens)?;
            expect(tokens, &Token::RBrace, "'}'")?;
            Some(Box::new(alternative))
        },
        _ => None,
    };

    Ok(Expr::IfExpression { condition: Box::new(condition),
                            consequence: Box::new(consequence),
                            alternative,
                            line: pos.line })
}
