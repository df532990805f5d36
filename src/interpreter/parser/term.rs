use std::iter::Peekable;

use crate::{
    ast::{Callee, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Pos, Token},
        parser::{
            core::ParseResult,
            expression::parse_expression,
            utils::{expect, parse_args, parse_identifier},
        },
    },
};

/// Parses a single term of an expression.
///
/// Terms form the base of the flat expression grammar and include:
/// - logical negation (`!` applied to the *entire* remaining expression),
/// - function calls (`name(args)`),
/// - lambda expressions, optionally immediately applied,
/// - integer and boolean literals,
/// - identifiers,
/// - parenthesized expressions.
///
/// A call is recognized by an identifier immediately followed by `(`; a
/// lambda by `(` immediately followed by `Lambd`. Both use one extra token
/// of lookahead on a cloned iterator.
///
/// Grammar:
/// ```text
///     term := '!' expression | call | lambda_expr
///           | INTEGER | BOOL | ID | '(' expression ')'
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a term.
///
/// # Returns
/// The parsed term [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let second_is_lparen = next_token_is(tokens, &Token::LParen);
    let second_is_lambd = next_token_is(tokens, &Token::Lambd);
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Bang, pos) => {
            let line = pos.line;
            tokens.next();
            // `!` negates everything to its right: `!a && b` is
            // `!(a && b)`.
            let operand = parse_expression(tokens)?;
            Ok(Expr::UnaryOperation { op: UnaryOperator::Not,
                                      operand: Box::new(operand),
                                      line })
        },

        (Token::Identifier(_), _) if second_is_lparen => {
            parse_function_call(tokens)
        },

        (Token::LParen, _) if second_is_lambd => {
            parse_lambda_expression(tokens)
        },

        (Token::Integer(value), pos) => {
            let expr = Expr::IntegerLiteral { value: *value,
                                              line:  pos.line, };
            tokens.next();
            Ok(expr)
        },

        (Token::Bool(value), pos) => {
            let expr = Expr::BooleanLiteral { value: *value,
                                              line:  pos.line, };
            tokens.next();
            Ok(expr)
        },

        (Token::Identifier(name), pos) => {
            let expr = Expr::Identifier { name: name.clone(),
                                          line: pos.line, };
            tokens.next();
            Ok(expr)
        },

        (Token::LParen, _) => parse_grouping(tokens),

        (tok, pos) => {
            Err(ParseError::UnexpectedToken { expected: "an expression term".to_string(),
                                              found:    format!("{tok:?}"),
                                              line:     pos.line,
                                              column:   pos.column, })
        },
    }
}

/// Peeks one token past the current one on a cloned iterator.
fn next_token_is<'a, I>(tokens: &Peekable<I>, expected: &Token) -> bool
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();
    matches!(lookahead.next(), Some((tok, _)) if tok == expected)
}

/// Parses a named function call: `name(arg1, arg2, ...)`.
///
/// The callee is stored as a bare name and resolved by frame lookup at
/// application time.
///
/// # Errors
/// Returns a `ParseError` if the argument list is malformed or the closing
/// `)` is missing.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(n), pos)) => (n.clone(), pos.line),
        _ => unreachable!("caller checked for an identifier"),
    };

    expect(tokens, &Token::LParen, "'('")?;
    let args = parse_args(tokens)?;
    expect(tokens, &Token::RParen, "')'")?;

    Ok(Expr::FunctionApplication { callee: Callee::Name(name),
                                   args,
                                   line })
}

/// Parses a lambda expression, optionally immediately applied.
///
/// Expected form: `( Lambd ID . expression )`, optionally followed by an
/// argument list that applies the lambda on the spot:
///
/// ```text
///     (Lambd x. x + 1)
///     (Lambd x. (Lambd y. (y + x)))(5, 3)
/// ```
/// The lambda takes exactly one parameter; multi-step application is built
/// from nesting. When an argument list follows, the result is a
/// [`Expr::FunctionApplication`] whose callee is the lambda expression.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the `Lambd` keyword, parameter, or `.` is missing,
/// - the body fails to parse,
/// - a parenthesis is unbalanced.
pub(in crate::interpreter::parser) fn parse_lambda_expression<'a, I>(tokens: &mut Peekable<I>)
                                                                     -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let open = expect(tokens, &Token::LParen, "'('")?;
    expect(tokens, &Token::Lambd, "'Lambd'")?;
    let param = parse_identifier(tokens)?;
    expect(tokens, &Token::Dot, "'.'")?;
    let body = parse_expression(tokens)?;
    expect(tokens, &Token::RParen, "')'")?;

    let lambda = Expr::LambdaExpression { param,
                                          body: Box::new(body),
                                          line: open.line };

    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let args = parse_args(tokens)?;
        expect(tokens, &Token::RParen, "')'")?;
        return Ok(Expr::FunctionApplication { callee: Callee::Expression(Box::new(lambda)),
                                              args,
                                              line: open.line });
    }

    Ok(lambda)
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`. The inner expression is returned as-is
/// (no wrapper node).
///
/// # Errors
/// Returns a `ParseError` when the closing `)` is missing.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    expect(tokens, &Token::LParen, "'('")?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::RParen, "')'")?;
    Ok(expr)
}
