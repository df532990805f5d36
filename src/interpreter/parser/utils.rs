use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Pos, Token},
        parser::{core::ParseResult, expression::parse_expression},
    },
};

/// Consumes the next token, requiring it to equal `expected`.
///
/// On success the consumed token's position is returned so callers can
/// attach it to the node being built.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the token to check.
/// - `expected`: The exact token required.
/// - `describe`: Human-readable description used in the error message.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token differs from `expected`,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    describe: &str)
                                                    -> ParseResult<Pos>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    match tokens.next() {
        Some((tok, pos)) if tok == expected => Ok(*pos),
        Some((tok, pos)) => {
            Err(ParseError::UnexpectedToken { expected: describe.to_string(),
                                              found:    format!("{tok:?}"),
                                              line:     pos.line,
                                              column:   pos.column, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, pos)) => {
            Err(ParseError::UnexpectedToken { expected: "an identifier".to_string(),
                                              found:    format!("{tok:?}"),
                                              line:     pos.line,
                                              column:   pos.column, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a call argument list, stopping before the closing `)`.
///
/// Arguments are full expressions separated by commas; a trailing comma is
/// tolerated. The closing parenthesis is left for the caller to consume.
///
/// Grammar: `args := (expression (',' expression)*)?`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an argument fails to parse,
/// - something other than `,` or `)` follows an argument,
/// - the stream ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_args<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let mut args = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RParen, _)) => break,
            Some(_) => {},
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }

        args.push(parse_expression(tokens)?);

        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((Token::RParen, _)) => break,
            Some((tok, pos)) => {
                return Err(ParseError::UnexpectedToken { expected: "',' or ')'".to_string(),
                                                         found:    format!("{tok:?}"),
                                                         line:     pos.line,
                                                         column:   pos.column, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }

    Ok(args)
}

/// Parses a function definition parameter list.
///
/// Every parameter must be followed by a comma, including the last one:
/// `(n,)` declares one parameter, `(a, b,)` two, and `()` none. A bare
/// identifier before `)` is a syntax error, matching the language's
/// trailing-comma rule.
///
/// Grammar: `params := '(' (ID ',')* ')'`
///
/// # Errors
/// Returns a `ParseError` if the parentheses or commas do not follow the
/// form above.
pub(in crate::interpreter::parser) fn parse_params<'a, I>(tokens: &mut Peekable<I>)
                                                          -> ParseResult<Vec<String>>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    expect(tokens, &Token::LParen, "'('")?;

    let mut params = Vec::new();
    while let Some((Token::Identifier(_), _)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();
        if !matches!(lookahead.peek(), Some((Token::Comma, _))) {
            break;
        }

        params.push(parse_identifier(tokens)?);
        tokens.next(); // the comma
    }

    expect(tokens, &Token::RParen, "')'")?;
    Ok(params)
}
