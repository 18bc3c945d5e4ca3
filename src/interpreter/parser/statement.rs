use std::iter::Peekable;

use crate::{
    ast::{Expr, Position, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_braced_block,
            core::{ParseResult, parse_test},
            utils::{expect, parse_comma_separated},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a `print(...)` call,
/// - an `if` statement with optional `else` (or `else if`),
/// - a `while` loop,
/// - an expression used as a statement, terminated by `;`.
///
/// The statement's position is taken from its first token.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Position)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    match tokens.peek() {
        Some((Token::Print, position)) => {
            let position = *position;
            tokens.next();
            parse_print(tokens, position)
        },
        Some((Token::If, position)) => {
            let position = *position;
            tokens.next();
            parse_if(tokens, position)
        },
        Some((Token::While, position)) => {
            let position = *position;
            tokens.next();
            parse_while(tokens, position)
        },
        Some((_, position)) => {
            let position = *position;
            let expr = parse_test(tokens)?;
            expect(tokens, &Token::Semicolon)?;
            Ok(Statement::Expression { expr, position })
        },
        None => Err(ParseError::UnexpectedEndOfInput { expected: "a statement".to_string() }),
    }
}

/// Parses the rest of a `print` statement.
///
/// Syntax: `print ( arg ("," arg)* ) ;`
///
/// Each argument is a full expression, boolean expressions included.
fn parse_print<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let arguments = parse_comma_separated(tokens, parse_test, &Token::RParen)?;
    expect(tokens, &Token::Semicolon)?;

    Ok(Statement::Print { arguments, position })
}

/// Parses the rest of an `if` statement.
///
/// Syntax:
/// ```text
///     if ( condition ) { ... }
///     else if ( condition ) { ... }
///     else { ... }
/// ```
/// An `else if` is stored as an `else` block holding a single nested `if`.
///
/// # Errors
/// - `UnexpectedToken` if the parentheses or braces are missing.
/// - Propagates errors from the condition and the blocks.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let condition = parse_condition(tokens)?;
    let then_branch = parse_braced_block(tokens)?;

    let else_branch = match tokens.peek() {
        Some((Token::Else, _)) => {
            tokens.next();

            match tokens.peek() {
                Some((Token::If, nested)) => {
                    let nested = *nested;
                    tokens.next();
                    Some(vec![parse_if(tokens, nested)?])
                },
                _ => Some(parse_braced_block(tokens)?),
            }
        },
        _ => None,
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       position })
}

/// Parses the rest of a `while` statement.
///
/// Syntax: `while ( condition ) { ... }`
fn parse_while<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let condition = parse_condition(tokens)?;
    let body = parse_braced_block(tokens)?;

    Ok(Statement::While { condition,
                          body,
                          position })
}

/// Parses a parenthesized condition.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let condition = parse_test(tokens)?;
    expect(tokens, &Token::RParen)?;
    Ok(condition)
}
