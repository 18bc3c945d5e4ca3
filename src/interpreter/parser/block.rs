use std::iter::Peekable;

use crate::{
    ast::{Position, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Parses the statements of a block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until the
/// matching closing `}` token is consumed.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `position`: Location of the opening brace, used when the block is never
///   closed.
///
/// # Returns
/// The statements of the block, in source order.
///
/// # Errors
/// Returns `UnexpectedEndOfInput` if the input ends before the closing brace,
/// and propagates errors from the statements.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: format!("'}}' to close the block opened in {position}") });
            },
        }
    }

    Ok(statements)
}

/// Parses a block that must start at the current token.
///
/// Used after `if (...)`, `else` and `while (...)`, where the opening brace
/// has not been consumed yet.
pub fn parse_braced_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    match tokens.next() {
        Some((Token::LBrace, position)) => parse_block(tokens, *position),
        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { found:    token.to_string(),
                                              expected: "'{'".to_string(),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { expected: "'{'".to_string() }),
    }
}
