use std::iter::Peekable;

use crate::{
    ast::Position,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token, which must equal `expected`.
///
/// # Returns
/// The position of the consumed token.
///
/// # Errors
/// Returns `UnexpectedToken` for any other token and `UnexpectedEndOfInput`
/// when the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<Position>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((token, position)) if token == expected => Ok(*position),
        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { found:    token.to_string(),
                                              expected: format!("'{expected}'"),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { expected: format!("'{expected}'") }),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by `print` arguments and any other list form. It
/// repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { found:    tok.to_string(),
                                                         expected: format!("',' or '{closing}'"),
                                                         position: *position, });
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected:
                                                                  format!("',' or '{closing}'"), });
            },
        }
    }
    Ok(items)
}
