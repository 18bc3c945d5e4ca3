use std::iter::Peekable;

use crate::{
    ast::{Builtin, Expr, LiteralValue, Position},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::{parse_additive, parse_comparison},
            core::{ParseResult, parse_expression, parse_test},
            utils::expect,
        },
    },
};

/// Parses the boolean prefix operators `not` and `bool`.
///
/// Both are right-associative and bind looser than comparisons, so
/// `not x < 3` is `not (x < 3)` and `not not a` is `not (not a)`.
///
/// Grammar:
/// ```text
///     not := ("not" | "bool") not
///          | comparison
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An `Expr::Not` or `Expr::Truthy` node, or the comparison-level expression.
pub(crate) fn parse_not<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    match tokens.peek() {
        Some((Token::Not, position)) => {
            let position = *position;
            tokens.next();
            let expr = parse_not(tokens)?;
            Ok(Expr::Not { expr: Box::new(expr),
                           position })
        },
        Some((Token::BoolCast, position)) => {
            let position = *position;
            tokens.next();
            let expr = parse_not(tokens)?;
            Ok(Expr::Truthy { expr: Box::new(expr),
                              position })
        },
        _ => parse_comparison(tokens),
    }
}

/// Parses an assignment, or falls through to arithmetic.
///
/// Assignment is right-associative: `a := b := 1` assigns `1` to both. A
/// two-token lookahead distinguishes `name := ...` from a plain variable
/// reference; no tokens are consumed when it does not match.
///
/// Grammar:
/// ```text
///     assignment := symbol ":=" assignment
///                 | additive
/// ```
pub(crate) fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    if let Some((Token::Symbol(name), _)) = tokens.peek().copied() {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some((Token::Assign, position)) = lookahead.peek().copied() {
            tokens.next();
            tokens.next();

            let value = parse_expression(tokens)?;
            return Ok(Expr::Assign { name: name.clone(),
                                     value: Box::new(value),
                                     position: *position });
        }
    }

    parse_additive(tokens)
}

/// Parses a unary minus expression.
///
/// Unary minus is right-associative, so `--x` is `-(-x)`. If no operator is
/// present, the function delegates to [`parse_primary`] and then applies any
/// postfix operators via [`parse_postfix`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary postfix*
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    if let Some((Token::Minus, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::Negate { expr: Box::new(expr),
                          position })
    } else {
        let primary = parse_primary(tokens)?;
        parse_postfix(tokens, primary)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer, float, string and boolean literals
/// - variables
/// - builtin calls: `len`, `to_str`, `to_int`, `to_float`, `err`, `input`
/// - parenthesized expressions, which may be boolean
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | symbol
///              | builtin "(" arguments ")"
///              | "(" test ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let (token, position) =
        tokens.next()
              .ok_or_else(|| ParseError::UnexpectedEndOfInput { expected:
                                                                    "an expression".to_string(), })?;
    let position = *position;

    let literal = |value: LiteralValue| Ok(Expr::Literal { value, position });

    match token {
        Token::Integer(n) => literal(LiteralValue::Integer(*n)),
        Token::Float(x) => literal(LiteralValue::Float(*x)),
        Token::Str(s) => literal(LiteralValue::Str(s.clone())),
        Token::Bool(b) => literal(LiteralValue::Bool(*b)),
        Token::Symbol(name) => Ok(Expr::Variable { name: name.clone(),
                                                   position }),
        Token::LParen => {
            let expr = parse_test(tokens)?;
            expect(tokens, &Token::RParen)?;
            Ok(expr)
        },
        Token::Len => parse_builtin_call(tokens, Builtin::Len, position),
        Token::ToStr => parse_builtin_call(tokens, Builtin::ToStr, position),
        Token::ToInt => parse_builtin_call(tokens, Builtin::ToInt, position),
        Token::ToFloat => parse_builtin_call(tokens, Builtin::ToFloat, position),
        Token::Err => {
            expect(tokens, &Token::LParen)?;
            expect(tokens, &Token::RParen)?;
            Ok(Expr::ErrorFlag { position })
        },
        Token::Input => parse_input(tokens, position),
        tok => Err(ParseError::UnexpectedToken { found: tok.to_string(),
                                                 expected: "an expression".to_string(),
                                                 position }),
    }
}

/// Parses the parenthesized argument of a one-argument builtin.
///
/// Grammar: `call := builtin "(" test ")"`
fn parse_builtin_call<'a, I>(tokens: &mut Peekable<I>,
                             builtin: Builtin,
                             position: Position)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let argument = parse_test(tokens)?;
    expect(tokens, &Token::RParen)?;

    Ok(Expr::Call { builtin,
                    argument: Box::new(argument),
                    position })
}

/// Parses `input()` or `input(prompt)`.
fn parse_input<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    expect(tokens, &Token::LParen)?;

    let prompt = if let Some((Token::RParen, _)) = tokens.peek() {
        None
    } else {
        Some(Box::new(parse_test(tokens)?))
    };
    expect(tokens, &Token::RParen)?;

    Ok(Expr::Input { prompt, position })
}

/// Parses indexing and slicing applied to an expression.
///
/// Multiple postfix operators may be chained, as in `s[1:][0]`:
///
/// 1. **Indexing** `expr[index]`
/// 2. **Slicing** `expr[start:end]`, where either bound may be omitted.
///
/// Grammar:
/// ```text
///     postfix := "[" expression "]"
///              | "[" expression? ":" expression? "]"
/// ```
/// # Parameters
/// - `tokens`: Token stream positioned after the operand.
/// - `expr`: The already parsed operand.
///
/// # Returns
/// The operand wrapped in `Expr::Index` / `Expr::Slice` nodes.
pub(crate) fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut expr: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    while let Some((Token::LBracket, position)) = tokens.peek() {
        let position = *position;
        tokens.next();

        let start = match tokens.peek() {
            Some((Token::Colon, _)) => None,
            _ => Some(Box::new(parse_expression(tokens)?)),
        };

        expr = match (tokens.next(), start) {
            (Some((Token::RBracket, _)), Some(index)) => Expr::Index { target: Box::new(expr),
                                                                       index,
                                                                       position },
            (Some((Token::Colon, _)), start) => {
                let end = match tokens.peek() {
                    Some((Token::RBracket, _)) => None,
                    _ => Some(Box::new(parse_expression(tokens)?)),
                };
                expect(tokens, &Token::RBracket)?;
                Expr::Slice { target: Box::new(expr),
                              start,
                              end,
                              position }
            },
            (Some((token, found_at)), _) => {
                return Err(ParseError::UnexpectedToken { found:    token.to_string(),
                                                         expected: "']' or ':'".to_string(),
                                                         position: *found_at, });
            },
            (None, _) => {
                return Err(ParseError::UnexpectedEndOfInput { expected: "']' or ':'".to_string() });
            },
        };
    }

    Ok(expr)
}
