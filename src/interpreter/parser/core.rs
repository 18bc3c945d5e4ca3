use std::iter::Peekable;

use log::debug;

use crate::{
    ast::{Expr, Position, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_or, block::parse_block, statement::parse_statement, unary::parse_assignment,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// A program is a list of statements. It may also be wrapped in a single
/// pair of braces, the historical form of a program file. No tokens may
/// follow the closing brace.
///
/// Grammar: `program := "{" statement* "}" | statement*`
///
/// # Parameters
/// - `tokens`: All tokens of the source, with their positions.
///
/// # Returns
/// The parsed [`Program`].
///
/// # Errors
/// Returns the first `ParseError` encountered. Parsing does not recover.
///
/// # Example
/// ```
/// use juicy::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let mut diagnostics = Vec::new();
/// let (tokens, _) = tokenize("{ x := 1; print(x); }", &mut diagnostics).unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse_program(tokens: &[(Token, Position)]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();

    let statements = if let Some((Token::LBrace, position)) = iter.peek() {
        let position = *position;
        iter.next();
        parse_block(&mut iter, position)?
    } else {
        let mut statements = Vec::new();
        while iter.peek().is_some() {
            statements.push(parse_statement(&mut iter)?);
        }
        statements
    };

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedToken { found:    token.to_string(),
                                                 expected: "end of input".to_string(),
                                                 position: *position, });
    }

    debug!("Parsed {} top-level statements", statements.len());
    Ok(Program { statements })
}

/// Parses a full expression, boolean or not.
///
/// This is the entry point used wherever the grammar accepts any expression:
/// statement expressions, `print` arguments, conditions, builtin arguments
/// and parenthesized groups. It starts at the lowest-precedence level, `or`.
///
/// Grammar: `test := or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_test<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_or(tokens)
}

/// Parses a plain expression: an assignment or anything tighter.
///
/// Comparison operands, indices and slice bounds use this level, so
/// `x := 1 < 2` compares the result of the assignment with `2`.
///
/// Grammar: `expression := assignment`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_assignment(tokens)
}
