use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, ComparisonLink, ComparisonOperator, Expr, LogicalOperator, Position},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            unary::{parse_not, parse_unary},
        },
    },
};

/// Parses `or` expressions.
///
/// Handles the left-associative connective `or`, the lowest precedence level
/// of the grammar. Both operands must be boolean expressions.
///
/// The rule is: `or := and ("or" and)*`
///
/// # Parameters
/// - `tokens`: Token stream with positions.
///
/// # Returns
/// An `Expr::Logical` tree, or the single operand if no `or` follows.
pub fn parse_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_and(tokens)?;
    while let Some((Token::Or, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let right = parse_and(tokens)?;
        left = Expr::Logical { left: Box::new(require_boolean(left)?),
                               op: LogicalOperator::Or,
                               right: Box::new(require_boolean(right)?),
                               position };
    }
    Ok(left)
}

/// Parses `and` expressions.
///
/// `and` binds tighter than `or`, so `a or b and c` is `a or (b and c)`.
///
/// The rule is: `and := not ("and" not)*`
pub fn parse_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_not(tokens)?;
    while let Some((Token::And, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let right = parse_not(tokens)?;
        left = Expr::Logical { left: Box::new(require_boolean(left)?),
                               op: LogicalOperator::And,
                               right: Box::new(require_boolean(right)?),
                               position };
    }
    Ok(left)
}

/// Rejects operands of `and`/`or` that are not boolean expressions.
fn require_boolean(expr: Expr) -> ParseResult<Expr> {
    if expr.is_boolean() {
        Ok(expr)
    } else {
        Err(ParseError::ExpectedBooleanExpression { position: expr.position() })
    }
}

/// Parses a chain of relational operators.
///
/// Handles `>`, `<`, `=`, `<>`, `<=` and `>=`. Any number of them may be
/// chained: `a < b <= c` keeps every operand and operator in one
/// `Expr::Comparison` node, so the evaluator can walk the chain left to right.
///
/// The rule is: `comparison := expression (relop expression)*`
///
/// # Parameters
/// - `tokens`: Token stream with positions.
///
/// # Returns
/// An `Expr::Comparison` if at least one operator was found, otherwise the
/// plain operand.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let first = parse_expression(tokens)?;
    let mut links = Vec::new();

    while let Some((token, position)) = tokens.peek()
          && let Some(op) = token_to_comparison_operator(token)
    {
        let position = *position;
        tokens.next(); // consume operator

        let right = parse_expression(tokens)?;
        links.push(ComparisonLink { op,
                                    right,
                                    position });
    }

    if links.is_empty() {
        Ok(first)
    } else {
        Ok(Expr::Comparison { first: Box::new(first),
                              links })
    }
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let position = *position;
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := power (("*" | "/") power)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_power(tokens)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let position = *position;
            tokens.next();
            let right = parse_power(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// `^` is left-associative and binds looser than unary minus, so `2 ^ 3 ^ 2`
/// is `(2 ^ 3) ^ 2` and `-2 ^ 2` is `(-2) ^ 2`.
///
/// The rule is: `power := unary ("^" unary)*`
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_unary(tokens)?;
    while let Some((Token::Caret, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let right = parse_unary(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op: BinaryOperator::Pow,
                                right: Box::new(right),
                                position };
    }
    Ok(left)
}

/// Maps a token to its corresponding arithmetic operator.
///
/// # Example
/// ```
/// use juicy::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::Less), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Maps a token to its corresponding relational operator.
///
/// # Example
/// ```
/// use juicy::{
///     ast::ComparisonOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_comparison_operator},
/// };
///
/// assert_eq!(token_to_comparison_operator(&Token::NotEqual),
///            Some(ComparisonOperator::NotEqual));
/// assert_eq!(token_to_comparison_operator(&Token::Assign), None);
/// ```
#[must_use]
pub const fn token_to_comparison_operator(token: &Token) -> Option<ComparisonOperator> {
    match token {
        Token::Greater => Some(ComparisonOperator::Greater),
        Token::Less => Some(ComparisonOperator::Less),
        Token::Equal => Some(ComparisonOperator::Equal),
        Token::NotEqual => Some(ComparisonOperator::NotEqual),
        Token::LessEqual => Some(ComparisonOperator::LessEqual),
        Token::GreaterEqual => Some(ComparisonOperator::GreaterEqual),
        _ => None,
    }
}
