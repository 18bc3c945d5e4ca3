use crate::ast::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a token the grammar does not allow here.
    UnexpectedToken {
        /// The token encountered, as written in the source.
        found:    String,
        /// What the parser was looking for.
        expected: String,
        /// Where the token starts.
        position: Position,
    },
    /// Reached the end of input while a construct was still open.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
    },
    /// `and` or `or` was applied to an operand that is not a boolean
    /// expression.
    ExpectedBooleanExpression {
        /// Where the offending operand starts.
        position: Position,
    },
    /// A string literal was still open at the end of input.
    UnterminatedString {
        /// Location of the opening quote.
        position: Position,
    },
    /// An integer literal does not fit in 64 bits.
    LiteralTooLarge {
        /// The literal as written.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
}

impl ParseError {
    /// The error text without location information.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnexpectedToken { found, expected, .. } => {
                format!("Syntax error: unexpected '{found}', expected {expected}")
            },
            Self::UnexpectedEndOfInput { expected } => {
                format!("Syntax error: unexpected end of input, expected {expected}")
            },
            Self::ExpectedBooleanExpression { .. } => {
                "Syntax error: 'and' and 'or' only accept boolean expressions".to_string()
            },
            Self::UnterminatedString { .. } => "Unterminated string literal".to_string(),
            Self::LiteralTooLarge { literal, .. } => {
                format!("Integer literal '{literal}' is too large")
            },
        }
    }

    /// Where the error occurred, if it is tied to a token.
    ///
    /// End-of-input errors have no token and return `None`.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::ExpectedBooleanExpression { position }
            | Self::UnterminatedString { position }
            | Self::LiteralTooLarge { position, .. } => Some(*position),
            Self::UnexpectedEndOfInput { .. } => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some(position) => write!(f, "{} in {position}", self.message()),
            None => write!(f, "{}", self.message()),
        }
    }
}

impl std::error::Error for ParseError {}
