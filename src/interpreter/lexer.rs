use std::fmt;

use log::trace;
use logos::{Lexer, Logos, Skip};

use crate::{
    ast::Position,
    error::{Diagnostic, DiagnosticSink, ParseError},
};

/// Errors the lexer can attach to a slice of input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// No rule matches the character. Reported and skipped.
    #[default]
    IllegalCharacter,
    /// A `"` without a closing quote before the end of input.
    UnterminatedString,
    /// An integer literal that does not fit in `i64`.
    IntegerTooLarge,
}

/// Represents a lexical token in the source input.
///
/// Whitespace, newlines and comments are consumed by callbacks and never
/// surface as tokens.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras, error = LexError)]
pub enum Token {
    /// Float literal such as `3.14`, `2.` or `1.5e-3`. Tried before
    /// [`Token::Integer`] by virtue of being the longer match.
    #[regex(r"[0-9]+\.[0-9]*(e-?[0-9]+)?", parse_float)]
    Float(f64),
    /// Integer literal such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal with escapes resolved.
    #[regex(r#""([^"\\]|\\(.|\n))*""#, parse_string, allow_greedy = true)]
    #[regex(r#""([^"\\]|\\(.|\n))*"#, unterminated_string, allow_greedy = true)]
    Str(String),
    /// `true` or `false`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `input`
    #[token("input")]
    Input,
    /// `print`
    #[token("print")]
    Print,
    /// `len`
    #[token("len")]
    Len,
    /// `to_str`
    #[token("to_str")]
    ToStr,
    /// `err`
    #[token("err")]
    Err,
    /// `to_int`
    #[token("to_int")]
    ToInt,
    /// `to_float`
    #[token("to_float")]
    ToFloat,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `bool`, explicit truthiness conversion.
    #[token("bool")]
    BoolCast,
    /// Any identifier that is not a reserved word.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Symbol(String),
    /// `:=`
    #[token(":=")]
    Assign,
    /// `<>`
    #[token("<>")]
    NotEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equal,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `/* ... */`, possibly nested.
    #[token("/*", skip_comment)]
    Comment,
    /// Line breaks only move the line counter.
    #[token("\n", |lex| {
        let end = lex.span().end;
        lex.extras.new_line(end);
        Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(x) => write!(f, "{x}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "\"{}\"", s.escape_default()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Symbol(name) => write!(f, "{name}"),
            Self::If => write!(f, "if"),
            Self::Else => write!(f, "else"),
            Self::While => write!(f, "while"),
            Self::Input => write!(f, "input"),
            Self::Print => write!(f, "print"),
            Self::Len => write!(f, "len"),
            Self::ToStr => write!(f, "to_str"),
            Self::Err => write!(f, "err"),
            Self::ToInt => write!(f, "to_int"),
            Self::ToFloat => write!(f, "to_float"),
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Not => write!(f, "not"),
            Self::BoolCast => write!(f, "bool"),
            Self::Assign => write!(f, ":="),
            Self::NotEqual => write!(f, "<>"),
            Self::LessEqual => write!(f, "<="),
            Self::GreaterEqual => write!(f, ">="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::Equal => write!(f, "="),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Colon => write!(f, ":"),
            Self::Semicolon => write!(f, ";"),
            Self::Comma => write!(f, ","),
            Self::Comment => write!(f, "/*"),
            Self::NewLine => write!(f, "\\n"),
            Self::Ignored => write!(f, " "),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset where it starts, so that
/// token positions can be reported as line and column.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:         usize,
    /// Byte offset of the first character of the current line.
    pub line_start:   usize,
    /// Set when a block comment is still open at the end of input.
    pub open_comment: Option<Position>,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:         1,
               line_start:   0,
               open_comment: None, }
    }
}

impl LexerExtras {
    /// Records a line break whose following line starts at `next_line_start`.
    pub fn new_line(&mut self, next_line_start: usize) {
        self.line += 1;
        self.line_start = next_line_start;
    }

    /// Records every line break inside `text`, which starts at byte `offset`
    /// of the source.
    pub fn skip_lines(&mut self, text: &str, offset: usize) {
        for (index, _) in text.match_indices('\n') {
            self.new_line(offset + index + 1);
        }
    }

    /// Position of the byte `offset`, which must lie on the current line.
    #[must_use]
    pub fn position(&self, source: &str, offset: usize) -> Position {
        let column = source.get(self.line_start..offset)
                           .map_or(1, |prefix| prefix.chars().count() + 1);
        Position::new(self.line, column)
    }
}

/// Outcome of scanning the body of a block comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CommentScan {
    /// Bytes consumed after the opening `/*`, including the final `*/`.
    consumed:  usize,
    /// Nesting depth left over; zero when the comment was closed.
    depth:     usize,
    /// Number of line breaks inside the comment.
    newlines:  usize,
    /// Offset just past the last line break, relative to the body start.
    last_line: Option<usize>,
}

/// Runs the comment state machine over the text following an opening `/*`.
///
/// Comment mode starts at depth one. Every `/*` goes one level deeper, every
/// `*/` one level up, and depth zero hands control back to normal lexing.
/// All other characters are discarded, but line breaks are counted.
fn scan_comment(body: &str) -> CommentScan {
    let mut scan = CommentScan { consumed:  body.len(),
                                 depth:     1,
                                 newlines:  0,
                                 last_line: None, };
    let mut chars = body.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        match c {
            '\n' => {
                scan.newlines += 1;
                scan.last_line = Some(index + 1);
            },
            '/' if chars.next_if(|&(_, next)| next == '*').is_some() => scan.depth += 1,
            '*' if chars.next_if(|&(_, next)| next == '/').is_some() => {
                scan.depth -= 1;
                if scan.depth == 0 {
                    scan.consumed = index + 2;
                    break;
                }
            },
            _ => {},
        }
    }

    scan
}

/// Skips a possibly nested block comment starting at the current `/*`.
fn skip_comment(lex: &mut Lexer<Token>) -> Skip {
    let opened_at = lex.span().start;
    let body_start = lex.span().end;
    let scan = scan_comment(lex.remainder());
    let opening = lex.extras.position(lex.source(), opened_at);

    lex.extras.line += scan.newlines;
    if let Some(offset) = scan.last_line {
        lex.extras.line_start = body_start + offset;
    }
    if scan.depth > 0 {
        lex.extras.open_comment = Some(opening);
    }
    lex.bump(scan.consumed);
    Skip
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Ok(i64)`: The parsed value.
/// - `Err(LexError::IntegerTooLarge)`: If the digits do not fit in `i64`.
fn parse_integer(lex: &Lexer<Token>) -> Result<i64, LexError> {
    lex.slice()
       .parse()
       .map_err(|_| LexError::IntegerTooLarge)
}

/// Strips the quotes off a string literal and resolves its escapes.
fn parse_string(lex: &Lexer<Token>) -> String {
    let slice = lex.slice();
    unescape(&slice[1..slice.len() - 1])
}

/// Rejects a string literal that runs into the end of input.
fn unterminated_string(_: &Lexer<Token>) -> Result<String, LexError> {
    Err(LexError::UnterminatedString)
}

/// Resolves the escape sequences of a string literal body.
///
/// `\n` and `\t` become a line feed and a tab. Any other escaped character,
/// including `"` and `\`, is kept as is and the backslash is dropped.
///
/// # Example
/// ```
/// use juicy::interpreter::lexer::unescape;
///
/// assert_eq!(unescape(r#"a\tb\n"#), "a\tb\n");
/// assert_eq!(unescape(r#"say \"hi\" \\ \q"#), "say \"hi\" \\ q");
/// ```
#[must_use]
pub fn unescape(body: &str) -> String {
    let mut text = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => text.push('\n'),
            Some('t') => text.push('\t'),
            Some(other) => text.push(other),
            None => {},
        }
    }

    text
}

/// Token stream with positions, plus the position just past the last
/// character of the source.
pub type Tokens = (Vec<(Token, Position)>, Position);

/// Splits `source` into positioned tokens.
///
/// Illegal characters are reported to `sink` and skipped one at a time. A
/// block comment left open at the end of input is reported as a warning.
///
/// # Errors
/// Returns a `ParseError` for an unterminated string literal or an integer
/// literal that does not fit in 64 bits. Both abort the run.
///
/// # Example
/// ```
/// use juicy::interpreter::lexer::{Token, tokenize};
///
/// let mut diagnostics = Vec::new();
/// let (tokens, _) = tokenize("x := 2.5; /* a /* b */ c */ ?", &mut diagnostics).unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Symbol("x".to_string()),
///                 Token::Assign,
///                 Token::Float(2.5),
///                 Token::Semicolon]);
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(diagnostics[0].message, "Illegal character '?'");
/// ```
pub fn tokenize(source: &str, sink: &mut dyn DiagnosticSink) -> Result<Tokens, ParseError> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let start = lexer.span().start;
        let position = lexer.extras.position(source, start);

        match token {
            Ok(tok) => {
                // Only string literals can span lines.
                if let Token::Str(_) = tok {
                    lexer.extras.skip_lines(&source[lexer.span()], start);
                }
                tokens.push((tok, position));
            },
            Err(LexError::IllegalCharacter) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                sink.report(Diagnostic::error(format!("Illegal character '{character}'"),
                                              position));
            },
            Err(LexError::UnterminatedString) => {
                return Err(ParseError::UnterminatedString { position });
            },
            Err(LexError::IntegerTooLarge) => {
                return Err(ParseError::LiteralTooLarge { literal: lexer.slice().to_string(),
                                                         position });
            },
        }
    }

    if let Some(opening) = lexer.extras.open_comment {
        sink.report(Diagnostic::warning("Comment is not closed before the end of input",
                                        opening));
    }

    let end = lexer.extras.position(source, source.len());
    trace!("Lexed {} tokens over {} lines", tokens.len(), end.line);

    Ok((tokens, end))
}
