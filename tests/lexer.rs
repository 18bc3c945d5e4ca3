use juicy::{
    ast::Position,
    error::{Diagnostic, ParseError, Severity},
    interpreter::lexer::{Token, tokenize},
};

fn lex(src: &str) -> (Vec<(Token, Position)>, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let (tokens, _) =
        tokenize(src, &mut diagnostics).unwrap_or_else(|e| panic!("Lexing {src:?} failed: {e}"));
    (tokens, diagnostics)
}

fn kinds(src: &str) -> Vec<Token> {
    lex(src).0.into_iter().map(|(token, _)| token).collect()
}

fn lex_error(src: &str) -> ParseError {
    let mut diagnostics = Vec::new();
    match tokenize(src, &mut diagnostics) {
        Ok(_) => panic!("Lexing {src:?} succeeded but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn numeric_literals() {
    assert_eq!(kinds("42 6.25 2. 1.5e-3"),
               vec![Token::Integer(42),
                    Token::Float(6.25),
                    Token::Float(2.0),
                    Token::Float(0.0015)]);
}

#[test]
fn float_is_not_split_around_the_dot() {
    assert_eq!(kinds("x[1:2]"),
               vec![Token::Symbol("x".to_string()),
                    Token::LBracket,
                    Token::Integer(1),
                    Token::Colon,
                    Token::Integer(2),
                    Token::RBracket]);
}

#[test]
fn keywords_and_symbols() {
    assert_eq!(kinds("if iffy bool true false_ to_int"),
               vec![Token::If,
                    Token::Symbol("iffy".to_string()),
                    Token::BoolCast,
                    Token::Bool(true),
                    Token::Symbol("false_".to_string()),
                    Token::ToInt]);
}

#[test]
fn operators_prefer_the_longest_match() {
    assert_eq!(kinds("a := b <> c <= d >= e < f > g = h"),
               vec![Token::Symbol("a".to_string()),
                    Token::Assign,
                    Token::Symbol("b".to_string()),
                    Token::NotEqual,
                    Token::Symbol("c".to_string()),
                    Token::LessEqual,
                    Token::Symbol("d".to_string()),
                    Token::GreaterEqual,
                    Token::Symbol("e".to_string()),
                    Token::Less,
                    Token::Symbol("f".to_string()),
                    Token::Greater,
                    Token::Symbol("g".to_string()),
                    Token::Equal,
                    Token::Symbol("h".to_string())]);
}

#[test]
fn string_escapes() {
    assert_eq!(kinds(r#""a\"b\\c\nd\te\q""#),
               vec![Token::Str("a\"b\\c\nd\teq".to_string())]);
}

#[test]
fn positions_are_line_and_character_column() {
    let (tokens, _) = lex("x := 1;\n  \"é\" y");
    let positions: Vec<Position> = tokens.into_iter().map(|(_, position)| position).collect();

    assert_eq!(positions,
               vec![Position::new(1, 1),
                    Position::new(1, 3),
                    Position::new(1, 6),
                    Position::new(1, 7),
                    Position::new(2, 3),
                    Position::new(2, 7)]);
}

#[test]
fn newlines_inside_strings_are_counted() {
    let (tokens, _) = lex("\"one\ntwo\" z");
    assert_eq!(tokens[1], (Token::Symbol("z".to_string()), Position::new(2, 6)));
}

#[test]
fn nested_comments_are_skipped() {
    let (tokens, diagnostics) = lex("/* a /* b */ c */ print");
    assert_eq!(tokens, vec![(Token::Print, Position::new(1, 19))]);
    assert!(diagnostics.is_empty());
}

#[test]
fn newlines_inside_comments_are_counted() {
    let (tokens, _) = lex("/* one\n /* two\n */ */ x");
    assert_eq!(tokens, vec![(Token::Symbol("x".to_string()), Position::new(3, 8))]);
}

#[test]
fn unclosed_comment_warns_at_its_start() {
    let (tokens, diagnostics) = lex("x;\n  /* a /* b */ never closed");
    assert_eq!(tokens.len(), 2);
    assert_eq!(diagnostics,
               vec![Diagnostic::warning("Comment is not closed before the end of input",
                                        Position::new(2, 3))]);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
}

#[test]
fn illegal_characters_are_reported_and_skipped() {
    let (tokens, diagnostics) = lex("a ? b $");
    assert_eq!(tokens.len(), 2);

    let messages: Vec<(String, Position)> =
        diagnostics.into_iter()
                   .map(|d| (d.message, d.position))
                   .collect();
    assert_eq!(messages,
               vec![("Illegal character '?'".to_string(), Position::new(1, 3)),
                    ("Illegal character '$'".to_string(), Position::new(1, 7))]);
}

#[test]
fn unterminated_string_is_fatal() {
    let error = lex_error("x := \"abc");
    assert_eq!(error.message(), "Unterminated string literal");
    assert_eq!(error.position(), Some(Position::new(1, 6)));
}

#[test]
fn oversized_integer_is_fatal() {
    let error = lex_error("99999999999999999999");
    assert!(matches!(error, ParseError::LiteralTooLarge { .. }));
}
