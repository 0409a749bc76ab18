use gomi::errors::{GomiError, LexError, LexErrorKind};
use gomi::lexer::{Scanner, lex, token::TokenKind};

fn lex_err(source: &str) -> LexError {
    lex(source).expect_err("lexing should fail")
}

#[test]
fn unrecognized_character() {
    let err = lex_err("$");
    assert_eq!(err.kind, LexErrorKind::Unrecognized);
    assert_eq!((err.line, err.column), (1, 1));
    assert!(err.message.contains('$'));
}

#[test]
fn unrecognized_after_valid_tokens() {
    let err = lex_err("a $");
    assert_eq!(err.kind, LexErrorKind::Unrecognized);
    assert_eq!((err.line, err.column), (1, 3));
}

#[test]
fn lone_logical_halves_are_unrecognized() {
    for source in ["|", "&", "a | b", "&|", "｜|", "＆"] {
        assert_eq!(lex_err(source).kind, LexErrorKind::Unrecognized, "source: {source}");
    }
}

#[test]
fn trailing_dot_is_malformed_float() {
    let err = lex_err("1.");
    assert_eq!(err.kind, LexErrorKind::MalformedFloat);
    assert_eq!((err.line, err.column), (1, 2));

    assert_eq!(lex_err("1.a").kind, LexErrorKind::MalformedFloat);
    assert_eq!(lex_err("３．").kind, LexErrorKind::MalformedFloat);
    assert_eq!(lex_err("1. 2").kind, LexErrorKind::MalformedFloat);
}

#[test]
fn unclosed_string_is_unterminated() {
    for source in ["'abc", "'abc\n'", "x = 'abc\\", "'a\\\nb'", "”テスト"] {
        let err = lex_err(source);
        assert_eq!(err.kind, LexErrorKind::UnterminatedString, "source: {source:?}");
    }
}

#[test]
fn unterminated_string_points_at_opening_quote() {
    let err = lex_err("  'abc");
    assert_eq!((err.line, err.column), (1, 3));
    assert_eq!(err.span.offset(), 2);
    assert_eq!(err.span.len(), 4);
}

#[test]
fn end_of_input_is_returned_once() {
    let mut scanner = Scanner::new("");
    let token = scanner.read_token().expect("first read should succeed");
    assert_eq!(token.kind, TokenKind::EndOfInput);
    assert_eq!(token.value, "EOF");

    let err = scanner.read_token().expect_err("second read should fail");
    assert_eq!(err.kind, LexErrorKind::EndOfInput);
}

#[test]
fn end_of_input_after_tokens() {
    let mut scanner = Scanner::new("x ");
    assert_eq!(scanner.read_token().expect("x").kind, TokenKind::Identifier);
    assert_eq!(scanner.read_token().expect("eof").kind, TokenKind::EndOfInput);
    assert_eq!(
        scanner.read_token().expect_err("past eof").kind,
        LexErrorKind::EndOfInput
    );
    assert_eq!(
        scanner.read_token().expect_err("still past eof").kind,
        LexErrorKind::EndOfInput
    );
}

#[test]
fn end_of_input_error_points_at_end_of_source() {
    let mut scanner = Scanner::new("ab\n");
    assert_eq!(scanner.read_token().expect("ab").kind, TokenKind::Identifier);
    let eof = scanner.read_token().expect("eof");
    assert_eq!((eof.line, eof.column), (2, 1));

    let err = scanner.read_token().expect_err("past eof");
    assert_eq!(err.kind, LexErrorKind::EndOfInput);
    assert_eq!((err.line, err.column), (2, 1));
    assert_eq!(err.span.offset(), 3);
}

#[test]
fn error_display_names_kind_and_position() {
    let err = lex_err("\n  $");
    assert_eq!(
        err.to_string(),
        "UnrecognizedError at 2:3: unrecognized token '$'"
    );
}

#[test]
fn tokenize_wraps_lex_error() {
    let err = gomi::tokenize("1.").expect_err("tokenize should fail");
    assert!(matches!(err, GomiError::Lex(e) if e.kind == LexErrorKind::MalformedFloat));
}
