use gomi::lexer::{lex, token::Token};

fn positions(source: &str) -> Vec<(String, usize, usize)> {
    lex(source)
        .expect("lexing should succeed")
        .into_iter()
        .map(|t| (t.value, t.line, t.column))
        .collect()
}

fn first(source: &str) -> Token {
    lex(source)
        .expect("lexing should succeed")
        .remove(0)
}

#[test]
fn column_counts_leading_space() {
    let tok = first(" ( ");
    assert_eq!((tok.line, tok.column), (1, 2));
}

#[test]
fn line_counts_newlines() {
    let tok = first("\n\ta\t\n");
    assert_eq!((tok.line, tok.column), (2, 2));

    let tok = first("\n\t\ta");
    assert_eq!((tok.line, tok.column), (2, 3));
}

#[test]
fn positions_across_lines() {
    assert_eq!(
        positions("let x\n  = 'hi'"),
        vec![
            ("let".into(), 1, 1),
            ("x".into(), 1, 5),
            ("=".into(), 2, 3),
            ("hi".into(), 2, 5),
            ("EOF".into(), 2, 9),
        ]
    );
}

#[test]
fn full_width_characters_count_as_one_column() {
    let tok = first("　（");
    assert_eq!(tok.column, 2);

    assert_eq!(
        positions("宣言 x ＝ ”あい” ３．５"),
        vec![
            ("宣言".into(), 1, 1),
            ("x".into(), 1, 4),
            ("＝".into(), 1, 6),
            ("あい".into(), 1, 8),
            ("３．５".into(), 1, 13),
            ("EOF".into(), 1, 16),
        ]
    );
}

#[test]
fn comment_newline_resets_column() {
    let tok = first("# c\nfoo");
    assert_eq!((tok.line, tok.column), (2, 1));

    let tok = first("＃ コメント\n\n  bar");
    assert_eq!((tok.line, tok.column), (3, 3));
}

#[test]
fn carriage_return_then_newline() {
    let tok = first("\r\nx");
    assert_eq!((tok.line, tok.column), (2, 1));
}

#[test]
fn spans_are_byte_offsets() {
    let tokens = lex("宣言 x 'ab'").expect("lexing should succeed");
    assert_eq!((tokens[0].span.start, tokens[0].span.end), (0, 6));
    assert_eq!((tokens[1].span.start, tokens[1].span.end), (7, 8));
    assert_eq!((tokens[2].span.start, tokens[2].span.end), (9, 13));
    assert!(tokens[3].span.is_empty());
}

#[test]
fn error_positions() {
    let err = lex("ab\n  $").expect_err("should fail");
    assert_eq!((err.line, err.column), (2, 3));

    let err = lex("x = 12.").expect_err("should fail");
    assert_eq!((err.line, err.column), (1, 7));
}
