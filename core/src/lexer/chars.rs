//! Character classes shared by the recognizers. Every ASCII spelling has a
//! full-width twin that classifies the same way.

pub const FULL_WIDTH_SPACE: char = '\u{3000}';

pub fn is_skippable(c: char) -> bool {
    matches!(c, ' ' | FULL_WIDTH_SPACE | '\t' | '\r' | '\n')
}

pub fn is_comment_start(c: char) -> bool {
    matches!(c, '#' | '＃')
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || ('０'..='９').contains(&c)
}

/// Decimal point inside a numeric literal.
pub fn is_decimal_point(c: char) -> bool {
    matches!(c, '.' | '．')
}

pub fn is_equals_sign(c: char) -> bool {
    matches!(c, '=' | '＝')
}

pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || is_japanese(c)
}

pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || is_digit(c) || matches!(c, '_' | '＿')
}

fn is_japanese(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{309F}' // hiragana
        | '\u{30A0}'..='\u{30FF}' // katakana, including the prolonged sound mark
        | '\u{4E00}'..='\u{9FFF}' // kanji
    )
}
