use std::borrow::Cow;

use gomi::{Scanner, TokenKind};
use owo_colors::OwoColorize;

/// Color the line by token kind. Gaps between tokens (whitespace, comments) are
/// copied as-is, and everything after a scan error is left plain.
pub fn highlight_line(line: &str) -> Cow<'_, str> {
    let mut scanner = Scanner::new(line);
    let mut out = String::with_capacity(line.len());
    let mut last = 0;

    while let Ok(token) = scanner.read_token() {
        if token.kind == TokenKind::EndOfInput {
            break;
        }
        out.push_str(&line[last..token.span.start]);
        out.push_str(&paint(token.kind, &line[token.span.start..token.span.end]));
        last = token.span.end;
    }

    if last == 0 {
        return Cow::Borrowed(line);
    }
    out.push_str(&line[last..]);
    Cow::Owned(out)
}

fn paint(kind: TokenKind, text: &str) -> String {
    match kind {
        TokenKind::Boolean | TokenKind::Nil => text.cyan().to_string(),
        k if k.is_keyword() => text.blue().bold().to_string(),
        TokenKind::Int | TokenKind::Float => text.magenta().to_string(),
        TokenKind::String => text.green().to_string(),
        TokenKind::BinOp | TokenKind::Equals | TokenKind::Bang => text.yellow().to_string(),
        _ => text.to_string(),
    }
}

pub fn highlight_prompt(prompt: &str) -> Cow<'_, str> {
    if prompt == "> " {
        return Cow::Owned(format!("{} ", ">".bright_green().bold()));
    }
    Cow::Borrowed(prompt)
}
