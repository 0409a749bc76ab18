use tracing::{debug, trace};

use super::chars::{is_comment_start, is_digit, is_equals_sign, is_ident_start, is_skippable};
use super::cursor::{Cursor, Mark};
use super::token::{Span, Token, TokenKind};
use crate::errors::{LexError, LexErrorKind};

/// Scans source code into a sequence of tokens, one `read_token` call at a time.
pub struct Scanner {
    pub(super) cursor: Cursor,
    finished: bool,
}

/// Recognizer chosen for the character under the cursor, listed in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// Single-character punctuation.
    Punct(TokenKind),
    /// `+ - * / % ^` on their own.
    Arithmetic,
    /// First half of `!= <= >= ==`; `fallback` is the kind when no `=` follows.
    EqualsPair { fallback: TokenKind },
    /// Opening string delimiter.
    Quote,
    /// First half of `||` or `&&`.
    Logical,
    Digit,
    IdentStart,
}

fn rule_for(ch: char) -> Option<Rule> {
    let rule = match ch {
        '(' | '（' => Rule::Punct(TokenKind::OpenParen),
        ')' | '）' => Rule::Punct(TokenKind::CloseParen),
        '[' | '【' => Rule::Punct(TokenKind::OpenBracket),
        ']' | '】' => Rule::Punct(TokenKind::CloseBracket),
        '{' | '｛' => Rule::Punct(TokenKind::OpenBrace),
        '}' | '｝' => Rule::Punct(TokenKind::CloseBrace),
        ':' | '：' => Rule::Punct(TokenKind::Colon),
        '.' | '。' | '．' => Rule::Punct(TokenKind::Period),
        ';' | '；' => Rule::Punct(TokenKind::Semicolon),
        ',' | '，' | '、' => Rule::Punct(TokenKind::Comma),
        '?' | '？' => Rule::Punct(TokenKind::Question),
        '+' | '＋' | '-' | '－' | '*' | '＊' | '/' | '／' | '%' | '％' | '^' | '＾' => {
            Rule::Arithmetic
        }
        '!' | '！' => Rule::EqualsPair {
            fallback: TokenKind::Bang,
        },
        '<' | '＜' | '>' | '＞' => Rule::EqualsPair {
            fallback: TokenKind::BinOp,
        },
        '=' | '＝' => Rule::EqualsPair {
            fallback: TokenKind::Equals,
        },
        '\'' | '”' => Rule::Quote,
        '|' | '｜' | '&' | '＆' => Rule::Logical,
        c if is_digit(c) => Rule::Digit,
        c if is_ident_start(c) => Rule::IdentStart,
        _ => return None,
    };
    Some(rule)
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
            finished: false,
        }
    }

    /// Read tokens up to and including the end-of-input token.
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.read_token()?;
            let done = token.kind == TokenKind::EndOfInput;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Return the next token. The end-of-input token is produced exactly once;
    /// asking again is an error.
    pub fn read_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments();
        let start = self.cursor.mark();

        let Some(ch) = self.cursor.peek() else {
            return self.end_of_input(start);
        };
        let Some(rule) = rule_for(ch) else {
            return Err(self.fail(
                LexErrorKind::Unrecognized,
                format!("unrecognized token '{ch}'"),
                start,
                ch.len_utf8(),
            ));
        };

        let token = match rule {
            Rule::Punct(kind) => {
                self.cursor.advance();
                self.make_token(kind, start)
            }
            Rule::Arithmetic => {
                self.cursor.advance();
                self.make_token(TokenKind::BinOp, start)
            }
            Rule::EqualsPair { fallback } => {
                let kind = if self.cursor.peek_next().is_some_and(is_equals_sign) {
                    self.cursor.advance();
                    TokenKind::BinOp
                } else {
                    fallback
                };
                self.cursor.advance();
                self.make_token(kind, start)
            }
            Rule::Quote => self.scan_string(ch, start)?,
            Rule::Logical => {
                if self.cursor.peek_next() != Some(ch) {
                    return Err(self.fail(
                        LexErrorKind::Unrecognized,
                        format!("unrecognized token '{ch}'"),
                        start,
                        ch.len_utf8(),
                    ));
                }
                self.cursor.advance();
                self.cursor.advance();
                self.make_token(TokenKind::BinOp, start)
            }
            Rule::Digit => self.scan_number(start)?,
            Rule::IdentStart => self.scan_identifier(start),
        };

        trace!(kind = %token.kind, value = %token.value, line = token.line, column = token.column, "token");
        Ok(token)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.cursor.peek() {
            if is_skippable(ch) {
                self.cursor.advance();
            } else if is_comment_start(ch) {
                // Line comment: skip until newline
                self.cursor.advance_while(|c| c != '\n');
            } else {
                break;
            }
        }
    }

    fn end_of_input(&mut self, at: Mark) -> Result<Token, LexError> {
        if self.finished {
            return Err(self.fail(
                LexErrorKind::EndOfInput,
                "read past end of input",
                at,
                0,
            ));
        }
        self.finished = true;
        Ok(Token {
            kind: TokenKind::EndOfInput,
            value: "EOF".to_owned(),
            line: at.line,
            column: at.column,
            span: Span::new(at.offset, at.offset),
        })
    }

    /// Build a token from the source text between `start` and the cursor.
    pub(super) fn make_token(&self, kind: TokenKind, start: Mark) -> Token {
        Token {
            kind,
            value: self.cursor.slice_from(start.pos),
            line: start.line,
            column: start.column,
            span: Span::new(start.offset, self.cursor.offset()),
        }
    }

    pub(super) fn fail(
        &self,
        kind: LexErrorKind,
        message: impl Into<String>,
        at: Mark,
        length: usize,
    ) -> LexError {
        let err = LexError::new(kind, message, at.line, at.column, at.offset, length);
        debug!(kind = %err.kind, line = err.line, column = err.column, "{}", err.message);
        err
    }
}
