use super::cursor::Mark;
use super::scanner::Scanner;
use super::token::{Span, Token, TokenKind};
use crate::errors::{LexError, LexErrorKind};

impl Scanner {
    /// Scan a string literal opened by `quote`. The literal must close on the same line.
    pub(super) fn scan_string(&mut self, quote: char, start: Mark) -> Result<Token, LexError> {
        self.cursor.advance();
        let mut value = String::new();
        loop {
            match self.cursor.advance() {
                Some(c) if c == quote => break,
                Some('\\') => match self.cursor.advance() {
                    Some('\n') | None => return Err(self.unterminated(start)),
                    Some(c) => value.push(c),
                },
                Some('\n') | None => return Err(self.unterminated(start)),
                Some(c) => value.push(c),
            }
        }
        Ok(Token {
            kind: TokenKind::String,
            value,
            line: start.line,
            column: start.column,
            span: Span::new(start.offset, self.cursor.offset()),
        })
    }

    fn unterminated(&self, start: Mark) -> LexError {
        self.fail(
            LexErrorKind::UnterminatedString,
            "unterminated string literal",
            start,
            self.cursor.offset() - start.offset,
        )
    }
}
