use super::chars::{is_decimal_point, is_digit, is_ident_continue};
use super::cursor::Mark;
use super::keywords;
use super::scanner::Scanner;
use super::token::{Token, TokenKind};
use crate::errors::{LexError, LexErrorKind};

impl Scanner {
    /// Digits of either script may be mixed; the token keeps the raw source text.
    pub(super) fn scan_number(&mut self, start: Mark) -> Result<Token, LexError> {
        self.cursor.advance_while(is_digit);

        if !self.cursor.peek().is_some_and(is_decimal_point) {
            return Ok(self.make_token(TokenKind::Int, start));
        }

        if !self.cursor.peek_next().is_some_and(is_digit) {
            let dot = self.cursor.mark();
            return Err(self.fail(
                LexErrorKind::MalformedFloat,
                "expected a digit after the decimal point",
                dot,
                self.cursor.peek().map_or(1, char::len_utf8),
            ));
        }

        self.cursor.advance();
        self.cursor.advance_while(is_digit);
        Ok(self.make_token(TokenKind::Float, start))
    }

    pub(super) fn scan_identifier(&mut self, start: Mark) -> Token {
        self.cursor.advance_while(is_ident_continue);

        let mut token = self.make_token(TokenKind::Identifier, start);
        if let Some(kind) = keywords::lookup(&token.value) {
            token.kind = kind;
        }
        token
    }
}
