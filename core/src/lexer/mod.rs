mod chars;
pub mod cursor;
pub mod keywords;
mod number_ident_scanner;
pub mod scanner;
mod string_scanner;
pub mod token;

use crate::errors::LexError;
pub use scanner::Scanner;
use token::Token;

/// Tokenize source code into a list of tokens ending with `EndOfInput`.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(source);
    scanner.scan_tokens()
}
