//! Scanner for gomi, a small language that accepts Latin and Japanese
//! spellings of every keyword and symbol.

pub mod errors;
pub mod lexer;

pub use errors::{GomiError, LexError, LexErrorKind};
pub use lexer::Scanner;
pub use lexer::token::{Token, TokenKind};

/// Convenience function to scan source code end-to-end.
pub fn tokenize(source: &str) -> Result<Vec<Token>, GomiError> {
    Ok(lexer::lex(source)?)
}
