mod lex_error;

pub use lex_error::{LexError, LexErrorKind};

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type wrapping all gomi errors.
#[derive(Debug, Error, Diagnostic)]
pub enum GomiError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error("shell error: {message}")]
    Shell { message: String },
}
