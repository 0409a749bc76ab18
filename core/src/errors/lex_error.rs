use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Classification of a scan failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No recognizer matched the character under the cursor.
    Unrecognized,
    /// A string literal hit a newline or the end of input before closing.
    UnterminatedString,
    /// A numeric literal had a decimal point with no digit after it.
    MalformedFloat,
    /// `read_token` was called again after the end-of-input token.
    EndOfInput,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LexErrorKind::Unrecognized => "UnrecognizedError",
            LexErrorKind::UnterminatedString => "UnterminatedStringError",
            LexErrorKind::MalformedFloat => "MalformedFloatError",
            LexErrorKind::EndOfInput => "EofError",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Error, Diagnostic)]
#[error("{kind} at {line}:{column}: {message}")]
#[diagnostic(help("check the characters around this location"))]
pub struct LexError {
    pub kind: LexErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,

    #[label("here")]
    pub span: miette::SourceSpan,
}

impl LexError {
    pub fn new(
        kind: LexErrorKind,
        message: impl Into<String>,
        line: usize,
        column: usize,
        offset: usize,
        length: usize,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            column,
            span: (offset, length).into(),
        }
    }
}
