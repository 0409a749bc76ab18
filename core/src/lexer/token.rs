use std::fmt;

use serde::Serialize;

/// A single token with its kind, matched text and source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    /// 1-based line of the first character.
    pub line: usize,
    /// 1-based column of the first character, counted in code points.
    pub column: usize,
    pub span: Span,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ {}, \"{}\", {}:{} }}",
            self.kind, self.value, self.line, self.column
        )
    }
}

/// Byte offset span in the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Keywords
    Module,
    Import,
    Let,
    Const,
    Func,
    If,
    While,

    // Literals
    Int,
    Float,
    Boolean,
    String,
    Nil,

    // Identifier
    Identifier,

    // Operators
    Equals,
    BinOp,
    Bang,

    // Punctuation
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Colon,
    Period,
    Semicolon,
    Comma,
    Question,

    // Special
    EndOfInput,
}

impl TokenKind {
    /// Whether this kind comes from the reserved-word table.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Module
                | TokenKind::Import
                | TokenKind::Let
                | TokenKind::Const
                | TokenKind::Func
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Boolean
                | TokenKind::Nil
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
