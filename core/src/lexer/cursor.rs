/// Code-point reader over the source, tracking line and column.
pub struct Cursor {
    source: Vec<char>,
    pos: usize,
    offset: usize,
    line: usize,
    column: usize,
}

/// Where the cursor stands: code-point index, byte offset and 1-based line/column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub pos: usize,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            pos: 0,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current byte offset in the original UTF-8 source.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// Peek at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    /// Peek at the next character (one ahead of current).
    pub fn peek_next(&self) -> Option<char> {
        self.source.get(self.pos + 1).copied()
    }

    /// Advance one character and return it. A newline moves to the start of the next line.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.source.get(self.pos).copied()?;
        self.pos += 1;
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Advance while `pred` holds for the current character.
    pub fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Return the source text from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> String {
        self.source[start..self.pos].iter().collect()
    }
}
