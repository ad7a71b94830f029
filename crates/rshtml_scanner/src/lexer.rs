//! The cursor/lookahead interface a scanner drives.

/// Cursor over the input, as the parser runtime exposes it to a scanner.
///
/// The scanner may inspect `lookahead` without committing to consume it;
/// `advance` consumes one character; `mark_end` pins the end of the token
/// being recognized (without it, the token ends wherever the cursor stops).
pub trait Lexer {
    /// The next unconsumed character, or `None` at end of input.
    fn lookahead(&self) -> Option<char>;

    /// Consume one character. With `skip` set, the character is treated as
    /// whitespace preceding the token rather than part of it.
    fn advance(&mut self, skip: bool);

    /// Pin the current position as the end of the token being recognized.
    fn mark_end(&mut self);

    /// Whether the cursor is at end of input.
    fn eof(&self) -> bool;
}

/// In-memory [`Lexer`] over source text.
pub struct SliceLexer {
    text: Vec<char>,
    pos: usize,
    marked: Option<usize>,
}

impl SliceLexer {
    /// Create a lexer positioned at the start of `text`.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            pos: 0,
            marked: None,
        }
    }

    /// Current cursor position, in characters.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// End of the recognized token: the last `mark_end`, else the cursor.
    #[inline]
    pub fn token_end(&self) -> usize {
        self.marked.unwrap_or(self.pos)
    }
}

impl Lexer for SliceLexer {
    #[inline]
    fn lookahead(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    fn advance(&mut self, _skip: bool) {
        if self.pos < self.text.len() {
            self.pos += 1;
        }
    }

    fn mark_end(&mut self) {
        self.marked = Some(self.pos);
    }

    #[inline]
    fn eof(&self) -> bool {
        self.pos >= self.text.len()
    }
}
