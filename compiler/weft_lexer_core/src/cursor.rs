//! Byte cursor over a single line of text.
//!
//! Unlike a whole-file cursor, a line cursor is handed arbitrary slices by
//! the host editor, so every read is bounds-checked: reads past the end
//! return `0x00`. Interior null bytes also read as `0x00`; use
//! [`Cursor::is_eof`] to tell them apart.
//!
//! Positions are byte offsets relative to the start of the line. The cursor
//! never stops inside a multi-byte character as long as callers advance with
//! [`Cursor::advance_char`] or with predicates that treat every byte `>= 0x80`
//! the same way.

use memchr::memmem;

/// Cursor over one line of UTF-8 text.
///
/// [`Copy`], so scanners can snapshot it for lookahead.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `src`.
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Returns the byte at the current position, or `0x00` past the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    /// Returns the byte `n` positions ahead of current.
    #[inline]
    pub fn peek_at(&self, n: usize) -> u8 {
        self.byte_at(self.pos + n)
    }

    #[inline]
    fn byte_at(&self, idx: usize) -> u8 {
        self.src.as_bytes().get(idx).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos = (self.pos + 1).min(self.src.len());
    }

    /// Advance the cursor by `n` bytes, clamped to the end of the line.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.src.len());
    }

    /// Advance past the whole character starting at the current position.
    pub fn advance_char(&mut self) {
        let width = utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Move to the end of the line.
    pub fn advance_to_end(&mut self) {
        self.pos = self.src.len();
    }

    /// Returns `true` once every byte of the line has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Current byte offset within the line.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the line in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.src.len()
    }

    /// Returns `true` for an empty line.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }

    /// The unconsumed remainder of the line.
    pub fn rest(&self) -> &'a str {
        self.src.get(self.pos..).unwrap_or("")
    }

    /// Extract `start..end` of the line.
    ///
    /// Both bounds must lie on character boundaries; an invalid range yields
    /// an empty string in release builds.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(
            self.src.is_char_boundary(start) && self.src.is_char_boundary(end),
            "slice {start}..{end} splits a character"
        );
        self.src.get(start..end).unwrap_or("")
    }

    /// Extract the text from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// Stops at the end of the line regardless of `pred(0)`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        let bytes = self.src.as_bytes();
        while self.pos < bytes.len() && pred(bytes[self.pos]) {
            self.pos += 1;
        }
    }

    /// Consume spaces, tabs, form feeds and line terminators.
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Returns `true` if the remainder starts with `prefix` (exact bytes).
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().as_bytes().starts_with(prefix.as_bytes())
    }

    /// Returns `true` if the remainder starts with `prefix`, ignoring ASCII case.
    pub fn starts_with_ignore_case(&self, prefix: &str) -> bool {
        self.rest()
            .as_bytes()
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
    }

    /// Offset (relative to the current position) of the next `needle`.
    pub fn find(&self, needle: &str) -> Option<usize> {
        memmem::find(self.rest().as_bytes(), needle.as_bytes())
    }

    /// Offset (relative to the current position) of the next `byte`.
    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        memchr::memchr(byte, self.rest().as_bytes())
    }

    /// Advance to just past the next `needle`, or to the end of the line.
    ///
    /// Returns `true` if `needle` was found.
    pub fn eat_through(&mut self, needle: &str) -> bool {
        match self.find(needle) {
            Some(offset) => {
                self.advance_n(offset + needle.len());
                true
            }
            None => {
                self.advance_to_end();
                false
            }
        }
    }
}

/// Whitespace as the three grammars see it.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\x0C' | b'\r' | b'\n')
}

/// Returns the number of bytes in the UTF-8 character starting with `byte`.
///
/// Continuation and invalid lead bytes report 1 so the caller always makes
/// progress.
#[inline]
fn utf8_char_width(byte: u8) -> usize {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
