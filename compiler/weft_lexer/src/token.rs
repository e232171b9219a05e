//! Tokens and the per-line token list.

use std::fmt;

use weft_lexer_core::{Language, ResumeState, TokenKind};

/// Per-token attribute bits packed into a single byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TokenFlags(u8);

impl TokenFlags {
    /// The token's text is a URL split out of a comment or string.
    pub const HYPERLINK: u8 = 1 << 0;
    /// A markup tag name or style at-rule missing from the built-in dictionaries.
    pub const UNRECOGNIZED: u8 = 1 << 1;

    /// Empty flags (no bits set).
    pub const EMPTY: Self = TokenFlags(0);

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        TokenFlags(bits)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if a specific flag is set.
    #[inline]
    pub const fn contains(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    /// Set a flag.
    #[inline]
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    #[inline]
    pub const fn is_hyperlink(self) -> bool {
        self.contains(Self::HYPERLINK)
    }

    #[inline]
    pub const fn is_unrecognized(self) -> bool {
        self.contains(Self::UNRECOGNIZED)
    }
}

// Compile-time assertion: TokenFlags is exactly 1 byte.
const _: () = assert!(std::mem::size_of::<TokenFlags>() == 1);

impl fmt::Display for TokenFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for (bit, name) in [(Self::HYPERLINK, "link"), (Self::UNRECOGNIZED, "unknown")] {
            if self.contains(bit) {
                write!(f, "{sep}{name}")?;
                sep = ",";
            }
        }
        Ok(())
    }
}

/// One classified span of the line.
///
/// `text` borrows from the line passed to the tokenizer; `offset` is the
/// document offset of its first byte (the caller's start offset plus the
/// position within the line).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Grammar that produced the token.
    pub language: Language,
    pub offset: usize,
    pub text: &'a str,
    pub flags: TokenFlags,
}

impl Token<'_> {
    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Offset one past the last byte.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    #[inline]
    pub fn is_hyperlink(&self) -> bool {
        self.flags.is_hyperlink()
    }

    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    /// Zero-length tokens exist only as hyperlink suffixes and paint nothing.
    #[inline]
    pub fn is_paintable(&self) -> bool {
        !self.text.is_empty()
    }

    /// Check kind and exact text.
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    /// Check kind and that the text is exactly `ch`.
    pub fn is_single_char(&self, kind: TokenKind, ch: char) -> bool {
        let mut chars = self.text.chars();
        self.kind == kind && chars.next() == Some(ch) && chars.next().is_none()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {:?}", self.offset, self.kind, self.text)?;
        if self.flags != TokenFlags::EMPTY {
            write!(f, " [{}]", self.flags)?;
        }
        Ok(())
    }
}

/// The tokens of one line, in offset order, contiguous and covering the
/// whole line.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenList<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> TokenList<'a> {
    pub(crate) fn from_vec(tokens: Vec<Token<'a>>) -> Self {
        TokenList { tokens }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token<'a>> {
        self.tokens.get(index)
    }

    pub fn first(&self) -> Option<&Token<'a>> {
        self.tokens.first()
    }

    pub fn last(&self) -> Option<&Token<'a>> {
        self.tokens.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token<'a>> {
        self.tokens.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token<'a>] {
        &self.tokens
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Token<'a>> {
        self.tokens
    }
}

impl fmt::Debug for TokenList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenList({} tokens)", self.tokens.len())
    }
}

impl<'a> std::ops::Index<usize> for TokenList<'a> {
    type Output = Token<'a>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for TokenList<'a> {
    type Item = Token<'a>;
    type IntoIter = std::vec::IntoIter<Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'l, 'a> IntoIterator for &'l TokenList<'a> {
    type Item = &'l Token<'a>;
    type IntoIter = std::slice::Iter<'l, Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Result of tokenizing one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tokenized<'a> {
    pub tokens: TokenList<'a>,
    /// State to pass when tokenizing the next line.
    pub end_state: ResumeState,
}
