//! Accumulates classified spans into a [`TokenList`].
//!
//! Spans arrive as line-relative byte ranges. The builder converts them to
//! document offsets, borrows their text from the line and applies hyperlink
//! splitting to the kinds selected by [`HyperlinkScope`].

use weft_lexer_core::{Language, TokenKind};

use crate::hyperlink::find_url;
use crate::options::HyperlinkScope;
use crate::token::{Token, TokenFlags, TokenList};

pub(crate) struct TokenBuilder<'a> {
    line: &'a str,
    base: usize,
    links: HyperlinkScope,
    tokens: Vec<Token<'a>>,
}

impl<'a> TokenBuilder<'a> {
    pub(crate) fn new(line: &'a str, base: usize, links: HyperlinkScope) -> Self {
        TokenBuilder {
            line,
            base,
            links,
            // Roughly one token per four bytes of typical markup.
            tokens: Vec::with_capacity(line.len() / 4 + 1),
        }
    }

    /// Append `start..end` of the line.
    ///
    /// Empty spans are dropped. Spans must be pushed in order and without
    /// gaps.
    pub(crate) fn push(
        &mut self,
        kind: TokenKind,
        language: Language,
        start: usize,
        end: usize,
        flags: TokenFlags,
    ) {
        if start == end {
            return;
        }
        debug_assert_eq!(start, self.covered(), "token spans must be contiguous");

        if self.links.applies_to(kind) {
            if let Some(url) = find_url(&self.line[start..end]) {
                let (link_start, link_end) = (start + url.start, start + url.end);
                self.raw_push(kind, language, start, link_start, flags);
                let mut link_flags = flags;
                link_flags.set(TokenFlags::HYPERLINK);
                self.raw_push_always(kind, language, link_start, link_end, link_flags);
                // The suffix is kept even when empty, so callers always see
                // the non-link tail after a link.
                self.raw_push_always(kind, language, link_end, end, flags);
                return;
            }
        }
        self.raw_push(kind, language, start, end, flags);
    }

    fn raw_push(
        &mut self,
        kind: TokenKind,
        language: Language,
        start: usize,
        end: usize,
        flags: TokenFlags,
    ) {
        if start < end {
            self.raw_push_always(kind, language, start, end, flags);
        }
    }

    fn raw_push_always(
        &mut self,
        kind: TokenKind,
        language: Language,
        start: usize,
        end: usize,
        flags: TokenFlags,
    ) {
        self.tokens.push(Token {
            kind,
            language,
            offset: self.base + start,
            text: &self.line[start..end],
            flags,
        });
    }

    /// Line-relative end of the last token.
    fn covered(&self) -> usize {
        self.tokens.last().map_or(0, |t| t.end() - self.base)
    }

    /// The most recent token that is neither empty nor whitespace.
    pub(crate) fn last_significant(&self) -> Option<&Token<'a>> {
        self.tokens
            .iter()
            .rev()
            .find(|t| t.is_paintable() && !t.is_whitespace())
    }

    pub(crate) fn finish(self) -> TokenList<'a> {
        TokenList::from_vec(self.tokens)
    }
}
