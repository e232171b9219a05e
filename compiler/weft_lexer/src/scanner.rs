//! Line scanner shared by the three grammars.
//!
//! The scanner holds the cursor, the token builder and the current
//! [`ResumeState`]. Each loop iteration dispatches on the state's grammar
//! and lets that grammar consume the next construct, emitting one or more
//! tokens and possibly switching state. A step always consumes input or
//! changes state, and no state change cycle is possible without consuming,
//! so the loop ends at the end of the line.

mod markup;
mod script;
mod style;

use weft_lexer_core::{Cursor, Language, MarkupState, ResumeState, TokenKind};

use crate::builder::TokenBuilder;
use crate::options::LexerOptions;
use crate::token::{TokenFlags, Tokenized};

/// Closing tags that end an embedded grammar, matched ignoring case.
const SCRIPT_CLOSE: &str = "</script";
const STYLE_CLOSE: &str = "</style";

pub(crate) struct Scanner<'a> {
    cursor: Cursor<'a>,
    out: TokenBuilder<'a>,
    state: ResumeState,
    /// Last script token that is neither whitespace nor a comment, on this
    /// line. Decides whether `/` starts a regex.
    last_script: Option<(TokenKind, &'a str)>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(
        line: &'a str,
        start_offset: usize,
        state: ResumeState,
        options: LexerOptions,
    ) -> Self {
        Scanner {
            cursor: Cursor::new(line),
            out: TokenBuilder::new(line, start_offset, options.hyperlinks),
            state,
            last_script: None,
        }
    }

    pub(crate) fn run(mut self) -> Tokenized<'a> {
        while !self.cursor.is_eof() {
            let (pos, state) = (self.cursor.pos(), self.state);
            match state {
                ResumeState::Markup(sub) => self.markup(sub),
                ResumeState::Style(sub) => self.style(sub),
                ResumeState::Script(sub) => self.script(sub),
            }
            debug_assert!(
                self.cursor.pos() > pos || self.state != state,
                "scanner stalled at {pos} in {state:?}"
            );
        }
        Tokenized {
            tokens: self.out.finish(),
            end_state: self.state,
        }
    }

    // ─── Emission ───────────────────────────────────────────────────

    /// Emit `start..pos` in the current state's grammar.
    fn emit(&mut self, kind: TokenKind, start: usize) {
        self.emit_flagged(kind, start, TokenFlags::EMPTY);
    }

    fn emit_flagged(&mut self, kind: TokenKind, start: usize, flags: TokenFlags) {
        let end = self.cursor.pos();
        if start == end {
            return;
        }
        let language = self.state.language();
        if language == Language::Script && kind != TokenKind::Whitespace && !kind.is_comment() {
            self.last_script = Some((kind, self.cursor.slice(start, end)));
        }
        self.out.push(kind, language, start, end, flags);
    }

    /// Consume one character and emit it.
    fn single_char(&mut self, kind: TokenKind) {
        let start = self.cursor.pos();
        self.cursor.advance_char();
        self.emit(kind, start);
    }

    /// Consume `n` ASCII bytes and emit them.
    fn fixed(&mut self, kind: TokenKind, n: usize) {
        let start = self.cursor.pos();
        self.cursor.advance_n(n);
        self.emit(kind, start);
    }

    fn whitespace(&mut self) {
        let start = self.cursor.pos();
        self.cursor.eat_whitespace();
        self.emit(TokenKind::Whitespace, start);
    }

    // ─── Embedded Grammar Exit ──────────────────────────────────────

    /// Is the cursor at `tag` (e.g. `</script`), in any case, not followed
    /// by more name characters?
    fn at_closing_tag(&self, tag: &str) -> bool {
        self.cursor.starts_with_ignore_case(tag) && !is_tag_name_byte(self.cursor.peek_at(tag.len()))
    }

    /// Offset from the cursor of the next `tag` that [`Self::at_closing_tag`]
    /// would accept.
    fn find_closing_tag(&self, tag: &str) -> Option<usize> {
        let rest = self.cursor.rest().as_bytes();
        memchr::memchr_iter(b'<', rest).find(|&i| {
            rest[i..]
                .get(..tag.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(tag.as_bytes()))
                && !is_tag_name_byte(rest.get(i + tag.len()).copied().unwrap_or(0))
        })
    }

    /// Hand back to markup at a closing tag: emit `</` and the tag name.
    fn close_embedded(&mut self, tag: &str) {
        tracing::trace!(
            from = %self.state.language(),
            pos = self.cursor.pos(),
            "embedded grammar closed"
        );
        self.state = ResumeState::Markup(MarkupState::ClosingTag);
        self.fixed(TokenKind::MarkupTagDelimiter, 2);
        self.fixed(TokenKind::MarkupTagName, tag.len() - 2);
    }
}

/// Characters of markup tag and attribute names.
#[inline]
fn is_tag_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':' | b'.') || b >= 0x80
}
