//! Host grammar: text, tags, comments, doctypes, processing instructions
//! and entity references.

use weft_lexer_core::{
    is_whitespace, MarkupState, ResumeState, ScriptState, StyleState, TagKind, TokenKind,
};

use super::{is_tag_name_byte, Scanner};
use crate::elements;
use crate::token::TokenFlags;

impl<'a> Scanner<'a> {
    pub(super) fn markup(&mut self, state: MarkupState) {
        let start = self.cursor.pos();
        match state {
            MarkupState::Default => self.markup_content(),
            MarkupState::Tag(kind) => self.markup_tag(kind),
            MarkupState::ClosingTag => self.markup_closing_tag(),
            MarkupState::AttrDouble(kind) => self.attribute_value_rest(b'"', kind, start),
            MarkupState::AttrSingle(kind) => self.attribute_value_rest(b'\'', kind, start),
            MarkupState::Comment => self.delimited_rest(
                "-->",
                TokenKind::MarkupComment,
                MarkupState::Comment,
                start,
            ),
            MarkupState::Doctype => {
                self.delimited_rest(">", TokenKind::MarkupDtd, MarkupState::Doctype, start);
            }
            MarkupState::ProcessingInstruction => self.delimited_rest(
                "?>",
                TokenKind::MarkupProcessingInstruction,
                MarkupState::ProcessingInstruction,
                start,
            ),
        }
    }

    // ─── Content ────────────────────────────────────────────────────

    fn markup_content(&mut self) {
        let start = self.cursor.pos();
        match self.cursor.current() {
            b if is_whitespace(b) => self.whitespace(),
            b'<' => self.markup_open(start),
            b'&' => match self.entity_len() {
                Some(len) => self.fixed(TokenKind::MarkupEntityReference, len),
                None => self.text_run(start),
            },
            _ => self.text_run(start),
        }
    }

    /// Everything starting with `<`.
    fn markup_open(&mut self, start: usize) {
        if self.cursor.starts_with("<!--") {
            self.cursor.advance_n(4);
            self.delimited_rest("-->", TokenKind::MarkupComment, MarkupState::Comment, start);
        } else if self.cursor.peek() == b'!' {
            self.cursor.advance_n(2);
            self.delimited_rest(">", TokenKind::MarkupDtd, MarkupState::Doctype, start);
        } else if self.cursor.peek() == b'?' {
            self.cursor.advance_n(2);
            self.delimited_rest(
                "?>",
                TokenKind::MarkupProcessingInstruction,
                MarkupState::ProcessingInstruction,
                start,
            );
        } else if self.cursor.peek() == b'/' && is_name_start(self.cursor.peek2()) {
            self.fixed(TokenKind::MarkupTagDelimiter, 2);
            self.tag_name();
            self.state = ResumeState::Markup(MarkupState::ClosingTag);
        } else if is_name_start(self.cursor.peek()) {
            self.fixed(TokenKind::MarkupTagDelimiter, 1);
            let name = self.tag_name();
            self.state = ResumeState::Markup(MarkupState::Tag(elements::tag_kind(name)));
        } else {
            self.text_run(start);
        }
    }

    /// Scan and emit a tag name, returning its text.
    fn tag_name(&mut self) -> &'a str {
        let start = self.cursor.pos();
        self.cursor.eat_while(is_tag_name_byte);
        let name = self.cursor.slice_from(start);
        let mut flags = TokenFlags::EMPTY;
        if !elements::is_known(name) {
            flags.set(TokenFlags::UNRECOGNIZED);
        }
        self.emit_flagged(TokenKind::MarkupTagName, start, flags);
        name
    }

    /// Length of the entity reference at the cursor, if there is one:
    /// `&name;`, `&#digits` or `&#xhex`, the numeric forms with an optional `;`.
    fn entity_len(&self) -> Option<usize> {
        let body = self.cursor.rest().as_bytes().get(1..)?;
        let (prefix, digits, numeric) = match body {
            [b'#', b'x' | b'X', tail @ ..] => (2, run_len(tail, u8::is_ascii_hexdigit), true),
            [b'#', tail @ ..] => (1, run_len(tail, u8::is_ascii_digit), true),
            _ => (0, run_len(body, u8::is_ascii_alphanumeric), false),
        };
        if digits == 0 || (!numeric && !body[0].is_ascii_alphabetic()) {
            return None;
        }
        let len = 1 + prefix + digits;
        match body.get(prefix + digits) {
            Some(b';') => Some(len + 1),
            _ if numeric => Some(len),
            _ => None,
        }
    }

    /// Plain text up to whitespace or a markup metacharacter.
    fn text_run(&mut self, start: usize) {
        self.cursor.advance_char();
        self.cursor
            .eat_while(|b| !is_whitespace(b) && b != b'<' && b != b'&');
        self.emit(TokenKind::Identifier, start);
    }

    // ─── Tags ───────────────────────────────────────────────────────

    fn markup_tag(&mut self, kind: TagKind) {
        let start = self.cursor.pos();
        match self.cursor.current() {
            b if is_whitespace(b) => self.whitespace(),
            b'/' if self.cursor.peek() == b'>' => {
                self.fixed(TokenKind::MarkupTagDelimiter, 2);
                self.state = ResumeState::Markup(MarkupState::Default);
            }
            b'>' => {
                self.fixed(TokenKind::MarkupTagDelimiter, 1);
                self.enter_content(kind);
            }
            b'=' => self.fixed(TokenKind::Operator, 1),
            quote @ (b'"' | b'\'') => {
                self.cursor.advance();
                self.attribute_value_rest(quote, kind, start);
            }
            // A new tag before this one closed: abandon the broken tag.
            b'<' => self.state = ResumeState::Markup(MarkupState::Default),
            _ => {
                self.cursor.advance_char();
                self.cursor.eat_while(|b| {
                    !is_whitespace(b) && !matches!(b, b'=' | b'>' | b'<' | b'/' | b'"' | b'\'')
                });
                let after_equals = self
                    .out
                    .last_significant()
                    .is_some_and(|t| t.kind == TokenKind::Operator);
                let kind = if after_equals {
                    TokenKind::MarkupTagAttributeValue
                } else {
                    TokenKind::MarkupTagAttribute
                };
                self.emit(kind, start);
            }
        }
    }

    /// The start tag's `>` was emitted: continue in the element's content grammar.
    fn enter_content(&mut self, kind: TagKind) {
        self.state = match kind {
            TagKind::Plain => ResumeState::Markup(MarkupState::Default),
            TagKind::Script => ResumeState::Script(ScriptState::Default),
            TagKind::Style => ResumeState::Style(StyleState::default()),
        };
        if kind != TagKind::Plain {
            tracing::trace!(to = %self.state.language(), pos = self.cursor.pos(), "embedded grammar opened");
        }
    }

    fn markup_closing_tag(&mut self) {
        let start = self.cursor.pos();
        match self.cursor.current() {
            b if is_whitespace(b) => self.whitespace(),
            b'>' => {
                self.fixed(TokenKind::MarkupTagDelimiter, 1);
                self.state = ResumeState::Markup(MarkupState::Default);
            }
            b'<' => self.state = ResumeState::Markup(MarkupState::Default),
            _ => {
                self.cursor.advance_char();
                self.cursor
                    .eat_while(|b| !is_whitespace(b) && b != b'>' && b != b'<');
                self.emit(TokenKind::MarkupTagAttribute, start);
            }
        }
    }

    /// Attribute value body after its opening quote (or from the start of
    /// a continuation line).
    fn attribute_value_rest(&mut self, quote: u8, kind: TagKind, start: usize) {
        match self.cursor.find_byte(quote) {
            Some(offset) => {
                self.cursor.advance_n(offset + 1);
                self.state = ResumeState::Markup(MarkupState::Tag(kind));
            }
            None => {
                self.cursor.advance_to_end();
                self.state = ResumeState::Markup(if quote == b'"' {
                    MarkupState::AttrDouble(kind)
                } else {
                    MarkupState::AttrSingle(kind)
                });
            }
        }
        self.emit(TokenKind::MarkupTagAttributeValue, start);
    }

    // ─── Comments, Doctypes, Processing Instructions ────────────────

    /// Consume through `close`; if it is missing, stay in `open` for the
    /// next line. Emits one `kind` token from `start`.
    fn delimited_rest(&mut self, close: &str, kind: TokenKind, open: MarkupState, start: usize) {
        let closed = self.cursor.eat_through(close);
        self.state = ResumeState::Markup(if closed { MarkupState::Default } else { open });
        self.emit(kind, start);
    }
}

fn run_len(bytes: &[u8], pred: fn(&u8) -> bool) -> usize {
    bytes.iter().take_while(|b| pred(b)).count()
}

#[inline]
fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b >= 0x80
}
