//! Embedded style sheet grammar.
//!
//! Four code contexts (selector, at-rule prelude, property key, property
//! value) share comment, string and `</style` handling; the rest of each
//! context has its own token rules. Strings, chars and comments carry the
//! context they return to in their resume state.

use weft_lexer_core::{
    is_whitespace, AtRuleBody, ResumeState, StyleContext, StyleState, TokenKind,
};

use super::{Scanner, STYLE_CLOSE};
use crate::style_names;
use crate::token::TokenFlags;

impl Scanner<'_> {
    pub(super) fn style(&mut self, state: StyleState) {
        let start = self.cursor.pos();
        match state {
            StyleState::Context(ctx) => self.style_code(ctx),
            StyleState::Comment(ctx) => self.style_comment_rest(ctx, start),
            StyleState::String(ctx) => self.style_literal_rest(b'"', ctx, start),
            StyleState::Char(ctx) => self.style_literal_rest(b'\'', ctx, start),
        }
    }

    fn set_style(&mut self, state: StyleState) {
        self.state = ResumeState::Style(state);
    }

    fn set_context(&mut self, ctx: StyleContext) {
        self.set_style(StyleState::Context(ctx));
    }

    // ─── Shared Rules ───────────────────────────────────────────────

    fn style_code(&mut self, ctx: StyleContext) {
        let start = self.cursor.pos();
        match self.cursor.current() {
            b if is_whitespace(b) => self.whitespace(),
            b'/' if self.cursor.peek() == b'*' => {
                self.cursor.advance_n(2);
                self.style_comment_rest(ctx, start);
            }
            b'<' if self.at_closing_tag(STYLE_CLOSE) => self.close_embedded(STYLE_CLOSE),
            quote @ (b'"' | b'\'') => {
                self.cursor.advance();
                self.style_literal_rest(quote, ctx, start);
            }
            _ => match ctx {
                StyleContext::Selector => self.selector(start),
                StyleContext::AtRule(body) => self.at_rule_prelude(body, start),
                StyleContext::PropertyKey => self.property_key(start),
                StyleContext::PropertyValue => self.property_value(start),
            },
        }
    }

    /// Comment body up to `*/`. A `</style` inside the comment ends the
    /// comment and the style sheet.
    fn style_comment_rest(&mut self, ctx: StyleContext, start: usize) {
        let close = self.cursor.find("*/");
        let tag = self.find_closing_tag(STYLE_CLOSE);
        match (close, tag) {
            (Some(close), Some(tag)) if tag < close => {
                self.cursor.advance_n(tag);
                self.set_context(ctx);
            }
            (Some(close), _) => {
                self.cursor.advance_n(close + 2);
                self.set_context(ctx);
            }
            (None, Some(tag)) => {
                self.cursor.advance_n(tag);
                self.set_context(ctx);
            }
            (None, None) => {
                self.cursor.advance_to_end();
                self.set_style(StyleState::Comment(ctx));
            }
        }
        self.emit(TokenKind::CommentMultiline, start);
    }

    /// Quoted literal body. Escaped quotes do not close it; reaching the
    /// end of the line keeps it open for the next line.
    fn style_literal_rest(&mut self, quote: u8, ctx: StyleContext, start: usize) {
        let kind = if quote == b'"' {
            TokenKind::LiteralStringDouble
        } else {
            TokenKind::LiteralChar
        };
        loop {
            if self.cursor.is_eof() {
                self.set_style(if quote == b'"' {
                    StyleState::String(ctx)
                } else {
                    StyleState::Char(ctx)
                });
                break;
            }
            match self.cursor.current() {
                b'\\' => {
                    self.cursor.advance();
                    self.cursor.advance_char();
                }
                b if b == quote => {
                    self.cursor.advance();
                    self.set_context(ctx);
                    break;
                }
                _ => self.cursor.advance_char(),
            }
        }
        self.emit(kind, start);
    }

    // ─── Selectors ──────────────────────────────────────────────────

    fn selector(&mut self, start: usize) {
        match self.cursor.current() {
            b'@' => self.at_keyword(start),
            b'{' => {
                self.fixed(TokenKind::Separator, 1);
                self.set_context(StyleContext::PropertyKey);
            }
            b'}' | b';' | b'(' | b')' | b'[' | b']' => self.fixed(TokenKind::Separator, 1),
            b':' => self.pseudo(start),
            b'#' => {
                self.cursor.advance();
                self.cursor.eat_while(is_style_name_byte);
                self.emit(TokenKind::Variable, start);
            }
            b'*' => self.fixed(TokenKind::DataType, 1),
            b'.' => {
                self.cursor.advance();
                self.cursor.eat_while(is_style_name_byte);
                self.emit(TokenKind::DataType, start);
            }
            b'/' => {
                self.cursor.eat_while(|b| b == b'/');
                self.emit(TokenKind::Identifier, start);
            }
            b if is_style_operator(b) => self.fixed(TokenKind::Operator, 1),
            b if is_style_name_byte(b) => {
                self.cursor.eat_while(is_style_name_byte);
                self.emit(TokenKind::DataType, start);
            }
            _ => self.single_char(TokenKind::Identifier),
        }
    }

    /// `:name` or `::name`. Known names are one token; otherwise the colons
    /// are an operator and the name lexes as a selector.
    fn pseudo(&mut self, start: usize) {
        let colons = if self.cursor.peek() == b':' { 2 } else { 1 };
        let mut probe = self.cursor;
        probe.advance_n(colons);
        let name_start = probe.pos();
        probe.eat_while(is_style_name_byte);
        if style_names::is_pseudo(probe.slice_from(name_start)) {
            self.cursor = probe;
            self.emit(TokenKind::ReservedWord, start);
        } else {
            self.fixed(TokenKind::Operator, colons);
        }
    }

    /// `@name`, then the at-rule prelude context.
    fn at_keyword(&mut self, start: usize) {
        self.cursor.advance();
        let name_start = self.cursor.pos();
        self.cursor.eat_while(is_style_name_byte);
        let known = style_names::at_rule(self.cursor.slice_from(name_start));
        let mut flags = TokenFlags::EMPTY;
        if known.is_none() {
            flags.set(TokenFlags::UNRECOGNIZED);
        }
        self.emit_flagged(TokenKind::Regex, start, flags);
        self.set_context(StyleContext::AtRule(known.unwrap_or(AtRuleBody::Rules)));
    }

    fn at_rule_prelude(&mut self, body: AtRuleBody, start: usize) {
        match self.cursor.current() {
            b';' => {
                self.fixed(TokenKind::Separator, 1);
                self.set_context(StyleContext::Selector);
            }
            b'{' => {
                self.fixed(TokenKind::Separator, 1);
                self.set_context(match body {
                    AtRuleBody::Rules => StyleContext::Selector,
                    AtRuleBody::Declarations => StyleContext::PropertyKey,
                });
            }
            b'}' => {
                self.fixed(TokenKind::Separator, 1);
                self.set_context(StyleContext::Selector);
            }
            b'(' | b')' | b'[' | b']' => self.fixed(TokenKind::Separator, 1),
            b':' => self.fixed(TokenKind::Operator, 1),
            b if is_style_operator(b) => self.fixed(TokenKind::Operator, 1),
            _ if self.style_number_len().is_some() => self.style_number(start),
            b if is_style_name_byte(b) => self.word_or_function(start),
            _ => self.single_char(TokenKind::Identifier),
        }
    }

    // ─── Declarations ───────────────────────────────────────────────

    fn property_key(&mut self, start: usize) {
        match self.cursor.current() {
            b':' => {
                self.fixed(TokenKind::Operator, 1);
                self.set_context(StyleContext::PropertyValue);
            }
            b'}' => {
                self.fixed(TokenKind::Separator, 1);
                self.set_context(StyleContext::Selector);
            }
            b'{' => self.fixed(TokenKind::Separator, 1),
            b';' => self.fixed(TokenKind::Operator, 1),
            b if b == b'*' || is_style_name_byte(b) => {
                self.cursor.advance();
                self.cursor.eat_while(is_style_name_byte);
                self.emit(TokenKind::ReservedWord, start);
            }
            _ => self.single_char(TokenKind::Identifier),
        }
    }

    fn property_value(&mut self, start: usize) {
        match self.cursor.current() {
            b';' => {
                self.fixed(TokenKind::Operator, 1);
                self.set_context(StyleContext::PropertyKey);
            }
            b'}' => {
                self.fixed(TokenKind::Separator, 1);
                self.set_context(StyleContext::Selector);
            }
            b'{' | b'(' | b')' | b'[' | b']' => self.fixed(TokenKind::Separator, 1),
            b'!' if self.cursor.starts_with_ignore_case("!important") => {
                self.fixed(TokenKind::Preprocessor, "!important".len());
            }
            b'#' if self.cursor.peek().is_ascii_hexdigit() => {
                self.cursor.advance();
                self.cursor.eat_while(|b| b.is_ascii_hexdigit());
                self.emit(TokenKind::LiteralDecimalInt, start);
            }
            _ if self.style_number_len().is_some() => self.style_number(start),
            b if is_style_name_byte(b) => self.word_or_function(start),
            _ => self.single_char(TokenKind::Identifier),
        }
    }

    /// A name, classified as a function when `(` follows directly.
    fn word_or_function(&mut self, start: usize) {
        self.cursor.eat_while(is_style_name_byte);
        let kind = if self.cursor.current() == b'(' {
            TokenKind::Function
        } else {
            TokenKind::Identifier
        };
        self.emit(kind, start);
    }

    /// Length of the unsigned numeric part at the cursor, counting an
    /// optional sign: `-42`, `42.`, `.5`, `+3.25`.
    fn style_number_len(&self) -> Option<usize> {
        let rest = self.cursor.rest().as_bytes();
        let digits = |from: usize| {
            rest.get(from..)
                .map_or(0, |tail| tail.iter().take_while(|b| b.is_ascii_digit()).count())
        };
        let sign = usize::from(matches!(rest.first(), Some(b'-' | b'+')));
        let int = digits(sign);
        let mut len = sign + int;
        if rest.get(len) == Some(&b'.') {
            let frac = digits(len + 1);
            if int > 0 || frac > 0 {
                len += 1 + frac;
            }
        }
        (len > sign).then_some(len)
    }

    /// Number with an optional unit or `%`, as one token.
    fn style_number(&mut self, start: usize) {
        let len = self.style_number_len().unwrap_or(1);
        self.cursor.advance_n(len);
        if self.cursor.current() == b'%' {
            self.cursor.advance();
        } else {
            let mut probe = self.cursor;
            probe.eat_while(|b| b.is_ascii_alphabetic());
            if style_names::is_unit(probe.slice_from(self.cursor.pos())) {
                self.cursor = probe;
            }
        }
        self.emit(TokenKind::LiteralDecimalInt, start);
    }
}

/// Characters of selectors, property names and values.
#[inline]
fn is_style_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b >= 0x80
}

#[inline]
fn is_style_operator(b: u8) -> bool {
    matches!(b, b'+' | b'>' | b'~' | b'^' | b'$' | b'|' | b'=')
}
