//! Embedded script grammar.
//!
//! A pragmatic superset of the language, enough for highlighting: words go
//! through the keyword tables, numbers are validated for trailing garbage,
//! quoted literals for malformed escapes. Template literals alternate
//! between text and `${ ... }` interpolations, the latter tracked by brace
//! depth only.

use weft_lexer_core::{is_whitespace, ResumeState, ScriptState, TokenKind, MAX_NEST_DEPTH};

use super::{Scanner, SCRIPT_CLOSE};
use crate::keywords;

/// Multi-character operators, longest first so the first prefix match is
/// the longest one.
const OPERATORS: &[&str] = &[
    ">>>=", "===", "!==", "<<=", ">>=", ">>>", "**=", "&&=", "||=", "??=", "==", "!=", "<=",
    ">=", "&&", "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
    "<<", ">>", "**", "=>",
];

impl Scanner<'_> {
    pub(super) fn script(&mut self, state: ScriptState) {
        let start = self.cursor.pos();
        match state {
            ScriptState::Default => self.script_code(),
            ScriptState::Comment => self.block_comment_rest(start),
            ScriptState::DoubleQuote { valid } => self.quoted_rest(b'"', valid, start),
            ScriptState::SingleQuote { valid } => self.quoted_rest(b'\'', valid, start),
            ScriptState::Template { valid } => self.template_text(valid, start),
            ScriptState::Interpolation { depth } => self.interpolation_rest(depth, start),
        }
    }

    fn set_script(&mut self, state: ScriptState) {
        self.state = ResumeState::Script(state);
    }

    fn script_code(&mut self) {
        let start = self.cursor.pos();
        match self.cursor.current() {
            b if is_whitespace(b) => self.whitespace(),
            b'<' if self.at_closing_tag(SCRIPT_CLOSE) => self.close_embedded(SCRIPT_CLOSE),
            b'/' => match self.cursor.peek() {
                b'/' => self.line_comment(start),
                b'*' => {
                    self.cursor.advance_n(2);
                    self.block_comment_rest(start);
                }
                _ if self.regex_allowed() && self.scan_regex() => {
                    self.emit(TokenKind::Regex, start);
                }
                _ => self.operator(),
            },
            quote @ (b'"' | b'\'') => {
                self.cursor.advance();
                self.quoted_rest(quote, true, start);
            }
            b'`' => {
                self.cursor.advance();
                self.template_text(true, start);
            }
            b'0'..=b'9' => self.script_number(start),
            b'.' if self.cursor.peek().is_ascii_digit() => self.script_number(start),
            b'(' | b')' | b'[' | b']' | b'{' | b'}' => self.fixed(TokenKind::Separator, 1),
            b';' | b',' | b'.' => self.fixed(TokenKind::Identifier, 1),
            b if is_word_start(b) => {
                self.cursor.advance();
                self.cursor.eat_while(is_word_byte);
                let kind = keywords::classify(self.cursor.slice_from(start));
                self.emit(kind, start);
            }
            b if is_operator_byte(b) => self.operator(),
            _ => self.single_char(TokenKind::Identifier),
        }
    }

    // ─── Comments ───────────────────────────────────────────────────

    /// `//` to the end of the line, or to a `</script` on it.
    fn line_comment(&mut self, start: usize) {
        match self.find_closing_tag(SCRIPT_CLOSE) {
            Some(tag) => self.cursor.advance_n(tag),
            None => self.cursor.advance_to_end(),
        }
        self.emit(TokenKind::CommentEol, start);
    }

    /// Block comment body up to `*/`. A `</script` inside the comment ends
    /// the comment and the script.
    fn block_comment_rest(&mut self, start: usize) {
        let close = self.cursor.find("*/");
        let tag = self.find_closing_tag(SCRIPT_CLOSE);
        match (close, tag) {
            (Some(close), Some(tag)) if tag < close => {
                self.cursor.advance_n(tag);
                self.set_script(ScriptState::Default);
            }
            (Some(close), _) => {
                self.cursor.advance_n(close + 2);
                self.set_script(ScriptState::Default);
            }
            (None, Some(tag)) => {
                self.cursor.advance_n(tag);
                self.set_script(ScriptState::Default);
            }
            (None, None) => {
                self.cursor.advance_to_end();
                self.set_script(ScriptState::Comment);
            }
        }
        self.emit(TokenKind::CommentMultiline, start);
    }

    // ─── Regular Expressions ────────────────────────────────────────

    /// Whether a `/` here starts a regex rather than a division: at the
    /// start of the line, after a keyword, after an operator ending in `=`
    /// or `~`, or after one of ``= ( , ? : [ ! & | ; { }``.
    fn regex_allowed(&self) -> bool {
        let Some((kind, text)) = self.last_script else {
            return true;
        };
        match kind {
            TokenKind::ReservedWord | TokenKind::ReservedWord2 => true,
            TokenKind::Operator if text.ends_with(|c| c == '=' || c == '~') => true,
            _ => {
                matches!(
                    text.as_bytes(),
                    [b'=' | b'(' | b',' | b'?' | b':' | b'[' | b'!' | b'&' | b'|' | b';' | b'{' | b'}']
                )
            }
        }
    }

    /// Consume `/pattern/flags` if the line holds one. Escapes and
    /// character classes may contain `/`.
    fn scan_regex(&mut self) -> bool {
        let mut probe = self.cursor;
        probe.advance();
        let mut in_class = false;
        while !probe.is_eof() {
            match probe.current() {
                b'\\' => {
                    probe.advance();
                    probe.advance_char();
                }
                b'[' => {
                    in_class = true;
                    probe.advance();
                }
                b']' => {
                    in_class = false;
                    probe.advance();
                }
                b'/' if !in_class => {
                    probe.advance();
                    probe.eat_while(|b| b.is_ascii_alphabetic());
                    self.cursor = probe;
                    return true;
                }
                _ => probe.advance_char(),
            }
        }
        false
    }

    // ─── Operators ──────────────────────────────────────────────────

    fn operator(&mut self) {
        let len = OPERATORS
            .iter()
            .find(|op| self.cursor.starts_with(op))
            .map_or(1, |op| op.len());
        self.fixed(TokenKind::Operator, len);
    }

    // ─── Numbers ────────────────────────────────────────────────────

    /// Decimal, hex and float literals. Identifier characters glued to the
    /// literal turn the whole run into one error token.
    fn script_number(&mut self, start: usize) {
        let mut kind = if self.cursor.current() == b'0' && matches!(self.cursor.peek(), b'x' | b'X')
        {
            self.cursor.advance_n(2);
            let digits_start = self.cursor.pos();
            self.cursor.eat_while(|b| b.is_ascii_hexdigit());
            if self.cursor.pos() == digits_start {
                TokenKind::ErrorNumber
            } else {
                if matches!(self.cursor.current(), b'l' | b'L') {
                    self.cursor.advance();
                }
                TokenKind::LiteralHexInt
            }
        } else {
            self.decimal()
        };
        if is_word_byte(self.cursor.current()) {
            self.cursor.eat_while(is_word_byte);
            kind = TokenKind::ErrorNumber;
        }
        self.emit(kind, start);
    }

    fn decimal(&mut self) -> TokenKind {
        let mut float = false;
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' {
            float = true;
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        if matches!(self.cursor.current(), b'e' | b'E') {
            let signed = matches!(self.cursor.peek(), b'+' | b'-');
            let digit_at = if signed { 2 } else { 1 };
            if self.cursor.peek_at(digit_at).is_ascii_digit() {
                float = true;
                self.cursor.advance_n(digit_at);
                self.cursor.eat_while(|b| b.is_ascii_digit());
            }
        }
        match self.cursor.current() {
            b'f' | b'F' | b'd' | b'D' => {
                self.cursor.advance();
                TokenKind::LiteralFloat
            }
            b'l' | b'L' if !float => {
                self.cursor.advance();
                TokenKind::LiteralDecimalInt
            }
            _ if float => TokenKind::LiteralFloat,
            _ => TokenKind::LiteralDecimalInt,
        }
    }

    // ─── Quoted Literals ────────────────────────────────────────────

    /// String or char body after the opening quote (or from the start of a
    /// continuation line). A trailing backslash continues the literal on
    /// the next line; any other unterminated literal is an error.
    fn quoted_rest(&mut self, quote: u8, mut valid: bool, start: usize) {
        let (ok, err) = if quote == b'"' {
            (TokenKind::LiteralStringDouble, TokenKind::ErrorString)
        } else {
            (TokenKind::LiteralChar, TokenKind::ErrorChar)
        };
        let kind = loop {
            if self.cursor.is_eof() {
                self.set_script(ScriptState::Default);
                break err;
            }
            match self.cursor.current() {
                b'\\' if self.cursor.pos() + 1 == self.cursor.len() => {
                    self.cursor.advance();
                    self.set_script(if quote == b'"' {
                        ScriptState::DoubleQuote { valid }
                    } else {
                        ScriptState::SingleQuote { valid }
                    });
                    break if valid { ok } else { err };
                }
                b'\\' => valid &= self.escape(),
                b if b == quote => {
                    self.cursor.advance();
                    self.set_script(ScriptState::Default);
                    break if valid { ok } else { err };
                }
                _ => self.cursor.advance_char(),
            }
        };
        self.emit(kind, start);
    }

    /// Consume one escape sequence at a backslash; `false` if malformed.
    ///
    /// `\xHH` needs two hex digits, `\uHHHH` four (or `\u{H...}`); octal
    /// and single-character escapes are always accepted.
    fn escape(&mut self) -> bool {
        self.cursor.advance();
        match self.cursor.current() {
            b'x' => {
                self.cursor.advance();
                self.hex_digits(2)
            }
            b'u' if self.cursor.peek() == b'{' => {
                self.cursor.advance_n(2);
                let start = self.cursor.pos();
                self.cursor.eat_while(|b| b.is_ascii_hexdigit());
                let has_digits = self.cursor.pos() > start;
                if has_digits && self.cursor.current() == b'}' {
                    self.cursor.advance();
                    true
                } else {
                    false
                }
            }
            b'u' => {
                self.cursor.advance();
                self.hex_digits(4)
            }
            b'0'..=b'7' => {
                for _ in 0..3 {
                    if !(b'0'..=b'7').contains(&self.cursor.current()) {
                        break;
                    }
                    self.cursor.advance();
                }
                true
            }
            _ => {
                self.cursor.advance_char();
                true
            }
        }
    }

    /// Consume up to `n` hex digits; `true` if all `n` were present.
    fn hex_digits(&mut self, n: usize) -> bool {
        for _ in 0..n {
            if !self.cursor.current().is_ascii_hexdigit() {
                return false;
            }
            self.cursor.advance();
        }
        true
    }

    // ─── Template Literals ──────────────────────────────────────────

    /// Template text after the opening backquote, after an interpolation,
    /// or from the start of a continuation line.
    fn template_text(&mut self, mut valid: bool, start: usize) {
        loop {
            if self.cursor.is_eof() {
                self.set_script(ScriptState::Template { valid });
                break;
            }
            match self.cursor.current() {
                b'`' => {
                    self.cursor.advance();
                    self.set_script(ScriptState::Default);
                    break;
                }
                b'\\' if self.cursor.pos() + 1 == self.cursor.len() => self.cursor.advance(),
                b'\\' => valid &= self.escape(),
                b'$' if self.cursor.peek() == b'{' => {
                    self.emit(template_kind(valid), start);
                    let open = self.cursor.pos();
                    self.cursor.advance_n(2);
                    self.interpolation_rest(1, open);
                    return;
                }
                _ => self.cursor.advance_char(),
            }
        }
        self.emit(template_kind(valid), start);
    }

    /// Interpolation body with `depth` braces open. Every `{` nests and
    /// every `}` unnests; the brace that reaches zero closes the
    /// interpolation and returns to template text.
    fn interpolation_rest(&mut self, mut depth: u8, start: usize) {
        while !self.cursor.is_eof() {
            match self.cursor.current() {
                b'{' => {
                    depth = depth.saturating_add(1).min(MAX_NEST_DEPTH);
                    self.cursor.advance();
                }
                b'}' => {
                    self.cursor.advance();
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.emit(TokenKind::Variable, start);
                        self.set_script(ScriptState::Template { valid: true });
                        return;
                    }
                }
                _ => self.cursor.advance_char(),
            }
        }
        self.emit(TokenKind::Variable, start);
        self.set_script(ScriptState::Interpolation { depth });
    }
}

fn template_kind(valid: bool) -> TokenKind {
    if valid {
        TokenKind::LiteralBackquote
    } else {
        TokenKind::ErrorString
    }
}

#[inline]
fn is_word_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || matches!(b, b'_' | b'$' | b'#') || b >= 0x80
}

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}

#[inline]
fn is_operator_byte(b: u8) -> bool {
    matches!(
        b,
        b'+' | b'-' | b'*' | b'/' | b'%' | b'=' | b'<' | b'>' | b'!' | b'~' | b'?' | b':' | b'&'
            | b'|' | b'^'
    )
}
