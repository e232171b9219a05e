//! Line-resumable tokenizer for markup documents with embedded style sheets
//! and scripts.
//!
//! The host editor tokenizes one line at a time. Each call takes the line,
//! the document offset of its first byte and the [`ResumeState`] returned
//! for the previous line, and produces the line's tokens plus the state for
//! the next line. Nothing else is carried between calls, so lines can be
//! re-tokenized independently and in any order once their start states are
//! known.
//!
//! ```
//! use weft_lexer::{tokenize, ResumeState, TokenKind};
//!
//! let first = tokenize("<script>let s = `a ${", 0, ResumeState::INITIAL);
//! let second = tokenize("x}`;</script>", 21, first.end_state);
//! assert_eq!(second.tokens[0].kind, TokenKind::Variable);
//! assert_eq!(second.end_state, ResumeState::INITIAL);
//! ```
//!
//! # Crate layout
//!
//! - `scanner`: the per-grammar scanners driven by one state machine
//! - `builder`: token accumulation and hyperlink splitting
//! - `keywords`, `elements`, `style_names`: static dictionaries
//! - [`language`]: per-language queries for the host editor

mod builder;
mod dictionary;
mod elements;
mod hyperlink;
mod keywords;
pub mod language;
mod options;
mod scanner;
mod style_names;
mod token;

pub use options::{HyperlinkScope, LexerOptions};
pub use token::{Token, TokenFlags, TokenList, Tokenized};
pub use weft_lexer_core::{
    AtRuleBody, Language, MarkupState, ResumeState, ScriptState, StateError, StyleContext,
    StyleState, TagKind, TokenKind, MAX_NEST_DEPTH,
};

use scanner::Scanner;

/// Tokenizer with fixed options.
///
/// Holds no per-line state; one `Lexer` can serve any number of lines and
/// threads.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Lexer {
    options: LexerOptions,
}

impl Lexer {
    pub fn new(options: LexerOptions) -> Self {
        Lexer { options }
    }

    pub fn options(&self) -> LexerOptions {
        self.options
    }

    /// Tokenize one line.
    ///
    /// `start_offset` is added to every token offset. The returned tokens are
    /// contiguous and cover `line` exactly; `end_state` is the state to
    /// pass for the following line.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(len = line.len(), start_offset = start_offset, state = ?state)
    )]
    pub fn tokenize<'a>(
        &self,
        line: &'a str,
        start_offset: usize,
        state: ResumeState,
    ) -> Tokenized<'a> {
        let result = Scanner::new(line, start_offset, state, self.options).run();
        tracing::trace!(
            tokens = result.tokens.len(),
            end_state = ?result.end_state,
            "line tokenized"
        );
        result
    }

    /// Tokenize one line given the encoded form of its start state.
    pub fn tokenize_encoded<'a>(
        &self,
        line: &'a str,
        start_offset: usize,
        state: u32,
    ) -> Result<Tokenized<'a>, StateError> {
        let state = ResumeState::decode(state)?;
        Ok(self.tokenize(line, start_offset, state))
    }
}

/// Tokenize one line with default options.
pub fn tokenize(line: &str, start_offset: usize, state: ResumeState) -> Tokenized<'_> {
    Lexer::default().tokenize(line, start_offset, state)
}
