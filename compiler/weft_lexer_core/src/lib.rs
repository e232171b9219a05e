//! Low-level building blocks for the weft line tokenizer.
//!
//! This crate has no knowledge of the three grammars' rules. It provides:
//!
//! - [`Cursor`]: a bounds-checked byte cursor over one line of text
//! - [`TokenKind`]: the flat classification tag set, laid out in semantic ranges
//! - [`Language`]: the grammar index (markup host, embedded style, embedded script)
//! - [`ResumeState`]: the value carried from one line to the next, and its
//!   lossless `u32` encoding
//!
//! The scanners live in `weft_lexer`.

mod cursor;
mod kind;
mod language;
mod state;

pub use cursor::{is_whitespace, Cursor};
pub use kind::TokenKind;
pub use language::Language;
pub use state::{
    AtRuleBody, MarkupState, ResumeState, ScriptState, StateError, StyleContext, StyleState,
    TagKind, MAX_NEST_DEPTH,
};
