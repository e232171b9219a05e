//! Per-language queries used by the host editor.
//!
//! These describe each grammar without tokenizing anything: comment
//! delimiters for "toggle comment", brace semantics for folding, and the
//! identifier predicate for word selection.

use weft_lexer_core::Language;

/// Block comment delimiters used to comment out a line.
///
/// The script grammar has none reported here; it comments lines with
/// [`line_comment_start`].
pub fn line_comment_delimiters(language: Language) -> Option<(&'static str, &'static str)> {
    match language {
        Language::Markup => Some(("<!--", "-->")),
        Language::Style => Some(("/*", "*/")),
        Language::Script => None,
    }
}

/// Single-token line comment starter, for grammars that have one.
pub fn line_comment_start(language: Language) -> Option<&'static str> {
    match language {
        Language::Script => Some("//"),
        Language::Markup | Language::Style => None,
    }
}

/// Whether `{` and `}` delimit foldable blocks.
pub fn curly_braces_denote_code_blocks(language: Language) -> bool {
    match language {
        Language::Markup => false,
        Language::Style | Language::Script => true,
    }
}

/// Whether `ch` can be part of an identifier in `language`.
pub fn is_identifier_char(language: Language, ch: char) -> bool {
    if ch.is_alphanumeric() {
        return true;
    }
    match language {
        Language::Markup => matches!(ch, '-' | '_' | ':' | '.'),
        Language::Style => matches!(ch, '-' | '_' | '.'),
        Language::Script => matches!(ch, '_' | '$'),
    }
}

/// Index-based forms of the queries, for hosts that only carry the
/// language index. Out-of-range indices answer as "no such language".
pub mod by_index {
    use super::Language;

    pub fn line_comment_delimiters(index: usize) -> Option<(&'static str, &'static str)> {
        Language::from_index(index).and_then(super::line_comment_delimiters)
    }

    pub fn curly_braces_denote_code_blocks(index: usize) -> bool {
        Language::from_index(index).is_some_and(super::curly_braces_denote_code_blocks)
    }

    pub fn is_identifier_char(index: usize, ch: char) -> bool {
        Language::from_index(index).is_some_and(|lang| super::is_identifier_char(lang, ch))
    }
}
