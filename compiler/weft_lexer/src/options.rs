//! Tokenizer configuration.

/// Which tokens are searched for embedded URLs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HyperlinkScope {
    /// Never split out hyperlinks.
    Off,
    /// Comments in all three grammars.
    #[default]
    Comments,
    /// Comments plus string-like literals and attribute values.
    CommentsAndStrings,
}

impl HyperlinkScope {
    pub(crate) fn applies_to(self, kind: weft_lexer_core::TokenKind) -> bool {
        match self {
            Self::Off => false,
            Self::Comments => kind.is_comment(),
            Self::CommentsAndStrings => kind.is_comment() || kind.is_string_like(),
        }
    }
}

/// Options for [`Lexer`](crate::Lexer).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LexerOptions {
    pub hyperlinks: HyperlinkScope,
}

impl LexerOptions {
    #[must_use]
    pub fn with_hyperlinks(mut self, scope: HyperlinkScope) -> Self {
        self.hyperlinks = scope;
        self
    }
}
