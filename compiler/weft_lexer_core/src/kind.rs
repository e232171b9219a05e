//! Token classification tags.
//!
//! One flat tag set serves all three grammars. Discriminants are grouped in
//! semantic ranges so range checks stay cheap:
//!
//! | Range   | Category                      |
//! |---------|-------------------------------|
//! | 0       | Whitespace                    |
//! | 8-15    | Words and word-like markers   |
//! | 16-23   | Literals                      |
//! | 32-33   | Punctuation                   |
//! | 40-41   | Comments                      |
//! | 48-55   | Markup constructs             |
//! | 240-242 | Errors                        |

/// Classification of one token.
///
/// Every token carries exactly one kind; attributes such as "is a hyperlink"
/// live in the token's flags, not here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Whitespace (0) ===
    Whitespace = 0,

    // === Words (8-15) ===
    /// Plain words, text runs and the script grammar's `; , .`.
    Identifier = 8,
    /// First-tier keywords; also style property names and pseudo-classes.
    ReservedWord = 9,
    /// Second-tier keywords (`return`).
    ReservedWord2 = 10,
    /// Primitive type names; also style selectors.
    DataType = 11,
    /// Builtin functions and style `name(` calls.
    Function = 12,
    /// Style id selectors and script template interpolations.
    Variable = 13,
    /// Style `!important`.
    Preprocessor = 14,
    /// Script regex literals and style at-rules.
    Regex = 15,

    // === Literals (16-23) ===
    LiteralBoolean = 16,
    LiteralChar = 17,
    LiteralStringDouble = 18,
    /// Decimal integers; style numbers with units and hex colours.
    LiteralDecimalInt = 19,
    LiteralHexInt = 20,
    LiteralFloat = 21,
    LiteralBackquote = 22,

    // === Punctuation (32-33) ===
    Operator = 32,
    Separator = 33,

    // === Comments (40-41) ===
    CommentEol = 40,
    CommentMultiline = 41,

    // === Markup (48-55) ===
    MarkupTagDelimiter = 48,
    MarkupTagName = 49,
    MarkupTagAttribute = 50,
    MarkupTagAttributeValue = 51,
    MarkupComment = 52,
    MarkupDtd = 53,
    MarkupProcessingInstruction = 54,
    MarkupEntityReference = 55,

    // === Errors (240-242) ===
    /// Single-quoted literal with a malformed escape or no closing quote.
    ErrorChar = 240,
    /// Double-quoted or template literal with a malformed escape or no closing quote.
    ErrorString = 241,
    /// Numeric literal followed by identifier characters.
    ErrorNumber = 242,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 31] = [
        Self::Whitespace,
        Self::Identifier,
        Self::ReservedWord,
        Self::ReservedWord2,
        Self::DataType,
        Self::Function,
        Self::Variable,
        Self::Preprocessor,
        Self::Regex,
        Self::LiteralBoolean,
        Self::LiteralChar,
        Self::LiteralStringDouble,
        Self::LiteralDecimalInt,
        Self::LiteralHexInt,
        Self::LiteralFloat,
        Self::LiteralBackquote,
        Self::Operator,
        Self::Separator,
        Self::CommentEol,
        Self::CommentMultiline,
        Self::MarkupTagDelimiter,
        Self::MarkupTagName,
        Self::MarkupTagAttribute,
        Self::MarkupTagAttributeValue,
        Self::MarkupComment,
        Self::MarkupDtd,
        Self::MarkupProcessingInstruction,
        Self::MarkupEntityReference,
        Self::ErrorChar,
        Self::ErrorString,
        Self::ErrorNumber,
    ];

    /// Stable lowercase name, used by debug dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::Identifier => "identifier",
            Self::ReservedWord => "reserved-word",
            Self::ReservedWord2 => "reserved-word-2",
            Self::DataType => "data-type",
            Self::Function => "function",
            Self::Variable => "variable",
            Self::Preprocessor => "preprocessor",
            Self::Regex => "regex",
            Self::LiteralBoolean => "literal-boolean",
            Self::LiteralChar => "literal-char",
            Self::LiteralStringDouble => "literal-string",
            Self::LiteralDecimalInt => "literal-decimal",
            Self::LiteralHexInt => "literal-hex",
            Self::LiteralFloat => "literal-float",
            Self::LiteralBackquote => "literal-backquote",
            Self::Operator => "operator",
            Self::Separator => "separator",
            Self::CommentEol => "comment-eol",
            Self::CommentMultiline => "comment-multiline",
            Self::MarkupTagDelimiter => "tag-delimiter",
            Self::MarkupTagName => "tag-name",
            Self::MarkupTagAttribute => "tag-attribute",
            Self::MarkupTagAttributeValue => "tag-attribute-value",
            Self::MarkupComment => "markup-comment",
            Self::MarkupDtd => "markup-dtd",
            Self::MarkupProcessingInstruction => "markup-pi",
            Self::MarkupEntityReference => "entity-reference",
            Self::ErrorChar => "error-char",
            Self::ErrorString => "error-string",
            Self::ErrorNumber => "error-number",
        }
    }

    /// End-of-line, multi-line and markup comments.
    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            Self::CommentEol | Self::CommentMultiline | Self::MarkupComment
        )
    }

    /// String-like literals, including their error forms.
    #[inline]
    pub const fn is_string_like(self) -> bool {
        matches!(
            self,
            Self::LiteralChar
                | Self::LiteralStringDouble
                | Self::LiteralBackquote
                | Self::MarkupTagAttributeValue
                | Self::ErrorChar
                | Self::ErrorString
        )
    }

    #[inline]
    pub const fn is_literal(self) -> bool {
        let tag = self as u8;
        tag >= 16 && tag < 24
    }

    #[inline]
    pub const fn is_markup(self) -> bool {
        let tag = self as u8;
        tag >= 48 && tag < 56
    }

    #[inline]
    pub const fn is_error(self) -> bool {
        self as u8 >= 240
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
