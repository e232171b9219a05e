//! Resume state: everything the tokenizer needs to continue on the next line.
//!
//! The state is a closed tagged union, one sub-state enum per grammar, so
//! every scanner can match it exhaustively. Each sub-state is
//! self-describing: literal and comment states record the context they
//! return to, and template interpolation records its brace depth.
//!
//! # Integer encoding
//!
//! ```text
//!  31            16 15          8 7            0
//! +----------------+-------------+--------------+
//! |    reserved    |     aux     |     code     |
//! +----------------+-------------+--------------+
//! ```
//!
//! `code` identifies the sub-state. Each grammar owns a disjoint range, with
//! room left for future sub-states:
//!
//! | Range     | Grammar |
//! |-----------|---------|
//! | `0..64`   | markup  |
//! | `64..128` | style   |
//! | `128..192`| script  |
//!
//! `aux` holds the interpolation depth and must be zero for every other
//! sub-state. Reserved bits must be zero. The integer `0` is the initial
//! state, markup default.

use crate::Language;

/// Deepest template interpolation nesting the state can record.
///
/// Deeper nesting saturates: the depth stops growing and the interpolation
/// may close early on such a line, which is the documented limit.
pub const MAX_NEST_DEPTH: u8 = u8::MAX;

const CODE_MASK: u32 = 0xFF;
const AUX_SHIFT: u32 = 8;
const AUX_MASK: u32 = 0xFF;

const STYLE_BASE: u8 = 64;
const SCRIPT_BASE: u8 = 128;

// ─── Sub-States ─────────────────────────────────────────────────────

/// Which element a pending tag belongs to.
///
/// `Script` and `Style` tags hand off to the embedded grammar when their
/// `>` is reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
    Plain,
    Script,
    Style,
}

impl TagKind {
    const ALL: [TagKind; 3] = [Self::Plain, Self::Script, Self::Style];

    const fn offset(self) -> u8 {
        match self {
            Self::Plain => 0,
            Self::Script => 1,
            Self::Style => 2,
        }
    }
}

/// Host grammar sub-states.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MarkupState {
    /// Text content.
    #[default]
    Default,
    /// Inside a start tag, between attributes.
    Tag(TagKind),
    /// Inside an end tag (`</name ...`).
    ClosingTag,
    /// Inside a double-quoted attribute value.
    AttrDouble(TagKind),
    /// Inside a single-quoted attribute value.
    AttrSingle(TagKind),
    /// Inside `<!-- ... -->`.
    Comment,
    /// Inside `<! ... >`.
    Doctype,
    /// Inside `<? ... ?>`.
    ProcessingInstruction,
}

/// What follows an at-rule's `{`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AtRuleBody {
    /// Nested rule sets (`@media`, `@supports`, ...).
    Rules,
    /// Declarations directly (`@font-face`, `@page`, ...).
    Declarations,
}

/// Style grammar code context.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StyleContext {
    /// Outside any block: selectors.
    #[default]
    Selector,
    /// Between an at-rule keyword and its `;` or `{`.
    AtRule(AtRuleBody),
    /// Inside a block, left of `:`.
    PropertyKey,
    /// Inside a block, right of `:`.
    PropertyValue,
}

impl StyleContext {
    const ALL: [StyleContext; 5] = [
        Self::Selector,
        Self::AtRule(AtRuleBody::Rules),
        Self::AtRule(AtRuleBody::Declarations),
        Self::PropertyKey,
        Self::PropertyValue,
    ];

    const fn index(self) -> u8 {
        match self {
            Self::Selector => 0,
            Self::AtRule(AtRuleBody::Rules) => 1,
            Self::AtRule(AtRuleBody::Declarations) => 2,
            Self::PropertyKey => 3,
            Self::PropertyValue => 4,
        }
    }

    const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Selector),
            1 => Some(Self::AtRule(AtRuleBody::Rules)),
            2 => Some(Self::AtRule(AtRuleBody::Declarations)),
            3 => Some(Self::PropertyKey),
            4 => Some(Self::PropertyValue),
            _ => None,
        }
    }
}

/// Style grammar sub-states.
///
/// Comments and literals carry the context to return to once they close.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleState {
    Context(StyleContext),
    /// Inside `/* ... */`.
    Comment(StyleContext),
    /// Inside a double-quoted string.
    String(StyleContext),
    /// Inside a single-quoted string.
    Char(StyleContext),
}

impl Default for StyleState {
    fn default() -> Self {
        Self::Context(StyleContext::Selector)
    }
}

impl StyleState {
    /// Width of one context block in the code space.
    const STRIDE: u8 = 8;

    /// The code context this state belongs to.
    pub const fn context(self) -> StyleContext {
        match self {
            Self::Context(ctx) | Self::Comment(ctx) | Self::String(ctx) | Self::Char(ctx) => ctx,
        }
    }

    const fn kind_index(self) -> u8 {
        match self {
            Self::Context(_) => 0,
            Self::Comment(_) => 1,
            Self::String(_) => 2,
            Self::Char(_) => 3,
        }
    }
}

/// Script grammar sub-states.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScriptState {
    #[default]
    Default,
    /// Inside `/* ... */`.
    Comment,
    /// Double-quoted literal continued with a trailing backslash.
    /// `valid` is false once the literal has seen a malformed escape.
    DoubleQuote { valid: bool },
    /// Single-quoted literal continued with a trailing backslash.
    SingleQuote { valid: bool },
    /// Plain template text.
    Template { valid: bool },
    /// Inside `${ ... }` with `depth` unclosed braces, always at least 1.
    Interpolation { depth: u8 },
}

// ─── ResumeState ────────────────────────────────────────────────────

/// The state carried from the end of one line to the start of the next.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResumeState {
    Markup(MarkupState),
    Style(StyleState),
    Script(ScriptState),
}

impl Default for ResumeState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Failure to decode an integer into a [`ResumeState`].
///
/// Only integers that did not come from [`ResumeState::encode`] fail.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("resume state {raw:#x}: unknown sub-state code {code}")]
    UnknownSubState { raw: u32, code: u8 },
    #[error("resume state {raw:#x}: bits set outside the sub-state's fields")]
    UnexpectedAux { raw: u32 },
    #[error("resume state {raw:#x}: interpolation depth is zero")]
    ZeroDepth { raw: u32 },
}

impl ResumeState {
    /// Markup text content; the state of the first line.
    pub const INITIAL: ResumeState = ResumeState::Markup(MarkupState::Default);

    /// Grammar that owns this state.
    pub const fn language(self) -> Language {
        match self {
            Self::Markup(_) => Language::Markup,
            Self::Style(_) => Language::Style,
            Self::Script(_) => Language::Script,
        }
    }

    /// Pack into the integer form.
    pub const fn encode(self) -> u32 {
        let (code, aux) = match self {
            Self::Markup(state) => (encode_markup(state), 0),
            Self::Style(state) => (
                STYLE_BASE + state.kind_index() * StyleState::STRIDE + state.context().index(),
                0,
            ),
            Self::Script(state) => encode_script(state),
        };
        (code as u32) | ((aux as u32) << AUX_SHIFT)
    }

    /// Unpack the integer form.
    pub fn decode(raw: u32) -> Result<Self, StateError> {
        let code = (raw & CODE_MASK) as u8;
        let aux = ((raw >> AUX_SHIFT) & AUX_MASK) as u8;
        let reserved = raw >> (AUX_SHIFT + 8);
        if reserved != 0 {
            return Err(StateError::UnexpectedAux { raw });
        }
        let unknown = StateError::UnknownSubState { raw, code };

        let state = match code {
            0..STYLE_BASE => Self::Markup(decode_markup(code).ok_or(unknown)?),
            STYLE_BASE..SCRIPT_BASE => {
                let offset = code - STYLE_BASE;
                let ctx =
                    StyleContext::from_index(offset % StyleState::STRIDE).ok_or(unknown)?;
                Self::Style(match offset / StyleState::STRIDE {
                    0 => StyleState::Context(ctx),
                    1 => StyleState::Comment(ctx),
                    2 => StyleState::String(ctx),
                    3 => StyleState::Char(ctx),
                    _ => return Err(unknown),
                })
            }
            _ => Self::Script(decode_script(code, aux, raw)?),
        };

        let uses_aux = matches!(state, Self::Script(ScriptState::Interpolation { .. }));
        if aux != 0 && !uses_aux {
            return Err(StateError::UnexpectedAux { raw });
        }
        Ok(state)
    }

    /// Every state the tokenizer can produce, except that interpolation
    /// appears once per possible depth.
    pub fn all() -> impl Iterator<Item = ResumeState> {
        let markup = (0..=MARKUP_LAST).filter_map(decode_markup).map(Self::Markup);
        let style = [
            StyleState::Context as fn(StyleContext) -> StyleState,
            StyleState::Comment,
            StyleState::String,
            StyleState::Char,
        ]
        .into_iter()
        .flat_map(|make| StyleContext::ALL.into_iter().map(move |ctx| Self::Style(make(ctx))));
        let script = [
            ScriptState::Default,
            ScriptState::Comment,
            ScriptState::DoubleQuote { valid: true },
            ScriptState::DoubleQuote { valid: false },
            ScriptState::SingleQuote { valid: true },
            ScriptState::SingleQuote { valid: false },
            ScriptState::Template { valid: true },
            ScriptState::Template { valid: false },
        ]
        .into_iter()
        .chain((1..=MAX_NEST_DEPTH).map(|depth| ScriptState::Interpolation { depth }))
        .map(Self::Script);
        markup.chain(style).chain(script)
    }
}

impl From<ResumeState> for u32 {
    fn from(state: ResumeState) -> Self {
        state.encode()
    }
}

impl TryFrom<u32> for ResumeState {
    type Error = StateError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::decode(raw)
    }
}

// ─── Per-Grammar Codes ──────────────────────────────────────────────

const MARKUP_TAG: u8 = 1;
const MARKUP_CLOSING_TAG: u8 = 4;
const MARKUP_ATTR_DOUBLE: u8 = 5;
const MARKUP_ATTR_SINGLE: u8 = 8;
const MARKUP_COMMENT: u8 = 11;
const MARKUP_DOCTYPE: u8 = 12;
const MARKUP_PI: u8 = 13;
const MARKUP_LAST: u8 = MARKUP_PI;

const fn encode_markup(state: MarkupState) -> u8 {
    match state {
        MarkupState::Default => 0,
        MarkupState::Tag(kind) => MARKUP_TAG + kind.offset(),
        MarkupState::ClosingTag => MARKUP_CLOSING_TAG,
        MarkupState::AttrDouble(kind) => MARKUP_ATTR_DOUBLE + kind.offset(),
        MarkupState::AttrSingle(kind) => MARKUP_ATTR_SINGLE + kind.offset(),
        MarkupState::Comment => MARKUP_COMMENT,
        MarkupState::Doctype => MARKUP_DOCTYPE,
        MarkupState::ProcessingInstruction => MARKUP_PI,
    }
}

fn decode_markup(code: u8) -> Option<MarkupState> {
    let tag_kind = |base: u8| TagKind::ALL.get(usize::from(code - base)).copied();
    match code {
        0 => Some(MarkupState::Default),
        MARKUP_TAG..MARKUP_CLOSING_TAG => tag_kind(MARKUP_TAG).map(MarkupState::Tag),
        MARKUP_CLOSING_TAG => Some(MarkupState::ClosingTag),
        MARKUP_ATTR_DOUBLE..MARKUP_ATTR_SINGLE => {
            tag_kind(MARKUP_ATTR_DOUBLE).map(MarkupState::AttrDouble)
        }
        MARKUP_ATTR_SINGLE..MARKUP_COMMENT => {
            tag_kind(MARKUP_ATTR_SINGLE).map(MarkupState::AttrSingle)
        }
        MARKUP_COMMENT => Some(MarkupState::Comment),
        MARKUP_DOCTYPE => Some(MarkupState::Doctype),
        MARKUP_PI => Some(MarkupState::ProcessingInstruction),
        _ => None,
    }
}

const SCRIPT_COMMENT: u8 = SCRIPT_BASE + 1;
const SCRIPT_DOUBLE: u8 = SCRIPT_BASE + 2;
const SCRIPT_SINGLE: u8 = SCRIPT_BASE + 4;
const SCRIPT_TEMPLATE: u8 = SCRIPT_BASE + 6;
const SCRIPT_INTERPOLATION: u8 = SCRIPT_BASE + 8;

/// Literal states take two codes: valid, then invalid.
const fn validity_offset(valid: bool) -> u8 {
    if valid {
        0
    } else {
        1
    }
}

const fn encode_script(state: ScriptState) -> (u8, u8) {
    match state {
        ScriptState::Default => (SCRIPT_BASE, 0),
        ScriptState::Comment => (SCRIPT_COMMENT, 0),
        ScriptState::DoubleQuote { valid } => (SCRIPT_DOUBLE + validity_offset(valid), 0),
        ScriptState::SingleQuote { valid } => (SCRIPT_SINGLE + validity_offset(valid), 0),
        ScriptState::Template { valid } => (SCRIPT_TEMPLATE + validity_offset(valid), 0),
        ScriptState::Interpolation { depth } => (SCRIPT_INTERPOLATION, depth),
    }
}

fn decode_script(code: u8, aux: u8, raw: u32) -> Result<ScriptState, StateError> {
    let valid = (code - SCRIPT_BASE) % 2 == 0;
    Ok(match code {
        SCRIPT_BASE => ScriptState::Default,
        SCRIPT_COMMENT => ScriptState::Comment,
        SCRIPT_DOUBLE..SCRIPT_SINGLE => ScriptState::DoubleQuote { valid },
        SCRIPT_SINGLE..SCRIPT_TEMPLATE => ScriptState::SingleQuote { valid },
        SCRIPT_TEMPLATE..SCRIPT_INTERPOLATION => ScriptState::Template { valid },
        SCRIPT_INTERPOLATION => {
            if aux == 0 {
                return Err(StateError::ZeroDepth { raw });
            }
            ScriptState::Interpolation { depth: aux }
        }
        _ => return Err(StateError::UnknownSubState { raw, code }),
    })
}
