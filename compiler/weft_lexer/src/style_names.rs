//! Style sheet dictionaries: pseudo-classes and pseudo-elements, at-rules,
//! and length/time units. All lookups ignore ASCII case.

use weft_lexer_core::AtRuleBody;

use crate::dictionary::{cmp_lowercase, contains_ignore_case};

/// Pseudo-class and pseudo-element names, without colons. Sorted.
static PSEUDOS: &[&str] = &[
    "active",
    "after",
    "any-link",
    "before",
    "checked",
    "default",
    "defined",
    "disabled",
    "empty",
    "enabled",
    "first",
    "first-child",
    "first-letter",
    "first-line",
    "first-of-type",
    "focus",
    "focus-visible",
    "focus-within",
    "fullscreen",
    "has",
    "hover",
    "in-range",
    "indeterminate",
    "invalid",
    "is",
    "lang",
    "last-child",
    "last-of-type",
    "left",
    "link",
    "marker",
    "not",
    "nth-child",
    "nth-last-child",
    "nth-last-of-type",
    "nth-of-type",
    "only-child",
    "only-of-type",
    "optional",
    "out-of-range",
    "placeholder",
    "read-only",
    "read-write",
    "required",
    "right",
    "root",
    "selection",
    "target",
    "valid",
    "visited",
    "where",
];

/// At-rule names, without `@`, with the kind of block they open. Sorted.
static AT_RULES: &[(&str, AtRuleBody)] = &[
    ("charset", AtRuleBody::Rules),
    ("container", AtRuleBody::Rules),
    ("counter-style", AtRuleBody::Declarations),
    ("document", AtRuleBody::Rules),
    ("font-face", AtRuleBody::Declarations),
    ("font-feature-values", AtRuleBody::Rules),
    ("import", AtRuleBody::Rules),
    ("keyframes", AtRuleBody::Rules),
    ("layer", AtRuleBody::Rules),
    ("media", AtRuleBody::Rules),
    ("namespace", AtRuleBody::Rules),
    ("page", AtRuleBody::Declarations),
    ("property", AtRuleBody::Declarations),
    ("supports", AtRuleBody::Rules),
    ("viewport", AtRuleBody::Declarations),
];

/// Unit suffixes that stay part of a number token. Sorted.
static UNITS: &[&str] = &[
    "ch", "cm", "deg", "dpi", "dppx", "em", "ex", "fr", "hz", "in", "khz", "mm", "ms", "pc",
    "pt", "px", "rad", "rem", "s", "turn", "vh", "vmax", "vmin", "vw",
];

/// `name` is the text after `:` or `::`.
pub(crate) fn is_pseudo(name: &str) -> bool {
    contains_ignore_case(PSEUDOS, name)
}

/// Block kind of a known at-rule; `None` for unknown names.
///
/// Unknown at-rules are assumed to open nested rules.
pub(crate) fn at_rule(name: &str) -> Option<AtRuleBody> {
    AT_RULES
        .binary_search_by(|(known, _)| cmp_lowercase(known, name))
        .ok()
        .map(|idx| AT_RULES[idx].1)
}

pub(crate) fn is_unit(suffix: &str) -> bool {
    contains_ignore_case(UNITS, suffix)
}
