//! Markup element dictionary.
//!
//! Names are matched case-insensitively. Unknown names still lex as tag
//! names; the dictionary only decides the `UNRECOGNIZED` flag and the
//! script/style hand-off.

use weft_lexer_core::TagKind;

use crate::dictionary::contains_ignore_case;

/// Known element names, lowercase and sorted for binary search.
static ELEMENTS: &[&str] = &[
    "a", "abbr", "acronym", "address", "applet", "area", "article", "aside", "audio", "b",
    "base", "basefont", "bdi", "bdo", "bgsound", "big", "blink", "blockquote", "body", "br",
    "button", "canvas", "caption", "center", "cite", "code", "col", "colgroup", "command",
    "comment", "data", "datagrid", "datalist", "datatemplate", "dd", "del", "details", "dfn",
    "dialog", "dir", "div", "dl", "dt", "em", "embed", "eventsource", "fieldset", "figcaption",
    "figure", "font", "footer", "form", "frame", "frameset", "h1", "h2", "h3", "h4", "h5", "h6",
    "head", "header", "hgroup", "hr", "html", "i", "iframe", "ilayer", "img", "input", "ins",
    "isindex", "kbd", "keygen", "label", "layer", "legend", "li", "link", "main", "map", "mark",
    "marquee", "menu", "meta", "meter", "multicol", "nav", "nest", "nobr", "noembed", "noframes",
    "nolayer", "noscript", "object", "ol", "optgroup", "option", "output", "p", "param",
    "picture", "plaintext", "pre", "progress", "q", "rp", "rt", "ruby", "rule", "s", "samp",
    "script", "search", "section", "select", "server", "slot", "small", "source", "spacer",
    "span", "strike", "strong", "style", "sub", "summary", "sup", "svg", "table", "tbody", "td",
    "template", "textarea", "tfoot", "th", "thead", "time", "title", "tr", "track", "tt", "u",
    "ul", "var", "video", "wbr",
];

/// Returns `true` if `name` is a known element, in any letter case.
pub(crate) fn is_known(name: &str) -> bool {
    contains_ignore_case(ELEMENTS, name)
}

/// Whether a start tag named `name` hands off to an embedded grammar.
pub(crate) fn tag_kind(name: &str) -> TagKind {
    if name.eq_ignore_ascii_case("script") {
        TagKind::Script
    } else if name.eq_ignore_ascii_case("style") {
        TagKind::Style
    } else {
        TagKind::Plain
    }
}
