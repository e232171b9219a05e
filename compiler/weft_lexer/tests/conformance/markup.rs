use pretty_assertions::assert_eq;
use weft_lexer::{MarkupState, ResumeState, TokenKind};

use super::{assert_single, lex};

const MARKUP: ResumeState = ResumeState::INITIAL;

#[test]
fn comments() {
    assert_single(TokenKind::MarkupComment, MARKUP, &["<!-- Hello world -->", "<!---->"]);
}

#[test]
fn comment_continued_from_previous_line() {
    assert_single(
        TokenKind::MarkupComment,
        ResumeState::Markup(MarkupState::Comment),
        &["continued -->", "-->"],
    );
}

#[test]
fn doctypes() {
    assert_single(
        TokenKind::MarkupDtd,
        MARKUP,
        &[
            "<!doctype html>",
            "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\" \"http://www.w3.org/TR/html4/loose.dtd\">",
            "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">",
        ],
    );
}

#[test]
fn processing_instructions() {
    assert_single(
        TokenKind::MarkupProcessingInstruction,
        MARKUP,
        &[
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>",
            "<?xml version='1.0' encoding='UTF-8' ?>",
            "<?xml-stylesheet type=\"text/css\" href=\"style.css\"?>",
        ],
    );
}

#[test]
fn entity_references() {
    assert_single(
        TokenKind::MarkupEntityReference,
        MARKUP,
        &["&nbsp;", "&lt;", "&gt;", "&#4012"],
    );
}

#[test]
fn lone_identifiers() {
    assert_single(TokenKind::Identifier, MARKUP, &["foo", "123"]);
}

#[test]
fn tag_with_attributes() {
    let tokens = lex(r#"<body onload="doSomething()" data-extra='true'>"#, MARKUP);
    let expected = [
        (TokenKind::MarkupTagDelimiter, "<"),
        (TokenKind::MarkupTagName, "body"),
        (TokenKind::Whitespace, " "),
        (TokenKind::MarkupTagAttribute, "onload"),
        (TokenKind::Operator, "="),
        (TokenKind::MarkupTagAttributeValue, "\"doSomething()\""),
        (TokenKind::Whitespace, " "),
        (TokenKind::MarkupTagAttribute, "data-extra"),
        (TokenKind::Operator, "="),
        (TokenKind::MarkupTagAttributeValue, "'true'"),
        (TokenKind::MarkupTagDelimiter, ">"),
    ];
    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, text)) in tokens.iter().zip(expected) {
        assert!(token.is(kind, text), "expected {kind} {text:?}, got {token}");
    }
}

#[test]
fn closed_tag() {
    let tokens = lex("<img src='foo.png'/>", MARKUP);
    assert!(tokens[0].is_single_char(TokenKind::MarkupTagDelimiter, '<'));
    assert!(tokens[1].is(TokenKind::MarkupTagName, "img"));
    assert!(tokens[5].is(TokenKind::MarkupTagAttributeValue, "'foo.png'"));
    assert!(tokens[6].is(TokenKind::MarkupTagDelimiter, "/>"));
}

#[test]
fn closing_tag() {
    let tokens = lex("</body>", MARKUP);
    assert!(tokens[0].is(TokenKind::MarkupTagDelimiter, "</"));
    assert!(tokens[1].is(TokenKind::MarkupTagName, "body"));
    assert!(tokens[2].is_single_char(TokenKind::MarkupTagDelimiter, '>'));
}

#[test]
fn known_tag_names() {
    let names = [
        "a", "abbr", "acronym", "address", "applet", "area", "article", "aside", "audio", "b",
        "base", "basefont", "bdo", "bgsound", "big", "blink", "blockquote", "body", "br",
        "button", "canvas", "caption", "center", "cite", "code", "col", "colgroup", "command",
        "comment", "dd", "datagrid", "datalist", "datatemplate", "del", "details", "dfn",
        "dialog", "dir", "div", "dl", "dt", "em", "embed", "eventsource", "fieldset", "figure",
        "font", "footer", "form", "frame", "frameset", "h1", "h2", "h3", "h4", "h5", "h6",
        "head", "header", "hr", "html", "i", "iframe", "ilayer", "img", "input", "ins",
        "isindex", "kbd", "keygen", "label", "layer", "legend", "li", "link", "map", "mark",
        "marquee", "menu", "meta", "meter", "multicol", "nav", "nest", "nobr", "noembed",
        "noframes", "nolayer", "noscript", "object", "ol", "optgroup", "option", "output", "p",
        "param", "plaintext", "pre", "progress", "q", "rule", "s", "samp", "script", "section",
        "select", "server", "small", "source", "spacer", "span", "strike", "strong", "style",
        "sub", "sup", "table", "tbody", "td", "textarea", "tfoot", "th", "thead", "time",
        "title", "tr", "tt", "u", "ul", "var", "video",
    ];
    for name in names {
        for spelled in [name.to_owned(), name.to_ascii_uppercase()] {
            let line = format!("<{spelled}");
            let tokens = lex(&line, MARKUP);
            assert!(
                tokens[1].is(TokenKind::MarkupTagName, &spelled),
                "not a tag name: {}",
                tokens[1]
            );
            assert!(!tokens[1].flags.is_unrecognized(), "{spelled} flagged unknown");
        }
    }
}

#[test]
fn script_block_on_one_line() {
    let out = weft_lexer::tokenize("<script>var x = 1;</script>", 0, MARKUP);
    let kinds: Vec<TokenKind> = out.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::MarkupTagDelimiter,
            TokenKind::MarkupTagName,
            TokenKind::MarkupTagDelimiter,
            TokenKind::ReservedWord,
            TokenKind::Whitespace,
            TokenKind::Identifier,
            TokenKind::Whitespace,
            TokenKind::Operator,
            TokenKind::Whitespace,
            TokenKind::LiteralDecimalInt,
            TokenKind::Identifier,
            TokenKind::MarkupTagDelimiter,
            TokenKind::MarkupTagName,
            TokenKind::MarkupTagDelimiter,
        ]
    );
    assert_eq!(out.end_state, ResumeState::INITIAL);
}

#[test]
fn offsets_are_document_relative() {
    let out = weft_lexer::tokenize("<p>hi", 100, MARKUP);
    let offsets: Vec<usize> = out.tokens.iter().map(|t| t.offset).collect();
    assert_eq!(offsets, vec![100, 101, 102, 103]);
}

#[test]
fn empty_line_keeps_state() {
    for state in [
        ResumeState::INITIAL,
        ResumeState::Markup(MarkupState::Comment),
        ResumeState::Markup(MarkupState::Doctype),
    ] {
        let out = weft_lexer::tokenize("", 7, state);
        assert!(out.tokens.is_empty());
        assert_eq!(out.end_state, state);
    }
}
