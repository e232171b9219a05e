use weft_lexer::{
    HyperlinkScope, Lexer, LexerOptions, MarkupState, ResumeState, ScriptState, StyleContext,
    StyleState, TokenKind,
};

use super::lex;

const CODE: ResumeState = ResumeState::Script(ScriptState::Default);
const SELECTOR: ResumeState = ResumeState::Style(StyleState::Context(StyleContext::Selector));

/// `line` lexes as `prefix`, the link `url`, then `suffix`, all of `kind`.
#[track_caller]
fn assert_link_split(
    line: &str,
    state: ResumeState,
    kind: TokenKind,
    prefix: &str,
    url: &str,
    suffix: &str,
) {
    let tokens = lex(line, state);
    assert_eq!(tokens.len(), 3, "{line:?} gave {tokens:?}");
    assert!(tokens[0].is(kind, prefix), "prefix: {}", tokens[0]);
    assert!(!tokens[0].is_hyperlink());
    assert!(tokens[1].is(kind, url), "link: {}", tokens[1]);
    assert!(tokens[1].is_hyperlink());
    assert!(tokens[2].is(kind, suffix), "suffix: {}", tokens[2]);
    assert!(!tokens[2].is_hyperlink());
}

#[test]
fn markup_comment() {
    assert_link_split(
        "<!-- Hello world http://www.google.com -->",
        ResumeState::INITIAL,
        TokenKind::MarkupComment,
        "<!-- Hello world ",
        "http://www.google.com",
        " -->",
    );
}

#[test]
fn style_comments() {
    for url in [
        "file://test.txt",
        "ftp://ftp.google.com",
        "http://www.google.com",
        "https://www.google.com",
        "www.google.com",
    ] {
        assert_link_split(
            &format!("/* Hello world {url} */"),
            SELECTOR,
            TokenKind::CommentMultiline,
            "/* Hello world ",
            url,
            " */",
        );
    }
}

#[test]
fn script_eol_comment_keeps_empty_suffix() {
    assert_link_split(
        "// Hello world http://www.sas.com",
        CODE,
        TokenKind::CommentEol,
        "// Hello world ",
        "http://www.sas.com",
        "",
    );
    assert_link_split(
        "// Hello world http://www.sas.com extra",
        CODE,
        TokenKind::CommentEol,
        "// Hello world ",
        "http://www.sas.com",
        " extra",
    );
}

#[test]
fn script_block_comment() {
    assert_link_split(
        "/* Hello world http://www.sas.com */",
        CODE,
        TokenKind::CommentMultiline,
        "/* Hello world ",
        "http://www.sas.com",
        " */",
    );
}

#[test]
fn link_at_start_of_continued_comment() {
    let tokens = lex(
        "http://example.com/a -->",
        ResumeState::Markup(MarkupState::Comment),
    );
    assert_eq!(tokens.len(), 2);
    assert!(tokens[0].is_hyperlink());
    assert_eq!(tokens[0].text, "http://example.com/a");
    assert_eq!(tokens[1].text, " -->");
}

#[test]
fn strings_are_not_split_by_default() {
    let tokens = lex("\"see http://example.com\"", CODE);
    assert_eq!(tokens.len(), 1);
    assert!(!tokens[0].is_hyperlink());
}

#[test]
fn strings_split_when_enabled() {
    let lexer = Lexer::new(LexerOptions::default().with_hyperlinks(HyperlinkScope::CommentsAndStrings));
    let out = lexer.tokenize("\"see http://example.com\"", 0, CODE);
    let texts: Vec<&str> = out.tokens.iter().map(|t| t.text).collect();
    assert_eq!(texts, vec!["\"see ", "http://example.com", "\""]);
    assert!(out.tokens[1].is_hyperlink());
    assert!(out.tokens.iter().all(|t| t.kind == TokenKind::LiteralStringDouble));
}

#[test]
fn splitting_can_be_disabled() {
    let lexer = Lexer::new(LexerOptions::default().with_hyperlinks(HyperlinkScope::Off));
    let out = lexer.tokenize("// http://www.sas.com", 0, CODE);
    assert_eq!(out.tokens.len(), 1);
    assert!(!out.tokens[0].is_hyperlink());
}

#[test]
fn link_offsets_are_contiguous() {
    let out = weft_lexer::tokenize("x; // go to www.example.org now", 40, CODE);
    let mut expected = 40;
    for token in &out.tokens {
        assert_eq!(token.offset, expected, "{token}");
        expected = token.end();
    }
    assert_eq!(expected, 40 + "x; // go to www.example.org now".len());
}
