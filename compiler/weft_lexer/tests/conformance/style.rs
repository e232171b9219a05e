use pretty_assertions::assert_eq;
use weft_lexer::{ResumeState, StyleContext, StyleState, TokenKind};

use super::{assert_single, lex};

const SELECTOR: ResumeState = ResumeState::Style(StyleState::Context(StyleContext::Selector));
const KEY: ResumeState = ResumeState::Style(StyleState::Context(StyleContext::PropertyKey));
const VALUE: ResumeState = ResumeState::Style(StyleState::Context(StyleContext::PropertyValue));

fn pairs(line: &str, state: ResumeState) -> Vec<(TokenKind, &str)> {
    lex(line, state).iter().map(|t| (t.kind, t.text)).collect()
}

// === Selector Context ===

#[test]
fn at_rules() {
    assert_single(
        TokenKind::Regex,
        SELECTOR,
        &[
            "@charset",
            "@import",
            "@namespace",
            "@media",
            "@document",
            "@page",
            "@font-face",
            "@keyframes",
            "@viewport",
        ],
    );
}

#[test]
fn unknown_at_words_are_still_at_rules() {
    assert_single(TokenKind::Regex, SELECTOR, &["@something", "@something-else"]);
}

#[test]
fn double_slash_is_not_a_comment() {
    assert_single(TokenKind::Identifier, SELECTOR, &["//"]);
}

#[test]
fn chars() {
    assert_single(
        TokenKind::LiteralChar,
        SELECTOR,
        &["'Hello world'", r"'Hello \'world\''"],
    );
}

#[test]
fn char_continued_from_previous_line() {
    assert_single(
        TokenKind::LiteralChar,
        ResumeState::Style(StyleState::Char(StyleContext::Selector)),
        &["world'", r"and \'he\' said so'"],
    );
}

#[test]
fn strings() {
    assert_single(
        TokenKind::LiteralStringDouble,
        SELECTOR,
        &["\"Hello world\"", r#""Hello \"world\""#],
    );
}

#[test]
fn string_continued_from_previous_line() {
    assert_single(
        TokenKind::LiteralStringDouble,
        ResumeState::Style(StyleState::String(StyleContext::Selector)),
        &["world\"", r#"and \"he\" said so""#],
    );
}

#[test]
fn multi_line_comments() {
    assert_single(TokenKind::CommentMultiline, SELECTOR, &["/* Hello world */"]);
    assert_single(
        TokenKind::CommentMultiline,
        ResumeState::Style(StyleState::Comment(StyleContext::Selector)),
        &[" world */"],
    );
}

#[test]
fn id() {
    assert_single(TokenKind::Variable, SELECTOR, &["#mainContent"]);
}

#[test]
fn operators() {
    assert_single(TokenKind::Operator, SELECTOR, &["+", ">", "~", "^", "$", "|", "="]);
}

#[test]
fn separators() {
    assert_single(TokenKind::Separator, SELECTOR, &[";", "(", ")", "[", "]"]);
}

#[test]
fn selectors() {
    assert_single(
        TokenKind::DataType,
        SELECTOR,
        &["*", ".", ".foo", ".foo-bar", "foo", "-foo-bar", "foo-bar"],
    );
}

#[test]
fn pseudo_classes() {
    assert_single(
        TokenKind::ReservedWord,
        SELECTOR,
        &[
            ":root",
            ":nth-child",
            ":nth-last-child",
            ":nth-of-type",
            ":nth-last-of-type",
            ":first-child",
            ":last-child",
            ":first-of-type",
            ":last-of-type",
            ":only-child",
            ":only-of-type",
            ":empty",
            ":link",
            ":visited",
            ":active",
            ":hover",
            ":focus",
            ":target",
            ":lang",
            ":enabled",
            ":disabled",
            ":checked",
            "::first-line",
            "::first-letter",
            "::before",
            "::after",
            ":not",
        ],
    );
}

#[test]
fn simple_selector_rule() {
    assert_eq!(
        pairs("body { padding: 0; }", SELECTOR),
        vec![
            (TokenKind::DataType, "body"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Separator, "{"),
            (TokenKind::Whitespace, " "),
            (TokenKind::ReservedWord, "padding"),
            (TokenKind::Operator, ":"),
            (TokenKind::Whitespace, " "),
            (TokenKind::LiteralDecimalInt, "0"),
            (TokenKind::Operator, ";"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Separator, "}"),
        ]
    );
}

// === Property Names ===

#[test]
fn property_names() {
    assert_single(TokenKind::ReservedWord, KEY, &["*foo", "foo", "_", "*_", "foo9"]);
    assert_eq!(lex("foo9:bar", KEY)[0].text, "foo9");
}

#[test]
fn property_name_operators_and_separators() {
    assert_single(TokenKind::Operator, KEY, &[":"]);
    assert_single(TokenKind::Separator, KEY, &["{", "}"]);
    assert_single(TokenKind::CommentMultiline, KEY, &["/* Hello world*/"]);
}

// === Property Values ===

#[test]
fn value_literals() {
    assert_single(TokenKind::LiteralChar, VALUE, &["'foobar'"]);
    assert_single(TokenKind::LiteralStringDouble, VALUE, &["\"foobar\""]);
    assert_single(TokenKind::CommentMultiline, VALUE, &["/* Hello world*/"]);
}

#[test]
fn value_functions() {
    let tokens = lex("func(", VALUE);
    assert!(tokens[0].is(TokenKind::Function, "func"));
    assert!(tokens[1].is_single_char(TokenKind::Separator, '('));
}

#[test]
fn value_identifiers() {
    assert_single(TokenKind::Identifier, VALUE, &["foobar", ",", "."]);
}

#[test]
fn value_important() {
    assert_single(TokenKind::Preprocessor, VALUE, &["!important"]);
}

#[test]
fn value_numbers() {
    assert_single(
        TokenKind::LiteralDecimalInt,
        VALUE,
        &[
            "42", "42.", "42.3", "-42", "-42.", "-42.3", "4pt", "4pc", "4in", "4mm", "4cm",
            "4em", "4ex", "4px", "4ms", "4s", "4%", "#0", "#0A", "#0a", "#ff00ff",
        ],
    );
}

#[test]
fn value_operators_and_separators() {
    assert_single(TokenKind::Operator, VALUE, &[";"]);
    assert_single(TokenKind::Separator, VALUE, &[")", "}"]);
}

#[test]
fn url_function_values() {
    for (line, arg_kind, arg) in [
        (
            "background-image: url(\"test.png\");",
            TokenKind::LiteralStringDouble,
            "\"test.png\"",
        ),
        (
            "background-image: url('test.png');",
            TokenKind::LiteralChar,
            "'test.png'",
        ),
    ] {
        assert_eq!(
            pairs(line, KEY),
            vec![
                (TokenKind::ReservedWord, "background-image"),
                (TokenKind::Operator, ":"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Function, "url"),
                (TokenKind::Separator, "("),
                (arg_kind, arg),
                (TokenKind::Separator, ")"),
                (TokenKind::Operator, ";"),
            ]
        );
    }
}
