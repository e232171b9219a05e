use weft_lexer::{ResumeState, ScriptState, TokenKind};

use super::{assert_single, assert_space_separated, lex};

const CODE: ResumeState = ResumeState::Script(ScriptState::Default);

// === Words ===

#[test]
fn boolean_literals() {
    assert_space_separated(TokenKind::LiteralBoolean, CODE, "true false");
}

#[test]
fn data_types() {
    assert_space_separated(
        TokenKind::DataType,
        CODE,
        "boolean byte char double float int long short",
    );
}

#[test]
fn functions() {
    assert_space_separated(
        TokenKind::Function,
        CODE,
        "eval parseInt parseFloat escape unescape isNaN isFinite",
    );
}

#[test]
fn keywords() {
    assert_space_separated(
        TokenKind::ReservedWord,
        CODE,
        "break case catch class const continue debugger default delete do else export \
         extends finally for function if import in instanceof let new super switch this \
         throw try typeof void while with NaN Infinity let",
    );
    assert_single(TokenKind::ReservedWord2, CODE, &["return"]);
}

// === Numbers ===

#[test]
fn decimal_literals() {
    assert_single(
        TokenKind::LiteralDecimalInt,
        CODE,
        &["0", "42", "0l", "42l", "0L", "42L"],
    );
}

#[test]
fn float_literals() {
    assert_single(
        TokenKind::LiteralFloat,
        CODE,
        &["1e17", "3.14159", "5.7e-8", "2f", "2d"],
    );

    let mut line = String::from("3.0 4.2 3.0 4.2 .111");
    for exp in ["", "e7", "E7", "e+7", "E+7", "e-7", "E-7"] {
        for mantissa in ["3", "3.", "3.0", ".111"] {
            for suffix in ["f", "F", "d", "D"] {
                line.push_str(&format!(" {mantissa}{exp}{suffix}"));
            }
        }
    }
    assert_space_separated(TokenKind::LiteralFloat, CODE, &line);
}

#[test]
fn hex_literals() {
    assert_space_separated(
        TokenKind::LiteralHexInt,
        CODE,
        "0x1 0xfe 0x333333333333 0X1 0Xfe 0X33333333333 0xFE 0XFE \
         0x1l 0xfel 0x333333333333l 0X1l 0Xfel 0X33333333333l 0xFEl 0XFEl \
         0x1L 0xfeL 0x333333333333L 0X1L 0XfeL 0X33333333333L 0xFEL 0XFEL",
    );
}

#[test]
fn malformed_numbers() {
    assert_single(TokenKind::ErrorNumber, CODE, &["42foo", "1e17foo", "0x1ffoo"]);
}

// === Operators and Separators ===

#[test]
fn operators() {
    assert_space_separated(
        TokenKind::Operator,
        CODE,
        "+ - <= ^ ++ < * >= % -- > / != ? >> ! & == : >> ~ && >>> \
         = -= *= /= |= &= ^= += %= <<= >>= >>>=",
    );
}

#[test]
fn separators() {
    assert_space_separated(TokenKind::Separator, CODE, "( ) [ ] { }");
    for (ch, token) in "()[]{}".chars().zip(lex("()[]{}", CODE)) {
        assert!(token.is_single_char(TokenKind::Separator, ch));
    }
}

#[test]
fn separators_rendered_as_identifiers() {
    assert_single(TokenKind::Identifier, CODE, &[";", ",", "."]);
}

#[test]
fn regexes() {
    assert_single(
        TokenKind::Regex,
        CODE,
        &["/foobar/", "/foobar/gim", r"/foo\/bar\/bas/g"],
    );
}

#[test]
fn whitespace() {
    assert_single(TokenKind::Whitespace, CODE, &[" ", "\t", "\x0C", "   \t   "]);
}

// === Comments ===

#[test]
fn eol_comments() {
    assert_single(TokenKind::CommentEol, CODE, &["// Hello world"]);
}

#[test]
fn multi_line_comments() {
    assert_single(TokenKind::CommentMultiline, CODE, &["/* Hello world */"]);
    assert_single(
        TokenKind::CommentMultiline,
        ResumeState::Script(ScriptState::Comment),
        &[" this is continued from a prior line */"],
    );
}

// === Quoted Literals ===

#[test]
fn char_literals() {
    assert_single(
        TokenKind::LiteralChar,
        CODE,
        &[
            "'a'",
            r"'\b'",
            r"'\t'",
            r"'\r'",
            r"'\f'",
            r"'\n'",
            r"'\u00fe'",
            r"'\u00FE'",
            r"'\111'",
            r"'\222'",
            r"'\333'",
            r"'\x77'",
            r"'\11'",
            r"'\22'",
            r"'\33'",
            r"'\1'",
            r"'My name is Robert and I \",
        ],
    );
}

#[test]
fn invalid_char_literals() {
    assert_single(
        TokenKind::ErrorChar,
        CODE,
        &[
            r"'\xG7'",
            r"'foo\ubar'",
            r"'\u00fg'",
            r"'My name is \ubar and I \",
            "'This is unterminated and ",
        ],
    );
}

#[test]
fn string_literals() {
    assert_single(
        TokenKind::LiteralStringDouble,
        CODE,
        &[
            "\"\"",
            "\"hi\"",
            r#""\x77""#,
            r#""\u00fe""#,
            r#""\"""#,
            r#""My name is Robert and I \"#,
        ],
    );
}

#[test]
fn invalid_string_literals() {
    assert_single(
        TokenKind::ErrorString,
        CODE,
        &[
            r#""\xG7""#,
            r#""foo\ubar""#,
            r#""\u00fg""#,
            r#""My name is \ubar and I \"#,
            "\"This is unterminated and ",
        ],
    );
}

// === Template Literals ===

#[test]
fn templates_without_interpolation() {
    assert_single(
        TokenKind::LiteralBackquote,
        CODE,
        &[
            "``",
            "`hi`",
            r"`\x77`",
            r"`\u00fe`",
            r#"`\"`"#,
            "`My name is Robert and I",
            r"`My name is Robert and I \",
        ],
    );
}

#[test]
fn invalid_templates() {
    assert_single(
        TokenKind::ErrorString,
        CODE,
        &[r"`\xG7`", r"`foo\ubar`", r"`\u00fg`", r"`My name is \ubar and I "],
    );
}

#[test]
fn templates_with_interpolation() {
    for line in [
        "`My name is ${name}`",
        r#"`My name is ${'"' + name + '"'}`"#,
        "`Embedded example: ${2 + ${!!func()}}, wow",
    ] {
        let tokens = lex(line, CODE);
        assert_eq!(tokens.len(), 3, "{line}: {tokens:?}");
        assert_eq!(tokens[0].kind, TokenKind::LiteralBackquote);
        assert_eq!(tokens[1].kind, TokenKind::Variable);
        assert!(tokens[1].text.starts_with("${") && tokens[1].text.ends_with('}'));
        assert_eq!(tokens[2].kind, TokenKind::LiteralBackquote);
    }
}

#[test]
fn template_continued_from_prior_line() {
    let tokens = lex(
        "and my name is ${name}`",
        ResumeState::Script(ScriptState::Template { valid: true }),
    );
    assert!(tokens[0].is(TokenKind::LiteralBackquote, "and my name is "));
    assert!(tokens[1].is(TokenKind::Variable, "${name}"));
    assert!(tokens[2].is_single_char(TokenKind::LiteralBackquote, '`'));
}
