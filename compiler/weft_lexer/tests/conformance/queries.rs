use weft_lexer::language::{
    by_index, curly_braces_denote_code_blocks, is_identifier_char, line_comment_delimiters,
    line_comment_start,
};
use weft_lexer::Language;

#[test]
fn comment_delimiters() {
    assert_eq!(line_comment_delimiters(Language::Markup), Some(("<!--", "-->")));
    assert_eq!(line_comment_delimiters(Language::Style), Some(("/*", "*/")));
    assert_eq!(line_comment_start(Language::Script), Some("//"));
    assert_eq!(line_comment_start(Language::Markup), None);
}

#[test]
fn braces_fold_only_in_embedded_grammars() {
    assert!(!curly_braces_denote_code_blocks(Language::Markup));
    assert!(curly_braces_denote_code_blocks(Language::Style));
    assert!(curly_braces_denote_code_blocks(Language::Script));
}

#[test]
fn style_identifier_chars() {
    for ch in ('A'..='Z').chain('a'..='z') {
        assert!(is_identifier_char(Language::Style, ch), "{ch}");
    }
    for ch in ['-', '_', '.'] {
        assert!(is_identifier_char(Language::Style, ch), "{ch}");
    }
    assert!(!is_identifier_char(Language::Style, ' '));
}

#[test]
fn index_forms_agree() {
    for language in Language::ALL {
        let index = language.index();
        assert_eq!(
            by_index::line_comment_delimiters(index),
            line_comment_delimiters(language)
        );
        assert_eq!(
            by_index::curly_braces_denote_code_blocks(index),
            curly_braces_denote_code_blocks(language)
        );
        assert_eq!(
            by_index::is_identifier_char(index, '$'),
            is_identifier_char(language, '$')
        );
    }
    assert_eq!(by_index::line_comment_delimiters(3), None);
    assert!(!by_index::curly_braces_denote_code_blocks(3));
}
