//! `weft lex`: dump the token stream of a file line by line.

use std::fmt::Write as _;

use weft_lexer::{HyperlinkScope, Lexer, LexerOptions, ResumeState};

use super::{parse_state_number, read_file};

/// Options for `weft lex`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub lexer: LexerOptions,
    /// State the first line starts in.
    pub start_state: ResumeState,
}

/// Parse the flags that follow the file path.
///
/// Returns a message naming the offending flag on failure.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, String> {
    let mut options = LexOptions::default();
    for arg in args {
        if arg == "--no-links" {
            options.lexer = options.lexer.with_hyperlinks(HyperlinkScope::Off);
        } else if arg == "--links=strings" {
            options.lexer = options
                .lexer
                .with_hyperlinks(HyperlinkScope::CommentsAndStrings);
        } else if arg == "--links=comments" {
            options.lexer = options.lexer.with_hyperlinks(HyperlinkScope::Comments);
        } else if let Some(text) = arg.strip_prefix("--state=") {
            let Some(raw) = parse_state_number(text) else {
                return Err(format!("invalid state number '{text}'"));
            };
            options.start_state = ResumeState::decode(raw).map_err(|e| e.to_string())?;
        } else {
            return Err(format!("unknown option '{arg}'"));
        }
    }
    Ok(options)
}

/// Render every token of `src`, one per output line, followed by each
/// line's end state.
///
/// Line terminators (`\n`, `\r\n`) are not part of any token but do count
/// toward document offsets.
pub fn render_tokens(src: &str, options: &LexOptions) -> String {
    let lexer = Lexer::new(options.lexer);
    let mut out = String::new();
    let mut state = options.start_state;
    let mut offset = 0;
    for (index, raw) in src.split_inclusive('\n').enumerate() {
        let line_no = index + 1;
        let line = raw.trim_end_matches(['\n', '\r']);
        let result = lexer.tokenize(line, offset, state);
        for token in &result.tokens {
            let _ = writeln!(out, "{line_no}:{token}");
        }
        state = result.end_state;
        let _ = writeln!(out, "{line_no}: end {:#010x} {state:?}", state.encode());
        offset += raw.len();
    }
    out
}

/// Lex a file and print its token stream.
pub fn lex_file(path: &str, options: &LexOptions) {
    let content = read_file(path);
    tracing::debug!(path, bytes = content.len(), "lexing file");
    print!("{}", render_tokens(&content, options));
}
