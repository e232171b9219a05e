//! Command handlers for the `weft` CLI.
//!
//! Each submodule implements one command. Shared argument helpers and
//! `read_file` live here.

mod lex;
mod state;

pub use lex::{lex_file, parse_lex_options, render_tokens, LexOptions};
pub use state::{describe_state, state_command};

/// Parse a resume-state integer written in decimal or as `0x` hex.
pub fn parse_state_number(text: &str) -> Option<u32> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

/// Read a file or exit with a one-line message.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
