//! `weft state`: decode a persisted resume-state integer.

use weft_lexer::{ResumeState, StateError};

use super::parse_state_number;

/// One-line description of the state `raw` encodes.
pub fn describe_state(raw: u32) -> Result<String, StateError> {
    let state = ResumeState::decode(raw)?;
    Ok(format!("{raw:#010x} {} {state:?}", state.language()))
}

/// Print the decoded state, or the decode error and exit 1.
pub fn state_command(arg: &str) {
    let Some(raw) = parse_state_number(arg) else {
        eprintln!("error: '{arg}' is not a decimal or 0x-prefixed hex number");
        std::process::exit(1);
    };
    match describe_state(raw) {
        Ok(line) => println!("{line}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
