//! Script word classification.
//!
//! Case-sensitive, length-bucketed lookup: the word's length selects a
//! small `match` over the dictionary words of that length, so most
//! identifiers are rejected without a single string comparison.
//!
//! | Kind            | Words                                         |
//! |-----------------|-----------------------------------------------|
//! | `ReservedWord`  | declaration, control-flow and value keywords  |
//! | `ReservedWord2` | `return`                                      |
//! | `LiteralBoolean`| `true`, `false`                               |
//! | `DataType`      | primitive type names                          |
//! | `Function`      | global builtin functions                      |

use weft_lexer_core::TokenKind;

/// Classify a script word; plain identifiers map to `Identifier`.
#[inline]
pub(crate) fn classify(word: &str) -> TokenKind {
    lookup(word).unwrap_or(TokenKind::Identifier)
}

fn lookup(word: &str) -> Option<TokenKind> {
    use TokenKind::{DataType, Function, LiteralBoolean, ReservedWord, ReservedWord2};

    let len = word.len();
    // Every dictionary word is 2-10 ASCII letters.
    if !(2..=10).contains(&len) || !word.as_bytes()[0].is_ascii_alphabetic() {
        return None;
    }

    match len {
        2 => match word {
            "do" | "if" | "in" => Some(ReservedWord),
            _ => None,
        },
        3 => match word {
            "for" | "let" | "new" | "try" | "var" | "NaN" => Some(ReservedWord),
            "int" => Some(DataType),
            _ => None,
        },
        4 => match word {
            "case" | "else" | "null" | "this" | "void" | "with" => Some(ReservedWord),
            "byte" | "char" | "long" => Some(DataType),
            "true" => Some(LiteralBoolean),
            "eval" => Some(Function),
            _ => None,
        },
        5 => match word {
            "async" | "await" | "break" | "catch" | "class" | "const" | "super" | "throw"
            | "while" | "yield" => Some(ReservedWord),
            "float" | "short" => Some(DataType),
            "false" => Some(LiteralBoolean),
            "isNaN" => Some(Function),
            _ => None,
        },
        6 => match word {
            "delete" | "export" | "import" | "static" | "switch" | "typeof" => {
                Some(ReservedWord)
            }
            "return" => Some(ReservedWord2),
            "double" => Some(DataType),
            "escape" => Some(Function),
            _ => None,
        },
        7 => match word {
            "default" | "extends" | "finally" => Some(ReservedWord),
            "boolean" => Some(DataType),
            _ => None,
        },
        8 => match word {
            "continue" | "debugger" | "function" | "Infinity" => Some(ReservedWord),
            "isFinite" | "parseInt" | "unescape" => Some(Function),
            _ => None,
        },
        9 => match word {
            "undefined" => Some(ReservedWord),
            _ => None,
        },
        10 => match word {
            "instanceof" => Some(ReservedWord),
            "parseFloat" => Some(Function),
            _ => None,
        },
        _ => None,
    }
}
