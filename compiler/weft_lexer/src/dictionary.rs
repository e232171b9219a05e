//! Case-insensitive lookups in the static sorted word tables.

use std::cmp::Ordering;

/// Compare a lowercase table entry with `name`, folding `name` to ASCII
/// lowercase. Tables sorted by byte value stay sorted under this order.
pub(crate) fn cmp_lowercase(known: &str, name: &str) -> Ordering {
    known
        .bytes()
        .cmp(name.bytes().map(|b| b.to_ascii_lowercase()))
}

/// Whether the sorted lowercase `table` holds `name` in any letter case.
pub(crate) fn contains_ignore_case(table: &[&str], name: &str) -> bool {
    table
        .binary_search_by(|known| cmp_lowercase(known, name))
        .is_ok()
}
