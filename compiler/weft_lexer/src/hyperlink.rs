//! URL detection inside comment and string tokens.
//!
//! Only the first URL in a token is found. The caller splits the token into
//! prefix, link and suffix around the returned range.

use std::ops::Range;

use memchr::memmem;

/// Prefixes that start a URL. `www.` needs no scheme.
const URL_STARTS: [&str; 5] = ["http://", "https://", "ftp://", "file://", "www."];

/// Byte range of the first URL in `text`.
///
/// A match must extend past its prefix: a bare `www.` or `http://` is
/// prose, and the search continues after it.
pub(crate) fn find_url(text: &str) -> Option<Range<usize>> {
    let bytes = text.as_bytes();
    let mut from = 0;
    loop {
        let (start, prefix_len) = URL_STARTS
            .iter()
            .filter_map(|prefix| {
                find_at_word_start(bytes, from, prefix.as_bytes()).map(|pos| (pos, prefix.len()))
            })
            .min()?;
        if let Some(end) = url_end(bytes, start, prefix_len) {
            return Some(start..end);
        }
        from = start + 1;
    }
}

/// End of the URL starting at `start`, or `None` if nothing but the prefix
/// survives trimming.
fn url_end(bytes: &[u8], start: usize, prefix_len: usize) -> Option<usize> {
    let tail = bytes.get(start..)?;
    let run = tail.iter().position(|&b| !is_url_byte(b)).unwrap_or(tail.len());

    // Trailing punctuation belongs to the surrounding prose.
    let end = tail[..run]
        .iter()
        .rposition(|&b| b.is_ascii_alphanumeric() || b == b'/' || b == b'$')
        .map(|last| start + last + 1)?;
    (end > start + prefix_len).then_some(end)
}

/// First occurrence of `needle` at or after `from` that is not glued to a
/// preceding letter or digit (`awww.x` is not a URL).
fn find_at_word_start(haystack: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    let rest = haystack.get(from..)?;
    memmem::find_iter(rest, needle)
        .map(|pos| from + pos)
        .find(|&pos| pos == 0 || !haystack[pos - 1].is_ascii_alphanumeric())
}

fn is_url_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'-' | b'.'
                | b'_'
                | b'~'
                | b':'
                | b'/'
                | b'?'
                | b'#'
                | b'['
                | b']'
                | b'@'
                | b'!'
                | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
                | b'%'
        )
}
