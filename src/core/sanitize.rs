// src/core/sanitize.rs

/// Split on runs of whitespace, the way a `\s+` separator does: a leading or
/// trailing run still produces one empty token at that end.
///
/// `""` → `[""]`, `" a  b "` → `["", "a", "b", ""]`.
pub fn split_ws_runs(s: &str) -> impl Iterator<Item = &str> {
    let last = s.split(char::is_whitespace).count() - 1;
    s.split(char::is_whitespace)
        .enumerate()
        .filter(move |&(i, tok)| !tok.is_empty() || i == 0 || i == last)
        .map(|(_, tok)| tok)
}
