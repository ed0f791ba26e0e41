// src/core/html.rs
// Markup → preview text. Not an HTML parser: a tag is `<` up to the next `>`.

use crate::config::consts::ELLIPSIS;

use super::sanitize::split_ws_runs;

/// Replace every tag with a single space.
///
/// A `<` with no closing `>` after it, and a `>` outside any tag, are both
/// turned into spaces as well, so the output never contains angle brackets.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(i) = rest.find(['<', '>']) {
        out.push_str(&rest[..i]);
        out.push(' ');
        let tail = &rest[i + 1..];
        rest = match (rest.as_bytes()[i], tail.find('>')) {
            (b'<', Some(close)) => &tail[close + 1..],
            _ => tail,
        };
    }
    out.push_str(rest);
    out
}

/// First `count` tokens of the visible text, joined by single spaces and
/// followed by `...`.
///
/// Tokens come from [`split_ws_runs`], so a tag at either end of the chunk
/// yields an empty token that counts toward `count`. A trailing one leaves a
/// space before the ellipsis (`"<p>a b</p>"` → `"a b ..."`); a leading one is
/// trimmed, as a rendered label would collapse it.
///
/// `summarize("", n)` is just the ellipsis.
pub fn summarize(html: &str, count: usize) -> String {
    let text = strip_tags(html);
    let mut out = String::with_capacity(text.len() + ELLIPSIS.len());
    for (i, word) in split_ws_runs(&text).take(count).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(word);
    }
    let lead = out.len() - out.trim_start().len();
    out.drain(..lead);
    out.push_str(ELLIPSIS);
    out
}
