// src/core/markup.rs
// Cosmetic line breaking for the raw-content preview. Must never block display.

use std::borrow::Cow;
use std::collections::TryReserveError;
use std::fmt::Display;

const ADJACENT: &str = "><";
const BROKEN: &str = ">\n<";

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("could not allocate formatted markup: {0}")]
    Alloc(#[from] TryReserveError),
}

/// Put a newline between every `>` that is immediately followed by `<`.
///
/// Best-effort: on failure the input comes back untouched.
pub fn format_markup(html: &str) -> Cow<'_, str> {
    if !html.contains(ADJACENT) {
        return Cow::Borrowed(html);
    }
    fail_open(html, break_adjacent_tags(html))
}

pub fn break_adjacent_tags(html: &str) -> Result<String, FormatError> {
    let breaks = html.matches(ADJACENT).count();
    let mut out = String::new();
    out.try_reserve_exact(html.len() + breaks)?;

    let mut last = 0;
    for (i, _) in html.match_indices(ADJACENT) {
        out.push_str(&html[last..i]);
        out.push_str(BROKEN);
        last = i + ADJACENT.len();
    }
    out.push_str(&html[last..]);
    Ok(out)
}

/// Keep `original` when a cosmetic transform failed.
pub fn fail_open<'a, E: Display>(original: &'a str, attempt: Result<String, E>) -> Cow<'a, str> {
    match attempt {
        Ok(formatted) => Cow::Owned(formatted),
        Err(e) => {
            logd!("Format: showing raw markup ({} bytes): {}", original.len(), e);
            Cow::Borrowed(original)
        }
    }
}
