// src/core/common/strings.rs
//! Text helpers used by every event type: trimming, first-line selection,
//! Unicode-safe truncation and best-effort coercion of payload values.

use serde_json::Value;
use std::borrow::Cow;

/// Default marker appended when text is cut.
pub const DEFAULT_TRUNCATION_MARKER: &str = "...";

/// Trims Unicode whitespace from both ends.
#[must_use]
pub fn strip(text: &str) -> &str {
    text.trim()
}

/// Line boundaries: `\n`, `\r`, vertical tab, form feed, the file/group/record
/// separators, NEL and the Unicode line and paragraph separators.
const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Returns the text before the first line break.
#[must_use]
pub fn first_line(text: &str) -> &str {
    text.split(is_line_break).next().unwrap_or(text)
}

/// Cuts `text` to at most `max_chars` Unicode scalar values.
///
/// When cut, the kept prefix plus `marker` is exactly `max_chars` long.
/// Text that already fits is borrowed unchanged.
#[must_use]
pub fn truncate_chars<'a>(text: &'a str, max_chars: usize, marker: &str) -> Cow<'a, str> {
    if text.chars().count() <= max_chars {
        return Cow::Borrowed(text);
    }
    let keep = max_chars.saturating_sub(marker.chars().count());
    let cut_at = text.char_indices().nth(keep).map_or(text.len(), |(index, _)| index);
    Cow::Owned(format!("{}{}", &text[..cut_at], marker))
}

/// Best-effort text for a payload value.
///
/// Strings are borrowed, scalars use their JSON rendering, containers are
/// rendered as compact JSON. `null` has no text.
#[must_use]
pub fn value_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => {
            Some(Cow::Owned(value.to_string()))
        }
    }
}

/// Treats empty text as absent, mirroring "x or fallback" chains.
#[must_use]
pub fn non_empty<T: AsRef<str>>(text: Option<T>) -> Option<T> {
    text.filter(|t| !t.as_ref().is_empty())
}
