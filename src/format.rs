//! Text helpers shared by the renderers: HTML escaping and query-match highlighting.

use std::borrow::Cow;
use std::fmt::{self, Write};

/// Escape the five HTML-significant characters.
///
/// Returns `Cow::Borrowed` when nothing needs escaping.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    // Writing into a String cannot fail
    let _ = write_escaped(&mut out, text);
    Cow::Owned(out)
}

/// Write `text` HTML-escaped into any formatter.
pub fn write_escaped<W: Write>(w: &mut W, text: &str) -> fmt::Result {
    for ch in text.chars() {
        match ch {
            '&' => w.write_str("&amp;")?,
            '<' => w.write_str("&lt;")?,
            '>' => w.write_str("&gt;")?,
            '"' => w.write_str("&quot;")?,
            '\'' => w.write_str("&#39;")?,
            c => w.write_char(c)?,
        }
    }
    Ok(())
}

/// Lowercase `text` one char at a time.
///
/// Search matching and highlighting both go through this, so a row that matches always
/// highlights. Unlike `str::to_lowercase` it has no context-dependent rules (final sigma).
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Case-insensitive substring test; `needle_lower` must already be [`fold_case`]d.
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    fold_case(haystack).contains(needle_lower)
}

/// `text` folded, plus the byte offset in `text` of the char each folded byte came from.
fn fold_with_origins(text: &str) -> (String, Vec<usize>) {
    let mut folded = String::with_capacity(text.len());
    let mut origins = Vec::with_capacity(text.len());
    for (pos, ch) in text.char_indices() {
        for lower in ch.to_lowercase() {
            folded.push(lower);
            origins.extend(std::iter::repeat_n(pos, lower.len_utf8()));
        }
    }
    (folded, origins)
}

/// Escape `text` and wrap every case-insensitive occurrence of `query` in `<mark>`.
///
/// Matches do not overlap; scanning resumes after each match. A match that starts or
/// ends inside the lowercase expansion of a char covers that whole char.
pub fn highlight_match(text: &str, query: &str) -> String {
    let query_lower = fold_case(query);
    if text.is_empty() || query_lower.is_empty() {
        return escape_html(text).into_owned();
    }

    let (folded, origins) = fold_with_origins(text);
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;

    for (start, matched) in folded.match_indices(&query_lower) {
        let from = origins[start];
        let end_char = origins[start + matched.len() - 1];
        let to = end_char + text[end_char..].chars().next().map_or(1, char::len_utf8);
        if from < last {
            continue;
        }

        out.push_str(&escape_html(&text[last..from]));
        out.push_str("<mark>");
        out.push_str(&escape_html(&text[from..to]));
        out.push_str("</mark>");
        last = to;
    }
    out.push_str(&escape_html(&text[last..]));
    out
}
