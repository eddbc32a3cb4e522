//! Shared rendering utilities and helpers.
//!
//! Low-level HTML helpers used across components: text escaping and fuzzy
//! match highlighting.
//!
//! # Features
//!
//! - **Escaping**: every piece of data text goes through [`escape_html`]
//! - **Match Highlighting**: wraps matched character ranges in `<mark>`
//! - **UTF-8 Safe**: ranges are character indices, not byte indices

use std::fmt::{self, Write};

/// Escapes text for use in HTML element content and quoted attribute values.
///
/// # Example
///
/// ```rust
/// use poplookup::ui::helpers::escape_html;
///
/// assert_eq!(escape_html("Saint <Kitts> & \"Nevis\""), "Saint &lt;Kitts&gt; &amp; &quot;Nevis&quot;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Writes `text` with the given character ranges wrapped in `<mark>`.
///
/// Ranges are `(start, end)` character indices with an exclusive end, sorted
/// and non-overlapping. Out-of-bounds ends are clamped.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_highlighted_text(out: &mut impl Write, text: &str, ranges: &[(usize, usize)]) -> fmt::Result {
    if ranges.is_empty() {
        return out.write_str(&escape_html(text));
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        if start > current_pos {
            let normal: String = chars[current_pos..start].iter().collect();
            out.write_str(&escape_html(&normal))?;
        }

        let highlighted: String = chars[start..end].iter().collect();
        write!(out, "<mark>{}</mark>", escape_html(&highlighted))?;

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        out.write_str(&escape_html(&remaining))?;
    }

    Ok(())
}
