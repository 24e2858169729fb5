// src/escape.rs

//! HTML escaping for text embedded in generated pages.

/// Escape a string for literal inclusion in HTML text or attribute values.
///
/// Only `&`, `<`, `>`, `'` and `"` are replaced. `&` goes first so the
/// entities inserted afterwards are not escaped again.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&#39;")
        .replace('"', "&#34;")
}
