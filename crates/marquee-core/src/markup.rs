//! Escaping for dataset text placed into HTML markup

/// Escape the HTML metacharacters `&`, `<`, `>`, `"` and `'`.
///
/// Titles, director names, countries and insights all come from an
/// untrusted file and must pass through here before becoming markup.
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
