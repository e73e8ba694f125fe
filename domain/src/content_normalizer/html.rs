use std::sync::LazyLock;

use regex::Regex;

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Removes markup and collapses whitespace.
pub fn strip_tags(html: &str) -> String {
    let text = TAG_REGEX.replace_all(html, " ");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The first `max_chars` characters of `s`.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((index, _)) => &s[..index],
        None => s,
    }
}

/// Plain text preview of a piece of markup, `None` when it has no text.
pub fn summarize(html: &str, max_chars: usize) -> Option<String> {
    let text = strip_tags(html);
    if text.is_empty() {
        return None;
    }
    let preview = truncate_chars(&text, max_chars);
    if preview.len() < text.len() {
        Some(format!("{}...", preview.trim_end()))
    } else {
        Some(text)
    }
}
