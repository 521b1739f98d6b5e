// src/core/html.rs
//
// String-level helpers for raw markup fragments (inner HTML handed back by the
// DOM). Whole documents go through `core::dom` instead.

use super::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Drop every `<...>` tag, decode the common entities, collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&normalize_entities(&out))
}

/// Split a fragment at its first `<br>` (any case, any attributes, self-closing
/// or not). Returns the markup before the tag and the markup after its `>`.
pub fn split_first_break(fragment: &str) -> Option<(&str, &str)> {
    let lc = to_lower(fragment);
    let at = lc.find("<br")?;
    // lowercasing is ASCII-only, so byte offsets line up with the original
    let close = fragment[at..].find('>').map(|i| at + i + 1).unwrap_or(fragment.len());
    Some((&fragment[..at], &fragment[close..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_tags_flattens_markup() {
        assert_eq!(strip_tags("<b>past</b>&nbsp;<i>tense</i>\n"), "past tense");
        assert_eq!(strip_tags(""), "");
    }

    #[test]
    fn split_first_break_variants() {
        assert_eq!(split_first_break("past tense<br>ran"), Some(("past tense", "ran")));
        assert_eq!(split_first_break("a<BR/>b<br>c"), Some(("a", "b<br>c")));
        assert_eq!(split_first_break(r#"x<br class="y" />"#), Some(("x", "")));
        assert_eq!(split_first_break("no break"), None);
    }

    #[test]
    fn split_keeps_utf8_boundaries() {
        assert_eq!(split_first_break("跑<br>ran"), Some(("跑", "ran")));
    }
}
