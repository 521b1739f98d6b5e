// src/core/sanitize.rs

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use reqwest::Url;

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Escaped in a path segment: everything except ASCII alphanumerics and `-._~`.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encode a path segment, byte-wise from UTF-8 with uppercase hex.
pub fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, SEGMENT).to_string()
}

/// Inverse of `percent_encode`. Malformed escapes are kept literally;
/// invalid UTF-8 is replaced.
pub fn percent_decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Cache key for a URL: every non-alphanumeric char becomes `_`, then the tag
/// is prefixed. `("cache", "https://a.b/c")` → `cache_https___a_b_c`.
pub fn cache_key(tag: &str, url: &str) -> String {
    let mut out = String::with_capacity(tag.len() + 1 + url.len());
    out.push_str(tag);
    out.push('_');
    out.extend(url.chars().map(|c| if c.is_alphanumeric() { c } else { '_' }));
    out
}

/// Resolve `href` against `origin` the way a browser would. `None` (logged)
/// when either side does not parse.
pub fn absolute_url(origin: &str, href: &str) -> Option<String> {
    let base = match Url::parse(origin) {
        Ok(base) => base,
        Err(e) => {
            loge!("bad origin {origin:?}: {e}");
            return None;
        }
    };
    match base.join(href.trim()) {
        Ok(url) => Some(String::from(url)),
        Err(e) => {
            logd!("unresolvable link {href:?}: {e}");
            None
        }
    }
}

/// Filesystem-safe stem for a stored entry: alphanumerics and `-` kept,
/// everything else `_`, never empty.
pub fn sanitize_filename(name: &str) -> String {
    let out: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("_") } else { out }
}
