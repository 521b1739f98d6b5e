// src/specs/xref.rs
//! Parser for a reverse-bilingual landing page: find the links into the
//! forward dictionary (`/dictionary/english-chinese-simplified/...`).

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::core::dom::{self, selector};
use crate::core::sanitize::percent_decode;

static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));

/// Hrefs containing `path`, in document order. Repeats are kept: each one
/// counts towards the fan-out cap.
pub fn links(html: &str, path: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    doc.select(&LINK)
        .filter_map(|a| dom::attr(a, "href"))
        .filter(|href| href.contains(path))
        .map(String::from)
        .collect()
}

/// Term a link points at, for use as a fallback headword:
/// `/dictionary/english-chinese-simplified/give-up?q=x` → `give up`.
pub fn link_term(href: &str) -> String {
    let path = href.split(['?', '#']).next().unwrap_or("");
    let last = path.rsplit('/').find(|seg| !seg.is_empty()).unwrap_or("");
    percent_decode(last).replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATH: &str = "/dictionary/english-chinese-simplified/";

    #[test]
    fn collects_matching_links_in_order() {
        let html = r#"<html><body>
            <a href="/dictionary/english-chinese-simplified/run">run</a>
            <a href="/dictionary/english/run">run (en)</a>
            <a href="/dictionary/english-chinese-simplified/run">run again</a>
            <a href="https://dictionary.cambridge.org/dictionary/english-chinese-simplified/jog">jog</a>
            <a name="anchor">no href</a>
          </body></html>"#;
        assert_eq!(
            links(html, PATH),
            [
                "/dictionary/english-chinese-simplified/run",
                "/dictionary/english-chinese-simplified/run",
                "https://dictionary.cambridge.org/dictionary/english-chinese-simplified/jog",
            ]
        );
    }

    #[test]
    fn no_links_is_empty() {
        assert!(links("<p>nothing</p>", PATH).is_empty());
    }

    #[test]
    fn link_term_variants() {
        assert_eq!(link_term("/dictionary/english-chinese-simplified/run"), "run");
        assert_eq!(link_term("/dictionary/english-chinese-simplified/give-up?q=%E8%B7%91"), "give up");
        assert_eq!(link_term("/dictionary/english-chinese-simplified/caf%C3%A9/"), "café");
    }
}
