// src/lang.rs
//
// Public language slug -> upstream dictionary path.

use crate::config::consts::{LANGUAGES, Language};
use crate::core::sanitize::percent_encode;
use crate::error::LookupError;

/// Resolve a slug against the language table.
pub fn map(slug: &str) -> Result<&'static Language, LookupError> {
    LANGUAGES
        .iter()
        .find(|l| l.slug == slug)
        .ok_or_else(|| LookupError::UnsupportedLanguage(s!(slug)))
}

/// `{origin}/[{region}/]dictionary/{upstream}/{entry}`; the entry is trimmed
/// and percent-encoded, the region segment is left out when empty.
pub fn build_url(origin: &str, upstream: &str, region: &str, entry: &str) -> String {
    let entry = percent_encode(entry.trim());
    if region.is_empty() {
        join!(origin, "/dictionary/", upstream, "/", &entry)
    } else {
        join!(origin, "/", region, "/dictionary/", upstream, "/", &entry)
    }
}

/// Path fragment identifying pages of `upstream`, e.g. `/dictionary/english/`.
pub fn dictionary_path(upstream: &str) -> String {
    join!("/dictionary/", upstream, "/")
}

impl Language {
    pub fn is_aggregate(&self) -> bool {
        self.xref.is_some()
    }

    pub fn url(&self, origin: &str, entry: &str) -> String {
        build_url(origin, self.upstream, self.region, entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://dictionary.cambridge.org";

    #[test]
    fn every_known_slug_maps() {
        let got: Vec<_> = ["en", "uk", "en-tw", "en-cn", "cn-en"]
            .iter()
            .map(|s| {
                let l = map(s).unwrap();
                (l.upstream, l.region)
            })
            .collect();
        assert_eq!(
            got,
            [
                ("english", "us"),
                ("english", "uk"),
                ("english-chinese-traditional", "us"),
                ("english-chinese-simplified", "us"),
                ("chinese-simplified-english", ""),
            ]
        );
    }

    #[test]
    fn mapping_is_stable() {
        assert_eq!(map("uk").unwrap(), map("uk").unwrap());
    }

    #[test]
    fn unknown_slugs_fail() {
        for slug in ["xx", "", "EN", "en-us", " en"] {
            match map(slug) {
                Err(LookupError::UnsupportedLanguage(s)) => assert_eq!(s, slug),
                other => panic!("{slug:?} gave {other:?}"),
            }
        }
    }

    #[test]
    fn only_cn_en_aggregates() {
        let agg: Vec<_> = LANGUAGES.iter().filter(|l| l.is_aggregate()).map(|l| l.slug).collect();
        assert_eq!(agg, ["cn-en"]);
        // and the slug it follows must itself resolve
        assert!(map(map("cn-en").unwrap().xref.unwrap()).is_ok());
    }

    #[test]
    fn url_with_and_without_region() {
        assert_eq!(
            build_url(ORIGIN, "english", "uk", " give up "),
            "https://dictionary.cambridge.org/uk/dictionary/english/give%20up"
        );
        assert_eq!(
            map("cn-en").unwrap().url(ORIGIN, "你好"),
            "https://dictionary.cambridge.org/dictionary/chinese-simplified-english/%E4%BD%A0%E5%A5%BD"
        );
    }
}
