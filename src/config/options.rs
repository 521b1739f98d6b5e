// src/config/options.rs
use std::time::Duration;

use super::consts::*;

/// Knobs for the scraper. `Default` gives the production values;
/// `from_env` layers `DICT_SCRAPE_*` overrides on top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientOptions {
    pub origin: String,
    pub verb_origin: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub cache_max_size: usize,
    pub cache_ttl: Duration,
    /// Upper bound on sub-pages fetched per aggregate lookup.
    pub max_links: usize,
    /// Worker threads for the aggregate fan-out.
    pub workers: usize,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            origin: s!(ORIGIN),
            verb_origin: s!(VERB_ORIGIN),
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            cache_max_size: CACHE_MAX_SIZE,
            cache_ttl: Duration::from_secs(CACHE_TTL_SECS),
            max_links: MAX_LINKS,
            workers: WORKERS,
        }
    }
}

impl ClientOptions {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank or unparsable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let num = |key: &str| get(key).and_then(|v| v.parse::<u64>().ok());

        let mut out = Self::default();
        if let Some(v) = get("DICT_SCRAPE_ORIGIN") {
            out.origin = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = get("DICT_SCRAPE_VERB_ORIGIN") {
            out.verb_origin = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = get("DICT_SCRAPE_USER_AGENT") {
            out.user_agent = v;
        }
        if let Some(v) = num("DICT_SCRAPE_TIMEOUT_SECS").filter(|&v| v > 0) {
            out.timeout = Duration::from_secs(v);
        }
        if let Some(v) = num("DICT_SCRAPE_CACHE_SIZE").filter(|&v| v > 0) {
            out.cache_max_size = v as usize;
        }
        if let Some(v) = num("DICT_SCRAPE_CACHE_TTL_SECS") {
            out.cache_ttl = Duration::from_secs(v);
        }
        if let Some(v) = num("DICT_SCRAPE_MAX_LINKS") {
            out.max_links = v as usize;
        }
        if let Some(v) = num("DICT_SCRAPE_WORKERS").filter(|&v| v > 0) {
            out.workers = v as usize;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (s!(*k), s!(*v)))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_match_production_values() {
        let o = ClientOptions::default();
        assert_eq!(o.origin, "https://dictionary.cambridge.org");
        assert_eq!(o.timeout, Duration::from_secs(10));
        assert_eq!(o.cache_max_size, 1000);
        assert_eq!(o.cache_ttl, Duration::from_secs(1800));
        assert_eq!(o.max_links, 12);
    }

    #[test]
    fn overrides_apply_and_trailing_slash_is_dropped() {
        let o = ClientOptions::from_lookup(lookup(&[
            ("DICT_SCRAPE_ORIGIN", "http://localhost:8080/"),
            ("DICT_SCRAPE_TIMEOUT_SECS", "3"),
            ("DICT_SCRAPE_MAX_LINKS", "5"),
        ]));
        assert_eq!(o.origin, "http://localhost:8080");
        assert_eq!(o.timeout, Duration::from_secs(3));
        assert_eq!(o.max_links, 5);
        assert_eq!(o.workers, WORKERS);
    }

    #[test]
    fn garbage_values_keep_defaults() {
        let o = ClientOptions::from_lookup(lookup(&[
            ("DICT_SCRAPE_CACHE_SIZE", "lots"),
            ("DICT_SCRAPE_WORKERS", "0"),
            ("DICT_SCRAPE_USER_AGENT", "   "),
        ]));
        assert_eq!(o, ClientOptions::default());
    }
}
