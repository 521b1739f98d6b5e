// src/config/consts.rs

// Net config
pub const ORIGIN: &str = "https://dictionary.cambridge.org";
pub const VERB_ORIGIN: &str = "https://simple.wiktionary.org";
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const TIMEOUT_SECS: u64 = 10;

// Cache
pub const CACHE_MAX_SIZE: usize = 1000;
pub const CACHE_TTL_SECS: u64 = 1800;
pub const PAGE_KEY_TAG: &str = "cache";
pub const VERBS_KEY_TAG: &str = "verbs";

// Aggregate
pub const MAX_LINKS: usize = 12;
pub const WORKERS: usize = 4;

// Local store
pub const STORE_DIR: &str = ".store";

// Title suffix on pages without a headword element, e.g. "你好 in English - Cambridge Dictionary"
pub const TITLE_SUFFIX: &str = " in English";

/// One recognised language slug.
///
/// `region` is the leading path segment ("us"/"uk"), empty when the upstream
/// dictionary has none. `xref` names the slug whose pages an aggregate lookup
/// follows; `None` means the slug is served by a single page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Language {
    pub slug: &'static str,
    pub upstream: &'static str,
    pub region: &'static str,
    pub xref: Option<&'static str>,
}

pub const LANGUAGES: &[Language] = &[
    Language { slug: "en",    upstream: "english",                     region: "us", xref: None },
    Language { slug: "uk",    upstream: "english",                     region: "uk", xref: None },
    Language { slug: "en-tw", upstream: "english-chinese-traditional", region: "us", xref: None },
    Language { slug: "en-cn", upstream: "english-chinese-simplified",  region: "us", xref: None },
    Language { slug: "cn-en", upstream: "chinese-simplified-english",  region: "",   xref: Some("en-cn") },
];
