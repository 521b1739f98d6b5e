// src/error.rs

/// Outcome of a failed lookup, as seen by callers of the pipeline.
///
/// Upstream trouble (timeouts, non-200 responses) is folded into `NotFound`:
/// callers cannot tell "no such word" from "site unreachable", and nothing
/// downstream needs to.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("word not found")]
    NotFound,
}

/// Transport-level failure. Never leaves the fetch layer; the fetcher logs it
/// and reports the page as absent.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("failed to read body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
