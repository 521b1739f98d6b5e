// src/lookup.rs
//
// The full lookup: validate slug → normalise term → store → scrape → store.
use crate::{
    error::{ FetchError, LookupError },
    config::ClientOptions,
    lang,
    model::Entry,
    progress::{ NullProgress, Progress },
    scrape::Scraper,
    store::{ EntryStore, NullStore },
};

pub struct Dictionary {
    scraper: Scraper,
    store: Box<dyn EntryStore>,
}

impl Dictionary {
    /// Network-backed dictionary without persistence.
    pub fn new(options: ClientOptions) -> Result<Self, FetchError> {
        Ok(Self::with_scraper(Scraper::new(options)?, Box::new(NullStore)))
    }

    pub fn with_scraper(scraper: Scraper, store: Box<dyn EntryStore>) -> Self {
        Self { scraper, store }
    }

    pub fn scraper(&self) -> &Scraper {
        &self.scraper
    }

    pub fn lookup(&self, slug: &str, entry: &str) -> Result<Entry, LookupError> {
        self.lookup_with_progress(slug, entry, &mut NullProgress)
    }

    pub fn lookup_with_progress(
        &self,
        slug: &str,
        entry: &str,
        progress: &mut dyn Progress,
    ) -> Result<Entry, LookupError> {
        let language = lang::map(slug)?;
        let term = normalize_term(entry);
        if term.is_empty() {
            return Err(LookupError::NotFound);
        }

        if let Some(stored) = self.store.lookup(slug, &term) {
            if usable(&stored, language.is_aggregate()) {
                logd!("{slug}/{term}: served from store");
                return Ok(stored);
            }
            logd!("{slug}/{term}: stored copy incomplete, refetching");
        }

        let fresh = self.scraper.get_entry_with_progress(slug, &term, progress)?;
        if let Err(e) = self.store.store(slug, &term, &fresh) {
            loge!("could not store {slug}/{term}: {e}");
        }
        Ok(fresh)
    }
}

/// Terms are stored and fetched trimmed and lowercased.
pub fn normalize_term(entry: &str) -> String {
    entry.trim().to_lowercase()
}

/// A stored entry is reused only if it has definitions; aggregate entries
/// must also carry lemma tags (older copies predate them).
fn usable(stored: &Entry, aggregate: bool) -> bool {
    !stored.definitions.is_empty()
        && (!aggregate || stored.definitions.iter().any(|d| d.lemma.is_some()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Definition;

    fn with_defs(lemma: Option<&str>) -> Entry {
        Entry {
            word: s!("run"),
            definitions: vec![Definition { lemma: lemma.map(String::from), ..Default::default() }],
            ..Default::default()
        }
    }

    #[test]
    fn terms_are_trimmed_and_lowercased() {
        assert_eq!(normalize_term("  Give Up "), "give up");
        assert_eq!(normalize_term("你好"), "你好");
    }

    #[test]
    fn stored_entries_need_definitions() {
        let bare = Entry { word: s!("run"), parts_of_speech: vec![s!("verb")], ..Default::default() };
        assert!(!usable(&bare, false));
        assert!(usable(&with_defs(None), false));
    }

    #[test]
    fn stored_aggregates_need_lemmas() {
        assert!(!usable(&with_defs(None), true));
        assert!(usable(&with_defs(Some("run")), true));
    }
}
