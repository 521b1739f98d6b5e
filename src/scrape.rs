// src/scrape.rs
//
// Scraping front: slug → page(s) → Entry. No persistence here; `lookup` owns
// the store. Two paths:
//
// - direct: one entry page, then the verb table for the same term
// - aggregate: a reverse-bilingual landing page whose links into the forward
//   dictionary are fetched on a small worker pool and merged per lemma
use std::{
    sync::{ Arc, Mutex, mpsc, atomic::{ AtomicUsize, Ordering }},
    thread,
};

use crate::{
    cache::{ Clock, SystemClock, TtlCache },
    config::{ ClientOptions, consts::{ Language, VERBS_KEY_TAG }},
    core::{ HttpTransport, Transport, sanitize::{ absolute_url, cache_key, percent_encode }},
    error::{ FetchError, LookupError },
    fetch::{ self, Fetcher },
    lang,
    model::{ Definition, Entry, Pronunciation, VerbForm, push_unique },
    progress::{ NullProgress, Progress },
    specs::{ self, entry::PageHint },
};

pub struct Scraper {
    options: ClientOptions,
    fetcher: Fetcher,
    verbs: Mutex<TtlCache<Vec<VerbForm>>>,
}

impl Scraper {
    /// Scraper over the real network.
    pub fn new(options: ClientOptions) -> Result<Self, FetchError> {
        let transport = HttpTransport::new(&options.user_agent, options.timeout)?;
        Ok(Self::with_transport(options, Arc::new(transport), Arc::new(SystemClock)))
    }

    pub fn with_transport(
        options: ClientOptions,
        transport: Arc<dyn Transport>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let pages = TtlCache::with_clock(options.cache_max_size, options.cache_ttl, clock.clone());
        let verbs = TtlCache::with_clock(options.cache_max_size, options.cache_ttl, clock);
        Self {
            fetcher: Fetcher::new(transport, pages),
            verbs: Mutex::new(verbs),
            options,
        }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn get_entry(&self, slug: &str, entry: &str) -> Result<Entry, LookupError> {
        self.get_entry_with_progress(slug, entry, &mut NullProgress)
    }

    /// Like `get_entry`; `progress` hears about aggregate sub-pages.
    pub fn get_entry_with_progress(
        &self,
        slug: &str,
        entry: &str,
        progress: &mut dyn Progress,
    ) -> Result<Entry, LookupError> {
        let language = lang::map(slug)?;
        logd!("{slug}: {entry:?} via /dictionary/{}/", language.upstream);
        match language.xref {
            Some(forward) => self.aggregate(language, forward, entry, progress),
            None => self.direct(language, entry),
        }
    }

    /// Conjugation table for `entry`. Never fails: an unreachable or tableless
    /// page yields an empty list, and that empty list is cached like any other.
    pub fn fetch_verbs(&self, entry: &str) -> Vec<VerbForm> {
        let url = join!(&self.options.verb_origin, "/wiki/", &percent_encode(entry));
        let key = cache_key(VERBS_KEY_TAG, &url);
        if let Some(hit) = fetch::lock(&self.verbs).get(&key) {
            return hit;
        }

        let verbs = match self.fetcher.fetch(&url) {
            Some(html) => specs::verbs::parse(&html),
            None => Vec::new(),
        };
        logd!("{} verb form(s) for {entry:?}", verbs.len());
        fetch::lock(&self.verbs).set(key, verbs.clone());
        verbs
    }

    /* ---------------- direct ---------------- */

    fn direct(&self, language: &Language, entry: &str) -> Result<Entry, LookupError> {
        let url = language.url(&self.options.origin, entry);
        let html = self.fetcher.fetch(&url).ok_or(LookupError::NotFound)?;

        let hint = PageHint { entry, source: language.slug };
        let mut parsed = specs::entry::parse(&html, &self.options.origin, hint)
            .ok_or(LookupError::NotFound)?;
        parsed.verbs = self.fetch_verbs(entry);
        Ok(parsed)
    }

    /* ---------------- aggregate ---------------- */

    fn aggregate(
        &self,
        language: &Language,
        forward: &str,
        entry: &str,
        progress: &mut dyn Progress,
    ) -> Result<Entry, LookupError> {
        let forward = lang::map(forward)?;
        let url = language.url(&self.options.origin, entry);
        let html = self.fetcher.fetch(&url).ok_or(LookupError::NotFound)?;

        let path = lang::dictionary_path(forward.upstream);
        let mut hrefs = specs::xref::links(&html, &path);
        if hrefs.is_empty() {
            logd!("no {path} links on {url}");
            return Err(LookupError::NotFound);
        }
        hrefs.truncate(self.options.max_links);

        // Repeated links are fetched once but merged once per occurrence.
        let mut urls: Vec<String> = Vec::new();
        let mut slots: Vec<usize> = Vec::with_capacity(hrefs.len());
        for href in &hrefs {
            let Some(abs) = absolute_url(&self.options.origin, href) else { continue };
            let slot = match urls.iter().position(|u| *u == abs) {
                Some(i) => i,
                None => {
                    urls.push(abs);
                    urls.len() - 1
                }
            };
            slots.push(slot);
        }
        logf!("{entry:?}: {} cross-reference link(s), {} page(s)", slots.len(), urls.len());

        let pages = self.fetch_pages(&urls, forward.slug, progress);

        let mut merged = Entry { word: s!(entry), ..Default::default() };
        let mut order: Vec<String> = Vec::new();
        for page in slots.into_iter().filter_map(|i| pages[i].as_ref()) {
            let lemma = &page.word;
            for pos in &page.parts_of_speech {
                push_unique(&mut merged.parts_of_speech, pos);
            }
            merged.pronunciations.extend(
                page.pronunciations
                    .iter()
                    .map(|p| Pronunciation { lemma: Some(lemma.clone()), ..p.clone() }),
            );
            merged.definitions.extend(
                page.definitions
                    .iter()
                    .map(|d| Definition { lemma: Some(lemma.clone()), ..d.clone() }),
            );
            push_unique(&mut order, lemma);
        }

        if merged.is_empty() {
            logd!("nothing merged for {entry:?}");
            return Err(LookupError::NotFound);
        }
        merged.order = Some(order);
        Ok(merged)
    }

    /// Fetch and parse every sub-page on at most `workers` threads.
    /// Result `i` belongs to `urls[i]`; `None` marks a skipped page.
    fn fetch_pages(
        &self,
        urls: &[String],
        source: &str,
        progress: &mut dyn Progress,
    ) -> Vec<Option<Entry>> {
        progress.begin(urls.len());

        let counter = AtomicUsize::new(0);
        let (res_tx, res_rx) = mpsc::channel::<(usize, Option<Entry>)>();
        let workers = self.options.workers.min(urls.len()).max(1);
        let mut pages: Vec<Option<Entry>> = vec![None; urls.len()];

        thread::scope(|scope| {
            for _ in 0..workers {
                let tx = res_tx.clone();
                let idx = &counter;
                scope.spawn(move || loop {
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    let Some(url) = urls.get(i) else { break };
                    if tx.send((i, self.sub_page(url, source))).is_err() {
                        break;
                    }
                });
            }
            drop(res_tx); // main thread is sole receiver now

            for (i, page) in res_rx {
                match page {
                    Some(_) => progress.item_done(i, &urls[i]),
                    None => progress.item_failed(i, &urls[i]),
                }
                pages[i] = page;
            }
        });

        progress.finish();
        pages
    }

    /// Headword fallback is the link's own term, not the term looked up.
    fn sub_page(&self, url: &str, source: &str) -> Option<Entry> {
        let html = self.fetcher.fetch(url)?;
        let term = specs::xref::link_term(url);
        let page = specs::entry::parse(&html, &self.options.origin, PageHint { entry: &term, source });
        if page.is_none() {
            logd!("skipping {url}: no entry");
        }
        page
    }
}
