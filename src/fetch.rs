// src/fetch.rs
//
// Cache-first page retrieval. A hit never touches the network; a miss makes
// exactly one GET and stores the body on success. Failures come back as
// `None` and are not cached, so the next call tries again.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cache::TtlCache;
use crate::config::consts::PAGE_KEY_TAG;
use crate::core::Transport;
use crate::core::sanitize::cache_key;

pub struct Fetcher {
    transport: Arc<dyn Transport>,
    cache: Mutex<TtlCache<String>>,
}

impl Fetcher {
    pub fn new(transport: Arc<dyn Transport>, cache: TtlCache<String>) -> Self {
        Self { transport, cache: Mutex::new(cache) }
    }

    pub fn fetch(&self, url: &str) -> Option<String> {
        let key = cache_key(PAGE_KEY_TAG, url);
        if let Some(hit) = lock(&self.cache).get(&key) {
            logd!("cache hit {url}");
            return Some(hit);
        }

        // Lock is not held across the request: concurrent misses on the same
        // URL both fetch, last writer wins.
        match self.transport.get(url) {
            Ok(body) => {
                logd!("fetched {url} ({} bytes)", body.len());
                lock(&self.cache).set(key, body.clone());
                Some(body)
            }
            Err(e) => {
                loge!("fetch failed: {e}");
                None
            }
        }
    }
}

pub(crate) fn lock<V>(cache: &Mutex<TtlCache<V>>) -> MutexGuard<'_, TtlCache<V>> {
    cache.lock().unwrap_or_else(PoisonError::into_inner)
}
