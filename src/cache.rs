// src/cache.rs
//
// Process-local, time-bounded LRU cache. Sits in front of every page fetch and
// memoizes derived verb lists. Nothing survives a restart.
//
// Every `get`/`set` first drops all entries older than the TTL (full scan; the
// cache is small next to the TTL window). A hit moves the key to the
// most-recent end without touching its timestamp. `set` replaces any previous
// value, restamps it, then evicts from the least-recent end while over capacity.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use indexmap::IndexMap;

/// Time source for expiry. Injected so TTL behaviour can be tested without sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    start: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self { start: Instant::now(), offset: Mutex::new(Duration::ZERO) }
    }

    pub fn advance(&self, by: Duration) {
        let mut offset = self.offset.lock().unwrap_or_else(PoisonError::into_inner);
        *offset += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let offset = *self.offset.lock().unwrap_or_else(PoisonError::into_inner);
        self.start + offset
    }
}

pub struct TtlCache<V> {
    max_size: usize,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    // front = least recently used
    entries: IndexMap<String, (Instant, V)>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        Self::with_clock(max_size, ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(max_size: usize, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self { max_size, ttl, clock, entries: IndexMap::new() }
    }

    pub fn get(&mut self, key: &str) -> Option<V> {
        self.purge_expired();
        let (key, entry) = self.entries.shift_remove_entry(key)?;
        let value = entry.1.clone();
        self.entries.insert(key, entry);
        Some(value)
    }

    pub fn set(&mut self, key: impl Into<String>, value: V) {
        self.purge_expired();
        let key = key.into();
        self.entries.shift_remove(&key);
        self.entries.insert(key, (self.clock.now(), value));
        while self.entries.len() > self.max_size {
            self.entries.shift_remove_index(0);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn purge_expired(&mut self) {
        let now = self.clock.now();
        let ttl = self.ttl;
        self.entries
            .retain(|_, (stamped, _)| now.saturating_duration_since(*stamped) <= ttl);
    }
}
