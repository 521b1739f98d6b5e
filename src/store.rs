// src/store.rs
//
// Persistence collaborator for finished entries. The lookup pipeline reads it
// before scraping and writes to it afterwards; write failures are logged and
// otherwise ignored, so a store can never turn a good lookup into an error.
use std::{
    collections::HashMap,
    error::Error,
    fs,
    path::{ Path, PathBuf },
    sync::{ Mutex, PoisonError },
};

use crate::{ config::consts::STORE_DIR, core::sanitize::sanitize_filename, model::Entry };

pub type StoreError = Box<dyn Error + Send + Sync>;

pub trait EntryStore: Send + Sync {
    /// Previously stored entry for `(slug, entry)`, if any.
    fn lookup(&self, slug: &str, entry: &str) -> Option<Entry>;

    fn store(&self, slug: &str, entry: &str, value: &Entry) -> Result<(), StoreError>;
}

/// Remembers nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullStore;

impl EntryStore for NullStore {
    fn lookup(&self, _slug: &str, _entry: &str) -> Option<Entry> {
        None
    }

    fn store(&self, _slug: &str, _entry: &str, _value: &Entry) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Process-local map, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<(String, String), Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EntryStore for MemoryStore {
    fn lookup(&self, slug: &str, entry: &str) -> Option<Entry> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(&(s!(slug), s!(entry))).cloned()
    }

    fn store(&self, slug: &str, entry: &str, value: &Entry) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert((s!(slug), s!(entry)), value.clone());
        Ok(())
    }
}

/// One JSON document per entry: `{dir}/{slug}/{entry}.json`.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(STORE_DIR)
    }
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, slug: &str, entry: &str) -> PathBuf {
        let mut name = sanitize_filename(entry);
        name.push_str(".json");
        self.dir.join(sanitize_filename(slug)).join(name)
    }
}

impl EntryStore for FileStore {
    fn lookup(&self, slug: &str, entry: &str) -> Option<Entry> {
        let path = self.path(slug, entry);
        let text = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&text) {
            Ok(e) => Some(e),
            Err(e) => {
                logd!("ignoring unreadable {}: {e}", path.display());
                None
            }
        }
    }

    fn store(&self, slug: &str, entry: &str, value: &Entry) -> Result<(), StoreError> {
        let path = self.path(slug, entry);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(value)?)?;
        Ok(())
    }
}
