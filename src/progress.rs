// src/progress.rs
/// Progress reporting for multi-page lookups (the aggregate fan-out).
/// Frontends implement this to surface status; every method has a no-op default.
///
/// Calls always come from the thread that started the lookup, never from a worker.
pub trait Progress {
    /// Called once with the number of sub-pages about to be fetched.
    fn begin(&mut self, _total: usize) {}

    /// Sub-page `index` (distinct links, first-seen order) was fetched and parsed.
    fn item_done(&mut self, _index: usize, _url: &str) {}

    /// Sub-page `index` could not be fetched or held no entry; it is skipped.
    fn item_failed(&mut self, _index: usize, _url: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
