//! Time-boxed cache for the pipeline listing.
//!
//! The listing query runs on every render pass, so the result is held
//! for a short TTL. Staleness within the window is acceptable by design;
//! the refresh endpoint clears the entry on demand. The cache carries no
//! correctness obligation, it is purely a round-trip saver.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use distil_db::models::pipeline::PipelineSummary;

struct CacheEntry {
    value: Vec<PipelineSummary>,
    fetched_at: Instant,
}

/// `{value, fetched_at}` with a fixed time-to-live and explicit
/// invalidation.
pub struct PipelineCache {
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

impl PipelineCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: Mutex::new(None),
        }
    }

    /// Return the cached listing if it is still within the TTL.
    pub async fn get(&self) -> Option<Vec<PipelineSummary>> {
        let guard = self.entry.lock().await;
        guard
            .as_ref()
            .filter(|e| e.fetched_at.elapsed() < self.ttl)
            .map(|e| e.value.clone())
    }

    /// Store a freshly fetched listing.
    pub async fn store(&self, value: Vec<PipelineSummary>) {
        let mut guard = self.entry.lock().await;
        *guard = Some(CacheEntry {
            value,
            fetched_at: Instant::now(),
        });
    }

    /// Drop the cached entry so the next read hits the store.
    pub async fn invalidate(&self) {
        let mut guard = self.entry.lock().await;
        *guard = None;
    }
}
