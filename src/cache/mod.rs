//! Time-bounded response memoization.
//!
//! # Responsibilities
//! - Generic key→value store with a fixed TTL
//! - Lazy purge: an expired entry is removed by the read that misses it
//! - No capacity bound; the key space is one key per specialization plus a
//!   handful of aggregates

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

/// Thread-safe TTL cache. Cloning shares the underlying store.
#[derive(Clone)]
pub struct TtlCache<V> {
    entries: Arc<DashMap<String, CacheEntry<V>>>,
    ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Fetch a live value. An expired entry counts as a miss and is removed
    /// as a side effect.
    pub fn get(&self, key: &str) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                metrics::counter!("cache_hits_total").increment(1);
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove(key);
        }
        metrics::counter!("cache_misses_total").increment(1);
        None
    }

    /// Store a value, overwriting any previous entry for the key.
    pub fn put(&self, key: impl Into<String>, value: V) {
        self.entries.insert(
            key.into(),
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Entries currently stored, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
