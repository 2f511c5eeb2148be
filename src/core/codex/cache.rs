//! Two-tier resolution cache.
//!
//! Keyed by candidate location:
//!
//! - **Positive tier**: location -> raw document text, LRU-bounded, no
//!   expiry within the process lifetime (content at a given location is
//!   assumed immutable).
//! - **Negative tier**: location -> miss timestamp, expiring after a fixed
//!   TTL so transient failures are eventually retried.
//!
//! Misses are cached per individual location, never per overall resolution,
//! so a later call with a wider candidate list can still succeed on a
//! location that was never tried.
//!
//! All state sits behind `tokio::sync::RwLock`. Concurrent resolutions of
//! the same location may both fetch and both write; redundant writes are
//! idempotent because the stored text is identical.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use lru::LruCache;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Default capacity of the positive content cache.
pub const DEFAULT_POSITIVE_CAPACITY: usize = 256;

/// Default negative-cache TTL: failed locations are skipped for 5 minutes.
pub const DEFAULT_NEGATIVE_TTL: Duration = Duration::from_secs(300);

// ============================================================================
// CacheStats
// ============================================================================

/// Counters describing cache behavior, for diagnostics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Positive-tier lookups that returned cached text.
    pub hits: u64,
    /// Positive-tier lookups that found nothing.
    pub misses: u64,
    /// Candidates skipped without I/O because of a fresh negative entry.
    pub negative_skips: u64,
    /// Documents stored in the positive tier.
    pub stores: u64,
    /// Failures recorded in the negative tier.
    pub negative_stores: u64,
}

impl CacheStats {
    /// Hit rate over positive-tier lookups; 0.0 with no lookups.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// ============================================================================
// ContentCache
// ============================================================================

/// Process-lifetime cache for resolved content and recent misses.
///
/// Owned by the loader rather than hidden module state, so tests can build
/// an isolated instance and `clear` gives deterministic isolation.
pub struct ContentCache {
    positive: RwLock<LruCache<String, String>>,
    negative: RwLock<HashMap<String, Instant>>,
    stats: RwLock<CacheStats>,
    negative_ttl: Duration,
}

impl ContentCache {
    /// Create a cache with the given positive capacity and negative TTL.
    ///
    /// A zero capacity is clamped to 1.
    pub fn new(capacity: usize, negative_ttl: Duration) -> Self {
        let capacity = capacity.max(1);
        Self {
            positive: RwLock::new(LruCache::new(
                NonZeroUsize::new(capacity).expect("capacity must be > 0"),
            )),
            negative: RwLock::new(HashMap::new()),
            stats: RwLock::new(CacheStats::default()),
            negative_ttl,
        }
    }

    /// Cache with default capacity and TTL.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_POSITIVE_CAPACITY, DEFAULT_NEGATIVE_TTL)
    }

    /// The configured negative TTL.
    pub fn negative_ttl(&self) -> Duration {
        self.negative_ttl
    }

    /// Look up a location in the positive tier.
    pub async fn get(&self, location: &str) -> Option<String> {
        let text = {
            let mut positive = self.positive.write().await;
            positive.get(location).cloned()
        };
        let mut stats = self.stats.write().await;
        match text {
            Some(text) => {
                stats.hits += 1;
                Some(text)
            }
            None => {
                stats.misses += 1;
                None
            }
        }
    }

    /// Whether a location has a negative entry younger than the TTL.
    ///
    /// Expired entries are removed on the way through, so the next attempt
    /// performs real I/O again.
    pub async fn is_negative(&self, location: &str) -> bool {
        let fresh = {
            let mut negative = self.negative.write().await;
            match negative.get(location) {
                Some(recorded) if recorded.elapsed() < self.negative_ttl => true,
                Some(_) => {
                    negative.remove(location);
                    false
                }
                None => false,
            }
        };
        if fresh {
            let mut stats = self.stats.write().await;
            stats.negative_skips += 1;
        }
        fresh
    }

    /// Store retrieved text, clearing any stale negative entry for the
    /// same location.
    pub async fn store(&self, location: &str, text: String) {
        {
            let mut positive = self.positive.write().await;
            positive.put(location.to_string(), text);
        }
        {
            let mut negative = self.negative.write().await;
            negative.remove(location);
        }
        let mut stats = self.stats.write().await;
        stats.stores += 1;
    }

    /// Record a failed retrieval at the current instant.
    pub async fn store_negative(&self, location: &str) {
        {
            let mut negative = self.negative.write().await;
            negative.insert(location.to_string(), Instant::now());
        }
        let mut stats = self.stats.write().await;
        stats.negative_stores += 1;
    }

    /// Clear both tiers. Counters are cumulative and survive the clear.
    pub async fn clear(&self) {
        self.positive.write().await.clear();
        self.negative.write().await.clear();
    }

    /// Snapshot of the counters.
    pub async fn stats(&self) -> CacheStats {
        self.stats.read().await.clone()
    }

    /// Number of entries in the positive tier.
    pub async fn len(&self) -> usize {
        self.positive.read().await.len()
    }

    /// Whether the positive tier is empty.
    pub async fn is_empty(&self) -> bool {
        self.positive.read().await.is_empty()
    }
}
