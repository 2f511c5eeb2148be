//! Candidate walking and retrieval.
//!
//! [`ContentFetcher::resolve_first`] walks a candidate list in priority
//! order, consulting both cache tiers before touching the network, and
//! short-circuits on the first success. Per-candidate failures are normal:
//! they are logged at debug level, recorded in the negative cache, and the
//! walk continues. Exhausting every candidate yields `None`, which callers
//! treat as an empty (displayable) result rather than an error.

use reqwest::Client;

use super::cache::ContentCache;
use super::error::{CodexError, Result};

/// Fetches candidate locations over HTTP, backed by a [`ContentCache`].
///
/// One `reqwest::Client` per fetcher; connection pooling makes walking a
/// long candidate list against the same host cheap. No timeout is layered
/// on top of the transport's own.
pub struct ContentFetcher {
    client: Client,
    cache: ContentCache,
}

impl ContentFetcher {
    /// Wrap a cache with a fresh HTTP client.
    pub fn new(cache: ContentCache) -> Self {
        Self {
            client: Client::new(),
            cache,
        }
    }

    /// Access the underlying cache (stats, reset).
    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    /// Walk `candidates` in order and return the first retrievable text.
    ///
    /// For each candidate: a fresh negative entry skips it without I/O, a
    /// positive entry returns immediately, otherwise the location is
    /// fetched. Success stores and short-circuits; failure records a
    /// negative entry and moves on. `None` after exhaustion.
    pub async fn resolve_first(&self, candidates: &[String]) -> Option<String> {
        for location in candidates {
            if self.cache.is_negative(location).await {
                log::debug!("skipping recently failed candidate: {location}");
                continue;
            }
            if let Some(text) = self.cache.get(location).await {
                log::debug!("cache hit: {location}");
                return Some(text);
            }
            match self.fetch(location).await {
                Ok(text) => {
                    self.cache.store(location, text.clone()).await;
                    log::debug!("resolved candidate: {location}");
                    return Some(text);
                }
                Err(e) => {
                    log::debug!("candidate failed: {location}: {e}");
                    self.cache.store_negative(location).await;
                }
            }
        }
        None
    }

    /// Retrieve one location, mapping non-success statuses to errors.
    async fn fetch(&self, location: &str) -> Result<String> {
        let response = self.client.get(location).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CodexError::Status {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Network behavior is covered by the wiremock integration tests; here
    // only the cache interplay that needs no server.

    #[tokio::test]
    async fn test_resolve_first_returns_cached_text_without_io() {
        let cache = ContentCache::with_defaults();
        cache
            .store("https://unreachable.invalid/doc.md", "en cache".to_string())
            .await;
        let fetcher = ContentFetcher::new(cache);

        let result = fetcher
            .resolve_first(&["https://unreachable.invalid/doc.md".to_string()])
            .await;

        assert_eq!(result.as_deref(), Some("en cache"));
    }

    #[tokio::test]
    async fn test_resolve_first_skips_negative_entries() {
        let cache = ContentCache::with_defaults();
        cache
            .store_negative("https://unreachable.invalid/miss.md")
            .await;
        cache
            .store("https://unreachable.invalid/hit.md", "trouvé".to_string())
            .await;
        let fetcher = ContentFetcher::new(cache);

        let result = fetcher
            .resolve_first(&[
                "https://unreachable.invalid/miss.md".to_string(),
                "https://unreachable.invalid/hit.md".to_string(),
            ])
            .await;

        assert_eq!(result.as_deref(), Some("trouvé"));
        assert_eq!(fetcher.cache().stats().await.negative_skips, 1);
    }

    #[tokio::test]
    async fn test_resolve_first_empty_candidates() {
        let fetcher = ContentFetcher::new(ContentCache::with_defaults());
        assert!(fetcher.resolve_first(&[]).await.is_none());
    }
}
