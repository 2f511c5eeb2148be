//! Orchestration of the resolution pipeline.
//!
//! [`CodexLoader`] composes the canonicalizer, candidate generator, cache,
//! fetcher, parser and aggregator behind the public loading operations.
//! Every operation is total: a class or subclass with no retrievable
//! content yields empty collections, never an error.
//!
//! Class and subclass resolution are independent candidate walks, each
//! short-circuiting on its own first success; the combined loaders issue
//! them concurrently.

use std::time::Duration;

use super::aggregator;
use super::cache::{CacheStats, ContentCache};
use super::candidates::{build_class_candidates, build_subclass_candidates};
use super::fetcher::ContentFetcher;
use super::names::{canonicalize_class, canonicalize_subclass};
use super::parser::SectionParser;
use super::types::{AbilityRequest, AbilitySections, ClassContent, Origin, Section};
use crate::config::CodexConfig;

/// Resolves and parses class/subclass ability content.
///
/// Owns the HTTP client and both cache tiers; construct one per process
/// (or per test) and share it by reference.
pub struct CodexLoader {
    fetcher: ContentFetcher,
    roots: Vec<String>,
}

impl CodexLoader {
    /// Build a loader from configuration.
    pub fn new(config: &CodexConfig) -> Self {
        let cache = ContentCache::new(
            config.content.cache_capacity,
            Duration::from_secs(config.content.negative_ttl_secs),
        );
        Self {
            fetcher: ContentFetcher::new(cache),
            roots: config.content.roots.clone(),
        }
    }

    /// Loader with default configuration (public mirror roots).
    pub fn with_defaults() -> Self {
        Self::new(&CodexConfig::default())
    }

    /// Sections of the base class document, in parse order. Empty when no
    /// candidate resolves.
    pub async fn load_class_sections(&self, class_name: &str) -> Vec<Section> {
        let canonical = canonicalize_class(class_name);
        let candidates = build_class_candidates(&self.roots, &canonical);
        match self.fetcher.resolve_first(&candidates).await {
            Some(text) => SectionParser::parse(&text, Origin::Class),
            None => {
                log::debug!(
                    "no class content found for '{canonical}' ({} candidates tried)",
                    candidates.len()
                );
                Vec::new()
            }
        }
    }

    /// Sections of one subclass document, in parse order. A blank subclass
    /// name resolves to nothing without any network attempt.
    pub async fn load_subclass_sections(
        &self,
        class_name: &str,
        subclass_name: &str,
    ) -> Vec<Section> {
        if subclass_name.trim().is_empty() {
            return Vec::new();
        }
        let class = canonicalize_class(class_name);
        let subclass = canonicalize_subclass(&class, subclass_name);
        let candidates = build_subclass_candidates(&self.roots, &class, &subclass);
        match self.fetcher.resolve_first(&candidates).await {
            Some(text) => SectionParser::parse(&text, Origin::Subclass),
            None => {
                log::debug!(
                    "no subclass content found for '{subclass}' of '{class}' ({} candidates tried)",
                    candidates.len()
                );
                Vec::new()
            }
        }
    }

    /// Full bundle for a class and a set of subclasses, in request order.
    pub async fn load_class_and_subclass_content(
        &self,
        class_name: &str,
        subclass_names: &[String],
    ) -> ClassContent {
        let class_sections = self.load_class_sections(class_name).await;

        let mut subclass_lists = Vec::with_capacity(subclass_names.len());
        for subclass_name in subclass_names {
            subclass_lists.push(
                self.load_subclass_sections(class_name, subclass_name)
                    .await,
            );
        }

        let sections = aggregator::merge(class_sections.clone(), subclass_lists.clone());
        let subclass_sections = subclass_lists.into_iter().flatten().collect();

        ClassContent {
            class_name: canonicalize_class(class_name),
            sections,
            class_sections,
            subclass_sections,
        }
    }

    /// Merged ability sections for a sheet request.
    ///
    /// Class resolution always runs; subclass resolution runs only for a
    /// non-blank subclass name, concurrently with the class walk. The
    /// request's `character_level` is deliberately ignored here; filtering
    /// by level belongs to the caller.
    pub async fn load_ability_sections(&self, request: &AbilityRequest) -> AbilitySections {
        let subclass_name = request
            .subclass_name
            .as_deref()
            .filter(|name| !name.trim().is_empty());

        let sections = match subclass_name {
            Some(subclass_name) => {
                let (class_sections, subclass_sections) = tokio::join!(
                    self.load_class_sections(&request.class_name),
                    self.load_subclass_sections(&request.class_name, subclass_name),
                );
                aggregator::merge(class_sections, vec![subclass_sections])
            }
            None => aggregator::merge(
                self.load_class_sections(&request.class_name).await,
                Vec::new(),
            ),
        };

        AbilitySections { sections }
    }

    /// Clear both cache tiers, for test isolation and manual refresh.
    pub async fn reset_content_cache(&self) {
        self.fetcher.cache().clear().await;
        log::debug!("content cache cleared");
    }

    /// Snapshot of cache counters.
    pub async fn cache_stats(&self) -> CacheStats {
        self.fetcher.cache().stats().await
    }
}
