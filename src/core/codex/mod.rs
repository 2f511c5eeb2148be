//! Class/Subclass Content Resolution and Parsing Engine.
//!
//! Given a free-form class name and an optional subclass name, this module
//! canonicalizes spelling/alias/diacritics variation, searches an
//! inconsistently organized remote content hierarchy through an ordered
//! candidate space, caches both hits and misses, and parses the retrieved
//! text into leveled, originated sections with deterministic ordering.
//!
//! # Architecture
//!
//! ```text
//!   caller
//!     |
//!     v
//!  CodexLoader ----> names (canonicalize) ----> candidates (expand)
//!     |                                              |
//!     v                                              v
//!  aggregator <---- parser <---- ContentFetcher <-> ContentCache
//!  (merge+sort)    (sections)    (walk, fetch)   (positive/negative)
//! ```
//!
//! # Resolution model
//!
//! There is no state machine: resolution is an ordered search over a
//! generated candidate space with early exit on first success,
//! independently per content type (class vs. subclass). Exhaustion is a
//! normal outcome and surfaces as an empty section list.
//!
//! # Module Structure
//!
//! - [`error`]: internal fetch error types
//! - [`types`]: `Section`, `Origin` and the request/result bundles
//! - [`names`]: normalization, alias tables, name variants
//! - [`candidates`]: pure candidate location generation
//! - [`cache`]: two-tier content/miss cache
//! - [`fetcher`]: priority-ordered candidate walking over HTTP
//! - [`parser`]: total markdown-ish section parser
//! - [`aggregator`]: merge and deterministic sort
//! - [`loader`]: the public orchestrator

pub mod aggregator;
pub mod cache;
pub mod candidates;
pub mod error;
pub mod fetcher;
pub mod loader;
pub mod names;
pub mod parser;
pub mod types;

pub use cache::{CacheStats, ContentCache};
pub use error::{CodexError, Result};
pub use loader::CodexLoader;
pub use names::{build_name_variants, canonicalize_class, canonicalize_subclass, display_class_name};
pub use parser::SectionParser;
pub use types::{AbilityRequest, AbilitySections, ClassContent, Origin, Section};
