use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::codex::cache::{DEFAULT_NEGATIVE_TTL, DEFAULT_POSITIVE_CAPACITY};

/// Default mirror roots of the remote content hierarchy, in priority order.
pub const DEFAULT_CONTENT_ROOTS: [&str; 2] = [
    "https://raw.githubusercontent.com/contenu-jdr/classes/main",
    "https://contenu-jdr.github.io/classes",
];

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CodexConfig {
    pub content: ContentConfig,
}

/// Remote content store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Mirror roots tried in order during resolution.
    pub roots: Vec<String>,
    /// Seconds a failed candidate location is skipped before being retried.
    pub negative_ttl_secs: u64,
    /// Capacity of the positive content cache.
    pub cache_capacity: usize,
}

impl Default for CodexConfig {
    fn default() -> Self {
        Self {
            content: ContentConfig::default(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            roots: DEFAULT_CONTENT_ROOTS.iter().map(|r| r.to_string()).collect(),
            negative_ttl_secs: DEFAULT_NEGATIVE_TTL.as_secs(),
            cache_capacity: DEFAULT_POSITIVE_CAPACITY,
        }
    }
}

impl CodexConfig {
    /// Load configuration from `~/.config/classcodex/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, with the same fallback
    /// behavior as [`CodexConfig::load`].
    pub fn load_from(config_path: &Path) -> Self {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e}; using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {}; using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("classcodex")
            .join("config.toml")
    }
}
