//! Error types for class/subclass content resolution.
//!
//! Resolution failures are non-fatal by design: a candidate that cannot be
//! retrieved is recorded in the negative cache and the resolver moves on to
//! the next candidate. These errors therefore never cross the public API
//! boundary; they exist so the fetcher can distinguish transport failures
//! from non-success responses and log them accordingly.

use thiserror::Error;

/// Result type alias for codex operations.
pub type Result<T> = std::result::Result<T, CodexError>;

/// Errors raised while retrieving a single candidate location.
#[derive(Error, Debug)]
pub enum CodexError {
    /// Transport-level failure (connection refused, DNS, invalid URL).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote store answered, but not with a success status.
    #[error("Status {status} for candidate location '{location}'")]
    Status {
        /// The candidate location that was attempted.
        location: String,
        /// The HTTP status code returned.
        status: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = CodexError::Status {
            location: "https://example.invalid/Occultiste/Occultiste.md".to_string(),
            status: 404,
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("Occultiste.md"));
    }
}
