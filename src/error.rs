//! Error types for batch-fetch
//!
//! The fetch path has a single catch-all failure kind: [`Error::Network`]
//! covers connection failures, timeouts, and response bodies that cannot be
//! read to completion. HTTP status codes are deliberately not part of the
//! taxonomy — a 500 with a readable body is a successful fetch.
//! Configuration problems surface separately, at construction time.

use thiserror::Error;

/// Result type alias for batch-fetch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for batch-fetch
///
/// Every failure is terminal for the current call: nothing is retried, and a
/// single fetch failure aborts the whole enclosing batch.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "partition_count")
        key: Option<String>,
    },

    /// Network error: connection failure, timeout, or an unreadable response body
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl Error {
    /// Returns true if this is a network error caused by a request timeout
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Network(e) if e.is_timeout())
    }

    /// Returns true if this is a network error caused by a failed connection attempt
    #[must_use]
    pub fn is_connect(&self) -> bool {
        matches!(self, Error::Network(e) if e.is_connect())
    }
}
