//! Configuration types for batch-fetch

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-request timeout applied to the HTTP client.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`BatchFetcher`](crate::BatchFetcher)
///
/// Every field has a serde default, so a config can be deserialized from an
/// empty document and selectively overridden.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Number of partitions the URL list is split into (default: 2)
    ///
    /// Partitions are dispatched concurrently with each other, and every URL
    /// within a partition is fetched concurrently, so this does not bound the
    /// number of simultaneous in-flight requests.
    #[serde(default = "default_partition_count")]
    pub partition_count: usize,

    /// Per-request timeout (default: 30s, None = no timeout)
    ///
    /// Enforced by the underlying HTTP client, not by the fetcher itself.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Option<Duration>,

    /// Connect-phase timeout (default: None, the client default applies)
    #[serde(default)]
    pub connect_timeout: Option<Duration>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            partition_count: default_partition_count(),
            request_timeout: default_request_timeout(),
            connect_timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

impl FetcherConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `partition_count` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.partition_count == 0 {
            return Err(Error::Config {
                message: "partition_count must be at least 1".to_string(),
                key: Some("partition_count".to_string()),
            });
        }
        Ok(())
    }
}

fn default_partition_count() -> usize {
    2
}

fn default_request_timeout() -> Option<Duration> {
    Some(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
}

fn default_user_agent() -> String {
    concat!("batch-fetch/", env!("CARGO_PKG_VERSION")).to_string()
}
