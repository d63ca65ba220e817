//! Concurrent batch URL fetching.
//!
//! The [`BatchFetcher`] owns a pooled HTTP client and fans a URL list out
//! across a fixed number of partitions: partitions run concurrently with
//! each other, and every URL within a partition is fetched concurrently.
//! Results come back in input order, never completion order, and the first
//! network failure aborts the whole batch.

mod partition;


use crate::config::FetcherConfig;
use crate::error::{Error, Result};
use futures::future::try_join_all;
use partition::partition;

/// Concurrent batch fetcher over a shared, pooled HTTP client.
///
/// The client and its connection pool are created in [`BatchFetcher::new`]
/// and released when the fetcher is dropped — on every exit path, successful
/// or not. Connection reuse across concurrent fetches is entirely the
/// client's concern; the fetcher shares it immutably and never locks.
#[derive(Clone, Debug)]
pub struct BatchFetcher {
    client: reqwest::Client,
    config: FetcherConfig,
}

impl BatchFetcher {
    /// Create a fetcher with the given configuration.
    ///
    /// Builds the pooled HTTP client. Timeouts come from the configuration
    /// and are enforced by the client; the fetcher adds no timeout of its
    /// own.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an invalid configuration and
    /// [`Error::Network`] if the client cannot be constructed.
    pub fn new(config: FetcherConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// The configuration this fetcher was built with.
    #[must_use]
    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Fetch a single URL and return the response body as text.
    ///
    /// The HTTP status code is not inspected: a 500 with a readable body
    /// returns that body. Only a failed connection, a timeout, or a body
    /// that cannot be read to completion produces an error. No retry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the request cannot be sent or the body
    /// cannot be read.
    pub async fn fetch_one(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let body = response.text().await?;
        tracing::trace!(url = %url, bytes = body.len(), "fetched url");
        Ok(body)
    }

    /// Fetch every URL in `urls` concurrently, preserving input order.
    ///
    /// All fetches are in flight at once; the output position of each body
    /// matches the position of its URL in `urls`. The first fetch to fail
    /// aborts the whole call — the remaining in-flight requests are dropped
    /// (and thereby cancelled) and no partial results are returned.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::Network`] encountered.
    pub async fn fetch_many(&self, urls: &[String]) -> Result<Vec<String>> {
        try_join_all(urls.iter().map(|url| self.fetch_one(url))).await
    }

    /// Fetch `urls` split into the configured number of partitions.
    ///
    /// Equivalent to [`run_with_partitions`](Self::run_with_partitions) with
    /// `self.config().partition_count`.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::Network`] encountered in any partition.
    pub async fn run(&self, urls: &[String]) -> Result<Vec<Vec<String>>> {
        self.run_with_partitions(urls, self.config.partition_count)
            .await
    }

    /// Fetch `urls` split into `partition_count` partitions.
    ///
    /// The split is positional: the first `partition_count - 1` partitions
    /// each take `urls.len() / partition_count` URLs, the last takes the
    /// remainder. Partitions are dispatched concurrently with each other and
    /// every URL within a partition is fetched concurrently, so nothing
    /// bounds the in-flight request count beyond the largest partition.
    ///
    /// Returns one result sequence per partition, in partition order; within
    /// each sequence, body order matches the partition's URL order. An empty
    /// `urls` returns an empty vec without issuing a single request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `partition_count` is zero, or the first
    /// [`Error::Network`] encountered in any partition (the whole batch is
    /// aborted, in-flight siblings are cancelled on drop, and no partial
    /// results are returned).
    pub async fn run_with_partitions(
        &self,
        urls: &[String],
        partition_count: usize,
    ) -> Result<Vec<Vec<String>>> {
        if partition_count == 0 {
            return Err(Error::Config {
                message: "partition_count must be at least 1".to_string(),
                key: Some("partition_count".to_string()),
            });
        }
        if urls.is_empty() {
            return Ok(Vec::new());
        }

        let partitions = partition(urls, partition_count);
        tracing::debug!(
            urls = urls.len(),
            partitions = partitions.len(),
            largest = partitions.iter().map(|p| p.len()).max().unwrap_or(0),
            "dispatching batch"
        );

        let started = std::time::Instant::now();
        let results = try_join_all(partitions.into_iter().map(|p| self.fetch_many(p))).await?;
        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "batch complete"
        );

        Ok(results)
    }

    /// Like [`run`](Self::run), flattened into a single sequence of bodies
    /// in partition-major order.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub async fn run_flat(&self, urls: &[String]) -> Result<Vec<String>> {
        Ok(self.run(urls).await?.into_iter().flatten().collect())
    }
}
