//! # batch-fetch
//!
//! Concurrent batch URL fetching with partitioned fan-out.
//!
//! ## Design Philosophy
//!
//! batch-fetch is designed to be:
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Order-preserving** - Results come back in input order, never completion order
//! - **Fail-fast** - The first network failure aborts the whole batch
//! - **Client-owned pooling** - Connection reuse is the HTTP client's concern
//!
//! ## Quick Start
//!
//! ```no_run
//! use batch_fetch::{BatchFetcher, FetcherConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = BatchFetcher::new(FetcherConfig::default())?;
//!
//!     let urls = vec![
//!         "https://example.com/a".to_string(),
//!         "https://example.com/b".to_string(),
//!         "https://example.com/c".to_string(),
//!         "https://example.com/d".to_string(),
//!     ];
//!
//!     // Two partitions of two URLs each, all four fetched concurrently
//!     let results = fetcher.run(&urls).await?;
//!     for (i, bodies) in results.iter().enumerate() {
//!         println!("partition {} fetched {} pages", i, bodies.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Concurrent batch fetching
pub mod fetcher;
/// Utility functions
pub mod utils;

// Re-export commonly used types
pub use config::FetcherConfig;
pub use error::{Error, Result};
pub use fetcher::BatchFetcher;
