//! Fetch-strategy speedtest for batch-fetch
//!
//! Compares three strategies over the same URL list: the partitioned batch
//! fetcher, a small fixed worker pool, and plain sequential fetching. Each
//! strategy reports elapsed wall-clock time and how many bodies carried an
//! HTML `<title>`.
//!
//! Usage: cargo run --release --example speedtest [url-list-file]
//!
//! With no argument the list comes from `URL_LIST_PATH` (a newline-separated
//! file, `#` comments allowed) or falls back to a built-in six-site list
//! repeated `BENCH_REPEAT` times (default 10).

use batch_fetch::utils::parse_url_list;
use batch_fetch::{BatchFetcher, FetcherConfig};
use regex::Regex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Built-in benchmark targets, used when no URL list file is given.
const DEFAULT_WEB_LIST: [&str; 6] = [
    "https://www.google.com",
    "https://www.youtube.com",
    "https://www.wikipedia.org",
    "https://www.github.com",
    "https://www.reddit.com",
    "https://www.stackoverflow.com",
];

/// Worker count for the pool strategy.
const WORKER_POOL_SIZE: usize = 2;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let urls = load_url_list()?;
    let config = FetcherConfig::default();

    println!("═══════════════════════════════════════════════════════════");
    println!("  batch-fetch Speedtest");
    println!("═══════════════════════════════════════════════════════════");
    println!("  URLs: {}", urls.len());
    println!("  Partitions: {}", config.partition_count);
    println!("  Workers (pool strategy): {}", WORKER_POOL_SIZE);
    println!("═══════════════════════════════════════════════════════════");

    let fetcher = Arc::new(BatchFetcher::new(config)?);
    let title_re = Regex::new(r"<title>(.*)</title>")?;

    // Strategy 1: partitioned batch fetch, everything in flight at once
    let started = Instant::now();
    let bodies = fetcher.run_flat(&urls).await?;
    report("batched", started, count_titles(&title_re, &bodies));

    // Strategy 2: fixed worker pool pulling from a shared cursor
    let started = Instant::now();
    let bodies = worker_pool_fetch(Arc::clone(&fetcher), &urls, WORKER_POOL_SIZE).await?;
    report("pooled", started, count_titles(&title_re, &bodies));

    // Strategy 3: one request at a time
    let started = Instant::now();
    let mut bodies = Vec::with_capacity(urls.len());
    for url in &urls {
        bodies.push(fetcher.fetch_one(url).await?);
    }
    report("sequential", started, count_titles(&title_re, &bodies));

    Ok(())
}

/// Resolve the URL list: CLI argument, then URL_LIST_PATH, then the built-in
/// list repeated BENCH_REPEAT times.
fn load_url_list() -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let path = std::env::args().nth(1).or_else(|| std::env::var("URL_LIST_PATH").ok());
    if let Some(path) = path {
        let text = std::fs::read_to_string(&path)?;
        return Ok(parse_url_list(&text)?);
    }

    let repeat: usize = std::env::var("BENCH_REPEAT")
        .ok()
        .and_then(|r| r.parse().ok())
        .unwrap_or(10);
    Ok(DEFAULT_WEB_LIST
        .iter()
        .cycle()
        .take(DEFAULT_WEB_LIST.len() * repeat)
        .map(|url| (*url).to_string())
        .collect())
}

/// Fetch every URL with a fixed number of workers pulling indices from a
/// shared cursor. Body order follows completion, which is fine for counting.
async fn worker_pool_fetch(
    fetcher: Arc<BatchFetcher>,
    urls: &[String],
    workers: usize,
) -> Result<Vec<String>, batch_fetch::Error> {
    let urls = Arc::new(urls.to_vec());
    let cursor = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..workers)
        .map(|_| {
            let fetcher = Arc::clone(&fetcher);
            let urls = Arc::clone(&urls);
            let cursor = Arc::clone(&cursor);
            tokio::spawn(async move {
                let mut bodies = Vec::new();
                loop {
                    let i = cursor.fetch_add(1, Ordering::SeqCst);
                    if i >= urls.len() {
                        break;
                    }
                    bodies.push(fetcher.fetch_one(&urls[i]).await?);
                }
                Ok::<_, batch_fetch::Error>(bodies)
            })
        })
        .collect();

    let mut bodies = Vec::with_capacity(urls.len());
    for handle in handles {
        bodies.extend(handle.await.expect("worker task panicked")?);
    }
    Ok(bodies)
}

fn count_titles(title_re: &Regex, bodies: &[String]) -> usize {
    bodies.iter().filter(|body| title_re.is_match(body)).count()
}

fn report(strategy: &str, started: Instant, titles: usize) {
    println!(
        "  {:<11} {:>8.2?}  ({} titles)",
        strategy,
        started.elapsed(),
        titles
    );
}
