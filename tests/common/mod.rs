//! Common test utilities for batch-fetch integration tests

use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mount `count` HTML pages at `/page/{i}`, each with a distinct `<title>`
/// and an optional per-response delay, and return their URLs in order.
#[allow(dead_code)]
pub async fn mount_pages(server: &MockServer, count: usize, delay: Option<Duration>) -> Vec<String> {
    let mut urls = Vec::with_capacity(count);
    for i in 0..count {
        let body = format!(
            "<html><head><title>Page {i}</title></head><body>page {i}</body></html>"
        );
        let mut template = ResponseTemplate::new(200).set_body_string(body);
        if let Some(delay) = delay {
            template = template.set_delay(delay);
        }
        Mock::given(method("GET"))
            .and(path(format!("/page/{i}")))
            .respond_with(template)
            .mount(server)
            .await;
        urls.push(format!("{}/page/{i}", server.uri()));
    }
    urls
}

/// A URL on a freshly started and immediately stopped server, guaranteed to
/// refuse connections.
#[allow(dead_code)]
pub async fn unreachable_url() -> String {
    let server = MockServer::start().await;
    let url = format!("{}/unreachable", server.uri());
    drop(server);
    url
}
