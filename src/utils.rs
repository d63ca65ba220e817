//! Utility functions for assembling URL lists

use crate::error::{Error, Result};

/// Parse a newline-separated URL list.
///
/// Blank lines and lines starting with `#` are skipped; surrounding
/// whitespace is trimmed. Every remaining line must parse as an absolute
/// URL. Order is preserved and duplicates are kept — a benchmark list
/// legitimately repeats the same URL many times.
///
/// # Errors
///
/// Returns [`Error::Config`] naming the offending line if any entry is not
/// a valid absolute URL.
///
/// # Examples
///
/// ```
/// use batch_fetch::utils::parse_url_list;
///
/// let urls = parse_url_list("# targets\nhttps://example.com/a\n\nhttps://example.com/b\n")?;
/// assert_eq!(urls.len(), 2);
/// # Ok::<(), batch_fetch::Error>(())
/// ```
pub fn parse_url_list(text: &str) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Err(e) = url::Url::parse(line) {
            return Err(Error::Config {
                message: format!("invalid URL on line {}: '{}': {}", idx + 1, line, e),
                key: Some("url_list".to_string()),
            });
        }
        urls.push(line.to_string());
    }
    Ok(urls)
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_urls_in_order() {
        let urls = parse_url_list("https://a.test/1\nhttps://b.test/2\nhttps://c.test/3\n").unwrap();
        assert_eq!(
            urls,
            vec!["https://a.test/1", "https://b.test/2", "https://c.test/3"]
        );
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let text = "# benchmark targets\n\n  \nhttps://a.test/\n# trailing note\nhttps://b.test/\n";
        let urls = parse_url_list(text).unwrap();
        assert_eq!(urls, vec!["https://a.test/", "https://b.test/"]);
    }

    #[test]
    fn keeps_duplicates() {
        let urls = parse_url_list("https://a.test/\nhttps://a.test/\n").unwrap();
        assert_eq!(urls.len(), 2, "benchmark lists repeat URLs on purpose");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let urls = parse_url_list("  https://a.test/path  \n").unwrap();
        assert_eq!(urls, vec!["https://a.test/path"]);
    }

    #[test]
    fn rejects_a_relative_url_naming_the_line() {
        let err = parse_url_list("https://a.test/\nnot-a-url\n").unwrap_err();
        match err {
            Error::Config { message, key } => {
                assert!(
                    message.contains("line 2"),
                    "message should name the offending line: {message}"
                );
                assert!(message.contains("not-a-url"));
                assert_eq!(key.as_deref(), Some("url_list"));
            }
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_yields_an_empty_list() {
        assert!(parse_url_list("").unwrap().is_empty());
        assert!(parse_url_list("# only comments\n").unwrap().is_empty());
    }

    #[test]
    fn parses_a_list_read_from_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("urls.txt");
        fs::write(&path, "https://a.test/\nhttps://b.test/\n").unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let urls = parse_url_list(&text).unwrap();

        assert_eq!(urls.len(), 2);
    }
}
