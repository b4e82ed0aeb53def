//! Article page fetching over HTTP.
//!
//! This module retrieves the raw HTML the extractor works on. It is the
//! only networked part of the crate and sits behind the `fetch` feature.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{MetiorError, Result};

/// HTTP client configuration for fetching article pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Metior/0.1; +https://github.com/stormlightlabs/metior)"
                .to_string(),
        }
    }
}

/// Fetches an article page and returns the response body as text.
///
/// Follows redirects, respects the configured timeout, and treats
/// non-success status codes as errors so a 404 page never gets scraped
/// as if it were an article.
pub async fn fetch_html(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| MetiorError::InvalidUrl(e.to_string()))?;

    if parsed_url.scheme().is_empty() {
        return Err(MetiorError::InvalidUrl(
            "URL must include a scheme (http:// or https://)".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(MetiorError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                MetiorError::Timeout { timeout: config.timeout }
            } else {
                MetiorError::HttpError(e)
            }
        })?;

    let response = response.error_for_status()?;
    let content = response.text().await?;

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.user_agent.contains("Metior"));
    }

    #[test]
    fn test_fetch_html_invalid_url() {
        let config = FetchConfig::default();
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_html("not-a-url", &config))
        })
        .join()
        .unwrap();

        assert!(matches!(result, Err(MetiorError::InvalidUrl(_))));
    }

    #[test]
    fn test_url_validation() {
        assert!(Url::parse("http://example.com").is_ok());
        assert!(Url::parse("https://example.com").is_ok());
        assert!(Url::parse("example.com").is_err()); // Missing scheme
    }
}
