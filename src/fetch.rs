//! Document retrieval over HTTP.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::{Error, Result};

/// Default timeout for a page fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking HTTP fetcher for source documents.
///
/// One GET per document, bounded by a timeout, no retries. Transport
/// failures and non-2xx responses are returned as [`Error::Fetch`].
#[derive(Debug, Clone)]
pub struct PageFetcher {
    http: Client,
}

impl PageFetcher {
    /// Create a fetcher with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;
        Ok(Self { http })
    }

    /// Fetch `url` and return the response body as text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] on transport failure, a non-2xx status, or an
    /// unreadable body.
    pub fn fetch(&self, url: &Url) -> Result<String> {
        let fail = |reason: String| Error::Fetch {
            url: url.to_string(),
            reason,
        };

        let response = self
            .http
            .get(url.clone())
            .send()
            .map_err(|e| fail(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fail(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.text().map_err(|e| fail(e.to_string()))?;
        tracing::debug!(%url, bytes = body.len(), "fetched document");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_refused_is_fetch_error() {
        let fetcher = PageFetcher::new(Duration::from_secs(2)).unwrap();
        let url = Url::parse("http://127.0.0.1:1/article").unwrap();

        match fetcher.fetch(&url) {
            Err(Error::Fetch { url, .. }) => assert_eq!(url, "http://127.0.0.1:1/article"),
            other => panic!("expected fetch error, got {:?}", other),
        }
    }
}
