//! Ingestion run configuration.

use std::time::Duration;

use url::Url;

use crate::fetch::DEFAULT_FETCH_TIMEOUT;
use crate::store::{DEFAULT_API_URL, DEFAULT_INSERT_TIMEOUT};
use crate::{ByteBudget, Error, Result};

/// Settings for one ingestion run. Fixed once the run starts.
///
/// ```rust
/// use pageslabs::{ByteBudget, IngestConfig};
///
/// let config = IngestConfig::default()
///     .with_byte_budget(ByteBudget::new(1000).unwrap())
///     .with_api_url("http://store.internal:9000/insert")
///     .unwrap();
///
/// assert_eq!(config.byte_budget.get(), 1000);
/// assert_eq!(config.api_url.port(), Some(9000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    /// Maximum chunk size in bytes.
    pub byte_budget: ByteBudget,
    /// Vector store insertion endpoint.
    pub api_url: Url,
    /// Timeout for fetching the source document.
    pub fetch_timeout: Duration,
    /// Timeout for the insertion request.
    pub insert_timeout: Duration,
}

impl IngestConfig {
    /// Set the byte budget.
    #[must_use]
    pub fn with_byte_budget(self, byte_budget: ByteBudget) -> Self {
        Self {
            byte_budget,
            ..self
        }
    }

    /// Set the insertion endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `api_url` is not an absolute URL.
    pub fn with_api_url(self, api_url: &str) -> Result<Self> {
        Ok(Self {
            api_url: parse_url(api_url)?,
            ..self
        })
    }

    /// Set the fetch timeout.
    #[must_use]
    pub fn with_fetch_timeout(self, fetch_timeout: Duration) -> Self {
        Self {
            fetch_timeout,
            ..self
        }
    }

    /// Set the insertion timeout.
    #[must_use]
    pub fn with_insert_timeout(self, insert_timeout: Duration) -> Self {
        Self {
            insert_timeout,
            ..self
        }
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            byte_budget: ByteBudget::default(),
            api_url: Url::parse(DEFAULT_API_URL).expect("default api url is valid"),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            insert_timeout: DEFAULT_INSERT_TIMEOUT,
        }
    }
}

/// Parse an absolute URL, mapping failures to [`Error::InvalidUrl`].
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] if `input` does not parse.
pub fn parse_url(input: &str) -> Result<Url> {
    Url::parse(input.trim()).map_err(|e| Error::InvalidUrl {
        url: input.to_string(),
        reason: e.to_string(),
    })
}
