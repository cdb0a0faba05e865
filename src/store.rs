//! Persistence of chunks to a vector store's text-insertion endpoint.
//!
//! ## Wire Format
//!
//! All chunks of one document go out in a single JSON request:
//!
//! ```text
//! POST /api/v1/insert_texts
//! {
//!   "texts": [
//!     {"text": "...", "metadata": {"source": "example.com", "path": "/post", "chunk_id": 0}},
//!     {"text": "...", "metadata": {"source": "example.com", "path": "/post", "chunk_id": 1}}
//!   ]
//! }
//! ```
//!
//! `source` is the authority of the document URL, `path` its path, and
//! `chunk_id` the chunk's position in the sequence.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Error, Result, Slab};

/// Default vector store insertion endpoint.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1/insert_texts";

/// Default timeout for an insertion request.
pub const DEFAULT_INSERT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where a chunk came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Authority component of the document URL (`host[:port]`, with userinfo if present).
    pub source: String,
    /// Path component of the document URL.
    pub path: String,
    /// Zero-based position of the chunk.
    pub chunk_id: usize,
}

impl ChunkMetadata {
    /// Metadata for chunk `chunk_id` of the document at `origin`.
    ///
    /// ```rust
    /// use pageslabs::ChunkMetadata;
    /// use url::Url;
    ///
    /// let origin = Url::parse("https://docs.example.com:8443/guide/intro?x=1").unwrap();
    /// let meta = ChunkMetadata::for_chunk(&origin, 2);
    ///
    /// assert_eq!(meta.source, "docs.example.com:8443");
    /// assert_eq!(meta.path, "/guide/intro");
    /// assert_eq!(meta.chunk_id, 2);
    /// ```
    #[must_use]
    pub fn for_chunk(origin: &Url, chunk_id: usize) -> Self {
        Self {
            source: origin.authority().to_string(),
            path: origin.path().to_string(),
            chunk_id,
        }
    }
}

/// One chunk plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    /// Chunk text.
    pub text: String,
    /// Provenance.
    pub metadata: ChunkMetadata,
}

/// Body of an insertion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertTextsRequest {
    /// Records in chunk order.
    pub texts: Vec<TextRecord>,
}

impl InsertTextsRequest {
    /// Annotate `slabs` from the document at `origin`.
    #[must_use]
    pub fn from_slabs(slabs: &[Slab], origin: &Url) -> Self {
        let texts = slabs
            .iter()
            .map(|slab| TextRecord {
                text: slab.text.clone(),
                metadata: ChunkMetadata::for_chunk(origin, slab.index),
            })
            .collect();
        Self { texts }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Whether there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Blocking client for the vector store's insertion endpoint.
#[derive(Debug, Clone)]
pub struct VectorStoreClient {
    http: Client,
    endpoint: Url,
}

impl VectorStoreClient {
    /// Create a client for `endpoint` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if the TLS backend cannot be initialised.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;
        Ok(Self { http, endpoint })
    }

    /// The insertion endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submit `request` and return the decoded JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Insert`] on transport failure, a non-2xx status, or
    /// a response body that is not JSON.
    pub fn insert(&self, request: &InsertTextsRequest) -> Result<serde_json::Value> {
        let fail = |reason: String| Error::Insert {
            endpoint: self.endpoint.to_string(),
            reason,
        };

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
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

        response
            .json::<serde_json::Value>()
            .map_err(|e| fail(e.to_string()))
    }
}
