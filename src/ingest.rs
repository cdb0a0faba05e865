//! One document, end to end: fetch, extract, chunk, audit, insert.
//!
//! ```text
//! url ──► PageFetcher ──► extract_paragraphs ──► BudgetChunker ──► audit ──► VectorStoreClient
//!            │ error            │ no paragraphs        │ no chunks
//!            ▼                  ▼                      ▼
//!        NoContent          NoContent              NoContent
//! ```
//!
//! Runtime failures never escape [`Ingestor::run`]: retrieval problems end
//! the run as [`RunOutcome::NoContent`] and persistence problems come back
//! as [`RunOutcome::InsertFailed`]. Only startup problems (bad endpoint,
//! HTTP client construction) are returned as errors, from
//! [`Ingestor::new`].

use url::Url;

use crate::{
    extract_paragraphs, oversized_chunks, BudgetChunker, Error, IngestConfig, InsertTextsRequest,
    OversizedChunk, PageFetcher, Result, SentenceSegmenter, Slab, UnicodeSentences,
    VectorStoreClient,
};

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// Nothing to store: the fetch failed, or the page had no paragraphs.
    NoContent,
    /// Chunks were accepted by the vector store.
    Inserted {
        /// Number of chunks sent.
        chunk_count: usize,
        /// Decoded response body.
        response: serde_json::Value,
    },
    /// Chunks were produced but the vector store call failed.
    InsertFailed {
        /// Number of chunks that were to be sent.
        chunk_count: usize,
        /// What went wrong.
        error: Error,
    },
}

impl RunOutcome {
    /// Number of chunks produced, if the run got that far.
    #[must_use]
    pub fn chunk_count(&self) -> Option<usize> {
        match self {
            Self::NoContent => None,
            Self::Inserted { chunk_count, .. } | Self::InsertFailed { chunk_count, .. } => {
                Some(*chunk_count)
            }
        }
    }

    /// The run's result as JSON: the store's response, or an error descriptor.
    ///
    /// ```rust
    /// use pageslabs::{Error, RunOutcome};
    ///
    /// let failed = RunOutcome::InsertFailed {
    ///     chunk_count: 3,
    ///     error: Error::Insert { endpoint: "http://store".into(), reason: "HTTP 500".into() },
    /// };
    /// let result = failed.result().unwrap();
    /// assert!(result["error"].as_str().unwrap().contains("HTTP 500"));
    /// ```
    #[must_use]
    pub fn result(&self) -> Option<serde_json::Value> {
        match self {
            Self::NoContent => None,
            Self::Inserted { response, .. } => Some(response.clone()),
            Self::InsertFailed { error, .. } => {
                Some(serde_json::json!({ "error": error.to_string() }))
            }
        }
    }
}

/// Runs the ingestion pipeline for single documents.
///
/// The sentence segmenter is supplied at construction and reused for every
/// run.
#[derive(Debug, Clone)]
pub struct Ingestor<S = UnicodeSentences> {
    chunker: BudgetChunker<S>,
    fetcher: PageFetcher,
    store: VectorStoreClient,
}

impl Ingestor {
    /// Create an ingestor with UAX #29 sentence segmentation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if an HTTP client cannot be built.
    pub fn new(config: &IngestConfig) -> Result<Self> {
        Self::with_segmenter(config, UnicodeSentences)
    }
}

impl<S: SentenceSegmenter> Ingestor<S> {
    /// Create an ingestor with an injected sentence segmenter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if an HTTP client cannot be built.
    pub fn with_segmenter(config: &IngestConfig, segmenter: S) -> Result<Self> {
        Ok(Self {
            chunker: BudgetChunker::with_segmenter(config.byte_budget, segmenter),
            fetcher: PageFetcher::new(config.fetch_timeout)?,
            store: VectorStoreClient::new(config.api_url.clone(), config.insert_timeout)?,
        })
    }

    /// Extract and chunk an HTML document, auditing the result.
    #[must_use]
    pub fn prepare(&self, html: &str) -> Vec<Slab> {
        let paragraphs = extract_paragraphs(html);
        if paragraphs.is_empty() {
            return Vec::new();
        }
        let slabs = self.chunker.chunk_paragraphs(&paragraphs);
        tracing::info!(
            paragraphs = paragraphs.len(),
            chunks = slabs.len(),
            "chunked document"
        );
        self.audit(&slabs);
        slabs
    }

    /// Re-measure chunks against the budget; findings are logged.
    pub fn audit(&self, slabs: &[Slab]) -> Vec<OversizedChunk> {
        oversized_chunks(slabs, self.chunker.budget())
    }

    /// Process the document at `url`.
    pub fn run(&self, url: &Url) -> RunOutcome {
        let html = match self.fetcher.fetch(url) {
            Ok(html) => html,
            Err(error) => {
                tracing::warn!(%error, "skipping document");
                return RunOutcome::NoContent;
            }
        };

        let slabs = self.prepare(&html);
        if slabs.is_empty() {
            tracing::warn!(%url, "no content found");
            return RunOutcome::NoContent;
        }

        let chunk_count = slabs.len();
        let request = InsertTextsRequest::from_slabs(&slabs, url);
        match self.store.insert(&request) {
            Ok(response) => {
                tracing::info!(chunk_count, endpoint = %self.store.endpoint(), "inserted chunks");
                RunOutcome::Inserted {
                    chunk_count,
                    response,
                }
            }
            Err(error) => {
                tracing::error!(%error, chunk_count, "insertion failed");
                RunOutcome::InsertFailed { chunk_count, error }
            }
        }
    }
}
