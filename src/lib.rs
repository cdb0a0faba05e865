//! # pageslabs
//!
//! Byte-budgeted text chunking for vector store ingestion.
//!
//! ## The Problem
//!
//! A storage backend accepts records up to a fixed size in bytes. A web page
//! gives you an ordered list of paragraphs of any size. You need to turn the
//! one into the other so that:
//!
//! - no chunk exceeds the byte budget,
//! - paragraph, then sentence, then word boundaries survive wherever possible,
//! - nothing is silently dropped,
//! - chunk order matches document order (positions become chunk ids).
//!
//! ## The Fallback Ladder
//!
//! ```text
//! paragraph fits?        -> pack it whole with its neighbours
//!   no: sentence fits?   -> pack it whole with its neighbours
//!     no: words          -> greedy word chunks, emitted standalone
//!       word too big?    -> forced slices of budget/4 characters
//! ```
//!
//! Packing is greedy: units are joined with single spaces until the next
//! one would overflow. Each step down the ladder trades coherence for fit,
//! so the chunker only steps down when the coarser unit cannot fit at all.
//!
//! ## Quick Start
//!
//! ```rust
//! use pageslabs::{BudgetChunker, ByteBudget, Chunker};
//!
//! let paragraphs = [
//!     "The quick brown fox jumps over the lazy dog.",
//!     "Pack my box with five dozen liquor jugs.",
//! ];
//!
//! let chunker = BudgetChunker::new(ByteBudget::new(2000).unwrap());
//! let slabs = chunker.chunk(&paragraphs);
//!
//! assert_eq!(slabs.len(), 1);
//! assert_eq!(
//!     slabs[0].text,
//!     "The quick brown fox jumps over the lazy dog. Pack my box with five dozen liquor jugs."
//! );
//! ```
//!
//! ## Ingestion (requires `ingest` feature, on by default)
//!
//! The `ingest` feature adds the collaborators around the chunker: HTTP
//! retrieval, HTML paragraph extraction, and insertion into a vector store,
//! wired together by [`Ingestor`] and exposed as the `pageslabs` binary.
//!
//! ```rust,no_run
//! use pageslabs::{IngestConfig, Ingestor, RunOutcome};
//!
//! let config = IngestConfig::default();
//! let ingestor = Ingestor::new(&config)?;
//! let url = pageslabs::parse_url("https://example.com/article")?;
//!
//! if let RunOutcome::Inserted { chunk_count, .. } = ingestor.run(&url) {
//!     println!("stored {chunk_count} chunks");
//! }
//! # Ok::<(), pageslabs::Error>(())
//! ```

mod accumulator;
mod audit;
mod capacity;
mod error;
mod fixed;
mod recursive;
mod sentence;
mod slab;
mod word;

#[cfg(feature = "ingest")]
mod config;
#[cfg(feature = "ingest")]
mod extract;
#[cfg(feature = "ingest")]
mod fetch;
#[cfg(feature = "ingest")]
mod ingest;
#[cfg(feature = "ingest")]
mod store;

pub use accumulator::ChunkAccumulator;
pub use audit::{oversized_chunks, OversizedChunk};
pub use capacity::{byte_size, ByteBudget, DEFAULT_BYTE_BUDGET};
pub use error::{Error, Result};
pub use fixed::{ForcedSlicer, ForcedSlices};
pub use recursive::BudgetChunker;
pub use sentence::{SentenceSegmenter, UnicodeSentences};
pub use slab::Slab;
pub use word::WordAccumulator;

#[cfg(feature = "ingest")]
pub use config::{parse_url, IngestConfig};
#[cfg(feature = "ingest")]
pub use extract::extract_paragraphs;
#[cfg(feature = "ingest")]
pub use fetch::{PageFetcher, DEFAULT_FETCH_TIMEOUT};
#[cfg(feature = "ingest")]
pub use ingest::{Ingestor, RunOutcome};
#[cfg(feature = "ingest")]
pub use store::{
    ChunkMetadata, InsertTextsRequest, TextRecord, VectorStoreClient, DEFAULT_API_URL,
    DEFAULT_INSERT_TIMEOUT,
};

/// A strategy that turns an ordered sequence of paragraphs into chunks.
///
/// ```rust
/// use pageslabs::{BudgetChunker, ByteBudget, Chunker, Slab};
///
/// fn chunk_document(chunker: &dyn Chunker, paragraphs: &[String]) -> Vec<Slab> {
///     chunker.chunk(paragraphs)
/// }
///
/// let chunker = BudgetChunker::new(ByteBudget::new(64).unwrap());
/// let slabs = chunk_document(&chunker, &["Hello world.".to_string()]);
/// assert_eq!(slabs[0].text, "Hello world.");
/// ```
pub trait Chunker<P: AsRef<str> = String>: Send + Sync {
    /// Split paragraphs into chunks.
    ///
    /// Each chunk is a [`Slab`] whose `index` is its position in the output.
    fn chunk(&self, paragraphs: &[P]) -> Vec<Slab>;

    /// Estimate the number of chunks for `text_len` bytes of input.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize {
        (text_len / 500).max(1)
    }
}
