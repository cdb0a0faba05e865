//! Error types for pageslabs.

/// Errors that can occur while configuring or running an ingestion.
///
/// Chunking itself never fails once a [`ByteBudget`](crate::ByteBudget)
/// exists; the remaining variants describe the collaborators around it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid byte budget (must be > 0).
    #[error("invalid byte budget: {0} (must be > 0)")]
    InvalidByteBudget(usize),

    /// A byte budget string was not a whole number.
    #[error("invalid byte budget {input:?}: {reason}")]
    UnparsableByteBudget {
        /// The rejected input.
        input: String,
        /// Why it could not be parsed.
        reason: String,
    },

    /// A location identifier could not be parsed.
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl {
        /// The rejected input.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    HttpClient(String),

    /// Retrieving a document failed.
    #[error("error fetching {url}: {reason}")]
    Fetch {
        /// The document location.
        url: String,
        /// Transport error or HTTP status.
        reason: String,
    },

    /// Submitting chunks to the vector store failed.
    #[error("error inserting chunks into {endpoint}: {reason}")]
    Insert {
        /// The insertion endpoint.
        endpoint: String,
        /// Transport error, HTTP status, or response decoding error.
        reason: String,
    },
}

/// Result type for pageslabs operations.
pub type Result<T> = std::result::Result<T, Error>;
