//! Typed errors for the lineage library.

use thiserror::Error;

/// Errors that can occur while fetching or parsing model pages.
#[derive(Debug, Error)]
pub enum LineageError {
    /// HTTP request failed at the transport level.
    #[error("page fetch failed: {0}")]
    Fetch(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The page answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },

    /// The page has no recognizable model-tree block.
    #[error("no model tree block in page")]
    MissingModelTree,

    /// The page has no recognizable file listing.
    #[error("no file listing in page")]
    MissingFileListing,

    /// A file entry carried a timestamp we could not parse.
    #[error("malformed timestamp: {value}")]
    MalformedTimestamp { value: String },
}

/// Result type alias for lineage operations.
pub type Result<T> = std::result::Result<T, LineageError>;
