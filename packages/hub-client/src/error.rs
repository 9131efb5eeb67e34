use thiserror::Error;

/// Errors returned by the Hub API client.
#[derive(Debug, Error)]
pub enum HubError {
    /// Transport-level failure (DNS, TLS, timeout).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Hub API returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Result type alias for Hub API operations.
pub type Result<T> = std::result::Result<T, HubError>;
