use thiserror::Error;

/// Errors returned by the Bot API client.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Transport-level failure (DNS, TLS, timeout).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The Bot API answered with a non-success status.
    #[error("Bot API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The Bot API accepted the request but rejected the message.
    #[error("message rejected: {description}")]
    Rejected { description: String },
}

/// Result type alias for Bot API operations.
pub type Result<T> = std::result::Result<T, TelegramError>;
