//! PageSource trait for pluggable page fetching.
//!
//! The parser never talks to the network itself: a `PageSource` hands it raw
//! page text, so the fragile page-structure parsing can be exercised against
//! fixtures and swapped out when the upstream markup changes.

use async_trait::async_trait;

use crate::error::Result;

/// Fetches raw page text for a URL.
///
/// Implementations:
/// - `HttpPageSource` - real HTTP fetches with a politeness delay
/// - `MockPageSource` - canned pages for tests
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the raw body of a page.
    async fn fetch_page(&self, url: &str) -> Result<String>;

    /// Get the source name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
