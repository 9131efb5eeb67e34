//! Mock page source for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{LineageError, Result};
use crate::traits::PageSource;

/// Mock page source serving canned page bodies.
///
/// URLs without a canned body answer with a 404-shaped error, which is how
/// the enricher's degradation paths get exercised.
///
/// # Example
///
/// ```rust
/// use lineage::MockPageSource;
///
/// let mock = MockPageSource::new();
/// mock.add_page("https://example.com/org/model", "<h2>Model tree for org/model</h2>");
/// ```
#[derive(Default)]
pub struct MockPageSource {
    /// Canned bodies indexed by URL
    pages: Arc<RwLock<HashMap<String, String>>>,
    /// Track fetched URLs for verification
    fetch_calls: Arc<RwLock<Vec<String>>>,
}

impl MockPageSource {
    /// Create a new empty mock page source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned page body for a URL.
    pub fn add_page(&self, url: impl Into<String>, body: impl Into<String>) {
        let mut pages = self.pages.write().unwrap();
        pages.insert(url.into(), body.into());
    }

    /// Add a canned page (builder pattern).
    pub fn with_page(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.add_page(url, body);
        self
    }

    /// Get the number of times fetch_page was called.
    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.read().unwrap().len()
    }

    /// Get the URLs that were fetched, in order.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.read().unwrap().clone()
    }
}

impl Clone for MockPageSource {
    fn clone(&self) -> Self {
        Self {
            pages: Arc::clone(&self.pages),
            fetch_calls: Arc::clone(&self.fetch_calls),
        }
    }
}

#[async_trait]
impl PageSource for MockPageSource {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        self.fetch_calls.write().unwrap().push(url.to_string());

        let pages = self.pages.read().unwrap();
        pages
            .get(url)
            .cloned()
            .ok_or_else(|| LineageError::Status {
                url: url.to_string(),
                status: 404,
            })
    }

    fn name(&self) -> &str {
        "mock"
    }
}
