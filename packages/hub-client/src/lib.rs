//! Minimal Hugging Face Hub REST API client.
//!
//! Supports the one listing operation the watcher needs: walking the
//! `/api/models` index sorted by modification time, newest first, until the
//! entries fall outside a caller-supplied recency threshold.
//!
//! # Example
//!
//! ```rust,ignore
//! use hub_client::HubClient;
//!
//! let client = HubClient::new();
//! let threshold = chrono::Utc::now() - chrono::Duration::hours(1);
//!
//! let models = client.list_recent_models(threshold).await?;
//! for model in &models {
//!     println!("{}", model.id);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{HubError, Result};
pub use types::ModelSummary;

use chrono::{DateTime, Utc};

const BASE_URL: &str = "https://huggingface.co";

/// Listing page size. The Hub caps anonymous requests at 100 rows.
const PAGE_SIZE: usize = 100;

pub struct HubClient {
    client: reqwest::Client,
    token: Option<String>,
}

impl HubClient {
    /// Create an anonymous client.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            token: None,
        }
    }

    /// Create a client that authenticates with a Hub access token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: Some(token.into()),
        }
    }

    /// List models modified at or after `threshold`, newest first.
    ///
    /// Walks the listing with `Link`-header pagination and stops at the first
    /// entry older than the threshold, since results are sorted descending by
    /// modification time. Only entries declaring a model-index block are
    /// requested (`filter=model-index`); the filter pipeline re-checks the
    /// tag per candidate rather than trusting the query parameter.
    pub async fn list_recent_models(
        &self,
        threshold: DateTime<Utc>,
    ) -> Result<Vec<ModelSummary>> {
        let mut url = format!(
            "{}/api/models?sort=lastModified&direction=-1&filter=model-index&full=true&limit={}",
            BASE_URL, PAGE_SIZE
        );
        let mut recent: Vec<ModelSummary> = Vec::new();

        loop {
            tracing::debug!(url = %url, "Fetching model listing page");

            let mut request = self.client.get(&url);
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }
            let resp = request.send().await?;

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(HubError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }

            // The next-page cursor lives in the Link header; grab it before
            // the body consumes the response.
            let next = resp
                .headers()
                .get("link")
                .and_then(|v| v.to_str().ok())
                .and_then(parse_next_link);

            let page: Vec<ModelSummary> = resp.json().await?;
            let page_len = page.len();
            let (mut in_window, keep_paging) = take_recent(page, threshold);
            recent.append(&mut in_window);

            match next {
                Some(next_url) if keep_paging && page_len > 0 => url = next_url,
                _ => break,
            }
        }

        tracing::info!(count = recent.len(), "Fetched recent models from the Hub");
        Ok(recent)
    }
}

impl Default for HubClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Split one listing page into in-window entries and a keep-paging flag.
///
/// Entries arrive sorted by `lastModified` descending, so the first entry
/// older than the threshold ends the walk. Entries without a modification
/// time are skipped rather than trusted.
fn take_recent(
    page: Vec<ModelSummary>,
    threshold: DateTime<Utc>,
) -> (Vec<ModelSummary>, bool) {
    let mut recent = Vec::new();
    for model in page {
        match model.last_modified {
            None => continue,
            Some(last_modified) if last_modified >= threshold => recent.push(model),
            Some(_) => return (recent, false),
        }
    }
    (recent, true)
}

/// Extract the `rel="next"` target from a `Link` header value.
fn parse_next_link(header: &str) -> Option<String> {
    for part in header.split(',') {
        if !part.contains("rel=\"next\"") {
            continue;
        }
        let start = part.find('<')? + 1;
        let end = part.find('>')?;
        if start < end {
            return Some(part[start..end].to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn model(id: &str, last_modified: Option<DateTime<Utc>>) -> ModelSummary {
        ModelSummary {
            id: id.to_string(),
            created_at: None,
            last_modified,
            tags: Vec::new(),
            downloads: None,
            likes: None,
            pipeline_tag: None,
        }
    }

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_take_recent_stops_at_first_old_entry() {
        let threshold = at(10, 0);
        let page = vec![
            model("a/one", Some(at(11, 0))),
            model("b/two", Some(at(10, 30))),
            model("c/old", Some(at(9, 0))),
            // Sorted descending, so anything after the first old entry is
            // older still and must not be scanned.
            model("d/older", Some(at(8, 0))),
        ];

        let (recent, keep_paging) = take_recent(page, threshold);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, "a/one");
        assert_eq!(recent[1].id, "b/two");
        assert!(!keep_paging);
    }

    #[test]
    fn test_take_recent_boundary_is_inclusive() {
        let threshold = at(10, 0);
        let page = vec![model("a/edge", Some(threshold))];

        let (recent, keep_paging) = take_recent(page, threshold);
        assert_eq!(recent.len(), 1);
        assert!(keep_paging);
    }

    #[test]
    fn test_take_recent_skips_entries_without_timestamp() {
        let threshold = at(10, 0);
        let page = vec![
            model("a/untimed", None),
            model("b/fresh", Some(at(10, 30))),
        ];

        let (recent, keep_paging) = take_recent(page, threshold);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, "b/fresh");
        assert!(keep_paging);
    }

    #[test]
    fn test_parse_next_link() {
        let header = r#"<https://huggingface.co/api/models?cursor=abc123&limit=100>; rel="next""#;
        assert_eq!(
            parse_next_link(header),
            Some("https://huggingface.co/api/models?cursor=abc123&limit=100".to_string())
        );
    }

    #[test]
    fn test_parse_next_link_multiple_relations() {
        let header = r#"<https://example.com/first>; rel="first", <https://example.com/next>; rel="next""#;
        assert_eq!(
            parse_next_link(header),
            Some("https://example.com/next".to_string())
        );
    }

    #[test]
    fn test_parse_next_link_absent() {
        assert_eq!(parse_next_link(r#"<https://example.com/prev>; rel="prev""#), None);
        assert_eq!(parse_next_link(""), None);
    }
}
