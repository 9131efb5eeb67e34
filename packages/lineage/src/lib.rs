//! Model-page lineage enrichment.
//!
//! The Hub listing API cannot distinguish a freshly created model from a
//! modified one, nor say how many models build on a given one. Both signals
//! live in the model's public pages, so this library recovers them there:
//! raw page text in, structured lineage fields out.
//!
//! The interface is deliberately narrow. Page fetching hides behind the
//! [`PageSource`] trait so parsing can run against fixtures, and the parsers
//! themselves live in one module ([`parser`]) so an upstream page redesign
//! touches exactly one place.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lineage::{Enricher, HttpPageSource};
//!
//! let enricher = Enricher::new(HttpPageSource::new());
//! let enrichment = enricher.enrich("org/model").await;
//! println!("dependents: {}", enrichment.lineage.dependents);
//! ```

pub mod enricher;
pub mod error;
pub mod http;
pub mod mock;
pub mod parser;
pub mod traits;
pub mod types;

pub use enricher::Enricher;
pub use error::{LineageError, Result};
pub use http::HttpPageSource;
pub use mock::MockPageSource;
pub use traits::PageSource;
pub use types::{Enrichment, FileRecord, Lineage};

const HUB_BASE_URL: &str = "https://huggingface.co";

/// Public page for a model repository.
pub fn model_page_url(model_id: &str) -> String {
    format!("{}/{}", HUB_BASE_URL, model_id)
}

/// File-listing page for a model repository's main branch.
pub fn model_tree_url(model_id: &str) -> String {
    format!("{}/{}/tree/main", HUB_BASE_URL, model_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_urls() {
        assert_eq!(
            model_page_url("org/model"),
            "https://huggingface.co/org/model"
        );
        assert_eq!(
            model_tree_url("org/model"),
            "https://huggingface.co/org/model/tree/main"
        );
    }
}
