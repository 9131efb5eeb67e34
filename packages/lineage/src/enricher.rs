//! Enricher: turns a model id into lineage signals, never into a run failure.

use tracing::{debug, warn};

use crate::parser;
use crate::traits::PageSource;
use crate::types::{Enrichment, FileRecord, Lineage};
use crate::{model_page_url, model_tree_url};

/// Fetches and parses the pages backing one candidate's lineage signals.
///
/// Every operation degrades on failure: a page that cannot be fetched or
/// parsed yields empty lineage fields with a warning, because one broken page
/// must not abort a whole batch.
pub struct Enricher<S: PageSource> {
    source: S,
}

impl<S: PageSource> Enricher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Derivation flag and dependent count from the model's main page.
    pub async fn fetch_lineage(&self, model_id: &str) -> Lineage {
        let url = model_page_url(model_id);
        let html = match self.source.fetch_page(&url).await {
            Ok(html) => html,
            Err(e) => {
                warn!(model_id = %model_id, error = %e, "Failed to fetch model page");
                return Lineage::default();
            }
        };

        match parser::parse_model_tree(&html) {
            Ok(lineage) => {
                debug!(
                    model_id = %model_id,
                    derived = lineage.derived,
                    dependents = lineage.dependents,
                    "Parsed model tree"
                );
                lineage
            }
            Err(e) => {
                warn!(model_id = %model_id, error = %e, "Failed to parse model tree");
                Lineage::default()
            }
        }
    }

    /// Per-file change records from the model's file-listing page.
    pub async fn fetch_files(&self, model_id: &str) -> Vec<FileRecord> {
        let url = model_tree_url(model_id);
        let html = match self.source.fetch_page(&url).await {
            Ok(html) => html,
            Err(e) => {
                warn!(model_id = %model_id, error = %e, "Failed to fetch file listing");
                return Vec::new();
            }
        };

        match parser::parse_file_listing(&html) {
            Ok(files) => files,
            Err(e) => {
                warn!(model_id = %model_id, error = %e, "Failed to parse file listing");
                Vec::new()
            }
        }
    }

    /// Both signal families in one call.
    pub async fn enrich(&self, model_id: &str) -> Enrichment {
        Enrichment {
            lineage: self.fetch_lineage(model_id).await,
            files: self.fetch_files(model_id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPageSource;

    const MODEL_PAGE: &str = r#"
        <h2>Model tree for org/base-model</h2>
        <div><a>Finetunes <span>4 models</span></a></div>
        <h2>Collections</h2>
    "#;

    const TREE_PAGE: &str = r##"
        <ul>
            <li>
                <svg class="text-gray-300"></svg>
                <a href="#">model.safetensors</a>
                <time datetime="2026-08-06T10:00:00">now</time>
            </li>
        </ul>
    "##;

    #[tokio::test]
    async fn test_enrich_happy_path() {
        let mock = MockPageSource::new()
            .with_page(model_page_url("org/base-model"), MODEL_PAGE)
            .with_page(model_tree_url("org/base-model"), TREE_PAGE);
        let enricher = Enricher::new(mock);

        let enrichment = enricher.enrich("org/base-model").await;
        assert!(!enrichment.lineage.derived);
        assert_eq!(enrichment.lineage.dependents, 4);
        assert_eq!(enrichment.files.len(), 1);
        assert_eq!(enrichment.files[0].name, "model.safetensors");
    }

    #[tokio::test]
    async fn test_unfetchable_pages_degrade_to_empty() {
        let enricher = Enricher::new(MockPageSource::new());

        let enrichment = enricher.enrich("org/gone").await;
        assert_eq!(enrichment.lineage, Lineage::default());
        assert!(enrichment.files.is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_page_degrades_to_empty_lineage() {
        let mock = MockPageSource::new()
            .with_page(model_page_url("org/odd"), "<html>redesigned page</html>");
        let enricher = Enricher::new(mock);

        let lineage = enricher.fetch_lineage("org/odd").await;
        assert_eq!(lineage, Lineage::default());
    }

    #[tokio::test]
    async fn test_fetch_lineage_hits_only_the_model_page() {
        let mock = MockPageSource::new().with_page(model_page_url("org/m"), MODEL_PAGE);
        let enricher = Enricher::new(mock.clone());

        let _ = enricher.fetch_lineage("org/m").await;
        assert_eq!(mock.fetch_calls(), vec![model_page_url("org/m")]);
    }
}
