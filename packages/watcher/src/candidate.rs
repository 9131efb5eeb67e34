use chrono::{DateTime, Utc};
use hub_client::ModelSummary;
use lineage::Enrichment;

/// One model under consideration: the listing record plus page-derived
/// lineage signals.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub summary: ModelSummary,
    pub enrichment: Enrichment,
}

impl Candidate {
    pub fn new(summary: ModelSummary, enrichment: Enrichment) -> Self {
        Self {
            summary,
            enrichment,
        }
    }

    pub fn id(&self) -> &str {
        &self.summary.id
    }

    pub fn organization(&self) -> Option<&str> {
        self.summary.organization()
    }

    /// Timestamp the recency predicate runs against.
    pub fn effective_timestamp(&self) -> Option<DateTime<Utc>> {
        self.summary.last_modified
    }

    /// Whether this candidate is genuinely new, as opposed to a modified
    /// existing entry.
    ///
    /// File evidence wins when the tree page parsed: a repo whose every file
    /// changed inside the window was just published. Without file records the
    /// listing's creation timestamp decides.
    pub fn is_new(&self, threshold: DateTime<Utc>) -> bool {
        match self.enrichment.all_files_changed_since(threshold) {
            Some(answer) => answer,
            None => self
                .summary
                .created_at
                .map(|created| created >= threshold)
                .unwrap_or(false),
        }
    }
}
