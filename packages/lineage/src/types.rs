use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lineage signals recovered from a model's public page.
///
/// The listing API cannot say whether a model descends from another model or
/// how many models build on it; both come from the "model tree" block the
/// page embeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineage {
    /// The model declares a base model it was produced from.
    pub derived: bool,

    /// How many models declare this one as their base
    /// (finetunes, adapters, quantizations, merges).
    pub dependents: u64,
}

impl Lineage {
    pub fn new(derived: bool, dependents: u64) -> Self {
        Self {
            derived,
            dependents,
        }
    }
}

/// One entry from a model's file-listing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    pub is_directory: bool,
    pub changed_at: DateTime<Utc>,
}

/// Everything the enricher recovers for one candidate.
///
/// An unparseable page yields the default value: not derived, zero
/// dependents, no file records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enrichment {
    pub lineage: Lineage,
    pub files: Vec<FileRecord>,
}

impl Enrichment {
    /// Whether every known file changed at or after `threshold`.
    ///
    /// Returns `None` when no file records were recovered, so the caller can
    /// fall back to listing timestamps instead of guessing.
    pub fn all_files_changed_since(&self, threshold: DateTime<Utc>) -> Option<bool> {
        if self.files.is_empty() {
            return None;
        }
        Some(self.files.iter().all(|f| f.changed_at >= threshold))
    }

    /// File records changed at or after `threshold`.
    pub fn files_changed_since(&self, threshold: DateTime<Utc>) -> Vec<&FileRecord> {
        self.files
            .iter()
            .filter(|f| f.changed_at >= threshold)
            .collect()
    }
}
