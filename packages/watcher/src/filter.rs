//! The three relevance predicates, applied with "and" semantics.

use chrono::{DateTime, Utc};
use hub_client::ModelSummary;

use crate::candidate::Candidate;

/// Publishers whose releases are notable regardless of dependent count.
pub const LEADING_ORGANIZATIONS: &[&str] = &[
    "allenai",
    "CohereLabs",
    "deepseek-ai",
    "google",
    "ibm-granite",
    "meta-llama",
    "microsoft",
    "mistralai",
    "nvidia",
    "openai",
    "Qwen",
    "stabilityai",
];

/// Filter criteria for one run: the window lower bound plus the
/// leading-organization allowlist.
#[derive(Debug, Clone)]
pub struct FilterCriteria {
    threshold: DateTime<Utc>,
    leading_organizations: Vec<String>,
}

impl FilterCriteria {
    /// Criteria with the built-in allowlist.
    pub fn new(threshold: DateTime<Utc>) -> Self {
        Self {
            threshold,
            leading_organizations: LEADING_ORGANIZATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Replace the allowlist.
    pub fn with_leading_organizations<I, S>(mut self, orgs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_organizations = orgs.into_iter().map(Into::into).collect();
        self
    }

    pub fn threshold(&self) -> DateTime<Utc> {
        self.threshold
    }

    /// Recency: modified at or after the window lower bound.
    ///
    /// Inclusive at the boundary; entries without a modification time fail.
    pub fn within_window(&self, model: &ModelSummary) -> bool {
        model
            .last_modified
            .map(|lm| lm >= self.threshold)
            .unwrap_or(false)
    }

    /// Metadata validity: the model-index block must be declared.
    pub fn has_valid_model_index(&self, model: &ModelSummary) -> bool {
        model.has_model_index()
    }

    /// Relevance: someone builds on it, or a leading organization ships it.
    pub fn is_relevant(&self, candidate: &Candidate) -> bool {
        if candidate.enrichment.lineage.dependents > 0 {
            return true;
        }
        candidate
            .organization()
            .map(|org| self.leading_organizations.iter().any(|l| l == org))
            .unwrap_or(false)
    }

    /// All three predicates together.
    pub fn passes(&self, candidate: &Candidate) -> bool {
        self.within_window(&candidate.summary)
            && self.has_valid_model_index(&candidate.summary)
            && self.is_relevant(candidate)
    }
}
