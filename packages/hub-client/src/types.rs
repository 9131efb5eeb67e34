use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One model entry from the `/api/models` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSummary {
    /// Repository id in `namespace/name` form (bare `name` for legacy repos).
    pub id: String,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "lastModified")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub downloads: Option<i64>,
    #[serde(default)]
    pub likes: Option<i64>,
    #[serde(rename = "pipeline_tag")]
    pub pipeline_tag: Option<String>,
}

impl ModelSummary {
    /// Owning namespace, i.e. everything before the first `/`.
    ///
    /// Legacy repos without a namespace have no organization.
    pub fn organization(&self) -> Option<&str> {
        self.id.split_once('/').map(|(org, _)| org)
    }

    /// Whether the entry declares a structured model-index metadata block.
    ///
    /// The Hub surfaces the block as a `model-index` tag on the listing.
    pub fn has_model_index(&self) -> bool {
        self.tags.iter().any(|t| t == "model-index")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_entry_deserializes() {
        let json = r#"{
            "_id": "6645f1",
            "id": "leading-org-x/compact-7b",
            "likes": 42,
            "downloads": 1337,
            "tags": ["transformers", "model-index", "text-generation"],
            "pipeline_tag": "text-generation",
            "createdAt": "2026-08-06T09:00:00.000Z",
            "lastModified": "2026-08-06T10:30:00.000Z"
        }"#;

        let model: ModelSummary = serde_json::from_str(json).unwrap();
        assert_eq!(model.id, "leading-org-x/compact-7b");
        assert_eq!(model.organization(), Some("leading-org-x"));
        assert!(model.has_model_index());
        assert_eq!(model.likes, Some(42));
        assert!(model.last_modified.is_some());
    }

    #[test]
    fn test_sparse_entry_deserializes() {
        // The listing omits fields for some repos; nothing should be required
        // beyond the id.
        let json = r#"{"id": "bert-base-uncased"}"#;

        let model: ModelSummary = serde_json::from_str(json).unwrap();
        assert_eq!(model.organization(), None);
        assert!(!model.has_model_index());
        assert!(model.last_modified.is_none());
    }
}
