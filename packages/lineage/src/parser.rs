//! Parsers for the structured data embedded in model pages.
//!
//! The page markup is an upstream contract in name only; everything here is
//! best-effort regex extraction, and callers are expected to degrade to an
//! empty [`Lineage`] when a page stops parsing.

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::error::{LineageError, Result};
use crate::types::{FileRecord, Lineage};

/// Heading that opens the lineage block on a model page.
const MODEL_TREE_MARKER: &str = "Model tree for";

/// Parse the "model tree" block of a model page.
///
/// The block names a base model when the model was produced from another one,
/// and lists dependent groups ("Finetunes", "Adapters", "Quantizations",
/// "Merges"), each with an "N models" count.
pub fn parse_model_tree(html: &str) -> Result<Lineage> {
    let start = html
        .find(MODEL_TREE_MARKER)
        .ok_or(LineageError::MissingModelTree)?;

    // The block runs until the next heading (or end of document).
    let body = &html[start + MODEL_TREE_MARKER.len()..];
    let section = match body.find("<h2") {
        Some(end) => &body[..end],
        None => body,
    };

    let derived = section.contains("Base model");

    let count_pattern = Regex::new(r"(\d[\d,]*)\s+models?\b").unwrap();
    let dependents = count_pattern
        .captures_iter(section)
        .filter_map(|cap| cap.get(1))
        .filter_map(|m| m.as_str().replace(',', "").parse::<u64>().ok())
        .sum();

    Ok(Lineage::new(derived, dependents))
}

/// Parse the file listing of a model's tree page.
///
/// Each listed entry carries a name, a directory marker in its icon class,
/// and a `<time datetime="...">` change timestamp.
pub fn parse_file_listing(html: &str) -> Result<Vec<FileRecord>> {
    let item_pattern = Regex::new(r"(?s)<li\b[^>]*>(.*?)</li>").unwrap();
    let name_pattern = Regex::new(r"<a\b[^>]*>\s*([^<]+?)\s*</a>").unwrap();
    let time_pattern = Regex::new(r#"<time\b[^>]*datetime="([^"]+)""#).unwrap();
    let dir_pattern = Regex::new(r#"<svg\b[^>]*class="[^"]*text-blue"#).unwrap();

    let mut files = Vec::new();
    for item in item_pattern.captures_iter(html) {
        let item = item.get(1).map(|m| m.as_str()).unwrap_or_default();

        let Some(datetime) = time_pattern.captures(item).and_then(|c| c.get(1)) else {
            continue;
        };
        let Some(name) = name_pattern.captures(item).and_then(|c| c.get(1)) else {
            continue;
        };

        files.push(FileRecord {
            name: name.as_str().to_string(),
            is_directory: dir_pattern.is_match(item),
            changed_at: parse_change_time(datetime.as_str())?,
        });
    }

    if files.is_empty() {
        return Err(LineageError::MissingFileListing);
    }
    Ok(files)
}

/// Parse a tree-page timestamp.
///
/// The page emits second-resolution naive UTC timestamps; full RFC 3339 is
/// accepted as well in case the markup grows an offset.
fn parse_change_time(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| LineageError::MalformedTimestamp {
            value: value.to_string(),
        })
}
