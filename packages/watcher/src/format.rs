//! Renders surviving candidates into one MarkdownV2 message.

use chrono::{DateTime, Utc};
use telegram::{escape_markdown, escape_url};

use crate::candidate::Candidate;
use crate::window::Window;

/// Telegram caps message text at 4096 characters; anything longer is
/// truncated at a line boundary with an "and N more" marker.
pub const MESSAGE_LIMIT: usize = 4096;

/// Text sent when no candidate survived the filters.
pub const NO_MODELS_TEXT: &str = "🤷 No new models\\.";

/// Build the full notification message.
pub fn format_report(
    candidates: &[Candidate],
    window: &Window,
    threshold: DateTime<Utc>,
) -> String {
    let footer = footer(window);
    if candidates.is_empty() {
        return format!("{}\n\n{}", NO_MODELS_TEXT, footer);
    }

    let (new_models, modified): (Vec<&Candidate>, Vec<&Candidate>) =
        candidates.iter().partition(|c| c.is_new(threshold));

    let mut lines: Vec<String> = Vec::new();
    if !new_models.is_empty() {
        lines.push("🆕 *New models:*".to_string());
        for candidate in &new_models {
            lines.push(candidate_line(candidate, threshold, false));
        }
    }
    if !modified.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("🔄 *Modified models:*".to_string());
        for candidate in &modified {
            lines.push(candidate_line(candidate, threshold, true));
        }
    }

    assemble(lines, &footer)
}

fn footer(window: &Window) -> String {
    format!("🔍 _Looking back {}\\._", escape_markdown(&window.describe()))
}

/// One bullet per candidate: escaped name, link, organization, lineage note,
/// and for modified entries the files touched inside the window.
fn candidate_line(candidate: &Candidate, threshold: DateTime<Utc>, modified: bool) -> String {
    let name = escape_markdown(candidate.id());
    let url = escape_url(&format!("https://huggingface.co/{}", candidate.id()));

    let mut notes: Vec<String> = Vec::new();
    if let Some(org) = candidate.organization() {
        notes.push(escape_markdown(org));
    }
    notes.push(if candidate.enrichment.lineage.derived {
        "derived".to_string()
    } else {
        "base model".to_string()
    });
    let dependents = candidate.enrichment.lineage.dependents;
    if dependents > 0 {
        let plural = if dependents == 1 { "" } else { "s" };
        notes.push(format!("{} dependent{}", dependents, plural));
    }
    if modified {
        let touched: Vec<String> = candidate
            .enrichment
            .files_changed_since(threshold)
            .iter()
            .map(|f| {
                if f.is_directory {
                    escape_markdown(&format!("{}/", f.name))
                } else {
                    escape_markdown(&f.name)
                }
            })
            .collect();
        if !touched.is_empty() {
            notes.push(format!("updated: {}", touched.join(", ")));
        }
    }

    format!(" • [{}]({}) _\\({}\\)_", name, url, notes.join(", "))
}

/// Join lines and footer, dropping trailing candidate lines until the text
/// fits the platform limit.
fn assemble(mut lines: Vec<String>, footer: &str) -> String {
    let mut omitted = 0usize;
    loop {
        let mut text = lines.join("\n");
        if omitted > 0 {
            text.push_str(&format!("\n _…and {} more\\._", omitted));
        }
        text.push_str("\n\n");
        text.push_str(footer);

        if text.chars().count() <= MESSAGE_LIMIT || lines.is_empty() {
            return text;
        }

        if let Some(dropped) = lines.pop() {
            if dropped.starts_with(" • ") {
                omitted += 1;
            }
        }
        // A section header or separator left dangling at the end carries no
        // content; drop it without counting.
        while matches!(lines.last(), Some(line) if !line.starts_with(" • ")) {
            lines.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use hub_client::ModelSummary;
    use lineage::{Enrichment, FileRecord, Lineage};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
    }

    fn candidate(id: &str, derived: bool, dependents: u64, files: Vec<FileRecord>) -> Candidate {
        Candidate::new(
            ModelSummary {
                id: id.to_string(),
                created_at: Some(now()),
                last_modified: Some(now()),
                tags: vec!["model-index".to_string()],
                downloads: None,
                likes: None,
                pipeline_tag: None,
            },
            Enrichment {
                lineage: Lineage::new(derived, dependents),
                files,
            },
        )
    }

    fn file(name: &str, hour: u32, is_directory: bool) -> FileRecord {
        FileRecord {
            name: name.to_string(),
            is_directory,
            changed_at: Utc.with_ymd_and_hms(2026, 8, 6, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_empty_report_uses_designated_text() {
        let window = Window::new(0, 1, 0);
        let message = format_report(&[], &window, now() - Duration::hours(1));

        assert!(message.starts_with(NO_MODELS_TEXT));
        assert!(message.contains("Looking back 1 hour"));
    }

    #[test]
    fn test_new_model_line() {
        let window = Window::new(0, 1, 0);
        let threshold = now() - Duration::hours(1);
        let candidates = vec![candidate(
            "mistralai/compact-7b-v0.2",
            false,
            3,
            vec![file("model.safetensors", 11, false)],
        )];

        let message = format_report(&candidates, &window, threshold);
        assert!(message.contains("🆕 *New models:*"));
        assert!(message.contains("[mistralai/compact\\-7b\\-v0\\.2](https://huggingface.co/mistralai/compact-7b-v0.2)"));
        assert!(message.contains("mistralai, base model, 3 dependents"));
        assert!(!message.contains("Modified models"));
    }

    #[test]
    fn test_modified_model_names_updated_files() {
        let window = Window::new(0, 1, 0);
        let threshold = now() - Duration::hours(1);
        // One stale file keeps it out of the new bucket; only the fresh ones
        // are named.
        let candidates = vec![candidate(
            "org/tuned",
            true,
            0,
            vec![
                file("config.json", 11, false),
                file("assets", 11, true),
                file("README.md", 2, false),
            ],
        )];

        let message = format_report(&candidates, &window, threshold);
        assert!(message.contains("🔄 *Modified models:*"));
        assert!(message.contains("derived"));
        assert!(message.contains("updated: config\\.json, assets/"));
        assert!(!message.contains("README"));
    }

    #[test]
    fn test_both_sections_in_order() {
        let window = Window::new(0, 1, 0);
        let threshold = now() - Duration::hours(1);
        let candidates = vec![
            candidate("org/old-favorite", false, 12, vec![file("model.bin", 11, false), file("LICENSE", 1, false)]),
            candidate("org/brand-new", false, 0, vec![file("model.bin", 11, false)]),
        ];

        let message = format_report(&candidates, &window, threshold);
        let new_at = message.find("New models").unwrap();
        let modified_at = message.find("Modified models").unwrap();
        assert!(new_at < modified_at);
    }

    #[test]
    fn test_long_report_is_truncated_with_marker() {
        let window = Window::new(1, 0, 0);
        let threshold = now() - Duration::days(1);
        let candidates: Vec<Candidate> = (0..200)
            .map(|i| {
                candidate(
                    &format!("some-organization/a-rather-long-model-name-{:03}", i),
                    false,
                    1,
                    vec![file("model.safetensors", 11, false)],
                )
            })
            .collect();

        let message = format_report(&candidates, &window, threshold);
        assert!(message.chars().count() <= MESSAGE_LIMIT);
        assert!(message.contains("more\\."));
        // The footer survives truncation.
        assert!(message.contains("Looking back 1 day"));
    }

    #[test]
    fn test_short_report_is_not_truncated() {
        let window = Window::new(0, 1, 0);
        let threshold = now() - Duration::hours(1);
        let candidates = vec![candidate("org/m", false, 1, Vec::new())];

        let message = format_report(&candidates, &window, threshold);
        assert!(!message.contains("…and"));
    }
}
