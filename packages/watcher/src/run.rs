//! The single-pass pipeline: fetch, enrich, filter, format, notify.

use anyhow::{Context, Result};
use chrono::Utc;
use hub_client::{HubClient, ModelSummary};
use lineage::{Enricher, Enrichment, HttpPageSource, PageSource};
use telegram::{TelegramOptions, TelegramService};
use tracing::{debug, info};

use crate::candidate::Candidate;
use crate::config::Config;
use crate::filter::FilterCriteria;
use crate::format;
use crate::window::Window;

/// Winnow the raw listing down to the candidates worth announcing.
///
/// The cheap predicates (recency, model-index) run on the listing record
/// alone; only candidates that can still qualify get their pages fetched.
/// The relevance predicate then runs on the enriched lineage, and file
/// records are fetched last, for survivors only.
pub async fn collect_candidates<S: PageSource>(
    models: Vec<ModelSummary>,
    enricher: &Enricher<S>,
    criteria: &FilterCriteria,
) -> Vec<Candidate> {
    let total = models.len();
    let prefiltered: Vec<ModelSummary> = models
        .into_iter()
        .filter(|m| criteria.within_window(m) && criteria.has_valid_model_index(m))
        .collect();
    info!(
        total,
        remaining = prefiltered.len(),
        "Applied listing-level filters"
    );

    let mut survivors: Vec<Candidate> = Vec::new();
    for model in prefiltered {
        let lineage = enricher.fetch_lineage(&model.id).await;
        let mut candidate = Candidate::new(
            model,
            Enrichment {
                lineage,
                files: Vec::new(),
            },
        );

        if !criteria.is_relevant(&candidate) {
            debug!(model_id = %candidate.id(), "Dropped: no dependents and not a leading organization");
            continue;
        }

        candidate.enrichment.files = enricher.fetch_files(candidate.id()).await;
        info!(
            model_id = %candidate.id(),
            dependents = candidate.enrichment.lineage.dependents,
            downloads = ?candidate.summary.downloads,
            likes = ?candidate.summary.likes,
            "Candidate selected"
        );
        survivors.push(candidate);
    }

    info!(count = survivors.len(), "Candidates surviving all filters");
    survivors
}

/// One full watcher pass. Fatal errors bubble up; the caller turns them into
/// a non-zero exit.
pub async fn run(window: Window, config: Config) -> Result<()> {
    let threshold = Utc::now() - window.duration();
    info!(
        lookback = %window.describe(),
        threshold = %threshold,
        "Starting watcher pass"
    );

    let hub = match &config.hub_token {
        Some(token) => HubClient::with_token(token),
        None => HubClient::new(),
    };
    let models = hub
        .list_recent_models(threshold)
        .await
        .context("Failed to fetch model listing")?;

    let enricher = Enricher::new(HttpPageSource::new());
    let criteria = FilterCriteria::new(threshold);
    let candidates = collect_candidates(models, &enricher, &criteria).await;

    let message = format::format_report(&candidates, &window, threshold);
    info!("Sending message:\n{}", message);

    let service = TelegramService::new(TelegramOptions {
        bot_token: config.bot_token,
        chat_id: config.group_chat_id,
    });
    service
        .send_group_message(&message)
        .await
        .context("Failed to deliver notification")?;

    Ok(())
}
