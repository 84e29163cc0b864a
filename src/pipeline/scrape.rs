// src/pipeline/scrape.rs

//! Scrape pipeline: catalogue → CSV table (→ document store).

use crate::error::Result;
use crate::models::Config;
use crate::services::{CatalogueScraper, PageSource};
use crate::storage::{RecordStore, WriteSummary};
use crate::utils::log;

/// Scrape `page_count` pages and overwrite the CSV table.
///
/// With `to_document_store` (or `document_store.enabled`) the records are
/// also inserted into the document store.
pub async fn run_scrape<S: PageSource>(
    config: &Config,
    scraper: &CatalogueScraper<S>,
    page_count: u32,
    to_document_store: bool,
) -> Result<WriteSummary> {
    let messages = &config.messages;
    log::header(
        &messages
            .scrape_starting
            .replace("{pages}", &page_count.to_string()),
    );

    let with_documents = to_document_store || config.document_store.enabled;
    let total_steps = if with_documents { 3 } else { 2 };

    log::step(1, total_steps, "Fetching catalogue pages");
    let outcome = scraper.scrape_with_outcome(page_count).await?;
    log::success(
        &messages
            .scrape_complete
            .replace("{count}", &outcome.records.len().to_string())
            .replace("{secs}", &format!("{:.1}", outcome.elapsed_secs())),
    );

    let pages_fetched = outcome.pages_fetched;
    let entries_skipped = outcome.entries_skipped;
    let store = RecordStore::new(outcome.records);

    log::step(2, total_steps, "Writing CSV table");
    let summary = store.to_csv(&config.storage.csv_path).await?;
    log::success(&messages.csv_saved.replace("{path}", &summary.location));

    if with_documents {
        log::step(3, total_steps, "Inserting into document store");
        write_document_store(config, &store).await?;
    }

    log::summary(
        "Scrape",
        &[
            ("Pages", pages_fetched.to_string()),
            ("Books", summary.record_count.to_string()),
            ("Skipped entries", entries_skipped.to_string()),
            ("Written at", summary.timestamp.to_rfc3339()),
        ],
    );

    Ok(summary)
}

#[cfg(feature = "mongo")]
async fn write_document_store(config: &Config, store: &RecordStore) -> Result<()> {
    let summary = store.to_document_store(&config.document_store).await?;
    log::success(
        &config
            .messages
            .document_store_saved
            .replace("{count}", &summary.record_count.to_string())
            .replace("{target}", &summary.location),
    );
    Ok(())
}

#[cfg(not(feature = "mongo"))]
async fn write_document_store(_config: &Config, _store: &RecordStore) -> Result<()> {
    Err(crate::error::AppError::config(
        "document store requested but built without the `mongo` feature",
    ))
}
