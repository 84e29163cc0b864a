// src/app/session.rs

//! Interactive session: view state plus memoized scrape and table results.

use std::sync::Arc;

use crate::dashboard::{BookFilter, DashboardView};
use crate::error::{AppError, Result};
use crate::models::{BookRecord, Config};
use crate::services::{CatalogueScraper, PageSource};
use crate::storage::{CsvStore, LoadOutcome, RecordStore, WriteSummary};

use super::{AppState, Memo, View};

/// One user session over the scraper and the dashboard.
pub struct Session<S> {
    config: Arc<Config>,
    scraper: CatalogueScraper<S>,
    state: AppState,
    scraped: Memo<Vec<BookRecord>>,
    table: Memo<LoadOutcome>,
}

impl<S: PageSource> Session<S> {
    pub fn new(config: Arc<Config>, scraper: CatalogueScraper<S>) -> Self {
        Self {
            config,
            scraper,
            state: AppState::new(),
            scraped: Memo::new(),
            table: Memo::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn scraper(&self) -> &CatalogueScraper<S> {
        &self.scraper
    }

    /// Scrape the catalogue and overwrite the CSV table.
    ///
    /// The previous scrape result is reused unless `refresh` is set. The
    /// cached table is always dropped so the dashboard rereads the file.
    pub async fn scrape(&mut self, refresh: bool) -> Result<WriteSummary> {
        if refresh {
            self.scraped.invalidate();
        } else if self.scraped.is_cached() {
            log::info!("Reusing records from the previous scrape");
        }

        let scraper = &self.scraper;
        let page_count = scraper.default_page_count();
        let records = self
            .scraped
            .get_or_try_insert_with(|| scraper.scrape(page_count))
            .await?
            .clone();

        let summary = RecordStore::new(records)
            .to_csv(&self.config.storage.csv_path)
            .await?;

        self.table.invalidate();
        self.state.mark_scraped();
        Ok(summary)
    }

    pub fn open_dashboard(&mut self) -> Result<()> {
        self.state.open_dashboard(&self.config.messages.scrape_first)
    }

    pub fn go_home(&mut self) {
        self.state.go_home();
    }

    /// The book table, read from disk at most once per scrape.
    pub async fn load_data(&mut self) -> Result<&LoadOutcome> {
        let store = CsvStore::new(&self.config.storage.csv_path);
        self.table
            .get_or_try_insert_with(|| async move { store.load().await })
            .await
    }

    /// Dashboard contents for `filter`; `None` when the table is missing or empty.
    pub async fn dashboard(&mut self, filter: BookFilter) -> Result<Option<DashboardView>> {
        if self.state.view() != View::Dashboard {
            return Err(AppError::navigation(&self.config.messages.scrape_first));
        }

        let config = Arc::clone(&self.config);
        let outcome = self.load_data().await?;
        if let LoadOutcome::NotFound(path) = outcome {
            log::warn!(
                "{}",
                config
                    .messages
                    .data_not_found
                    .replace("{path}", &path.display().to_string())
            );
        }
        if outcome.records().is_empty() {
            log::warn!("{}", config.messages.no_data);
            return Ok(None);
        }

        Ok(Some(DashboardView::build(
            outcome.records(),
            filter,
            &config.dashboard,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fixtures::two_page_fixture;
    use tempfile::TempDir;

    fn session(tmp: &TempDir) -> Session<crate::services::fixtures::FixturePages> {
        let mut config = Config::default();
        config.scraper.page_count = 2;
        config.storage.csv_path = tmp.path().join("books_data.csv");
        let scraper = CatalogueScraper::with_source(&config, two_page_fixture()).unwrap();
        Session::new(Arc::new(config), scraper)
    }

    #[tokio::test]
    async fn test_dashboard_guarded_until_scrape() {
        let tmp = TempDir::new().unwrap();
        let mut session = session(&tmp);

        assert!(matches!(session.open_dashboard(), Err(AppError::Navigation(_))));
        assert!(session.dashboard(BookFilter::default()).await.is_err());

        let summary = session.scrape(false).await.unwrap();
        assert_eq!(summary.record_count, 3);
        session.open_dashboard().unwrap();

        let view = session.dashboard(BookFilter::default()).await.unwrap().unwrap();
        assert_eq!(view.rating_options, vec![1, 3]);
        assert_eq!(view.filter.rating, Some(1));
        assert_eq!(view.records.len(), 1);

        session.go_home();
        assert_eq!(session.state().view(), View::Home);
    }

    #[tokio::test]
    async fn test_scrape_is_memoized_until_refresh() {
        let tmp = TempDir::new().unwrap();
        let mut session = session(&tmp);

        session.scrape(false).await.unwrap();
        session.scrape(false).await.unwrap();
        assert_eq!(session.scraper.source().request_count(), 2);

        session.scrape(true).await.unwrap();
        assert_eq!(session.scraper.source().request_count(), 4);
    }

    #[tokio::test]
    async fn test_new_scrape_invalidates_table() {
        let tmp = TempDir::new().unwrap();
        let mut session = session(&tmp);

        assert!(session.load_data().await.unwrap().is_not_found());

        session.scrape(false).await.unwrap();
        assert_eq!(session.load_data().await.unwrap().records().len(), 3);
    }
}
