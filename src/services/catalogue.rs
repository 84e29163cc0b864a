// src/services/catalogue.rs

//! Catalogue scraper service.
//!
//! Walks the paginated listing one page at a time and collects book records
//! in page order.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use url::Url;

use crate::error::Result;
use crate::models::{BookRecord, Config, ScraperConfig};
use crate::services::CatalogueParser;
use crate::utils::http;

/// Source of catalogue page markup.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the body of one page.
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// Page source backed by a reqwest client.
pub struct HttpPageSource {
    client: reqwest::Client,
}

impl HttpPageSource {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        Ok(Self {
            client: http::create_client(config)?,
        })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch(&self, url: &Url) -> Result<String> {
        http::fetch_text(&self.client, url).await
    }
}

/// Summary of a scrape run.
#[derive(Debug)]
pub struct ScrapeOutcome {
    pub records: Vec<BookRecord>,
    pub pages_fetched: u32,
    pub entries_skipped: usize,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl ScrapeOutcome {
    /// Wall-clock duration of the run in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        (self.end_time - self.start_time).num_milliseconds() as f64 / 1000.0
    }
}

/// Service for scraping book records from the catalogue.
pub struct CatalogueScraper<S> {
    source: S,
    parser: CatalogueParser,
    scraper: ScraperConfig,
    page_message: String,
}

impl CatalogueScraper<HttpPageSource> {
    /// Create a scraper that fetches pages over HTTP.
    pub fn http(config: &Config) -> Result<Self> {
        Self::with_source(config, HttpPageSource::new(&config.scraper)?)
    }
}

impl<S: PageSource> CatalogueScraper<S> {
    /// Create a scraper reading pages from `source`.
    pub fn with_source(config: &Config, source: S) -> Result<Self> {
        Ok(Self {
            source,
            parser: CatalogueParser::new(&config.selectors)?,
            scraper: config.scraper.clone(),
            page_message: config.messages.scrape_page.clone(),
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Default number of pages visited per scrape.
    pub fn default_page_count(&self) -> u32 {
        self.scraper.page_count
    }

    /// Scrape pages `1..=page_count` and return their records.
    pub async fn scrape(&self, page_count: u32) -> Result<Vec<BookRecord>> {
        Ok(self.scrape_with_outcome(page_count).await?.records)
    }

    /// Scrape pages `1..=page_count`, one request at a time.
    ///
    /// The first failed fetch aborts the run; records gathered so far are
    /// discarded.
    pub async fn scrape_with_outcome(&self, page_count: u32) -> Result<ScrapeOutcome> {
        let start_time = Utc::now();
        let mut records = Vec::new();
        let mut entries_skipped = 0;

        for page in 1..=page_count {
            let url = self.scraper.page_url(page)?;
            log::debug!("Fetching page {}/{}: {}", page, page_count, url);

            let body = self.source.fetch(&url).await?;
            let parsed = self.parser.parse_page(&body);

            if parsed.records.is_empty() {
                log::warn!("No entries found on page {} ({})", page, url);
            }
            log::info!(
                "{}",
                self.page_message
                    .replace("{page}", &page.to_string())
                    .replace("{pages}", &page_count.to_string())
                    .replace("{count}", &parsed.records.len().to_string())
            );
            if parsed.skipped > 0 {
                log::warn!("Skipped {} malformed entries on page {}", parsed.skipped, page);
            }

            entries_skipped += parsed.skipped;
            records.extend(parsed.records);
        }

        Ok(ScrapeOutcome {
            records,
            pages_fetched: page_count,
            entries_skipped,
            start_time,
            end_time: Utc::now(),
        })
    }
}
