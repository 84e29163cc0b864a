// src/models/config.rs

//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{CatalogueSelectors, MessageLocale};

/// Placeholder substituted with the page number in `scraper.base_url`.
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP and pagination settings
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// CSS selectors for catalogue entries
    #[serde(default)]
    pub selectors: CatalogueSelectors,

    /// CSV table location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Optional document store target
    #[serde(default)]
    pub document_store: DocumentStoreConfig,

    /// Dashboard computation and export settings
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Log verbosity
    #[serde(default)]
    pub logging: LoggingConfig,

    /// User-facing messages
    #[serde(default)]
    pub messages: MessageLocale,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Load configuration, using defaults only when the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_if_present(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}. Using defaults.", path.display());
            return Ok(Self::default());
        }
        Self::load(path).map_err(|e| {
            AppError::config(format!("failed to load {}: {}", path.display(), e))
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.scraper.user_agent.trim().is_empty() {
            return Err(AppError::validation("scraper.user_agent is empty"));
        }
        if self.scraper.timeout_secs == 0 {
            return Err(AppError::validation("scraper.timeout_secs must be > 0"));
        }
        if !self.scraper.base_url.contains(PAGE_PLACEHOLDER) {
            return Err(AppError::validation(format!(
                "scraper.base_url must contain {PAGE_PLACEHOLDER}"
            )));
        }
        self.scraper.page_url(1)?;
        self.selectors.validate()?;
        if self.storage.csv_path.as_os_str().is_empty() {
            return Err(AppError::validation("storage.csv_path is empty"));
        }
        if self.document_store.database.trim().is_empty()
            || self.document_store.collection.trim().is_empty()
        {
            return Err(AppError::validation(
                "document_store.database and document_store.collection must be set",
            ));
        }
        if self.dashboard.price_bins == 0 || self.dashboard.rating_bins == 0 {
            return Err(AppError::validation("dashboard bins must be > 0"));
        }
        Ok(())
    }
}

/// HTTP client and pagination settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Page URL template, `{page}` is replaced with 1..=page_count
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Number of catalogue pages visited per scrape
    #[serde(default = "defaults::page_count")]
    pub page_count: u32,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl ScraperConfig {
    /// URL of catalogue page `page`.
    pub fn page_url(&self, page: u32) -> Result<url::Url> {
        let raw = self.base_url.replace(PAGE_PLACEHOLDER, &page.to_string());
        Ok(url::Url::parse(&raw)?)
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            page_count: defaults::page_count(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Location of the CSV table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "defaults::csv_path")]
    pub csv_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            csv_path: defaults::csv_path(),
        }
    }
}

/// Document store connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStoreConfig {
    /// Write to the document store after every scrape
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "defaults::document_uri")]
    pub uri: String,

    #[serde(default = "defaults::database")]
    pub database: String,

    #[serde(default = "defaults::collection")]
    pub collection: String,
}

impl Default for DocumentStoreConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            uri: defaults::document_uri(),
            database: defaults::database(),
            collection: defaults::collection(),
        }
    }
}

/// Dashboard computation and export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Number of price histogram bins
    #[serde(default = "defaults::price_bins")]
    pub price_bins: usize,

    /// Number of rating histogram bins
    #[serde(default = "defaults::rating_bins")]
    pub rating_bins: usize,

    /// Default file name of the filtered table export
    #[serde(default = "defaults::filtered_csv_name")]
    pub filtered_csv_name: String,

    /// Default file name of the chart bundle export
    #[serde(default = "defaults::chart_bundle_name")]
    pub chart_bundle_name: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            price_bins: defaults::price_bins(),
            rating_bins: defaults::rating_bins(),
            filtered_csv_name: defaults::filtered_csv_name(),
            chart_bundle_name: defaults::chart_bundle_name(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // Scraper defaults
    pub fn base_url() -> String {
        "http://books.toscrape.com/catalogue/page-{page}.html".into()
    }
    pub fn page_count() -> u32 {
        50
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; bookcrawler/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Storage defaults
    pub fn csv_path() -> PathBuf {
        PathBuf::from("books_data.csv")
    }
    pub fn document_uri() -> String {
        "mongodb://localhost:27017/".into()
    }
    pub fn database() -> String {
        "tp_webscraping".into()
    }
    pub fn collection() -> String {
        "livres".into()
    }

    // Dashboard defaults
    pub fn price_bins() -> usize {
        10
    }
    pub fn rating_bins() -> usize {
        5
    }
    pub fn filtered_csv_name() -> String {
        "livres_filtres.csv".into()
    }
    pub fn chart_bundle_name() -> String {
        "graphique_livres.zip".into()
    }

    pub fn log_level() -> String {
        "info".into()
    }
}
