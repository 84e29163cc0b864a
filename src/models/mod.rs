// src/models/mod.rs

//! Domain models for the scraper application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod book;
mod config;
mod locale;
mod selectors;

// Re-export all public types
pub use book::{BookRecord, MAX_RATING, parse_price, rating_from_classes, rating_from_token};
pub use config::{
    Config, DashboardConfig, DocumentStoreConfig, LoggingConfig, PAGE_PLACEHOLDER, ScraperConfig,
    StorageConfig,
};
pub use locale::MessageLocale;
pub use selectors::CatalogueSelectors;
