// src/services/mod.rs

//! Service layer for the scraper application.
//!
//! This module contains the business logic for:
//! - Catalogue walking (`CatalogueScraper`, `PageSource`)
//! - Listing markup parsing (`CatalogueParser`)

mod catalogue;
mod parser;

pub use catalogue::{CatalogueScraper, HttpPageSource, PageSource, ScrapeOutcome};
pub use parser::{CatalogueParser, ParsedPage};

#[cfg(test)]
pub(crate) use catalogue::tests as fixtures;
