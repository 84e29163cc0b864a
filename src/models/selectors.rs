// src/models/selectors.rs

//! CSS selectors for scraping a catalogue page.

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// CSS selectors for scraping a catalogue page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueSelectors {
    /// Selector for each listing entry on a page
    #[serde(default = "default_entry")]
    pub entry: String,

    /// Selector for the title link within an entry
    #[serde(default = "default_title")]
    pub title: String,

    /// Attribute of the title link holding the full title
    #[serde(default = "default_title_attr")]
    pub title_attr: String,

    /// Selector for the price text within an entry
    #[serde(default = "default_price")]
    pub price: String,

    /// Selector for the element carrying the star-class tokens
    #[serde(default = "default_rating")]
    pub rating: String,

    /// Selector for the stock status text within an entry
    #[serde(default = "default_availability")]
    pub availability: String,
}

fn default_entry() -> String {
    "article.product_pod".to_string()
}

fn default_title() -> String {
    "h3 a".to_string()
}

fn default_title_attr() -> String {
    "title".to_string()
}

fn default_price() -> String {
    "p.price_color".to_string()
}

fn default_rating() -> String {
    "p.star-rating".to_string()
}

fn default_availability() -> String {
    "p.instock.availability".to_string()
}

impl Default for CatalogueSelectors {
    fn default() -> Self {
        Self {
            entry: default_entry(),
            title: default_title(),
            title_attr: default_title_attr(),
            price: default_price(),
            rating: default_rating(),
            availability: default_availability(),
        }
    }
}

impl CatalogueSelectors {
    /// All selector strings paired with their field name.
    pub fn named(&self) -> [(&'static str, &str); 5] {
        [
            ("entry", &self.entry),
            ("title", &self.title),
            ("price", &self.price),
            ("rating", &self.rating),
            ("availability", &self.availability),
        ]
    }

    /// Check that every selector parses and the title attribute is set.
    pub fn validate(&self) -> Result<()> {
        for (name, selector) in self.named() {
            Selector::parse(selector).map_err(|e| {
                AppError::selector(selector, format!("selectors.{name}: {e:?}"))
            })?;
        }
        if self.title_attr.trim().is_empty() {
            return Err(AppError::validation("selectors.title_attr is empty"));
        }
        Ok(())
    }
}
