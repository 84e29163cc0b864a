// src/services/parser.rs

//! Catalogue page parser.
//!
//! Turns the markup of one listing page into book records using the
//! configured CSS selectors.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{BookRecord, CatalogueSelectors};

/// Records parsed from one page, plus the number of entries dropped.
#[derive(Debug, Default)]
pub struct ParsedPage {
    pub records: Vec<BookRecord>,
    pub skipped: usize,
}

/// Selector-driven parser for catalogue listing pages.
pub struct CatalogueParser {
    entry: Selector,
    title: Selector,
    title_attr: String,
    price: Selector,
    rating: Selector,
    availability: Selector,
}

impl CatalogueParser {
    /// Compile the configured selectors.
    pub fn new(selectors: &CatalogueSelectors) -> Result<Self> {
        Ok(Self {
            entry: Self::parse_selector(&selectors.entry)?,
            title: Self::parse_selector(&selectors.title)?,
            title_attr: selectors.title_attr.clone(),
            price: Self::parse_selector(&selectors.price)?,
            rating: Self::parse_selector(&selectors.rating)?,
            availability: Self::parse_selector(&selectors.availability)?,
        })
    }

    /// Parse every listing entry of a page, in document order.
    ///
    /// Entries missing a required field are skipped and counted.
    pub fn parse_page(&self, html: &str) -> ParsedPage {
        let document = Html::parse_document(html);
        let mut page = ParsedPage::default();

        for (position, entry) in document.select(&self.entry).enumerate() {
            match self.parse_entry(&entry) {
                Ok(record) => page.records.push(record),
                Err(error) => {
                    page.skipped += 1;
                    log::warn!("Skipping entry #{}: {}", position + 1, error);
                }
            }
        }
        page
    }

    fn parse_entry(&self, entry: &ElementRef) -> Result<BookRecord> {
        let title = entry
            .select(&self.title)
            .next()
            .and_then(|link| link.value().attr(&self.title_attr))
            .ok_or_else(|| AppError::parse("entry", "missing title link"))?;

        let raw_price: String = entry
            .select(&self.price)
            .next()
            .ok_or_else(|| AppError::parse("entry", "missing price"))?
            .text()
            .collect();

        let availability: String = entry
            .select(&self.availability)
            .next()
            .ok_or_else(|| AppError::parse("entry", "missing availability"))?
            .text()
            .collect();

        // A missing rating element counts as an unrecognized rating.
        let star_classes = entry
            .select(&self.rating)
            .next()
            .map(|el| el.value().classes().collect::<Vec<_>>().join(" "))
            .unwrap_or_default();

        BookRecord::from_raw(title, &raw_price, &availability, &star_classes)
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, price: &str, stars: &str, stock: &str) -> String {
        format!(
            r#"<li><article class="product_pod">
                <p class="star-rating {stars}"><i class="icon-star"></i></p>
                <h3><a href="book/index.html" title="{title}">{title}...</a></h3>
                <div class="product_price">
                    <p class="price_color">{price}</p>
                    <p class="instock availability"><i class="icon-ok"></i>
                        {stock}
                    </p>
                </div>
            </article></li>"#
        )
    }

    fn page(entries: &[String]) -> String {
        format!(
            "<html><body><ol class=\"row\">{}</ol></body></html>",
            entries.concat()
        )
    }

    fn parser() -> CatalogueParser {
        CatalogueParser::new(&CatalogueSelectors::default()).unwrap()
    }

    #[test]
    fn test_parse_page_in_document_order() {
        let html = page(&[
            entry("A Light in the Attic", "£51.77", "Three", "In stock"),
            entry("Tipping the Velvet", "£53.74", "One", "In stock"),
            entry("Soumission", "£50.10", "Five", "In stock"),
        ]);
        let parsed = parser().parse_page(&html);

        assert_eq!(parsed.skipped, 0);
        let titles: Vec<_> = parsed.records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["A Light in the Attic", "Tipping the Velvet", "Soumission"]);
        assert_eq!(parsed.records[0].price, 51.77);
        assert_eq!(parsed.records[0].availability, "In stock");
        assert_eq!(parsed.records[2].rating, 5);
    }

    #[test]
    fn test_unknown_star_class_maps_to_zero() {
        let html = page(&[entry("Unrated", "£10.00", "Zero", "In stock")]);
        let parsed = parser().parse_page(&html);
        assert_eq!(parsed.records[0].rating, 0);
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let html = page(&[
            entry("Good", "£10.00", "Two", "In stock"),
            entry("No price", "£", "Two", "In stock"),
            entry("", "£12.00", "Two", "In stock"),
        ]);
        let parsed = parser().parse_page(&html);
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.skipped, 2);
    }

    #[test]
    fn test_page_without_entries() {
        let parsed = parser().parse_page("<html><body><p>Nothing here</p></body></html>");
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.skipped, 0);
    }

    #[test]
    fn test_parse_selector_invalid() {
        let selectors = CatalogueSelectors {
            entry: "[[invalid".to_string(),
            ..CatalogueSelectors::default()
        };
        assert!(CatalogueParser::new(&selectors).is_err());
    }
}
