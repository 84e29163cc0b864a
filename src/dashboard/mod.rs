// src/dashboard/mod.rs

//! Filtering dashboard over the book table.
//!
//! The dashboard offers a rating selector over the distinct ratings present
//! and a maximum-price selector bounded by the observed prices, then computes
//! statistics and histograms for the matching subset.

pub mod export;
mod histogram;
mod stats;

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::models::{BookRecord, DashboardConfig};

pub use histogram::Histogram;
pub use stats::{ColumnStats, Summary};

/// Sorted distinct ratings present in `records`.
pub fn rating_options(records: &[BookRecord]) -> Vec<u8> {
    let mut ratings: Vec<u8> = records.iter().map(|r| r.rating).collect();
    ratings.sort_unstable();
    ratings.dedup();
    ratings
}

const TITLE_WIDTH: usize = 45;

/// Fixed-width detail table of `records`, one row per record in table order.
///
/// Titles longer than the title column are cut on a grapheme boundary and
/// end with `…`.
pub fn records_table(records: &[BookRecord]) -> String {
    let mut lines = vec![format!(
        "{:<TITLE_WIDTH$}  {:>9}  {:<24}  {}",
        "Titre", "Prix (£)", "Disponibilité", "Note"
    )];
    for record in records {
        lines.push(format!(
            "{:<TITLE_WIDTH$}  {:>9.2}  {:<24}  {}",
            truncate_title(&record.title),
            record.price,
            record.availability,
            record.rating
        ));
    }
    lines.join("\n")
}

fn truncate_title(title: &str) -> String {
    let graphemes: Vec<&str> = title.graphemes(true).collect();
    if graphemes.len() <= TITLE_WIDTH {
        return title.to_string();
    }
    let mut cut = graphemes[..TITLE_WIDTH - 1].concat();
    cut.push('…');
    cut
}

/// Observed price range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    /// `None` when there are no records.
    pub fn from_records(records: &[BookRecord]) -> Option<Self> {
        let mut prices = records.iter().map(|r| r.price);
        let first = prices.next()?;
        Some(prices.fold(Self { min: first, max: first }, |b, p| Self {
            min: b.min.min(p),
            max: b.max.max(p),
        }))
    }

    pub fn clamp(&self, price: f64) -> f64 {
        price.clamp(self.min, self.max)
    }
}

/// Rating and price predicates; unset fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BookFilter {
    pub rating: Option<u8>,
    pub max_price: Option<f64>,
}

impl BookFilter {
    pub fn matches(&self, record: &BookRecord) -> bool {
        self.rating.is_none_or(|r| record.rating == r)
            && self.max_price.is_none_or(|max| record.price <= max)
    }

    /// Matching records, in table order.
    pub fn apply(&self, records: &[BookRecord]) -> Vec<BookRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Everything the dashboard view shows for one filter selection.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub rating_options: Vec<u8>,
    pub price_bounds: Option<PriceBounds>,
    /// Filter actually applied after defaults and clamping
    pub filter: BookFilter,
    pub records: Vec<BookRecord>,
    pub summary: Summary,
    pub price_histogram: Histogram,
    pub rating_histogram: Histogram,
}

impl DashboardView {
    /// Build the view for `requested`.
    ///
    /// An unset rating defaults to the lowest rating present and an unset
    /// maximum price to the highest observed price. A requested maximum price
    /// is clamped into the observed range.
    pub fn build(records: &[BookRecord], requested: BookFilter, config: &DashboardConfig) -> Self {
        let rating_options = rating_options(records);
        let price_bounds = PriceBounds::from_records(records);

        let filter = BookFilter {
            rating: requested.rating.or_else(|| rating_options.first().copied()),
            max_price: price_bounds.map(|bounds| {
                requested
                    .max_price
                    .map_or(bounds.max, |max| bounds.clamp(max))
            }),
        };

        let filtered = filter.apply(records);
        let prices: Vec<f64> = filtered.iter().map(|r| r.price).collect();
        let ratings: Vec<f64> = filtered.iter().map(|r| f64::from(r.rating)).collect();

        Self {
            rating_options,
            price_bounds,
            filter,
            summary: Summary::from_records(&filtered),
            price_histogram: Histogram::compute(&prices, config.price_bins),
            rating_histogram: Histogram::compute(&ratings, config.rating_bins),
            records: filtered,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, price: f64, rating: u8) -> BookRecord {
        BookRecord {
            title: title.to_string(),
            price,
            availability: "In stock".to_string(),
            rating,
        }
    }

    fn table() -> Vec<BookRecord> {
        vec![
            book("a", 51.77, 3),
            book("b", 53.74, 1),
            book("c", 50.10, 1),
            book("d", 47.82, 4),
            book("e", 54.23, 5),
            book("f", 22.65, 1),
            book("g", 33.34, 4),
            book("h", 17.93, 3),
            book("i", 22.60, 1),
            book("j", 52.15, 1),
        ]
    }

    #[test]
    fn test_filter_matches_independent_count() {
        let records = table();
        for rating in 0..=5u8 {
            for max_price in [0.0, 20.0, 22.65, 50.0, 60.0] {
                let filter = BookFilter {
                    rating: Some(rating),
                    max_price: Some(max_price),
                };
                let filtered = filter.apply(&records);
                let expected = records
                    .iter()
                    .filter(|r| r.rating == rating && r.price <= max_price)
                    .count();

                assert_eq!(filtered.len(), expected);
                assert!(filtered.iter().all(|r| r.rating == rating && r.price <= max_price));
            }
        }
    }

    #[test]
    fn test_filter_keeps_table_order() {
        let filter = BookFilter {
            rating: Some(1),
            max_price: Some(52.15),
        };
        let titles: Vec<_> = filter.apply(&table()).into_iter().map(|r| r.title).collect();
        assert_eq!(titles, ["c", "f", "i", "j"]);
    }

    #[test]
    fn test_rating_options_and_bounds() {
        let records = table();
        assert_eq!(rating_options(&records), vec![1, 3, 4, 5]);
        assert_eq!(
            PriceBounds::from_records(&records),
            Some(PriceBounds {
                min: 17.93,
                max: 54.23
            })
        );
        assert_eq!(PriceBounds::from_records(&[]), None);
    }

    #[test]
    fn test_view_defaults_to_first_rating_and_max_price() {
        let view = DashboardView::build(&table(), BookFilter::default(), &DashboardConfig::default());
        assert_eq!(view.filter.rating, Some(1));
        assert_eq!(view.filter.max_price, Some(54.23));
        assert_eq!(view.records.len(), 5);
        assert_eq!(view.price_histogram.total(), 5);
        assert_eq!(view.rating_histogram.total(), 5);
        assert_eq!(view.summary.price.as_ref().map(|s| s.count), Some(5));
    }

    #[test]
    fn test_view_clamps_requested_price() {
        let requested = BookFilter {
            rating: Some(3),
            max_price: Some(1000.0),
        };
        let view = DashboardView::build(&table(), requested, &DashboardConfig::default());
        assert_eq!(view.filter.max_price, Some(54.23));
        assert_eq!(view.records.len(), 2);
    }

    #[test]
    fn test_records_table_lists_every_record() {
        let records = vec![
            book("A Light in the Attic", 51.77, 3),
            book(&"Très long titre ".repeat(5), 9.5, 1),
        ];
        let table = records_table(&records);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Titre"));
        assert!(lines[1].starts_with("A Light in the Attic"));
        assert!(lines[1].contains("51.77"));
        assert!(lines[1].trim_end().ends_with('3'));
        assert!(lines[2].contains('…'));
        assert!(lines[2].contains("9.50"));
    }

    #[test]
    fn test_truncate_title_keeps_graphemes() {
        let title = "e\u{301}".repeat(60);
        let cut = truncate_title(&title);
        assert_eq!(cut.graphemes(true).count(), TITLE_WIDTH);
        assert!(cut.ends_with("e\u{301}…"));
        assert_eq!(truncate_title("Short"), "Short");
    }

    #[test]
    fn test_view_over_empty_table() {
        let view = DashboardView::build(&[], BookFilter::default(), &DashboardConfig::default());
        assert!(view.is_empty());
        assert!(view.rating_options.is_empty());
        assert_eq!(view.filter, BookFilter::default());
        assert!(view.summary.price.is_none());
    }
}
