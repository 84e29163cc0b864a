// src/models/book.rs

//! Book record data structure and field normalization.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Highest star rating a catalogue entry can carry.
pub const MAX_RATING: u8 = 5;

/// Star-class tokens in rating order.
const STAR_TOKENS: [(&str, u8); 5] = [
    ("One", 1),
    ("Two", 2),
    ("Three", 3),
    ("Four", 4),
    ("Five", 5),
];

static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\d.]").expect("static price pattern is valid"));

/// A book listed on a catalogue page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookRecord {
    /// Title, verbatim from the listing link
    pub title: String,

    /// Price in the source currency
    pub price: f64,

    /// Stock status text
    pub availability: String,

    /// Star rating, 0 when the rating class was not recognized
    pub rating: u8,
}

impl BookRecord {
    /// Build a record from raw listing fields.
    ///
    /// The title must be non-empty and the price text must contain a number
    /// once currency symbols and whitespace are stripped.
    pub fn from_raw(
        title: &str,
        raw_price: &str,
        availability: &str,
        star_classes: &str,
    ) -> Result<Self> {
        if title.trim().is_empty() {
            return Err(AppError::parse("entry", "empty title"));
        }

        Ok(Self {
            title: title.to_string(),
            price: parse_price(raw_price)?,
            availability: availability.trim().to_string(),
            rating: rating_from_classes(star_classes),
        })
    }
}

/// Parse a raw price such as `£51.77` into a float.
///
/// Everything except ASCII digits and `.` is removed before parsing, so the
/// result is never negative.
pub fn parse_price(raw: &str) -> Result<f64> {
    let digits = NON_NUMERIC.replace_all(raw, "");
    if digits.is_empty() {
        return Err(AppError::parse("price", format!("no digits in {raw:?}")));
    }
    digits
        .parse::<f64>()
        .map_err(|e| AppError::parse("price", format!("{raw:?}: {e}")))
}

/// Map a single star-class token (`One`..`Five`) to its rating.
///
/// Unrecognized tokens map to 0.
pub fn rating_from_token(token: &str) -> u8 {
    STAR_TOKENS
        .iter()
        .find(|(name, _)| *name == token)
        .map_or(0, |(_, value)| *value)
}

/// Resolve a whitespace-separated class list such as `star-rating Three`.
///
/// The first recognized star token wins.
pub fn rating_from_classes(classes: &str) -> u8 {
    classes
        .split_whitespace()
        .map(rating_from_token)
        .find(|rating| *rating > 0)
        .unwrap_or(0)
}
