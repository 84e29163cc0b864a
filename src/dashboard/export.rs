// src/dashboard/export.rs

//! Dashboard exports: filtered table and chart bundle.

use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;

use crate::error::{AppError, Result};
use crate::models::BookRecord;
use crate::storage::csv::encode_records;

use super::Histogram;

/// Entry name of the price histogram inside the chart bundle.
pub const PRICE_ENTRY: &str = "distribution_prix.csv";
/// Entry name of the rating histogram inside the chart bundle.
pub const RATING_ENTRY: &str = "distribution_notes.csv";

/// Encode the filtered records in the book table format.
pub fn filtered_csv(records: &[BookRecord]) -> Vec<u8> {
    encode_records(records)
}

/// Build a zip archive holding both histogram tables.
pub fn chart_bundle(price: &Histogram, rating: &Histogram) -> Result<Vec<u8>> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (name, histogram) in [(PRICE_ENTRY, price), (RATING_ENTRY, rating)] {
        zip.start_file(name, options)?;
        zip.write_all(&histogram.to_csv())?;
    }

    Ok(zip.finish()?.into_inner())
}

/// Write export bytes to `path`, replacing any existing file.
pub fn write_export(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|e| AppError::write(path, e))
}
