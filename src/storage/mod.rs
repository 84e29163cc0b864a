// src/storage/mod.rs

//! Storage abstractions for book record persistence.
//!
//! - `CsvStore`: the book table as a single CSV file, overwritten on each scrape
//! - `DocumentStore` (feature `mongo`): one document per record in a MongoDB
//!   collection, append-only
//!
//! Both implement [`RecordSink`]. [`RecordStore`] wraps a scraped record
//! sequence and hands it to either target.

pub mod csv;
#[cfg(feature = "mongo")]
pub mod document;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::BookRecord;

// Re-export for convenience
pub use csv::CsvStore;
#[cfg(feature = "mongo")]
pub use document::DocumentStore;

/// Metadata about a storage write operation.
#[derive(Debug, Clone)]
pub struct WriteSummary {
    /// Number of records written
    pub record_count: usize,
    /// Human-readable target (file path or database/collection)
    pub location: String,
    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
}

/// Trait for record storage backends.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Persist every record, in order.
    async fn write_records(&self, records: &[BookRecord]) -> Result<WriteSummary>;

    /// Target description for log output.
    fn describe(&self) -> String;
}

/// Result of reading the book table back.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Vec<BookRecord>),
    /// No table exists yet at this path
    NotFound(PathBuf),
}

impl LoadOutcome {
    /// Loaded records; empty when the table was not found.
    pub fn records(&self) -> &[BookRecord] {
        match self {
            Self::Loaded(records) => records,
            Self::NotFound(_) => &[],
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn into_records(self) -> Vec<BookRecord> {
        match self {
            Self::Loaded(records) => records,
            Self::NotFound(_) => Vec::new(),
        }
    }
}

/// A scraped record sequence ready to be persisted.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<BookRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<BookRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    /// Write all records to any sink.
    pub async fn write_to(&self, sink: &dyn RecordSink) -> Result<WriteSummary> {
        log::debug!("Writing {} records to {}", self.records.len(), sink.describe());
        sink.write_records(&self.records).await
    }

    /// Overwrite the CSV table at `path`.
    pub async fn to_csv(&self, path: impl AsRef<Path>) -> Result<WriteSummary> {
        self.write_to(&CsvStore::new(path.as_ref())).await
    }

    /// Insert every record into the configured document store collection.
    #[cfg(feature = "mongo")]
    pub async fn to_document_store(
        &self,
        config: &crate::models::DocumentStoreConfig,
    ) -> Result<WriteSummary> {
        let store = DocumentStore::connect(config).await?;
        self.write_to(&store).await
    }
}
