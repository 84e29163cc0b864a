// src/storage/document.rs

//! MongoDB document store.
//!
//! Every record becomes one `{title, price, availability, rating}` document.
//! Inserts never deduplicate; writing the same records twice stores them twice.

use async_trait::async_trait;
use chrono::Utc;
use mongodb::{Client, Collection};

use crate::error::Result;
use crate::models::{BookRecord, DocumentStoreConfig};
use crate::storage::{RecordSink, WriteSummary};

/// Collection handle for book documents.
pub struct DocumentStore {
    collection: Collection<BookRecord>,
    target: String,
}

impl DocumentStore {
    /// Open a client for the configured URI and select the collection.
    pub async fn connect(config: &DocumentStoreConfig) -> Result<Self> {
        let client = Client::with_uri_str(&config.uri).await?;
        let collection = client
            .database(&config.database)
            .collection::<BookRecord>(&config.collection);

        Ok(Self {
            collection,
            target: format!("{}.{}", config.database, config.collection),
        })
    }
}

#[async_trait]
impl RecordSink for DocumentStore {
    async fn write_records(&self, records: &[BookRecord]) -> Result<WriteSummary> {
        let record_count = if records.is_empty() {
            log::info!("No records to insert into {}", self.target);
            0
        } else {
            let result = self.collection.insert_many(records).await?;
            result.inserted_ids.len()
        };

        log::info!("Inserted {} documents into {}", record_count, self.target);
        Ok(WriteSummary {
            record_count,
            location: self.target.clone(),
            timestamp: Utc::now(),
        })
    }

    fn describe(&self) -> String {
        self.target.clone()
    }
}
