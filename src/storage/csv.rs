// src/storage/csv.rs

//! CSV table storage.
//!
//! ## Format
//!
//! ```text
//! Titre,Prix (£),Disponibilité,Note (étoiles)
//! A Light in the Attic,51.77,In stock,3
//! "Tipping the Velvet, Vol. 1",53.74,In stock,1
//! ```
//!
//! Fields containing the delimiter, a quote or a line break are quoted, with
//! embedded quotes doubled.

use std::io::{self, Write};
use std::mem::take;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::{BookRecord, MAX_RATING};
use crate::storage::{LoadOutcome, RecordSink, WriteSummary};

/// Header row of the book table.
pub const HEADERS: [&str; 4] = ["Titre", "Prix (£)", "Disponibilité", "Note (étoiles)"];

const SEP: char = ',';

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S]) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{SEP}")?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Encode records as a complete table, header included.
pub fn encode_records(records: &[BookRecord]) -> Vec<u8> {
    let mut buf = Vec::new();
    // Writes into a Vec cannot fail.
    let _ = write_row(&mut buf, &HEADERS);
    for record in records {
        let _ = write_row(
            &mut buf,
            &[
                record.title.clone(),
                record.price.to_string(),
                record.availability.clone(),
                record.rating.to_string(),
            ],
        );
    }
    buf
}

/* ---------------- Parsing ---------------- */

/// Split CSV text into rows of fields (quotes + CRLF tolerant).
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if matches!(chars.peek(), Some('"')) {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            c if c == SEP && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if row.len() == 1 && row[0].is_empty() {
                    row.clear();
                } else {
                    rows.push(take(&mut row));
                }
            }
            _ => field.push(ch),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}

/// Decode a complete table produced by [`encode_records`].
pub fn decode_records(text: &str) -> Result<Vec<BookRecord>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = parse_rows(text).into_iter();

    match rows.next() {
        Some(header) if header == HEADERS => {}
        Some(header) => {
            return Err(AppError::parse(
                "line 1",
                format!("unexpected header {header:?}"),
            ));
        }
        None => return Ok(Vec::new()),
    }

    rows.enumerate()
        .map(|(i, row)| decode_row(row).map_err(|e| AppError::parse(format!("line {}", i + 2), e)))
        .collect()
}

fn decode_row(row: Vec<String>) -> std::result::Result<BookRecord, String> {
    let [title, price, availability, rating]: [String; 4] = row
        .try_into()
        .map_err(|row: Vec<String>| format!("expected 4 fields, found {}", row.len()))?;

    let price: f64 = price
        .parse()
        .map_err(|e| format!("invalid price {price:?}: {e}"))?;
    if !price.is_finite() || price < 0.0 {
        return Err(format!("price out of range {price}"));
    }
    let rating: u8 = rating
        .parse()
        .map_err(|e| format!("invalid rating {rating:?}: {e}"))?;
    if rating > MAX_RATING {
        return Err(format!("rating {rating} out of range"));
    }

    Ok(BookRecord {
        title,
        price,
        availability,
        rating,
    })
}

/* ---------------- File store ---------------- */

/// CSV file holding the whole book table.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the table, reporting a missing file as [`LoadOutcome::NotFound`].
    pub async fn load(&self) -> Result<LoadOutcome> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::warn!("No table found at {}", self.path.display());
                return Ok(LoadOutcome::NotFound(self.path.clone()));
            }
            Err(e) => return Err(AppError::Io(e)),
        };

        let records = decode_records(&text).map_err(|e| match e {
            AppError::Parse { context, message } => AppError::Parse {
                context: format!("{} {}", self.path.display(), context),
                message,
            },
            other => other,
        })?;
        log::debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(LoadOutcome::Loaded(records))
    }

    /// Overwrite the file (write to temp, then rename).
    ///
    /// The parent directory must already exist.
    pub async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        let tmp = self.path.with_extension("csv.tmp");
        let write = async {
            let mut file = tokio::fs::File::create(&tmp).await?;
            file.write_all(bytes).await?;
            file.flush().await?;
            drop(file);
            tokio::fs::rename(&tmp, &self.path).await?;
            Ok::<_, io::Error>(())
        };

        if let Err(e) = write.await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(AppError::write(&self.path, e));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordSink for CsvStore {
    async fn write_records(&self, records: &[BookRecord]) -> Result<WriteSummary> {
        self.write_bytes(&encode_records(records)).await?;
        log::info!("Wrote {} records to {}", records.len(), self.path.display());
        Ok(WriteSummary {
            record_count: records.len(),
            location: self.path.display().to_string(),
            timestamp: Utc::now(),
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn book(title: &str, price: f64, availability: &str, rating: u8) -> BookRecord {
        BookRecord {
            title: title.to_string(),
            price,
            availability: availability.to_string(),
            rating,
        }
    }

    #[test]
    fn test_write_row_quotes_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["plain", "a,b", "say \"hi\"", "two\nlines"]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "plain,\"a,b\",\"say \"\"hi\"\"\",\"two\nlines\"\n"
        );
    }

    #[test]
    fn test_parse_rows_handles_quotes_and_crlf() {
        let rows = parse_rows("a,\"b,c\"\r\n\"d \"\"e\"\"\",f\r\n\r\n");
        assert_eq!(rows, vec![vec!["a", "b,c"], vec!["d \"e\"", "f"]]);
    }

    #[test]
    fn test_header_row() {
        let text = String::from_utf8(encode_records(&[])).unwrap();
        assert_eq!(text, "Titre,Prix (£),Disponibilité,Note (étoiles)\n");
    }

    #[test]
    fn test_decode_rejects_wrong_header() {
        let err = decode_records("title,price\nx,1\n").unwrap_err();
        assert!(matches!(err, AppError::Parse { .. }));
    }

    #[test]
    fn test_decode_names_bad_line() {
        let text = "Titre,Prix (£),Disponibilité,Note (étoiles)\nOk,1.5,In stock,2\nBad,abc,In stock,2\n";
        let err = decode_records(text).unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_decode_rejects_non_finite_price() {
        for price in ["inf", "-infinity", "NaN", "-1.5"] {
            let text = format!("Titre,Prix (£),Disponibilité,Note (étoiles)\nOk,{price},In stock,2\n");
            let err = decode_records(&text).unwrap_err();
            assert!(err.to_string().contains("line 2"), "{price}: {err}");
        }
    }

    #[test]
    fn test_decode_rejects_rating_out_of_range() {
        let text = "Titre,Prix (£),Disponibilité,Note (étoiles)\nOk,1.5,In stock,6\n";
        assert!(decode_records(text).is_err());
    }

    #[tokio::test]
    async fn test_round_trip_preserves_order_and_values() {
        let tmp = TempDir::new().unwrap();
        let store = CsvStore::new(tmp.path().join("books_data.csv"));
        let records = vec![
            book("A Light in the Attic", 51.77, "In stock", 3),
            book("Sharp Objects, Special Edition", 47.82, "In stock", 4),
            book("The \"Quoted\" Book", 0.1, "In stock (2 available)", 0),
            book("Soumission", 50.1, "In stock", 1),
        ];

        let summary = store.write_records(&records).await.unwrap();
        assert_eq!(summary.record_count, 4);

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.records(), records.as_slice());
    }

    #[tokio::test]
    async fn test_write_overwrites_previous_table() {
        let tmp = TempDir::new().unwrap();
        let store = CsvStore::new(tmp.path().join("books_data.csv"));
        store
            .write_records(&[book("Old", 1.0, "In stock", 1), book("Older", 2.0, "In stock", 2)])
            .await
            .unwrap();
        store.write_records(&[book("New", 3.0, "In stock", 3)]).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.records().len(), 1);
        assert_eq!(loaded.records()[0].title, "New");
    }

    #[tokio::test]
    async fn test_load_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let store = CsvStore::new(tmp.path().join("nope.csv"));
        let loaded = store.load().await.unwrap();
        assert!(loaded.is_not_found());
        assert!(loaded.records().is_empty());
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let store = CsvStore::new(tmp.path().join("missing").join("books.csv"));
        let err = store.write_records(&[book("A", 1.0, "In stock", 1)]).await.unwrap_err();
        assert!(matches!(err, AppError::Write { .. }));
    }
}
