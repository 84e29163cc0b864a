// src/error.rs

//! Unified error handling for the scraper application.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Fetching a catalogue page failed (transport error or non-2xx status)
    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    /// Markup or table content could not be interpreted
    #[error("Parse error in {context}: {message}")]
    Parse { context: String, message: String },

    /// Persisting a file failed
    #[error("Write error for {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client setup failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// View transition refused
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// Building the chart bundle failed
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Document store operation failed
    #[cfg(feature = "mongo")]
    #[error("Document store error: {0}")]
    DocumentStore(#[from] mongodb::error::Error),
}

impl AppError {
    /// Create a network error for a URL.
    pub fn network(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Network {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a parse error with context.
    pub fn parse(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Parse {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Create a write error for a path.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a navigation error.
    pub fn navigation(message: impl Into<String>) -> Self {
        Self::Navigation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_names_url() {
        let err = AppError::network("http://example.com/page-1.html", "HTTP status 404");
        assert_eq!(
            err.to_string(),
            "Network error for http://example.com/page-1.html: HTTP status 404"
        );
    }

    #[test]
    fn write_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = AppError::write("missing/books.csv", io);
        assert!(err.to_string().starts_with("Write error for missing/books.csv"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
