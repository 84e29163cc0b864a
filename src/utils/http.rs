// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::error::{AppError, Result};
use crate::models::ScraperConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &ScraperConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a page body as text.
///
/// Transport failures and non-2xx statuses are reported as
/// [`AppError::Network`] carrying the requested URL.
pub async fn fetch_text(client: &reqwest::Client, url: &url::Url) -> Result<String> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| AppError::network(url.as_str(), e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::network(
            url.as_str(),
            format!("HTTP status {status}"),
        ));
    }

    response
        .text()
        .await
        .map_err(|e| AppError::network(url.as_str(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_from_defaults() {
        assert!(create_client(&ScraperConfig::default()).is_ok());
    }
}
