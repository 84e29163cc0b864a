// src/pipeline/validate.rs

use crate::error::Result;
use crate::models::Config;
use crate::utils::log;

/// Validate configuration values, including the catalogue selectors.
pub fn run_validate(config: &Config) -> Result<()> {
    log::header("Validating configuration");

    config.validate()?;

    log::success("Config OK");
    log::sub_item(&format!("Page template: {}", config.scraper.base_url));
    log::sub_item(&format!("Pages per scrape: {}", config.scraper.page_count));
    log::sub_item(&format!("User agent: {}", config.scraper.user_agent));
    log::sub_item(&format!("Timeout: {}s", config.scraper.timeout_secs));
    log::sub_item(&format!("CSV table: {}", config.storage.csv_path.display()));
    log::sub_item(&format!(
        "Document store: {} ({}.{})",
        if config.document_store.enabled { "enabled" } else { "disabled" },
        config.document_store.database,
        config.document_store.collection
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(run_validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_selector_fails() {
        let mut config = Config::default();
        config.selectors.price = "p[".to_string();
        assert!(run_validate(&config).is_err());
    }
}
