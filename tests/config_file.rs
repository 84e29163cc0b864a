use bookcrawler::models::Config;

#[test]
fn shipped_config_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml");
    let config = Config::load(path).unwrap();
    config.validate().unwrap();

    let defaults = Config::default();
    assert_eq!(config.scraper.base_url, defaults.scraper.base_url);
    assert_eq!(config.scraper.page_count, defaults.scraper.page_count);
    assert_eq!(config.selectors.entry, defaults.selectors.entry);
    assert_eq!(config.storage.csv_path, defaults.storage.csv_path);
    assert_eq!(config.document_store.collection, defaults.document_store.collection);
    assert_eq!(config.dashboard.price_bins, defaults.dashboard.price_bins);
    assert_eq!(config.messages.no_data, defaults.messages.no_data);
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let config = Config::load_or_default("does/not/exist.toml");
    assert_eq!(config.scraper.page_count, 50);
    assert_eq!(config.storage.csv_path.to_str(), Some("books_data.csv"));
}
