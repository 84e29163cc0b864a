// src/models/locale.rs

//! User-facing message catalogue.
//!
//! Messages use `{name}` placeholders that callers fill with `str::replace`.

use serde::{Deserialize, Serialize};

/// Messages shown by the pipeline, the dashboard and the interactive session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageLocale {
    #[serde(default = "defaults::scrape_starting")]
    pub scrape_starting: String,
    #[serde(default = "defaults::scrape_page")]
    pub scrape_page: String,
    #[serde(default = "defaults::scrape_complete")]
    pub scrape_complete: String,
    #[serde(default = "defaults::csv_saved")]
    pub csv_saved: String,
    #[serde(default = "defaults::document_store_saved")]
    pub document_store_saved: String,
    #[serde(default = "defaults::data_not_found")]
    pub data_not_found: String,
    #[serde(default = "defaults::no_data")]
    pub no_data: String,
    #[serde(default = "defaults::scrape_first")]
    pub scrape_first: String,
    #[serde(default = "defaults::dashboard_title")]
    pub dashboard_title: String,
    #[serde(default = "defaults::filter_applied")]
    pub filter_applied: String,
    #[serde(default = "defaults::stats_title")]
    pub stats_title: String,
    #[serde(default = "defaults::no_match")]
    pub no_match: String,
    #[serde(default = "defaults::records_title")]
    pub records_title: String,
    #[serde(default = "defaults::price_histogram_title")]
    pub price_histogram_title: String,
    #[serde(default = "defaults::rating_histogram_title")]
    pub rating_histogram_title: String,
    #[serde(default = "defaults::export_csv_done")]
    pub export_csv_done: String,
    #[serde(default = "defaults::export_charts_done")]
    pub export_charts_done: String,
    #[serde(default = "defaults::home_title")]
    pub home_title: String,
}

impl Default for MessageLocale {
    fn default() -> Self {
        Self {
            scrape_starting: defaults::scrape_starting(),
            scrape_page: defaults::scrape_page(),
            scrape_complete: defaults::scrape_complete(),
            csv_saved: defaults::csv_saved(),
            document_store_saved: defaults::document_store_saved(),
            data_not_found: defaults::data_not_found(),
            no_data: defaults::no_data(),
            scrape_first: defaults::scrape_first(),
            dashboard_title: defaults::dashboard_title(),
            filter_applied: defaults::filter_applied(),
            stats_title: defaults::stats_title(),
            no_match: defaults::no_match(),
            records_title: defaults::records_title(),
            price_histogram_title: defaults::price_histogram_title(),
            rating_histogram_title: defaults::rating_histogram_title(),
            export_csv_done: defaults::export_csv_done(),
            export_charts_done: defaults::export_charts_done(),
            home_title: defaults::home_title(),
        }
    }
}

mod defaults {
    pub fn scrape_starting() -> String {
        "Scraping en cours ({pages} pages)...".into()
    }
    pub fn scrape_page() -> String {
        "Page {page}/{pages}: {count} livres".into()
    }
    pub fn scrape_complete() -> String {
        "{count} livres scrapés en {secs}s".into()
    }
    pub fn csv_saved() -> String {
        "Données scrapées et enregistrées dans {path}".into()
    }
    pub fn document_store_saved() -> String {
        "{count} documents insérés dans {target}".into()
    }
    pub fn data_not_found() -> String {
        "Fichier {path} introuvable. Veuillez scraper les données d'abord.".into()
    }
    pub fn no_data() -> String {
        "Aucune donnée disponible. Revenez à l'accueil pour scraper.".into()
    }
    pub fn scrape_first() -> String {
        "Vous devez d'abord scraper les données.".into()
    }
    pub fn dashboard_title() -> String {
        "Tableau de bord - Livres scrapés".into()
    }
    pub fn filter_applied() -> String {
        "Note = {rating} étoiles, prix maximal = £{max_price} ({count} livres)".into()
    }
    pub fn stats_title() -> String {
        "Statistiques descriptives".into()
    }
    pub fn no_match() -> String {
        "Aucun livre ne correspond aux filtres.".into()
    }
    pub fn records_title() -> String {
        "Détail des livres filtrés".into()
    }
    pub fn price_histogram_title() -> String {
        "Distribution des prix".into()
    }
    pub fn rating_histogram_title() -> String {
        "Distribution des notes".into()
    }
    pub fn export_csv_done() -> String {
        "Données filtrées exportées dans {path}".into()
    }
    pub fn export_charts_done() -> String {
        "Graphiques exportés dans {path}".into()
    }
    pub fn home_title() -> String {
        "Bienvenue sur l'application de Web Scraping de livres".into()
    }
}
