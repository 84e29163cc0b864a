// src/pipeline/mod.rs

//! Pipeline entry points for scraper operations.
//!
//! - `run_scrape`: Walk the catalogue and persist the book table
//! - `run_dashboard`: Filter the persisted table, report and export
//! - `run_interactive`: Line-driven session over both
//! - `run_validate`: Check configuration and selectors

pub mod dashboard;
pub mod interactive;
pub mod scrape;
pub mod validate;

pub use dashboard::{ExportTargets, run_dashboard};
pub use interactive::run_interactive;
pub use scrape::run_scrape;
pub use validate::run_validate;
