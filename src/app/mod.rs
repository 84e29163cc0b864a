// src/app/mod.rs

//! Application state for interactive use.
//!
//! - `AppState`: current view and the scraped-data guard
//! - `Memo`: single-slot cache for scrape and load results
//! - `Session`: both of the above wired to the scraper and the CSV table

mod memo;
mod session;
mod state;

pub use memo::Memo;
pub use session::Session;
pub use state::{AppState, View};
