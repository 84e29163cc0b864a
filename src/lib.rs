// src/lib.rs

//! Book catalogue scraper library
//!
//! Scrapes a paginated book listing into a CSV table (optionally a MongoDB
//! collection) and serves a filtering dashboard over the stored table.

pub mod app;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
