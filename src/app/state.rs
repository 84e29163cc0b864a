// src/app/state.rs

//! Application view state.

use crate::error::{AppError, Result};

/// Screen currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Dashboard,
}

/// Current view plus whether this session has scraped data.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    view: View,
    data_scraped: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_data_scraped(&self) -> bool {
        self.data_scraped
    }

    pub fn mark_scraped(&mut self) {
        self.data_scraped = true;
    }

    /// Move to the dashboard; refused until data has been scraped.
    ///
    /// `refusal` is the message carried by the navigation error.
    pub fn open_dashboard(&mut self, refusal: &str) -> Result<()> {
        if !self.data_scraped {
            return Err(AppError::navigation(refusal));
        }
        self.view = View::Dashboard;
        Ok(())
    }

    pub fn go_home(&mut self) {
        self.view = View::Home;
    }
}
