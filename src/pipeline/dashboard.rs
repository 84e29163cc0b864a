// src/pipeline/dashboard.rs

//! Dashboard report over the persisted table.

use std::path::PathBuf;

use crate::dashboard::{self, BookFilter, DashboardView, export};
use crate::error::Result;
use crate::models::{Config, MessageLocale};
use crate::storage::{CsvStore, LoadOutcome};
use crate::utils::log;

const BAR_WIDTH: usize = 40;

/// Optional export destinations.
#[derive(Debug, Clone, Default)]
pub struct ExportTargets {
    /// Filtered table
    pub csv: Option<PathBuf>,
    /// Zip bundle of histogram tables
    pub charts: Option<PathBuf>,
}

/// Load the table, print the dashboard for `filter` and write the exports.
///
/// Returns `None` when there is no data to show.
pub async fn run_dashboard(
    config: &Config,
    filter: BookFilter,
    targets: &ExportTargets,
) -> Result<Option<DashboardView>> {
    let messages = &config.messages;
    let records = match CsvStore::new(&config.storage.csv_path).load().await? {
        LoadOutcome::NotFound(path) => {
            log::warn(
                &messages
                    .data_not_found
                    .replace("{path}", &path.display().to_string()),
            );
            return Ok(None);
        }
        LoadOutcome::Loaded(records) if records.is_empty() => {
            log::warn(&messages.no_data);
            return Ok(None);
        }
        LoadOutcome::Loaded(records) => records,
    };

    let view = DashboardView::build(&records, filter, &config.dashboard);
    render_view(messages, &view);
    export_view(messages, &view, targets)?;
    Ok(Some(view))
}

/// Print filters, the filtered records, statistics and both histograms.
pub fn render_view(messages: &MessageLocale, view: &DashboardView) {
    log::header(&messages.dashboard_title);

    let options: Vec<String> = view.rating_options.iter().map(u8::to_string).collect();
    log::sub_item(&format!("Notes disponibles: {}", options.join(", ")));
    if let Some(bounds) = view.price_bounds {
        log::sub_item(&format!("Prix: £{:.2} - £{:.2}", bounds.min, bounds.max));
    }

    log::success(
        &messages
            .filter_applied
            .replace("{rating}", &view.filter.rating.map_or("-".into(), |r| r.to_string()))
            .replace(
                "{max_price}",
                &view.filter.max_price.map_or("-".into(), |p| format!("{p:.2}")),
            )
            .replace("{count}", &view.records.len().to_string()),
    );

    log::header(&messages.records_title);
    if view.is_empty() {
        log::warn(&messages.no_match);
    } else {
        log::block(&dashboard::records_table(&view.records));
    }

    log::header(&messages.stats_title);
    log::block(&view.summary.render_table());

    log::header(&messages.price_histogram_title);
    log::block(&view.price_histogram.render_bars(BAR_WIDTH));

    log::header(&messages.rating_histogram_title);
    log::block(&view.rating_histogram.render_bars(BAR_WIDTH));
}

/// Write the requested exports of `view`.
pub fn export_view(
    messages: &MessageLocale,
    view: &DashboardView,
    targets: &ExportTargets,
) -> Result<()> {
    if let Some(path) = &targets.csv {
        export::write_export(path, &export::filtered_csv(&view.records))?;
        log::success(
            &messages
                .export_csv_done
                .replace("{path}", &path.display().to_string()),
        );
    }

    if let Some(path) = &targets.charts {
        let bundle = export::chart_bundle(&view.price_histogram, &view.rating_histogram)?;
        export::write_export(path, &bundle)?;
        log::success(
            &messages
                .export_charts_done
                .replace("{path}", &path.display().to_string()),
        );
    }
    Ok(())
}
