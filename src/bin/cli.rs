// src/bin/cli.rs

//! Book scraper CLI
//!
//! Local execution entry point for scraping, the dashboard report and the
//! interactive session.

use std::path::PathBuf;
use std::sync::Arc;

use bookcrawler::{
    app::Session,
    dashboard::BookFilter,
    error::Result,
    models::Config,
    pipeline::{self, ExportTargets},
    services::CatalogueScraper,
    storage::{CsvStore, LoadOutcome},
};
use clap::{Parser, Subcommand};

/// bookcrawler - Book catalogue scraper and dashboard
#[derive(Parser, Debug)]
#[command(
    name = "bookcrawler",
    version,
    about = "Scrape a book catalogue and explore it"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape the catalogue into the CSV table
    Scrape {
        /// Number of pages to visit (default: scraper.page_count)
        #[arg(long)]
        pages: Option<u32>,

        /// CSV table path (default: storage.csv_path)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also insert the records into the document store
        #[arg(long)]
        document_store: bool,
    },

    /// Print the dashboard for the stored table
    Dashboard {
        /// Exact rating to keep (default: lowest rating present)
        #[arg(long)]
        rating: Option<u8>,

        /// Maximum price (default: highest observed price)
        #[arg(long)]
        max_price: Option<f64>,

        /// Write the filtered table to this CSV file
        #[arg(long)]
        export_csv: Option<PathBuf>,

        /// Write the histogram bundle to this zip file
        #[arg(long)]
        export_charts: Option<PathBuf>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read commands from stdin
    Interactive,

    /// Validate the configuration file
    Validate,

    /// Show the stored table status
    Info,
}

/// Initialize logging from the verbosity flag and the configured level.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = Config::load_if_present(&cli.config);
    let level = loaded.as_ref().map_or("info", |c| c.logging.level.as_str());
    init_logging(cli.verbose, level);

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return Err(e);
        }
    };
    log::info!("Configuration: {}", cli.config.display());

    match cli.command {
        Command::Scrape {
            pages,
            output,
            document_store,
        } => {
            if let Some(output) = output {
                config.storage.csv_path = output;
            }
            let scraper = CatalogueScraper::http(&config)?;
            let page_count = pages.unwrap_or_else(|| scraper.default_page_count());
            pipeline::run_scrape(&config, &scraper, page_count, document_store).await?;
        }

        Command::Dashboard {
            rating,
            max_price,
            export_csv,
            export_charts,
            json,
        } => {
            let filter = BookFilter { rating, max_price };
            let targets = ExportTargets {
                csv: export_csv,
                charts: export_charts,
            };
            let view = pipeline::run_dashboard(&config, filter, &targets).await?;
            if json {
                if let Some(view) = view {
                    println!("{}", serde_json::to_string_pretty(&view)?);
                }
            }
        }

        Command::Interactive => {
            let config = Arc::new(config);
            let scraper = CatalogueScraper::http(&config)?;
            let mut session = Session::new(Arc::clone(&config), scraper);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            pipeline::run_interactive(&mut session, stdin).await?;
        }

        Command::Validate => {
            if let Err(e) = pipeline::run_validate(&config) {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
        }

        Command::Info => {
            let store = CsvStore::new(&config.storage.csv_path);
            log::info!("CSV table: {}", store.path().display());
            match store.load().await? {
                LoadOutcome::NotFound(_) => log::info!("No table found yet."),
                LoadOutcome::Loaded(records) => {
                    log::info!("Books stored: {}", records.len());
                }
            }
            log::info!(
                "Document store: {}",
                if config.document_store.enabled {
                    "enabled"
                } else {
                    "disabled"
                }
            );
        }
    }

    log::info!("Done!");

    Ok(())
}
