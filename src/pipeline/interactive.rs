// src/pipeline/interactive.rs

//! Line-driven front-end over a [`Session`].

use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app::{Session, View};
use crate::dashboard::{BookFilter, DashboardView};
use crate::error::Result;
use crate::services::PageSource;
use crate::utils::log;

use super::dashboard::{ExportTargets, export_view, render_view};

const HELP: &str = "\
scrape                  scrape the catalogue (reuses the previous result)
rescrape                scrape again, ignoring the previous result
dashboard               open the dashboard
filter <note> <prix>    set the filters, '-' for the default
export [dir]            export the filtered table and the chart bundle
home                    back to the home view
quit                    leave";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Scrape { refresh: bool },
    Dashboard,
    Filter(BookFilter),
    Export(Option<String>),
    Home,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = match words.next().unwrap_or("") {
            "scrape" => Command::Scrape { refresh: false },
            "rescrape" => Command::Scrape { refresh: true },
            "dashboard" => Command::Dashboard,
            "filter" => Command::Filter(BookFilter {
                rating: parse_arg(words.next())?,
                max_price: parse_arg(words.next())?,
            }),
            "export" => Command::Export(words.next().map(str::to_string)),
            "home" => Command::Home,
            "help" | "" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command '{other}'")),
        };
        Ok(command)
    }
}

fn parse_arg<T: FromStr>(word: Option<&str>) -> std::result::Result<Option<T>, String> {
    match word {
        None | Some("-") => Ok(None),
        Some(w) => w
            .parse()
            .map(Some)
            .map_err(|_| format!("invalid value '{w}'")),
    }
}

/// Read commands from `input` until `quit` or end of input.
///
/// Command failures are reported and the loop continues; only read errors
/// end it early.
pub async fn run_interactive<S, R>(session: &mut Session<S>, input: R) -> Result<()>
where
    S: PageSource,
    R: AsyncBufRead + Unpin,
{
    log::header(&session.config().messages.home_title);
    log::block(HELP);

    let mut filter = BookFilter::default();
    let mut current: Option<DashboardView> = None;
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                log::warn(&message);
                continue;
            }
        };

        let result = match command {
            Command::Quit => break,
            Command::Help => {
                log::block(HELP);
                Ok(())
            }
            Command::Scrape { refresh } => match session.scrape(refresh).await {
                Ok(summary) => {
                    log::success(
                        &session
                            .config()
                            .messages
                            .csv_saved
                            .replace("{path}", &summary.location),
                    );
                    // The table was rewritten; the shown view must follow it.
                    if session.state().view() == View::Dashboard {
                        refresh_view(session, filter, &mut current).await
                    } else {
                        current = None;
                        Ok(())
                    }
                }
                Err(e) => Err(e),
            },
            Command::Dashboard => match session.open_dashboard() {
                Ok(()) => refresh_view(session, filter, &mut current).await,
                Err(e) => Err(e),
            },
            Command::Filter(new_filter) => {
                filter = new_filter;
                if session.state().view() == View::Dashboard {
                    refresh_view(session, filter, &mut current).await
                } else {
                    Ok(())
                }
            }
            Command::Export(dir) => export_current(session, current.as_ref(), dir),
            Command::Home => {
                session.go_home();
                current = None;
                log::header(&session.config().messages.home_title);
                Ok(())
            }
        };

        if let Err(e) = result {
            log::warn(&e.to_string());
        }
    }
    Ok(())
}

async fn refresh_view<S: PageSource>(
    session: &mut Session<S>,
    filter: BookFilter,
    current: &mut Option<DashboardView>,
) -> Result<()> {
    *current = session.dashboard(filter).await?;
    if let Some(view) = current {
        render_view(&session.config().messages, view);
    }
    Ok(())
}

fn export_current<S: PageSource>(
    session: &Session<S>,
    current: Option<&DashboardView>,
    dir: Option<String>,
) -> Result<()> {
    let config = session.config();
    let Some(view) = current.filter(|_| session.state().view() == View::Dashboard) else {
        log::warn(&config.messages.no_data);
        return Ok(());
    };

    let dir = dir.map(std::path::PathBuf::from).unwrap_or_default();
    let targets = ExportTargets {
        csv: Some(dir.join(&config.dashboard.filtered_csv_name)),
        charts: Some(dir.join(&config.dashboard.chart_bundle_name)),
    };
    export_view(&config.messages, view, &targets)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use url::Url;

    use super::*;
    use crate::models::Config;
    use crate::services::CatalogueScraper;
    use crate::services::fixtures::{FixturePages, listing, two_page_fixture};
    use crate::storage::CsvStore;
    use tempfile::TempDir;

    fn session(tmp: &TempDir) -> Session<FixturePages> {
        let mut config = Config::default();
        config.scraper.page_count = 2;
        config.storage.csv_path = tmp.path().join("books_data.csv");
        let scraper = CatalogueScraper::with_source(&config, two_page_fixture()).unwrap();
        Session::new(Arc::new(config), scraper)
    }

    #[test]
    fn test_parse_commands() {
        let parse = |line: &str| line.parse::<Command>();

        assert_eq!(parse("scrape"), Ok(Command::Scrape { refresh: false }));
        assert_eq!(parse("rescrape"), Ok(Command::Scrape { refresh: true }));
        assert_eq!(
            parse("filter 3 25.5"),
            Ok(Command::Filter(BookFilter {
                rating: Some(3),
                max_price: Some(25.5)
            }))
        );
        assert_eq!(
            parse("filter - 10"),
            Ok(Command::Filter(BookFilter {
                rating: None,
                max_price: Some(10.0)
            }))
        );
        assert_eq!(parse("export out"), Ok(Command::Export(Some("out".to_string()))));
        assert!(parse("filter x").is_err());
        assert!(parse("fly").is_err());
    }

    #[tokio::test]
    async fn test_session_script() {
        let tmp = TempDir::new().unwrap();
        let mut session = session(&tmp);
        let out = tmp.path().join("out");
        std::fs::create_dir(&out).unwrap();

        let script = format!(
            "dashboard\nscrape\ndashboard\nfilter 3 -\nexport {}\nhome\nquit\nscrape\n",
            out.display()
        );
        run_interactive(&mut session, script.as_bytes()).await.unwrap();

        assert_eq!(session.state().view(), View::Home);
        assert!(session.state().is_data_scraped());
        assert_eq!(session.scraper().source().request_count(), 2);

        let exported = CsvStore::new(out.join("livres_filtres.csv")).load().await.unwrap();
        let titles: Vec<_> = exported.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Beta", "Gamma"]);
        assert!(out.join("graphique_livres.zip").exists());
    }

    /// Serves "Old" on the first fetch and "New" on every later one.
    #[derive(Default)]
    struct ChangingCatalogue {
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl PageSource for ChangingCatalogue {
        async fn fetch(&self, _url: &Url) -> Result<String> {
            let title = match self.fetches.fetch_add(1, Ordering::SeqCst) {
                0 => "Old",
                _ => "New",
            };
            Ok(listing(&[(title, "£12.00", "Two")]))
        }
    }

    #[tokio::test]
    async fn test_export_after_rescrape_uses_new_table() {
        let tmp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.scraper.page_count = 1;
        config.storage.csv_path = tmp.path().join("books_data.csv");
        let scraper =
            CatalogueScraper::with_source(&config, ChangingCatalogue::default()).unwrap();
        let mut session = Session::new(Arc::new(config), scraper);
        let out = tmp.path().join("out");
        std::fs::create_dir(&out).unwrap();

        let script = format!(
            "scrape\ndashboard\nrescrape\nexport {}\nquit\n",
            out.display()
        );
        run_interactive(&mut session, script.as_bytes()).await.unwrap();

        let table = CsvStore::new(tmp.path().join("books_data.csv")).load().await.unwrap();
        let exported = CsvStore::new(out.join("livres_filtres.csv")).load().await.unwrap();
        assert_eq!(table.records()[0].title, "New");
        assert_eq!(exported.records(), table.records());
    }
}
