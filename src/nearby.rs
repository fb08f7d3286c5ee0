use std::{
    fmt,
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::Args;
use geo::Point;
use tracing::debug;

use crate::{
    config::Config,
    helper::{self, Action},
    http,
    map::{self, leaflet},
    search::LocalSearch,
    session::SearchSession,
    utils::{parse_location, spinner},
};

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Your position as lat,lng; results are then sorted by distance
    #[arg(long, value_parser = parse_location)]
    location: Option<Point>,
    /// Search once and exit instead of starting an interactive session
    #[arg(long)]
    query: Option<String>,
    /// Where to write the map page
    #[arg(long, default_value = "search.html")]
    out: PathBuf,
    /// Open the map page in the browser
    #[arg(long)]
    open: bool,
    /// Print results as JSON (with --query)
    #[arg(long, requires = "query")]
    json: bool,
}

pub fn run(config: &Config, args: SearchArgs) -> Result<()> {
    let client = LocalSearch::new(http::agent(), config.naver()?);
    let mut session = SearchSession::default();
    if let Some(x) = args.location {
        session.set_location(x);
    }

    if let Some(query) = args.query {
        search(&client, &mut session, &query);
        if args.json {
            println!("{}", serde_json::to_string_pretty(session.results())?);
        } else {
            print!("{}", Report(&session));
        }
        map::write_page(&args.out, &leaflet::render(&session.map_view()), args.open)?;
        eprintln!("🗺️ Map written to {}", args.out.display());
        return Ok(());
    }

    println!("{}", describe_location(session.location()));
    let mut history = Vec::new();
    loop {
        match helper::pick_action(session.location().is_some())? {
            Action::Search => {
                if let Some(query) = helper::ask_query(&history)? {
                    if submit(&client, &mut session, &mut history, &query) {
                        print!("{}", Report(&session));
                    }
                }
            }
            Action::SetLocation => {
                if let Some(x) = helper::ask_location()? {
                    session.set_location(x);
                    println!("{}", describe_location(session.location()));
                }
            }
            Action::ClearLocation => {
                session.clear_location();
                println!("{}", describe_location(session.location()));
            }
            Action::WriteMap => write_map(&session, &args.out, args.open)?,
            Action::Quit => break,
        }
    }

    Ok(())
}

fn search(client: &LocalSearch, session: &mut SearchSession, query: &str) {
    let pb = spinner(format!("Searching for {query:?}..."));
    let results = client.search(query, session.location());
    pb.finish_and_clear();
    session.replace_results(query.trim(), results);
    debug!(
        version = session.version(),
        results = session.results().len(),
        "search results replaced"
    );
}

/// Runs a prompted query. Blank input leaves the session and history as
/// they were.
fn submit(
    client: &LocalSearch,
    session: &mut SearchSession,
    history: &mut Vec<String>,
    query: &str,
) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return false;
    }
    search(client, session, query);
    history.push(query.to_string());
    true
}

fn write_map(session: &SearchSession, out: &Path, open: bool) -> Result<()> {
    map::write_page(out, &leaflet::render(&session.map_view()), open)?;
    println!("🗺️ Map written to {}", out.display());
    Ok(())
}

fn describe_location(location: Option<Point>) -> String {
    match location {
        Some(x) => format!("📍 Current location: {:.6}, {:.6}", x.y(), x.x()),
        None => "📍 Location not set: results keep the provider's order.".to_string(),
    }
}

/// Result listing printed after each search.
struct Report<'a>(&'a SearchSession);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.results().is_empty() {
            return writeln!(f, "No places found for '{}'.", self.0.query());
        }

        writeln!(f, "📋 '{}' results", self.0.query())?;
        for (i, x) in self.0.results().iter().enumerate() {
            write!(f, "{}. {}", i + 1, x.title)?;
            if let Some(d) = x.distance {
                write!(f, "  📏 {d:.2}km")?;
            }
            writeln!(f)?;
            writeln!(f, "   {} ({})", x.address, x.category)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::NaverCredentials,
        http::testing::closed_port,
        search::SearchResult,
    };

    fn result(title: &str, distance: Option<f64>) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            address: "서울 중구".to_string(),
            category: "카페".to_string(),
            lat: 37.56,
            lng: 126.98,
            distance,
        }
    }

    #[test]
    fn report_without_location() {
        let mut session = SearchSession::default();
        session.replace_results("coffee", vec![result("B", None), result("A", None)]);
        assert_eq!(
            Report(&session).to_string(),
            "📋 'coffee' results\n1. B\n   서울 중구 (카페)\n2. A\n   서울 중구 (카페)\n"
        );
    }

    #[test]
    fn report_with_distance() {
        let mut session = SearchSession::default();
        session.replace_results("coffee", vec![result("A", Some(1.234))]);
        assert!(Report(&session).to_string().contains("1. A  📏 1.23km\n"));
    }

    #[test]
    fn report_nothing_found() {
        let mut session = SearchSession::default();
        session.replace_results("zzz", Vec::new());
        assert_eq!(Report(&session).to_string(), "No places found for 'zzz'.\n");
    }

    #[test]
    fn location_line() {
        assert_eq!(
            describe_location(Some(Point::new(126.978, 37.5665))),
            "📍 Current location: 37.566500, 126.978000"
        );
    }

    #[test]
    fn blank_submit_keeps_the_session() {
        let client = LocalSearch::new(
            http::agent(),
            NaverCredentials {
                client_id: "id".to_string(),
                client_secret: "secret".to_string(),
            },
        )
        .with_endpoint(closed_port());
        let mut session = SearchSession::default();
        session.replace_results("coffee", vec![result("A", None)]);
        let mut history = vec!["coffee".to_string()];

        assert!(!submit(&client, &mut session, &mut history, "   "));
        assert_eq!(session.version(), 1);
        assert_eq!(session.query(), "coffee");
        assert_eq!(session.results().len(), 1);
        assert_eq!(history, vec!["coffee"]);

        assert!(submit(&client, &mut session, &mut history, " tea "));
        assert_eq!(session.version(), 2);
        assert_eq!(session.query(), "tea");
        assert!(session.results().is_empty());
        assert_eq!(history, vec!["coffee", "tea"]);
    }
}
