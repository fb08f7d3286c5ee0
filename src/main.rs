use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod catalog;
mod config;
mod distance;
mod helper;
mod http;
mod itinerary;
mod map;
mod nearby;
mod plan;
mod search;
mod services;
mod session;
mod utils;

pub use _model::{Category, CityId, PlaceId, PlaceKind};

use config::Config;

/// Korea travel guide: a curated itinerary planner and a nearby place search.
#[derive(Debug, Parser)]
#[command(name = "travel", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Pick spots and restaurants in a city, order them and map the route
    Plan(plan::PlanArgs),
    /// Search for places, sorted by distance when your location is known
    Search(nearby::SearchArgs),
    /// List the curated cities, spots and restaurants with their ids
    Cities,
}

fn main() -> Result<()> {
    // before the subscriber so RUST_LOG can come from .env too
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded environment file"),
        Err(err) if err.not_found() => debug!("no .env file"),
        Err(err) => warn!(%err, "failed to read .env"),
    }

    let cli = Cli::parse();
    let config = Config::from_env();
    config.log_missing();

    match cli.command {
        Command::Plan(args) => plan::run(&config, args),
        Command::Search(args) => nearby::run(&config, args),
        Command::Cities => {
            catalog::print();
            Ok(())
        }
    }
}
