use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use tracing::warn;

use crate::{
    catalog,
    config::{Config, KAKAO_MAP_API_KEY},
    helper, http,
    itinerary::{Itinerary, Selection},
    map::{self, kakao, leaflet},
    services::{exchange, weather, ExchangeClient, WeatherClient},
    CityId, PlaceId,
};

#[derive(Clone, Debug, Args)]
pub struct PlanArgs {
    /// City to plan in (asked interactively when omitted)
    #[arg(long)]
    city: Option<CityId>,
    /// Stops in visiting order, e.g. s1,f2,s3 (see `travel cities`)
    #[arg(long, value_delimiter = ',', conflicts_with = "all")]
    order: Option<Vec<PlaceId>>,
    /// Visit every spot, then every restaurant, in catalog order
    #[arg(long)]
    all: bool,
    /// Where to write the map page
    #[arg(long, default_value = "itinerary.html")]
    out: PathBuf,
    /// Open the map page in the browser
    #[arg(long)]
    open: bool,
}

pub fn run(config: &Config, args: PlanArgs) -> Result<()> {
    let agent = http::agent();
    let interactive = args.order.is_none() && !args.all;

    let rate = ExchangeClient::new(agent.clone(), config.exchange_key.clone()).usd_to_krw();
    println!("{}", exchange::describe(rate));

    let city = match args.city {
        Some(x) => x,
        None if interactive => helper::pick_city()?,
        None => bail!("--city is required together with --order or --all"),
    };
    let city = catalog::city(city);
    println!("\n# {}", city.name);

    let weather = WeatherClient::new(agent, config.weather_key.clone()).current(city.center());
    for line in weather::describe(weather.as_ref()) {
        println!("{line}");
    }
    println!();

    let selection = if args.all {
        Selection::all(city)
    } else if let Some(order) = args.order {
        Selection::from_order(order)
    } else {
        helper::pick_selection(city)?
    };
    let itinerary = Itinerary::build(city, &selection)?;

    if itinerary.is_empty() {
        println!("👈 Select and order your spots to create a route.");
        return Ok(());
    }
    print!("{itinerary}");

    let view = itinerary.map_view();
    let html = match &config.kakao_map_key {
        Some(key) => kakao::render(&view, key),
        None => {
            warn!("{KAKAO_MAP_API_KEY} is not set, falling back to OpenStreetMap");
            eprintln!("⚠️ {KAKAO_MAP_API_KEY} not set: drawing the map with OpenStreetMap instead");
            leaflet::render(&view)
        }
    };
    map::write_page(&args.out, &html, args.open)?;
    println!("\n🗺️ Map written to {}", args.out.display());

    Ok(())
}
