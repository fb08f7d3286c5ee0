use geo::Point;
use serde::Deserialize;
use serde_with::{serde_as, DefaultOnError, DisplayFromStr, PickFirst};
use tracing::{debug, warn};
use ureq::Agent;

use super::{sort_by_distance, SearchResult};
use crate::{
    config::NaverCredentials,
    distance::haversine,
    http::{self, FetchError},
};

pub const ENDPOINT: &str = "https://openapi.naver.com/v1/search/local.json";
/// Results requested per query; the API caps local search at this anyway.
pub const DISPLAY: usize = 10;
// "random" is the provider's relevance order, kept as-is when the user has no location
const SORT: &str = "random";
// mapx/mapy are WGS84 degrees scaled by 10^7
const FIXED_POINT: f64 = 10_000_000.0;

pub struct LocalSearch {
    agent: Agent,
    credentials: NaverCredentials,
    endpoint: String,
}

impl LocalSearch {
    pub fn new(agent: Agent, credentials: NaverCredentials) -> Self {
        Self {
            agent,
            credentials,
            endpoint: ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Never fails: transport errors, bad statuses and garbled bodies all
    /// come back as no results.
    pub fn search(&self, query: &str, user: Option<Point>) -> Vec<SearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match self.fetch(query) {
            Ok(items) => refine(items, user),
            Err(err) => {
                warn!(%err, query, "local search failed");
                Vec::new()
            }
        }
    }

    fn fetch(&self, query: &str) -> Result<Vec<RawItem>, FetchError> {
        debug!(query, endpoint = %self.endpoint, "searching");
        let display = DISPLAY.to_string();
        let response: LocalResponse = http::get_json(
            self.agent
                .get(&self.endpoint)
                .set("X-Naver-Client-Id", &self.credentials.client_id)
                .set("X-Naver-Client-Secret", &self.credentials.client_secret)
                .query("query", query)
                .query("display", &display)
                .query("sort", SORT),
        )?;
        Ok(response.items)
    }
}

#[derive(Deserialize)]
struct LocalResponse {
    #[serde(default)]
    items: Vec<RawItem>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    road_address: String,
    // blank, null or malformed coordinates read as 0 so the item gets dropped
    #[serde_as(as = "DefaultOnError<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    mapx: i64,
    #[serde_as(as = "DefaultOnError<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    mapy: i64,
}

impl RawItem {
    fn point(&self) -> Option<Point> {
        let lng = self.mapx as f64 / FIXED_POINT;
        let lat = self.mapy as f64 / FIXED_POINT;
        if lat > 0.0 && lng > 0.0 {
            Some(Point::new(lng, lat))
        } else {
            None
        }
    }

    fn refine(self, user: Option<Point>) -> Option<SearchResult> {
        let point = self.point()?;
        let address = if self.road_address.is_empty() {
            self.address
        } else {
            self.road_address
        };

        Some(SearchResult {
            title: strip_highlight(&self.title),
            address,
            category: self.category,
            lat: point.y(),
            lng: point.x(),
            distance: user.map(|x| haversine(x, point)),
        })
    }
}

fn refine(items: Vec<RawItem>, user: Option<Point>) -> Vec<SearchResult> {
    let mut results: Vec<_> = items
        .into_iter()
        .take(DISPLAY)
        .filter_map(|x| x.refine(user))
        .collect();
    if user.is_some() {
        sort_by_distance(&mut results);
    }
    results
}

pub fn strip_highlight(title: &str) -> String {
    title.replace("<b>", "").replace("</b>", "")
}
