use geo::Point;

use crate::{
    map::{Icon, MapView, Marker},
    search::SearchResult,
    utils::escape_html,
};

/// Shown when there is neither a location nor any results: Seoul City Hall.
pub const DEFAULT_CENTER: (f64, f64) = (37.5665, 126.9780);
pub const DEFAULT_ZOOM: u8 = 12;
pub const FOCUSED_ZOOM: u8 = 14;

/// State of one search session. Each slot is replaced wholesale, never
/// merged; `version` goes up on every write so callers can tell a stale
/// read from a fresh one.
#[derive(Debug, Default, Clone)]
pub struct SearchSession {
    version: u64,
    query: String,
    results: Vec<SearchResult>,
    location: Option<Point>,
}

impl SearchSession {
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn location(&self) -> Option<Point> {
        self.location
    }

    pub fn set_location(&mut self, point: Point) {
        self.location = Some(point);
        self.version += 1;
    }

    pub fn clear_location(&mut self) {
        self.location = None;
        self.version += 1;
    }

    pub fn replace_results(&mut self, query: impl Into<String>, results: Vec<SearchResult>) {
        self.query = query.into();
        self.results = results;
        self.version += 1;
    }

    pub fn map_view(&self) -> MapView {
        let (center, zoom) = match (self.location, self.results.first()) {
            (Some(x), _) => (x, FOCUSED_ZOOM),
            (None, Some(x)) => (x.point(), FOCUSED_ZOOM),
            (None, None) => (Point::new(DEFAULT_CENTER.1, DEFAULT_CENTER.0), DEFAULT_ZOOM),
        };

        let mut markers = Vec::new();
        if let Some(x) = self.location {
            markers.push(Marker::new(x, "📍 My location", Icon::BluePin));
        }
        for (i, x) in self.results.iter().enumerate() {
            let popup = format!(
                "<b>{}. {}</b><br>{}",
                i + 1,
                escape_html(&x.title),
                escape_html(&x.address)
            );
            markers.push(Marker::new(x.point(), &x.title, Icon::RedPin).with_popup(popup));
        }

        MapView {
            center,
            zoom,
            markers,
            route: false,
        }
    }
}
