use std::cmp::Ordering;

use geo::Point;
use serde::Serialize;

mod naver;

pub use naver::LocalSearch;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub address: String,
    pub category: String,
    pub lat: f64,
    pub lng: f64,
    /// Kilometres from the user, only when their location is known.
    pub distance: Option<f64>,
}

impl SearchResult {
    pub fn point(&self) -> Point {
        Point::new(self.lng, self.lat)
    }
}

/// Nearest first; results without a distance keep their order at the end.
pub fn sort_by_distance(results: &mut [SearchResult]) {
    results.sort_by(|a, b| match (a.distance, b.distance) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
