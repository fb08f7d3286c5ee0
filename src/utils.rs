use std::time::Duration;

use anyhow::{bail, Context, Result};
use geo::Point;
use indicatif::{ProgressBar, ProgressStyle};

pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner().with_style(
        ProgressStyle::with_template("{spinner} {msg} [{elapsed}]").expect("hardcoded"),
    );
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn escape_html(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            c => output.push(c),
        }
    }
    output
}

/// Rounds to a whole number and groups digits: `1350.4` -> `1,350`.
pub fn thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut output = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            output.push(',');
        }
        output.push(c);
    }
    if rounded < 0.0 {
        output.insert(0, '-');
    }
    output
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// `"37.5665,126.9780"` (latitude first, as people write it).
pub fn parse_location(text: &str) -> Result<Point> {
    let (lat, lng) = text
        .split_once(',')
        .context("Expected a location like 37.5665,126.9780")?;
    let lat: f64 = lat.trim().parse().context("Invalid latitude")?;
    let lng: f64 = lng.trim().parse().context("Invalid longitude")?;
    if !(-90.0..=90.0).contains(&lat) {
        bail!("Latitude out of range: {lat}");
    }
    if !(-180.0..=180.0).contains(&lng) {
        bail!("Longitude out of range: {lng}");
    }
    Ok(Point::new(lng, lat))
}
