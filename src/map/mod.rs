use std::{fs, path::Path, process};

use anyhow::{Context, Result};
use geo::Point;
use serde::Serialize;
use tracing::warn;

use crate::utils::escape_html;

pub mod kakao;
pub mod leaflet;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Icon {
    Star,
    RedPin,
    BluePin,
}

impl Icon {
    pub fn color(&self) -> &'static str {
        match self {
            Self::Star => "#f5b301",
            Self::RedPin => "#d63e2a",
            Self::BluePin => "#38aadd",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub point: Point,
    /// Plain text, used for hover titles.
    pub label: String,
    /// HTML shown in the popup / info window.
    pub popup: String,
    pub icon: Icon,
}

impl Marker {
    pub fn new(point: Point, label: impl Into<String>, icon: Icon) -> Self {
        let label = label.into();
        Self {
            point,
            popup: escape_html(&label),
            label,
            icon,
        }
    }

    pub fn with_popup(mut self, popup: String) -> Self {
        self.popup = popup;
        self
    }
}

/// Everything a renderer needs. Markers are drawn in order; when `route` is
/// set and there are at least two of them they are joined by a line and the
/// viewport is fitted to them.
#[derive(Clone, Debug, PartialEq)]
pub struct MapView {
    pub center: Point,
    /// Web-mercator zoom level (higher is closer).
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub route: bool,
}

impl MapView {
    pub fn path(&self) -> Option<Vec<Point>> {
        if self.route && self.markers.len() > 1 {
            Some(self.markers.iter().map(|x| x.point).collect())
        } else {
            None
        }
    }
}

#[derive(Serialize)]
struct JsMarker<'a> {
    lat: f64,
    lng: f64,
    title: &'a str,
    tooltip: String,
    popup: &'a str,
    color: &'static str,
    image: Option<&'static str>,
}

#[derive(Serialize)]
struct JsPoint {
    lat: f64,
    lng: f64,
}

fn markers_json(view: &MapView, image: impl Fn(Icon) -> Option<&'static str>) -> String {
    let markers: Vec<_> = view
        .markers
        .iter()
        .map(|x| JsMarker {
            lat: x.point.y(),
            lng: x.point.x(),
            title: &x.label,
            tooltip: escape_html(&x.label),
            popup: &x.popup,
            color: x.icon.color(),
            image: image(x.icon),
        })
        .collect();
    script_json(&markers)
}

fn path_json(view: &MapView) -> String {
    let path: Vec<_> = view
        .path()
        .unwrap_or_default()
        .into_iter()
        .map(|x| JsPoint {
            lat: x.y(),
            lng: x.x(),
        })
        .collect();
    script_json(&path)
}

fn script_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/")
}

pub fn write_page(path: &Path, html: &str, open: bool) -> Result<()> {
    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    if open {
        let opener = if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        };
        match process::Command::new(opener).arg(path).spawn() {
            Ok(mut child) => {
                if let Err(err) = child.wait() {
                    warn!(%err, "browser exited abnormally");
                }
            }
            Err(err) => warn!(%err, opener, "failed to open the map in a browser"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(n: usize, route: bool) -> MapView {
        MapView {
            center: Point::new(126.978, 37.5665),
            zoom: 12,
            markers: (0..n)
                .map(|i| Marker::new(Point::new(127.0 + i as f64, 37.0), format!("m{i}"), Icon::Star))
                .collect(),
            route,
        }
    }

    #[test]
    fn path_needs_route_and_two_markers() {
        assert!(view(0, true).path().is_none());
        assert!(view(1, true).path().is_none());
        assert!(view(3, false).path().is_none());
        assert_eq!(
            view(3, true).path().unwrap(),
            vec![
                Point::new(127.0, 37.0),
                Point::new(128.0, 37.0),
                Point::new(129.0, 37.0)
            ]
        );
    }

    #[test]
    fn marker_popup_is_escaped() {
        let marker = Marker::new(Point::new(0.0, 0.0), "Fish & <Chips>", Icon::RedPin);
        assert_eq!(marker.label, "Fish & <Chips>");
        assert_eq!(marker.popup, "Fish &amp; &lt;Chips&gt;");
    }

    #[test]
    fn json_cannot_close_the_script() {
        let mut view = view(1, false);
        view.markers[0].label = "</script><script>alert(1)".to_string();
        let json = markers_json(&view, |_| None);
        assert!(!json.contains("</script>"));
        assert!(json.contains(r#""lat":37.0"#));
        assert!(json.contains(r#""lng":127.0"#));
    }

    #[test]
    fn empty_path_json() {
        assert_eq!(path_json(&view(1, true)), "[]");
        assert_eq!(
            path_json(&view(2, true)),
            r#"[{"lat":37.0,"lng":127.0},{"lat":37.0,"lng":128.0}]"#
        );
    }

    #[test]
    fn writes_page() {
        let path = std::env::temp_dir().join(format!("travel-map-{}.html", process::id()));
        write_page(&path, "<html></html>", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
        fs::remove_file(path).unwrap();
    }
}
