use super::{markers_json, path_json, MapView};

const LEAFLET: &str = "https://unpkg.com/leaflet@1.9.4/dist";

/// OpenStreetMap page via Leaflet. Needs no API key.
pub fn render(view: &MapView) -> String {
    let markers = markers_json(view, |_| None);
    let path = path_json(view);
    let lat = view.center.y();
    let lng = view.center.x();
    let zoom = view.zoom;

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Map</title>
    <link rel="stylesheet" href="{LEAFLET}/leaflet.css">
    <script src="{LEAFLET}/leaflet.js"></script>
    <style>
        html, body {{ margin: 0; padding: 0; height: 100%; }}
        #map {{ width: 100%; height: 100%; min-height: 500px; }}
    </style>
</head>
<body>
    <div id="map"></div>
    <script>
        var map = L.map('map').setView([{lat}, {lng}], {zoom});
        L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
            maxZoom: 19,
            attribution: '&copy; OpenStreetMap contributors'
        }}).addTo(map);
        var markers = {markers};
        var path = {path};

        markers.forEach(function (m) {{
            L.circleMarker([m.lat, m.lng], {{
                radius: 9,
                color: '#333333',
                weight: 1,
                fillColor: m.color,
                fillOpacity: 0.9
            }}).bindTooltip(m.tooltip).bindPopup(m.popup, {{ maxWidth: 200 }}).addTo(map);
        }});

        if (path.length > 1) {{
            var line = path.map(function (p) {{ return [p.lat, p.lng]; }});
            L.polyline(line, {{ color: '#FF0000', weight: 5, opacity: 0.7 }}).addTo(map);
            map.fitBounds(line);
        }}
    </script>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use geo::Point;

    use super::*;
    use crate::map::{Icon, Marker};

    #[test]
    fn renders_view() {
        let view = MapView {
            center: Point::new(126.978, 37.5665),
            zoom: 14,
            markers: vec![
                Marker::new(Point::new(126.98, 37.57), "📍 My location", Icon::BluePin),
                Marker::new(Point::new(126.99, 37.56), "Cafe <One>", Icon::RedPin)
                    .with_popup("<b>1. Cafe &lt;One&gt;</b><br>Jongno".to_string()),
            ],
            route: false,
        };
        let html = render(&view);
        assert!(html.contains("setView([37.5665, 126.978], 14)"));
        assert!(html.contains("tile.openstreetmap.org/{z}/{x}/{y}.png"));
        assert!(html.contains(r#""tooltip":"Cafe &lt;One&gt;""#));
        assert!(html.contains("#38aadd"));
        assert!(html.contains("#d63e2a"));
        assert!(html.contains("var path = [];"));
    }
}
