use super::{markers_json, path_json, Icon, MapView};
use crate::utils::escape_html;

const STAR_IMAGE: &str =
    "https://t1.daumcdn.net/localimg/localimages/07/mapapidoc/markerStar.png";
const RED_IMAGE: &str = "https://t1.daumcdn.net/localimg/localimages/07/mapapidoc/marker_red.png";

/// Kakao counts levels the other way round: 1 is street level, 14 is the
/// whole peninsula.
pub fn level(zoom: u8) -> u8 {
    19u8.saturating_sub(zoom).clamp(1, 14)
}

fn image(icon: Icon) -> Option<&'static str> {
    match icon {
        Icon::Star => Some(STAR_IMAGE),
        Icon::RedPin => Some(RED_IMAGE),
        Icon::BluePin => None,
    }
}

pub fn render(view: &MapView, app_key: &str) -> String {
    let markers = markers_json(view, image);
    let path = path_json(view);
    let app_key = escape_html(app_key);
    let lat = view.center.y();
    let lng = view.center.x();
    let level = level(view.zoom);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Kakao Map</title>
    <script type="text/javascript" src="https://dapi.kakao.com/v2/maps/sdk.js?appkey={app_key}"></script>
    <style>
        html, body {{ margin: 0; padding: 0; height: 100%; }}
        #map {{ width: 100%; height: 100%; min-height: 500px; }}
    </style>
</head>
<body>
    <div id="map"></div>
    <script>
        var map = new kakao.maps.Map(document.getElementById('map'), {{
            center: new kakao.maps.LatLng({lat}, {lng}),
            level: {level}
        }});
        var markers = {markers};
        var path = {path};

        markers.forEach(function (m) {{
            var options = {{ map: map, position: new kakao.maps.LatLng(m.lat, m.lng), title: m.title }};
            if (m.image) {{
                options.image = new kakao.maps.MarkerImage(m.image, new kakao.maps.Size(24, 35));
            }}
            var marker = new kakao.maps.Marker(options);
            var info = new kakao.maps.InfoWindow({{
                content: '<div style="padding:5px;font-size:12px;">' + m.popup + '</div>'
            }});
            kakao.maps.event.addListener(marker, 'mouseover', function () {{ info.open(map, marker); }});
            kakao.maps.event.addListener(marker, 'mouseout', function () {{ info.close(); }});
            kakao.maps.event.addListener(marker, 'click', function () {{ info.open(map, marker); }});
        }});

        if (path.length > 1) {{
            var line = path.map(function (p) {{ return new kakao.maps.LatLng(p.lat, p.lng); }});
            new kakao.maps.Polyline({{
                map: map,
                path: line,
                strokeWeight: 5,
                strokeColor: '#FF0000',
                strokeOpacity: 0.7,
                strokeStyle: 'solid'
            }});
            var bounds = new kakao.maps.LatLngBounds();
            line.forEach(function (p) {{ bounds.extend(p); }});
            map.setBounds(bounds);
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
    use crate::map::Marker;

    fn view(route: bool) -> MapView {
        MapView {
            center: Point::new(129.0756, 35.1796),
            zoom: 12,
            markers: vec![
                Marker::new(Point::new(129.1603, 35.1587), "해운대 해수욕장", Icon::Star),
                Marker::new(Point::new(129.0422, 35.1152), "본전돼지국밥", Icon::RedPin),
            ],
            route,
        }
    }

    #[test]
    fn levels() {
        assert_eq!(level(12), 7);
        assert_eq!(level(14), 5);
        assert_eq!(level(0), 14);
        assert_eq!(level(30), 1);
    }

    #[test]
    fn renders_markers_in_order() {
        let html = render(&view(true), "abc123");
        assert!(html.contains("sdk.js?appkey=abc123"));
        assert!(html.contains("new kakao.maps.LatLng(35.1796, 129.0756)"));
        assert!(html.contains("level: 7"));
        let beach = html.find("해운대 해수욕장").unwrap();
        let soup = html.find("본전돼지국밥").unwrap();
        assert!(beach < soup);
        assert!(html.contains(STAR_IMAGE));
        assert!(html.contains(RED_IMAGE));
        assert!(html.contains(r#"var path = [{"lat":35.1587,"lng":129.1603},{"lat":35.1152,"lng":129.0422}];"#));
    }

    #[test]
    fn no_route_no_path() {
        let html = render(&view(false), "abc123");
        assert!(html.contains("var path = [];"));
    }
}
