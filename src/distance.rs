use geo::Point;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres. Points are `x = longitude`,
/// `y = latitude`.
pub fn haversine(a: Point, b: Point) -> f64 {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let dlat = (b.y() - a.y()).to_radians();
    let dlng = (b.x() - a.x()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use geo::HaversineDistance;

    use super::*;

    fn seoul() -> Point {
        Point::new(126.9780, 37.5665)
    }

    fn busan() -> Point {
        Point::new(129.0756, 35.1796)
    }

    #[test]
    fn known_distances() {
        assert!((haversine(seoul(), busan()) - 325.111).abs() < 0.01);
        assert!((haversine(Point::new(0.0, 0.0), Point::new(1.0, 0.0)) - 111.195).abs() < 0.001);
    }

    #[test]
    fn symmetric_and_zero() {
        let points = [
            seoul(),
            busan(),
            Point::new(126.5116, 33.3616),
            Point::new(-73.9857, 40.7484),
            Point::new(151.2093, -33.8688),
        ];
        for a in points {
            assert_eq!(haversine(a, a), 0.0);
            for b in points {
                assert!((haversine(a, b) - haversine(b, a)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn agrees_with_geo() {
        // geo uses the mean radius 6371.0088 km
        let ours = haversine(seoul(), busan());
        let theirs = seoul().haversine_distance(&busan()) / 1000.0;
        assert!((ours - theirs).abs() / theirs < 1e-5);
    }
}
