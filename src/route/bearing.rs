use super::structs::Coordinate;

/// Initial great-circle bearing from `start` to `end`, clockwise from true
/// north in degrees `[0, 360)`.
///
/// Identical coordinates have no defined direction; that case returns 0.0.
pub fn initial_bearing(start: Coordinate, end: Coordinate) -> f64 {
    let phi1 = start.lat.to_radians();
    let phi2 = end.lat.to_radians();
    let delta_lambda = (end.lon - start.lon).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    y.atan2(x).to_degrees().rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon)
    }

    #[test]
    fn test_cardinal_directions_on_the_equator() {
        assert!((initial_bearing(coord(0.0, 0.0), coord(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((initial_bearing(coord(0.0, 0.0), coord(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((initial_bearing(coord(0.0, 0.0), coord(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((initial_bearing(coord(0.0, 0.0), coord(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_known_bearing_mid_latitude() {
        // Berlin towards Munich points roughly south-southwest.
        let bearing = initial_bearing(coord(52.52, 13.405), coord(48.137, 11.575));
        assert!(
            (180.0..220.0).contains(&bearing),
            "unexpected bearing {bearing}"
        );
    }

    #[test]
    fn test_forward_and_reverse_bearings_differ_by_half_a_turn() {
        // Exact on the sphere only up to meridian convergence, so keep the
        // pairs at route-segment scale where the deviation is negligible.
        let pairs = [
            (coord(52.52, 13.405), coord(52.53, 13.42)),
            (coord(38.5, -120.2), coord(38.51, -120.21)),
            (coord(-33.87, 151.21), coord(-33.86, 151.2)),
            (coord(10.0, 179.995), coord(10.005, -179.995)),
        ];

        for (a, b) in pairs {
            let forward = initial_bearing(a, b);
            let reverse = initial_bearing(b, a);
            let difference = (forward - reverse).rem_euclid(360.0);
            assert!(
                (difference - 180.0).abs() < 0.05,
                "bearing({a:?}, {b:?}) = {forward}, reverse {reverse}"
            );
        }
    }

    #[test]
    fn test_degenerate_segment_points_north() {
        let point = coord(47.3, 8.5);
        assert_eq!(initial_bearing(point, point), 0.0);
    }

    #[test]
    fn test_result_range() {
        let bearing = initial_bearing(coord(0.0, 0.0), coord(-0.5, -0.5));
        assert!((0.0..360.0).contains(&bearing));
    }
}
