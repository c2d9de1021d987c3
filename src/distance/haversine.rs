use crate::config::constant::EARTH_RADIUS_KM;

/// Great-circle distance between two points given in decimal degrees, in km.
///
/// Only depends on its four arguments, so it can be mapped over any batch of
/// point pairs (see [`crate::distance::matrix`]).
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lon1_rad = lon1.to_radians();
    let lat2_rad = lat2.to_radians();
    let lon2_rad = lon2.to_radians();

    let delta_lat = lat2_rad - lat1_rad;
    let delta_lon = lon2_rad - lon1_rad;

    let a = (delta_lat * 0.5).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon * 0.5).sin().powi(2);
    // rounding can push `a` a hair past 1 for antipodal points
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_self_distance_is_zero() {
        for &(lat, lon) in &[(90.0, 0.0), (0.0, 0.0), (-33.9, 151.2), (48.85, 2.35), (-90.0, 180.0)] {
            assert_eq!(haversine(lat, lon, lat, lon), 0.0);
        }
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ((51.5, -0.12), (40.71, -74.0)),
            ((-33.9, 151.2), (35.68, 139.69)),
            ((90.0, 0.0), (-12.3, 77.7)),
        ];
        for ((lat1, lon1), (lat2, lon2)) in pairs {
            let ab = haversine(lat1, lon1, lat2, lon2);
            let ba = haversine(lat2, lon2, lat1, lon1);
            assert!((ab - ba).abs() < 1e-9, "{} vs {}", ab, ba);
        }
    }

    #[test]
    fn test_pole_to_equator_is_quarter_circle() {
        let d = haversine(90.0, 0.0, 0.0, 0.0);
        let expected = PI * EARTH_RADIUS_KM / 2.0;
        assert!((d - expected).abs() < 1e-6);
        assert!((d - 10007.5).abs() < 0.1);
    }

    #[test]
    fn test_pole_longitude_does_not_matter() {
        let d = haversine(90.0, 0.0, 90.0, 123.0);
        assert!(d.abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_points_do_not_produce_nan() {
        let d = haversine(0.0, 0.0, 0.0, 180.0);
        assert!(d.is_finite());
        assert!((d - PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}
