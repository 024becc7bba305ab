//! Spherical-earth geometry.
//!
//! Great-circle helpers used to advance a drifting point and to measure how
//! far it has travelled from where it was sighted. All public functions take
//! and return degrees; radians are used internally only.

mod types;

pub use types::{GeoError, GeoPoint, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Advance a point along a great circle.
///
/// # Arguments
///
/// * `lat` - Start latitude in degrees
/// * `lon` - Start longitude in degrees
/// * `distance_km` - Distance to travel, must be non-negative
/// * `bearing_deg` - Direction of travel, degrees clockwise from true north
/// * `earth_radius_km` - Sphere radius
///
/// # Returns
///
/// A tuple of (latitude, longitude) in degrees. Longitude is wrapped back
/// into [-180, 180] when the path crosses the antimeridian.
pub fn destination_point(
    lat: f64,
    lon: f64,
    distance_km: f64,
    bearing_deg: f64,
    earth_radius_km: f64,
) -> (f64, f64) {
    let delta = distance_km / earth_radius_km;
    let phi1 = lat.to_radians();
    let lambda1 = lon.to_radians();
    let theta = bearing_deg.to_radians();

    // Rounding can push the sine a hair past 1 near the poles
    let sin_phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos())
        .clamp(-1.0, 1.0);
    let phi2 = sin_phi2.asin();

    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * sin_phi2);

    (phi2.to_degrees(), normalize_longitude(lambda2.to_degrees()))
}

/// Great-circle distance between two points using the haversine formula.
///
/// Returns kilometres, always non-negative.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64, earth_radius_km: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    earth_radius_km * c
}

/// Normalize a bearing into [0, 360).
#[inline]
pub fn normalize_bearing(bearing_deg: f64) -> f64 {
    let normalized = bearing_deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Wrap a longitude into [-180, 180]. In-range values are returned untouched.
#[inline]
pub fn normalize_longitude(lon: f64) -> f64 {
    if (MIN_LON..=MAX_LON).contains(&lon) {
        lon
    } else {
        (lon + 180.0).rem_euclid(360.0) - 180.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_destination_due_east_on_equator() {
        let (lat, lon) = destination_point(0.0, 0.0, 7.7, 90.0, EARTH_RADIUS_KM);

        assert!(lat.abs() < EPS, "Expected lat 0, got {}", lat);
        let expected_lon = (7.7 / EARTH_RADIUS_KM).to_degrees();
        assert!(
            (lon - expected_lon).abs() < 1e-9,
            "Expected lon {}, got {}",
            expected_lon,
            lon
        );
    }

    #[test]
    fn test_destination_due_north() {
        let (lat, lon) = destination_point(10.0, 20.0, 111.195, 0.0, EARTH_RADIUS_KM);

        assert!((lat - 11.0).abs() < 1e-3, "Expected ~11°, got {}", lat);
        assert!((lon - 20.0).abs() < EPS);
    }

    #[test]
    fn test_destination_zero_distance_is_identity() {
        let (lat, lon) = destination_point(-33.9, 151.2, 0.0, 45.0, EARTH_RADIUS_KM);
        assert!((lat - -33.9).abs() < EPS);
        assert!((lon - 151.2).abs() < EPS);
    }

    #[test]
    fn test_destination_wraps_antimeridian() {
        let (_, lon) = destination_point(0.0, 179.99, 7.7, 90.0, EARTH_RADIUS_KM);
        assert!(lon < -179.0, "Expected wrap to western hemisphere, got {}", lon);
    }

    #[test]
    fn test_destination_at_pole_stays_finite() {
        let (lat, lon) = destination_point(90.0, 0.0, 10.0, 180.0, EARTH_RADIUS_KM);
        assert!(lat.is_finite() && lon.is_finite());
        assert!(lat <= 90.0);
    }

    #[test]
    fn test_haversine_identical_points() {
        assert_eq!(haversine_km(12.0, 34.0, 12.0, 34.0, EARTH_RADIUS_KM), 0.0);
    }

    #[test]
    fn test_haversine_one_degree_of_latitude() {
        let d = haversine_km(0.0, 0.0, 1.0, 0.0, EARTH_RADIUS_KM);
        assert!((d - 111.195).abs() < 0.01, "Expected ~111.195 km, got {}", d);
    }

    #[test]
    fn test_haversine_antipodes() {
        let d = haversine_km(0.0, 0.0, 0.0, 180.0, EARTH_RADIUS_KM);
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - half_circumference).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_bearing() {
        assert_eq!(normalize_bearing(0.0), 0.0);
        assert_eq!(normalize_bearing(360.0), 0.0);
        assert_eq!(normalize_bearing(-90.0), 270.0);
        assert_eq!(normalize_bearing(450.0), 90.0);
        assert!(normalize_bearing(-1e-20) < 360.0);
    }

    #[test]
    fn test_normalize_longitude() {
        assert_eq!(normalize_longitude(180.0), 180.0);
        assert_eq!(normalize_longitude(-180.0), -180.0);
        assert!((normalize_longitude(190.0) - -170.0).abs() < EPS);
        assert!((normalize_longitude(-190.0) - 170.0).abs() < EPS);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_haversine_symmetric(
                lat1 in -90.0..90.0_f64,
                lon1 in -180.0..180.0_f64,
                lat2 in -90.0..90.0_f64,
                lon2 in -180.0..180.0_f64,
            ) {
                let ab = haversine_km(lat1, lon1, lat2, lon2, EARTH_RADIUS_KM);
                let ba = haversine_km(lat2, lon2, lat1, lon1, EARTH_RADIUS_KM);
                prop_assert!(ab >= 0.0);
                prop_assert!((ab - ba).abs() < 1e-6, "{} != {}", ab, ba);
            }

            #[test]
            fn test_projection_distance_roundtrip(
                lat in -80.0..80.0_f64,
                lon in -180.0..180.0_f64,
                distance in 1.0..500.0_f64,
                bearing in 0.0..360.0_f64,
            ) {
                let (lat2, lon2) = destination_point(lat, lon, distance, bearing, EARTH_RADIUS_KM);
                let back = haversine_km(lat, lon, lat2, lon2, EARTH_RADIUS_KM);

                prop_assert!(
                    ((back - distance) / distance).abs() < 0.001,
                    "Projected {} km but measured {} km", distance, back
                );
            }

            #[test]
            fn test_projection_stays_in_range(
                lat in -90.0..=90.0_f64,
                lon in -180.0..=180.0_f64,
                distance in 0.0..2000.0_f64,
                bearing in 0.0..360.0_f64,
            ) {
                let (lat2, lon2) = destination_point(lat, lon, distance, bearing, EARTH_RADIUS_KM);
                prop_assert!((MIN_LAT..=MAX_LAT).contains(&lat2));
                prop_assert!((MIN_LON..=MAX_LON).contains(&lon2));
            }
        }
    }
}
