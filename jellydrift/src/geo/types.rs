//! Geographic point and validation types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum valid latitude in degrees.
pub const MIN_LAT: f64 = -90.0;

/// Maximum valid latitude in degrees.
pub const MAX_LAT: f64 = 90.0;

/// Minimum valid longitude in degrees.
pub const MIN_LON: f64 = -180.0;

/// Maximum valid longitude in degrees.
pub const MAX_LON: f64 = 180.0;

/// Errors raised when validating geographic input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Latitude is outside [-90, 90] or not finite.
    #[error("Invalid latitude: {0} (must be between -90 and 90)")]
    InvalidLatitude(f64),

    /// Longitude is outside [-180, 180] or not finite.
    #[error("Invalid longitude: {0} (must be between -180 and 180)")]
    InvalidLongitude(f64),
}

/// A position on the Earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point without range checks.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a point, rejecting coordinates outside the valid ranges.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !(MIN_LAT..=MAX_LAT).contains(&latitude) {
            return Err(GeoError::InvalidLatitude(latitude));
        }
        if !(MIN_LON..=MAX_LON).contains(&longitude) {
            return Err(GeoError::InvalidLongitude(longitude));
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Point reached by travelling `distance_km` along `bearing_deg`.
    pub fn destination(&self, distance_km: f64, bearing_deg: f64, earth_radius_km: f64) -> Self {
        let (latitude, longitude) = super::destination_point(
            self.latitude,
            self.longitude,
            distance_km,
            bearing_deg,
            earth_radius_km,
        );
        Self::new(latitude, longitude)
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_to(&self, other: &GeoPoint, earth_radius_km: f64) -> f64 {
        super::haversine_km(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
            earth_radius_km,
        )
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_accepts_poles_and_antimeridian() {
        assert!(GeoPoint::checked(90.0, 180.0).is_ok());
        assert!(GeoPoint::checked(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_checked_rejects_latitude() {
        let err = GeoPoint::checked(90.5, 0.0).unwrap_err();
        assert_eq!(err, GeoError::InvalidLatitude(90.5));
    }

    #[test]
    fn test_checked_rejects_longitude() {
        let err = GeoPoint::checked(0.0, -181.0).unwrap_err();
        assert!(matches!(err, GeoError::InvalidLongitude(_)));
    }

    #[test]
    fn test_checked_rejects_nan() {
        assert!(GeoPoint::checked(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::checked(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_geo_error_display() {
        let err = GeoError::InvalidLatitude(120.0);
        assert!(err.to_string().contains("120"));
    }
}
