//! Drift model parameters.
//!
//! Every constant the prediction model uses lives here so alternate species
//! or drift profiles can be modelled by swapping a value, not the code.

use thiserror::Error;

use crate::geo::EARTH_RADIUS_KM;
use crate::wind::BucketAlignment;

// ==================== Model Defaults ====================

/// Default fraction of wind speed transferred to surface drift.
pub const DEFAULT_DRIFT_FACTOR: f64 = 0.03;

/// Default constant ocean current contribution in km/day.
pub const DEFAULT_OCEAN_CURRENT_KM: f64 = 0.5;

/// Default scale of the per-day random uncertainty term.
///
/// Multiplied by the day index and a unit random draw.
pub const DEFAULT_UNCERTAINTY_SCALE: f64 = 0.1;

/// Default hours of wind exposure per simulated day.
pub const DEFAULT_HOURS_PER_DAY: f64 = 24.0;

/// Default confidence lost per simulated day.
pub const DEFAULT_CONFIDENCE_DECAY: f64 = 0.02;

/// Default lower bound on confidence.
pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 0.1;

/// Default number of days to predict.
pub const DEFAULT_DAYS: u32 = 5;

/// Errors raised by [`DriftConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DriftConfigError {
    /// A parameter is negative, NaN or infinite.
    #[error("Invalid drift parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// The Earth radius must be strictly positive.
    #[error("Earth radius must be positive, got {0}")]
    InvalidRadius(f64),

    /// The confidence floor must lie in [0, 1].
    #[error("Confidence floor must be between 0 and 1, got {0}")]
    InvalidConfidenceFloor(f64),
}

/// Parameters of the daily drift model.
#[derive(Debug, Clone, PartialEq)]
pub struct DriftConfig {
    /// Fraction of wind speed transferred to surface drift.
    ///
    /// Default: 0.03.
    pub drift_factor: f64,

    /// Constant ocean current contribution in km/day.
    ///
    /// Default: 0.5 km.
    pub ocean_current_km: f64,

    /// Scale of the per-day random uncertainty term.
    ///
    /// Default: 0.1.
    pub uncertainty_scale: f64,

    /// Hours of wind exposure per simulated day.
    ///
    /// Default: 24.
    pub hours_per_day: f64,

    /// Sphere radius used for projection and distance.
    ///
    /// Default: 6371 km.
    pub earth_radius_km: f64,

    /// Confidence lost per simulated day.
    ///
    /// Default: 0.02.
    pub confidence_decay: f64,

    /// Lower bound on confidence.
    ///
    /// Default: 0.1.
    pub confidence_floor: f64,

    /// How simulated days are matched to wind buckets.
    ///
    /// Default: [`BucketAlignment::Compacted`].
    pub alignment: BucketAlignment,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            drift_factor: DEFAULT_DRIFT_FACTOR,
            ocean_current_km: DEFAULT_OCEAN_CURRENT_KM,
            uncertainty_scale: DEFAULT_UNCERTAINTY_SCALE,
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            earth_radius_km: EARTH_RADIUS_KM,
            confidence_decay: DEFAULT_CONFIDENCE_DECAY,
            confidence_floor: DEFAULT_CONFIDENCE_FLOOR,
            alignment: BucketAlignment::default(),
        }
    }
}

impl DriftConfig {
    /// Set the drift factor.
    pub fn with_drift_factor(mut self, factor: f64) -> Self {
        self.drift_factor = factor;
        self
    }

    /// Set the ocean current contribution in km/day.
    pub fn with_ocean_current_km(mut self, km: f64) -> Self {
        self.ocean_current_km = km;
        self
    }

    /// Set the uncertainty scale.
    pub fn with_uncertainty_scale(mut self, scale: f64) -> Self {
        self.uncertainty_scale = scale;
        self
    }

    /// Set the Earth radius in kilometres.
    pub fn with_earth_radius_km(mut self, radius: f64) -> Self {
        self.earth_radius_km = radius;
        self
    }

    /// Set the confidence decay per day and its floor.
    pub fn with_confidence(mut self, decay: f64, floor: f64) -> Self {
        self.confidence_decay = decay;
        self.confidence_floor = floor;
        self
    }

    /// Set the bucket alignment policy.
    pub fn with_alignment(mut self, alignment: BucketAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<(), DriftConfigError> {
        let non_negative = [
            ("drift_factor", self.drift_factor),
            ("ocean_current_km", self.ocean_current_km),
            ("uncertainty_scale", self.uncertainty_scale),
            ("hours_per_day", self.hours_per_day),
            ("confidence_decay", self.confidence_decay),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(DriftConfigError::InvalidParameter { name, value });
            }
        }

        if !self.earth_radius_km.is_finite() || self.earth_radius_km <= 0.0 {
            return Err(DriftConfigError::InvalidRadius(self.earth_radius_km));
        }

        if !(0.0..=1.0).contains(&self.confidence_floor) {
            return Err(DriftConfigError::InvalidConfidenceFloor(
                self.confidence_floor,
            ));
        }

        Ok(())
    }
}
