//! Daily displacement model.

use super::config::DriftConfig;
use super::random::RandomSource;
use crate::wind::AveragedWind;

/// Distance drifted in one simulated day, in kilometres.
///
/// `wind_speed × drift_factor × hours_per_day + ocean_current + u × day × uncertainty_scale`
/// where `u` is one draw from `random`. The uncertainty term grows with the
/// day index.
pub fn daily_displacement<R: RandomSource + ?Sized>(
    wind_speed: f64,
    day: u32,
    random: &mut R,
    config: &DriftConfig,
) -> f64 {
    let wind_drift = wind_speed * config.drift_factor * config.hours_per_day;
    let uncertainty = random.next_unit() * f64::from(day) * config.uncertainty_scale;
    wind_drift + config.ocean_current_km + uncertainty
}

/// One day's movement: how far and which way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftStep {
    /// Distance travelled in kilometres.
    pub distance_km: f64,
    /// Direction of travel in degrees. The organism moves downwind.
    pub bearing_deg: f64,
}

impl DriftStep {
    /// Build the step for `day` from that day's averaged wind.
    pub fn from_wind<R: RandomSource + ?Sized>(
        wind: &AveragedWind,
        day: u32,
        random: &mut R,
        config: &DriftConfig,
    ) -> Self {
        Self {
            distance_km: daily_displacement(wind.speed, day, random, config),
            bearing_deg: wind.direction,
        }
    }
}
