//! Confidence decay.

use super::config::DriftConfig;

/// Confidence for a 1-based simulated day.
///
/// `max(floor, 1 - day × decay)`. Depends on the day alone, never on earlier
/// predictions. With the defaults it reaches the 0.1 floor at day 45.
#[inline]
pub fn confidence(day: u32, config: &DriftConfig) -> f64 {
    (1.0 - f64::from(day) * config.confidence_decay).max(config.confidence_floor)
}
