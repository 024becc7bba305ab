//! Day-by-day drift prediction.
//!
//! The predictor folds over the requested day indices, carrying the running
//! position and the records emitted so far:
//!
//! ```text
//! day 1..=N ──► resolve bucket ──► reduce ──► DriftStep ──► project ──► PredictionRecord
//!                   │ none
//!                   └──► gap: no record, position unchanged
//! ```
//!
//! Displacement is chained from the previous day's position, while
//! `distance_from_origin` is always measured back to the sighting.

use chrono::serde::ts_milliseconds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::confidence::confidence;
use super::config::{DriftConfig, DriftConfigError, DEFAULT_DAYS};
use super::random::{RandomSource, ThreadRandom};
use super::step::DriftStep;
use crate::geo::{GeoError, GeoPoint};
use crate::wind::{bucketize, resolve_bucket, WindSample};

/// A sighting: where, how many, and when.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Latitude in degrees [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees [-180, 180].
    pub longitude: f64,
    /// Number of individuals sighted.
    pub count: u32,
    /// When the sighting was made.
    #[serde(with = "ts_milliseconds")]
    pub observed_at: DateTime<Utc>,
}

impl Observation {
    /// Create an observation, validating the coordinates.
    pub fn new(
        latitude: f64,
        longitude: f64,
        count: u32,
        observed_at: DateTime<Utc>,
    ) -> Result<Self, GeoError> {
        GeoPoint::checked(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
            count,
            observed_at,
        })
    }

    /// Where the sighting was made.
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Predicted state for one simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRecord {
    /// 1-based simulated day.
    pub day: u32,
    /// Predicted latitude in degrees.
    pub latitude: f64,
    /// Predicted longitude in degrees.
    pub longitude: f64,
    /// Confidence in [floor, 1].
    pub confidence: f64,
    /// Averaged wind speed used for this day.
    pub wind_speed: f64,
    /// Averaged wind direction used for this day.
    pub wind_direction: f64,
    /// Great-circle distance from the sighting in kilometres.
    pub distance_from_origin: f64,
}

impl PredictionRecord {
    /// Predicted position.
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Runs the drift model over a wind series.
///
/// Stateless between calls; each [`DriftPredictor::predict`] starts from the
/// observation.
///
/// # Usage
///
/// ```ignore
/// let predictor = DriftPredictor::new(DriftConfig::default())?;
/// let mut random = SeededRandom::new(42);
///
/// let records = predictor.predict(&observation, &winds, start, 5, &mut random);
/// for record in &records {
///     println!("day {}: {:.4}, {:.4}", record.day, record.latitude, record.longitude);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct DriftPredictor {
    config: DriftConfig,
}

impl DriftPredictor {
    /// Create a predictor with the given model parameters.
    ///
    /// Fails if [`DriftConfig::validate`] rejects the parameters.
    pub fn new(config: DriftConfig) -> Result<Self, DriftConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Model parameters in use.
    pub fn config(&self) -> &DriftConfig {
        &self.config
    }

    /// Predict up to `days` daily positions.
    ///
    /// `start` is the beginning of day 1's wind window. Days for which no
    /// wind bucket resolves are skipped: no record is emitted and the
    /// running position does not move, so the result may be shorter than
    /// `days`. Day numbers in the output are strictly increasing.
    pub fn predict<R: RandomSource + ?Sized>(
        &self,
        observation: &Observation,
        samples: &[WindSample],
        start: DateTime<Utc>,
        days: u32,
        random: &mut R,
    ) -> Vec<PredictionRecord> {
        let config = &self.config;
        let buckets = bucketize(samples, start, days);
        let origin = observation.position();

        debug!(
            samples = samples.len(),
            buckets = buckets.len(),
            alignment = %config.alignment,
            "Wind series bucketed"
        );

        let (_, records) = (1..=days).fold(
            (origin, Vec::new()),
            |(position, mut records): (GeoPoint, Vec<PredictionRecord>), day| {
                let Some(bucket) = resolve_bucket(&buckets, day, config.alignment) else {
                    debug!(day, "No wind data for day, skipping");
                    return (position, records);
                };

                let wind = bucket.average();
                let step = DriftStep::from_wind(&wind, day, random, config);
                let next = position.destination(
                    step.distance_km,
                    step.bearing_deg,
                    config.earth_radius_km,
                );

                let record = PredictionRecord {
                    day,
                    latitude: next.latitude,
                    longitude: next.longitude,
                    confidence: confidence(day, config),
                    wind_speed: wind.speed,
                    wind_direction: wind.direction,
                    distance_from_origin: origin.distance_to(&next, config.earth_radius_km),
                };

                debug!(
                    day,
                    bucket_day = bucket.day_index,
                    wind_speed = wind.speed,
                    wind_direction = wind.direction,
                    distance_km = step.distance_km,
                    "Drift step resolved"
                );

                records.push(record);
                (next, records)
            },
        );

        info!(
            requested_days = days,
            emitted = records.len(),
            "Drift prediction complete"
        );

        records
    }
}

/// Predict [`DEFAULT_DAYS`] days with the default model parameters,
/// drawing the uncertainty term from the thread RNG.
pub fn predict(
    observation: &Observation,
    samples: &[WindSample],
    start: DateTime<Utc>,
) -> Vec<PredictionRecord> {
    predict_with(observation, samples, start, &mut ThreadRandom::new())
}

/// Like [`predict`], with an injected random source.
pub fn predict_with<R: RandomSource + ?Sized>(
    observation: &Observation,
    samples: &[WindSample],
    start: DateTime<Utc>,
    random: &mut R,
) -> Vec<PredictionRecord> {
    DriftPredictor::default().predict(observation, samples, start, DEFAULT_DAYS, random)
}
