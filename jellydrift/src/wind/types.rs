//! Wind sample and aggregate types.

use std::fmt;
use std::str::FromStr;

use chrono::serde::ts_milliseconds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single wind observation from the weather provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindSample {
    /// Wind speed (distance/time, non-negative).
    pub speed: f64,
    /// Direction the wind blows toward, in degrees [0, 360).
    pub direction: f64,
    /// When the sample was taken.
    #[serde(with = "ts_milliseconds")]
    pub at: DateTime<Utc>,
}

impl WindSample {
    /// Create a new wind sample.
    pub fn new(speed: f64, direction: f64, at: DateTime<Utc>) -> Self {
        Self {
            speed,
            direction,
            at,
        }
    }

    /// Cartesian (east, north) components of this sample.
    pub fn components(&self) -> (f64, f64) {
        let rad = self.direction.to_radians();
        (self.speed * rad.sin(), self.speed * rad.cos())
    }
}

/// The representative wind for one simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AveragedWind {
    /// Magnitude of the mean wind vector.
    pub speed: f64,
    /// Direction of the mean wind vector in degrees [0, 360).
    pub direction: f64,
}

/// Wind samples that fall within one simulated day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBucket {
    /// 0-based day index relative to the bucket start instant.
    pub day_index: u32,
    /// Samples in this day, in input order.
    pub samples: Vec<WindSample>,
}

impl DailyBucket {
    /// Reduce this bucket to a single vector-averaged wind.
    pub fn average(&self) -> AveragedWind {
        super::reduce(&self.samples)
    }

    /// Number of samples in the bucket.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the bucket holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// How a simulated day is matched to a wind bucket.
///
/// Buckets for days without samples are dropped before lookup, so the two
/// policies diverge as soon as the wind series has a hole in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BucketAlignment {
    /// Take the bucket at position `day - 1` of the compacted sequence,
    /// falling back to the last bucket when the sequence is too short.
    #[default]
    Compacted,
    /// Take the bucket whose day index equals `day - 1`, falling back to the
    /// closest earlier non-empty day.
    ByDay,
}

impl BucketAlignment {
    /// Name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            BucketAlignment::Compacted => "compacted",
            BucketAlignment::ByDay => "by_day",
        }
    }
}

impl fmt::Display for BucketAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BucketAlignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compacted" => Ok(BucketAlignment::Compacted),
            "by_day" | "by-day" | "byday" => Ok(BucketAlignment::ByDay),
            other => Err(format!(
                "unknown bucket alignment '{}' (expected 'compacted' or 'by_day')",
                other
            )),
        }
    }
}
