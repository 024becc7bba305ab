//! Run-level summary of a prediction.

use std::fmt;

use serde::Serialize;

use super::pipeline::PredictionRecord;
use crate::geo::GeoPoint;

/// Aggregate view of one prediction run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSummary {
    /// Days the caller asked for.
    pub requested_days: u32,
    /// Records actually produced.
    pub emitted_days: usize,
    /// Requested days that produced no record.
    pub skipped_days: Vec<u32>,
    /// Position on the last emitted day.
    pub final_position: Option<GeoPoint>,
    /// Largest distance from the sighting over the run, in kilometres.
    pub max_distance_km: f64,
    /// Confidence on the last emitted day.
    pub final_confidence: Option<f64>,
}

impl PredictionSummary {
    /// Summarize the records of a run that requested `requested_days`.
    pub fn from_records(records: &[PredictionRecord], requested_days: u32) -> Self {
        let skipped_days = (1..=requested_days)
            .filter(|day| !records.iter().any(|r| r.day == *day))
            .collect();

        let max_distance_km = records
            .iter()
            .map(|r| r.distance_from_origin)
            .fold(0.0, f64::max);

        let last = records.last();

        Self {
            requested_days,
            emitted_days: records.len(),
            skipped_days,
            final_position: last.map(PredictionRecord::position),
            max_distance_km,
            final_confidence: last.map(|r| r.confidence),
        }
    }

    /// Whether any requested day was skipped for lack of wind data.
    pub fn has_gaps(&self) -> bool {
        !self.skipped_days.is_empty()
    }
}

impl fmt::Display for PredictionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} days predicted, max {:.2} km from sighting",
            self.emitted_days, self.requested_days, self.max_distance_km
        )?;
        if let Some(pos) = self.final_position {
            write!(f, ", ends at {:.4}, {:.4}", pos.latitude, pos.longitude)?;
        }
        Ok(())
    }
}
