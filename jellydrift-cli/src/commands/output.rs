//! Output formatting for prediction results.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde_json::{json, Value};

use jellydrift::drift::{DriftPath, Observation, PredictionRecord, PredictionSummary};

/// Output format selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON document with records, path and summary
    Json,
}

/// Everything a prediction run produced.
pub struct Report<'a> {
    pub observation: &'a Observation,
    pub records: &'a [PredictionRecord],
    pub path: &'a DriftPath,
    pub summary: &'a PredictionSummary,
    pub start: DateTime<Utc>,
    pub seed: u64,
}

impl Report<'_> {
    /// Render in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Table => Ok(self.to_table()),
            OutputFormat::Json => serde_json::to_string_pretty(&self.to_json()),
        }
    }

    /// JSON document.
    pub fn to_json(&self) -> Value {
        json!({
            "observation": self.observation,
            "start": self.start.to_rfc3339(),
            "seed": self.seed,
            "predictions": self.records,
            "path": self.path,
            "summary": self.summary,
        })
    }

    /// Fixed-width table, one row per predicted day.
    pub fn to_table(&self) -> String {
        let obs = self.observation;
        let mut out = String::new();

        let _ = writeln!(
            out,
            "Sighting: {:.4}, {:.4} ({} observed {})",
            obs.latitude,
            obs.longitude,
            obs.count,
            obs.observed_at.format("%Y-%m-%d %H:%M UTC")
        );
        let _ = writeln!(out, "Wind window starts {}", self.start.to_rfc3339());
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{:>4}  {:>10}  {:>11}  {:>5}  {:>7}  {:>5}  {:>10}",
            "Day", "Latitude", "Longitude", "Conf", "Wind", "Dir", "From origin"
        );

        for r in self.records {
            let _ = writeln!(
                out,
                "{:>4}  {:>10.4}  {:>11.4}  {:>5.2}  {:>7.2}  {:>4.0}°  {:>8.2} km",
                r.day,
                r.latitude,
                r.longitude,
                r.confidence,
                r.wind_speed,
                r.wind_direction,
                r.distance_from_origin
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.summary);
        if self.summary.has_gaps() {
            let skipped: Vec<String> = self
                .summary
                .skipped_days
                .iter()
                .map(u32::to_string)
                .collect();
            let _ = writeln!(out, "No wind data for day(s): {}", skipped.join(", "));
        }
        let _ = writeln!(out, "Seed: {}", self.seed);

        out
    }
}
