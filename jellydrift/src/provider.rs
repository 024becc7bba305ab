//! Wind data provider boundary.
//!
//! Fetching wind from a remote weather service lives outside the
//! prediction core. This trait is the seam: the core only ever receives an
//! already-resolved `Vec<WindSample>`.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::wind::WindSample;

/// Errors that can occur while loading wind samples.
#[derive(Debug, Error)]
pub enum WindProviderError {
    /// I/O error reading the source.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source could not be decoded.
    #[error("Invalid wind data: {0}")]
    Decode(#[from] serde_json::Error),

    /// The provider has no data for the requested location.
    #[error("No wind data available for {latitude}, {longitude}")]
    Unavailable { latitude: f64, longitude: f64 },
}

/// Trait for wind sample sources.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling fixed wind series in tests.
pub trait WindProvider {
    /// Wind samples near `(latitude, longitude)` covering at least `days` days.
    fn wind_samples(
        &self,
        latitude: f64,
        longitude: f64,
        days: u32,
    ) -> Result<Vec<WindSample>, WindProviderError>;
}

/// Wind samples read from a JSON file.
///
/// The file holds an array of `{ "speed", "direction", "at" }` objects with
/// `at` in epoch milliseconds. Location and day span are ignored.
#[derive(Debug, Clone)]
pub struct JsonWindFile {
    path: PathBuf,
}

impl JsonWindFile {
    /// Create a provider reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this provider reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WindProvider for JsonWindFile {
    fn wind_samples(
        &self,
        _latitude: f64,
        _longitude: f64,
        _days: u32,
    ) -> Result<Vec<WindSample>, WindProviderError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| WindProviderError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_samples(&contents)
    }
}

/// Decode a JSON array of wind samples.
pub fn parse_samples(json: &str) -> Result<Vec<WindSample>, WindProviderError> {
    Ok(serde_json::from_str(json)?)
}

/// Fetch samples, treating any provider failure as "no data for this run".
///
/// The prediction core then produces an empty result instead of failing.
pub fn samples_or_empty<P: WindProvider + ?Sized>(
    provider: &P,
    latitude: f64,
    longitude: f64,
    days: u32,
) -> Vec<WindSample> {
    match provider.wind_samples(latitude, longitude, days) {
        Ok(samples) => samples,
        Err(e) => {
            warn!(error = %e, "Wind provider failed, continuing without wind data");
            Vec::new()
        }
    }
}
