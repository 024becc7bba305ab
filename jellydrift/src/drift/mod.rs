//! Drift prediction.
//!
//! Turns one sighting and a wind series into daily position estimates.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        DriftPredictor                        │
//! │                                                              │
//! │  wind::bucketize ──► wind::resolve_bucket ──► reduce         │
//! │                                                │             │
//! │  step::DriftStep ◄─────────────────────────────┘             │
//! │     │  (RandomSource injected)                               │
//! │     ▼                                                        │
//! │  geo::destination_point ──► geo::haversine_km ──► confidence │
//! │                                                              │
//! │  ──► Vec<PredictionRecord> ──► DriftPath::assemble           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use jellydrift::drift::{DriftConfig, DriftPath, DriftPredictor, Observation, SeededRandom};
//!
//! let predictor = DriftPredictor::new(DriftConfig::default())?;
//! let records = predictor.predict(&observation, &winds, start, 5, &mut SeededRandom::new(42));
//! let path = DriftPath::assemble(&observation, &records);
//! ```

mod config;
mod confidence;
mod path;
mod pipeline;
mod random;
mod step;
mod summary;

pub use config::{
    DriftConfig, DriftConfigError, DEFAULT_CONFIDENCE_DECAY, DEFAULT_CONFIDENCE_FLOOR,
    DEFAULT_DAYS, DEFAULT_DRIFT_FACTOR, DEFAULT_HOURS_PER_DAY, DEFAULT_OCEAN_CURRENT_KM,
    DEFAULT_UNCERTAINTY_SCALE,
};
pub use confidence::confidence;
pub use path::{DriftPath, PathPoint};
pub use pipeline::{predict, predict_with, DriftPredictor, Observation, PredictionRecord};
pub use random::{ConstantRandom, RandomSource, SeededRandom, ThreadRandom};
pub use step::{daily_displacement, DriftStep};
pub use summary::PredictionSummary;
