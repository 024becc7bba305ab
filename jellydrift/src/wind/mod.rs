//! Wind samples and their daily aggregation.
//!
//! # Data Flow
//!
//! ```text
//! Vec<WindSample> ──► bucketize() ──► Vec<DailyBucket> ──► reduce() ──► AveragedWind
//!  (irregular times)    (24h windows,     (compacted)         (vector mean)
//!                        explicit start)
//! ```

mod aggregator;
mod types;

pub use aggregator::{bucketize, next_day_boundary, reduce, resolve_bucket, MILLIS_PER_DAY};
pub use types::{AveragedWind, BucketAlignment, DailyBucket, WindSample};
