//! Daily wind bucketing and circular averaging.
//!
//! Wind samples arrive at irregular times. They are grouped into fixed
//! 24-hour windows starting at an explicit boundary instant, then each window
//! is reduced to one wind vector.
//!
//! Directions are circular, so the reduction averages Cartesian components
//! instead of raw angles: 350° and 10° average to 0°, not 180°.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};

use super::types::{AveragedWind, BucketAlignment, DailyBucket, WindSample};
use crate::geo::normalize_bearing;

/// Length of one simulated day in milliseconds.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Group samples into daily buckets.
///
/// Day `i` covers `[start + i days, start + (i + 1) days)`. Samples before
/// `start` or at/after `start + bucket_count days` are ignored.
///
/// Days with no samples are omitted, so the returned sequence is compacted
/// and ordered by `day_index`. Position in the result does not equal day
/// index once a day has been dropped.
pub fn bucketize(
    samples: &[WindSample],
    start: DateTime<Utc>,
    bucket_count: u32,
) -> Vec<DailyBucket> {
    let mut days: BTreeMap<u32, Vec<WindSample>> = BTreeMap::new();

    for sample in samples {
        let offset_ms = (sample.at - start).num_milliseconds();
        if offset_ms < 0 {
            continue;
        }
        let day_index = offset_ms / MILLIS_PER_DAY;
        if day_index >= i64::from(bucket_count) {
            continue;
        }
        days.entry(day_index as u32).or_default().push(*sample);
    }

    days.into_iter()
        .map(|(day_index, samples)| DailyBucket { day_index, samples })
        .collect()
}

/// Vector-average a set of wind samples.
///
/// Each sample becomes `(speed·sin(dir), speed·cos(dir))`; the mean vector's
/// length is the speed and its `atan2` is the direction. An empty slice
/// reduces to a calm wind of speed 0 and direction 0.
pub fn reduce(samples: &[WindSample]) -> AveragedWind {
    if samples.is_empty() {
        return AveragedWind::default();
    }

    let (sum_x, sum_y) = samples
        .iter()
        .map(WindSample::components)
        .fold((0.0, 0.0), |(ax, ay), (x, y)| (ax + x, ay + y));

    let n = samples.len() as f64;
    let (mean_x, mean_y) = (sum_x / n, sum_y / n);

    AveragedWind {
        speed: mean_x.hypot(mean_y),
        direction: normalize_bearing(mean_x.atan2(mean_y).to_degrees()),
    }
}

/// Pick the bucket that supplies wind for a 1-based simulated `day`.
///
/// Returns `None` when no bucket can be resolved, which callers treat as a
/// gap in the prediction.
pub fn resolve_bucket(
    buckets: &[DailyBucket],
    day: u32,
    alignment: BucketAlignment,
) -> Option<&DailyBucket> {
    let position = day.checked_sub(1)?;

    match alignment {
        BucketAlignment::Compacted => buckets.get(position as usize).or_else(|| buckets.last()),
        BucketAlignment::ByDay => buckets.iter().rev().find(|b| b.day_index <= position),
    }
}

/// First UTC midnight strictly after `reference`.
///
/// Used to derive the bucket start ("tomorrow at midnight") from a caller's
/// clock reading. Returns `None` only at the end of chrono's date range.
pub fn next_day_boundary(reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let midnight = reference.date_naive().and_hms_opt(0, 0, 0)?.and_utc();
    midnight.checked_add_signed(TimeDelta::days(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap()
    }

    fn sample_at(hours: i64, speed: f64, direction: f64) -> WindSample {
        WindSample::new(speed, direction, start() + TimeDelta::hours(hours))
    }

    // =========================================================================
    // bucketize
    // =========================================================================

    #[test]
    fn test_bucketize_groups_by_day() {
        let samples = vec![
            sample_at(1, 5.0, 90.0),
            sample_at(23, 5.0, 90.0),
            sample_at(24, 6.0, 90.0),
            sample_at(50, 7.0, 90.0),
        ];

        let buckets = bucketize(&samples, start(), 5);

        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].day_index, 0);
        assert_eq!(buckets[0].len(), 2);
        assert_eq!(buckets[1].day_index, 1);
        assert_eq!(buckets[2].day_index, 2);
    }

    #[test]
    fn test_bucketize_day_boundary_is_half_open() {
        let samples = vec![WindSample::new(1.0, 0.0, start() + TimeDelta::days(1))];
        let buckets = bucketize(&samples, start(), 3);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].day_index, 1);
    }

    #[test]
    fn test_bucketize_drops_out_of_window_samples() {
        let samples = vec![
            sample_at(-1, 5.0, 0.0),
            sample_at(24 * 3, 5.0, 0.0),
            sample_at(2, 5.0, 0.0),
        ];

        let buckets = bucketize(&samples, start(), 3);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].day_index, 0);
    }

    #[test]
    fn test_bucketize_compacts_empty_days() {
        let samples = vec![sample_at(1, 5.0, 0.0), sample_at(24 * 2 + 1, 5.0, 0.0)];

        let buckets = bucketize(&samples, start(), 5);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[1].day_index, 2);
    }

    #[test]
    fn test_bucketize_unordered_input() {
        let samples = vec![sample_at(30, 1.0, 0.0), sample_at(2, 2.0, 0.0)];
        let buckets = bucketize(&samples, start(), 2);

        assert_eq!(buckets[0].day_index, 0);
        assert_eq!(buckets[0].samples[0].speed, 2.0);
    }

    #[test]
    fn test_bucketize_empty() {
        assert!(bucketize(&[], start(), 5).is_empty());
    }

    // =========================================================================
    // reduce
    // =========================================================================

    #[test]
    fn test_reduce_empty_is_calm() {
        let avg = reduce(&[]);
        assert_eq!(avg.speed, 0.0);
        assert_eq!(avg.direction, 0.0);
    }

    #[test]
    fn test_reduce_opposing_winds_cancel() {
        let avg = reduce(&[sample_at(0, 5.0, 0.0), sample_at(1, 5.0, 180.0)]);
        assert!(avg.speed < 1e-9, "Expected ~0, got {}", avg.speed);
    }

    #[test]
    fn test_reduce_identical_samples() {
        let avg = reduce(&[sample_at(0, 8.0, 135.0), sample_at(1, 8.0, 135.0)]);
        assert!((avg.speed - 8.0).abs() < 1e-9);
        assert!((avg.direction - 135.0).abs() < 1e-9);
    }

    #[test]
    fn test_reduce_across_north_wraparound() {
        let avg = reduce(&[sample_at(0, 5.0, 350.0), sample_at(1, 5.0, 10.0)]);
        assert!(
            avg.direction < 1e-6 || avg.direction > 360.0 - 1e-6,
            "Expected ~0°, got {}°",
            avg.direction
        );
        assert!(avg.speed > 4.9);
    }

    #[test]
    fn test_reduce_negative_angle_normalized() {
        let avg = reduce(&[sample_at(0, 3.0, 270.0)]);
        assert!((avg.direction - 270.0).abs() < 1e-9);
    }

    // =========================================================================
    // resolve_bucket
    // =========================================================================

    fn buckets_for_days(days: &[u32]) -> Vec<DailyBucket> {
        days.iter()
            .map(|&day_index| DailyBucket {
                day_index,
                samples: vec![sample_at(i64::from(day_index) * 24, 1.0, 0.0)],
            })
            .collect()
    }

    #[test]
    fn test_resolve_compacted_positional() {
        // Day 1 has no samples, so position 1 holds day index 2
        let buckets = buckets_for_days(&[0, 2, 3]);

        let b = resolve_bucket(&buckets, 2, BucketAlignment::Compacted).unwrap();
        assert_eq!(b.day_index, 2);
    }

    #[test]
    fn test_resolve_compacted_falls_back_to_last() {
        let buckets = buckets_for_days(&[0, 1]);

        let b = resolve_bucket(&buckets, 5, BucketAlignment::Compacted).unwrap();
        assert_eq!(b.day_index, 1);
    }

    #[test]
    fn test_resolve_by_day_uses_day_index() {
        let buckets = buckets_for_days(&[0, 2, 3]);

        let b = resolve_bucket(&buckets, 3, BucketAlignment::ByDay).unwrap();
        assert_eq!(b.day_index, 2);

        // Day 2 (index 1) has no samples, falls back to index 0
        let b = resolve_bucket(&buckets, 2, BucketAlignment::ByDay).unwrap();
        assert_eq!(b.day_index, 0);
    }

    #[test]
    fn test_resolve_by_day_gap_before_first_bucket() {
        let buckets = buckets_for_days(&[2]);
        assert!(resolve_bucket(&buckets, 1, BucketAlignment::ByDay).is_none());
        assert!(resolve_bucket(&buckets, 3, BucketAlignment::ByDay).is_some());
    }

    #[test]
    fn test_resolve_empty_sequence() {
        assert!(resolve_bucket(&[], 1, BucketAlignment::Compacted).is_none());
        assert!(resolve_bucket(&[], 1, BucketAlignment::ByDay).is_none());
    }

    #[test]
    fn test_resolve_day_zero() {
        let buckets = buckets_for_days(&[0]);
        assert!(resolve_bucket(&buckets, 0, BucketAlignment::Compacted).is_none());
    }

    // =========================================================================
    // next_day_boundary
    // =========================================================================

    #[test]
    fn test_next_day_boundary_mid_day() {
        let reference = Utc.with_ymd_and_hms(2024, 7, 1, 15, 30, 0).unwrap();
        let boundary = next_day_boundary(reference).unwrap();
        assert_eq!(boundary.to_rfc3339(), "2024-07-02T00:00:00+00:00");
    }

    #[test]
    fn test_next_day_boundary_at_midnight_is_next_day() {
        let boundary = next_day_boundary(start()).unwrap();
        assert_eq!(boundary, start() + TimeDelta::days(1));
    }

    #[test]
    fn test_next_day_boundary_crosses_month() {
        let reference = Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap();
        let boundary = next_day_boundary(reference).unwrap();
        assert_eq!(boundary.to_rfc3339(), "2024-03-01T00:00:00+00:00");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_reduce_single_sample_identity(
                speed in 0.1..50.0_f64,
                direction in 0.0..359.9_f64,
            ) {
                let avg = reduce(&[sample_at(0, speed, direction)]);
                prop_assert!((avg.speed - speed).abs() < 1e-9);
                prop_assert!((avg.direction - direction).abs() < 1e-6,
                    "{} -> {}", direction, avg.direction);
            }

            #[test]
            fn test_reduce_direction_in_range(
                a in 0.0..360.0_f64,
                b in 0.0..360.0_f64,
                speed in 0.0..30.0_f64,
            ) {
                let avg = reduce(&[sample_at(0, speed, a), sample_at(1, speed, b)]);
                prop_assert!((0.0..360.0).contains(&avg.direction));
                prop_assert!(avg.speed <= speed + 1e-9);
            }

            #[test]
            fn test_bucketize_preserves_in_window_samples(
                hours in proptest::collection::vec(0i64..120, 0..40),
            ) {
                let samples: Vec<_> = hours.iter().map(|&h| sample_at(h, 1.0, 0.0)).collect();
                let buckets = bucketize(&samples, start(), 5);

                let total: usize = buckets.iter().map(DailyBucket::len).sum();
                prop_assert_eq!(total, samples.len());
                prop_assert!(buckets.windows(2).all(|w| w[0].day_index < w[1].day_index));
            }
        }
    }
}
