//! Renderable drift path.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::pipeline::{Observation, PredictionRecord};

/// One vertex of a drift path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathPoint {
    /// 0 for the sighting, otherwise the prediction day.
    pub day: u32,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// Ordered positions from the sighting through each predicted day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriftPath {
    points: Vec<PathPoint>,
}

impl DriftPath {
    /// Prepend the sighting (day 0) to the predicted positions.
    pub fn assemble(observation: &Observation, records: &[PredictionRecord]) -> Self {
        let origin = PathPoint {
            day: 0,
            latitude: observation.latitude,
            longitude: observation.longitude,
        };

        let points = std::iter::once(origin)
            .chain(records.iter().map(|r| PathPoint {
                day: r.day,
                latitude: r.latitude,
                longitude: r.longitude,
            }))
            .collect();

        Self { points }
    }

    /// Path vertices, day 0 first.
    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    /// Number of vertices including the origin.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// GeoJSON `Feature` with a `LineString` geometry.
    ///
    /// Coordinates are `[longitude, latitude]` per RFC 7946. The `days`
    /// property lists the day of each vertex, which matters when the
    /// prediction had gaps.
    pub fn to_geojson(&self) -> Value {
        let coordinates: Vec<[f64; 2]> = self
            .points
            .iter()
            .map(|p| [p.longitude, p.latitude])
            .collect();
        let days: Vec<u32> = self.points.iter().map(|p| p.day).collect();

        json!({
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": coordinates,
            },
            "properties": {
                "days": days,
            },
        })
    }
}
