//! Land/sea correction of submitted sightings.
//!
//! A sighting reported on land (a beach, a pier, a GPS glitch) cannot drift.
//! Before an [`Observation`](crate::drift::Observation) is built, the
//! submitted point is classified and, when it is on land, replaced with the
//! last position known to be over water.
//!
//! This is a boundary for callers that own a land mask. The drift core never
//! classifies points itself, and the CLI takes coordinates as given.

use tracing::{debug, warn};

use crate::geo::GeoPoint;

/// Surface type at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Open water.
    Water,
    /// Land.
    Land,
    /// The classifier could not decide.
    Unknown,
}

/// Trait for land/sea classification backends.
pub trait SeaClassifier {
    /// Classify the surface at `(latitude, longitude)`.
    fn classify(&self, latitude: f64, longitude: f64) -> Surface;

    /// Whether `(latitude, longitude)` is known to be open water.
    fn is_water(&self, latitude: f64, longitude: f64) -> bool {
        self.classify(latitude, longitude) == Surface::Water
    }
}

impl<F> SeaClassifier for F
where
    F: Fn(f64, f64) -> Surface,
{
    fn classify(&self, latitude: f64, longitude: f64) -> Surface {
        self(latitude, longitude)
    }
}

/// Outcome of [`LastValidPosition::correct`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    /// Position to use for the observation.
    pub position: GeoPoint,
    /// Surface the submitted point was classified as.
    pub surface: Surface,
    /// Whether `position` was substituted for the submitted point.
    pub substituted: bool,
}

/// Remembers the last over-water position and substitutes it for land points.
#[derive(Debug, Clone, Default)]
pub struct LastValidPosition {
    last: Option<GeoPoint>,
}

impl LastValidPosition {
    /// Create with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create seeded with a previously recorded water position.
    pub fn with_last(position: GeoPoint) -> Self {
        Self {
            last: Some(position),
        }
    }

    /// Last recorded water position.
    pub fn last(&self) -> Option<GeoPoint> {
        self.last
    }

    /// Classify a submitted point and correct it if it lies on land.
    ///
    /// - Water: recorded as the new last valid position and returned as is.
    /// - Land: replaced by the last valid position when one exists.
    /// - Unknown, or land with no history: returned unchanged, not recorded.
    pub fn correct<C: SeaClassifier + ?Sized>(
        &mut self,
        classifier: &C,
        latitude: f64,
        longitude: f64,
    ) -> Correction {
        let submitted = GeoPoint::new(latitude, longitude);
        let surface = classifier.classify(latitude, longitude);

        match (surface, self.last) {
            (Surface::Water, _) => {
                self.last = Some(submitted);
                Correction {
                    position: submitted,
                    surface,
                    substituted: false,
                }
            }
            (Surface::Land, Some(last)) => {
                debug!(
                    latitude,
                    longitude,
                    replacement_lat = last.latitude,
                    replacement_lon = last.longitude,
                    "Sighting on land, using last water position"
                );
                Correction {
                    position: last,
                    surface,
                    substituted: true,
                }
            }
            (Surface::Land, None) => {
                warn!(
                    latitude,
                    longitude, "Sighting on land with no previous water position"
                );
                Correction {
                    position: submitted,
                    surface,
                    substituted: false,
                }
            }
            (Surface::Unknown, _) => Correction {
                position: submitted,
                surface,
                substituted: false,
            },
        }
    }
}
