//! JellyDrift - Surface drift prediction for jellyfish sightings
//!
//! This library predicts where a passively drifting organism will be over the
//! following days, given the point where it was sighted and a series of wind
//! observations.
//!
//! # Modules
//!
//! - [`wind`] - daily bucketing and vector averaging of wind samples
//! - [`geo`] - great-circle projection and haversine distance
//! - [`drift`] - displacement model, confidence decay and the day-by-day predictor
//! - [`provider`] - boundary for wind data sources
//! - [`sea`] - land/sea correction of submitted sightings
//! - [`config`] - INI configuration file

pub mod config;
pub mod drift;
pub mod geo;
pub mod provider;
pub mod sea;
pub mod wind;
