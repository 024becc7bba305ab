//! Predict command - run the drift model for one sighting.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{Args, ValueEnum};
use tracing::info;

use jellydrift::config::ConfigFile;
use jellydrift::drift::{DriftPath, DriftPredictor, Observation, PredictionSummary, SeededRandom};
use jellydrift::provider::{JsonWindFile, WindProvider};
use jellydrift::wind::{next_day_boundary, BucketAlignment};

use super::output::{OutputFormat, Report};
use crate::error::CliError;

/// Bucket alignment selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum AlignmentArg {
    /// Match days to the compacted bucket sequence by position
    Compacted,
    /// Match days to buckets by day number
    ByDay,
}

impl From<AlignmentArg> for BucketAlignment {
    fn from(arg: AlignmentArg) -> Self {
        match arg {
            AlignmentArg::Compacted => BucketAlignment::Compacted,
            AlignmentArg::ByDay => BucketAlignment::ByDay,
        }
    }
}

/// Arguments for the predict command.
#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Sighting latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Sighting longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Number of individuals sighted
    #[arg(long, default_value_t = 1)]
    pub count: u32,

    /// When the sighting was made (RFC 3339, defaults to now)
    #[arg(long)]
    pub observed_at: Option<DateTime<Utc>>,

    /// JSON file with an array of wind samples
    #[arg(long)]
    pub winds: PathBuf,

    /// Number of days to predict (defaults to the config file value)
    #[arg(long)]
    pub days: Option<u32>,

    /// Start of day 1's wind window (RFC 3339, defaults to midnight UTC after the sighting)
    #[arg(long)]
    pub start: Option<DateTime<Utc>>,

    /// Seed for the uncertainty term; a random seed is used and reported if omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// How days are matched to wind buckets (overrides the config file)
    #[arg(long, value_enum)]
    pub alignment: Option<AlignmentArg>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Also write the drift path as GeoJSON to this file
    #[arg(long)]
    pub geojson: Option<PathBuf>,
}

/// Run the predict command.
pub fn run(args: PredictArgs, config_path: Option<&Path>) -> Result<(), CliError> {
    let output = execute(args, config_path)?;
    print!("{}", output);
    Ok(())
}

/// Run the prediction and return the rendered output.
fn execute(args: PredictArgs, config_path: Option<&Path>) -> Result<String, CliError> {
    let config = match config_path {
        Some(path) => ConfigFile::load_from(path)?,
        None => ConfigFile::load()?,
    };

    let mut drift = config.drift;
    if let Some(alignment) = args.alignment {
        drift.alignment = alignment.into();
    }

    let days = args.days.unwrap_or(config.days);
    if days == 0 {
        return Err(CliError::InvalidArgument(
            "--days must be at least 1".to_string(),
        ));
    }

    let observed_at = args.observed_at.unwrap_or_else(Utc::now);
    let observation = Observation::new(args.lat, args.lon, args.count, observed_at)?;

    let start = match args.start {
        Some(start) => start,
        None => next_day_boundary(observed_at).ok_or_else(|| {
            CliError::InvalidArgument(format!("no day boundary after {}", observed_at))
        })?,
    };

    let provider = JsonWindFile::new(&args.winds);
    let samples = provider.wind_samples(observation.latitude, observation.longitude, days)?;
    info!(
        file = %provider.path().display(),
        samples = samples.len(),
        "Loaded wind samples"
    );

    let mut random = match args.seed {
        Some(seed) => SeededRandom::new(seed),
        None => SeededRandom::from_random_seed(),
    };
    let seed = random.seed();
    info!(seed, days, alignment = %drift.alignment, "Running drift prediction");

    let predictor = DriftPredictor::new(drift)?;
    let records = predictor.predict(&observation, &samples, start, days, &mut random);
    let path = DriftPath::assemble(&observation, &records);
    let summary = PredictionSummary::from_records(&records, days);

    if let Some(geojson_path) = &args.geojson {
        fs::write(geojson_path, serde_json::to_string_pretty(&path.to_geojson())?)?;
        info!(file = %geojson_path.display(), "Wrote GeoJSON path");
    }

    let report = Report {
        observation: &observation,
        records: &records,
        path: &path,
        summary: &summary,
        start,
        seed,
    };
    Ok(report.render(args.format)?)
}
