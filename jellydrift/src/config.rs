//! INI configuration file.
//!
//! ```ini
//! [drift]
//! drift_factor = 0.03
//! ocean_current_km = 0.5
//! uncertainty_scale = 0.1
//! hours_per_day = 24
//! earth_radius_km = 6371
//! confidence_decay = 0.02
//! confidence_floor = 0.1
//! alignment = compacted
//! days = 5
//! ```
//!
//! Missing keys keep their defaults and unknown keys are ignored.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ini::Ini;
use thiserror::Error;
use tracing::debug;

use crate::drift::{DriftConfig, DriftConfigError, DEFAULT_DAYS};
use crate::wind::BucketAlignment;

/// Section holding the drift model parameters.
const DRIFT_SECTION: &str = "drift";

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading or writing the file.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid INI.
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// A key has a value that cannot be parsed.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    /// Rendering the INI text failed.
    #[error("Failed to write config: {0}")]
    Write(#[source] std::io::Error),

    /// The values parse but describe an unusable model.
    #[error(transparent)]
    Drift(#[from] DriftConfigError),
}

/// Contents of the configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Drift model parameters.
    pub drift: DriftConfig,
    /// Default number of days to predict.
    pub days: u32,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            drift: DriftConfig::default(),
            days: DEFAULT_DAYS,
        }
    }
}

/// Default location of the configuration file.
///
/// `<config dir>/jellydrift/config.ini`, e.g. `~/.config/jellydrift/config.ini` on Linux.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jellydrift")
        .join("config.ini")
}

impl ConfigFile {
    /// Load from the default path, falling back to defaults if it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_file_path();
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loading config file");
        Self::from_ini_str(&contents)
    }

    /// Parse INI text.
    pub fn from_ini_str(contents: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let mut config = Self::default();

        if let Some(section) = ini.section(Some(DRIFT_SECTION)) {
            let drift = &mut config.drift;

            if let Some(v) = section.get("drift_factor") {
                drift.drift_factor = parse_value("drift_factor", v)?;
            }
            if let Some(v) = section.get("ocean_current_km") {
                drift.ocean_current_km = parse_value("ocean_current_km", v)?;
            }
            if let Some(v) = section.get("uncertainty_scale") {
                drift.uncertainty_scale = parse_value("uncertainty_scale", v)?;
            }
            if let Some(v) = section.get("hours_per_day") {
                drift.hours_per_day = parse_value("hours_per_day", v)?;
            }
            if let Some(v) = section.get("earth_radius_km") {
                drift.earth_radius_km = parse_value("earth_radius_km", v)?;
            }
            if let Some(v) = section.get("confidence_decay") {
                drift.confidence_decay = parse_value("confidence_decay", v)?;
            }
            if let Some(v) = section.get("confidence_floor") {
                drift.confidence_floor = parse_value("confidence_floor", v)?;
            }
            if let Some(v) = section.get("alignment") {
                drift.alignment = parse_value::<BucketAlignment>("alignment", v)?;
            }
            if let Some(v) = section.get("days") {
                config.days = parse_value("days", v)?;
                if config.days == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: "days".to_string(),
                        value: v.to_string(),
                    });
                }
            }
        }

        config.drift.validate()?;
        Ok(config)
    }

    /// Render as INI text.
    pub fn to_ini_string(&self) -> Result<String, ConfigError> {
        let d = &self.drift;
        let mut ini = Ini::new();
        ini.with_section(Some(DRIFT_SECTION))
            .set("drift_factor", d.drift_factor.to_string())
            .set("ocean_current_km", d.ocean_current_km.to_string())
            .set("uncertainty_scale", d.uncertainty_scale.to_string())
            .set("hours_per_day", d.hours_per_day.to_string())
            .set("earth_radius_km", d.earth_radius_km.to_string())
            .set("confidence_decay", d.confidence_decay.to_string())
            .set("confidence_floor", d.confidence_floor.to_string())
            .set("alignment", d.alignment.as_str())
            .set("days", self.days.to_string());

        let mut buf = Vec::new();
        ini.write_to(&mut buf).map_err(ConfigError::Write)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = self.to_ini_string()?;
        fs::write(path, contents).map_err(io_err)
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
