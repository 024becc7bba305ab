//! CLI error types.

use thiserror::Error;

use jellydrift::config::ConfigError;
use jellydrift::drift::DriftConfigError;
use jellydrift::geo::GeoError;
use jellydrift::provider::WindProviderError;

/// Errors surfaced to the user by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be loaded or saved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The effective model parameters are unusable.
    #[error("Invalid model parameters: {0}")]
    Drift(#[from] DriftConfigError),

    /// The sighting coordinates are invalid.
    #[error("Invalid sighting: {0}")]
    Observation(#[from] GeoError),

    /// Wind samples could not be loaded.
    #[error("Failed to load wind data: {0}")]
    Wind(#[from] WindProviderError),

    /// A command-line argument is unusable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding output failed.
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_display() {
        let err = CliError::InvalidArgument("days must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid argument: days must be positive");
    }

    #[test]
    fn test_cli_error_from_geo_error() {
        let err: CliError = GeoError::InvalidLatitude(95.0).into();
        assert!(matches!(err, CliError::Observation(_)));
        assert!(err.to_string().contains("95"));
    }

    #[test]
    fn test_cli_error_from_drift_config_error() {
        let err: CliError = DriftConfigError::InvalidRadius(0.0).into();
        assert!(matches!(err, CliError::Drift(_)));
        assert!(err.to_string().starts_with("Invalid model parameters"));
    }
}
