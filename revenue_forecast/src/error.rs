//! Error types for the revenue_forecast crate

use revenue_math::MathError;
use thiserror::Error;

/// Custom error types for the revenue_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Window size below 1, empty history, or otherwise unusable input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A metric that cannot be computed for the given data
    #[error("Undefined metric: {0}")]
    UndefinedMetric(String),

    /// Error related to loading or aggregating revenue data
    #[error("Data error: {0}")]
    DataError(String),

    /// Error related to configuration values
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error from JSON serialization
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<MathError> for ForecastError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InvalidInput(msg) | MathError::InsufficientData(msg) => {
                ForecastError::InvalidInput(msg)
            }
            MathError::UndefinedMetric(msg) => ForecastError::UndefinedMetric(msg),
        }
    }
}
