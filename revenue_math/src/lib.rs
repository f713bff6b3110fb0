//! # Revenue Math
//!
//! Numeric building blocks for the revenue forecast engine.
//! This crate provides the trailing-window mean used for projection and
//! the error metrics used to backtest it.

use thiserror::Error;

pub mod accuracy;
pub mod moving_averages;

/// Errors that can occur in revenue calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Undefined metric: {0}")]
    UndefinedMetric(String),
}

/// Result type for revenue math operations
pub type Result<T> = std::result::Result<T, MathError>;
