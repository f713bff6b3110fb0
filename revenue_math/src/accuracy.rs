//! Accuracy metrics for comparing predictions to actual values

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Mean Absolute Percentage Error over the points where it is defined
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageError {
    /// MAPE as a percentage (x100)
    pub value: f64,
    /// Points dropped from the average because their actual value was zero
    pub skipped: usize,
}

/// Error metrics for a set of predictions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMetrics {
    /// Number of compared points
    pub count: usize,
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error, absent when every actual is zero
    pub mape: Option<f64>,
    /// Zero-valued actuals excluded from MAPE
    pub mape_skipped: usize,
}

fn check_lengths(actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.len() != predicted.len() {
        return Err(MathError::InvalidInput(format!(
            "Actual length ({}) doesn't match predicted length ({})",
            actual.len(),
            predicted.len()
        )));
    }
    if actual.is_empty() {
        return Err(MathError::InsufficientData(
            "No points to compare".to_string(),
        ));
    }
    Ok(())
}

fn absolute_errors<'a>(actual: &'a [f64], predicted: &'a [f64]) -> impl Iterator<Item = f64> + 'a {
    actual.iter().zip(predicted).map(|(a, p)| (a - p).abs())
}

/// Mean of `|actual - predicted|`
pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(actual, predicted)?;
    Ok(absolute_errors(actual, predicted).sum::<f64>() / actual.len() as f64)
}

/// Mean of `(actual - predicted)^2`
pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(actual, predicted)?;
    Ok(absolute_errors(actual, predicted)
        .map(|e| e * e)
        .sum::<f64>()
        / actual.len() as f64)
}

/// Square root of the mean squared error
pub fn root_mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    Ok(mean_squared_error(actual, predicted)?.sqrt())
}

/// Mean of `|error / actual|` as a percentage.
///
/// Points with a zero actual value are left out of the mean and counted in
/// `skipped`. Fails with `UndefinedMetric` when no point remains.
pub fn mean_absolute_percentage_error(actual: &[f64], predicted: &[f64]) -> Result<PercentageError> {
    check_lengths(actual, predicted)?;

    let mut sum = 0.0;
    let mut used = 0usize;
    for (a, e) in actual.iter().zip(absolute_errors(actual, predicted)) {
        if *a == 0.0 {
            continue;
        }
        sum += (e / a).abs();
        used += 1;
    }

    let skipped = actual.len() - used;
    if used == 0 {
        return Err(MathError::UndefinedMetric(format!(
            "MAPE is undefined: all {} actual values are zero",
            skipped
        )));
    }

    Ok(PercentageError {
        value: sum / used as f64 * 100.0,
        skipped,
    })
}

/// Compute every metric at once
pub fn evaluate(actual: &[f64], predicted: &[f64]) -> Result<ErrorMetrics> {
    let mae = mean_absolute_error(actual, predicted)?;
    let mse = mean_squared_error(actual, predicted)?;

    let (mape, mape_skipped) = match mean_absolute_percentage_error(actual, predicted) {
        Ok(pct) => (Some(pct.value), pct.skipped),
        Err(MathError::UndefinedMetric(_)) => (None, actual.len()),
        Err(err) => return Err(err),
    };

    Ok(ErrorMetrics {
        count: actual.len(),
        mae,
        mse,
        rmse: mse.sqrt(),
        mape,
        mape_skipped,
    })
}

impl std::fmt::Display for ErrorMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Accuracy Metrics ({} points):", self.count)?;
        writeln!(f, "  MAE:   {:.4}", self.mae)?;
        writeln!(f, "  MSE:   {:.4}", self.mse)?;
        writeln!(f, "  RMSE:  {:.4}", self.rmse)?;
        match self.mape {
            Some(mape) => writeln!(f, "  MAPE:  {:.4}%", mape)?,
            None => writeln!(f, "  MAPE:  n/a")?,
        }
        Ok(())
    }
}
