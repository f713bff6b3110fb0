//! Simple moving average projection and backtest

use crate::calendar::{MonthIndex, MONTHS_IN_YEAR};
use crate::error::{ForecastError, Result};
use crate::metrics::{AccuracyReport, BacktestPoint};
use crate::models::{ForecastDetail, Projection};
use revenue_math::accuracy;
use revenue_math::moving_averages::{mean, TrailingWindow};

fn validate_window(window: usize) -> Result<()> {
    if window == 0 {
        return Err(ForecastError::InvalidInput(
            "Window size must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn validate_values(actual: &[f64]) -> Result<()> {
    if let Some(pos) = actual.iter().position(|v| !v.is_finite()) {
        return Err(ForecastError::InvalidInput(format!(
            "Actual value for month {} is not a finite number",
            pos + 1
        )));
    }
    Ok(())
}

/// Extend `actual` to a full year with trailing moving averages.
///
/// Each forecast month is the mean of the last `min(window, len)` values
/// already in the series, so later forecasts average earlier ones.
/// `actual` is copied unchanged into the prefix of the result.
pub fn project(actual: &[f64], window: usize) -> Result<Projection> {
    validate_window(window)?;
    validate_values(actual)?;

    if actual.len() > MONTHS_IN_YEAR {
        return Err(ForecastError::InvalidInput(format!(
            "At most {} months of actual revenue are allowed, got {}",
            MONTHS_IN_YEAR,
            actual.len()
        )));
    }
    if actual.is_empty() {
        return Err(ForecastError::InvalidInput(
            "No actual revenue to average for the first forecast month".to_string(),
        ));
    }

    let mut values = Vec::with_capacity(MONTHS_IN_YEAR);
    values.extend_from_slice(actual);

    let mut trailing = TrailingWindow::with_history(window, actual)?;
    let mut details = Vec::with_capacity(MONTHS_IN_YEAR - actual.len());

    for index in actual.len()..MONTHS_IN_YEAR {
        let average = trailing.value()?;
        details.push(ForecastDetail {
            month: MonthIndex::from_index(index)?,
            window: trailing.values(),
            average,
        });
        trailing.push(average);
        values.push(average);
    }

    Ok(Projection {
        window,
        actual_len: actual.len(),
        values,
        details,
    })
}

/// Re-predict each actual month from index `window` on and score the method.
///
/// Windows are taken strictly from `actual`, never from predictions.
/// Returns `Ok(None)` when `actual` is not longer than `window`.
pub fn backtest(actual: &[f64], window: usize) -> Result<Option<AccuracyReport>> {
    validate_window(window)?;
    validate_values(actual)?;

    if actual.len() <= window {
        return Ok(None);
    }

    let predicted = (window..actual.len())
        .map(|i| mean(&actual[i - window..i]))
        .collect::<revenue_math::Result<Vec<f64>>>()?;
    let observed = &actual[window..];

    let metrics = accuracy::evaluate(observed, &predicted)?;

    let points = observed
        .iter()
        .zip(&predicted)
        .enumerate()
        .map(|(offset, (&truth, &guess))| BacktestPoint {
            index: window + offset,
            actual: truth,
            predicted: guess,
            error: (truth - guess).abs(),
        })
        .collect();

    Ok(Some(AccuracyReport::new(window, points, metrics)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_project_known_values() {
        let projection = project(&[10.0, 20.0, 30.0], 3).unwrap();
        assert_eq!(projection.values().len(), 12);
        assert_eq!(projection.forecast()[0], 20.0);
        assert_eq!(projection.details()[0].window, vec![10.0, 20.0, 30.0]);
        assert_eq!(projection.current_month().unwrap().number(), 4);
    }

    #[test]
    fn test_project_chains_forecasts() {
        let projection = project(&[100.0, 200.0], 1).unwrap();
        assert!(projection.forecast().iter().all(|&v| v == 200.0));
        assert_eq!(projection.details()[1].window, vec![200.0]);
    }

    #[test]
    fn test_project_full_year_has_no_trace() {
        let actual: Vec<f64> = (1..=12).map(f64::from).collect();
        let projection = project(&actual, 3).unwrap();
        assert_eq!(projection.values(), actual.as_slice());
        assert!(projection.trace().is_empty());
        assert_eq!(projection.current_month(), None);
    }

    #[test]
    fn test_project_rejects_bad_input() {
        assert!(matches!(project(&[], 3), Err(ForecastError::InvalidInput(_))));
        assert!(matches!(
            project(&[1.0], 0),
            Err(ForecastError::InvalidInput(_))
        ));
        assert!(matches!(
            project(&[1.0; 13], 3),
            Err(ForecastError::InvalidInput(_))
        ));
        assert!(matches!(
            project(&[1.0, f64::NAN], 3),
            Err(ForecastError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_backtest_known_values() {
        let report = backtest(&[10.0, 20.0, 30.0, 40.0], 2).unwrap().unwrap();
        assert_eq!(report.points().len(), 2);
        assert_eq!(report.points()[0].predicted, 15.0);
        assert_eq!(report.points()[1].predicted, 25.0);
        assert_approx_eq!(report.mae(), 15.0, 1e-9);
        assert_approx_eq!(report.rmse(), 15.0, 1e-9);
        assert_approx_eq!(report.mape().unwrap(), 43.75, 1e-9);
    }

    #[test]
    fn test_backtest_uses_actual_windows_only() {
        // Index 3 averages the actual 10 and 30, not the prediction for index 2.
        let report = backtest(&[10.0, 10.0, 30.0, 50.0], 2).unwrap().unwrap();
        assert_eq!(report.points()[0].predicted, 10.0);
        assert_eq!(report.points()[1].predicted, 20.0);
        assert_eq!(report.points()[1].error, 30.0);
    }

    #[test]
    fn test_backtest_absent_without_enough_history() {
        assert!(backtest(&[100.0, 200.0], 5).unwrap().is_none());
        assert!(backtest(&[100.0, 200.0], 2).unwrap().is_none());
        assert!(backtest(&[], 1).unwrap().is_none());
    }

    #[test]
    fn test_backtest_rejects_zero_window() {
        assert!(matches!(
            backtest(&[1.0, 2.0, 3.0], 0),
            Err(ForecastError::InvalidInput(_))
        ));
    }
}
