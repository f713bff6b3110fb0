//! Forecast results and the trace of how they were computed

use crate::calendar::MonthIndex;
use crate::utils::format_price;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod moving_average;

pub use moving_average::{backtest, project};

/// One computed forecast month and the values that were averaged for it.
///
/// The rendered divisor is `window.len()`, the count actually averaged,
/// which is smaller than the configured window while history is short.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDetail {
    /// Month being forecast
    pub month: MonthIndex,
    /// Values averaged, oldest first
    pub window: Vec<f64>,
    /// Resulting forecast value
    pub average: f64,
}

impl fmt::Display for ForecastDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let window = self
            .window
            .iter()
            .map(|v| format_price(*v))
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "Прогноз на {}: mₜ = ({}) / {} = {}",
            self.month.short_name(),
            window,
            self.window.len(),
            format_price(self.average)
        )
    }
}

/// Output of a moving-average projection over one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Window size the projection was computed with
    pub(crate) window: usize,
    /// Length of the actual prefix
    pub(crate) actual_len: usize,
    /// Actual prefix followed by forecast suffix
    pub(crate) values: Vec<f64>,
    /// One entry per forecast month
    pub(crate) details: Vec<ForecastDetail>,
}

impl Projection {
    /// Get the full series
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the actual prefix
    pub fn actual(&self) -> &[f64] {
        &self.values[..self.actual_len]
    }

    /// Get the forecast suffix
    pub fn forecast(&self) -> &[f64] {
        &self.values[self.actual_len..]
    }

    pub fn details(&self) -> &[ForecastDetail] {
        &self.details
    }

    /// One rendered line per forecast month
    pub fn trace(&self) -> Vec<String> {
        self.details.iter().map(ToString::to_string).collect()
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// First forecast month, `None` when the whole year is actual
    pub fn current_month(&self) -> Option<MonthIndex> {
        self.details.first().map(|d| d.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_divides_by_values_averaged() {
        // Configured window is larger than the two values available
        let projection = project(&[100.0, 200.0], 5).unwrap();
        let detail = &projection.details()[0];

        assert_eq!(projection.window(), 5);
        assert_eq!(
            detail.to_string(),
            "Прогноз на Мар: mₜ = (100 руб., 200 руб.) / 2 = 150 руб."
        );
    }
}
