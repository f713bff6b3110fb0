//! Backtest accuracy of the moving-average method

use crate::utils::format_price;
use revenue_math::accuracy::ErrorMetrics;
use serde::{Deserialize, Serialize};

/// One actual month re-predicted from the months before it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BacktestPoint {
    /// 0-based position in the actual series
    pub index: usize,
    pub actual: f64,
    pub predicted: f64,
    /// `|actual - predicted|`
    pub error: f64,
}

/// MAE, RMSE and MAPE of a backtest, with the points they were computed from.
///
/// MAPE leaves out points whose actual value is zero; `mape_skipped` counts
/// them and `mape` is `None` when nothing remains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyReport {
    window: usize,
    points: Vec<BacktestPoint>,
    metrics: ErrorMetrics,
}

impl AccuracyReport {
    pub(crate) fn new(window: usize, points: Vec<BacktestPoint>, metrics: ErrorMetrics) -> Self {
        Self {
            window,
            points,
            metrics,
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn points(&self) -> &[BacktestPoint] {
        &self.points
    }

    /// Mean Absolute Error
    pub fn mae(&self) -> f64 {
        self.metrics.mae
    }

    /// Root Mean Squared Error
    pub fn rmse(&self) -> f64 {
        self.metrics.rmse
    }

    /// Mean Absolute Percentage Error, as a percentage
    pub fn mape(&self) -> Option<f64> {
        self.metrics.mape
    }

    /// Points left out of MAPE because their actual value was zero
    pub fn mape_skipped(&self) -> usize {
        self.metrics.mape_skipped
    }

    pub fn metrics(&self) -> &ErrorMetrics {
        &self.metrics
    }

    /// Single-line summary for the calculation trace
    pub fn summary(&self) -> String {
        let mape = match self.mape() {
            Some(mape) => format!("{:.2}%", mape),
            None => "н/д".to_string(),
        };
        let mut line = format!(
            "Точность (бэктест, точек: {}): MAE = {}, RMSE = {}, MAPE = {}",
            self.points.len(),
            format_price(self.mae()),
            format_price(self.rmse()),
            mape
        );
        if self.mape_skipped() > 0 {
            line.push_str(&format!(
                " (пропущено нулевых значений: {})",
                self.mape_skipped()
            ));
        }
        line
    }
}

impl std::fmt::Display for AccuracyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}
