//! Forecast table and calculation trace, ready for display

use crate::calendar::MonthIndex;
use crate::error::{ForecastError, Result};
use crate::logging::*;
use crate::metrics::AccuracyReport;
use crate::models::{backtest, project};
use crate::series::RevenueSeries;
use crate::source::RevenueSource;
use crate::utils::format_price;
use serde::Serialize;

/// Everything the presentation layer shows for one computation
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    window: usize,
    series: RevenueSeries,
    trace: Vec<String>,
    accuracy: Option<AccuracyReport>,
}

impl ForecastReport {
    /// Project `actual` to a full year and backtest it with the same window
    pub fn build(actual: &[f64], window: usize) -> Result<Self> {
        let log = DEFAULT.new(o!(
            "function" => "ForecastReport::build",
            "window" => window,
            "actual_months" => actual.len(),
        ));

        let projection = project(actual, window)?;
        let accuracy = backtest(actual, window)?;
        let series = RevenueSeries::from_projection(&projection)?;

        match &accuracy {
            Some(report) => info!(log, "forecast computed";
                "mae" => report.mae(),
                "rmse" => report.rmse(),
                "mape_skipped" => report.mape_skipped()
            ),
            None => info!(log, "forecast computed without backtest"),
        }

        Ok(Self {
            window,
            series,
            trace: projection.trace(),
            accuracy,
        })
    }

    /// Pull actual revenue for the months before `current` and build the report
    pub fn from_source<S: RevenueSource + ?Sized>(
        source: &mut S,
        current: MonthIndex,
        window: usize,
    ) -> Result<Self> {
        let actual = source.monthly_revenue(current)?;
        if actual.len() != current.index() {
            return Err(ForecastError::DataError(format!(
                "Revenue source returned {} months, expected {}",
                actual.len(),
                current.index()
            )));
        }
        Self::build(&actual, window)
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn series(&self) -> &RevenueSeries {
        &self.series
    }

    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    pub fn accuracy(&self) -> Option<&AccuracyReport> {
        self.accuracy.as_ref()
    }

    /// Accuracy summary, or the reason there is none
    pub fn accuracy_line(&self) -> String {
        match &self.accuracy {
            Some(report) => report.summary(),
            None => format!(
                "Недостаточно данных для оценки точности: фактических месяцев {}, окно n={}",
                self.series.actual().count(),
                self.window
            ),
        }
    }

    /// One row per month: name, formatted revenue, kind
    pub fn render_table(&self) -> String {
        let header = format!("{:<10} {:>18} {:<8}", "Месяц", "Выручка", "Тип");
        let rows = self.series.entries().iter().map(|entry| {
            format!(
                "{:<10} {:>18} {:<8}",
                entry.month.full_name(),
                format_price(entry.value),
                entry.kind.label()
            )
        });

        let mut out = std::iter::once(header)
            .chain(rows)
            .collect::<Vec<_>>()
            .join("\n");
        out.push('\n');
        out
    }

    /// Header, one line per forecast month, then the accuracy line
    pub fn render_trace(&self) -> String {
        let mut out = format!("Скользящая средняя (n={})\n\n", self.window);
        for line in &self.trace {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.accuracy_line());
        out.push('\n');
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for ForecastReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.render_table())?;
        write!(f, "{}", self.render_trace())
    }
}
