//! Forecast settings with environment overrides

use crate::calendar::{resolve_current_month, MonthIndex};
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

pub const DEFAULT_WINDOW: usize = 3;
pub const DEFAULT_TARGET_YEAR: i32 = 2025;
pub const DEFAULT_FALLBACK_MONTH: u32 = 6;
pub const DEFAULT_REVENUE_MIN: f64 = 1_000_000.0;
pub const DEFAULT_REVENUE_MAX: f64 = 5_000_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Moving average window, in months
    pub window: usize,
    /// Year whose revenue is being forecast
    pub target_year: i32,
    /// Current month used when today is outside `target_year`
    pub fallback_month: u32,
    /// Lower bound for synthetic monthly revenue
    pub revenue_min: f64,
    /// Upper bound for synthetic monthly revenue
    pub revenue_max: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            target_year: DEFAULT_TARGET_YEAR,
            fallback_month: DEFAULT_FALLBACK_MONTH,
            revenue_min: DEFAULT_REVENUE_MIN,
            revenue_max: DEFAULT_REVENUE_MAX,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

impl ForecastConfig {
    /// Defaults overridden by `FORECAST_*` variables; unparsable values are ignored
    pub fn from_env() -> Self {
        Self {
            window: env_or("FORECAST_WINDOW", DEFAULT_WINDOW),
            target_year: env_or("FORECAST_TARGET_YEAR", DEFAULT_TARGET_YEAR),
            fallback_month: env_or("FORECAST_FALLBACK_MONTH", DEFAULT_FALLBACK_MONTH),
            revenue_min: env_or("FORECAST_REVENUE_MIN", DEFAULT_REVENUE_MIN),
            revenue_max: env_or("FORECAST_REVENUE_MAX", DEFAULT_REVENUE_MAX),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(ForecastError::ConfigError(
                "window must be at least 1".to_string(),
            ));
        }
        MonthIndex::new(self.fallback_month).map_err(|_| {
            ForecastError::ConfigError(format!(
                "fallback_month must be between 1 and 12, got {}",
                self.fallback_month
            ))
        })?;
        if !(self.revenue_min.is_finite() && self.revenue_max.is_finite())
            || self.revenue_min < 0.0
            || self.revenue_min > self.revenue_max
        {
            return Err(ForecastError::ConfigError(format!(
                "revenue range [{}, {}] must be non-negative and ordered",
                self.revenue_min, self.revenue_max
            )));
        }
        Ok(())
    }

    /// Current month for `today` under this config's target year and fallback
    pub fn current_month(&self, today: NaiveDate) -> Result<MonthIndex> {
        let fallback = MonthIndex::new(self.fallback_month)
            .map_err(|err| ForecastError::ConfigError(err.to_string()))?;
        Ok(resolve_current_month(today, self.target_year, fallback))
    }
}
