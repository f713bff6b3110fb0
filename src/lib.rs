//! # Autosalon Forecast
//!
//! Workspace facade for the dealership's revenue forecasting crates.
//!
//! ## Example
//!
//! ```
//! use autosalon_forecast_workspace::forecast::{ForecastReport, MonthIndex};
//! use autosalon_forecast_workspace::forecast::FixedRevenueSource;
//!
//! let mut source = FixedRevenueSource::new(vec![10.0, 20.0, 30.0, 40.0]);
//! let report = ForecastReport::from_source(&mut source, MonthIndex::new(5)?, 2)?;
//! assert_eq!(report.series().len(), 12);
//! # Ok::<(), autosalon_forecast_workspace::forecast::ForecastError>(())
//! ```

/// Forecast engine, revenue sources and reporting
pub use revenue_forecast as forecast;

/// Trailing means and accuracy metrics
pub use revenue_math as math;
