//! # Revenue Forecast
//!
//! Monthly revenue forecasting for a vehicle dealership.
//!
//! ## Features
//!
//! - Trailing simple moving average projection up to December
//! - Backtest of the same method against actual months (MAE, RMSE, MAPE)
//! - A per-month calculation trace for auditing the forecast
//! - Revenue sources: fixed values, a sales ledger CSV, or synthetic data
//!
//! ## Quick Start
//!
//! ```rust
//! use revenue_forecast::{backtest, project};
//!
//! let projection = project(&[10.0, 20.0, 30.0], 3)?;
//! assert_eq!(projection.values().len(), 12);
//! assert_eq!(projection.forecast()[0], 20.0);
//!
//! let accuracy = backtest(&[10.0, 20.0, 30.0, 40.0], 2)?.expect("enough history");
//! assert_eq!(accuracy.mae(), 15.0);
//! # Ok::<(), revenue_forecast::ForecastError>(())
//! ```
//!
//! `project` and `backtest` are pure. The report, sources and CLI log
//! through [`logging::DEFAULT`].

pub mod calendar;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod report;
pub mod series;
pub mod source;
pub mod utils;

// Re-export commonly used types
pub use crate::calendar::MonthIndex;
pub use crate::config::ForecastConfig;
pub use crate::data::SalesLedger;
pub use crate::error::ForecastError;
pub use crate::metrics::AccuracyReport;
pub use crate::models::{backtest, project, ForecastDetail, Projection};
pub use crate::report::ForecastReport;
pub use crate::series::{EntryKind, RevenueEntry, RevenueSeries};
pub use crate::source::{FixedRevenueSource, RandomRevenueSource, RevenueSource};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
