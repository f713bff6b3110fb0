//! Suppliers of actual monthly revenue

use crate::calendar::MonthIndex;
use crate::error::{ForecastError, Result};
use crate::logging::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Something that can report actual revenue for the months before `current`
pub trait RevenueSource {
    /// Revenue for months `1..current`, exactly `current - 1` values
    fn monthly_revenue(&mut self, current: MonthIndex) -> Result<Vec<f64>>;
}

/// Revenue already known to the caller
#[derive(Debug, Clone)]
pub struct FixedRevenueSource {
    values: Vec<f64>,
}

impl FixedRevenueSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl RevenueSource for FixedRevenueSource {
    fn monthly_revenue(&mut self, current: MonthIndex) -> Result<Vec<f64>> {
        let needed = current.index();
        if self.values.len() < needed {
            return Err(ForecastError::DataError(format!(
                "Need revenue for {} months before {}, have {}",
                needed,
                current,
                self.values.len()
            )));
        }
        Ok(self.values[..needed].to_vec())
    }
}

/// Synthetic revenue drawn uniformly from `[min, max]`.
///
/// Stands in for real sales data in demos.
#[derive(Debug, Clone)]
pub struct RandomRevenueSource {
    min: f64,
    max: f64,
    rng: StdRng,
}

impl RandomRevenueSource {
    /// Create a source seeded from the operating system
    pub fn new(min: f64, max: f64) -> Result<Self> {
        Self::with_rng(min, max, StdRng::from_entropy())
    }

    /// Create a reproducible source
    pub fn with_seed(min: f64, max: f64, seed: u64) -> Result<Self> {
        Self::with_rng(min, max, StdRng::seed_from_u64(seed))
    }

    fn with_rng(min: f64, max: f64, rng: StdRng) -> Result<Self> {
        if !(min.is_finite() && max.is_finite()) || min < 0.0 || min > max {
            return Err(ForecastError::InvalidInput(format!(
                "Revenue range [{}, {}] must be finite, non-negative and ordered",
                min, max
            )));
        }
        Ok(Self { min, max, rng })
    }
}

impl RevenueSource for RandomRevenueSource {
    fn monthly_revenue(&mut self, current: MonthIndex) -> Result<Vec<f64>> {
        let log = DEFAULT.new(o!(
            "function" => "RandomRevenueSource::monthly_revenue",
            "current_month" => current.number(),
        ));
        debug!(log, "generating synthetic revenue"; "min" => self.min, "max" => self.max);

        Ok((0..current.index())
            .map(|_| self.rng.gen_range(self.min..=self.max))
            .collect())
    }
}
