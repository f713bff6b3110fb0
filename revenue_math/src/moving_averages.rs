//! Moving average calculations
//!
//! Contains the pieces of a simple moving average:
//! - `mean` over a slice, summed left to right
//! - `trailing` to take the last `n` values of a series
//! - `TrailingWindow`, a bounded buffer that averages whatever it holds

use crate::{MathError, Result};
use std::collections::VecDeque;

/// Arithmetic mean of `values`, summed in order.
///
/// Fails with `InsufficientData` when `values` is empty.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot average an empty window".to_string(),
        ));
    }

    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// The last `min(window, values.len())` elements of `values`.
pub fn trailing(values: &[f64], window: usize) -> &[f64] {
    let start = values.len().saturating_sub(window);
    &values[start..]
}

/// A trailing window of at most `period` values.
///
/// Unlike a classic SMA, a window that is not yet full still has a value:
/// the mean of everything pushed so far. The mean is recomputed from the
/// buffer on every call so that it matches `mean(trailing(..))` exactly.
#[derive(Debug, Clone)]
pub struct TrailingWindow {
    period: usize,
    values: VecDeque<f64>,
}

impl TrailingWindow {
    /// Create a new trailing window with the specified period
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(MathError::InvalidInput(
                "Window size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            period,
            // Grows on push; `period` may be far larger than any history.
            values: VecDeque::new(),
        })
    }

    /// Create a window and feed it `history`, keeping only the tail
    pub fn with_history(period: usize, history: &[f64]) -> Result<Self> {
        let mut window = Self::new(period)?;
        for &value in trailing(history, period) {
            window.push(value);
        }
        Ok(window)
    }

    /// Push a new value, evicting the oldest once the window is full
    pub fn push(&mut self, value: f64) {
        if self.values.len() == self.period {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    /// Mean of the values currently held
    pub fn value(&self) -> Result<f64> {
        if self.values.is_empty() {
            return Err(MathError::InsufficientData(format!(
                "No values in window of size {}",
                self.period
            )));
        }

        let sum = self.values.iter().sum::<f64>();
        Ok(sum / self.values.len() as f64)
    }

    /// Snapshot of the values currently held, oldest first
    pub fn values(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }

    /// Number of values currently held
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the configured period
    pub fn period(&self) -> usize {
        self.period
    }

    /// Reset the window, clearing all values
    pub fn reset(&mut self) {
        self.values.clear();
    }
}
