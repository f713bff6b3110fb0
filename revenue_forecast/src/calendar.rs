//! Months of the forecast year

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of months in the forecast horizon
pub const MONTHS_IN_YEAR: usize = 12;

const SHORT_NAMES: [&str; MONTHS_IN_YEAR] = [
    "Янв", "Фев", "Мар", "Апр", "Май", "Июн", "Июл", "Авг", "Сен", "Окт", "Ноя", "Дек",
];

const FULL_NAMES: [&str; MONTHS_IN_YEAR] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

/// A calendar month within a single year, 1 through 12
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MonthIndex(u32);

impl MonthIndex {
    pub const JANUARY: MonthIndex = MonthIndex(1);
    pub const DECEMBER: MonthIndex = MonthIndex(12);

    /// Create a month, rejecting anything outside 1..=12
    pub fn new(month: u32) -> Result<Self> {
        if !(1..=MONTHS_IN_YEAR as u32).contains(&month) {
            return Err(ForecastError::InvalidInput(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        Ok(Self(month))
    }

    /// Month from a 0-based position in a yearly series
    pub fn from_index(index: usize) -> Result<Self> {
        let month = u32::try_from(index + 1).map_err(|_| {
            ForecastError::InvalidInput(format!("Month index {} is out of range", index))
        })?;
        Self::new(month)
    }

    /// 1-based month number
    pub fn number(self) -> u32 {
        self.0
    }

    /// 0-based position in a yearly series
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    pub fn short_name(self) -> &'static str {
        SHORT_NAMES[self.index()]
    }

    pub fn full_name(self) -> &'static str {
        FULL_NAMES[self.index()]
    }

    /// Every month of the year in order
    pub fn iter_all() -> impl Iterator<Item = MonthIndex> {
        (1..=MONTHS_IN_YEAR as u32).map(MonthIndex)
    }
}

impl TryFrom<u32> for MonthIndex {
    type Error = ForecastError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MonthIndex> for u32 {
    fn from(month: MonthIndex) -> u32 {
        month.0
    }
}

impl fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

/// First month without actual revenue, by calendar date.
///
/// Inside `target_year` this is the month of `today`; in any other year
/// `fallback` is used. Callers that know the current month should pass it
/// explicitly instead.
pub fn resolve_current_month(today: NaiveDate, target_year: i32, fallback: MonthIndex) -> MonthIndex {
    if today.year() == target_year {
        MonthIndex(today.month())
    } else {
        fallback
    }
}
