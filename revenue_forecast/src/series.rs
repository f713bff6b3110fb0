//! A year of revenue, each month tagged as actual or forecast

use crate::calendar::MonthIndex;
use crate::error::Result;
use crate::models::Projection;
use serde::{Deserialize, Serialize};

/// Whether a month's revenue was observed or computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Actual,
    Forecast,
}

impl EntryKind {
    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Actual => "Факт",
            EntryKind::Forecast => "Прогноз",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueEntry {
    pub month: MonthIndex,
    pub value: f64,
    pub kind: EntryKind,
}

/// Contiguous monthly revenue starting at January: actual prefix, forecast suffix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSeries {
    entries: Vec<RevenueEntry>,
}

impl RevenueSeries {
    pub fn from_projection(projection: &Projection) -> Result<Self> {
        let actual_len = projection.actual().len();
        let entries = projection
            .values()
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                Ok(RevenueEntry {
                    month: MonthIndex::from_index(index)?,
                    value,
                    kind: if index < actual_len {
                        EntryKind::Actual
                    } else {
                        EntryKind::Forecast
                    },
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RevenueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.value).collect()
    }

    pub fn actual(&self) -> impl Iterator<Item = &RevenueEntry> {
        self.entries.iter().filter(|e| e.kind == EntryKind::Actual)
    }

    pub fn forecast(&self) -> impl Iterator<Item = &RevenueEntry> {
        self.entries.iter().filter(|e| e.kind == EntryKind::Forecast)
    }

    /// Sum of every month, actual and forecast
    pub fn annual_total(&self) -> f64 {
        self.entries.iter().map(|e| e.value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project;

    #[test]
    fn test_kinds_follow_current_month() {
        let projection = project(&[1.0, 2.0, 3.0, 4.0, 5.0], 2).unwrap();
        let series = RevenueSeries::from_projection(&projection).unwrap();

        assert_eq!(series.len(), 12);
        assert_eq!(series.actual().count(), 5);
        assert_eq!(series.forecast().count(), 7);
        assert_eq!(series.entries()[4].kind, EntryKind::Actual);
        assert_eq!(series.entries()[5].kind, EntryKind::Forecast);
        assert_eq!(series.entries()[5].month.number(), 6);
    }

    #[test]
    fn test_values_and_annual_total() {
        let projection = project(&[10.0, 20.0, 30.0], 3).unwrap();
        let series = RevenueSeries::from_projection(&projection).unwrap();

        assert_eq!(series.values(), projection.values());
        assert!(!series.is_empty());
        // April averages January through March
        assert_eq!(series.values()[3], 20.0);
        let expected: f64 = projection.values().iter().sum();
        assert_eq!(series.annual_total(), expected);
        assert!(series.annual_total() > 60.0);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EntryKind::Forecast).unwrap(),
            "\"forecast\""
        );
    }
}
