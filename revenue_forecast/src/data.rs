//! Sales records as a source of actual monthly revenue

use crate::calendar::{MonthIndex, MONTHS_IN_YEAR};
use crate::error::{ForecastError, Result};
use crate::logging::*;
use crate::source::RevenueSource;
use crate::utils::parse_sale_date;
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A single sale
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    pub date: NaiveDate,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
struct RawSale {
    date: String,
    price: f64,
}

/// Sales ledger aggregated into monthly revenue for one year
#[derive(Debug, Clone)]
pub struct SalesLedger {
    year: i32,
    sales: Vec<SaleRecord>,
}

impl SalesLedger {
    /// Create a ledger from already-loaded records
    pub fn new(year: i32, sales: Vec<SaleRecord>) -> Self {
        Self { year, sales }
    }

    /// Load sales from a CSV file with `date` and `price` columns.
    ///
    /// Other columns are ignored.
    pub fn from_csv<P: AsRef<Path>>(path: P, year: i32) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let log = DEFAULT.new(o!(
            "function" => "SalesLedger::from_csv",
            "path" => path.as_ref().display().to_string(),
        ));
        let ledger = Self::from_reader(file, year)?;
        info!(log, "loaded sales"; "records" => ledger.sales.len(), "year" => year);
        Ok(ledger)
    }

    /// Load sales from any CSV reader
    pub fn from_reader<R: Read>(reader: R, year: i32) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut sales = Vec::new();
        for (row, record) in csv_reader.deserialize::<RawSale>().enumerate() {
            let raw = record?;
            let date = parse_sale_date(&raw.date).map_err(|err| {
                ForecastError::DataError(format!("Row {}: {}", row + 1, err))
            })?;
            if !raw.price.is_finite() {
                return Err(ForecastError::DataError(format!(
                    "Row {}: price is not a finite number",
                    row + 1
                )));
            }
            sales.push(SaleRecord {
                date,
                price: raw.price,
            });
        }

        Ok(Self { year, sales })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn sales(&self) -> &[SaleRecord] {
        &self.sales
    }

    /// Revenue per month of the ledger's year; months without sales are zero
    pub fn monthly_totals(&self) -> [f64; MONTHS_IN_YEAR] {
        let mut totals = [0.0; MONTHS_IN_YEAR];
        for sale in self.sales.iter().filter(|s| s.date.year() == self.year) {
            totals[sale.date.month0() as usize] += sale.price;
        }
        totals
    }
}

impl RevenueSource for SalesLedger {
    fn monthly_revenue(&mut self, current: MonthIndex) -> Result<Vec<f64>> {
        let totals = self.monthly_totals();
        Ok(totals[..current.index()].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEDGER: &str = "\
id,product_id,client_id,employee_id,date,price,contract
1,3,1,2,2025-01-10T11:00:00.000000,1500000,новый
2,4,2,2,2025-01-28T16:30:00.000000,500000,подержанный
3,5,1,1,2025-03-02,2000000,новый
4,6,3,1,2024-03-02,9999999,новый
";

    #[test]
    fn test_monthly_totals() {
        let ledger = SalesLedger::from_reader(LEDGER.as_bytes(), 2025).unwrap();
        assert_eq!(ledger.sales().len(), 4);

        let totals = ledger.monthly_totals();
        assert_eq!(totals[0], 2_000_000.0);
        assert_eq!(totals[1], 0.0);
        assert_eq!(totals[2], 2_000_000.0);
        assert_eq!(totals[11], 0.0);
    }

    #[test]
    fn test_revenue_source_prefix() {
        let mut ledger = SalesLedger::from_reader(LEDGER.as_bytes(), 2025).unwrap();
        let revenue = ledger
            .monthly_revenue(MonthIndex::new(4).unwrap())
            .unwrap();
        assert_eq!(revenue, vec![2_000_000.0, 0.0, 2_000_000.0]);
    }

    #[test]
    fn test_ledger_from_records() {
        let date = |m: u32, d: u32| NaiveDate::from_ymd_opt(2025, m, d).unwrap();
        let mut ledger = SalesLedger::new(
            2025,
            vec![
                SaleRecord { date: date(1, 5), price: 100.0 },
                SaleRecord { date: date(2, 9), price: 250.0 },
                SaleRecord { date: date(2, 20), price: 50.0 },
            ],
        );

        assert_eq!(ledger.year(), 2025);
        assert_eq!(ledger.sales().len(), 3);
        assert_eq!(
            ledger.monthly_revenue(MonthIndex::new(3).unwrap()).unwrap(),
            vec![100.0, 300.0]
        );
    }

    #[test]
    fn test_bad_date_names_row() {
        let csv = "date,price\n2025-01-01,10\nyesterday,20\n";
        let err = SalesLedger::from_reader(csv.as_bytes(), 2025).unwrap_err();
        assert!(matches!(err, ForecastError::DataError(ref msg) if msg.starts_with("Row 2")));
    }

    #[test]
    fn test_bad_price_is_csv_error() {
        let csv = "date,price\n2025-01-01,lots\n";
        let err = SalesLedger::from_reader(csv.as_bytes(), 2025).unwrap_err();
        assert!(matches!(err, ForecastError::CsvError(_)));
    }
}
