use revenue_forecast::{ForecastError, ForecastReport, MonthIndex, RevenueSource, SalesLedger};
use std::io::Write;
use tempfile::NamedTempFile;

// Sales export shaped like the dealership's sales table
fn create_sales_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();

    writeln!(file, "id,product_id,client_id,employee_id,date,price,contract").unwrap();
    writeln!(file, "1,10,1,1,2025-01-15T10:00:00.000000,1200000,новый").unwrap();
    writeln!(file, "2,11,2,1,2025-01-20T12:30:00.000000,800000,подержанный").unwrap();
    writeln!(file, "3,12,3,2,2025-02-03T09:15:00.000000,2500000,новый").unwrap();
    writeln!(file, "4,13,1,2,2025-03-11T17:45:00.000000,1500000,новый").unwrap();
    writeln!(file, "5,14,4,1,2025-03-28T11:05:00.000000,1000000,подержанный").unwrap();
    writeln!(file, "6,15,2,2,2024-12-30T11:05:00.000000,7000000,новый").unwrap();
    writeln!(file, "7,16,5,1,2025-07-01T08:00:00.000000,3000000,новый").unwrap();

    file
}

#[test]
fn test_load_sales_csv() {
    let file = create_sales_file();
    let ledger = SalesLedger::from_csv(file.path(), 2025).unwrap();

    assert_eq!(ledger.year(), 2025);
    assert_eq!(ledger.sales().len(), 7);

    let totals = ledger.monthly_totals();
    assert_eq!(totals[0], 2_000_000.0);
    assert_eq!(totals[1], 2_500_000.0);
    assert_eq!(totals[2], 2_500_000.0);
    assert_eq!(totals[6], 3_000_000.0);
}

#[test]
fn test_ledger_feeds_report() {
    let file = create_sales_file();
    let mut ledger = SalesLedger::from_csv(file.path(), 2025).unwrap();

    let current = MonthIndex::new(4).unwrap();
    assert_eq!(
        ledger.monthly_revenue(current).unwrap(),
        vec![2_000_000.0, 2_500_000.0, 2_500_000.0]
    );

    let report = ForecastReport::from_source(&mut ledger, current, 3).unwrap();
    let april = report.series().entries()[3];
    assert_eq!(april.value, 7_000_000.0 / 3.0);
    assert!(report.accuracy().is_none());
}

#[test]
fn test_missing_file() {
    let result = SalesLedger::from_csv("/nonexistent/sales.csv", 2025);
    assert!(matches!(result, Err(ForecastError::IoError(_))));
}

#[test]
fn test_missing_price_column() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,amount").unwrap();
    writeln!(file, "2025-01-01,10").unwrap();

    let result = SalesLedger::from_csv(file.path(), 2025);
    assert!(matches!(result, Err(ForecastError::CsvError(_))));
}
