use assert_approx_eq::assert_approx_eq;
use revenue_forecast::backtest;

#[test]
fn test_zero_actual_is_skipped_from_mape() {
    // index 2 has actual 0: its error counts for MAE/RMSE but not MAPE
    let report = backtest(&[10.0, 30.0, 0.0, 40.0], 1).unwrap().unwrap();

    assert_eq!(report.points().len(), 3);
    assert_eq!(report.mape_skipped(), 1);

    // |30-10|/30 and |40-0|/40
    let expected = (20.0 / 30.0 + 1.0) / 2.0 * 100.0;
    assert_approx_eq!(report.mape().unwrap(), expected, 1e-9);
    assert_approx_eq!(report.mae(), (20.0 + 30.0 + 40.0) / 3.0, 1e-9);
}

#[test]
fn test_all_zero_actuals_leave_mape_undefined() {
    let report = backtest(&[3.0, 0.0, 0.0, 0.0], 1).unwrap().unwrap();
    assert_eq!(report.mape(), None);
    assert_eq!(report.mape_skipped(), 3);
    assert!(report.rmse() >= report.mae());
}

#[test]
fn test_metrics_display() {
    let report = backtest(&[10.0, 20.0, 30.0, 40.0], 2).unwrap().unwrap();
    let text = report.metrics().to_string();
    assert!(text.contains("2 points"));
    assert!(text.contains("RMSE:  15.0000"));
    assert_eq!(
        report.to_string(),
        "Точность (бэктест, точек: 2): MAE = 15 руб., RMSE = 15 руб., MAPE = 43.75%"
    );
}
