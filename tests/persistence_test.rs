//! Durability of the CSV transaction log across sink instances.

use btc_checkout::application::stages::standard_pipeline;
use btc_checkout::domain::currency::Currency;
use btc_checkout::domain::transaction::Transaction;
use btc_checkout::infrastructure::csv_file::CsvFileSink;
use btc_checkout::infrastructure::rates::FixedRateProvider;
use btc_checkout::infrastructure::users::InMemoryUserDirectory;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tempfile::tempdir;

fn run_one(path: &std::path::Path, user: &str, amount: rust_decimal::Decimal, currency: Currency) {
    let pipeline = standard_pipeline(
        Arc::new(FixedRateProvider::new()),
        Arc::new(InMemoryUserDirectory::seeded()),
        Arc::new(CsvFileSink::open(path).unwrap()),
    );
    pipeline
        .run(Transaction::new(user, amount, currency))
        .unwrap();
}

#[test]
fn test_log_survives_reopen_and_resumes_ids() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("transactions.csv");

    // Two separate sink instances on the same path, as two process runs
    // would create.
    run_one(&path, "u001", dec!(0.01), Currency::Usd);
    run_one(&path, "u002", dec!(0.05), Currency::Eur);

    let records = CsvFileSink::read_all(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].user_id, "u001");
    assert_eq!(records[0].total_base, Some(dec!(655.00)));
    assert_eq!(records[1].id, 2);
    assert_eq!(records[1].user_id, "u002");
    assert_eq!(records[1].total_base, Some(dec!(3054.65)));
}

#[test]
fn test_failed_runs_write_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("transactions.csv");

    let pipeline = standard_pipeline(
        Arc::new(FixedRateProvider::new()),
        Arc::new(InMemoryUserDirectory::seeded()),
        Arc::new(CsvFileSink::open(&path).unwrap()),
    );

    pipeline
        .run(Transaction::new("u003", dec!(0.02), Currency::Usd))
        .unwrap_err();
    pipeline
        .run(Transaction::new("u999", dec!(0.02), Currency::Usd))
        .unwrap_err();

    assert!(CsvFileSink::read_all(&path).unwrap().is_empty());
}
