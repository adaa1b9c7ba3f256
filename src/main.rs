use btc_checkout::application::stages::standard_pipeline;
use btc_checkout::domain::currency::Currency;
use btc_checkout::domain::ports::{RateProviderRef, TransactionSinkRef, UserDirectoryRef};
use btc_checkout::domain::transaction::Transaction;
use btc_checkout::infrastructure::csv_file::CsvFileSink;
use btc_checkout::infrastructure::in_memory::InMemorySink;
use btc_checkout::infrastructure::rates::FixedRateProvider;
use btc_checkout::infrastructure::users::InMemoryUserDirectory;
use btc_checkout::interfaces::report::ReportEntry;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the durable CSV transaction log (optional). If omitted,
    /// records are kept in memory for the duration of the run.
    #[arg(long)]
    db_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let rates: RateProviderRef = Arc::new(FixedRateProvider::new());
    let directory: UserDirectoryRef = Arc::new(InMemoryUserDirectory::seeded());
    let sink: TransactionSinkRef = match cli.db_path {
        Some(path) => Arc::new(CsvFileSink::open(path).into_diagnostic()?),
        None => Arc::new(InMemorySink::new()),
    };

    let pipeline = standard_pipeline(rates, directory, sink);

    let batch = example_batch();
    let report: Vec<ReportEntry> = batch
        .into_iter()
        .map(|tx| ReportEntry::from(pipeline.run(tx)))
        .collect();

    let json = serde_json::to_string_pretty(&report).into_diagnostic()?;
    println!("{json}");

    Ok(())
}

/// The demonstration batch: three purchases that complete, one from an
/// inactive user and one from an unknown user.
fn example_batch() -> Vec<Transaction> {
    use rust_decimal_macros::dec;

    vec![
        Transaction::new("u001", dec!(0.01), Currency::Usd),
        Transaction::new("u002", dec!(0.05), Currency::Eur),
        Transaction::new("u001", dec!(0.003), Currency::Gbp),
        Transaction::new("u003", dec!(0.02), Currency::Usd),
        Transaction::new("u999", dec!(0.02), Currency::Usd),
    ]
}
