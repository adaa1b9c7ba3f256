use super::record::StoredRecord;
use crate::domain::ports::TransactionSink;
use crate::domain::transaction::Transaction;
use crate::error::{PipelineError, Result};
use csv::{ReaderBuilder, Writer, WriterBuilder};
use log::debug;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const HEADER: [&str; 10] = [
    "id",
    "user_id",
    "btc_amount",
    "base_currency",
    "btc_price_in_base",
    "subtotal_base",
    "commission_usd",
    "commission_base",
    "total_base",
    "ts_epoch",
];

/// A durable append-only sink backed by a CSV log file.
///
/// Opening creates the file and writes the header row if the file is absent
/// or empty; re-opening an existing log scans it to resume the
/// auto-increment id. Each `append` writes one row and flushes before
/// returning. An interior `Mutex` serializes concurrent appends.
#[derive(Debug)]
pub struct CsvFileSink {
    path: PathBuf,
    state: Mutex<SinkState>,
}

#[derive(Debug)]
struct SinkState {
    writer: Writer<File>,
    next_id: u64,
}

impl CsvFileSink {
    /// Opens the log at `path`, initializing it if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let existing_len = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        let next_id = if existing_len > 0 {
            Self::max_id(&path)? + 1
        } else {
            1
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| storage_err(&path, "open", e))?;

        // Values are written without serde-driven headers so appends to an
        // existing log never repeat the header row.
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if existing_len == 0 {
            writer
                .write_record(HEADER)
                .and_then(|()| writer.flush().map_err(Into::into))
                .map_err(|e| storage_err(&path, "write header to", e))?;
        }

        debug!("opened transaction log {} (next id {next_id})", path.display());

        Ok(Self {
            path,
            state: Mutex::new(SinkState { writer, next_id }),
        })
    }

    /// Reads every record currently in the log at `path`.
    pub fn read_all<P: AsRef<Path>>(path: P) -> Result<Vec<StoredRecord>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| storage_err(path, "read", e))?;
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

        let mut records = Vec::new();
        for row in reader.deserialize::<StoredRecord>() {
            records.push(row.map_err(|e| storage_err(path, "parse", e))?);
        }
        Ok(records)
    }

    fn max_id(path: &Path) -> Result<u64> {
        let records = Self::read_all(path)?;
        Ok(records.iter().map(|r| r.id).max().unwrap_or(0))
    }
}

impl TransactionSink for CsvFileSink {
    fn append(&self, tx: &Transaction) -> Result<u64> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| PipelineError::Storage(format!("sink lock poisoned: {e}")))?;

        let id = state.next_id;
        let record = StoredRecord::from_transaction(id, tx);

        state
            .writer
            .serialize(&record)
            .and_then(|()| state.writer.flush().map_err(Into::into))
            .map_err(|e| storage_err(&self.path, "append to", e))?;

        state.next_id += 1;
        Ok(id)
    }
}

fn storage_err(path: &Path, action: &str, cause: impl std::fmt::Display) -> PipelineError {
    PipelineError::Storage(format!(
        "failed to {action} transaction log {}: {cause}",
        path.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::currency::Currency;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    fn complete_tx(user_id: &str) -> Transaction {
        let mut tx = Transaction::new(user_id, dec!(0.01), Currency::Usd);
        tx.btc_price_in_base = Some(dec!(65000.0));
        tx.subtotal_base = Some(dec!(650.00));
        tx.commission_base = Some(dec!(5.00));
        tx.total_base = Some(dec!(655.00));
        tx
    }

    #[test]
    fn test_creates_log_with_header_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.csv");

        let sink = CsvFileSink::open(&path).unwrap();
        sink.append(&complete_tx("u001")).unwrap();
        drop(sink);

        // Re-open and append again; the header must not repeat.
        let sink = CsvFileSink::open(&path).unwrap();
        sink.append(&complete_tx("u002")).unwrap();
        drop(sink);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("id,user_id,btc_amount").count(), 1);
    }

    #[test]
    fn test_round_trip_and_id_resume() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.csv");

        let sink = CsvFileSink::open(&path).unwrap();
        assert_eq!(sink.append(&complete_tx("u001")).unwrap(), 1);
        assert_eq!(sink.append(&complete_tx("u001")).unwrap(), 2);
        drop(sink);

        let sink = CsvFileSink::open(&path).unwrap();
        assert_eq!(sink.append(&complete_tx("u002")).unwrap(), 3);

        let records = CsvFileSink::read_all(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].id, 3);
        assert_eq!(records[2].user_id, "u002");
        assert_eq!(records[2].total_base, Some(dec!(655.00)));
    }

    #[test]
    fn test_open_missing_parent_dir_is_storage_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("log.csv");

        let err = CsvFileSink::open(&path).unwrap_err();
        assert!(matches!(err, PipelineError::Storage(_)));
        assert!(err.to_string().contains("log.csv"));
    }
}
