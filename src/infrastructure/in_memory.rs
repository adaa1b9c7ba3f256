use super::record::StoredRecord;
use crate::domain::ports::TransactionSink;
use crate::domain::transaction::Transaction;
use crate::error::{PipelineError, Result};
use std::sync::Mutex;

/// A sink that keeps its records in memory.
///
/// Interior locking keeps `append` safe under concurrent invocation. Suited
/// to tests and batch runs that do not need durability.
#[derive(Default)]
pub struct InMemorySink {
    records: Mutex<Vec<StoredRecord>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far.
    pub fn records(&self) -> Vec<StoredRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl TransactionSink for InMemorySink {
    fn append(&self, tx: &Transaction) -> Result<u64> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| PipelineError::Storage(format!("sink lock poisoned: {e}")))?;
        let id = records.len() as u64 + 1;
        records.push(StoredRecord::from_transaction(id, tx));
        Ok(id)
    }
}
