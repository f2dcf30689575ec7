//! Completed sales records and the sink they are appended to.
//!
//! A record commits only after every field passed its step validation. The
//! sink contract is a single synchronous append — no retry or batching.


use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// One completed wizard traversal: all four fields validated.
/// Values stay as the strings the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: String,
    pub company: String,
    pub checks: String,
    pub total: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("record sink I/O: {0}")]
    Io(#[from] io::Error),
    #[error("record serialization: {0}")]
    Serialize(String),
}

/// Persistent destination for completed records.
pub trait RecordSink: Send + Sync {
    fn append(&self, record: &SalesRecord) -> Result<(), SinkError>;
}

/// Appends one CSV row per record to a file, creating it if missing.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

/// Quote a CSV field when it contains a separator, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

impl RecordSink for CsvSink {
    fn append(&self, record: &SalesRecord) -> Result<(), SinkError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(
            file,
            "{},{},{},{}",
            csv_field(&record.date),
            csv_field(&record.company),
            csv_field(&record.checks),
            csv_field(&record.total),
        )?;
        Ok(())
    }
}

/// In-memory sink for tests and dry runs.
#[derive(Default)]
pub struct MemorySink {
    records: Mutex<Vec<SalesRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<SalesRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl RecordSink for MemorySink {
    fn append(&self, record: &SalesRecord) -> Result<(), SinkError> {
        // lock().ok() degrade: a poisoned sink drops the record rather than
        // cascading the panic into the session.
        if let Ok(mut records) = self.records.lock() {
            records.push(record.clone());
        }
        Ok(())
    }
}
