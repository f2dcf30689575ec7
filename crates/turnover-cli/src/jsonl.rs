//! JSON-lines record sink: one JSON object per appended record.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use turnover_core::record::{RecordSink, SalesRecord, SinkError};

pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl RecordSink for JsonlSink {
    fn append(&self, record: &SalesRecord) -> Result<(), SinkError> {
        let line =
            serde_json::to_string(record).map_err(|e| SinkError::Serialize(e.to_string()))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_appends_parseable_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.jsonl");
        let sink = JsonlSink::new(&path);

        let record = SalesRecord {
            date: "2025/03/14".into(),
            company: "Acme Co".into(),
            checks: "12".into(),
            total: "34800".into(),
        };
        sink.append(&record).unwrap();
        sink.append(&record).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: SalesRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed, record);
    }
}
