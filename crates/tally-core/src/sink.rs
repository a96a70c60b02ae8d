//! # Receipt Sinks
//!
//! Destinations for rendered receipt text.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{CoreError, CoreResult};

/// Accepts the full rendered receipt.
pub trait ReceiptSink {
    fn write_receipt(&mut self, text: &str) -> CoreResult<()>;
}

/// In-memory sink. Replaces any previous contents.
impl ReceiptSink for String {
    fn write_receipt(&mut self, text: &str) -> CoreResult<()> {
        self.clear();
        self.push_str(text);
        Ok(())
    }
}

/// Writes the receipt as the entire contents of a file, overwriting it.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSink { path: path.into() }
    }
}

impl ReceiptSink for FileSink {
    fn write_receipt(&mut self, text: &str) -> CoreResult<()> {
        fs::write(&self.path, text).map_err(|source| CoreError::Sink {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), bytes = text.len(), "Wrote receipt");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_sink_replaces_contents() {
        let mut sink = String::from("stale");
        sink.write_receipt("Total: 1.00").unwrap();
        assert_eq!(sink, "Total: 1.00");
    }

    #[test]
    fn test_file_sink_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipt.txt");
        fs::write(&path, "a much longer previous receipt body").unwrap();

        let mut sink = FileSink::new(&path);
        sink.write_receipt("Total: 1.00").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Total: 1.00");
    }

    #[test]
    fn test_file_sink_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("receipt.txt");

        let err = FileSink::new(&path).write_receipt("Total: 1.00").unwrap_err();
        assert!(matches!(err, CoreError::Sink { path: ref p, .. } if p == &path));
    }
}
