// JSON reporter - writes the structured run summary

use crate::state::Report;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// JSON summary reporter
pub struct JsonReporter {
    output_path: PathBuf,
}

impl JsonReporter {
    /// Create new JSON reporter
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Write `report` as indented JSON, replacing any existing file
    pub fn write(&self, report: &Report) -> Result<()> {
        write_structured_summary(report, &self.output_path)?;
        info!("Test summary written to {}", self.output_path.display());
        Ok(())
    }
}

/// Serialize `report` to `path` as pretty-printed JSON.
///
/// The parent directory must already exist.
pub fn write_structured_summary(report: &Report, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON summary file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, report)
        .context("Failed to serialize test summary to JSON")?;
    writer
        .flush()
        .with_context(|| format!("Failed to write JSON summary file: {}", path.display()))?;

    Ok(())
}

/// Read a summary previously written by [`write_structured_summary`]
pub fn read_structured_summary(path: &Path) -> Result<Report> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open JSON summary file: {}", path.display()))?;

    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse JSON summary file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ResultCollector;

    #[test]
    fn test_write_uses_two_space_indent() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("test-summary.json");

        let mut collector = ResultCollector::new();
        collector.record_test_end("login test", "passed");
        write_structured_summary(&collector.finalize(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let expected = r#"{
  "tests": [
    {
      "testName": "login test",
      "status": "passed"
    }
  ],
  "summary": {
    "total": 1,
    "passed": 1,
    "failed": 0,
    "skipped": 0
  }
}"#;
        assert_eq!(content, expected);
    }

    #[test]
    fn test_write_missing_parent_fails() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("test-summary.json");

        let result = write_structured_summary(&ResultCollector::new().finalize(), &path);

        assert!(result.is_err());
        assert!(!path.exists());
    }
}
