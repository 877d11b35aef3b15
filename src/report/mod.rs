// Report module - run summary artifacts

pub mod html;
pub mod json;

use crate::config::OutputConfig;
use crate::state::{ResultCollector, TestStatus};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub use html::{HtmlReporter, StatusTone, render_html, render_html_report};
pub use json::{JsonReporter, read_structured_summary, write_structured_summary};

/// Reporter trait
///
/// Driven by the host engine: one `on_test_end` per completed test, then a
/// single `on_run_end`.
pub trait Reporter {
    /// Called when a test finishes
    fn on_test_end(&mut self, test_name: &str, status: TestStatus);

    /// Called when the entire run finishes
    fn on_run_end(&mut self, result: &RunResult) -> Result<()>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReporterError {
    #[error("run has already been finalized")]
    AlreadyFinalized,
}

/// Overall run outcome as signalled by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Passed,
    Failed,
    TimedOut,
    Interrupted,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::TimedOut => "timedout",
            Self::Interrupted => "interrupted",
        };
        f.write_str(s)
    }
}

/// End-of-run payload. Only logged; it does not affect the artifacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    #[serde(default)]
    pub status: Option<RunStatus>,
}

impl RunResult {
    pub fn new(status: RunStatus) -> Self {
        Self {
            status: Some(status),
        }
    }
}

/// Locations of the written artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub json: PathBuf,
    pub html: PathBuf,
}

/// Collects test outcomes and writes the JSON summary and HTML report at
/// the end of the run.
pub struct SummaryReporter {
    collector: Option<ResultCollector>,
    json: JsonReporter,
    html: HtmlReporter,
}

impl SummaryReporter {
    /// Create a reporter writing to the locations named by `output`
    pub fn new(output: &OutputConfig) -> Self {
        Self::with_paths(output.json_path(), output.html_path())
    }

    /// Create a reporter with explicit artifact paths
    pub fn with_paths(json_path: impl Into<PathBuf>, html_path: impl Into<PathBuf>) -> Self {
        Self {
            collector: Some(ResultCollector::new()),
            json: JsonReporter::new(json_path.into()),
            html: HtmlReporter::new(html_path.into()),
        }
    }

    /// Whether end-of-run has already been handled
    pub fn is_finalized(&self) -> bool {
        self.collector.is_none()
    }

    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            json: self.json.output_path().to_path_buf(),
            html: self.html.output_path().to_path_buf(),
        }
    }

    pub fn json_path(&self) -> &Path {
        self.json.output_path()
    }

    pub fn html_path(&self) -> &Path {
        self.html.output_path()
    }
}

impl Reporter for SummaryReporter {
    fn on_test_end(&mut self, test_name: &str, status: TestStatus) {
        match self.collector.as_mut() {
            Some(collector) => collector.record_test_end(test_name, status),
            None => warn!(
                "Ignoring result for {:?} ({}): run already finalized",
                test_name, status
            ),
        }
    }

    fn on_run_end(&mut self, result: &RunResult) -> Result<()> {
        let collector = self
            .collector
            .take()
            .ok_or(ReporterError::AlreadyFinalized)?;

        match result.status {
            Some(status) => info!("Run finished: {}", status),
            None => info!("Run finished"),
        }

        let report = collector.finalize();
        let summary = report.summary();
        info!(
            "{} test(s): {} passed, {} failed, {} skipped",
            summary.total, summary.passed, summary.failed, summary.skipped
        );
        if summary.unbucketed() > 0 {
            warn!(
                "{} test(s) finished with a status outside passed/failed/skipped",
                summary.unbucketed()
            );
        }

        self.json.write(&report)?;
        self.html.write(&report)?;

        Ok(())
    }
}
