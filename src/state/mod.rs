// State module - run state collected from test completion events

pub mod report;
pub mod result;

pub use report::{Report, RunSummary};
pub use result::TestOutcome;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Accumulates test outcomes for a single run.
///
/// One collector is created per run. The host feeds it one event per
/// completed test and calls [`ResultCollector::finalize`] once at the end of
/// the run; since `finalize` consumes the collector, a run can only ever be
/// finalized once.
#[derive(Debug, Default)]
pub struct ResultCollector {
    tests: Vec<TestOutcome>,
    summary: RunSummary,
}

impl ResultCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a completed test
    ///
    /// The name is stored as given. `total` always grows by one; a bucket
    /// only grows for `passed`, `failed` and `skipped`.
    pub fn record_test_end(&mut self, name: impl Into<String>, status: impl Into<TestStatus>) {
        let outcome = TestOutcome::new(name, status);

        self.summary.total += 1;
        match outcome.status {
            TestStatus::Passed => self.summary.passed += 1,
            TestStatus::Failed => self.summary.failed += 1,
            TestStatus::Skipped => self.summary.skipped += 1,
            // Counted in total only
            TestStatus::TimedOut | TestStatus::Interrupted | TestStatus::Unknown(_) => {}
        }

        debug!("Recorded {:?} as {}", outcome.test_name, outcome.status);
        self.tests.push(outcome);
    }

    /// Number of outcomes recorded so far
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Running counters
    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// End the run and hand the collected state over to a [`Report`]
    pub fn finalize(self) -> Report {
        Report::new(self.tests, self.summary)
    }
}

/// Test status as reported by the host
///
/// Labels outside the known vocabulary are kept verbatim in
/// [`TestStatus::Unknown`] so they survive serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
    TimedOut,
    Interrupted,
    Unknown(String),
}

impl TestStatus {
    /// Host label for this status
    pub fn as_str(&self) -> &str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
            Self::TimedOut => "timedOut",
            Self::Interrupted => "interrupted",
            Self::Unknown(label) => label,
        }
    }
}

impl From<&str> for TestStatus {
    fn from(s: &str) -> Self {
        match s {
            "passed" => Self::Passed,
            "failed" => Self::Failed,
            "skipped" => Self::Skipped,
            "timedOut" => Self::TimedOut,
            "interrupted" => Self::Interrupted,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for TestStatus {
    fn from(s: String) -> Self {
        match Self::from(s.as_str()) {
            Self::Unknown(_) => Self::Unknown(s),
            known => known,
        }
    }
}

impl From<TestStatus> for String {
    fn from(status: TestStatus) -> Self {
        match status {
            TestStatus::Unknown(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
