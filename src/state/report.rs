// Finalized run report

use crate::state::TestOutcome;
use serde::{Deserialize, Serialize};

/// Four-counter tally over a run
///
/// `total` counts every recorded test. Statuses other than passed, failed
/// and skipped are not assigned to a bucket, so `total` may exceed the sum
/// of the buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunSummary {
    /// Tests that landed in no bucket (timed out, interrupted, unknown)
    pub fn unbucketed(&self) -> usize {
        self.total.saturating_sub(self.passed + self.failed + self.skipped)
    }
}

/// Immutable end-of-run snapshot
///
/// Both output documents are rendered from this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    tests: Vec<TestOutcome>,
    summary: RunSummary,
}

impl Report {
    pub(crate) fn new(tests: Vec<TestOutcome>, summary: RunSummary) -> Self {
        Self { tests, summary }
    }

    /// Recorded outcomes in completion order
    pub fn tests(&self) -> &[TestOutcome] {
        &self.tests
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }
}
