// Test outcome record

use crate::state::TestStatus;
use serde::{Deserialize, Serialize};

/// Outcome of one completed test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOutcome {
    pub test_name: String,
    pub status: TestStatus,
}

impl TestOutcome {
    pub fn new(test_name: impl Into<String>, status: impl Into<TestStatus>) -> Self {
        Self {
            test_name: test_name.into(),
            status: status.into(),
        }
    }
}
