// Tests for result collection and summary counting

use proptest::prelude::*;
use testsummary::state::{ResultCollector, RunSummary, TestStatus};

fn arb_bucket_status() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("passed"), Just("failed"), Just("skipped")]
}

fn arb_any_status() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("passed".to_string()),
        Just("failed".to_string()),
        Just("skipped".to_string()),
        Just("timedOut".to_string()),
        Just("interrupted".to_string()),
        "[a-zA-Z]{1,10}",
    ]
}

proptest! {
    #[test]
    fn prop_buckets_sum_to_total(statuses in prop::collection::vec(arb_bucket_status(), 0..50)) {
        let mut collector = ResultCollector::new();
        for (i, status) in statuses.iter().enumerate() {
            collector.record_test_end(format!("test {}", i), *status);
        }

        let report = collector.finalize();
        let summary = report.summary();
        let count = |s: &str| statuses.iter().filter(|x| **x == s).count();

        prop_assert_eq!(summary.total, summary.passed + summary.failed + summary.skipped);
        prop_assert_eq!(summary.passed, count("passed"));
        prop_assert_eq!(summary.failed, count("failed"));
        prop_assert_eq!(summary.skipped, count("skipped"));
    }

    #[test]
    fn prop_tests_follow_call_order(statuses in prop::collection::vec(arb_any_status(), 0..50)) {
        let mut collector = ResultCollector::new();
        for (i, status) in statuses.iter().enumerate() {
            collector.record_test_end(format!("test {}", i), status.as_str());
        }

        let report = collector.finalize();

        prop_assert_eq!(report.tests().len(), report.summary().total);
        for (i, outcome) in report.tests().iter().enumerate() {
            prop_assert_eq!(&outcome.test_name, &format!("test {}", i));
            prop_assert_eq!(outcome.status.as_str(), statuses[i].as_str());
        }
    }

    #[test]
    fn prop_other_status_counts_total_only(label in "[a-zA-Z]{1,10}") {
        prop_assume!(!matches!(label.as_str(), "passed" | "failed" | "skipped"));

        let mut collector = ResultCollector::new();
        collector.record_test_end("only", label.as_str());

        let result = collector.finalize();
        prop_assert_eq!(
            result.summary(),
            &RunSummary { total: 1, passed: 0, failed: 0, skipped: 0 }
        );
    }
}

#[test]
fn test_mixed_scenario() {
    // Arrange
    let mut collector = ResultCollector::new();

    // Act
    collector.record_test_end("login test", "passed");
    collector.record_test_end("logout test", "failed");
    collector.record_test_end("guest checkout", "skipped");
    let report = collector.finalize();

    // Assert
    assert_eq!(
        report.summary(),
        &RunSummary {
            total: 3,
            passed: 1,
            failed: 1,
            skipped: 1
        }
    );
    let names: Vec<&str> = report.tests().iter().map(|t| t.test_name.as_str()).collect();
    assert_eq!(names, ["login test", "logout test", "guest checkout"]);
}

#[test]
fn test_empty_run() {
    // Arrange & Act
    let report = ResultCollector::new().finalize();

    // Assert
    assert!(report.tests().is_empty());
    assert_eq!(report.summary(), &RunSummary::default());
}

#[test]
fn test_timed_out_counts_total_only() {
    // Arrange
    let mut collector = ResultCollector::new();

    // Act
    collector.record_test_end("slow test", "timedOut");
    let report = collector.finalize();

    // Assert
    assert_eq!(
        report.summary(),
        &RunSummary {
            total: 1,
            passed: 0,
            failed: 0,
            skipped: 0
        }
    );
    assert_eq!(report.tests()[0].status, TestStatus::TimedOut);
}

#[test]
fn test_duplicate_names_are_kept() {
    // Arrange
    let mut collector = ResultCollector::new();

    // Act
    collector.record_test_end("retry me", "failed");
    collector.record_test_end("retry me", "passed");
    let report = collector.finalize();

    // Assert
    assert_eq!(report.tests().len(), 2);
    assert_eq!(report.summary().failed, 1);
    assert_eq!(report.summary().passed, 1);
}
